//! Granular Hooks
//!
//! Drop-in replacements for the host's dependency-list primitives that take
//! two dependency lists instead of one:
//!
//! | Hook | Host primitive | Returns |
//! |---|---|---|
//! | [`use_granular_effect`] | [`Scope::use_effect`] | nothing |
//! | [`use_granular_layout_effect`] | [`Scope::use_layout_effect`] | nothing |
//! | [`use_granular_memo`] | [`Scope::use_memo`] | the cached value |
//! | [`use_granular_callback`] | [`Scope::use_callback`] | the cached callback |
//!
//! Every hook is called as `(scope, computation, primary, secondary)`.
//! Changes to `primary` re-run the computation. Changes to `secondary` alone
//! do not, but the next re-run sees the latest secondary values.
//!
//! Each hook claims two slots in its instance: a ref cell holding its
//! [`DepSlot`](crate::deps::DepSlot), then the host primitive itself.
//!
//! [`Scope::use_effect`]: crate::host::Scope::use_effect
//! [`Scope::use_layout_effect`]: crate::host::Scope::use_layout_effect
//! [`Scope::use_memo`]: crate::host::Scope::use_memo
//! [`Scope::use_callback`]: crate::host::Scope::use_callback

mod effect;
mod granular;
mod memo;

pub use effect::{use_granular_effect, use_granular_layout_effect};
pub use granular::use_granular_hook;
pub use memo::{use_granular_callback, use_granular_memo};

//! Host Runtime
//!
//! This module implements the component runtime that hooks plug into. It
//! provides the native primitives the granular hooks delegate to:
//!
//! - [`Scope::use_ref`]: a persistent cell surviving across renders
//! - [`Scope::use_effect`] and [`Scope::use_layout_effect`]: side effects
//!   bound to a commit phase, with optional cleanup
//! - [`Scope::use_memo`] and [`Scope::use_callback`]: cached values
//!
//! # Concepts
//!
//! ## Instances and Slots
//!
//! An [`Instance`] owns an arena of hook slots indexed by call order. Each
//! render pass walks the arena from the start through a [`Scope`].
//!
//! ## Dependency Comparison
//!
//! Native primitives take a single dependency list. They run on the first
//! render, and afterwards only when some position present in both the old
//! and the new list changed identity.
//!
//! # Threading
//!
//! Everything here is single-threaded. Instances are neither `Send` nor
//! `Sync`, and all hook state is owned by exactly one instance.

mod effect;
mod instance;
mod memo;
mod scope;

pub use effect::{cleanup, Cleanup, EffectOutput, EffectPhase};
pub use instance::Instance;
pub use scope::{HookKind, HookRef, Scope};

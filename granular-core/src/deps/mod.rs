//! Dependencies
//!
//! This module defines what a dependency is, how two dependencies are
//! compared, and how a two-tier `(primary, secondary)` dependency pair is
//! reduced to the single list a host primitive understands.
//!
//! # Concepts
//!
//! ## Identity
//!
//! Dependencies are compared by identity only (see [`Dep::is`]). Two
//! distinct allocations with equal contents are different dependencies.
//!
//! ## Effective Lists
//!
//! An [`EffectiveDeps`] is the `primary ++ secondary` list that was built on
//! the last rebuild. It is reused as-is while the primary slice is unchanged,
//! so the host primitive skips its computation even though the caller's
//! secondary values moved on.
//!
//! ## Slots
//!
//! A [`DepSlot`] is the persistent state of one hook call site. It lives in
//! a host ref cell and survives across renders of the same instance.

mod list;
mod resolver;
mod value;

pub use list::{DepList, EffectiveDeps};
pub use resolver::{resolve, DepSlot};
pub use value::{same_deps, Dep};

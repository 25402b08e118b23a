//! Granular Core
//!
//! This crate provides memoization hooks whose dependency lists are split in
//! two tiers:
//!
//! - **Primary** dependencies trigger re-evaluation when any of them changes
//!   identity.
//! - **Secondary** dependencies are captured alongside the primary ones and
//!   handed to the underlying primitive, but never trigger re-evaluation on
//!   their own.
//!
//! Four hooks are provided, one per host primitive: an effect, a layout
//! effect, a memoized value and a memoized callback. All of them share the
//! same reconciliation step ([`deps::resolve`]).
//!
//! # Architecture
//!
//! - `deps`: Dependency values, identity comparison and the resolver
//! - `host`: The component runtime the hooks plug into (hook slots, native
//!   primitives, effect phases and cleanups)
//! - `hooks`: The granular hooks themselves
//!
//! # Example
//!
//! ```rust
//! use granular_core::deps;
//! use granular_core::host::Instance;
//! use granular_core::hooks::use_granular_memo;
//!
//! let mut instance = Instance::new();
//!
//! let mut render = |query: &'static str, page_size: i64| {
//!     instance.render(|cx| {
//!         use_granular_memo(
//!             cx,
//!             || format!("{query}:{page_size}"),
//!             &deps![query],
//!             &deps![page_size],
//!         )
//!     })
//! };
//!
//! assert_eq!(render("rust", 10).unwrap(), "rust:10");
//! // Only the secondary dependency changed: the cached value is kept.
//! assert_eq!(render("rust", 20).unwrap(), "rust:10");
//! // The primary dependency changed: recomputed with the latest page size.
//! assert_eq!(render("go", 20).unwrap(), "go:20");
//! ```

pub mod config;
pub mod deps;
pub mod error;
pub mod hooks;
pub mod host;

pub use config::HostConfig;
pub use deps::{Dep, DepList, DepSlot, EffectiveDeps};
pub use error::{HookError, Result};

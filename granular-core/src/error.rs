//! Error types for the host runtime.
//!
//! The dependency resolver never fails. Errors only arise when a render pass
//! breaks the host's hook-order contract: every render of an instance must
//! call the same hooks, of the same kinds, in the same order.

use thiserror::Error;

use crate::host::HookKind;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, HookError>;

/// Errors raised by the host runtime while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// A hook slot was claimed by a different primitive than on mount.
    #[error("hook #{index} changed kind between renders: expected {expected}, found {found}")]
    OrderMismatch {
        /// Position of the hook in call order.
        index: usize,
        /// Kind recorded on mount.
        expected: HookKind,
        /// Kind requested by the current render.
        found: HookKind,
    },

    /// A hook slot holds a value of a different type than requested.
    #[error("hook #{index} ({kind}) changed value type between renders: expected {expected}")]
    TypeMismatch {
        /// Position of the hook in call order.
        index: usize,
        /// Kind of the hook.
        kind: HookKind,
        /// Type name requested by the current render.
        expected: &'static str,
    },

    /// A render called a different number of hooks than the mount pass.
    #[error("rendered {found} hooks, expected {expected}")]
    HookCountMismatch {
        /// Number of hooks claimed on mount.
        expected: usize,
        /// Number of hooks claimed by the current render.
        found: usize,
    },

    /// The instance has already been unmounted.
    #[error("cannot render an unmounted instance")]
    Unmounted,
}

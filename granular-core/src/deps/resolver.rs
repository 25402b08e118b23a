//! Granular Dependency Resolution
//!
//! Host primitives only understand a single dependency list and re-run when
//! any position changes identity. The resolver turns a `(primary, secondary)`
//! pair into that single list while keeping change detection limited to the
//! primary slice.
//!
//! # Algorithm
//!
//! 1. On the first call there is no previous list: build `primary ++ secondary`.
//!
//! 2. Otherwise compare every primary position `i` with position `i` of the
//!    previous combined list, by identity.
//!
//! 3. If every position matches, hand back the previous list untouched. The
//!    host sees the same list and skips the computation, and the secondary
//!    values passed this time are dropped.
//!
//! 4. If any position differs, build a fresh `primary ++ secondary`. The host
//!    sees a change and re-runs the computation with the latest secondary
//!    values.
//!
//! # Arity Changes
//!
//! Positions are compared against the whole previous list, and a position
//! past its end never matches. A primary list that shrinks while its
//! remaining positions still match is therefore "unchanged". Callers are
//! expected to keep both list lengths stable across renders.

use tracing::{debug, trace, warn};

use super::list::EffectiveDeps;
use super::value::Dep;

/// Compute the effective dependency list for this call.
///
/// Returns a clone of `previous` (same reference) when the primary
/// dependencies are unchanged, or a freshly built list otherwise.
pub fn resolve(previous: Option<&EffectiveDeps>, primary: &[Dep], secondary: &[Dep]) -> EffectiveDeps {
    match previous {
        Some(previous) if primary_unchanged(previous, primary) => previous.clone(),
        _ => EffectiveDeps::concat(primary, secondary),
    }
}

fn primary_unchanged(previous: &EffectiveDeps, primary: &[Dep]) -> bool {
    primary
        .iter()
        .enumerate()
        .all(|(i, dep)| previous.get(i).is_some_and(|stored| dep.is(stored)))
}

/// The persistent state of one granular hook call site.
///
/// Holds the effective list built by the last rebuild and reconciles each
/// new call against it.
#[derive(Debug, Default)]
pub struct DepSlot {
    previous: Option<EffectiveDeps>,
    warn_on_resize: bool,
}

impl DepSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn when the primary list changes length between calls.
    pub fn warn_on_resize(mut self, enabled: bool) -> Self {
        self.warn_on_resize = enabled;
        self
    }

    /// The stored effective list, if any call has happened yet.
    pub fn current(&self) -> Option<&EffectiveDeps> {
        self.previous.as_ref()
    }

    /// Reconcile a new call against the stored list.
    ///
    /// The slot is only written when the resolver produced a new list.
    pub fn reconcile(&mut self, primary: &[Dep], secondary: &[Dep]) -> EffectiveDeps {
        if let Some(previous) = &self.previous {
            if self.warn_on_resize && previous.primary().len() != primary.len() {
                warn!(
                    previous = previous.primary().len(),
                    current = primary.len(),
                    "primary dependency list changed size between renders"
                );
            }
        }

        let resolved = resolve(self.previous.as_ref(), primary, secondary);

        let unchanged = self
            .previous
            .as_ref()
            .is_some_and(|previous| previous.ptr_eq(&resolved));

        if unchanged {
            trace!(len = resolved.len(), "granular dependencies unchanged");
        } else {
            debug!(
                primary = resolved.primary().len(),
                secondary = resolved.secondary().len(),
                "granular dependencies rebuilt"
            );
            self.previous = Some(resolved.clone());
        }

        resolved
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

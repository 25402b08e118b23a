//! Render Scope
//!
//! A [`Scope`] is handed to the render function of an [`Instance`] for the
//! duration of one render pass. Every hook call claims the next slot in call
//! order, so the n-th hook of a render always sees the state left by the n-th
//! hook of the previous render.
//!
//! # Hook Order
//!
//! The mount pass creates slots. Later passes must claim exactly the same
//! sequence of hook kinds, otherwise the render fails with a [`HookError`].
//!
//! [`Instance`]: super::Instance

use std::any::{type_name, Any};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

use super::effect::PendingEffect;
use crate::deps::Dep;
use crate::error::{HookError, Result};

/// The primitive that owns a hook slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// A persistent ref cell.
    Ref,
    /// A passive-phase effect.
    Effect,
    /// A layout-phase effect.
    LayoutEffect,
    /// A memoized value.
    Memo,
    /// A memoized callback.
    Callback,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookKind::Ref => "ref",
            HookKind::Effect => "effect",
            HookKind::LayoutEffect => "layout effect",
            HookKind::Memo => "memo",
            HookKind::Callback => "callback",
        })
    }
}

/// A persistent mutable cell, shared between renders of one instance.
///
/// Writing to it never triggers a render.
pub type HookRef<T> = Rc<RefCell<T>>;

/// State stored for one hook call site.
pub(crate) struct HookSlot {
    pub(crate) kind: HookKind,
    pub(crate) state: Box<dyn Any>,
}

/// The hook cursor of one render pass.
pub struct Scope<'a> {
    slots: &'a mut Vec<HookSlot>,
    cursor: usize,
    mounting: bool,
    warn_on_resize: bool,
    pending: Vec<PendingEffect>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(slots: &'a mut Vec<HookSlot>, mounting: bool, warn_on_resize: bool) -> Self {
        Self {
            slots,
            cursor: 0,
            mounting,
            warn_on_resize,
            pending: Vec::new(),
        }
    }

    /// Whether this is the first render of the instance.
    pub fn is_mounting(&self) -> bool {
        self.mounting
    }

    /// Number of hooks claimed so far in this render.
    pub fn hook_count(&self) -> usize {
        self.cursor
    }

    /// Claim a persistent ref cell.
    ///
    /// `init` runs on mount only; later renders get the same cell back.
    pub fn use_ref<T, F>(&mut self, init: F) -> Result<HookRef<T>>
    where
        T: 'static,
        F: FnOnce() -> T,
    {
        let (_, cell) = self.claim(HookKind::Ref, || Rc::new(RefCell::new(init())))?;
        Ok(Rc::clone(cell))
    }

    /// Claim the next slot, creating it with `init` on mount.
    pub(crate) fn claim<T, F>(&mut self, kind: HookKind, init: F) -> Result<(usize, &mut T)>
    where
        T: 'static,
        F: FnOnce() -> T,
    {
        let index = self.cursor;
        self.cursor += 1;

        if index == self.slots.len() {
            if !self.mounting {
                return Err(HookError::HookCountMismatch {
                    expected: self.slots.len(),
                    found: self.cursor,
                });
            }
            self.slots.push(HookSlot {
                kind,
                state: Box::new(init()),
            });
        }

        let slot = &mut self.slots[index];
        if slot.kind != kind {
            return Err(HookError::OrderMismatch {
                index,
                expected: slot.kind,
                found: kind,
            });
        }

        let state = slot
            .state
            .downcast_mut::<T>()
            .ok_or(HookError::TypeMismatch {
                index,
                kind,
                expected: type_name::<T>(),
            })?;

        Ok((index, state))
    }

    pub(crate) fn warns_on_resize(&self) -> bool {
        self.warn_on_resize
    }

    pub(crate) fn schedule(&mut self, effect: PendingEffect) {
        self.pending.push(effect);
    }

    /// End the render pass, checking the hook count against the mount pass.
    pub(crate) fn finish(self) -> Result<Vec<PendingEffect>> {
        if !self.mounting && self.cursor != self.slots.len() {
            return Err(HookError::HookCountMismatch {
                expected: self.slots.len(),
                found: self.cursor,
            });
        }
        Ok(self.pending)
    }
}

/// Host dependency comparison for native primitives.
///
/// The first call always counts as a change. Afterwards only positions
/// present in both lists are compared.
pub(crate) fn deps_changed(
    index: usize,
    previous: Option<&[Dep]>,
    next: &[Dep],
    warn_on_resize: bool,
) -> bool {
    let Some(previous) = previous else {
        return true;
    };

    if std::ptr::eq(previous, next) {
        return false;
    }

    if warn_on_resize && previous.len() != next.len() {
        warn!(
            hook = index,
            previous = previous.len(),
            current = next.len(),
            "dependency list changed size between renders"
        );
    }

    previous.iter().zip(next).any(|(a, b)| !a.is(b))
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("cursor", &self.cursor)
            .field("slots", &self.slots.len())
            .field("mounting", &self.mounting)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps;

    #[test]
    fn mount_creates_slots_in_call_order() {
        let mut slots = Vec::new();
        let mut scope = Scope::new(&mut slots, true, false);

        scope.use_ref(|| 1).unwrap();
        scope.use_ref(|| "two").unwrap();
        assert_eq!(scope.hook_count(), 2);
        assert!(scope.finish().unwrap().is_empty());

        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|slot| slot.kind == HookKind::Ref));
    }

    #[test]
    fn refs_persist_across_passes() {
        let mut slots = Vec::new();

        let cell = Scope::new(&mut slots, true, false).use_ref(|| 10).unwrap();
        *cell.borrow_mut() += 5;

        let mut scope = Scope::new(&mut slots, false, false);
        let again = scope.use_ref(|| 0).unwrap();
        assert!(Rc::ptr_eq(&cell, &again));
        assert_eq!(*again.borrow(), 15);
    }

    #[test]
    fn extra_hook_after_mount_is_rejected() {
        let mut slots = Vec::new();
        Scope::new(&mut slots, true, false).use_ref(|| ()).unwrap();

        let mut scope = Scope::new(&mut slots, false, false);
        scope.use_ref(|| ()).unwrap();
        assert_eq!(
            scope.use_ref(|| ()).unwrap_err(),
            HookError::HookCountMismatch { expected: 1, found: 2 }
        );
    }

    #[test]
    fn missing_hook_is_rejected_on_finish() {
        let mut slots = Vec::new();
        let mut scope = Scope::new(&mut slots, true, false);
        scope.use_ref(|| ()).unwrap();
        scope.use_ref(|| ()).unwrap();
        scope.finish().unwrap();

        let mut scope = Scope::new(&mut slots, false, false);
        scope.use_ref(|| ()).unwrap();
        assert_eq!(
            scope.finish().unwrap_err(),
            HookError::HookCountMismatch { expected: 2, found: 1 }
        );
    }

    #[test]
    fn changed_value_type_is_rejected() {
        let mut slots = Vec::new();
        Scope::new(&mut slots, true, false).use_ref(|| 1u8).unwrap();

        let err = Scope::new(&mut slots, false, false)
            .use_ref(|| "text")
            .unwrap_err();
        assert!(matches!(
            err,
            HookError::TypeMismatch { index: 0, kind: HookKind::Ref, .. }
        ));
    }

    #[test]
    fn host_comparison_checks_common_prefix() {
        let previous = deps![1, "a"];

        assert!(deps_changed(0, None, &previous, false));
        assert!(!deps_changed(0, Some(&previous), &previous, false));
        assert!(!deps_changed(0, Some(&previous), &deps![1, "a"], false));
        assert!(deps_changed(0, Some(&previous), &deps![1, "b"], false));
        assert!(!deps_changed(0, Some(&previous), &deps![1], true));
        assert!(!deps_changed(0, Some(&previous), &deps![1, "a", true], true));
    }
}

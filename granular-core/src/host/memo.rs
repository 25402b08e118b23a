//! Memoization Primitives
//!
//! `use_memo` caches the result of a factory, `use_callback` caches a value
//! (usually a shared closure) as-is. Both hand back the cached value until
//! their dependency list changes.
//!
//! Cached values are returned by clone. Use `Rc` values when identity of the
//! returned value matters: the clone then shares the cached allocation.

use std::rc::Rc;

use super::scope::{deps_changed, HookKind, Scope};
use crate::deps::Dep;
use crate::error::Result;

/// Cached value and the dependencies it was computed with.
pub(crate) struct MemoSlot<T> {
    deps: Option<Rc<[Dep]>>,
    value: Option<T>,
}

impl<T> Default for MemoSlot<T> {
    fn default() -> Self {
        Self {
            deps: None,
            value: None,
        }
    }
}

impl<T: Clone> MemoSlot<T> {
    fn get_or_replace<F>(&mut self, index: usize, deps: &[Dep], warn_on_resize: bool, make: F) -> T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = &self.value {
            if !deps_changed(index, self.deps.as_deref(), deps, warn_on_resize) {
                return value.clone();
            }
        }

        let value = make();
        self.deps = Some(Rc::from(deps));
        self.value = Some(value.clone());
        value
    }
}

impl Scope<'_> {
    /// Return the cached result of `factory`, recomputing when `deps` changed.
    pub fn use_memo<T, F>(&mut self, factory: F, deps: &[Dep]) -> Result<T>
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        let warn_on_resize = self.warns_on_resize();
        let (index, slot) = self.claim(HookKind::Memo, MemoSlot::<T>::default)?;
        Ok(slot.get_or_replace(index, deps, warn_on_resize, factory))
    }

    /// Return the cached `callback`, replacing it when `deps` changed.
    ///
    /// The callback is never invoked.
    pub fn use_callback<T>(&mut self, callback: T, deps: &[Dep]) -> Result<T>
    where
        T: Clone + 'static,
    {
        let warn_on_resize = self.warns_on_resize();
        let (index, slot) = self.claim(HookKind::Callback, MemoSlot::<T>::default)?;
        Ok(slot.get_or_replace(index, deps, warn_on_resize, move || callback))
    }
}

//! Granular memoization.

use crate::deps::{Dep, DepSlot};
use crate::error::Result;
use crate::host::Scope;

/// Memoized value with two-tier dependencies.
///
/// Returns the cached result of the last `factory` call while `primary` is
/// unchanged, whatever happened to `secondary`. Otherwise calls `factory`,
/// caches and returns its result.
pub fn use_granular_memo<T, F>(
    cx: &mut Scope<'_>,
    factory: F,
    primary: &[Dep],
    secondary: &[Dep],
) -> Result<T>
where
    T: Clone + 'static,
    F: FnOnce() -> T,
{
    let warn = cx.warns_on_resize();
    let slot = cx.use_ref(|| DepSlot::new().warn_on_resize(warn))?;
    let deps = slot.borrow_mut().reconcile(primary, secondary);
    cx.use_memo(factory, &deps)
}

/// Memoized callback with two-tier dependencies.
///
/// Returns the previously cached `callback` while `primary` is unchanged,
/// otherwise caches and returns the new one. The callback is never invoked.
pub fn use_granular_callback<T>(
    cx: &mut Scope<'_>,
    callback: T,
    primary: &[Dep],
    secondary: &[Dep],
) -> Result<T>
where
    T: Clone + 'static,
{
    let warn = cx.warns_on_resize();
    let slot = cx.use_ref(|| DepSlot::new().warn_on_resize(warn))?;
    let deps = slot.borrow_mut().reconcile(primary, secondary);
    cx.use_callback(callback, &deps)
}

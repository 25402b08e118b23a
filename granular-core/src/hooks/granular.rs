//! Two-tier dependencies for arbitrary host primitives.

use crate::deps::{Dep, DepSlot};
use crate::error::Result;
use crate::host::Scope;

/// Give any dependency-list primitive two-tier dependencies.
///
/// `hook` is called with the scope, `computation` and the effective
/// dependency list for this render. It must itself treat the list with
/// identity comparison for the secondary tier to be ignored.
///
/// ```rust
/// use granular_core::deps;
/// use granular_core::host::{Instance, Scope};
/// use granular_core::hooks::use_granular_hook;
///
/// let mut instance = Instance::new();
/// let value = instance
///     .render(|cx| {
///         use_granular_hook(cx, Scope::use_memo, || 42, &deps!["key"], &deps![1])
///     })
///     .unwrap();
/// assert_eq!(value, 42);
/// ```
pub fn use_granular_hook<'s, H, C, R>(
    cx: &mut Scope<'s>,
    hook: H,
    computation: C,
    primary: &[Dep],
    secondary: &[Dep],
) -> Result<R>
where
    H: FnOnce(&mut Scope<'s>, C, &[Dep]) -> Result<R>,
{
    let warn = cx.warns_on_resize();
    let slot = cx.use_ref(|| DepSlot::new().warn_on_resize(warn))?;
    let deps = slot.borrow_mut().reconcile(primary, secondary);
    hook(cx, computation, deps.as_slice())
}

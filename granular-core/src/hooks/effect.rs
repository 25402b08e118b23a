//! Granular effects.

use crate::deps::{Dep, DepSlot};
use crate::error::Result;
use crate::host::{EffectOutput, Scope};

/// Passive-phase effect with two-tier dependencies.
///
/// `effect` runs after the first render, and again after any render whose
/// `primary` dependencies changed identity. A cleanup returned by the
/// previous run is invoked first. Changes to `secondary` alone never re-run
/// the effect.
pub fn use_granular_effect<F, O>(
    cx: &mut Scope<'_>,
    effect: F,
    primary: &[Dep],
    secondary: &[Dep],
) -> Result<()>
where
    F: FnOnce() -> O + 'static,
    O: EffectOutput,
{
    let warn = cx.warns_on_resize();
    let slot = cx.use_ref(|| DepSlot::new().warn_on_resize(warn))?;
    let deps = slot.borrow_mut().reconcile(primary, secondary);
    cx.use_effect(effect, &deps)
}

/// Layout-phase effect with two-tier dependencies.
///
/// Same contract as [`use_granular_effect`], bound to the layout phase.
pub fn use_granular_layout_effect<F, O>(
    cx: &mut Scope<'_>,
    effect: F,
    primary: &[Dep],
    secondary: &[Dep],
) -> Result<()>
where
    F: FnOnce() -> O + 'static,
    O: EffectOutput,
{
    let warn = cx.warns_on_resize();
    let slot = cx.use_ref(|| DepSlot::new().warn_on_resize(warn))?;
    let deps = slot.borrow_mut().reconcile(primary, secondary);
    cx.use_layout_effect(effect, &deps)
}

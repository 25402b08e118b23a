//! Effect Primitives
//!
//! An effect is a side-effecting computation that runs after a render has
//! finished, and only when its dependency list changed.
//!
//! # Phases
//!
//! Effects bind to one of two commit phases:
//!
//! - [`EffectPhase::Layout`] effects run first, right after the render pass.
//! - [`EffectPhase::Passive`] effects run after every layout effect of the
//!   same commit.
//!
//! Within a phase, all pending cleanups run before any effect, each in hook
//! call order.
//!
//! # Cleanup
//!
//! An effect may return a [`Cleanup`]. It runs exactly once: either before
//! the next run of the same effect, or when the instance is unmounted.

use std::fmt;
use std::rc::Rc;

use super::scope::{deps_changed, HookKind, Scope};
use crate::deps::Dep;
use crate::error::Result;

/// A cleanup callback returned by an effect.
pub type Cleanup = Box<dyn FnOnce()>;

/// Box a closure as a [`Cleanup`].
pub fn cleanup<F>(f: F) -> Cleanup
where
    F: FnOnce() + 'static,
{
    Box::new(f)
}

/// Values an effect may return.
pub trait EffectOutput {
    /// Convert into an optional cleanup callback.
    fn into_cleanup(self) -> Option<Cleanup>;
}

impl EffectOutput for () {
    fn into_cleanup(self) -> Option<Cleanup> {
        None
    }
}

impl EffectOutput for Cleanup {
    fn into_cleanup(self) -> Option<Cleanup> {
        Some(self)
    }
}

impl EffectOutput for Option<Cleanup> {
    fn into_cleanup(self) -> Option<Cleanup> {
        self
    }
}

/// The commit phase an effect is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectPhase {
    /// Runs before passive effects.
    Layout,
    /// Runs after layout effects.
    Passive,
}

impl EffectPhase {
    pub(crate) fn hook_kind(self) -> HookKind {
        match self {
            EffectPhase::Layout => HookKind::LayoutEffect,
            EffectPhase::Passive => HookKind::Effect,
        }
    }
}

/// Committed state of one effect call site.
#[derive(Default)]
pub(crate) struct EffectSlot {
    pub(crate) deps: Option<Rc<[Dep]>>,
    pub(crate) cleanup: Option<Cleanup>,
}

/// An effect scheduled by a render, waiting for commit.
pub(crate) struct PendingEffect {
    pub(crate) index: usize,
    pub(crate) phase: EffectPhase,
    pub(crate) deps: Rc<[Dep]>,
    pub(crate) run: Box<dyn FnOnce() -> Option<Cleanup>>,
}

impl fmt::Debug for PendingEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingEffect")
            .field("index", &self.index)
            .field("phase", &self.phase)
            .field("deps", &self.deps)
            .finish()
    }
}

impl Scope<'_> {
    /// Run `effect` in the passive phase when `deps` changed.
    pub fn use_effect<F, O>(&mut self, effect: F, deps: &[Dep]) -> Result<()>
    where
        F: FnOnce() -> O + 'static,
        O: EffectOutput,
    {
        self.use_phase_effect(EffectPhase::Passive, effect, deps)
    }

    /// Run `effect` in the layout phase when `deps` changed.
    pub fn use_layout_effect<F, O>(&mut self, effect: F, deps: &[Dep]) -> Result<()>
    where
        F: FnOnce() -> O + 'static,
        O: EffectOutput,
    {
        self.use_phase_effect(EffectPhase::Layout, effect, deps)
    }

    fn use_phase_effect<F, O>(&mut self, phase: EffectPhase, effect: F, deps: &[Dep]) -> Result<()>
    where
        F: FnOnce() -> O + 'static,
        O: EffectOutput,
    {
        let warn_on_resize = self.warns_on_resize();
        let (index, slot) = self.claim(phase.hook_kind(), EffectSlot::default)?;

        if !deps_changed(index, slot.deps.as_deref(), deps, warn_on_resize) {
            return Ok(());
        }

        self.schedule(PendingEffect {
            index,
            phase,
            deps: Rc::from(deps),
            run: Box::new(move || effect().into_cleanup()),
        });
        Ok(())
    }
}

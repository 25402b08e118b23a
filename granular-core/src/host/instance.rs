//! Component Instances
//!
//! An [`Instance`] is one instantiation of a component: the hook slots that
//! persist between its renders, plus its mount state.
//!
//! # Lifecycle
//!
//! 1. The first [`Instance::render`] is the mount pass. Hooks create their
//!    slots in call order.
//!
//! 2. Every render ends with a commit: layout effects whose dependencies
//!    changed run first, then passive effects.
//!
//! 3. [`Instance::unmount`] (or dropping the instance) runs every
//!    outstanding cleanup once and releases all hook state.
//!
//! A render that returns an error commits nothing. A failed mount pass is
//! discarded entirely, so the next render mounts again.

use tracing::{debug, debug_span};

use super::effect::{EffectPhase, EffectSlot, PendingEffect};
use super::scope::{HookSlot, Scope};
use crate::config::HostConfig;
use crate::error::{HookError, Result};

/// One instantiation of a component.
pub struct Instance {
    config: HostConfig,
    slots: Vec<HookSlot>,
    renders: usize,
    unmounted: bool,
}

impl Instance {
    /// Create an unmounted instance with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create an unmounted instance with the given configuration.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            renders: 0,
            unmounted: false,
        }
    }

    /// The configuration of this instance.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Number of successful renders so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Whether the instance has rendered and not been unmounted yet.
    pub fn is_mounted(&self) -> bool {
        self.renders > 0 && !self.unmounted
    }

    /// Run one render pass followed by its commit.
    pub fn render<R, F>(&mut self, render: F) -> Result<R>
    where
        F: FnOnce(&mut Scope<'_>) -> Result<R>,
    {
        if self.unmounted {
            return Err(HookError::Unmounted);
        }

        let span = debug_span!("render", label = %self.config.label, pass = self.renders + 1);
        let _enter = span.enter();

        let mounting = self.renders == 0;
        let mut scope = Scope::new(&mut self.slots, mounting, self.config.warn_on_dependency_resize);

        let pending = render(&mut scope).and_then(|output| Ok((output, scope.finish()?)));
        let (output, pending) = match pending {
            Ok(done) => done,
            Err(err) => {
                debug!(error = %err, "render failed, nothing committed");
                if mounting {
                    self.slots.clear();
                }
                return Err(err);
            }
        };

        self.renders += 1;
        self.commit(pending);
        Ok(output)
    }

    /// Run every outstanding cleanup and release hook state.
    ///
    /// Layout cleanups run before passive ones. Calling this more than once
    /// has no further effect.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;

        debug!(label = %self.config.label, hooks = self.slots.len(), "unmounting");

        for phase in [EffectPhase::Layout, EffectPhase::Passive] {
            let kind = phase.hook_kind();
            for (index, slot) in self.slots.iter_mut().enumerate() {
                if slot.kind != kind {
                    continue;
                }
                if let Some(cleanup) = slot
                    .state
                    .downcast_mut::<EffectSlot>()
                    .and_then(|effect| effect.cleanup.take())
                {
                    debug!(hook = index, ?phase, "running cleanup on unmount");
                    cleanup();
                }
            }
        }

        self.slots.clear();
    }

    fn commit(&mut self, pending: Vec<PendingEffect>) {
        let (layout, passive): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .partition(|effect| effect.phase == EffectPhase::Layout);

        self.run_effects(layout);
        self.run_effects(passive);
    }

    fn run_effects(&mut self, batch: Vec<PendingEffect>) {
        for effect in &batch {
            if let Some(cleanup) = self.effect_slot(effect.index).and_then(|slot| slot.cleanup.take()) {
                debug!(hook = effect.index, phase = ?effect.phase, "running cleanup");
                cleanup();
            }
        }

        for effect in batch {
            debug!(hook = effect.index, phase = ?effect.phase, "running effect");
            let cleanup = (effect.run)();
            if let Some(slot) = self.effect_slot(effect.index) {
                slot.deps = Some(effect.deps);
                slot.cleanup = cleanup;
            }
        }
    }

    fn effect_slot(&mut self, index: usize) -> Option<&mut EffectSlot> {
        self.slots
            .get_mut(index)
            .and_then(|slot| slot.state.downcast_mut::<EffectSlot>())
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("label", &self.config.label)
            .field("hooks", &self.slots.len())
            .field("renders", &self.renders)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps;
    use crate::host::cleanup;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn logger(log: &Log, entry: &str) -> impl Fn() + 'static {
        let log = log.clone();
        let entry = entry.to_string();
        move || log.borrow_mut().push(entry.clone())
    }

    #[test]
    fn instance_tracks_lifecycle() {
        let mut instance = Instance::new();
        assert!(!instance.is_mounted());

        instance.render(|_| Ok(())).unwrap();
        assert!(instance.is_mounted());
        assert_eq!(instance.render_count(), 1);

        instance.unmount();
        assert!(!instance.is_mounted());
        assert_eq!(instance.render(|_| Ok(())), Err(HookError::Unmounted));
    }

    #[test]
    fn layout_effects_run_before_passive_effects() {
        let log: Log = Rc::default();
        let mut instance = Instance::new();

        instance
            .render(|cx| {
                let passive = logger(&log, "passive");
                let layout = logger(&log, "layout");
                cx.use_effect(move || passive(), &[])?;
                cx.use_layout_effect(move || layout(), &[])
            })
            .unwrap();

        assert_eq!(*log.borrow(), ["layout", "passive"]);
    }

    #[test]
    fn cleanups_run_before_effects_within_a_phase() {
        let log: Log = Rc::default();
        let mut instance = Instance::new();

        let mut render = |value: i32| {
            let log = log.clone();
            instance.render(move |cx| {
                for name in ["first", "second"] {
                    let run = logger(&log, &format!("run {name} {value}"));
                    let clean = logger(&log, &format!("clean {name} {value}"));
                    cx.use_effect(
                        move || {
                            run();
                            cleanup(clean)
                        },
                        &deps![value],
                    )?;
                }
                Ok(())
            })
        };

        render(1).unwrap();
        render(2).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                "run first 1",
                "run second 1",
                "clean first 1",
                "clean second 1",
                "run first 2",
                "run second 2",
            ]
        );
    }

    #[test]
    fn unmount_runs_each_cleanup_once() {
        let log: Log = Rc::default();
        let mut instance = Instance::new();

        instance
            .render(|cx| {
                let passive = logger(&log, "passive cleanup");
                let layout = logger(&log, "layout cleanup");
                cx.use_effect(move || cleanup(passive), &[])?;
                cx.use_layout_effect(move || cleanup(layout), &[])
            })
            .unwrap();
        assert!(log.borrow().is_empty());

        instance.unmount();
        instance.unmount();
        drop(instance);

        assert_eq!(*log.borrow(), ["layout cleanup", "passive cleanup"]);
    }

    #[test]
    fn dropping_a_mounted_instance_unmounts_it() {
        let log: Log = Rc::default();
        let mut instance = Instance::new();
        instance
            .render(|cx| {
                let done = logger(&log, "cleanup");
                cx.use_effect(move || cleanup(done), &[])
            })
            .unwrap();

        drop(instance);
        assert_eq!(*log.borrow(), ["cleanup"]);
    }

    #[test]
    fn failed_render_commits_nothing() {
        let log: Log = Rc::default();
        let mut instance = Instance::new();

        instance
            .render(|cx| {
                cx.use_ref(|| 0)?;
                Ok(())
            })
            .unwrap();

        let err = instance
            .render(|cx| {
                let ran = logger(&log, "effect");
                cx.use_effect(move || ran(), &[])?;
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, HookError::OrderMismatch { index: 0, .. }));
        assert!(log.borrow().is_empty());
        assert_eq!(instance.render_count(), 1);
    }

    #[test]
    fn failed_mount_is_discarded() {
        let mut instance = Instance::new();

        let err = instance
            .render(|cx| {
                cx.use_ref(|| 1)?;
                Err::<(), _>(HookError::Unmounted)
            })
            .unwrap_err();
        assert_eq!(err, HookError::Unmounted);
        assert!(!instance.is_mounted());

        let value = instance
            .render(|cx| {
                let cell = cx.use_ref(|| "fresh")?;
                let value = *cell.borrow();
                Ok(value)
            })
            .unwrap();
        assert_eq!(value, "fresh");
    }
}

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{bail, Result};

use crate::animation::TwistTimeline;

/// Handle to one mutable uniform slot owned by a scene object.
///
/// Clones share the slot. The demo is single-threaded and frame-driven:
/// the animator writes the slot once per tick and the renderer reads it
/// once while filling its uniform buffer, so the value is consistent
/// within a frame.
#[derive(Debug, Clone)]
pub struct UniformHandle {
    slot: Rc<Cell<f32>>,
}

impl UniformHandle {
    fn new(initial: f32) -> Self {
        Self {
            slot: Rc::new(Cell::new(initial)),
        }
    }

    pub fn set(&self, value: f32) {
        self.slot.set(value);
    }

    pub fn get(&self) -> f32 {
        self.slot.get()
    }
}

/// Published animatable uniforms, keyed by name.
///
/// The object that actually owns the uniform storage registers its slot
/// here at setup time; animators resolve by name. Resolving a name nothing
/// published is an error rather than a silent no-op, so wiring an
/// animation to the wrong target is caught immediately instead of
/// producing a motionless scene.
#[derive(Debug, Default)]
pub struct UniformRegistry {
    entries: HashMap<String, UniformHandle>,
}

impl UniformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a uniform slot with its initial value, returning the
    /// owner's handle. Re-registering a name replaces the previous slot.
    pub fn register(&mut self, name: &str, initial: f32) -> UniformHandle {
        let handle = UniformHandle::new(initial);
        self.entries.insert(name.to_string(), handle.clone());
        handle
    }

    /// Look up a published uniform for animation.
    pub fn resolve(&self, name: &str) -> Result<UniformHandle> {
        match self.entries.get(name) {
            Some(handle) => Ok(handle.clone()),
            None => bail!("no animatable property named '{}' at this binding target", name),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// A timeline wired to the uniform slot it drives.
#[derive(Debug)]
pub struct TwistBinding {
    timeline: TwistTimeline,
    handle: UniformHandle,
}

impl TwistBinding {
    /// Wire `timeline` to the uniform `name`. Fails if no object has
    /// published that uniform.
    pub fn attach(registry: &UniformRegistry, name: &str, timeline: TwistTimeline) -> Result<Self> {
        let handle = registry.resolve(name)?;
        Ok(Self { timeline, handle })
    }

    /// Advance the timeline by the frame delta and push the new value
    /// through the handle. Returns the value for display.
    pub fn advance(&mut self, delta: f32) -> f32 {
        let value = self.timeline.tick(delta);
        self.handle.set(value);
        value
    }

    pub fn timeline(&self) -> &TwistTimeline {
        &self.timeline
    }
}

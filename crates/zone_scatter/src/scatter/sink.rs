//! Placements and the sinks that receive them.
//!
//! The renderer side of a scatter tool (instanced meshes, sprites, debug markers)
//! implements [`InstanceSink`]. A run clears the sink and then adds one [`Placement`] per
//! generated point.
use glam::{Affine3A, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type AssetId = String;

/// A placed instance of an asset at a world position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Asset to instantiate.
    pub asset_id: AssetId,
    /// World position, after projection onto the surface.
    pub position: Vec3,
}

impl Placement {
    pub fn new(asset_id: impl Into<AssetId>, position: Vec3) -> Self {
        Self {
            asset_id: asset_id.into(),
            position,
        }
    }

    /// Translation-only world transform of the instance.
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_translation(self.position)
    }
}

/// Receiver of generated placements.
pub trait InstanceSink {
    fn add_instance(&mut self, placement: Placement);

    /// Removes all instances. Calling it on an empty sink does nothing.
    fn clear_instances(&mut self);

    fn add_instances<I>(&mut self, placements: I)
    where
        Self: Sized,
        I: IntoIterator<Item = Placement>,
    {
        for p in placements {
            self.add_instance(p);
        }
    }
}

/// A no-op sink.
impl InstanceSink for () {
    #[inline]
    fn add_instance(&mut self, _placement: Placement) {}

    #[inline]
    fn clear_instances(&mut self) {}
}

impl InstanceSink for Vec<Placement> {
    #[inline]
    fn add_instance(&mut self, placement: Placement) {
        self.push(placement);
    }

    #[inline]
    fn clear_instances(&mut self) {
        self.clear();
    }
}

/// A sink that forwards placements to a user-provided closure.
///
/// Clearing is forwarded to an optional second closure.
pub struct FnInstanceSink<F>
where
    F: FnMut(Placement),
{
    f: F,
    on_clear: Option<Box<dyn FnMut()>>,
}

impl<F> FnInstanceSink<F>
where
    F: FnMut(Placement),
{
    pub fn new(f: F) -> Self {
        Self { f, on_clear: None }
    }

    pub fn with_on_clear(mut self, on_clear: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(on_clear));
        self
    }
}

impl<F> InstanceSink for FnInstanceSink<F>
where
    F: FnMut(Placement),
{
    #[inline]
    fn add_instance(&mut self, placement: Placement) {
        (self.f)(placement);
    }

    fn clear_instances(&mut self) {
        if let Some(on_clear) = self.on_clear.as_mut() {
            on_clear();
        }
    }
}

/// A sink that collects placements in a `Vec`.
#[derive(Debug, Default)]
pub struct VecInstanceSink {
    placements: Vec<Placement>,
    clears: usize,
}

impl VecInstanceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            placements: Vec::with_capacity(cap),
            clears: 0,
        }
    }

    pub fn into_inner(self) -> Vec<Placement> {
        self.placements
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    /// Positions of the collected placements, in insertion order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.placements.iter().map(|p| p.position).collect()
    }

    /// How often the sink has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl InstanceSink for VecInstanceSink {
    #[inline]
    fn add_instance(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    fn clear_instances(&mut self) {
        self.placements.clear();
        self.clears += 1;
    }
}

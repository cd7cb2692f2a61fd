//! Scene state management
//!
//! Owns the authoritative, index-addressed list of cubes. Every mutation
//! swaps in a freshly built vector so nothing downstream aliases the old one.

mod cube_ops;
mod persistence;

use shared::Cube;

/// Authoritative cube list plus a change counter
pub struct SceneState {
    cubes: Vec<Cube>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(shared::default_cubes())
    }
}

impl SceneState {
    pub fn new(cubes: Vec<Cube>) -> Self {
        Self { cubes, version: 0 }
    }

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn get(&self, index: usize) -> Option<&Cube> {
        self.cubes.get(index)
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Swap in a new sequence
    fn commit(&mut self, next: Vec<Cube>) {
        self.cubes = next;
        self.version += 1;
    }
}

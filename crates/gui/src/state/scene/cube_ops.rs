//! Cube CRUD operations

use shared::Cube;

use super::SceneState;

impl SceneState {
    /// Replace the cube at `index`, leaving every other entry untouched.
    /// Returns false when the index is out of range.
    pub fn replace_cube(&mut self, index: usize, cube: Cube) -> bool {
        if index >= self.cubes.len() {
            tracing::warn!("replace_cube: index {index} out of range ({})", self.cubes.len());
            return false;
        }
        let mut next = self.cubes.clone();
        next[index] = cube;
        self.commit(next);
        true
    }

    /// Append a cube and return its index
    pub fn push_cube(&mut self, cube: Cube) -> usize {
        let mut next = Vec::with_capacity(self.cubes.len() + 1);
        next.extend_from_slice(&self.cubes);
        next.push(cube);
        self.commit(next);
        self.cubes.len() - 1
    }

    /// Remove the cube at `index`; later cubes shift down by one
    pub fn remove_cube(&mut self, index: usize) -> Option<Cube> {
        if index >= self.cubes.len() {
            tracing::warn!("remove_cube: index {index} out of range ({})", self.cubes.len());
            return None;
        }
        let removed = self.cubes[index].clone();
        let next = self
            .cubes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c.clone())
            .collect();
        self.commit(next);
        Some(removed)
    }
}

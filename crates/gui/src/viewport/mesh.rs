use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }

    pub fn extend(&mut self, other: &LineMeshData) {
        self.vertices.extend_from_slice(&other.vertices);
    }
}

// ── Primitive generation ─────────────────────────────────────

/// Axis-aligned box centred on the origin
pub fn cube(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            push_vert(&mut vertices, v.x, v.y, v.z, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Horizontal square of side `size` at y = 0, facing up
pub fn ground_plane(size: f32, color: [f32; 3]) -> MeshData {
    let h = size * 0.5;
    let mut vertices = Vec::with_capacity(4 * 9);
    push_vert(&mut vertices, -h, 0.0, h, Vec3::Y, color);
    push_vert(&mut vertices, h, 0.0, h, Vec3::Y, color);
    push_vert(&mut vertices, h, 0.0, -h, Vec3::Y, color);
    push_vert(&mut vertices, -h, 0.0, -h, Vec3::Y, color);
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

// ── Line helpers ─────────────────────────────────────────────

/// Axes helper: X red, Y green, Z blue, from the origin
pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

/// The 12 edges of an axis-aligned box
pub fn box_outline(min: Vec3, max: Vec3, color: [f32; 4]) -> LineMeshData {
    let mut vertices = Vec::with_capacity(24 * 7);
    for [a, b] in box_edges(min, max) {
        push_line_vert(&mut vertices, a.x, a.y, a.z, color);
        push_line_vert(&mut vertices, b.x, b.y, b.z, color);
    }
    LineMeshData { vertices }
}

/// Edge list of an axis-aligned box as point pairs
pub fn box_edges(min: Vec3, max: Vec3) -> [[Vec3; 2]; 12] {
    let c = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { max.x } else { min.x },
            if y { max.y } else { min.y },
            if z { max.z } else { min.z },
        )
    };
    [
        // Bottom ring
        [c(false, false, false), c(true, false, false)],
        [c(true, false, false), c(true, false, true)],
        [c(true, false, true), c(false, false, true)],
        [c(false, false, true), c(false, false, false)],
        // Top ring
        [c(false, true, false), c(true, true, false)],
        [c(true, true, false), c(true, true, true)],
        [c(true, true, true), c(false, true, true)],
        [c(false, true, true), c(false, true, false)],
        // Verticals
        [c(false, false, false), c(false, true, false)],
        [c(true, false, false), c(true, true, false)],
        [c(true, false, true), c(true, true, true)],
        [c(false, false, true), c(false, true, true)],
    ]
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[px, py, pz, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

pub(crate) fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_counts() {
        let m = cube(1.0, 1.0, 1.0, [1.0; 3]);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.indices.len(), 36);
    }

    #[test]
    fn test_unit_cube_extent() {
        let m = cube(1.0, 1.0, 1.0, [1.0; 3]);
        for v in m.vertices.chunks(9) {
            for coord in &v[..3] {
                assert_eq!(coord.abs(), 0.5);
            }
        }
    }

    #[test]
    fn test_upload_bytes_match_layout() {
        let m = cube(1.0, 2.0, 3.0, [0.2, 0.4, 0.6]);
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&m.vertices);
        assert_eq!(vertex_bytes.len(), m.vertex_count() * 9 * 4);
        assert_eq!(&vertex_bytes[..4], &m.vertices[0].to_ne_bytes());

        let index_bytes: &[u8] = bytemuck::cast_slice(&m.indices);
        assert_eq!(index_bytes.len(), 36 * 4);

        let lines = axes(5.0);
        let line_bytes: &[u8] = bytemuck::cast_slice(&lines.vertices);
        assert_eq!(line_bytes.len(), lines.vertex_count() * 7 * 4);
    }

    #[test]
    fn test_ground_plane_faces_up() {
        let m = ground_plane(10.0, [0.8; 3]);
        assert_eq!(m.vertex_count(), 4);
        for v in m.vertices.chunks(9) {
            assert_eq!(v[1], 0.0);
            assert_eq!(&v[3..6], &[0.0, 1.0, 0.0]);
            assert_eq!(v[0].abs(), 5.0);
        }
    }

    #[test]
    fn test_axes_length() {
        let a = axes(5.0);
        assert_eq!(a.vertex_count(), 6);
        // X tip
        assert_eq!(&a.vertices[7..10], &[5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_box_outline_edges() {
        let o = box_outline(Vec3::splat(-1.0), Vec3::splat(1.0), [1.0; 4]);
        assert_eq!(o.vertex_count(), 24);
    }
}

use glam::{Mat4, Vec3};
use glow::HasContext;

use super::camera::OrbitCamera;
use super::gizmo::{build_gizmo_lines, GIZMO_LENGTH};
use super::mesh::{self, LineMeshData, MeshData};
use super::scene_graph::{HelperNode, RenderList};

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering the viewport
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    /// Background color RGB
    pub bg_color: [u8; 3],
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

struct GpuLines {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

// ── Main GL renderer ─────────────────────────────────────────

/// Draws a [`RenderList`]: every cube instances one shared unit box,
/// scaled and tinted through uniforms.
pub struct GlRenderer {
    mesh_program: glow::Program,
    line_program: glow::Program,
    unit_cube: GpuMesh,
    ground: GpuMesh,
    /// Ground size the plane was built for
    ground_size: f32,
    /// Axes helper lines, rebuilt when the helper size changes
    axes: Option<(f32, GpuLines)>,
    /// Per-frame overlay lines (gizmo and selection outline)
    overlay: Option<GpuLines>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Self {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG);
        let line_program = compile_program(gl, LINE_VERT, LINE_FRAG);

        // White so the per-instance tint is the final colour
        let unit_cube = upload_mesh(gl, &mesh::cube(1.0, 1.0, 1.0, [1.0, 1.0, 1.0]));
        let ground = upload_mesh(gl, &mesh::ground_plane(1.0, [1.0, 1.0, 1.0]));

        Self {
            mesh_program,
            line_program,
            unit_cube,
            ground,
            ground_size: 1.0,
            axes: None,
            overlay: None,
        }
    }

    /// Upload whatever in `list` changed since the last frame
    pub fn sync(&mut self, gl: &glow::Context, list: &RenderList, selection_color: [u8; 3]) {
        self.ground_size = list.ground.size;

        let axes_size = list.helpers.iter().find_map(|h| match h {
            HelperNode::Axes { size } => Some(*size),
        });
        let stale = match (&self.axes, axes_size) {
            (Some((cached, _)), Some(size)) => *cached != size,
            (Some(_), None) => true,
            (None, _) => axes_size.is_some(),
        };
        if stale {
            if let Some((_, old)) = self.axes.take() {
                delete_lines(gl, &old);
            }
            if let Some(size) = axes_size {
                self.axes = Some((size, upload_lines(gl, &mesh::axes(size))));
            }
        }

        if let Some(old) = self.overlay.take() {
            delete_lines(gl, &old);
        }
        let overlay = overlay_lines(list, selection_color);
        if overlay.vertex_count() > 0 {
            self.overlay = Some(upload_lines(gl, &overlay));
        }
    }

    /// Render the scene
    pub fn paint(
        &self,
        gl: &glow::Context,
        camera: &OrbitCamera,
        list: &RenderList,
        params: &RenderParams,
    ) {
        let aspect = params.viewport[2] / params.viewport[3];
        let vp = camera.view_projection(aspect);

        unsafe {
            gl.viewport(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.scissor(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.enable(glow::SCISSOR_TEST);

            // Clear viewport area with configured background color
            gl.clear_color(
                params.bg_color[0] as f32 / 255.0,
                params.bg_color[1] as f32 / 255.0,
                params.bg_color[2] as f32 / 255.0,
                1.0,
            );
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);

            // Lit meshes: ground, then cubes
            gl.use_program(Some(self.mesh_program));
            set_uniform_mat4(gl, self.mesh_program, "u_view_proj", &vp);
            set_uniform_vec3(gl, self.mesh_program, "u_light_pos", &list.lighting.point_light);
            set_uniform_f32(gl, self.mesh_program, "u_ambient", list.lighting.ambient);

            let ground_model = Mat4::from_scale(Vec3::new(self.ground_size, 1.0, self.ground_size));
            set_uniform_mat4(gl, self.mesh_program, "u_model", &ground_model);
            set_uniform_vec3(gl, self.mesh_program, "u_tint", &Vec3::from(list.ground.color));
            // Keep the ground under coplanar cube faces
            gl.enable(glow::POLYGON_OFFSET_FILL);
            gl.polygon_offset(1.0, 1.0);
            draw_mesh(gl, &self.ground);
            gl.disable(glow::POLYGON_OFFSET_FILL);

            for instance in &list.meshes {
                let model = Mat4::from_scale_rotation_translation(
                    instance.scale,
                    glam::Quat::IDENTITY,
                    instance.position,
                );
                set_uniform_mat4(gl, self.mesh_program, "u_model", &model);
                set_uniform_vec3(gl, self.mesh_program, "u_tint", &Vec3::from(instance.color));
                draw_mesh(gl, &self.unit_cube);
            }

            // Helper lines
            gl.use_program(Some(self.line_program));
            set_uniform_mat4(gl, self.line_program, "u_mvp", &vp);
            if let Some((_, ref axes)) = self.axes {
                gl.line_width(2.0);
                draw_lines(gl, axes);
                gl.line_width(1.0);
            }

            // Gizmo and outline on top (no depth test so they're always visible)
            if let Some(ref overlay) = self.overlay {
                gl.disable(glow::DEPTH_TEST);
                gl.line_width(3.0);
                draw_lines(gl, overlay);
                gl.line_width(1.0);
                gl.enable(glow::DEPTH_TEST);
            }

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.mesh_program);
            gl.delete_program(self.line_program);
        }
        delete_mesh(gl, &self.unit_cube);
        delete_mesh(gl, &self.ground);
        if let Some((_, axes)) = self.axes.take() {
            delete_lines(gl, &axes);
        }
        if let Some(overlay) = self.overlay.take() {
            delete_lines(gl, &overlay);
        }
    }
}

/// Selection outline plus translation gizmo for one frame
fn overlay_lines(list: &RenderList, selection_color: [u8; 3]) -> LineMeshData {
    let mut lines = LineMeshData::default();
    let [r, g, b] = shared::rgb_to_f32(selection_color);
    for instance in list.meshes.iter().filter(|m| m.selected) {
        // Slightly inflated so the outline does not z-fight the faces
        let half = instance.scale * 0.5 + Vec3::splat(0.02);
        lines.extend(&mesh::box_outline(
            instance.position - half,
            instance.position + half,
            [r, g, b, 1.0],
        ));
    }
    if let Some((center, active)) = list.gizmo {
        lines.extend(&build_gizmo_lines(center, GIZMO_LENGTH, active));
    }
    lines
}

// ── GPU upload ───────────────────────────────────────────────

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> GpuMesh {
    unsafe {
        let vao = gl.create_vertex_array().unwrap();
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = 9 * 4; // 9 floats * 4 bytes
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // normal: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * 4);
        // color: location 2
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_f32(2, 3, glow::FLOAT, false, stride, 6 * 4);

        let ibo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&data.indices),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);

        GpuMesh {
            vao,
            vbo,
            ibo,
            index_count: data.indices.len() as i32,
        }
    }
}

fn upload_lines(gl: &glow::Context, data: &LineMeshData) -> GpuLines {
    unsafe {
        let vao = gl.create_vertex_array().unwrap();
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = 7 * 4; // 7 floats * 4 bytes
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // color: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 4, glow::FLOAT, false, stride, 3 * 4);

        gl.bind_vertex_array(None);

        GpuLines {
            vao,
            vbo,
            vertex_count: data.vertex_count() as i32,
        }
    }
}

fn delete_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    unsafe {
        gl.delete_vertex_array(mesh.vao);
        gl.delete_buffer(mesh.vbo);
        gl.delete_buffer(mesh.ibo);
    }
}

fn delete_lines(gl: &glow::Context, lines: &GpuLines) {
    unsafe {
        gl.delete_vertex_array(lines.vao);
        gl.delete_buffer(lines.vbo);
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

unsafe fn draw_lines(gl: &glow::Context, lines: &GpuLines) {
    gl.bind_vertex_array(Some(lines.vao));
    gl.draw_arrays(glow::LINES, 0, lines.vertex_count);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

fn compile_program(gl: &glow::Context, vert_src: &str, frag_src: &str) -> glow::Program {
    unsafe {
        let program = gl.create_program().unwrap();

        let vert = gl.create_shader(glow::VERTEX_SHADER).unwrap();
        gl.shader_source(vert, vert_src);
        gl.compile_shader(vert);
        if !gl.get_shader_compile_status(vert) {
            let log = gl.get_shader_info_log(vert);
            tracing::error!("Vertex shader error: {log}");
        }

        let frag = gl.create_shader(glow::FRAGMENT_SHADER).unwrap();
        gl.shader_source(frag, frag_src);
        gl.compile_shader(frag);
        if !gl.get_shader_compile_status(frag) {
            let log = gl.get_shader_info_log(frag);
            tracing::error!("Fragment shader error: {log}");
        }

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            tracing::error!("Program link error: {log}");
        }

        gl.delete_shader(vert);
        gl.delete_shader(frag);

        program
    }
}

// ── Uniform setters ──────────────────────────────────────────

fn set_uniform_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &Mat4) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
    }
}

fn set_uniform_vec3(gl: &glow::Context, program: glow::Program, name: &str, v: &Vec3) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_3_f32(loc.as_ref(), v.x, v.y, v.z);
    }
}

fn set_uniform_f32(gl: &glow::Context, program: glow::Program, name: &str, v: f32) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_1_f32(loc.as_ref(), v);
    }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_view_proj;
uniform mat4 u_model;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec3 a_color;

out vec3 v_world;
out vec3 v_normal;
out vec3 v_color;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    gl_Position = u_view_proj * world;
    v_world = world.xyz;
    // Models are axis-aligned boxes: scaling never tilts a face normal
    v_normal = a_normal;
    v_color = a_color;
}
"#;

const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_light_pos;
uniform vec3 u_tint;
uniform float u_ambient;

in vec3 v_world;
in vec3 v_normal;
in vec3 v_color;

out vec4 frag_color;

void main() {
    vec3 n = normalize(v_normal);
    vec3 to_light = normalize(u_light_pos - v_world);
    float diffuse = max(dot(n, to_light), 0.0);
    float light = min(u_ambient + diffuse, 1.0);
    frag_color = vec4(v_color * u_tint * light, 1.0);
}
"#;

const LINE_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;

out vec4 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

const LINE_FRAG: &str = r#"#version 330 core
in vec4 v_color;
out vec4 frag_color;

void main() {
    frag_color = v_color;
}
"#;

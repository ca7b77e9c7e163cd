//! Animation state and geometry of the decorative background object.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! steps a [`FloatingObject`] once per animation frame and uploads the
//! resulting model matrices together with the [`Camera`] to the GPU.

use crate::config::SceneConfig;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &SceneConfig, width: f32, height: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, config.camera_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: config.fov_y_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
        };
        cam.set_viewport(width, height);
        cam
    }

    /// Track the viewport aspect ratio; degenerate sizes keep the previous value.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Rotation (radians about x and y) and vertical float offset of one cube.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeTransform {
    pub rotation: Vec2,
    pub position_y: f32,
}

impl CubeTransform {
    /// Translation after an intrinsic x-then-y rotation (`Rx * Ry`).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.position_y, 0.0))
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
    }
}

/// Map a pointer position in window pixels to normalized device coordinates,
/// `x` in `[-1, 1]` left to right and `y` in `[-1, 1]` bottom to top.
#[inline]
pub fn pointer_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

/// Outer wireframe cube and inner translucent cube, spun every frame.
#[derive(Clone, Debug)]
pub struct FloatingObject {
    config: SceneConfig,
    outer: CubeTransform,
    inner: CubeTransform,
    pointer: Vec2,
}

impl FloatingObject {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            outer: CubeTransform::default(),
            inner: CubeTransform::default(),
            pointer: Vec2::ZERO,
        }
    }

    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.pointer = ndc;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Advance one animation frame. `now_ms` is wall-clock time in milliseconds
    /// and only drives the float phase.
    pub fn step(&mut self, now_ms: f64) {
        let c = &self.config;
        self.outer.rotation += Vec2::splat(c.outer_spin);
        self.inner.rotation += Vec2::splat(c.inner_spin);

        let float_y = ((now_ms * c.float_rate_per_ms).sin() as f32) * c.float_amplitude;
        self.outer.position_y = float_y;
        self.inner.position_y = float_y;

        // pointer tilt accumulates on the outer cube only
        self.outer.rotation.x += self.pointer.y * c.pointer_gain;
        self.outer.rotation.y += self.pointer.x * c.pointer_gain;
    }

    pub fn outer(&self) -> CubeTransform {
        self.outer
    }

    pub fn inner(&self) -> CubeTransform {
        self.inner
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Zero for unlit line geometry.
    pub normal: [f32; 3],
}

/// The 8 corners of an axis-aligned cube of edge `size` centered at the origin,
/// paired with the 12 edges as a line list.
pub fn wire_cube(size: f32) -> (Vec<Vertex>, Vec<u16>) {
    let h = size * 0.5;
    let vertices = (0..8u8)
        .map(|i| Vertex {
            position: [
                if i & 1 == 0 { -h } else { h },
                if i & 2 == 0 { -h } else { h },
                if i & 4 == 0 { -h } else { h },
            ],
            normal: [0.0; 3],
        })
        .collect();
    // corners differing in exactly one bit share an edge
    let mut indices = Vec::with_capacity(24);
    for a in 0..8u16 {
        for bit in [1u16, 2, 4] {
            if a & bit == 0 {
                indices.push(a);
                indices.push(a | bit);
            }
        }
    }
    (vertices, indices)
}

/// A cube of edge `size` with per-face normals as a counter-clockwise triangle list.
pub fn solid_cube(size: f32) -> (Vec<Vertex>, Vec<u16>) {
    let h = size * 0.5;
    // (normal, tangent u, tangent v) with u x v == normal
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let n3 = Vec3::from(n);
        let u3 = Vec3::from(u);
        let v3 = Vec3::from(v);
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n3 + u3 * su + v3 * sv) * h;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

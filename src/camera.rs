//! Camera model and per-pixel ray direction cache.
//!
//! The camera sits at the camera-space origin looking down -Z; a
//! camera-to-world matrix places it in the scene. Ray directions depend only
//! on the frame size, field of view, and that matrix, so the renderer
//! computes them once and reuses the cache until the camera moves.

use glam::{Mat4, Vec3A};

/// Pinhole camera: frame size, vertical field of view, world placement.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Camera-to-world transform; identity leaves the camera at the world
    /// origin looking down -Z.
    pub camera_to_world: Mat4,
}

impl Camera {
    /// Create a camera with the identity world transform.
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        Self {
            width,
            height,
            fov,
            camera_to_world: Mat4::IDENTITY,
        }
    }

    /// Half-height of the image plane at unit distance, derived from the
    /// field of view.
    fn scale(&self) -> f32 {
        (self.fov.to_radians() / 2.0).tan()
    }

    /// Camera position in world space.
    ///
    /// Full homogeneous point transform of the camera-space origin, including
    /// the perspective divide, matching the direction transform below.
    pub fn origin(&self) -> Vec3A {
        self.camera_to_world.project_point3a(Vec3A::ZERO)
    }

    /// Build the per-pixel world-space ray direction cache.
    ///
    /// Index is `row * width + col`, row-major from the top-left pixel. Every
    /// direction is unit length. Pure and deterministic; call again only when
    /// the camera transform, FOV, or frame size changes.
    pub fn ray_directions(&self) -> Vec<Vec3A> {
        let scale = self.scale();
        let aspect = self.width as f32 / self.height as f32;
        let mut directions = Vec::with_capacity(self.width as usize * self.height as usize);

        for j in 0..self.height {
            let y = (1.0 - 2.0 * (j as f32 + 0.5) / self.height as f32) * scale;
            for i in 0..self.width {
                let x = (2.0 * (i as f32 + 0.5) / self.width as f32 - 1.0) * aspect * scale;
                let dir = self
                    .camera_to_world
                    .transform_vector3a(Vec3A::new(x, y, -1.0));
                directions.push(dir.normalize());
            }
        }

        directions
    }
}

//! Recursive shading kernel and the per-frame fork-join renderer.
//!
//! `shade` is a pure function of (scene, ray, depth); the renderer exploits
//! that by splitting the pixel buffer into disjoint contiguous partitions and
//! shading each on its own worker with direct writes, no locks. A frame is
//! atomic: `render_frame` returns only after every worker has joined.

use std::f32::consts::PI;
use std::ops::Range;

use glam::{Mat4, Vec3A};
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::camera::Camera;
use crate::color::{Color, BACKGROUND};
use crate::config::{Config, ConfigError};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::sphere::Hit;

/// Hits beyond this distance are treated as misses.
const VISIBLE_RANGE: Interval = Interval::new(0.0, 1000.0);

/// Shading parameters fixed for the duration of one frame.
#[derive(Debug, Clone, Copy)]
pub struct Shading {
    /// Maximum reflection recursion depth
    pub max_depth: u32,
    /// Geometric attenuation base for bounce contributions, in (0, 1)
    pub decay: f32,
}

/// Scan all spheres and keep the nearest hit within the visible range.
///
/// First sphere found at minimal distance wins; with a fixed scene order the
/// result is deterministic.
fn nearest_hit(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;
    for sphere in &scene.spheres {
        if let Some(hit) = sphere.intersect(ray) {
            if VISIBLE_RANGE.surrounds(hit.distance)
                && nearest.is_none_or(|n| hit.distance < n.distance)
            {
                nearest = Some(hit);
            }
        }
    }
    nearest
}

/// Shade one ray: direct illumination from all lights plus a bounded
/// reflection recursion.
///
/// The per-light factor is `acos(to_hit . normal) / pi` scaled by the light
/// brightness, where `to_hit` points from the light to the hit. This is an
/// angular falloff, not a Lambertian cosine term: a light along the surface
/// normal gives factor 1, a grazing light 0.5, a light behind the surface 0.
/// It is kept as-is because swapping in a cosine law changes the whole look
/// of the render.
///
/// Bounce contributions are attenuated by `decay^(depth + 1)`, so recursion
/// terminates strictly at `max_depth` and deeper bounces fade geometrically.
/// All accumulation saturates per channel.
pub fn shade(scene: &Scene, shading: &Shading, ray: &Ray, depth: u32) -> Color {
    let Some(hit) = nearest_hit(scene, ray) else {
        return BACKGROUND;
    };

    let mut out = BACKGROUND;
    for light in &scene.lights {
        // A light exactly on the surface point has no defined direction; skip
        // it rather than letting NaN reach the pixel buffer.
        let Some(to_hit) = (hit.position - light.position).try_normalize() else {
            continue;
        };
        let factor = to_hit.dot(hit.normal).clamp(-1.0, 1.0).acos() / PI;
        out += hit.color * (factor * light.brightness);
    }

    if depth < shading.max_depth {
        let bounce = shade(
            scene,
            shading,
            &Ray::new(hit.position, hit.reflection),
            depth + 1,
        );
        out += bounce * shading.decay.powi(depth as i32 + 1);
    }

    out
}

/// Split `pixels` indices into `workers` contiguous ranges.
///
/// All ranges share the same base length; the division remainder is attached
/// to the last range so every pixel is covered.
fn partition(pixels: usize, workers: usize) -> Vec<Range<usize>> {
    let base = pixels / workers;
    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for worker in 0..workers {
        let len = if worker == workers - 1 {
            pixels - start
        } else {
            base
        };
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Real-time recursive ray tracer over an animated sphere scene.
///
/// Owns the scene, the camera with its ray-direction cache, and the RGBA
/// output buffer. All mutation (animation, camera moves) happens strictly
/// between frames; during `render_frame` the scene is read-only and each
/// worker writes a disjoint slice of the buffer.
pub struct Renderer {
    config: Config,
    scene: Scene,
    camera: Camera,
    origin: Vec3A,
    directions: Vec<Vec3A>,
    pixels: Vec<u8>,
}

impl Renderer {
    /// Create a renderer with a freshly generated random scene.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut ChaCha20Rng::from_rng(&mut rng()))
    }

    /// Create a renderer generating the scene from the given RNG, so a
    /// seeded run is fully reproducible.
    pub fn with_rng(config: Config, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = Scene::generate(&config, rng);
        let camera = Camera::new(config.width, config.height, config.fov);
        Ok(Self {
            origin: camera.origin(),
            directions: camera.ray_directions(),
            pixels: vec![0; config.pixel_count() * 4],
            config,
            scene,
            camera,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Read access to the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Replace the scene, e.g. with handcrafted content instead of the
    /// generated one. Must not be called while a frame is rendering (the
    /// borrow checker enforces this).
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    /// Move the camera and rebuild the ray-direction cache.
    pub fn set_camera_transform(&mut self, camera_to_world: Mat4) {
        self.camera.camera_to_world = camera_to_world;
        self.origin = self.camera.origin();
        self.directions = self.camera.ray_directions();
    }

    /// Advance the scene animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.scene.advance(dt);
    }

    /// Flip the travel direction of every sphere.
    ///
    /// The caller decides the cadence, e.g. every N frames.
    pub fn toggle_animation_direction(&mut self) {
        self.scene.toggle_directions();
    }

    /// Render one frame and return the RGBA buffer.
    ///
    /// Row-major, origin top-left, alpha always 255. Workers are spawned and
    /// joined within this call (fork-join per frame); the buffer is never
    /// observable half-rendered. Any worker count produces byte-identical
    /// output because shading is pure per pixel.
    pub fn render_frame(&mut self) -> &[u8] {
        let shading = Shading {
            max_depth: self.config.max_depth,
            decay: self.config.reflection_decay,
        };
        let origin = self.origin;
        let scene = &self.scene;
        let directions = &self.directions;
        let ranges = partition(directions.len(), self.config.workers);

        let buffer = self.pixels.as_mut_slice();
        rayon::scope(|s| {
            let mut rest = buffer;
            for range in ranges {
                let (chunk, tail) = rest.split_at_mut(range.len() * 4);
                rest = tail;
                s.spawn(move |_| {
                    for (offset, px) in chunk.chunks_exact_mut(4).enumerate() {
                        let ray = Ray::new(origin, directions[range.start + offset]);
                        let color = shade(scene, &shading, &ray, 0);
                        px[0] = color.r;
                        px[1] = color.g;
                        px[2] = color.b;
                        px[3] = 255;
                    }
                });
            }
        });

        &self.pixels
    }
}

//! Scene model: spheres, point lights, random generation, and animation.
//!
//! The scene is generated once at startup and then only mutated between
//! frames (position advance, direction toggling), never during a render.

use glam::Vec3A;
use rand::Rng;

use crate::color::Color;
use crate::config::{Config, SceneBounds};
use crate::sphere::Sphere;

/// Point light with position and brightness.
///
/// Immutable after generation; lights do not move.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Position in world coordinates
    pub position: Vec3A,
    /// Brightness factor in (0, 1]
    pub brightness: f32,
}

/// All renderable content: sphere and light collections with stable order.
///
/// Scan order is fixed at generation time, which makes nearest-hit tie
/// breaking and therefore whole frames deterministic.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Animated spheres
    pub spheres: Vec<Sphere>,
    /// Static point lights
    pub lights: Vec<Light>,
}

fn sample(rng: &mut impl Rng, range: (f32, f32)) -> f32 {
    rng.random_range(range.0..range.1)
}

fn sample_box(
    rng: &mut impl Rng,
    x: (f32, f32),
    y: (f32, f32),
    z: (f32, f32),
) -> Vec3A {
    Vec3A::new(sample(rng, x), sample(rng, y), sample(rng, z))
}

impl Scene {
    /// Generate a random scene from the configured bounds.
    ///
    /// One-shot initializer: sphere positions are sampled uniformly inside
    /// the sphere box, radii in the configured range, velocities with
    /// non-negative components below `velocity_max` so motion stays visually
    /// contained. Takes an explicit RNG so scenes are reproducible from a
    /// seed.
    pub fn generate(config: &Config, rng: &mut impl Rng) -> Self {
        let b: &SceneBounds = &config.bounds;

        let spheres = (0..config.sphere_count)
            .map(|_| {
                let position = sample_box(rng, b.sphere_x, b.sphere_y, b.sphere_z);
                let radius = sample(rng, b.radius);
                let color = Color::new(rng.random(), rng.random(), rng.random());
                let velocity = sample_box(
                    rng,
                    (0.0, b.velocity_max),
                    (0.0, b.velocity_max),
                    (0.0, b.velocity_max),
                );
                Sphere::new(position, radius, color, velocity)
            })
            .collect();

        let lights = (0..config.light_count)
            .map(|_| Light {
                position: sample_box(rng, b.light_x, b.light_y, b.light_z),
                brightness: sample(rng, b.brightness),
            })
            .collect();

        Self { spheres, lights }
    }

    /// Advance every sphere by `dt` seconds of its velocity.
    pub fn advance(&mut self, dt: f32) {
        for sphere in &mut self.spheres {
            sphere.advance(dt);
        }
    }

    /// Flip the travel direction of every sphere simultaneously.
    ///
    /// The cadence (e.g. every N frames) is the caller's policy.
    pub fn toggle_directions(&mut self) {
        for sphere in &mut self.spheres {
            sphere.toggle_direction();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const EPS: f32 = 1e-5;

    fn generate_default(seed: u64) -> Scene {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Scene::generate(&Config::default(), &mut rng)
    }

    #[test]
    fn test_generation_respects_bounds() {
        let config = Config::default();
        let scene = generate_default(7);
        assert_eq!(scene.spheres.len(), config.sphere_count);
        assert_eq!(scene.lights.len(), config.light_count);

        let b = config.bounds;
        for s in &scene.spheres {
            assert!(s.position.x >= b.sphere_x.0 && s.position.x < b.sphere_x.1);
            assert!(s.position.y >= b.sphere_y.0 && s.position.y < b.sphere_y.1);
            assert!(s.position.z >= b.sphere_z.0 && s.position.z < b.sphere_z.1);
            assert!(s.radius >= b.radius.0 && s.radius < b.radius.1);
            assert!(s.velocity.min_element() >= 0.0);
            assert!(s.velocity.max_element() < b.velocity_max);
            assert!(s.forward);
        }
        for l in &scene.lights {
            assert!(l.brightness >= b.brightness.0 && l.brightness < b.brightness.1);
        }
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let a = generate_default(42);
        let b = generate_default(42);
        for (sa, sb) in a.spheres.iter().zip(&b.spheres) {
            assert_eq!(sa.position, sb.position);
            assert_eq!(sa.radius, sb.radius);
            assert_eq!(sa.color, sb.color);
        }
    }

    #[test]
    fn test_advance_is_additive() {
        let mut split = generate_default(3);
        let mut whole = split.clone();

        split.advance(0.25);
        split.advance(0.75);
        whole.advance(1.0);

        for (a, b) in split.spheres.iter().zip(&whole.spheres) {
            assert!((a.position - b.position).length() < EPS);
        }
    }

    #[test]
    fn test_toggle_reverses_displacement() {
        let sphere = Sphere::new(
            Vec3A::new(1.0, 2.0, 3.0),
            1.0,
            Color::new(1, 2, 3),
            Vec3A::new(0.1, 0.2, 0.3),
        );
        let mut forward = Scene {
            spheres: vec![sphere.clone()],
            lights: Vec::new(),
        };
        let mut reversed = forward.clone();

        forward.advance(0.5);
        let displacement = forward.spheres[0].position - sphere.position;

        reversed.toggle_directions();
        reversed.advance(0.5);
        let back = reversed.spheres[0].position - sphere.position;

        assert!((displacement + back).length() < EPS);
    }
}

//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection via the reduced quadratic formula and
//! carries the per-frame animation state (velocity and travel direction).

use glam::Vec3A;

use crate::color::Color;
use crate::ray::Ray;

/// Ray-sphere intersection information.
///
/// Transient result of one intersection test, consumed immediately by the
/// shading kernel and never stored.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Distance along the ray to the intersection point
    pub distance: f32,
    /// Point where the ray intersects the sphere
    pub position: Vec3A,
    /// Surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Mirror-reflected ray direction (unit vector for unit incident rays)
    pub reflection: Vec3A,
    /// Color of the sphere that was hit
    pub color: Color,
}

/// Sphere primitive with animation state.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub position: Vec3A,

    /// Radius of the sphere, always positive (validated at scene setup).
    pub radius: f32,

    /// Flat surface color used by the shading kernel.
    pub color: Color,

    /// Per-second displacement applied by [`Sphere::advance`].
    pub velocity: Vec3A,

    /// Travel direction flag; `advance` adds velocity when true, subtracts
    /// when false.
    pub forward: bool,
}

impl Sphere {
    /// Create a new sphere moving forward along its velocity.
    pub fn new(position: Vec3A, radius: f32, color: Color, velocity: Vec3A) -> Self {
        Self {
            position,
            radius,
            color,
            velocity,
            forward: true,
        }
    }

    /// Test the ray against this sphere, returning the nearest intersection.
    ///
    /// Solves `|O + tD - C|^2 = r^2` with `p = D.(O-C)` and
    /// `q = |O-C|^2 - r^2`, giving roots `t = -p +/- sqrt(p^2 - q)` for unit
    /// `D`. Only the near root is considered: if it lies behind the origin
    /// the test misses, so a camera inside a sphere sees through it rather
    /// than hitting the back wall.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let o_minus_c = ray.origin - self.position;

        let p = ray.direction.dot(o_minus_c);
        let q = o_minus_c.length_squared() - self.radius * self.radius;

        let discriminant = p * p - q;
        if discriminant < 0.0 {
            return None;
        }

        let distance = -p - discriminant.sqrt();
        if distance < 0.0 {
            return None;
        }

        let position = ray.at(distance);
        let normal = (position - self.position) / self.radius;
        Some(Hit {
            distance,
            position,
            normal,
            reflection: reflect(ray.direction, normal),
            color: self.color,
        })
    }

    /// Advance the animation by `dt` seconds along the current direction.
    pub fn advance(&mut self, dt: f32) {
        if self.forward {
            self.position += self.velocity * dt;
        } else {
            self.position -= self.velocity * dt;
        }
    }

    /// Flip the travel direction.
    pub fn toggle_direction(&mut self) {
        self.forward = !self.forward;
    }
}

/// Reflect a direction off a surface with the given unit normal.
pub fn reflect(direction: Vec3A, normal: Vec3A) -> Vec3A {
    direction - 2.0 * direction.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn unit_sphere_at(z: f32) -> Sphere {
        Sphere::new(Vec3A::new(0.0, 0.0, z), 1.0, Color::new(255, 0, 0), Vec3A::ZERO)
    }

    #[test]
    fn test_ray_through_center() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let hit = sphere.intersect(&ray).unwrap();
        // Near surface at z = -4, so t = 4
        assert!((hit.distance - 4.0).abs() < EPS);
        assert!((hit.position - Vec3A::new(0.0, 0.0, -4.0)).length() < EPS);
        assert!((hit.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < EPS);
    }

    #[test]
    fn test_grazing_ray() {
        let sphere = unit_sphere_at(-5.0);
        // Offset by exactly the radius: the discriminant collapses to zero
        // and the single root sits at the sphere's equator, t = 5.
        let dir = Vec3A::new(0.0, 0.0, -1.0);
        let ray = Ray::new(Vec3A::new(1.0, 0.0, 0.0), dir);
        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Vec3A::new(3.0, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_sees_through() {
        // Near root is behind the origin; the far root is deliberately not
        // taken, so the test reports a miss.
        let sphere = Sphere::new(Vec3A::ZERO, 2.0, Color::new(0, 255, 0), Vec3A::ZERO);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_reflection_mirror_law() {
        let sphere = unit_sphere_at(-5.0);
        // ~6.4 degrees off-axis, well inside the ~11.5 degree silhouette.
        let dir = Vec3A::new(0.1, 0.05, -1.0).normalize();
        let ray = Ray::new(Vec3A::ZERO, dir);
        let hit = sphere.intersect(&ray).unwrap();

        assert!((hit.reflection.length() - 1.0).abs() < EPS);
        let incoming = dir.dot(hit.normal);
        let outgoing = hit.reflection.dot(hit.normal);
        assert!((incoming + outgoing).abs() < EPS);
    }

    #[test]
    fn test_advance_and_toggle() {
        let mut sphere = Sphere::new(
            Vec3A::ZERO,
            1.0,
            Color::new(10, 10, 10),
            Vec3A::new(1.0, 2.0, 3.0),
        );
        sphere.advance(0.5);
        assert!((sphere.position - Vec3A::new(0.5, 1.0, 1.5)).length() < EPS);

        sphere.toggle_direction();
        sphere.advance(0.5);
        assert!(sphere.position.length() < EPS);
    }
}

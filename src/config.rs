//! Renderer configuration with documented defaults and up-front validation.
//!
//! All tunables live here so the render path operates on validated data and
//! never has to fail. `Config::default()` mirrors the classic demo setup:
//! 8 spheres, 2 lights, 60 degree FOV, 1280x720, 8 workers.

use thiserror::Error;

/// Configuration rejected at renderer construction.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Frame dimensions must both be non-zero.
    #[error("frame size must be non-zero, got {width}x{height}")]
    EmptyFrame {
        /// Requested frame width
        width: u32,
        /// Requested frame height
        height: u32,
    },

    /// At least one render worker is required.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// Field of view must be a usable pinhole angle.
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    /// Sphere radii must be positive and the range well ordered.
    #[error("sphere radius range [{min}, {max}) must be positive and ordered")]
    InvalidRadiusRange {
        /// Lower radius bound
        min: f32,
        /// Upper radius bound
        max: f32,
    },

    /// Reflection decay outside (0, 1) either blows up or kills all bounces.
    #[error("reflection decay must be in (0, 1), got {0}")]
    InvalidDecay(f32),

    /// Light brightness must stay within (0, 1].
    #[error("brightness range ({min}, {max}] must lie within (0, 1]")]
    InvalidBrightnessRange {
        /// Lower brightness bound
        min: f32,
        /// Upper brightness bound
        max: f32,
    },
}

/// Axis-aligned sampling ranges used by scene generation.
///
/// Each pair is a half-open `[min, max)` range per axis; velocity components
/// are sampled in `[0, velocity_max)`.
#[derive(Debug, Clone, Copy)]
pub struct SceneBounds {
    /// Sphere center x range
    pub sphere_x: (f32, f32),
    /// Sphere center y range
    pub sphere_y: (f32, f32),
    /// Sphere center z range
    pub sphere_z: (f32, f32),
    /// Sphere radius range
    pub radius: (f32, f32),
    /// Upper bound for each velocity component
    pub velocity_max: f32,
    /// Light position x range
    pub light_x: (f32, f32),
    /// Light position y range
    pub light_y: (f32, f32),
    /// Light position z range
    pub light_z: (f32, f32),
    /// Light brightness range
    pub brightness: (f32, f32),
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            sphere_x: (-5.0, 5.0),
            sphere_y: (-3.0, 3.0),
            sphere_z: (-30.0, -10.0),
            radius: (0.5, 1.5),
            velocity_max: 0.5,
            light_x: (-5.0, 5.0),
            light_y: (-20.0, 20.0),
            light_z: (-30.0, -10.0),
            brightness: (0.7, 1.0),
        }
    }
}

/// Full renderer configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Output frame width in pixels
    pub width: u32,
    /// Output frame height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Number of spheres to generate
    pub sphere_count: usize,
    /// Number of point lights to generate
    pub light_count: usize,
    /// Number of fork-join render workers per frame
    pub workers: usize,
    /// Maximum reflection recursion depth
    pub max_depth: u32,
    /// Geometric attenuation base for reflection bounces, in (0, 1)
    pub reflection_decay: f32,
    /// Scene generation sampling ranges
    pub bounds: SceneBounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov: 60.0,
            sphere_count: 8,
            light_count: 2,
            workers: 8,
            max_depth: 5,
            reflection_decay: 0.6,
            bounds: SceneBounds::default(),
        }
    }
}

impl Config {
    /// Validate the configuration, rejecting anything the render path
    /// cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyFrame {
                width: self.width,
                height: self.height,
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        let (rmin, rmax) = self.bounds.radius;
        if !(rmin > 0.0 && rmax > rmin) {
            return Err(ConfigError::InvalidRadiusRange { min: rmin, max: rmax });
        }
        if !(self.reflection_decay > 0.0 && self.reflection_decay < 1.0) {
            return Err(ConfigError::InvalidDecay(self.reflection_decay));
        }
        let (bmin, bmax) = self.bounds.brightness;
        if !(bmin > 0.0 && bmax >= bmin && bmax <= 1.0) {
            return Err(ConfigError::InvalidBrightnessRange { min: bmin, max: bmax });
        }
        Ok(())
    }

    /// Total number of pixels per frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_size_rejected() {
        let cfg = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyFrame { .. })));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let cfg = Config {
            workers: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoWorkers));
    }

    #[test]
    fn test_bad_fov_rejected() {
        for fov in [0.0, -10.0, 180.0, f32::NAN] {
            let cfg = Config {
                fov,
                ..Config::default()
            };
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidFov(_))));
        }
    }

    #[test]
    fn test_bad_radius_range_rejected() {
        let mut cfg = Config::default();
        cfg.bounds.radius = (0.0, 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRadiusRange { .. })
        ));
        cfg.bounds.radius = (2.0, 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRadiusRange { .. })
        ));
    }

    #[test]
    fn test_bad_decay_rejected() {
        for decay in [0.0, 1.0, 1.5] {
            let cfg = Config {
                reflection_decay: decay,
                ..Config::default()
            };
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidDecay(_))));
        }
    }
}

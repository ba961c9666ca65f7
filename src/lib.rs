//! Sunshine real-time ray tracer
//!
//! Renders an animated scene of moving spheres lit by point lights into an
//! RGBA pixel buffer via recursive ray tracing, one fork-join parallel pass
//! per frame. Window/display handling is the caller's job; the crate only
//! fills buffers.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod color;
pub mod config;
pub mod interval;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod tracer;

pub use config::{Config, ConfigError};
pub use tracer::Renderer;

use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use sunshine::{Config, Renderer};

/// Build the renderer configuration from command line arguments.
fn build_config(args: &Args) -> Config {
    Config {
        width: args.width,
        height: args.height,
        fov: args.fov,
        sphere_count: args.spheres,
        light_count: args.lights,
        workers: args.workers,
        max_depth: args.max_depth,
        reflection_decay: args.decay,
        ..Config::default()
    }
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Sunshine - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Frame: {}x{}, {} spheres, {} lights, {} workers, depth {}",
        args.width, args.height, args.spheres, args.lights, args.workers, args.max_depth
    );

    let config = build_config(&args);
    let renderer = match args.seed {
        Some(seed) => {
            info!("Generating scene from seed {}", seed);
            Renderer::with_rng(config, &mut ChaCha20Rng::seed_from_u64(seed))
        }
        None => Renderer::new(config),
    };
    let mut renderer = match renderer {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // A window shell would run exactly this loop: measure dt, advance the
    // animation, render, hand the buffer to the display.
    let pb = ProgressBar::new(args.frames);
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

    let run_start = Instant::now();
    let mut last_tick = Instant::now();
    let mut render_time = std::time::Duration::ZERO;

    for frame in 0..args.frames {
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f32();
        last_tick = now;

        renderer.update(dt);
        if args.toggle_interval > 0 && frame > 0 && frame % args.toggle_interval == 0 {
            renderer.toggle_animation_direction();
        }

        let frame_start = Instant::now();
        renderer.render_frame();
        let elapsed = frame_start.elapsed();
        render_time += elapsed;
        debug!("frame {} rendered in {:.2?}", frame, elapsed);
        pb.inc(1);
    }
    pb.finish();

    let total = run_start.elapsed();
    if args.frames > 0 {
        let avg = render_time / args.frames as u32;
        info!(
            "Rendered {} frames in {:.2?} (avg {:.2?}/frame, {:.1} fps)",
            args.frames,
            total,
            avg,
            1.0 / avg.as_secs_f64()
        );
    }

    if let Some(path) = &args.output {
        save_frame(&mut renderer, path);
    }
}

/// Write the current frame out as an RGBA PNG.
fn save_frame(renderer: &mut Renderer, path: &str) {
    let (width, height) = (renderer.width(), renderer.height());
    let pixels = renderer.render_frame().to_vec();
    let image = match image::RgbaImage::from_raw(width, height, pixels) {
        Some(image) => image,
        None => {
            log::error!("Pixel buffer does not match {}x{} frame", width, height);
            std::process::exit(1);
        }
    };
    match image.save(path) {
        Ok(()) => info!("Saved frame to {}", path),
        Err(e) => {
            log::error!("Failed to save {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

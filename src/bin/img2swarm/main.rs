// img2swarm - Headless driver for the pixel swarm effect
//
// Pipeline:
//   1. Load image, center it on a transparent surface
//   2. Sample the surface into particles
//   3. Run the frame loop (clear, draw, update) with a scripted pointer
//   4. Optionally scatter at a given frame
//   5. Dump every Nth frame as PNG
//
// Usage: cargo run --bin img2swarm -- <image> [--width N] [--height N] [--frames N] ...

mod args;
mod export;
mod pointer;

use pixel_swarm::config::EffectConfig;
use pixel_swarm::render::Framebuffer;
use pixel_swarm::sampler::load_centered;
use pixel_swarm::sim::Effect;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use args::PointerMode;
use pointer::Orbit;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pixel_swarm=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = args::parse(&argv)?;

    let seed = args.seed.unwrap_or_else(pixel_swarm::entropy_seed);

    info!(image = %args.image.display(), w = args.width, h = args.height, seed, "loading");
    let pixels = load_centered(&args.image, args.width, args.height)?;

    let config = EffectConfig::default().with_gap(args.gap).with_radius(args.radius);
    let mut effect = Effect::new(args.width, args.height, config, seed);
    let count = effect.init(&pixels);
    info!(particles = count, "sampled");

    std::fs::create_dir_all(&args.out)?;
    let mut frame = Framebuffer::new(args.width, args.height);
    let orbit = Orbit::new(args.width, args.height, 120);

    for n in 0..args.frames {
        if args.scatter_at == Some(n) {
            info!(frame = n, "scatter");
            effect.scatter();
        }
        if args.pointer == PointerMode::Orbit {
            let (x, y) = orbit.at(n);
            effect.set_pointer(x, y);
        }

        effect.tick(&mut frame);

        if n % args.every == 0 || n + 1 == args.frames {
            let path = export::write_frame(&frame, &args.out, n)?;
            debug!(path = %path.display(), "wrote frame");
        }
    }

    info!(frames = args.frames, out = %args.out.display(), "done");
    Ok(())
}

use pixel_swarm::config::EffectConfig;
use pixel_swarm::render::{Framebuffer, Surface};
use pixel_swarm::sampler::{centered_offset, compose};
use pixel_swarm::sim::Effect;

const W: u32 = 64;
const H: u32 = 48;

/// 8x8 opaque checker of 2x2 blocks, centered on the surface
fn surface_pixels() -> Vec<u8> {
    let mut img = Vec::with_capacity(8 * 8 * 4);
    for y in 0..8 {
        for x in 0..8 {
            if (x / 2 + y / 2) % 2 == 0 {
                img.extend_from_slice(&[200, 40, 40, 255]);
            } else {
                img.extend_from_slice(&[40, 40, 200, 255]);
            }
        }
    }
    compose(&img, 8, 8, W, H, centered_offset(W, H, 8, 8))
}

fn settled(effect: &Effect, eps: f32) -> bool {
    effect.particles().iter().all(|p| p.distance_to_origin() < eps)
}

#[test]
fn samples_centered_image() {
    let mut effect = Effect::new(W, H, EffectConfig::default(), 3);
    // 8x8 image at gap 2 -> 4x4 grid
    assert_eq!(effect.init(&surface_pixels()), 16);

    for p in effect.particles() {
        assert!(p.origin_x >= 28.0 && p.origin_x < 36.0);
        assert!(p.origin_y >= 20.0 && p.origin_y < 28.0);
    }
}

#[test]
fn repeated_scatter_resettles() {
    let mut effect = Effect::new(W, H, EffectConfig::default(), 11);
    effect.init(&surface_pixels());
    let mut frame = Framebuffer::new(W, H);

    for _ in 0..3 {
        effect.scatter();
        assert!(effect.particles().iter().all(|p| p.ease == 0.1));

        for _ in 0..300 {
            effect.tick(&mut frame);
        }
        assert!(settled(&effect, 1e-3));
    }
}

#[test]
fn pointer_disturbs_then_releases() {
    let mut effect = Effect::new(W, H, EffectConfig::default(), 5);
    effect.init(&surface_pixels());
    for _ in 0..60 {
        effect.update();
    }
    assert!(settled(&effect, 1e-3));

    effect.set_pointer(W as f32 * 0.5, H as f32 * 0.5);
    effect.update();
    assert!(!settled(&effect, 1.0));
    assert!(effect.particles().iter().all(|p| p.x.is_finite() && p.y.is_finite()));

    effect.clear_pointer();
    for _ in 0..600 {
        effect.update();
    }
    assert!(settled(&effect, 1e-2));
}

#[test]
fn settled_frame_reproduces_image() {
    let mut effect = Effect::new(W, H, EffectConfig::default(), 9);
    effect.init(&surface_pixels());
    let mut frame = Framebuffer::new(W, H);
    for _ in 0..60 {
        effect.tick(&mut frame);
    }

    frame.clear();
    effect.draw(&mut frame);
    // Top-left image pixel sits at (28, 20); with gap 2 each particle covers a 2x2 block
    assert_eq!(frame.pixel(28, 20), Some([200, 40, 40, 255]));
    assert_eq!(frame.pixel(29, 21), Some([200, 40, 40, 255]));
    assert_eq!(frame.pixel(30, 20), Some([40, 40, 200, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

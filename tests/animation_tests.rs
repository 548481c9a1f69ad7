//! Integration tests for the individual animations

mod common;
use common::*;

use strip_animator::colors::{BLACK, dim, scale};
use strip_animator::config::{CandleConfig, FireConfig, LOOP_UPDATE_PERIOD_MS};
use strip_animator::{
    Candle, ColorPalette, ColorPulse, DotPingPong, DoubleSideFill, FadeIn, FadeOut, Fire,
    Generator, Instant, LedStrip, Police, PulsePhase, RandomNoise, fill, rgb,
};

const BASE: u32 = 10_000;

fn at(offset: u32) -> Instant {
    Instant(BASE + offset)
}

// ============================================================================
// fill
// ============================================================================

#[test]
fn fill_half_leaves_rest_untouched() {
    let mut strip = MockStrip::filled(100, BLUE);
    fill(&RED, &mut strip, 0.5);

    assert!(strip.pixels()[..50].iter().all(|p| *p == RED));
    assert!(strip.pixels()[50..].iter().all(|p| *p == BLUE));
}

#[test]
fn fill_clamps_cut_off() {
    let mut strip = MockStrip::new(10);
    fill(&RED, &mut strip, 3.0);
    assert!(strip.all(RED));

    let mut strip = MockStrip::new(10);
    fill(&RED, &mut strip, -1.0);
    assert!(strip.all(BLACK));
}

#[test]
fn fill_uses_generator_position() {
    let mut strip = MockStrip::new(10);
    fill(&Generator::gradient(RED, BLUE), &mut strip, 1.0);
    assert_eq!(strip.pixels()[0], RED);
    assert_eq!(strip.pixels()[9], BLUE);
}

// ============================================================================
// dot ping-pong
// ============================================================================

#[test]
fn dot_sweeps_out_and_back() {
    let mut strip = MockStrip::new(10);
    let mut dot = DotPingPong::new(1000, 1.0);

    assert!(!dot.tick(&RED, at(0), false, &mut strip));
    assert_eq!(dot.position(), 0);
    assert_eq!(strip.lit(), 1);

    assert!(!dot.tick(&RED, at(500), false, &mut strip));
    assert_eq!(dot.position(), 9);
    assert_eq!(strip.pixels()[9], RED);
    assert_eq!(strip.lit(), 1);

    assert!(dot.tick(&RED, at(1000), false, &mut strip));
    assert_eq!(dot.position(), 0);
}

#[test]
fn dot_restart_returns_to_start_on_same_call() {
    let mut strip = MockStrip::new(10);
    let mut dot = DotPingPong::new(1000, 1.0);

    dot.tick(&RED, at(0), false, &mut strip);
    dot.tick(&RED, at(250), false, &mut strip);
    assert_eq!(dot.position(), 5);

    assert!(!dot.tick(&RED, at(300), true, &mut strip));
    assert_eq!(dot.position(), 0);
    assert_eq!(strip.pixels()[0], RED);
    assert_eq!(strip.lit(), 1);
}

#[test]
fn dot_stays_inside_cut_off() {
    let mut strip = MockStrip::new(20);
    let mut dot = DotPingPong::new(1000, 0.5);

    dot.tick(&RED, at(0), false, &mut strip);
    for t in (0..=1000).step_by(LOOP_UPDATE_PERIOD_MS as usize) {
        dot.tick(&RED, at(t), false, &mut strip);
        assert!(dot.position() < 10);
        assert!(strip.pixels()[10..].iter().all(|p| *p == BLACK));
    }
}

#[test]
fn dot_with_zero_duration_finishes_immediately() {
    let mut strip = MockStrip::new(10);
    let mut dot = DotPingPong::new(0, 1.0);
    assert!(dot.tick(&RED, at(0), false, &mut strip));
}

// ============================================================================
// color pulse
// ============================================================================

#[test]
fn pulse_rises_then_falls() {
    let mut strip = MockStrip::new(10);
    let mut pulse = ColorPulse::new(1000, 500, 1.0);

    assert!(!pulse.tick(&RED, at(0), false, &mut strip));
    assert_eq!(pulse.phase(), PulsePhase::Rising);
    assert_eq!(strip.lit(), 0);

    assert!(!pulse.tick(&RED, at(999), false, &mut strip));
    assert_eq!(pulse.phase(), PulsePhase::Rising);
    assert_eq!(strip.lit(), 9);

    assert!(!pulse.tick(&RED, at(1000), false, &mut strip));
    assert_eq!(pulse.phase(), PulsePhase::Falling);
    assert!(strip.all(RED));

    assert!(!pulse.tick(&RED, at(1250), false, &mut strip));
    assert!(strip.all(dim(RED, 0.5)));

    assert!(pulse.tick(&RED, at(1500), false, &mut strip));
    assert_eq!(pulse.phase(), PulsePhase::Done);
    assert!(strip.all(BLACK));
}

#[test]
fn pulse_finishes_across_clock_wrap() {
    let mut strip = MockStrip::new(10);
    let mut pulse = ColorPulse::new(1000, 500, 1.0);

    let start = Instant(u32::MAX - 100);
    pulse.tick(&RED, start, false, &mut strip);
    assert!(!pulse.tick(&RED, start.wrapping_add(999), false, &mut strip));
    assert!(pulse.tick(&RED, start.wrapping_add(1500), false, &mut strip));
}

#[test]
fn pulse_respects_cut_off() {
    let mut strip = MockStrip::filled(10, GREEN);
    let mut pulse = ColorPulse::new(100, 100, 0.3);

    pulse.tick(&RED, at(0), false, &mut strip);
    pulse.tick(&RED, at(100), false, &mut strip);
    assert!(strip.pixels()[..3].iter().all(|p| *p == RED));
    assert!(strip.pixels()[3..].iter().all(|p| *p == GREEN));
}

// ============================================================================
// double-side fill
// ============================================================================

#[test]
fn double_fill_meets_in_the_middle() {
    let mut strip = MockStrip::new(10);
    let mut animation = DoubleSideFill::new(1000);

    assert!(!animation.tick(&RED, at(0), false, &mut strip));
    assert_eq!(strip.lit(), 0);

    assert!(!animation.tick(&RED, at(500), false, &mut strip));
    let pixels = strip.pixels();
    assert_eq!(pixels[0], RED);
    assert_eq!(pixels[1], RED);
    assert_eq!(pixels[8], RED);
    assert_eq!(pixels[9], RED);
    assert_eq!(strip.lit(), 4);

    assert!(animation.tick(&RED, at(1000), false, &mut strip));
    assert!(strip.all(RED));
}

#[test]
fn double_fill_covers_odd_strips() {
    let mut strip = MockStrip::new(7);
    let mut animation = DoubleSideFill::new(100);

    animation.tick(&RED, at(0), false, &mut strip);
    assert!(animation.tick(&RED, at(100), false, &mut strip));
    assert!(strip.all(RED));
}

// ============================================================================
// police
// ============================================================================

#[test]
fn police_alternates_halves() {
    let mut strip = MockStrip::new(10);
    let mut police = Police::new(800);

    police.tick(at(0), false, &mut strip);
    assert!(strip.pixels()[..5].iter().all(|p| *p == RED));
    assert!(strip.pixels()[5..].iter().all(|p| *p == BLACK));

    // Strobe gap
    police.tick(at(150), false, &mut strip);
    assert!(strip.all(BLACK));

    police.tick(at(450), false, &mut strip);
    assert!(strip.pixels()[..5].iter().all(|p| *p == BLACK));
    assert!(strip.pixels()[5..].iter().all(|p| *p == BLUE));
}

#[test]
fn police_never_finishes() {
    let mut strip = MockStrip::new(10);
    let mut police = Police::with_colors(0, GREEN, WHITE);

    for t in (0..10_000).step_by(10) {
        assert!(!police.tick(at(t), false, &mut strip));
    }
}

// ============================================================================
// fade out
// ============================================================================

#[test]
fn fade_out_dims_current_frame() {
    let mut strip = MockStrip::filled(10, WHITE);
    let mut fade = FadeOut::<16>::new(1000);

    assert!(!fade.tick(at(0), false, &mut strip));
    assert!(strip.all(WHITE));

    assert!(!fade.tick(at(500), false, &mut strip));
    assert!(strip.all(rgb(128, 128, 128)));

    assert!(!fade.tick(at(750), false, &mut strip));
    assert!(strip.all(rgb(64, 64, 64)));

    assert!(fade.tick(at(1000), false, &mut strip));
    assert!(strip.all(BLACK));
    assert_eq!(fade.level(), 0.0);
}

#[test]
fn fade_out_keeps_hues() {
    let mut strip = MockStrip::new(4);
    strip.set_pixel(0, RED);
    strip.set_pixel(1, GREEN);
    strip.set_pixel(3, rgb(200, 100, 0));

    let mut fade = FadeOut::<16>::new(1000);
    fade.tick(at(0), false, &mut strip);
    fade.tick(at(500), false, &mut strip);

    assert_eq!(strip.pixels()[0], rgb(128, 0, 0));
    assert_eq!(strip.pixels()[1], rgb(0, 128, 0));
    assert_eq!(strip.pixels()[2], BLACK);
    assert_eq!(strip.pixels()[3], rgb(100, 50, 0));
}

#[test]
fn fade_out_with_zero_duration_blanks_at_once() {
    let mut strip = MockStrip::filled(10, WHITE);
    let mut fade = FadeOut::<16>::new(0);
    assert!(fade.tick(at(0), false, &mut strip));
    assert!(strip.all(BLACK));
}

fn linear(start: u8, t: u32, duration: u32) -> f32 {
    start as f32 * (1.0 - t as f32 / duration as f32)
}

#[test]
fn fade_out_is_linear_at_fast_tick() {
    for start in [255u8, 100, 20] {
        let mut strip = MockStrip::filled(8, rgb(start, start, start));
        let mut fade = FadeOut::<16>::new(1000);

        let mut previous = start;
        for t in 0..1000 {
            assert!(!fade.tick(at(t), false, &mut strip));
            let value = strip.pixels()[0].red;
            assert!(value <= previous, "{value} > {previous} at {t} from {start}");
            let expected = linear(start, t, 1000);
            assert!(
                (value as f32 - expected).abs() <= 2.0,
                "{value} vs {expected} at {t} from {start}"
            );
            previous = value;
        }

        assert!(fade.tick(at(1000), false, &mut strip));
        assert!(strip.all(BLACK));
    }
}

#[test]
fn fade_out_is_linear_under_jitter() {
    let mut strip = MockStrip::filled(8, rgb(255, 100, 20));
    let mut fade = FadeOut::<16>::new(1000);
    fade.tick(at(0), false, &mut strip);

    let steps = [1, 7, 3, 40, 13, 2, 65, 1, 1, 29];
    let mut t = 0;
    let mut previous_level = fade.level();
    let mut previous = strip.pixels()[0];
    for step in steps.iter().cycle() {
        t += step;
        if t >= 1000 {
            break;
        }
        assert!(!fade.tick(at(t), false, &mut strip));
        assert!(fade.level() < previous_level, "level stalled at {t}");

        let pixel = strip.pixels()[0];
        assert!(pixel.red <= previous.red && pixel.green <= previous.green);
        assert!((pixel.red as f32 - linear(255, t, 1000)).abs() <= 2.0);
        assert!((pixel.green as f32 - linear(100, t, 1000)).abs() <= 2.0);
        assert!((pixel.blue as f32 - linear(20, t, 1000)).abs() <= 2.0);

        previous_level = fade.level();
        previous = pixel;
    }

    // Midpoint lands on half brightness regardless of the cadence
    let mut strip = MockStrip::filled(8, WHITE);
    let mut fade = FadeOut::<16>::new(1000);
    for t in [0, 3, 4, 90, 91, 333, 499, 500] {
        fade.tick(at(t), false, &mut strip);
    }
    assert!(strip.all(rgb(128, 128, 128)));
}

#[test]
fn fade_out_restart_recaptures_frame() {
    let mut strip = MockStrip::filled(8, WHITE);
    let mut fade = FadeOut::<16>::new(1000);

    fade.tick(at(0), false, &mut strip);
    fade.tick(at(500), false, &mut strip);
    assert!(strip.all(rgb(128, 128, 128)));

    for index in 0..8 {
        strip.set_pixel(index, RED);
    }
    assert!(!fade.tick(at(600), true, &mut strip));
    assert!(strip.all(RED));
    assert!(fade.frame().iter().all(|p| *p == RED));

    fade.tick(at(850), false, &mut strip);
    assert!(strip.all(rgb(191, 0, 0)));
}

#[test]
fn fade_out_blanks_pixels_past_capacity() {
    let mut strip = MockStrip::filled(10, WHITE);
    let mut fade = FadeOut::<4>::new(1000);

    fade.tick(at(0), false, &mut strip);
    assert_eq!(fade.frame().len(), 4);
    assert!(strip.pixels()[..4].iter().all(|p| *p == WHITE));
    assert!(strip.pixels()[4..].iter().all(|p| *p == BLACK));
}

// ============================================================================
// fade in
// ============================================================================

#[test]
fn fade_in_ramps_monotonically() {
    let mut strip = MockStrip::new(10);
    let mut fade = FadeIn::new(1000);

    assert!(!fade.tick(&WHITE, at(0), false, &mut strip));
    assert!(strip.all(BLACK));

    let mut previous = 0;
    for t in (LOOP_UPDATE_PERIOD_MS..1000).step_by(LOOP_UPDATE_PERIOD_MS as usize) {
        assert!(!fade.tick(&WHITE, at(t), false, &mut strip));
        let level = strip.pixels()[0].red;
        assert!(level >= previous, "{level} < {previous} at {t}");
        previous = level;
    }

    assert!(fade.tick(&WHITE, at(1000), false, &mut strip));
    assert!(strip.all(WHITE));
}

#[test]
fn fade_in_between_cut_offs() {
    let mut strip = MockStrip::filled(10, BLUE);
    let mut fade = FadeIn::with_cut_offs(100, 0.2, 0.6);

    fade.tick(&RED, at(0), false, &mut strip);
    assert!(fade.tick(&RED, at(100), false, &mut strip));

    let pixels = strip.pixels();
    assert!(pixels[..2].iter().all(|p| *p == BLUE));
    assert!(pixels[2..6].iter().all(|p| *p == RED));
    assert!(pixels[6..].iter().all(|p| *p == BLUE));
}

#[test]
fn fade_in_accepts_swapped_cut_offs() {
    let mut strip = MockStrip::new(10);
    let mut fade = FadeIn::with_cut_offs(0, 0.6, 0.2);
    assert!(fade.tick(&RED, at(0), false, &mut strip));
    assert_eq!(strip.lit(), 4);
}

// ============================================================================
// fire
// ============================================================================

#[test]
fn fire_never_finishes_and_lights_up() {
    let mut strip = MockStrip::new(30);
    let mut fire = Fire::<64>::new(1);

    for frame in 0..200 {
        let t = frame * LOOP_UPDATE_PERIOD_MS;
        assert!(!fire.tick(at(t), false, &mut strip));
    }

    assert_eq!(fire.heat().len(), 30);
    assert!(strip.lit() > 0);
}

#[test]
fn fire_restart_clears_heat() {
    let mut strip = MockStrip::new(30);
    let mut fire = Fire::<64>::new(3);

    let mut seen_heat = false;
    for frame in 0..100 {
        fire.tick(at(frame * LOOP_UPDATE_PERIOD_MS), false, &mut strip);
        seen_heat |= fire.heat().iter().any(|h| *h > 0);
    }
    assert!(seen_heat);

    fire.tick(at(5000), true, &mut strip);
    // One step ran since the reset: only a fresh spark near the base can be hot
    assert!(fire.heat()[7..].iter().all(|h| *h == 0));
}

#[test]
fn fire_stretches_cells_over_long_strips() {
    let mut strip = MockStrip::new(40);
    let mut fire = Fire::<8>::with_config(
        FireConfig {
            sparking: 255,
            ..FireConfig::default()
        },
        9,
    );

    for frame in 0..50 {
        fire.tick(at(frame * LOOP_UPDATE_PERIOD_MS), false, &mut strip);
    }

    assert_eq!(fire.heat().len(), 8);
    let palette = ColorPalette::heat();
    for (index, pixel) in strip.pixels().iter().enumerate() {
        assert_eq!(*pixel, palette.sample(fire.heat()[index * 8 / 40]));
    }
}

#[test]
fn fire_catch_up_is_bounded() {
    let mut strip = MockStrip::new(10);
    let mut fire = Fire::<16>::new(5);

    fire.tick(at(0), false, &mut strip);
    // A stalled loop must not run thousands of steps in one tick
    assert!(!fire.tick(at(1_000_000), false, &mut strip));
    assert_eq!(fire.heat().len(), 10);
}

#[test]
fn fire_on_empty_strip_is_harmless() {
    let mut strip = MockStrip::new(0);
    let mut fire = Fire::<16>::new(5);
    assert!(!fire.tick(at(0), false, &mut strip));
    assert!(fire.heat().is_empty());
}

// ============================================================================
// random noise
// ============================================================================

#[test]
fn noise_on_lattice_is_uniform() {
    let palette = ColorPalette::heat();
    let mut strip = MockStrip::new(12);
    let mut noise = RandomNoise::new(256, false);

    assert!(!noise.tick(&palette, at(0), false, &mut strip));
    // Lattice points sample 128, stretched to 129
    assert!(strip.all(palette.sample(129)));
}

#[test]
fn noise_is_deterministic_and_continuous() {
    let palette = ColorPalette::ocean();
    let mut first = MockStrip::new(20);
    let mut second = MockStrip::new(20);
    let mut a = RandomNoise::new(30, true);
    let mut b = RandomNoise::new(30, true);

    for frame in 0..100 {
        let t = frame * LOOP_UPDATE_PERIOD_MS;
        assert!(!a.tick(&palette, at(t), false, &mut first));
        assert!(!b.tick(&palette, at(t), false, &mut second));
        assert_eq!(first.pixels(), second.pixels());
    }
}

// ============================================================================
// candle
// ============================================================================

#[test]
fn candle_stays_within_brightness_range() {
    let palette = ColorPalette::from_stops(&[WHITE]).unwrap();
    let mut strip = MockStrip::new(8);
    let mut candle = Candle::new(11);

    for frame in 0..500 {
        assert!(!candle.tick(&palette, at(frame * LOOP_UPDATE_PERIOD_MS), false, &mut strip));
        assert!((96..=255).contains(&candle.brightness()));
        for pixel in strip.pixels() {
            assert!(pixel.red >= 96, "{pixel:?}");
        }
    }
}

#[test]
fn candle_restart_returns_to_rest_level() {
    let palette = ColorPalette::candle();
    let mut strip = MockStrip::new(8);
    let config = CandleConfig {
        max_step: 0,
        ..CandleConfig::default()
    };
    let mut candle = Candle::with_config(config, 1);

    candle.tick(&palette, at(0), false, &mut strip);
    assert_eq!(candle.brightness(), config.rest_brightness);

    candle.tick(&palette, at(4000), true, &mut strip);
    assert_eq!(candle.brightness(), config.rest_brightness);
}

#[test]
fn candle_renders_palette_scaled_by_flicker() {
    let palette = ColorPalette::from_stops(&[RED]).unwrap();
    let mut strip = MockStrip::new(4);
    let mut candle = Candle::new(2);

    candle.tick(&palette, at(0), false, &mut strip);
    for pixel in strip.pixels() {
        assert_eq!(pixel.green, 0);
        assert_eq!(pixel.blue, 0);
        assert!(pixel.red >= 96);
        assert!(*pixel == scale(RED, pixel.red));
    }
}

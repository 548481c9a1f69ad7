//! Integration tests for the color models

mod common;
use common::*;

use strip_animator::{
    Color, ColorModel, ColorSpace, Hsv, Lab, Lch, Oklab, Oklch, Pixel, Xyz, pack, rgb, unpack,
};

/// Every channel combination on a coarse grid, both extremes included.
fn grid() -> impl Iterator<Item = Pixel> {
    let steps = (0..=255u16).step_by(15).map(|c| c as u8);
    steps.clone().flat_map(move |r| {
        let steps = steps.clone();
        steps.clone().flat_map(move |g| steps.clone().map(move |b| rgb(r, g, b)))
    })
}

fn assert_round_trip<M: ColorModel>(name: &str) {
    for pixel in grid() {
        let back = M::from_rgb(pixel).get_rgb();
        assert!(
            pixels_close(back, pixel, 1),
            "{name}: {pixel:?} came back as {back:?}"
        );
    }
}

#[test]
fn xyz_round_trips_within_one_step() {
    assert_round_trip::<Xyz>("xyz");
}

#[test]
fn hsv_round_trips_within_one_step() {
    assert_round_trip::<Hsv>("hsv");
}

#[test]
fn lab_round_trips_within_one_step() {
    assert_round_trip::<Lab>("lab");
}

#[test]
fn lch_round_trips_within_one_step() {
    assert_round_trip::<Lch>("lch");
}

#[test]
fn oklab_round_trips_within_one_step() {
    assert_round_trip::<Oklab>("oklab");
}

#[test]
fn oklch_round_trips_within_one_step() {
    assert_round_trip::<Oklch>("oklch");
}

#[test]
fn hue_is_always_in_range() {
    for pixel in grid() {
        let hsv = Hsv::from_rgb(pixel);
        let lch = Lch::from_rgb(pixel);
        let oklch = Oklch::from_rgb(pixel);
        for h in [hsv.h, lch.h, oklch.h] {
            assert!((0.0..360.0).contains(&h), "hue {h} for {pixel:?}");
        }
    }
}

#[test]
fn hsv_of_primaries() {
    let red = Hsv::from_rgb(RED);
    assert!(red.h.abs() < 0.01 && (red.s - 1.0).abs() < 0.001 && (red.v - 1.0).abs() < 0.001);

    let green = Hsv::from_rgb(GREEN);
    assert!((green.h - 120.0).abs() < 0.01);

    let blue = Hsv::from_rgb(BLUE);
    assert!((blue.h - 240.0).abs() < 0.01);
}

#[test]
fn hsv_constructor_normalizes_hue() {
    assert!((Hsv::new(-90.0, 1.0, 1.0).h - 270.0).abs() < 0.001);
    assert!((Hsv::new(720.0, 1.0, 1.0).h).abs() < 0.001);
    assert_eq!(Hsv::new(480.0, 1.0, 1.0).get_rgb(), GREEN);
}

#[test]
fn xyz_of_white_is_reference_white() {
    let white = Xyz::from_rgb(WHITE);
    assert!((white.x - Xyz::WHITE.x).abs() < 0.1);
    assert!((white.y - Xyz::WHITE.y).abs() < 0.1);
    assert!((white.z - Xyz::WHITE.z).abs() < 0.1);

    let black = Xyz::from_rgb(rgb(0, 0, 0));
    assert!(black.x.abs() < 0.001 && black.y.abs() < 0.001 && black.z.abs() < 0.001);
}

#[test]
fn lab_lightness_spans_black_to_white() {
    let white = Lab::from_rgb(WHITE);
    assert!((white.l - 100.0).abs() < 0.1);
    assert!(white.a.abs() < 0.1 && white.b.abs() < 0.1);

    let black = Lab::from_rgb(rgb(0, 0, 0));
    assert!(black.l.abs() < 0.1);
}

#[test]
fn oklab_lightness_spans_black_to_white() {
    assert!((Oklab::from_rgb(WHITE).l - 1.0).abs() < 0.001);
    assert!(Oklab::from_rgb(rgb(0, 0, 0)).l.abs() < 0.001);
}

#[test]
fn polar_hues_of_red() {
    let lch = Lch::from_rgb(RED);
    assert!(lch.h > 35.0 && lch.h < 45.0, "lch hue {}", lch.h);

    let oklch = Oklch::from_rgb(RED);
    assert!(oklch.h > 25.0 && oklch.h < 35.0, "oklch hue {}", oklch.h);
}

#[test]
fn gray_has_zero_hsv_hue() {
    for level in [0u8, 64, 128, 255] {
        let hsv = Hsv::from_rgb(rgb(level, level, level));
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
    }
}

#[test]
fn out_of_gamut_values_clamp() {
    assert_eq!(Lab::new(150.0, 0.0, 0.0).get_rgb(), WHITE);
    assert_eq!(Oklab::new(-1.0, 0.0, 0.0).get_rgb(), rgb(0, 0, 0));
    assert_eq!(Xyz::new(f32::NAN, 0.0, 0.0).get_rgb().green, 0);
}

#[test]
fn packed_rgb_layout() {
    assert_eq!(pack(rgb(0x12, 0x34, 0x56)), 0x0012_3456);
    assert_eq!(unpack(0xFF12_3456), rgb(0x12, 0x34, 0x56));
    assert_eq!(Color::from_packed(0x00FF_0000).get_rgb(), RED);
}

#[test]
fn color_converts_between_spaces() {
    let orange = rgb(255, 128, 0);
    for space in [
        ColorSpace::Rgb,
        ColorSpace::Xyz,
        ColorSpace::Hsv,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Oklab,
        ColorSpace::Oklch,
    ] {
        let color = Color::from_rgb(space, orange);
        assert_eq!(color.space(), space);
        assert!(pixels_close(color.get_rgb(), orange, 1));

        let hsv = color.convert(ColorSpace::Hsv);
        assert_eq!(hsv.space(), ColorSpace::Hsv);
        assert!(pixels_close(hsv.get_rgb(), orange, 2));
    }
}

#[test]
fn polar_and_cartesian_forms_agree() {
    let lab = Lab::from_rgb(rgb(30, 144, 255));
    let lch = Lch::from(lab);
    let back = Lab::from(lch);
    assert!((back.l - lab.l).abs() < 0.01);
    assert!((back.a - lab.a).abs() < 0.01);
    assert!((back.b - lab.b).abs() < 0.01);

    let oklab = Oklab::from_rgb(rgb(30, 144, 255));
    let back = Oklab::from(Oklch::from(oklab));
    assert!((back.a - oklab.a).abs() < 0.0001);
    assert!((back.b - oklab.b).abs() < 0.0001);
}

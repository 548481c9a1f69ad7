//! Coherent 2-D gradient noise (Perlin) for the procedural effects.
//!
//! The field repeats every 256 units along each axis, so callers can wrap
//! their coordinates to keep `f32` precision on long-running clocks.

/// Ken Perlin's reference permutation.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Period of the field along each axis.
pub const NOISE_PERIOD: u32 = 256;

#[inline]
fn hash(i: i32) -> i32 {
    PERMUTATION[(i & 0xFF) as usize] as i32
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: i32, x: f32, y: f32) -> f32 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// Perlin noise at `(x, y)`, in -1.0..=1.0. Zero on every integer lattice point.
pub fn noise2(x: f32, y: f32) -> f32 {
    if !x.is_finite() || !y.is_finite() {
        return 0.0;
    }

    let x0 = libm::floorf(x);
    let y0 = libm::floorf(y);
    let xi = x0 as i32;
    let yi = y0 as i32;
    let xf = x - x0;
    let yf = y - y0;

    let u = fade(xf);
    let v = fade(yf);

    // The field repeats every 256 cells, so only the low byte matters
    let xi = xi & 0xFF;
    let yi = yi & 0xFF;

    let a = hash(xi);
    let b = hash(xi + 1);
    let aa = hash(a + yi);
    let ab = hash(a + yi + 1);
    let ba = hash(b + yi);
    let bb = hash(b + yi + 1);

    let bottom = lerp(u, grad(aa, xf, yf), grad(ba, xf - 1.0, yf));
    let top = lerp(u, grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0));

    lerp(v, bottom, top).clamp(-1.0, 1.0)
}

/// Noise sampled on a 1/256 fixed-point grid and mapped to 0-255.
///
/// Coordinates wrap at the field period, so any `u32` is valid.
pub fn noise8(x: u32, y: u32) -> u8 {
    let wrap = NOISE_PERIOD * 256;
    let x = (x % wrap) as f32 / 256.0;
    let y = (y % wrap) as f32 / 256.0;

    let sample = (noise2(x, y) + 1.0) * 0.5 * 255.0;
    libm::roundf(sample).clamp(0.0, 255.0) as u8
}

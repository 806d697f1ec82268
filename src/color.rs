//! Color types and hue conversion.

use libm::fmodf;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Convert a hue angle in degrees to an RGB color at full saturation and
/// value.
///
/// Standard six-sector HSV decomposition: the circle is split into 60°
/// sectors and the fractional position within a sector drives the ascending
/// or descending channel. The angle may be any float; it is wrapped into
/// [0, 360).
pub fn hue_to_rgb(hue: f32) -> Rgb {
    let mut hue = fmodf(hue, 360.0);
    if hue < 0.0 {
        hue += 360.0;
    }

    let h = hue / 60.0;
    let sector = h as u8;
    let fraction = h - f32::from(sector);

    let q = 1.0 - fraction;
    let t = fraction;

    let (r, g, b) = match sector {
        0 => (1.0, t, 0.0),
        1 => (q, 1.0, 0.0),
        2 => (0.0, 1.0, t),
        3 => (0.0, q, 1.0),
        4 => (t, 0.0, 1.0),
        _ => (1.0, 0.0, q),
    };

    Rgb {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}

/// Extract the hue angle in degrees from an RGB color.
///
/// Gray values (no chroma) report a hue of 0.
pub fn rgb_hue(color: Rgb) -> f32 {
    let r = f32::from(color.r) / 255.0;
    let g = f32::from(color.g) / 255.0;
    let b = f32::from(color.b) / 255.0;

    let max = if r >= g && r >= b {
        r
    } else if g >= b {
        g
    } else {
        b
    };
    let min = if r <= g && r <= b {
        r
    } else if g <= b {
        g
    } else {
        b
    };
    let delta = max - min;

    if delta == 0.0 {
        return 0.0;
    }

    let hue = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };

    if hue < 0.0 { hue + 360.0 } else { hue }
}

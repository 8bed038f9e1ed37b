use log::trace;

/// Number of colors in the outline palette.
pub const COLOR_COUNT: u32 = 30;

pub const LIGHTNESS: f64 = 0.5;
pub const SATURATION: f64 = 1.0;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// A color sample with every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Formats as `#rrggbb`. Channels are scaled by 255 and truncated, not rounded.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b)
        )
    }

    /// Parses `#rrggbb` (either case). Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: byte(0)? as f64 / 255.0,
            g: byte(2)? as f64 / 255.0,
            b: byte(4)? as f64 / 255.0,
        })
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    // `as` saturates, so out-of-range input clamps to 0..=255
    (channel * 255.0) as u8
}

pub fn generate_palette(num_colors: u32) -> Vec<String> {
    let mut colors = Vec::with_capacity(num_colors as usize);
    for i in 0..num_colors {
        let hue = i as f64 / num_colors as f64;
        let color = hls_to_rgb(hue, LIGHTNESS, SATURATION).to_hex();
        trace!("hue {:.4} -> {}", hue, color);
        colors.push(color);
    }
    colors
}

pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> Rgb {
    if saturation == 0.0 {
        return Rgb::new(lightness, lightness, lightness);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - (lightness * saturation)
    };
    let m1 = 2.0 * lightness - m2;

    Rgb::new(
        sector_value(m1, m2, hue + ONE_THIRD),
        sector_value(m1, m2, hue),
        sector_value(m1, m2, hue - ONE_THIRD),
    )
}

fn sector_value(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < TWO_THIRD {
        return m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0;
    }
    m1
}

/// Inverse of [`hls_to_rgb`]. Returns `(hue, lightness, saturation)` with hue in [0, 1).
pub fn rgb_to_hls(color: Rgb) -> (f64, f64, f64) {
    let Rgb { r, g, b } = color;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let lightness = sumc / 2.0;
    if minc == maxc {
        return (0.0, lightness, 0.0);
    }
    let saturation = if lightness <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };

    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let hue = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((hue / 6.0).rem_euclid(1.0), lightness, saturation)
}

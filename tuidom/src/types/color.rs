use palette::encoding;
use palette::{FromColor, Hsl, Oklch, Srgb};

/// A color as written by widget code. Resolved to [`Rgb`] at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// Hue in degrees, saturation and lightness in `0.0..=1.0`.
    Hsl { h: f32, s: f32, l: f32 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn hex(hex: u32) -> Self {
        let rgb = Rgb::from_hex(hex);
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }

    /// CSS-style `hsl(h, s%, l%)`: percentages are given as `0..=100`.
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::Hsl {
            h,
            s: s / 100.0,
            l: l / 100.0,
        }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn to_rgb(&self) -> Rgb {
        let srgb: Srgb<f32> = match *self {
            Self::Rgb { r, g, b } => return Rgb::new(r, g, b),
            Self::Hsl { h, s, l } => {
                Srgb::from_color(Hsl::<encoding::Srgb, f32>::new(h, s, l))
            }
            Self::Oklch { l, c, h } => Srgb::from_color(Oklch::<f32>::new(l, c, h)),
        };
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

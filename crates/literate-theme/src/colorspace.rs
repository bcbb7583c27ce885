//! Perceptual color muting in CIE LAB.
//!
//! # Concept
//!
//! A muted color should read as "background noise" next to a bright comment
//! color while keeping enough of its hue to stay distinguishable. Working in
//! CIE LAB keeps those two knobs independent:
//!
//! - **Chroma** (`a*`, `b*`) is scaled toward zero, desaturating the color.
//! - **Lightness** (`L*`) is pulled toward the lightness of the theme's base
//!   foreground, so every muted token sits at roughly the same brightness.
//!
//! Because LAB is perceptually uniform, a given scale factor desaturates a
//! blue as much as a yellow, which an RGB or HSL blend would not.
//!
//! # Example
//!
//! ```rust
//! use literate_theme::color::Rgb;
//! use literate_theme::colorspace::Muter;
//!
//! let muter = Muter::new(Rgb(0xa8, 0xb8, 0xb8));
//! let muted = muter.mute_hex("#ff0000").unwrap();
//! assert_eq!(muted.len(), 7);
//! assert_ne!(muted, "#ff0000");
//! ```

use crate::color::Rgb;

/// Default fraction of chroma kept after muting.
pub const DEFAULT_CHROMA_SCALE: f64 = 0.35;

/// Default fraction of the distance to the base lightness covered by muting.
pub const DEFAULT_LIGHTNESS_PULL: f64 = 0.5;

// ─── CIE LAB internals ─────────────────────────────────────────────────────

/// CIE LAB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Distance from the neutral axis.
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// D65 reference white point for CIE XYZ → LAB conversion.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value (0.0–1.0) to sRGB (0–255), clamped.
fn linear_to_srgb(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// Convert an [`Rgb`] value to CIE LAB via XYZ (D65 illuminant).
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.0);
    let g = srgb_to_linear(rgb.1);
    let b = srgb_to_linear(rgb.2);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert a CIE LAB value back to [`Rgb`], clamping out-of-gamut results.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = XN * lab_f_inv(fx);
    let y = YN * lab_f_inv(fy);
    let z = ZN * lab_f_inv(fz);

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    Rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

// ─── Muter ──────────────────────────────────────────────────────────────────

/// Desaturates colors and pulls them toward a base foreground's lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muter {
    base: Lab,
    chroma_scale: f64,
    lightness_pull: f64,
}

impl Muter {
    /// Creates a muter anchored on `base`, the theme's default foreground.
    pub fn new(base: Rgb) -> Self {
        Self {
            base: rgb_to_lab(base),
            chroma_scale: DEFAULT_CHROMA_SCALE,
            lightness_pull: DEFAULT_LIGHTNESS_PULL,
        }
    }

    /// Sets the fraction of chroma kept (clamped to `0.0..=1.0`).
    ///
    /// `1.0` keeps saturation untouched; `0.0` turns every color gray.
    pub fn with_chroma_scale(mut self, scale: f64) -> Self {
        self.chroma_scale = scale.clamp(0.0, 1.0);
        self
    }

    /// Sets how far lightness moves toward the base (clamped to `0.0..=1.0`).
    pub fn with_lightness_pull(mut self, pull: f64) -> Self {
        self.lightness_pull = pull.clamp(0.0, 1.0);
        self
    }

    pub fn chroma_scale(&self) -> f64 {
        self.chroma_scale
    }

    pub fn lightness_pull(&self) -> f64 {
        self.lightness_pull
    }

    /// Mutes a single color.
    pub fn mute(&self, color: Rgb) -> Rgb {
        let lab = rgb_to_lab(color);
        lab_to_rgb(Lab {
            l: lab.l + self.lightness_pull * (self.base.l - lab.l),
            a: lab.a * self.chroma_scale,
            b: lab.b * self.chroma_scale,
        })
    }

    /// Mutes a `#RRGGBB` string, returning lowercase `#rrggbb`.
    ///
    /// Returns `None` if `hex` is not exactly a `#RRGGBB` color.
    pub fn mute_hex(&self, hex: &str) -> Option<String> {
        Rgb::from_hex(hex).map(|rgb| self.mute(rgb).to_hex())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Rgb, b: Rgb, tolerance: u8) {
        let d = |x: u8, y: u8| (x as i16 - y as i16).unsigned_abs() as u8;
        assert!(
            d(a.0, b.0) <= tolerance && d(a.1, b.1) <= tolerance && d(a.2, b.2) <= tolerance,
            "{:?} not within {} of {:?}",
            a,
            tolerance,
            b
        );
    }

    // =====================================================================
    // LAB round-trip tests
    // =====================================================================

    #[test]
    fn roundtrip_primaries() {
        for rgb in [
            Rgb(0, 0, 0),
            Rgb(255, 255, 255),
            Rgb(255, 0, 0),
            Rgb(0, 255, 0),
            Rgb(0, 0, 255),
            Rgb(200, 100, 50),
        ] {
            assert_close(lab_to_rgb(rgb_to_lab(rgb)), rgb, 1);
        }
    }

    #[test]
    fn lab_red_has_positive_a() {
        let lab = rgb_to_lab(Rgb(255, 0, 0));
        assert!(lab.a > 50.0, "Red should have large positive a*, got {}", lab.a);
    }

    #[test]
    fn gray_is_neutral() {
        assert!(rgb_to_lab(Rgb(128, 128, 128)).chroma() < 0.5);
    }

    // =====================================================================
    // Muter tests
    // =====================================================================

    #[test]
    fn identity_settings_leave_color_alone() {
        let muter = Muter::new(Rgb(0xa8, 0xb8, 0xb8))
            .with_chroma_scale(1.0)
            .with_lightness_pull(0.0);
        assert_close(muter.mute(Rgb(0x77, 0x88, 0x99)), Rgb(0x77, 0x88, 0x99), 1);
    }

    #[test]
    fn full_mute_yields_gray_at_base_lightness() {
        let base = Rgb(0x80, 0x80, 0x80);
        let muter = Muter::new(base).with_chroma_scale(0.0).with_lightness_pull(1.0);
        assert_close(muter.mute(Rgb(255, 0, 0)), base, 1);
        assert_close(muter.mute(Rgb(0, 0, 255)), base, 1);
    }

    #[test]
    fn mute_reduces_chroma() {
        let muter = Muter::new(Rgb(0xa8, 0xb8, 0xb8));
        for rgb in [Rgb(255, 0, 0), Rgb(0, 200, 80), Rgb(0x77, 0x88, 0x99)] {
            let before = rgb_to_lab(rgb).chroma();
            let after = rgb_to_lab(muter.mute(rgb)).chroma();
            assert!(after < before, "{:?}: {} !< {}", rgb, after, before);
        }
    }

    #[test]
    fn mute_moves_lightness_toward_base() {
        let muter = Muter::new(Rgb(0xa8, 0xb8, 0xb8));
        let base_l = rgb_to_lab(Rgb(0xa8, 0xb8, 0xb8)).l;
        let dark = Rgb(0x10, 0x10, 0x40);
        let before = (rgb_to_lab(dark).l - base_l).abs();
        let after = (rgb_to_lab(muter.mute(dark)).l - base_l).abs();
        assert!(after < before);
    }

    #[test]
    fn builder_clamps() {
        let muter = Muter::new(Rgb(0, 0, 0))
            .with_chroma_scale(3.0)
            .with_lightness_pull(-1.0);
        assert_eq!(muter.chroma_scale(), 1.0);
        assert_eq!(muter.lightness_pull(), 0.0);
    }

    #[test]
    fn mute_hex_rejects_non_rgb() {
        let muter = Muter::new(Rgb(0, 0, 0));
        assert_eq!(muter.mute_hex("#112233cc"), None);
        assert_eq!(muter.mute_hex("blue"), None);
        assert!(muter.mute_hex("#112233").is_some());
    }
}

//! Themed swatch rendering around a sampled image.
//!
//! A swatch presents the image on a padded panel washed with its dominant
//! color: a radial gradient anchored at the top-left corner over a white
//! base, plus an inset glow ring hugging the panel edges. For callers that
//! style markup instead of pixels, [`css_radial_gradient`] and
//! [`css_inset_glow`] emit the equivalent CSS.

use dominant_color::Rgb;
use image::imageops;
use image::{Rgba, RgbaImage};

/// Geometry and strength of the themed panel.
///
/// Defaults: 30px padding, a 20px glow ring, and gradient alpha running
/// from 0.3 at the top-left corner to 0.5 at the farthest corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    /// Panel padding around the image, in pixels.
    pub padding: u32,
    /// Depth of the inset glow ring, in pixels. 0 disables the ring.
    pub glow_radius: u32,
    /// Gradient alpha at the top-left corner.
    pub inner_alpha: f32,
    /// Gradient alpha at the farthest corner.
    pub outer_alpha: f32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            padding: 30,
            glow_radius: 20,
            inner_alpha: 0.3,
            outer_alpha: 0.5,
        }
    }
}

impl PreviewOptions {
    /// Create options with the default panel geometry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel padding.
    #[inline]
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the glow ring depth.
    #[inline]
    pub fn glow_radius(mut self, radius: u32) -> Self {
        self.glow_radius = radius;
        self
    }

    /// Set the gradient alpha endpoints.
    #[inline]
    pub fn gradient_alpha(mut self, inner: f32, outer: f32) -> Self {
        self.inner_alpha = inner;
        self.outer_alpha = outer;
        self
    }
}

/// Render the themed swatch: the tinted panel with the image centered on it.
pub fn render_preview(img: &RgbaImage, tint: Rgb, options: &PreviewOptions) -> RgbaImage {
    let mut panel = render_backdrop(
        img.width() + 2 * options.padding,
        img.height() + 2 * options.padding,
        tint,
        options,
    );
    imageops::overlay(
        &mut panel,
        img,
        i64::from(options.padding),
        i64::from(options.padding),
    );
    panel
}

/// Render the tinted panel itself: gradient wash plus inset glow ring.
pub fn render_backdrop(width: u32, height: u32, tint: Rgb, options: &PreviewOptions) -> RgbaImage {
    // Distance from the gradient origin (top-left) to the farthest corner.
    let far = (width.saturating_sub(1) as f32)
        .hypot(height.saturating_sub(1) as f32)
        .max(1.0);

    RgbaImage::from_fn(width, height, |x, y| {
        let t = (x as f32).hypot(y as f32) / far;
        let alpha = options.inner_alpha + (options.outer_alpha - options.inner_alpha) * t;

        // Gradient wash: tint at `alpha` over a white base.
        let mut r = mix(255, tint.r, alpha);
        let mut g = mix(255, tint.g, alpha);
        let mut b = mix(255, tint.b, alpha);

        // Inset glow: full-strength tint at the panel edge fading inward.
        let edge = x.min(y).min(width - 1 - x).min(height - 1 - y);
        if edge < options.glow_radius {
            let strength = 1.0 - edge as f32 / options.glow_radius as f32;
            r = mix(r, tint.r, strength);
            g = mix(g, tint.g, strength);
            b = mix(b, tint.b, strength);
        }

        Rgba([r, g, b, 255])
    })
}

/// CSS background equivalent of the rendered gradient wash.
///
/// # Example
///
/// ```
/// use dominant_color::Rgb;
/// use huespot::preview::{css_radial_gradient, PreviewOptions};
///
/// let css = css_radial_gradient(Rgb::new(136, 8, 248), &PreviewOptions::default());
/// assert_eq!(
///     css,
///     "radial-gradient(farthest-corner at top left, \
///      rgba(136, 8, 248, 0.3), rgba(136, 8, 248, 0.5))"
/// );
/// ```
pub fn css_radial_gradient(tint: Rgb, options: &PreviewOptions) -> String {
    format!(
        "radial-gradient(farthest-corner at top left, {}, {})",
        tint.css_rgba(options.inner_alpha),
        tint.css_rgba(options.outer_alpha)
    )
}

/// CSS `box-shadow` equivalent of the rendered inset glow ring.
pub fn css_inset_glow(tint: Rgb, options: &PreviewOptions) -> String {
    format!("0 0 {}px {} inset", options.glow_radius, tint.css_rgba(1.0))
}

/// Linear blend from `from` (t = 0) to `to` (t = 1).
fn mix(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}

//! Drawing surface contract shared by the field, the particles and the overlay

use crate::config;
use crate::error::Result;

/// 8-bit RGB colour
pub type Rgb = (u8, u8, u8);

/// How text is rasterized for text-mode fields and the debug overlay.
///
/// The gradient is radial, centred on the surface, running from
/// `gradient_inner_radius` out to the surface width.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font_size: f32,
    pub max_width_ratio: f32,
    pub gradient_inner_radius: f32,
    pub gradient_stops: Vec<(f32, Rgb)>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: config::text::FONT_SIZE,
            max_width_ratio: config::text::MAX_WIDTH_RATIO,
            gradient_inner_radius: config::text::GRADIENT_INNER_RADIUS,
            gradient_stops: config::text::GRADIENT_STOPS.to_vec(),
        }
    }
}

/// A 2D pixel surface the effect draws on.
///
/// Implementations own all backend state; nothing in the core keeps a
/// reference to a surface between calls.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with the background colour
    fn clear(&mut self);

    /// Stroke an open polyline. Fewer than two points draws nothing.
    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgb, line_width: f32);

    /// Fill `text` centred on the surface with the style's radial gradient
    fn fill_text_centered(&mut self, text: &str, style: &TextStyle) -> Result<()>;

    /// Read back a region as row-major RGBA8.
    ///
    /// Pixels outside the backing image come back as transparent black, so the
    /// result is always `w * h * 4` bytes.
    fn read_pixels(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<Vec<u8>>;
}

/// Headless surface for tests
#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory RGBA surface. Text is painted as a gradient block roughly the
    /// size the glyphs would cover.
    pub struct MemorySurface {
        pub width: u32,
        pub height: u32,
        pub pixels: Vec<u8>,
        pub strokes: Vec<(Vec<(f32, f32)>, Rgb)>,
        pub text_calls: usize,
        pub clears: usize,
        pub fail_text: bool,
    }

    impl MemorySurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0; (width * height * 4) as usize],
                strokes: Vec::new(),
                text_calls: 0,
                clears: 0,
                fail_text: false,
            }
        }

        /// Surface whose text rendering always fails, like a missing font
        pub fn without_font(width: u32, height: u32) -> Self {
            Self {
                fail_text: true,
                ..Self::new(width, height)
            }
        }

        pub fn resize(&mut self, width: u32, height: u32) {
            *self = Self {
                fail_text: self.fail_text,
                ..Self::new(width, height)
            };
        }
    }

    fn gradient_color(stops: &[(f32, Rgb)], t: f32) -> Rgb {
        let Some(&(first_offset, first)) = stops.first() else {
            return (0, 0, 0);
        };
        if t <= first_offset {
            return first;
        }
        for pair in stops.windows(2) {
            let (a_offset, a) = pair[0];
            let (b_offset, b) = pair[1];
            if t <= b_offset {
                let f = (t - a_offset) / (b_offset - a_offset);
                let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
                return (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2));
            }
        }
        stops[stops.len() - 1].1
    }

    impl Surface for MemorySurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn clear(&mut self) {
            self.pixels.fill(0);
            self.clears += 1;
        }

        fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Rgb, _line_width: f32) {
            if points.len() < 2 {
                return;
            }
            self.strokes.push((points.to_vec(), color));
        }

        fn fill_text_centered(&mut self, text: &str, style: &TextStyle) -> Result<()> {
            if self.fail_text {
                return Err(crate::error::Error::NoFont);
            }
            self.text_calls += 1;

            let (cx, cy) = (self.width as f32 * 0.5, self.height as f32 * 0.5);
            let natural = text.chars().count() as f32 * style.font_size * 0.6;
            let max_width = self.width as f32 * style.max_width_ratio;
            let fit = if natural > max_width { max_width / natural } else { 1.0 };
            let half_w = natural * fit * 0.5;
            let half_h = style.font_size * fit * 0.35;

            let outer = self.width as f32;
            let inner = style.gradient_inner_radius;
            for y in 0..self.height {
                for x in 0..self.width {
                    let (dx, dy) = (x as f32 - cx, y as f32 - cy);
                    if dx.abs() > half_w || dy.abs() > half_h {
                        continue;
                    }
                    let t = ((dx.hypot(dy) - inner) / (outer - inner)).clamp(0.0, 1.0);
                    let (r, g, b) = gradient_color(&style.gradient_stops, t);
                    let i = ((y * self.width + x) * 4) as usize;
                    self.pixels[i..i + 4].copy_from_slice(&[r, g, b, 255]);
                }
            }
            Ok(())
        }

        fn read_pixels(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<Vec<u8>> {
            let mut out = vec![0; (w * h * 4) as usize];
            for row in 0..h {
                for col in 0..w {
                    let (sx, sy) = (x + col, y + row);
                    if sx >= self.width || sy >= self.height {
                        continue;
                    }
                    let src = ((sy * self.width + sx) * 4) as usize;
                    let dst = ((row * w + col) * 4) as usize;
                    out[dst..dst + 4].copy_from_slice(&self.pixels[src..src + 4]);
                }
            }
            Ok(out)
        }
    }

    mod tests {
        use super::*;

        #[test]
        fn test_gradient_color_clamps_to_ends() {
            let stops = config::text::GRADIENT_STOPS;
            assert_eq!(gradient_color(&stops, 0.0), (255, 0, 0));
            assert_eq!(gradient_color(&stops, 1.0), (0, 0, 255));
            assert_eq!(gradient_color(&stops, 0.4), (255, 255, 0));
        }

        #[test]
        fn test_read_pixels_pads_outside() {
            let mut surface = MemorySurface::new(4, 4);
            let pixels = surface.read_pixels(2, 2, 4, 4).unwrap();
            assert_eq!(pixels.len(), 64);
            assert!(pixels.iter().all(|&b| b == 0));
        }
    }
}

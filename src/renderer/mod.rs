//! GPU-accelerated drawing surface backed by femtovg

mod fonts;

use femtovg::{Align, Baseline, Canvas, Color, FontId, Paint, Path, renderer::OpenGl};
use flow_field::config::rendering::BACKGROUND;
use flow_field::error::{Error, Result};
use flow_field::surface::{Rgb, Surface, TextStyle};

fn color((r, g, b): Rgb) -> Color {
    Color::rgb(r, g, b)
}

pub struct CanvasSurface {
    canvas: Canvas<OpenGl>,
    fonts: Vec<FontId>,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(renderer: OpenGl, width: u32, height: u32) -> Self {
        let mut canvas = Canvas::new(renderer).expect("Failed to create canvas");
        let fonts = fonts::load_fonts(&mut canvas);
        canvas.set_size(width, height, 1.0);
        Self {
            canvas,
            fonts,
            width,
            height,
        }
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.canvas.set_size(width, height, 1.0);
    }

    /// Plain left-aligned label, used for the text prompt
    pub fn draw_label(&mut self, x: f32, y: f32, text: &str, font_size: f32, fill: Rgb) {
        if self.fonts.is_empty() {
            return;
        }
        let mut paint = Paint::color(color(fill));
        paint.set_font(&self.fonts);
        paint.set_font_size(font_size);
        paint.set_text_baseline(Baseline::Bottom);
        let _ = self.canvas.fill_text(x.round(), y.round(), text, &paint);
    }

    /// Submit queued draw commands to the GPU
    pub fn flush(&mut self) {
        self.canvas.flush();
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.canvas
            .clear_rect(0, 0, self.width, self.height, color(BACKGROUND));
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], stroke: Rgb, line_width: f32) {
        let [(x0, y0), rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut path = Path::new();
        path.move_to(*x0, *y0);
        for &(x, y) in rest {
            path.line_to(x, y);
        }
        let mut paint = Paint::color(color(stroke));
        paint.set_line_width(line_width);
        self.canvas.stroke_path(&path, &paint);
    }

    fn fill_text_centered(&mut self, text: &str, style: &TextStyle) -> Result<()> {
        if self.fonts.is_empty() {
            return Err(Error::NoFont);
        }
        let (cx, cy) = (self.width as f32 * 0.5, self.height as f32 * 0.5);
        let stops: Vec<(f32, Color)> = style
            .gradient_stops
            .iter()
            .map(|&(offset, rgb)| (offset, color(rgb)))
            .collect();
        let mut paint = Paint::radial_gradient_stops(
            cx,
            cy,
            style.gradient_inner_radius,
            self.width as f32,
            stops,
        );
        paint.set_font(&self.fonts);
        paint.set_font_size(style.font_size);
        paint.set_text_align(Align::Center);
        paint.set_text_baseline(Baseline::Middle);

        // Shrink to the max width the way canvas fillText does
        let max_width = self.width as f32 * style.max_width_ratio;
        let metrics = self
            .canvas
            .measure_text(cx, cy, text, &paint)
            .map_err(|err| Error::Render(format!("{err:?}")))?;
        if metrics.width() > max_width && metrics.width() > 0.0 {
            paint.set_font_size(style.font_size * max_width / metrics.width());
        }

        self.canvas
            .fill_text(cx, cy, text, &paint)
            .map_err(|err| Error::Render(format!("{err:?}")))?;
        Ok(())
    }

    fn read_pixels(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<Vec<u8>> {
        self.canvas.flush();
        let image = self
            .canvas
            .screenshot()
            .map_err(|err| Error::Render(format!("{err:?}")))?;
        let (img_w, img_h, stride) = (image.width(), image.height(), image.stride());
        let buf = image.buf();

        let mut out = vec![0u8; (w * h * 4) as usize];
        for row in 0..h as usize {
            let sy = y as usize + row;
            if sy >= img_h {
                break;
            }
            for col in 0..w as usize {
                let sx = x as usize + col;
                if sx >= img_w {
                    break;
                }
                let px = buf[sy * stride + sx];
                let dst = (row * w as usize + col) * 4;
                out[dst..dst + 4].copy_from_slice(&[px.r, px.g, px.b, px.a]);
            }
        }
        Ok(out)
    }
}

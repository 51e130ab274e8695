//! Flow field: a row-major grid of angles covering the surface

use crate::config;
use crate::error::{Error, Result};
use crate::settings::FieldMode;
use crate::surface::{Surface, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct FlowField {
    cell_size: u32,
    rows: usize,
    cols: usize,
    /// Angles in radians, indexed by `row * cols + col`
    cells: Vec<f32>,
}

impl FlowField {
    fn grid(width: u32, height: u32, cell_size: u32) -> (u32, usize, usize) {
        let cell_size = cell_size.max(1);
        let rows = (height / cell_size) as usize;
        let cols = (width / cell_size) as usize;
        (cell_size, rows, cols)
    }

    /// Trigonometric field, a pure function of grid coordinates
    pub fn procedural(width: u32, height: u32, cell_size: u32, zoom: f32, curve: f32) -> Self {
        let (cell_size, rows, cols) = Self::grid(width, height, cell_size);
        let mut cells = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                let angle = ((x as f32 * zoom).cos() + (y as f32 * zoom).sin()) * curve;
                cells.push(angle);
            }
        }
        Self {
            cell_size,
            rows,
            cols,
            cells,
        }
    }

    /// Sample an RGBA8 buffer of `width * height` pixels on the cell grid.
    ///
    /// Each cell takes the pixel at its top-left corner; alpha is ignored.
    pub fn from_raster(pixels: &[u8], width: u32, height: u32, cell_size: u32) -> Self {
        let (cell_size, rows, cols) = Self::grid(width, height, cell_size);
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let px = col * cell_size as usize;
                let py = row * cell_size as usize;
                let i = (py * width as usize + px) * 4;
                let angle = match pixels.get(i..i + 3) {
                    Some(rgb) => {
                        let sum = rgb[0] as f32 + rgb[1] as f32 + rgb[2] as f32;
                        let grayscale = sum / 3.0;
                        grayscale / 255.0 * config::field::TEXT_FULL_TURN
                    }
                    None => 0.0,
                };
                cells.push(angle);
            }
        }
        Self {
            cell_size,
            rows,
            cols,
            cells,
        }
    }

    /// Rasterize `text` on the surface and sample its luminance.
    ///
    /// The surface is cleared before and after, so the text never reaches a
    /// presented frame.
    pub fn from_text<S: Surface + ?Sized>(
        surface: &mut S,
        text: &str,
        cell_size: u32,
        style: &TextStyle,
    ) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        let (width, height) = (surface.width(), surface.height());

        surface.clear();
        let pixels = surface
            .fill_text_centered(text, style)
            .and_then(|()| surface.read_pixels(0, 0, width, height));
        surface.clear();

        Ok(Self::from_raster(&pixels?, width, height, cell_size))
    }

    /// Build a field for `mode`, falling back to procedural when text fails
    pub fn generate<S: Surface + ?Sized>(
        mode: &FieldMode,
        surface: &mut S,
        cell_size: u32,
        zoom: f32,
        curve: f32,
    ) -> (Self, FieldMode) {
        let (width, height) = (surface.width(), surface.height());
        if let FieldMode::Text(text) = mode {
            match Self::from_text(surface, text, cell_size, &TextStyle::default()) {
                Ok(field) => return (field, mode.clone()),
                Err(err) => {
                    log::warn!("Text field for {text:?} failed ({err}), using procedural field");
                }
            }
        }
        (
            Self::procedural(width, height, cell_size, zoom, curve),
            FieldMode::Procedural,
        )
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat cell index for a pixel position.
    ///
    /// Column and row are clamped to the grid independently, so positions on
    /// or past any edge resolve to the nearest border cell. Returns `None` only
    /// for an empty field.
    pub fn index_of(&self, x: f32, y: f32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let cell = self.cell_size as f32;
        let col = ((x / cell).floor().max(0.0) as usize).min(self.cols - 1);
        let row = ((y / cell).floor().max(0.0) as usize).min(self.rows - 1);
        Some(row * self.cols + col)
    }

    /// Angle under a pixel position, 0 for an empty field
    pub fn angle_at(&self, x: f32, y: f32) -> f32 {
        self.index_of(x, y).map_or(0.0, |i| self.cells[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::MemorySurface;

    #[test]
    fn test_grid_dimensions() {
        let field = FlowField::procedural(640, 480, 10, 0.07, 1.3);
        assert_eq!(field.rows(), 48);
        assert_eq!(field.cols(), 64);
        assert_eq!(field.len(), 3072);
    }

    #[test]
    fn test_procedural_values() {
        let field = FlowField::procedural(640, 480, 10, 0.07, 1.3);
        // (cos 0 + sin 0) * 1.3
        assert!((field.cells()[0] - 1.3).abs() < 1e-6);
        let expected = ((3.0f32 * 0.07).cos() + (2.0f32 * 0.07).sin()) * 1.3;
        assert_eq!(field.cells()[2 * 64 + 3], expected);
    }

    #[test]
    fn test_procedural_is_deterministic() {
        let a = FlowField::procedural(333, 217, 7, 0.05, 2.0);
        let b = FlowField::procedural(333, 217, 7, 0.05, 2.0);
        let bits = |f: &FlowField| f.cells().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_index_covers_grid_exactly_once() {
        let field = FlowField::procedural(640, 480, 10, 0.07, 1.3);
        let mut seen = vec![false; field.len()];
        for row in 0..field.rows() {
            for col in 0..field.cols() {
                let i = field
                    .index_of(col as f32 * 10.0 + 5.0, row as f32 * 10.0 + 5.0)
                    .unwrap();
                assert_eq!(i, row * field.cols() + col);
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_index_clamped_at_edges() {
        let field = FlowField::procedural(640, 480, 10, 0.07, 1.3);
        assert_eq!(field.index_of(640.0, 480.0), Some(3071));
        assert_eq!(field.index_of(-3.0, -3.0), Some(0));
        assert_eq!(field.index_of(10_000.0, 0.0), Some(63));
        assert_eq!(field.index_of(0.0, 10_000.0), Some(47 * 64));
    }

    #[test]
    fn test_empty_field() {
        let field = FlowField::procedural(5, 5, 10, 0.07, 1.3);
        assert!(field.is_empty());
        assert_eq!(field.index_of(1.0, 1.0), None);
        assert_eq!(field.angle_at(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_raster_grayscale_to_angle() {
        // 2x1 cells of 1px: white then mid gray with full alpha ignored
        let pixels = [255, 255, 255, 0, 30, 60, 90, 255];
        let field = FlowField::from_raster(&pixels, 2, 1, 1);
        assert!((field.cells()[0] - 6.26).abs() < 1e-5);
        let expected = 60.0 / 255.0 * 6.26;
        assert!((field.cells()[1] - expected).abs() < 1e-5);
    }

    #[test]
    fn test_text_field_differs_from_procedural() {
        let mut surface = MemorySurface::new(640, 480);
        let style = TextStyle::default();
        let text = FlowField::from_text(&mut surface, "HI", 10, &style).unwrap();
        let base = FlowField::procedural(640, 480, 10, 0.07, 1.3);
        assert_eq!(text.len(), 3072);

        // centre cell lies under the glyph block
        let centre = text.index_of(320.0, 240.0).unwrap();
        assert!(text.cells()[centre] > 0.0);

        let differing = text
            .cells()
            .iter()
            .zip(base.cells())
            .filter(|(a, b)| (*a - *b).abs() > 1e-3)
            .count();
        assert!(differing > 1000);

        // corners are background
        assert_eq!(text.cells()[0], 0.0);
        assert_eq!(surface.text_calls, 1);
        assert!(surface.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut surface = MemorySurface::new(64, 48);
        let result = FlowField::from_text(&mut surface, "   ", 10, &TextStyle::default());
        assert!(matches!(result, Err(Error::EmptyText)));
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_generate_falls_back_without_font() {
        let mut surface = MemorySurface::without_font(640, 480);
        let mode = FieldMode::Text("HI".to_string());
        let (field, used) = FlowField::generate(&mode, &mut surface, 10, 0.07, 1.3);
        assert_eq!(used, FieldMode::Procedural);
        assert_eq!(field, FlowField::procedural(640, 480, 10, 0.07, 1.3));
    }
}

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use flow_field::{Effect, FlowField, Rgb, Settings, Surface, TextStyle};

// The GPU surface needs a window, so frames are driven against a surface that
// discards draw calls.
struct NullSurface {
    width: u32,
    height: u32,
}

impl Surface for NullSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {}

    fn stroke_polyline(&mut self, points: &[(f32, f32)], _color: Rgb, _line_width: f32) {
        black_box(points);
    }

    fn fill_text_centered(&mut self, _text: &str, _style: &TextStyle) -> flow_field::Result<()> {
        Ok(())
    }

    fn read_pixels(&mut self, _x: u32, _y: u32, w: u32, h: u32) -> flow_field::Result<Vec<u8>> {
        Ok(vec![0; (w * h * 4) as usize])
    }
}

fn benchmark_procedural_field(c: &mut Criterion) {
    c.bench_function("procedural_field_1920x1080", |b| {
        b.iter(|| black_box(FlowField::procedural(1920, 1080, 10, 0.07, 1.3)))
    });
}

fn benchmark_raster_field(c: &mut Criterion) {
    c.bench_function("raster_field_1920x1080", |b| {
        let pixels = vec![128u8; 1920 * 1080 * 4];
        b.iter(|| black_box(FlowField::from_raster(&pixels, 1920, 1080, 10)))
    });
}

fn benchmark_frame(c: &mut Criterion) {
    c.bench_function("tick_4000_particles", |b| {
        let mut surface = NullSurface {
            width: 1920,
            height: 1080,
        };
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        let mut effect = Effect::new(&mut surface, settings);
        b.iter(|| effect.tick(&mut surface))
    });
}

criterion_group!(
    benches,
    benchmark_procedural_field,
    benchmark_raster_field,
    benchmark_frame
);
criterion_main!(benches);

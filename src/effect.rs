//! Frame orchestration: field + particles + debug overlay

use crate::config::rendering::{GRID_COLOR, GRID_LINE_WIDTH, RESIZE_STEP};
use crate::field::FlowField;
use crate::particles::ParticleSystem;
use crate::settings::{FieldMode, Settings};
use crate::surface::{Surface, TextStyle};

/// Round a window dimension up to the next multiple of the resize step
pub fn snap_dimension(n: u32) -> u32 {
    n.div_ceil(RESIZE_STEP) * RESIZE_STEP
}

pub struct Effect {
    settings: Settings,
    width: u32,
    height: u32,
    field: FlowField,
    particles: ParticleSystem,
}

impl Effect {
    pub fn new<S: Surface + ?Sized>(surface: &mut S, settings: Settings) -> Self {
        let settings = settings.validated();
        let (width, height) = (surface.width(), surface.height());
        let (field, particles, mode) = Self::build(surface, &settings);
        let mut effect = Self {
            settings,
            width,
            height,
            field,
            particles,
        };
        effect.settings.mode = mode;
        effect
    }

    /// Build a field and a matching particle set for the current surface
    fn build<S: Surface + ?Sized>(
        surface: &mut S,
        settings: &Settings,
    ) -> (FlowField, ParticleSystem, FieldMode) {
        let (width, height) = (surface.width(), surface.height());
        let (field, mode) = FlowField::generate(
            &settings.mode,
            surface,
            settings.cell_size,
            settings.zoom,
            settings.curve,
        );
        let particles =
            ParticleSystem::new(settings.number_of_particles, width, height, settings.seed);
        log::info!(
            "Built {}x{} field ({} cells, {:?}) with {} particles",
            field.cols(),
            field.rows(),
            field.len(),
            mode,
            particles.len()
        );
        (field, particles, mode)
    }

    /// Discard field and particles and rebuild both from the settings
    pub fn regenerate<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (field, particles, mode) = Self::build(surface, &self.settings);
        self.width = surface.width();
        self.height = surface.height();
        self.field = field;
        self.particles = particles;
        self.settings.mode = mode;
    }

    /// One frame: clear, overlay, then draw and advance every particle
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        if self.settings.debug {
            self.draw_overlay(surface);
        }
        self.particles.draw_and_update(surface, &self.field);
    }

    fn draw_overlay<S: Surface + ?Sized>(&self, surface: &mut S) {
        let cell = self.field.cell_size() as f32;
        let (width, height) = (self.width as f32, self.height as f32);

        for c in 0..self.field.cols() {
            let x = cell * c as f32;
            surface.stroke_polyline(&[(x, 0.0), (x, height)], GRID_COLOR, GRID_LINE_WIDTH);
        }
        for r in 0..self.field.rows() {
            let y = cell * r as f32;
            surface.stroke_polyline(&[(0.0, y), (width, y)], GRID_COLOR, GRID_LINE_WIDTH);
        }

        if let FieldMode::Text(text) = &self.settings.mode {
            if let Err(err) = surface.fill_text_centered(text, &TextStyle::default()) {
                log::debug!("Overlay text not drawn: {err}");
            }
        }
    }

    /// The surface changed size; rebuild for the new dimensions
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if (surface.width(), surface.height()) == (self.width, self.height) {
            return;
        }
        self.regenerate(surface);
    }

    /// Switch to a text field. Blank text is ignored and returns `false`.
    pub fn submit_text<S: Surface + ?Sized>(&mut self, surface: &mut S, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("Ignoring blank text submission");
            return false;
        }
        self.settings.mode = FieldMode::Text(text.to_string());
        self.regenerate(surface);
        true
    }

    /// Switch back to the procedural field
    pub fn use_procedural<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.settings.mode = FieldMode::Procedural;
        self.regenerate(surface);
    }

    pub fn set_debug(&mut self, debug: bool) {
        log::debug!("Debug overlay {}", if debug { "on" } else { "off" });
        self.settings.debug = debug;
    }

    pub fn toggle_debug(&mut self) {
        self.set_debug(!self.settings.debug);
    }

    pub fn debug(&self) -> bool {
        self.settings.debug
    }

    pub fn mode(&self) -> &FieldMode {
        &self.settings.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn field(&self) -> &FlowField {
        &self.field
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

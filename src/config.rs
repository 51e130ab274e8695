//! Centralized configuration constants for Flow Field
//!
//! All magic numbers and tunable parameters are defined here. Runtime
//! overrides live in [`crate::settings`].

use crate::surface::Rgb;

/// Field generation defaults
pub mod field {
    /// Pixels per grid cell
    pub const CELL_SIZE: u32 = 10;
    /// Procedural field frequency
    pub const ZOOM: f32 = 0.07;
    /// Procedural field amplitude
    pub const CURVE: f32 = 1.3;
    /// Grayscale-to-angle multiplier for text fields. Kept short of 2π on purpose.
    pub const TEXT_FULL_TURN: f32 = 6.26;
}

/// Particle defaults
pub mod particles {
    use super::Rgb;

    /// Number of particles in a freshly built system
    pub const NUMBER_OF_PARTICLES: usize = 4000;
    /// Trail length range (min inclusive, max exclusive)
    pub const TRAIL_MIN: usize = 10;
    pub const TRAIL_MAX: usize = 210;
    /// Speed multiplier range (inclusive)
    pub const SPEED_MIN: u8 = 1;
    pub const SPEED_MAX: u8 = 5;
    /// Stroke width of a trail
    pub const LINE_WIDTH: f32 = 1.0;
    /// Trail colours
    pub const PALETTE: [Rgb; 8] = [
        (0x32, 0xa8, 0xe3),
        (0x46, 0xb9, 0xf2),
        (0x1b, 0x80, 0xb3),
        (0x14, 0x98, 0xdb),
        (0x6e, 0xc1, 0xeb),
        (0x06, 0x3f, 0x5c),
        (0x00, 0xa9, 0xff),
        (0x29, 0x4e, 0x61),
    ];
}

/// Text rasterization
pub mod text {
    use super::Rgb;

    /// Font size used to rasterize submitted text
    pub const FONT_SIZE: f32 = 450.0;
    /// Text is shrunk to fit this fraction of the surface width
    pub const MAX_WIDTH_RATIO: f32 = 0.8;
    /// Inner radius of the radial fill gradient
    pub const GRADIENT_INNER_RADIUS: f32 = 10.0;
    /// Radial gradient stops (offset, colour)
    pub const GRADIENT_STOPS: [(f32, Rgb); 4] = [
        (0.2, (255, 0, 0)),
        (0.4, (255, 255, 0)),
        (0.6, (0, 255, 255)),
        (0.8, (0, 0, 255)),
    ];
}

/// Rendering constants
pub mod rendering {
    use super::Rgb;

    /// Frame background
    pub const BACKGROUND: Rgb = (0, 0, 0);
    /// Debug grid stroke
    pub const GRID_COLOR: Rgb = (255, 0, 0);
    pub const GRID_LINE_WIDTH: f32 = 0.2;
    /// Resize dimensions are rounded up to a multiple of this
    pub const RESIZE_STEP: u32 = 10;
    /// Prompt text size
    pub const PROMPT_FONT_SIZE: f32 = 18.0;
    /// Prompt distance from the bottom edge
    pub const PROMPT_MARGIN: f32 = 24.0;
}

//! Flow Field - particles tracing a vector field of angles
//!
//! The field comes from a trigonometric function of the grid or from the
//! luminance of rasterized text. Drawing goes through the [`surface::Surface`]
//! trait so the whole effect runs headless under test.

pub mod config;
pub mod effect;
pub mod error;
pub mod field;
pub mod particles;
pub mod settings;
pub mod surface;

pub use effect::Effect;
pub use error::{Error, Result};
pub use field::FlowField;
pub use particles::{Particle, ParticleSystem, Phase};
pub use settings::{FieldMode, Settings};
pub use surface::{Rgb, Surface, TextStyle};

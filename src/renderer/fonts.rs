//! Font loading and discovery

use femtovg::{Canvas, FontId, renderer::OpenGl};

/// Load a heavy display font with fallbacks for text fields.
///
/// Returns an empty list when nothing loads; text fields then fall back to the
/// procedural field instead of aborting.
pub fn load_fonts(canvas: &mut Canvas<OpenGl>) -> Vec<FontId> {
    let mut fonts = Vec::new();

    // 1. Bold sans faces fill the most cells
    let display_paths = [
        "/usr/share/fonts/truetype/msttcorefonts/Impact.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/Library/Fonts/Impact.ttf",
        "C:\\Windows\\Fonts\\impact.ttf",
    ];

    for path in &display_paths {
        if let Ok(font) = canvas.add_font(path) {
            log::debug!("Loaded display font {path}");
            fonts.push(font);
            break;
        }
    }

    // 2. Regular faces for glyphs the display font lacks
    let fallback_paths = [
        "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    for path in &fallback_paths {
        if let Ok(font) = canvas.add_font(path) {
            fonts.push(font);
        }
    }

    // 3. Any TTF at all
    if fonts.is_empty() {
        if let Ok(entries) = std::fs::read_dir("/usr/share/fonts/truetype") {
            'search: for entry in entries.flatten() {
                if !entry.path().is_dir() {
                    continue;
                }
                let Ok(sub_entries) = std::fs::read_dir(entry.path()) else {
                    continue;
                };
                for sub_entry in sub_entries.flatten() {
                    let path = sub_entry.path();
                    if path.extension().map(|e| e == "ttf").unwrap_or(false) {
                        if let Ok(font) = canvas.add_font(&path) {
                            fonts.push(font);
                            break 'search;
                        }
                    }
                }
            }
        }
    }

    if fonts.is_empty() {
        log::warn!(
            "No usable font found; text fields are disabled. Install dejavu-fonts or liberation-fonts."
        );
    }

    fonts
}

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::canvas::Canvas;
use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::layout::Layout;

/// Draw the controller pair on a fresh transparent `size × size` canvas.
pub fn generate_icon(size: u32) -> Canvas {
    let layout = Layout::for_size(size);
    debug!("layout for {size}px: {layout:?}");

    let mut canvas = Canvas::new(size);
    for shape in layout.shapes() {
        canvas.draw(&shape);
    }
    canvas
}

/// Render one icon and write it to `path` as PNG.
pub fn render(size: u32, path: &Path) -> Result<(), IconError> {
    let canvas = generate_icon(size);
    canvas.save(path)?;
    info!("{}x{} icon, {} opaque pixels", size, size, canvas.opaque_pixel_count());
    println!("Created {}", path.display());
    Ok(())
}

/// Create the output directory and render every configured target into it.
/// Stops at the first failure; files already written are left alone.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>, IconError> {
    debug!("output directory: {}", config.out_dir.display());
    fs::create_dir_all(&config.out_dir)
        .map_err(|source| IconError::CreateDir { path: config.out_dir.clone(), source })?;

    let mut written = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let path = config.target_path(target);
        render(target.size, &path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{OPAQUE, TRANSPARENT};

    #[test]
    fn canvas_matches_requested_size() {
        for size in [1, 7, 18, 36, 100] {
            let canvas = generate_icon(size);
            assert_eq!((canvas.width(), canvas.height()), (size, size));
        }
    }

    #[test]
    fn something_is_drawn() {
        assert!(generate_icon(18).opaque_pixel_count() > 0);
        assert!(generate_icon(36).opaque_pixel_count() > generate_icon(18).opaque_pixel_count());
    }

    #[test]
    fn base_icon_pixels() {
        let canvas = generate_icon(18);
        // Body interior next to the stick.
        assert_eq!(canvas.pixel(3, 9), Some(OPAQUE));
        assert_eq!(canvas.pixel(12, 9), Some(OPAQUE));
        // Stick and button holes.
        assert_eq!(canvas.pixel(5, 6), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(5, 12), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(12, 12), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(12, 6), Some(TRANSPARENT));
        // Outside both bodies.
        assert_eq!(canvas.pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(17, 17), Some(TRANSPARENT));
        assert_eq!(canvas.pixel(1, 9), Some(TRANSPARENT));
    }

    #[test]
    fn halves_mirror_each_other() {
        // The right half is the left half flipped vertically and shifted over.
        let size = 36;
        let canvas = generate_icon(size);
        let l = Layout::for_size(size);
        let [left, right] = l.bodies();
        for y in left.y0..=left.y1 {
            for dx in 0..=l.body_width {
                let my = left.y0 + left.y1 - y;
                assert_eq!(canvas.pixel(left.x0 + dx, y), canvas.pixel(right.x0 + dx, my), "({dx}, {y})");
            }
        }
    }

    #[test]
    fn zero_size_renders_empty_canvas() {
        let canvas = generate_icon(0);
        assert_eq!((canvas.width(), canvas.height()), (0, 0));
        assert_eq!(canvas.opaque_pixel_count(), 0);
    }
}

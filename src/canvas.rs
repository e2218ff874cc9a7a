use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::IconError;

/// Body color. Black so the asset catalog can treat it as a template image.
pub const OPAQUE: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Pixel box with inclusive corners: columns `x0..=x1`, rows `y0..=y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box enclosing a circle of `radius` centred on `(cx, cy)`.
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Opaque body with rounded corners.
    RoundedRect { bounds: Rect, radius: i32 },
    /// Opaque filled circle.
    Circle { bounds: Rect },
    /// Filled circle that overwrites whatever is underneath with full transparency.
    Cutout { bounds: Rect },
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match *self {
            Shape::RoundedRect { bounds, .. } | Shape::Circle { bounds } | Shape::Cutout { bounds } => {
                bounds
            }
        }
    }

    pub fn is_cutout(&self) -> bool {
        matches!(self, Shape::Cutout { .. })
    }
}

/// Square RGBA drawing surface. Pixels are overwritten, never blended.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Fully transparent `size × size` canvas.
    pub fn new(size: u32) -> Self {
        Self { image: RgbaImage::from_pixel(size, size, TRANSPARENT) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return None;
        }
        Some(*self.image.get_pixel(x as u32, y as u32))
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_pixel_count(&self) -> usize {
        self.image.pixels().filter(|p| p[3] != 0).count()
    }

    pub fn draw(&mut self, shape: &Shape) {
        match *shape {
            Shape::RoundedRect { bounds, radius } => self.fill_rounded_rect(bounds, radius, OPAQUE),
            Shape::Circle { bounds } => self.fill_ellipse(bounds, OPAQUE),
            Shape::Cutout { bounds } => self.fill_ellipse(bounds, TRANSPARENT),
        }
    }

    fn fill_rounded_rect(&mut self, bounds: Rect, radius: i32, color: Rgba<u8>) {
        let r = radius.min(bounds.width() / 2).min(bounds.height() / 2);
        self.fill_where(bounds, color, |x, y| r <= 0 || in_rounded_rect(bounds, r, x, y));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgba<u8>) {
        self.fill_where(bounds, color, |x, y| in_ellipse(bounds, x, y));
    }

    /// Paint every pixel of `bounds` that lies on the canvas and passes `inside`.
    fn fill_where(&mut self, bounds: Rect, color: Rgba<u8>, inside: impl Fn(i32, i32) -> bool) {
        let w = self.image.width() as i32;
        let h = self.image.height() as i32;
        for y in bounds.y0.max(0)..=bounds.y1.min(h - 1) {
            for x in bounds.x0.max(0)..=bounds.x1.min(w - 1) {
                if inside(x, y) {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode as PNG and write to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), IconError> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| IconError::Write { path: path.to_path_buf(), source })
    }
}

/// Pixel-centre test against the ellipse inscribed in `bounds`.
fn in_ellipse(bounds: Rect, x: i32, y: i32) -> bool {
    let rx = bounds.width() as f64 / 2.0;
    let ry = bounds.height() as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let cx = bounds.x0 as f64 + rx;
    let cy = bounds.y0 as f64 + ry;
    let dx = (x as f64 + 0.5 - cx) / rx;
    let dy = (y as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Inside `bounds` except for the corner squares, where the pixel must also
/// fall inside that corner's `2r`-wide ellipse.
fn in_rounded_rect(bounds: Rect, r: i32, x: i32, y: i32) -> bool {
    let d = 2 * r;
    let corner_x = if x < bounds.x0 + r {
        Some(bounds.x0)
    } else if x > bounds.x1 - r {
        Some(bounds.x1 - d)
    } else {
        None
    };
    let corner_y = if y < bounds.y0 + r {
        Some(bounds.y0)
    } else if y > bounds.y1 - r {
        Some(bounds.y1 - d)
    } else {
        None
    };
    match (corner_x, corner_y) {
        (Some(cx), Some(cy)) => in_ellipse(Rect::new(cx, cy, cx + d, cy + d), x, y),
        _ => true,
    }
}

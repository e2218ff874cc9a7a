use crate::canvas::{Rect, Shape};

/// Design grid the measurements below are expressed in.
pub const BASE_SIZE: f64 = 18.0;

const BODY_WIDTH: f64 = 6.0;
const BODY_HEIGHT: f64 = 14.0;
const CORNER_RADIUS: f64 = 2.0;
const GAP: f64 = 1.0;
const STICK_RADIUS: f64 = 1.5;
const BUTTON_RADIUS: f64 = 0.8;
const BUTTON_OFFSET: f64 = 1.5;
/// Distance from a body's top or bottom edge to the stick / button cluster centre.
const CLUSTER_INSET: f64 = 4.0;

/// Measurements of the controller pair for one canvas size, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: u32,
    pub body_width: i32,
    pub body_height: i32,
    pub corner_radius: i32,
    pub gap: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub stick_radius: i32,
    pub button_radius: i32,
    pub button_offset: i32,
    pub cluster_inset: i32,
}

/// Scales a design measurement and truncates toward zero.
fn scaled(units: f64, scale: f64) -> i32 {
    (units * scale) as i32
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        let scale = size as f64 / BASE_SIZE;
        let canvas = size as i32;

        let body_width = scaled(BODY_WIDTH, scale);
        let body_height = scaled(BODY_HEIGHT, scale);
        let gap = scaled(GAP, scale);
        let pair_width = body_width * 2 + gap;

        Self {
            size,
            body_width,
            body_height,
            corner_radius: scaled(CORNER_RADIUS, scale),
            gap,
            start_x: (canvas - pair_width).div_euclid(2),
            start_y: (canvas - body_height).div_euclid(2),
            stick_radius: scaled(STICK_RADIUS, scale),
            button_radius: scaled(BUTTON_RADIUS, scale).max(1),
            button_offset: scaled(BUTTON_OFFSET, scale),
            cluster_inset: scaled(CLUSTER_INSET, scale),
        }
    }

    /// Width of both bodies plus the gap between them.
    pub fn pair_width(&self) -> i32 {
        self.body_width * 2 + self.gap
    }

    pub fn left_x(&self) -> i32 {
        self.start_x
    }

    pub fn right_x(&self) -> i32 {
        self.start_x + self.body_width + self.gap
    }

    /// Left and right body boxes.
    pub fn bodies(&self) -> [Rect; 2] {
        [self.left_x(), self.right_x()].map(|x| {
            Rect::new(x, self.start_y, x + self.body_width, self.start_y + self.body_height)
        })
    }

    fn upper_cluster_y(&self) -> i32 {
        self.start_y + self.cluster_inset
    }

    fn lower_cluster_y(&self) -> i32 {
        self.start_y + self.body_height - self.cluster_inset
    }

    /// Every shape of the icon in paint order: the two bodies, then the cutouts.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut shapes: Vec<Shape> = self
            .bodies()
            .into_iter()
            .map(|bounds| Shape::RoundedRect { bounds, radius: self.corner_radius })
            .collect();

        let left_cx = self.left_x() + self.body_width / 2;
        let right_cx = self.right_x() + self.body_width / 2;

        // Left half: stick on top, d-pad below.
        shapes.push(self.stick(left_cx, self.upper_cluster_y()));
        shapes.extend(self.buttons(left_cx, self.lower_cluster_y()));

        // Right half: face buttons on top, stick below.
        shapes.push(self.stick(right_cx, self.lower_cluster_y()));
        shapes.extend(self.buttons(right_cx, self.upper_cluster_y()));

        shapes
    }

    fn stick(&self, cx: i32, cy: i32) -> Shape {
        Shape::Cutout { bounds: Rect::around(cx, cy, self.stick_radius) }
    }

    /// Four dots in a plus arrangement: up, down, left, right.
    fn buttons(&self, cx: i32, cy: i32) -> impl Iterator<Item = Shape> + '_ {
        let o = self.button_offset;
        [(0, -o), (0, o), (-o, 0), (o, 0)].into_iter().map(move |(dx, dy)| Shape::Cutout {
            bounds: Rect::around(cx + dx, cy + dy, self.button_radius),
        })
    }
}

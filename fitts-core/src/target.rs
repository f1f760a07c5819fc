use serde::{Deserialize, Serialize};

/// A point in viewport pixel coordinates (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Margin kept free of the target on each edge of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub x: f64,
    pub y: f64,
}

impl Padding {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The square target the participant clicks on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    /// Top-left corner
    pub position: Point,
    /// Side length in pixels
    pub size: u32,
}

impl TargetState {
    pub const fn new(position: Point, size: u32) -> Self {
        Self { position, size }
    }

    /// Hit test, edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        let size = self.size as f64;
        point.x >= self.position.x
            && point.x <= self.position.x + size
            && point.y >= self.position.y
            && point.y <= self.position.y + size
    }

    pub fn center(&self) -> Point {
        let half = self.size as f64 / 2.0;
        Point::new(self.position.x + half, self.position.y + half)
    }

    /// Whether the target lies fully inside the padded viewport
    pub fn fits_within(&self, viewport: Viewport, padding: Padding) -> bool {
        let size = self.size as f64;
        self.position.x >= padding.x
            && self.position.y >= padding.y
            && self.position.x + size <= viewport.width - padding.x
            && self.position.y + size <= viewport.height - padding.y
    }
}

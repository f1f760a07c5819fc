use fitts_core::{Direction, Point, Viewport};
use rand::Rng;
use std::ops::Range;

/// Screen region holding the target's top-left corner.
/// Coordinates on a threshold belong to the right/bottom side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub fn locate(position: Point, split: Point) -> Self {
        let left = position.x < split.x;
        let top = position.y < split.y;
        match (left, top) {
            (true, true) => Quadrant::TopLeft,
            (false, false) => Quadrant::BottomRight,
            (true, false) => Quadrant::BottomLeft,
            (false, true) => Quadrant::TopRight,
        }
    }

    /// Angular interval in degrees the next movement is drawn from
    pub fn angle_range(&self) -> Range<f64> {
        match self {
            Quadrant::TopLeft => 0.0..90.0,
            Quadrant::TopRight => 90.0..180.0,
            Quadrant::BottomRight => 180.0..270.0,
            Quadrant::BottomLeft => 270.0..360.0,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => Direction::Positive,
            Quadrant::TopRight | Quadrant::BottomRight => Direction::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub quadrant: Quadrant,
    pub angle_deg: f64,
    pub direction: Direction,
}

/// Quadrant thresholds: the configured split, or the viewport midlines
pub fn split_for(viewport: Viewport, configured: Option<Point>) -> Point {
    configured.unwrap_or_else(|| viewport.center())
}

pub fn choose_heading<R: Rng + ?Sized>(position: Point, split: Point, rng: &mut R) -> Heading {
    let quadrant = Quadrant::locate(position, split);
    let angle_deg = rng.random_range(quadrant.angle_range());
    Heading {
        quadrant,
        angle_deg,
        direction: quadrant.direction(),
    }
}

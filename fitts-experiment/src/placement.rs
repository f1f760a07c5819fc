use fitts_core::{Axis, FittsError, Padding, Point, Result, Viewport};

/// Polar projection of `distance` pixels along `angle_deg` from `origin`
pub fn project(origin: Point, angle_deg: f64, distance: f64) -> Point {
    let radians = angle_deg.to_radians();
    Point::new(
        origin.x + radians.cos() * distance,
        origin.y + radians.sin() * distance,
    )
}

/// Keeps a target of side `size` inside the viewport minus padding.
/// A viewport that cannot hold `2 * padding + size` on either axis is rejected.
pub fn clamp_to_viewport(
    candidate: Point,
    size: u32,
    viewport: Viewport,
    padding: Padding,
) -> Result<Point> {
    let size = size as f64;
    Ok(Point::new(
        clamp_axis(candidate.x, viewport.width, padding.x, size, Axis::X)?,
        clamp_axis(candidate.y, viewport.height, padding.y, size, Axis::Y)?,
    ))
}

/// Fails when the viewport cannot fit the target on either axis
pub fn check_fits(size: u32, viewport: Viewport, padding: Padding) -> Result<()> {
    clamp_to_viewport(Point::new(padding.x, padding.y), size, viewport, padding).map(|_| ())
}

fn clamp_axis(value: f64, extent: f64, padding: f64, size: f64, axis: Axis) -> Result<f64> {
    let required = 2.0 * padding + size;
    if extent < required {
        return Err(FittsError::ViewportTooSmall {
            axis,
            available: extent,
            required,
        });
    }
    let lower = padding;
    let upper = extent - padding - size;
    Ok(value.max(lower).min(upper))
}

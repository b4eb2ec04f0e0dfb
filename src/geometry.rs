use kurbo::{Arc, BezPath, Point, Rect, Vec2};

/// Tolerance for flattening circular arcs into cubic segments.
const ARC_TOLERANCE: f64 = 0.1;

/// Point at `radius` along `angle_deg` from `center`. Angle 0 points straight
/// up (the batter's strike direction), increasing clockwise on screen.
pub fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point::new(
        center.x + radius * rad.cos(),
        center.y + radius * rad.sin(),
    )
}

pub fn mid_angle(start_deg: f64, end_deg: f64) -> f64 {
    (start_deg + end_deg) / 2.0
}

/// Filled annular sector between `inner_r` and `outer_r` spanning
/// `[start_deg, end_deg]`: outer arc forward, inner arc back, closed.
///
/// Inverted spans (`end_deg <= start_deg`) and inverted radii yield an empty
/// path rather than panicking; callers render nothing for them.
pub fn wedge_path(
    center: Point,
    inner_r: f64,
    outer_r: f64,
    start_deg: f64,
    end_deg: f64,
) -> BezPath {
    let mut path = BezPath::new();
    if end_deg <= start_deg || outer_r <= inner_r || inner_r < 0.0 {
        return path;
    }

    let a0 = (start_deg - 90.0).to_radians();
    let sweep = (end_deg - start_deg).to_radians();

    let outer_start = center + outer_r * Vec2::new(a0.cos(), a0.sin());
    let inner_end_angle = a0 + sweep;
    let inner_start = center + inner_r * Vec2::new(inner_end_angle.cos(), inner_end_angle.sin());

    path.move_to(outer_start);
    Arc::new(center, (outer_r, outer_r), a0, sweep, 0.0)
        .to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p3| path.curve_to(p1, p2, p3));
    path.line_to(inner_start);
    Arc::new(center, (inner_r, inner_r), inner_end_angle, -sweep, 0.0)
        .to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p3| path.curve_to(p1, p2, p3));
    path.close_path();
    path
}

/// Grid cell rectangle at `(line_idx, length_idx)` with a 1px inset on every
/// side, leaving a hairline gap between neighbours.
pub fn cell_rect(length_idx: usize, line_idx: usize, cell_w: f64, cell_h: f64) -> Rect {
    let x0 = line_idx as f64 * cell_w + 1.0;
    let y0 = length_idx as f64 * cell_h + 1.0;
    Rect::new(x0, y0, x0 + cell_w - 2.0, y0 + cell_h - 2.0)
}

/// Probable-impact corridor: the two central line-columns (off stump and
/// middle stump) across all `rows` length-rows.
pub fn corridor_rect(rows: usize, cell_w: f64, cell_h: f64) -> Rect {
    let x0 = 2.0 * cell_w + 1.0;
    let y0 = 1.0;
    Rect::new(
        x0,
        y0,
        x0 + 2.0 * cell_w - 2.0,
        y0 + rows as f64 * cell_h - 2.0,
    )
}

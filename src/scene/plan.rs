//! Top-down floor plan rasterised into individual pixels.
//!
//! Coordinates are window pixels with the origin at the bottom-left
//! corner. Everything is built from Bresenham lines and midpoint circles.

use crate::input::PlanToggles;

/// Room outline, white.
pub const OUTLINE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Round meeting table, amber.
pub const TABLE_COLOR: [f32; 3] = [1.0, 0.8, 0.0];
/// Desk, orange.
pub const DESK_COLOR: [f32; 3] = [1.0, 0.5, 0.0];
/// Chair, cyan.
pub const CHAIR_COLOR: [f32; 3] = [0.0, 0.7, 1.0];
/// Door jambs, green.
pub const DOOR_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
/// Windows, light blue.
pub const WINDOW_COLOR: [f32; 3] = [0.2, 0.8, 1.0];

const ROOM_LEFT: i32 = 100;
const ROOM_RIGHT: i32 = 900;
const ROOM_BOTTOM: i32 = 100;
const ROOM_TOP: i32 = 700;

const TABLE_CENTER: (i32, i32) = (500, 420);
const TABLE_RADIUS: i32 = 120;

const DESK: [i32; 4] = [220, 450, 420, 520];
const CHAIR: [i32; 4] = [440, 450, 490, 500];

const DOOR_JAMBS: [i32; 2] = [440, 560];
const DOOR_JAMB_LENGTH: i32 = 60;

const WINDOWS: [(i32, i32); 2] = [(150, 300), (700, 850)];

/// One coloured pixel of the floor plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanPoint {
    /// Column, from the left edge.
    pub x: i32,
    /// Row, from the bottom edge.
    pub y: i32,
    /// Linear RGB.
    pub color: [f32; 3],
}

/// Append every pixel on the segment from `(x0, y0)` to `(x1, y1)`,
/// both endpoints included.
pub fn bresenham_line(
    (mut x0, mut y0): (i32, i32),
    (x1, y1): (i32, i32),
    out: &mut Vec<(i32, i32)>,
) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        out.push((x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Append the pixels of a circle of radius `r` around `(cx, cy)` using the
/// eight-way symmetric midpoint algorithm.
///
/// Octant boundaries are emitted more than once; callers that care can
/// deduplicate.
pub fn midpoint_circle(
    (cx, cy): (i32, i32),
    r: i32,
    out: &mut Vec<(i32, i32)>,
) {
    if r < 0 {
        return;
    }
    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;

    while x <= y {
        out.extend_from_slice(&[
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ]);
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
}

/// Outline of the axis-aligned rectangle `[x0, y0, x1, y1]`.
fn rectangle([x0, y0, x1, y1]: [i32; 4], out: &mut Vec<(i32, i32)>) {
    bresenham_line((x0, y0), (x1, y0), out);
    bresenham_line((x1, y0), (x1, y1), out);
    bresenham_line((x1, y1), (x0, y1), out);
    bresenham_line((x0, y1), (x0, y0), out);
}

fn paint(
    pixels: &mut Vec<(i32, i32)>,
    color: [f32; 3],
    out: &mut Vec<PlanPoint>,
) {
    out.extend(pixels.drain(..).map(|(x, y)| PlanPoint { x, y, color }));
}

/// Rasterise the whole floor plan, honouring the optional-item toggles.
#[must_use]
pub fn plan_points(toggles: &PlanToggles) -> Vec<PlanPoint> {
    let mut out = Vec::with_capacity(4096);
    let mut px = Vec::with_capacity(1024);

    rectangle([ROOM_LEFT, ROOM_BOTTOM, ROOM_RIGHT, ROOM_TOP], &mut px);
    paint(&mut px, OUTLINE_COLOR, &mut out);

    if toggles.show_table {
        midpoint_circle(TABLE_CENTER, TABLE_RADIUS, &mut px);
        paint(&mut px, TABLE_COLOR, &mut out);
    }

    rectangle(DESK, &mut px);
    paint(&mut px, DESK_COLOR, &mut out);

    rectangle(CHAIR, &mut px);
    paint(&mut px, CHAIR_COLOR, &mut out);

    if toggles.show_door {
        for x in DOOR_JAMBS {
            bresenham_line(
                (x, ROOM_BOTTOM),
                (x, ROOM_BOTTOM + DOOR_JAMB_LENGTH),
                &mut px,
            );
        }
        paint(&mut px, DOOR_COLOR, &mut out);
    }

    if toggles.show_windows {
        for (x0, x1) in WINDOWS {
            bresenham_line((x0, ROOM_TOP), (x1, ROOM_TOP), &mut px);
        }
        paint(&mut px, WINDOW_COLOR, &mut out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        bresenham_line(a, b, &mut out);
        out
    }

    fn count(points: &[PlanPoint], color: [f32; 3]) -> usize {
        points.iter().filter(|p| p.color == color).count()
    }

    #[test]
    fn line_includes_both_endpoints() {
        for (a, b) in [
            ((0, 0), (10, 3)),
            ((10, 3), (0, 0)),
            ((5, -4), (5, 9)),
            ((-3, 7), (8, -2)),
        ] {
            let px = line(a, b);
            assert_eq!(px.first(), Some(&a));
            assert_eq!(px.last(), Some(&b));
            let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs());
            assert_eq!(px.len(), steps as usize + 1);
        }
    }

    #[test]
    fn degenerate_line_is_one_pixel() {
        assert_eq!(line((4, 4), (4, 4)), vec![(4, 4)]);
    }

    #[test]
    fn circle_points_sit_on_the_radius() {
        let mut px = Vec::new();
        midpoint_circle((500, 420), 120, &mut px);
        assert!(!px.is_empty());
        for (x, y) in px {
            let d = (((x - 500).pow(2) + (y - 420).pow(2)) as f32).sqrt();
            assert!((d - 120.0).abs() <= 1.0, "({x}, {y}) at {d}");
        }
    }

    #[test]
    fn circle_hits_the_four_extremes() {
        let mut px = Vec::new();
        midpoint_circle((0, 0), 10, &mut px);
        for p in [(10, 0), (-10, 0), (0, 10), (0, -10)] {
            assert!(px.contains(&p), "missing {p:?}");
        }
    }

    #[test]
    fn outline_spans_the_room_corners() {
        let pts = plan_points(&PlanToggles::default());
        for corner in [(100, 100), (900, 100), (900, 700), (100, 700)] {
            assert!(pts
                .iter()
                .any(|p| (p.x, p.y) == corner && p.color == OUTLINE_COLOR));
        }
    }

    #[test]
    fn toggles_remove_their_items() {
        let all = plan_points(&PlanToggles::default());
        assert!(count(&all, TABLE_COLOR) > 0);
        assert_eq!(count(&all, DOOR_COLOR), 2 * 61);
        assert_eq!(count(&all, WINDOW_COLOR), 2 * 151);

        let bare = plan_points(&PlanToggles {
            show_door: false,
            show_windows: false,
            show_table: false,
        });
        assert_eq!(count(&bare, TABLE_COLOR), 0);
        assert_eq!(count(&bare, DOOR_COLOR), 0);
        assert_eq!(count(&bare, WINDOW_COLOR), 0);
        assert_eq!(count(&bare, OUTLINE_COLOR), count(&all, OUTLINE_COLOR));
        assert_eq!(count(&bare, DESK_COLOR), count(&all, DESK_COLOR));
        assert_eq!(count(&bare, CHAIR_COLOR), count(&all, CHAIR_COLOR));
    }
}

use embedded_graphics::geometry::Point;

use crate::surface::{plot, Surface};

/// Plot the outline of a circle with the midpoint algorithm
///
/// Walks one octant with an integer decision variable and mirrors every step
/// into the other seven, so no point needs trigonometry or a square root.
/// A zero radius draws nothing.
pub fn draw_circle_outline<S>(surface: &mut S, center: Point, radius: u16, color: u8)
where
    S: Surface + ?Sized,
{
    if radius == 0 {
        return;
    }

    let mut x = 0i32;
    let mut y = i32::from(radius);
    let mut d = 1 - y;

    while x <= y {
        for &(dx, dy) in &[
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ] {
            plot(
                surface,
                center.x.saturating_add(dx),
                center.y.saturating_add(dy),
                color,
            );
        }

        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
    }
}

/// Fill every point no further than `radius` from `center`
///
/// Scans the bounding box, clamped to the surface, so it costs O(radius²) where
/// the outline costs O(radius). A zero radius plots only the center.
pub fn draw_circle_filled<S>(surface: &mut S, center: Point, radius: u16, color: u8)
where
    S: Surface + ?Sized,
{
    let r = i64::from(radius);
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let rows = (cy - r).max(0)..=(cy + r).min(i64::from(surface.height()) - 1);
    let columns = (cx - r).max(0)..=(cx + r).min(i64::from(surface.width()) - 1);

    for y in rows {
        let dy = y - cy;
        for x in columns.clone() {
            let dx = x - cx;
            if dx * dx + dy * dy <= r * r {
                // both lie inside the surface, which is at most u16 wide and high
                surface.set_pixel(x as u16, y as u16, color);
            }
        }
    }
}

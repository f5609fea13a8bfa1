use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the left-pointing unit normal of the segment `a`→`b`.
///
/// Degenerate segments (length below [`TOLERANCE`]) yield `(0, 1)` instead
/// of a NaN vector.
#[must_use]
pub fn unit_normal(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Vector2::new(0.0, 1.0);
    }
    Vector2::new(-d.y / len, d.x / len)
}

/// Even-odd ray-casting containment test.
///
/// Casts a horizontal ray towards +x and counts edge crossings. Edges are
/// half-open in y (`(yi > py) != (yj > py)`), so a vertex shared by two
/// edges is counted once, and the strict `<` on the crossing x keeps
/// boundary ties deterministic. Loops with fewer than 3 vertices contain
/// nothing.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > p.y) != (pj.y > p.y)
            && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

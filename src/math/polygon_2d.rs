use super::segment_2d::{cross, left_normal, Segment2};
use super::{Point2, Vector2};

/// Builds the closed boundary edge list of a polygon.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`, so the boundary
/// is implicitly closed.
#[must_use]
pub fn boundary_edges(points: &[Point2]) -> Vec<Segment2> {
    let n = points.len();
    (0..n)
        .map(|i| Segment2::new(points[i], points[(i + 1) % n]))
        .collect()
}

/// Pairs consecutive points into independent subject segments.
///
/// A trailing unpaired point is dropped.
#[must_use]
pub fn pair_segments(points: &[Point2]) -> Vec<Segment2> {
    points
        .chunks_exact(2)
        .map(|pair| Segment2::new(pair[0], pair[1]))
        .collect()
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
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

/// Returns true when every boundary turn has the same handedness.
///
/// The cross product of each consecutive edge-direction pair (wrapping
/// around) must agree in sign with the wraparound pair `(last, first)`.
/// Boundaries with fewer than 3 edges are degenerate and report false.
#[must_use]
pub fn is_convex(edges: &[Segment2]) -> bool {
    let n = edges.len();
    if n < 3 {
        return false;
    }
    let wrap_positive = cross(&edges[n - 1].delta(), &edges[0].delta()) > 0.0;
    for i in 0..n - 1 {
        if (cross(&edges[i].delta(), &edges[i + 1].delta()) > 0.0) != wrap_positive {
            return false;
        }
    }
    true
}

/// Computes one inward-pointing normal per boundary edge.
///
/// The left perpendicular of each edge direction is tested against the
/// vector from the edge's start to the next edge's end (a point on the
/// interior side for a simple polygon) and flipped when it points away.
/// Normals are parallel in index to `edges` and direction-only (not unit
/// length).
///
/// The inward determination is unreliable for self-intersecting boundaries.
#[must_use]
pub fn find_normals(edges: &[Segment2]) -> Vec<Vector2> {
    let n = edges.len();
    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let mut normal = left_normal(&edges[i].delta());
        let toward_interior = edges[(i + 1) % n].p2 - edges[i].p1;
        if normal.dot(&toward_interior) < 0.0 {
            normal = -normal;
        }
        normals.push(normal);
    }
    normals
}

use super::{Point2, Vector2};

/// A directed 2D line segment from `p1` to `p2`.
///
/// The parametric form is: `P(t) = p1 + t * delta()`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment2 {
    /// Creates a segment from two endpoints.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Direction vector `p2 - p1`.
    ///
    /// Recomputed from the endpoints on every call, so it can never
    /// disagree with them.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Evaluates the parametric form at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p1 + self.delta() * t
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at(0.5)
    }

    /// Returns a copy with the endpoints swapped.
    ///
    /// Swapping the endpoints negates `delta()`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }
}

/// 2D scalar cross product `a.x * b.y - a.y * b.x`.
///
/// Positive for a counter-clockwise turn from `a` to `b`. Every turn and
/// winding test in the crate uses this one sign convention.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.perp(b)
}

/// Left perpendicular `(-d.y, d.x)` of a direction vector.
///
/// Direction-only: callers compare signs against it, never its magnitude.
/// [`crate::math::polygon_2d::find_normals`] re-orients it per edge so it
/// points toward the polygon's interior.
#[must_use]
pub fn left_normal(d: &Vector2) -> Vector2 {
    Vector2::new(-d.y, d.x)
}

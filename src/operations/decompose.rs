use crate::math::polygon_2d::signed_area;
use crate::math::segment_2d::cross;
use crate::math::{Point2, TOLERANCE};

/// Result of stripping the reflex vertices from a simple polygon.
///
/// The residual is the original boundary with every reflex vertex removed;
/// each notch is one concave indentation carved off along the way. The
/// residual covers the original region plus the notches, so the region
/// outside the original polygon is the region outside the residual united
/// with the notch interiors.
#[derive(Debug, Clone, Default)]
pub struct Decomposition {
    /// The working boundary after all reflex vertices were removed.
    pub residual: Vec<Point2>,
    /// One convex boundary per concave indentation.
    pub notches: Vec<Vec<Point2>>,
}

/// Decomposes a simple polygon into a convex residual plus convex notches.
///
/// Operates on a private copy of the vertex list; the caller's polygon is
/// never mutated. Each pass walks the cyclic vertex sequence once and
/// removes every vertex whose turn disagrees with the polygon's winding
/// (a reflex vertex). A run of removed vertices is accumulated into a
/// pending chain and closed into a notch boundary at the next kept vertex,
/// or against the first vertex when the pass ends mid-chain. Passes repeat
/// until one removes nothing; at that fixpoint the working boundary is
/// convex.
///
/// Removal during iteration holds the current index in place so the old
/// successor is visited next with the removed vertex as its predecessor;
/// no vertex is skipped or visited twice in a pass.
///
/// Polygons with fewer than 3 vertices decompose to nothing. The result is
/// only meaningful for simple (non-self-intersecting) boundaries; violating
/// that degrades the output, it does not panic or loop forever.
#[must_use]
pub fn decompose(points: &[Point2]) -> Decomposition {
    if points.len() < 3 {
        return Decomposition::default();
    }

    // Removing reflex vertices preserves orientation, so the winding of the
    // input holds for every pass.
    let winding = if signed_area(points) >= 0.0 { 1.0 } else { -1.0 };

    let mut working: Vec<Point2> = points.to_vec();
    let mut notches: Vec<Vec<Point2>> = Vec::new();

    loop {
        let mut removed = 0_usize;
        let mut pending: Vec<Point2> = Vec::new();
        let mut previous = working[working.len() - 1];
        let mut i = 0_usize;

        while i < working.len() {
            let current = working[i];
            let next = working[(i + 1) % working.len()];
            let turn = cross(&(current - previous), &(next - current));

            if turn * winding < -TOLERANCE {
                removed += 1;
                pending.push(previous);
                working.remove(i);
            } else {
                if !pending.is_empty() {
                    pending.push(previous);
                    pending.push(current);
                    notches.push(std::mem::take(&mut pending));
                }
                i += 1;
            }
            previous = current;
        }

        if !pending.is_empty() {
            pending.push(previous);
            pending.push(working[0]);
            notches.push(pending);
        }

        if removed == 0 {
            break;
        }
    }

    Decomposition {
        residual: working,
        notches,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::{boundary_edges, is_convex};

    fn l_shape() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    /// Even-odd ray-cast point-in-polygon test, for sampled round-trips.
    fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
        let n = polygon.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = polygon[i];
            let b = polygon[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    #[test]
    fn convex_polygon_is_its_own_residual() {
        let square = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let result = decompose(&square);
        assert_eq!(result.residual, square);
        assert!(result.notches.is_empty());
    }

    #[test]
    fn degenerate_input_decomposes_to_nothing() {
        assert!(decompose(&[]).residual.is_empty());
        let two = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let result = decompose(&two);
        assert!(result.residual.is_empty());
        assert!(result.notches.is_empty());
    }

    #[test]
    fn l_shape_yields_one_triangular_notch() {
        let result = decompose(&l_shape());

        assert_eq!(
            result.residual,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 2.0),
                Point2::new(2.0, 4.0),
                Point2::new(0.0, 4.0),
            ]
        );
        assert_eq!(
            result.notches,
            vec![vec![
                Point2::new(4.0, 2.0),
                Point2::new(2.0, 2.0),
                Point2::new(2.0, 4.0),
            ]]
        );
        assert!(is_convex(&boundary_edges(&result.residual)));
    }

    #[test]
    fn l_shape_clockwise_winding() {
        let mut cw = l_shape();
        cw.reverse();
        let result = decompose(&cw);

        assert_eq!(result.residual.len(), 5);
        assert_eq!(result.notches.len(), 1);
        assert!(is_convex(&boundary_edges(&result.residual)));
        assert!(is_convex(&boundary_edges(&result.notches[0])));
    }

    #[test]
    fn caller_polygon_is_not_mutated() {
        let original = l_shape();
        let copy = original.clone();
        let _ = decompose(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn staircase_carves_one_notch_per_step() {
        let staircase = vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 1.0),
            Point2::new(4.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let result = decompose(&staircase);

        assert_eq!(result.residual.len(), 6);
        assert!(is_convex(&boundary_edges(&result.residual)));
        assert_eq!(result.notches.len(), 2);
        for notch in &result.notches {
            assert!(is_convex(&boundary_edges(notch)));
        }
    }

    #[test]
    fn zigzag_notch_needs_multiple_passes() {
        // A zigzag bite in the top edge: the middle spike only turns reflex
        // after its neighbors are removed, so the fixpoint takes several
        // passes.
        let zigzag = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(7.0, 9.0),
            Point2::new(6.0, 4.0),
            Point2::new(5.0, 8.0),
            Point2::new(4.0, 4.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 10.0),
        ];
        let result = decompose(&zigzag);

        assert_eq!(
            result.residual,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ]
        );
        assert_eq!(result.notches.len(), 4);
        for notch in &result.notches {
            assert!(is_convex(&boundary_edges(notch)));
        }
    }

    #[test]
    fn sampled_round_trip_reconstructs_the_original() {
        // residual \ notches == original, checked on a sample grid that
        // avoids boundary points.
        let original = l_shape();
        let result = decompose(&original);

        let mut samples = 0;
        let mut x = -0.75;
        while x < 5.0 {
            let mut y = -0.75;
            while y < 5.0 {
                let p = Point2::new(x, y);
                let in_original = point_in_polygon(&p, &original);
                let in_residual = point_in_polygon(&p, &result.residual);
                let in_notch = result
                    .notches
                    .iter()
                    .any(|notch| point_in_polygon(&p, notch));

                assert_eq!(in_original, in_residual && !in_notch, "at ({x}, {y})");
                // The residual is exactly the original united with the
                // notches.
                assert_eq!(in_residual, in_original || in_notch, "at ({x}, {y})");
                samples += 1;
                y += 0.5;
            }
            x += 0.5;
        }
        assert!(samples > 100);
    }
}

use crate::math::segment_2d::Segment2;
use crate::math::{Vector2, TOLERANCE};

/// Which side of a convex clip region a clip pass keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// Keep the portion of the segment inside the region.
    Inside,
    /// Keep the portion(s) of the segment outside the region.
    Outside,
}

/// Clips one segment against a convex polygon using the Cyrus–Beck
/// parametric algorithm.
///
/// `faces` are the polygon's boundary edges and `normals` their
/// inward-pointing normals, parallel in index. The segment is parameterized
/// as `P(t) = p1 + t * d`, `t ∈ [0, 1]`, and each edge's half-plane narrows
/// the parameter interval once: `denom = d · nᵢ > 0` is an entering
/// crossing and raises the lower bound, `denom < 0` an exiting crossing
/// that lowers the upper bound. One linear pass over the edges, no
/// divisions by zero.
///
/// A segment parallel to an edge and strictly outside its half-plane is
/// entirely outside the polygon: `Inside` mode rejects it, `Outside` mode
/// keeps it whole. A segment lying exactly on an edge (`w == 0`) is not
/// rejected there and classifies by the remaining half-planes, so on-edge
/// counts as inside.
///
/// Returns at most one piece in `Inside` mode, at most two in `Outside`
/// mode; zero-length pieces are omitted.
#[must_use]
pub fn cyrus_beck(
    segment: &Segment2,
    faces: &[Segment2],
    normals: &[Vector2],
    mode: ClipMode,
) -> Vec<Segment2> {
    debug_assert_eq!(faces.len(), normals.len());

    let d = segment.delta();
    let mut t_start = 0.0_f64;
    let mut t_end = 1.0_f64;

    for (face, normal) in faces.iter().zip(normals) {
        let denom = d.dot(normal);
        let w = normal.dot(&(segment.p1 - face.p1));
        if denom.abs() < TOLERANCE {
            if w < -TOLERANCE {
                // Parallel to this edge and outside its half-plane, so
                // outside the whole convex region.
                return match mode {
                    ClipMode::Inside => Vec::new(),
                    ClipMode::Outside => vec![*segment],
                };
            }
            continue;
        }
        let t = -w / denom;
        if denom > 0.0 {
            t_start = t_start.max(t);
        } else {
            t_end = t_end.min(t);
        }
    }

    if t_start <= t_end {
        match mode {
            ClipMode::Inside => vec![Segment2::new(
                segment.point_at(t_start),
                segment.point_at(t_end),
            )],
            ClipMode::Outside => {
                let mut pieces = Vec::with_capacity(2);
                let head = Segment2::new(segment.p1, segment.point_at(t_start));
                if head.length() > TOLERANCE {
                    pieces.push(head);
                }
                let tail = Segment2::new(segment.point_at(t_end), segment.p2);
                if tail.length() > TOLERANCE {
                    pieces.push(tail);
                }
                pieces
            }
        }
    } else {
        match mode {
            ClipMode::Inside => Vec::new(),
            ClipMode::Outside => vec![*segment],
        }
    }
}

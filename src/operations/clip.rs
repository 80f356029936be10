use super::cyrus_beck::{cyrus_beck, ClipMode};
use super::decompose::decompose;
use crate::error::{ClipError, Result};
use crate::math::polygon_2d::{boundary_edges, find_normals, is_convex, pair_segments};
use crate::math::segment_2d::Segment2;
use crate::math::{Point2, Vector2};

/// A convex sub-region prepared for clipping: boundary edges plus their
/// inward normals, parallel in index.
#[derive(Debug, Clone)]
struct ConvexFaces {
    faces: Vec<Segment2>,
    normals: Vec<Vector2>,
}

impl ConvexFaces {
    fn from_points(points: &[Point2]) -> Self {
        let faces = boundary_edges(points);
        let normals = find_normals(&faces);
        Self { faces, normals }
    }

    fn clip(&self, segment: &Segment2, mode: ClipMode) -> Vec<Segment2> {
        cyrus_beck(segment, &self.faces, &self.normals, mode)
    }
}

/// A clip polygon preprocessed for repeated segment clipping.
///
/// Construction classifies the boundary once: a convex boundary is clipped
/// against directly, a non-convex one is decomposed into a convex residual
/// plus convex notches. The input point list is only read during
/// construction; the region owns everything it needs afterwards, for the
/// duration of one clipping pass or longer.
#[derive(Debug, Clone)]
pub struct ClipRegion {
    kind: RegionKind,
}

#[derive(Debug, Clone)]
enum RegionKind {
    Convex(ConvexFaces),
    Decomposed {
        /// Absent when the residual itself degenerates below 3 vertices,
        /// which only happens for non-simple input.
        residual: Option<ConvexFaces>,
        notches: Vec<ConvexFaces>,
    },
}

impl ClipRegion {
    /// Classifies and preprocesses a clip boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::DegenerateBoundary`] when fewer than 3 points
    /// are supplied.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if points.len() < 3 {
            return Err(ClipError::DegenerateBoundary {
                points: points.len(),
            });
        }
        let faces = boundary_edges(points);
        let kind = if is_convex(&faces) {
            RegionKind::Convex(ConvexFaces {
                normals: find_normals(&faces),
                faces,
            })
        } else {
            let decomposition = decompose(points);
            let residual = (decomposition.residual.len() >= 3)
                .then(|| ConvexFaces::from_points(&decomposition.residual));
            let notches = decomposition
                .notches
                .iter()
                .filter(|notch| notch.len() >= 3)
                .map(|notch| ConvexFaces::from_points(notch))
                .collect();
            RegionKind::Decomposed { residual, notches }
        };
        Ok(Self { kind })
    }

    /// Returns true when the boundary was classified as convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        matches!(self.kind, RegionKind::Convex(_))
    }

    /// Clips one subject segment, keeping the portions outside the region.
    ///
    /// Convex region: a single outside-mode Cyrus–Beck pass. Decomposed
    /// region: outside-mode against the convex residual, then inside-mode
    /// against every notch. A notch lies outside the original shape but
    /// inside the residual, so its interior belongs to the outside result.
    #[must_use]
    pub fn clip_segment(&self, segment: &Segment2) -> Vec<Segment2> {
        match &self.kind {
            RegionKind::Convex(region) => region.clip(segment, ClipMode::Outside),
            RegionKind::Decomposed { residual, notches } => {
                let mut result = match residual {
                    Some(region) => region.clip(segment, ClipMode::Outside),
                    None => vec![*segment],
                };
                for notch in notches {
                    result.extend(notch.clip(segment, ClipMode::Inside));
                }
                result
            }
        }
    }
}

/// Clips every subject segment against a clip polygon, keeping what lies
/// outside the polygon.
///
/// Consecutive `subject_points` pair into independent segments (a trailing
/// unpaired point is dropped); `clip_points` trace the clip boundary,
/// implicitly closed. A degenerate boundary with fewer than 3 points clips
/// nothing and the subject segments come back unchanged.
#[must_use]
pub fn classify_and_clip(subject_points: &[Point2], clip_points: &[Point2]) -> Vec<Segment2> {
    let segments = pair_segments(subject_points);
    let Ok(region) = ClipRegion::from_points(clip_points) else {
        return segments;
    };
    segments
        .iter()
        .flat_map(|segment| region.clip_segment(segment))
        .collect()
}

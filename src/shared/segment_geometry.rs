//! Projektion eines Punktes auf ein Liniensegment.

use glam::Vec3;

/// Ergebnis einer Punkt-auf-Segment-Projektion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Nächster Punkt auf dem geschlossenen Segment
    pub point: Vec3,
    /// `true` wenn der Lotfußpunkt außerhalb von [A, B] liegt (Ergebnis = Endpunkt)
    pub at_extremity: bool,
}

/// Projiziert `point` auf das Segment `seg_a`–`seg_b`.
///
/// Liegt der Parameter `t` der unbeschränkten Projektion unter 0 bzw. über 1,
/// ist das Ergebnis `seg_a` bzw. `seg_b` und `at_extremity` gesetzt.
/// Ein entartetes Segment (`seg_a == seg_b`) liefert `seg_a` als Extremität.
pub fn closest_point_on_segment(point: Vec3, seg_a: Vec3, seg_b: Vec3) -> SegmentProjection {
    let direction = seg_b - seg_a;
    let denominator = (seg_a - seg_b).dot(direction);
    if denominator == 0.0 {
        return SegmentProjection {
            point: seg_a,
            at_extremity: true,
        };
    }

    let t = -(point - seg_a).dot(direction) / denominator;

    if t < 0.0 {
        SegmentProjection {
            point: seg_a,
            at_extremity: true,
        }
    } else if t > 1.0 {
        SegmentProjection {
            point: seg_b,
            at_extremity: true,
        }
    } else {
        SegmentProjection {
            point: seg_a + t * direction,
            at_extremity: false,
        }
    }
}

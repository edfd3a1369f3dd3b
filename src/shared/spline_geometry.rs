//! Reine Geometrie-Funktionen für Catmull-Rom-Splines.
//!
//! Layer-neutral: kann von `route` und anderen Modulen importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + p2) * t
        + 2.0 * p1)
}

/// Erzeugt das Kontrollpunkt-Array der Länge `n + 2` mit extrapolierten Phantom-Punkten.
///
/// Der Phantom-Punkt vor dem Start spiegelt die lokale Tangente:
/// `p[0] + (p[0] - p[1]) + (p[2] - p[1])`, am Ende symmetrisch.
/// Erwartet mindestens 3 Punkte; bei weniger wird `None` zurückgegeben.
pub fn padded_control_points(points: &[Vec3]) -> Option<Vec<Vec3>> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let start = points[0] + (points[0] - points[1]) + (points[2] - points[1]);
    let end = points[n - 1] + (points[n - 1] - points[n - 2]) + (points[n - 3] - points[n - 2]);

    let mut padded = Vec::with_capacity(n + 2);
    padded.push(start);
    padded.extend_from_slice(points);
    padded.push(end);
    Some(padded)
}

/// Tastet eine Catmull-Rom-Kurve durch alle `points` ab.
///
/// Der erste und letzte Eingabepunkt stehen exakt (und genau einmal) im Ergebnis.
/// Pro Segment werden `samples_per_segment` Werte mit `t = i / samples_per_segment`
/// ausgewertet (`i = 1..=samples_per_segment`); im letzten Segment entfällt `t = 1`,
/// weil dort der exakte Endpunkt folgt.
///
/// Bei weniger als 3 Punkten ist keine Kurve möglich: die Punkte werden unverändert
/// zurückgegeben.
pub fn sample_catmull_rom(points: &[Vec3], samples_per_segment: usize) -> Vec<Vec3> {
    let Some(padded) = padded_control_points(points) else {
        return points.to_vec();
    };

    let samples = samples_per_segment.max(1);
    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * samples + 1);
    result.push(points[0]);

    for (seg, window) in padded.windows(4).enumerate() {
        let steps = if seg == n - 2 { samples - 1 } else { samples };
        for i in 1..=steps {
            let t = i as f32 / samples as f32;
            result.push(catmull_rom_point(
                window[0], window[1], window[2], window[3], t,
            ));
        }
    }

    result.push(points[n - 1]);
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

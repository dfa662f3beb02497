use crate::scatter::Scatter;

/// Returns the timestamp (X) of every sample where `series`'s Y crosses
/// `threshold`, rising or falling.
///
/// This is the crossing-detection primitive a level-crossing ADC
/// demodulator would be built from — it is not itself a demodulator: it
/// recovers threshold crossings, not bits, frame boundaries, or decoded
/// payload.
pub fn sample_crossings(series: &Scatter, threshold: f64) -> Vec<i64> {
    let points = series.points();
    if points.len() < 2 {
        return Vec::new();
    }

    let mut crossings = Vec::new();
    let mut prev_above = points[0].y >= threshold;
    for p in &points[1..] {
        let above = p.y >= threshold;
        if above != prev_above {
            crossings.push(p.x);
        }
        prev_above = above;
    }
    crossings
}

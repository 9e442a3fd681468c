//! Turning-angle extraction over closed gesture traces.
//!
//! Reproduces the reference preprocessing exactly:
//! - the trace is closed implicitly (the last edge returns to the first point)
//! - edge directions are `atan2` degrees normalized into `[0, 360)`
//! - negative direction deltas wrap by a full turn, overflow past 180 folds
//!   back by a half turn only

use crate::constants::{FULL_TURN_DEGREES, HALF_TURN_DEGREES};

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("trace has {0} points, need at least 2 to form an edge")]
    TooFewPoints(usize),
}

/// Direction of each edge of the implicitly closed trace, degrees in `[0, 360)`.
///
/// A trace of P points has P edges; edge `i` runs from point `i` to point
/// `(i + 1) % P`, so the final edge closes the polygon. A zero-length edge
/// (repeated point) gets `atan2(0, 0) == 0` rather than an error.
pub fn edge_directions(points: &[[f32; 2]]) -> Result<Vec<f32>, TraceError> {
    if points.len() < 2 {
        return Err(TraceError::TooFewPoints(points.len()));
    }

    let n = points.len();
    let mut directions = Vec::with_capacity(n);
    for i in 0..n {
        let [x0, y0] = points[i];
        let [x1, y1] = points[(i + 1) % n];
        let mut degrees = (y1 - y0).atan2(x1 - x0).to_degrees();
        if degrees < 0.0 {
            degrees += FULL_TURN_DEGREES;
        }
        directions.push(degrees);
    }
    Ok(directions)
}

/// Turning-angle delta at each vertex of the closed trace, in edge order.
///
/// For each cyclically adjacent direction pair the delta is
/// `direction[i] - direction[i + 1]`, wrapped by `+360` when negative.
/// Values past 180 are folded back by a half turn, not a full one; this
/// matches the reference preprocessing the downstream model was fit
/// against, so the output range is `[0, 180]` rather than `[0, 360)`.
pub fn turning_angles(points: &[[f32; 2]]) -> Result<Vec<f32>, TraceError> {
    let directions = edge_directions(points)?;

    let n = directions.len();
    let mut deltas = Vec::with_capacity(n);
    for i in 0..n {
        let mut delta = directions[i] - directions[(i + 1) % n];
        if delta < 0.0 {
            delta += FULL_TURN_DEGREES;
        }
        if delta > HALF_TURN_DEGREES {
            delta -= HALF_TURN_DEGREES;
        }
        deltas.push(delta);
    }
    Ok(deltas)
}

#[cfg(test)]
mod tests {
    use super::{TraceError, edge_directions, turning_angles};

    const SQUARE: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    #[test]
    fn square_edge_directions() {
        let dirs = edge_directions(&SQUARE).expect("directions");
        let expect = [0.0f32, 90.0, 180.0, 270.0];
        assert_eq!(dirs.len(), 4);
        for (got, want) in dirs.iter().zip(expect) {
            assert!((got - want).abs() < 1e-4, "got {got}, expected {want}");
        }
    }

    #[test]
    fn square_turns_left_by_90_at_every_vertex() {
        let deltas = turning_angles(&SQUARE).expect("deltas");
        assert_eq!(deltas.len(), 4);
        for d in deltas {
            assert!((d - 90.0).abs() < 1e-4, "got {d}, expected 90");
        }
    }

    #[test]
    fn output_length_matches_point_count() {
        let zigzag = [[0.0f32, 0.0], [2.0, 1.0], [3.0, -1.0], [5.0, 0.0], [4.0, 2.0]];
        let deltas = turning_angles(&zigzag).expect("deltas");
        assert_eq!(deltas.len(), zigzag.len());
    }

    #[test]
    fn repeated_point_yields_zero_direction() {
        let points = [[1.0f32, 1.0], [1.0, 1.0], [2.0, 1.0]];
        let dirs = edge_directions(&points).expect("directions");
        assert_eq!(dirs[0], 0.0); // zero-length edge, atan2(0, 0)
        assert_eq!(dirs[1], 0.0);
        assert!((dirs[2] - 180.0).abs() < 1e-4);
    }

    #[test]
    fn two_point_trace_folds_to_half_turn() {
        // Out-and-back line: directions 0 and 180. Both deltas normalize to
        // 180 and stay there (the half-turn fold only fires past 180).
        let deltas = turning_angles(&[[0.0f32, 0.0], [1.0, 0.0]]).expect("deltas");
        assert_eq!(deltas.len(), 2);
        for d in deltas {
            assert!((d - 180.0).abs() < 1e-4, "got {d}, expected 180");
        }
    }

    #[test]
    fn too_few_points_is_rejected() {
        let err = turning_angles(&[[0.0f32, 0.0]]).unwrap_err();
        assert!(matches!(err, TraceError::TooFewPoints(1)));
        let err = edge_directions(&[]).unwrap_err();
        assert!(matches!(err, TraceError::TooFewPoints(0)));
    }
}

use tracing::trace;

use crate::geometry::{ClosedPolygon, Edge, OpenPolyline};
use crate::math::{distance, lerp, Point2, MIN_SEGMENT_LENGTH};

/// Parameters controlling outline splitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitParams {
    /// Samples closer than this to any fill edge are suppressed.
    pub clearance: f64,
    /// Sample intervals per outline segment. Gap boundaries are located to
    /// within `segment_length / samples_per_segment`.
    pub samples_per_segment: u32,
    /// Merge the last and first runs when both touch the outline start.
    /// Off by default: the walk starts at the first vertex and a visible run
    /// crossing it is reported as two runs.
    pub join_across_start: bool,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            clearance: 0.12,
            samples_per_segment: 20,
            join_across_start: false,
        }
    }
}

/// Splits a closed reference outline into the visible runs that stay clear
/// of a set of filled polygons.
///
/// Each outline segment is sampled at `samples_per_segment + 1` evenly spaced
/// points. A sample is suppressed when it lies inside any fill polygon or
/// closer than the clearance to any fill edge. Visible samples accumulate
/// into the current run; a suppressed sample ends it, and runs with fewer
/// than 2 points are dropped.
#[derive(Debug)]
pub struct SplitOutline {
    outline: ClosedPolygon,
    fills: Vec<ClosedPolygon>,
    params: SplitParams,
}

impl SplitOutline {
    /// Creates a new split operation.
    #[must_use]
    pub fn new(outline: ClosedPolygon, fills: Vec<ClosedPolygon>, params: SplitParams) -> Self {
        Self {
            outline,
            fills,
            params,
        }
    }

    /// Executes the split, returning the visible runs in walk order.
    #[must_use]
    pub fn execute(&self) -> Vec<OpenPolyline> {
        let edges: Vec<Edge> = self.fills.iter().flat_map(ClosedPolygon::edges).collect();
        let samples = self.params.samples_per_segment;

        let mut runs = Vec::new();
        let mut current: Vec<Point2> = Vec::new();

        for seg in self.outline.edges() {
            if distance(&seg.start, &seg.end) < MIN_SEGMENT_LENGTH {
                continue;
            }

            for s in 0..=samples {
                let t = f64::from(s) / f64::from(samples);
                let pt = lerp(&seg.start, &seg.end, t);

                if self.is_suppressed(&pt, &edges) {
                    flush_run(&mut current, &mut runs);
                } else {
                    current.push(pt);
                }
            }
        }
        flush_run(&mut current, &mut runs);

        if self.params.join_across_start {
            self.join_runs_across_start(&mut runs);
        }

        trace!(
            outline = self.outline.len(),
            fills = self.fills.len(),
            runs = runs.len(),
            "outline split"
        );
        runs
    }

    /// A sample is hidden when it is inside a fill or within the clearance
    /// band around any fill edge.
    fn is_suppressed(&self, pt: &Point2, edges: &[Edge]) -> bool {
        self.fills.iter().any(|fill| fill.contains(pt))
            || edges.iter().any(|e| e.distance_to(pt) < self.params.clearance)
    }

    fn join_runs_across_start(&self, runs: &mut Vec<OpenPolyline>) {
        let Some(start) = self.outline.vertices().first() else {
            return;
        };
        if runs.len() < 2 {
            return;
        }
        let touches =
            |p: Option<&Point2>| p.is_some_and(|p| distance(p, start) < MIN_SEGMENT_LENGTH);
        let first_touches = touches(runs.first().and_then(OpenPolyline::first));
        let last_touches = touches(runs.last().and_then(OpenPolyline::last));
        if !(first_touches && last_touches) {
            return;
        }

        if let Some(mut merged) = runs.pop() {
            merged.extend_joined(&runs[0]);
            runs[0] = merged;
        }
    }
}

/// Emits the accumulated run if it forms at least one segment, then resets it.
fn flush_run(current: &mut Vec<Point2>, runs: &mut Vec<OpenPolyline>) {
    if current.len() >= 2 {
        runs.push(OpenPolyline::new(std::mem::take(current)));
    } else {
        current.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    const TOL: f64 = 1e-9;

    fn square(min: f64, max: f64) -> ClosedPolygon {
        ClosedPolygon::new(vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ])
    }

    fn octagon(center: Point2, radius: f64) -> ClosedPolygon {
        ClosedPolygon::new(
            (0..8)
                .map(|k| {
                    let a = f64::from(k) * FRAC_PI_4;
                    Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
                })
                .collect(),
        )
    }

    fn params(clearance: f64, samples: u32) -> SplitParams {
        SplitParams {
            clearance,
            samples_per_segment: samples,
            join_across_start: false,
        }
    }

    #[test]
    fn default_params() {
        let p = SplitParams::default();
        assert_abs_diff_eq!(p.clearance, 0.12);
        assert_eq!(p.samples_per_segment, 20);
        assert!(!p.join_across_start);
    }

    #[test]
    fn clear_outline_is_returned_whole() {
        let outline = square(0.0, 10.0);
        let far = ClosedPolygon::new(vec![
            Point2::new(50.0, 50.0),
            Point2::new(51.0, 50.0),
            Point2::new(50.0, 51.0),
        ]);
        let runs = SplitOutline::new(outline.clone(), vec![far], params(0.1, 20)).execute();

        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        // Every sample is kept: 4 segments × 21 samples.
        assert_eq!(run.len(), 84);
        assert_eq!(run.first(), Some(&Point2::new(0.0, 0.0)));
        assert_abs_diff_eq!(*run.last().unwrap(), Point2::new(0.0, 0.0), epsilon = TOL);
        for v in outline.vertices() {
            assert!(run.points().iter().any(|p| distance(p, v) < TOL), "missing {v}");
        }
        assert_abs_diff_eq!(run.length(), 40.0, epsilon = TOL);
    }

    #[test]
    fn no_fills_keeps_everything() {
        let runs = SplitOutline::new(square(0.0, 1.0), Vec::new(), params(0.1, 4)).execute();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 20);
    }

    #[test]
    fn shared_corners_appear_once_per_segment() {
        let runs = SplitOutline::new(square(0.0, 1.0), Vec::new(), params(0.1, 4)).execute();
        let run = runs[0].points();
        // End of the bottom edge, then start of the right edge.
        assert_eq!(run[4], Point2::new(1.0, 0.0));
        assert_eq!(run[5], Point2::new(1.0, 0.0));
        let corner_hits = |c: Point2| run.iter().filter(|p| distance(p, &c) < TOL).count();
        assert_eq!(corner_hits(Point2::new(1.0, 1.0)), 2);
        assert_eq!(corner_hits(Point2::new(0.0, 1.0)), 2);
        // The start vertex opens and closes the walk.
        assert_eq!(corner_hits(Point2::origin()), 2);
    }

    #[test]
    fn outline_inside_fill_is_fully_suppressed() {
        let runs = SplitOutline::new(square(1.0, 2.0), vec![square(0.0, 10.0)], params(0.1, 20))
            .execute();
        assert!(runs.is_empty());
    }

    #[test]
    fn outline_within_clearance_is_fully_suppressed() {
        // Outline hugs the outside of the fill at distance 0.05 < 0.1.
        let runs = SplitOutline::new(
            square(-0.05, 1.05),
            vec![square(0.0, 1.0)],
            params(0.1, 20),
        )
        .execute();
        assert!(runs.is_empty());
    }

    #[test]
    fn octagon_on_bottom_edge_splits_it() {
        let outline = square(0.0, 10.0);
        let fill = octagon(Point2::new(5.0, 0.0), 2.0);
        let runs = SplitOutline::new(outline, vec![fill], params(0.1, 20)).execute();

        assert_eq!(runs.len(), 2);

        // Left flank of the bottom edge: (0,0) .. (2.5,0).
        let left = &runs[0];
        assert_eq!(left.len(), 6);
        assert_eq!(left.first(), Some(&Point2::new(0.0, 0.0)));
        assert_abs_diff_eq!(*left.last().unwrap(), Point2::new(2.5, 0.0), epsilon = TOL);

        // Right flank continues around the other three edges back to the start.
        let rest = &runs[1];
        assert_abs_diff_eq!(*rest.first().unwrap(), Point2::new(7.5, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(*rest.last().unwrap(), Point2::new(0.0, 0.0), epsilon = TOL);
        assert!(rest.points().iter().any(|p| distance(p, &Point2::new(10.0, 10.0)) < TOL));
    }

    #[test]
    fn join_across_start_merges_wrap_runs() {
        let outline = square(0.0, 10.0);
        let fill = octagon(Point2::new(5.0, 0.0), 2.0);
        let mut p = params(0.1, 20);
        p.join_across_start = true;
        let runs = SplitOutline::new(outline, vec![fill], p).execute();

        assert_eq!(runs.len(), 1);
        let run = &runs[0];
        assert_abs_diff_eq!(*run.first().unwrap(), Point2::new(7.5, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(*run.last().unwrap(), Point2::new(2.5, 0.0), epsilon = TOL);
        let hits = |c: Point2| run.points().iter().filter(|q| distance(q, &c) < TOL).count();
        // The start vertex is shared by the two merged runs and kept once.
        assert_eq!(hits(Point2::origin()), 1);
        // Other corners keep both the closing and the opening sample.
        assert_eq!(hits(Point2::new(10.0, 0.0)), 2);
        assert_eq!(hits(Point2::new(0.0, 10.0)), 2);
    }

    #[test]
    fn join_across_start_leaves_suppressed_start_alone() {
        // Fill covers the start corner: nothing touches the start vertex.
        let outline = square(0.0, 10.0);
        let fill = octagon(Point2::new(0.0, 0.0), 2.0);
        let mut p = params(0.1, 20);
        p.join_across_start = true;
        let runs = SplitOutline::new(outline, vec![fill], p).execute();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].first().is_some_and(|q| q.x > 2.0));
    }

    #[test]
    fn gap_boundary_within_sampling_bound() {
        // The true gap starts at x = 3 - clearance = 2.9; the last visible
        // sample lies within one sampling interval before it.
        let outline = square(0.0, 10.0);
        let fill = octagon(Point2::new(5.0, 0.0), 2.0);
        for samples in [10, 20, 50, 100] {
            let runs = SplitOutline::new(outline.clone(), vec![fill.clone()], params(0.1, samples))
                .execute();
            let end = runs[0].last().map_or(f64::NAN, |p| p.x);
            let step = 10.0 / f64::from(samples);
            assert!(end <= 2.9 + TOL, "samples={samples} end={end}");
            assert!(end >= 2.9 - step - TOL, "samples={samples} end={end}");
        }
    }

    #[test]
    fn isolated_visible_samples_are_dropped() {
        // Two fills leave exactly one visible sample between them at x = 5.
        let outline = ClosedPolygon::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        let a = square(-1.0, 4.5);
        let b = ClosedPolygon::new(vec![
            Point2::new(5.5, -1.0),
            Point2::new(11.0, -1.0),
            Point2::new(11.0, 1.0),
            Point2::new(5.5, 1.0),
        ]);
        let runs = SplitOutline::new(outline, vec![a, b], params(0.1, 10)).execute();
        assert!(runs.is_empty());
    }

    #[test]
    fn degenerate_outline_segments_are_skipped() {
        let outline = ClosedPolygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
        ]);
        let runs = SplitOutline::new(outline, Vec::new(), params(0.1, 4)).execute();
        assert_eq!(runs.len(), 1);
        // 3 non-degenerate segments × 5 samples.
        assert_eq!(runs[0].len(), 15);
    }
}

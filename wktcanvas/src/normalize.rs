//! Maps decoded coordinates into canvas pixel space.
//!
//! All sequences of one load share a single [`NormalizationFrame`]: the
//! bounding extent of every polygon and line point. Points are centred on the
//! extent and divided by its larger span, which keeps the aspect ratio and
//! puts everything inside `[-0.5, 0.5]`. [`CanvasMapping`] then scales that
//! unit square to 90% of the canvas and flips y so it points down.

use crate::error::{Result, WktError};
use crate::model::{Point, PointSequence};
use serde::Serialize;

pub const DEFAULT_CANVAS_SIZE: u32 = 600;
/// Share of the canvas the unit square occupies; the rest is margin.
pub const CANVAS_FILL: f64 = 0.9;
/// Canvas-space position of the unit-space origin.
pub const CANVAS_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NormalizationFrame {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl NormalizationFrame {
    /// Bounding extent of `points`, or `None` when there are none.
    pub fn from_points<'a, I>(points: I) -> Option<NormalizationFrame>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let init = NormalizationFrame {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(it.fold(init, |f, p| NormalizationFrame {
            min_x: f.min_x.min(p.x),
            min_y: f.min_y.min(p.y),
            max_x: f.max_x.max(p.x),
            max_y: f.max_y.max(p.y),
        }))
    }

    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }

    /// The larger of the two axis spans.
    pub fn scale(&self) -> f64 {
        (self.max_x - self.min_x).max(self.max_y - self.min_y)
    }

    /// Rejects frames that cannot divide: zero span, or a span/center that
    /// overflowed.
    pub fn check(&self) -> Result<()> {
        let scale = self.scale();
        let c = self.center();
        if !scale.is_finite() || !c.x.is_finite() || !c.y.is_finite() {
            return Err(WktError::ExtentOverflow);
        }
        if scale == 0.0 {
            return Err(WktError::DegenerateExtent);
        }
        Ok(())
    }

    /// Maps `p` into the centred unit space. Only meaningful after [`check`](Self::check).
    #[inline]
    pub fn to_unit(&self, p: Point) -> Point {
        let c = self.center();
        let s = self.scale();
        Point::new((p.x - c.x) / s, (p.y - c.y) / s)
    }
}

/// Unit space to canvas pixels, y pointing down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasMapping {
    size: f64,
}

impl CanvasMapping {
    pub fn new(canvas_size: u32) -> CanvasMapping {
        CanvasMapping {
            size: f64::from(canvas_size),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn project(&self, p: Point) -> Point {
        Point::new(
            (p.x * CANVAS_FILL + CANVAS_OFFSET) * self.size,
            (-p.y * CANVAS_FILL + CANVAS_OFFSET) * self.size,
        )
    }

    pub fn project_all(&self, seqs: &[PointSequence]) -> Vec<PointSequence> {
        seqs.iter()
            .map(|s| s.iter().map(|&p| self.project(p)).collect())
            .collect()
    }
}

impl Default for CanvasMapping {
    fn default() -> Self {
        CanvasMapping::new(DEFAULT_CANVAS_SIZE)
    }
}

/// Shared frame over polygons and lines, `None` when there are no points.
pub fn frame_for(polygons: &[PointSequence], lines: &[PointSequence]) -> Option<NormalizationFrame> {
    NormalizationFrame::from_points(polygons.iter().chain(lines).flatten())
}

/// Centres and scales polygons and lines into unit space with one shared frame.
pub fn normalize_sequences(
    polygons: &[PointSequence],
    lines: &[PointSequence],
) -> Result<(Vec<PointSequence>, Vec<PointSequence>)> {
    let Some(frame) = frame_for(polygons, lines) else {
        return Ok((Vec::new(), Vec::new()));
    };
    frame.check()?;
    let map = |seqs: &[PointSequence]| -> Vec<PointSequence> {
        seqs.iter()
            .map(|s| s.iter().map(|&p| frame.to_unit(p)).collect())
            .collect()
    };
    Ok((map(polygons), map(lines)))
}

/// Unit-space normalization followed by canvas projection.
pub fn normalize(
    polygons: &[PointSequence],
    lines: &[PointSequence],
    canvas: CanvasMapping,
) -> Result<(Vec<PointSequence>, Vec<PointSequence>)> {
    let (polygons, lines) = normalize_sequences(polygons, lines)?;
    Ok((canvas.project_all(&polygons), canvas.project_all(&lines)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seq(v: &[(f64, f64)]) -> PointSequence {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn frame_spans_every_point() {
        let polys = vec![seq(&[(0.0, 0.0), (2.0, 1.0)])];
        let lines = vec![seq(&[(-1.0, 3.0)])];
        let f = frame_for(&polys, &lines).unwrap();
        assert_eq!(
            f,
            NormalizationFrame {
                min_x: -1.0,
                min_y: 0.0,
                max_x: 2.0,
                max_y: 3.0
            }
        );
        assert_eq!(f.center(), Point::new(0.5, 1.5));
        assert_eq!(f.scale(), 3.0);
    }

    #[test]
    fn no_points_means_no_frame() {
        assert!(frame_for(&[], &[]).is_none());
        assert!(frame_for(&[vec![]], &[vec![]]).is_none());
        let (p, l) = normalize(&[vec![]], &[], CanvasMapping::default()).unwrap();
        assert!(p.is_empty() && l.is_empty());
    }

    #[test]
    fn square_maps_to_margins() {
        let polys = vec![seq(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)])];
        let (p, l) = normalize(&polys, &[], CanvasMapping::new(600)).unwrap();
        assert!(l.is_empty());
        assert_eq!(p[0].len(), 5);
        assert_relative_eq!(p[0][0].x, 30.0, epsilon = 1e-9);
        assert_relative_eq!(p[0][0].y, 570.0, epsilon = 1e-9);
        assert_relative_eq!(p[0][2].x, 570.0, epsilon = 1e-9);
        assert_relative_eq!(p[0][2].y, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let lines = vec![seq(&[(0.0, 0.0), (4.0, 1.0)])];
        let (_, l) = normalize_sequences(&[], &lines).unwrap();
        assert_relative_eq!(l[0][0].x, -0.5);
        assert_relative_eq!(l[0][0].y, -0.125);
        assert_relative_eq!(l[0][1].x, 0.5);
        assert_relative_eq!(l[0][1].y, 0.125);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let polys = vec![seq(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)])];
        let err = normalize(&polys, &[], CanvasMapping::default()).unwrap_err();
        assert!(matches!(err, WktError::DegenerateExtent));
    }

    #[test]
    fn collinear_points_are_not_degenerate() {
        let lines = vec![seq(&[(0.0, 5.0), (10.0, 5.0)])];
        let (_, l) = normalize(&[], &lines, CanvasMapping::new(100)).unwrap();
        assert_relative_eq!(l[0][0].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(l[0][0].y, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn overflowing_extent_is_rejected() {
        let lines = vec![seq(&[(-f64::MAX, 0.0), (f64::MAX, 1.0)])];
        let err = normalize_sequences(&[], &lines).unwrap_err();
        assert!(matches!(err, WktError::ExtentOverflow));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Point {
        Point { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> [f64; 2] {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point { x, y }
    }
}

/// Ordered points of a polygon ring (closing point kept as written) or of an
/// open line path.
pub type PointSequence = Vec<Point>;

/// The geometry keywords the extractor recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
    LineString,
    MultiLineString,
}

impl GeometryKind {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(word: &str) -> Option<GeometryKind> {
        const KINDS: [GeometryKind; 4] = [
            GeometryKind::Polygon,
            GeometryKind::MultiPolygon,
            GeometryKind::LineString,
            GeometryKind::MultiLineString,
        ];
        KINDS
            .into_iter()
            .find(|k| k.keyword().eq_ignore_ascii_case(word))
    }

    pub fn keyword(self) -> &'static str {
        match self {
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::MultiLineString => "MULTILINESTRING",
        }
    }

    /// Parenthesis depth at which coordinate pairs live.
    pub fn coord_depth(self) -> usize {
        match self {
            GeometryKind::LineString => 1,
            GeometryKind::Polygon | GeometryKind::MultiLineString => 2,
            GeometryKind::MultiPolygon => 3,
        }
    }

    pub fn is_polygonal(self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::MultiPolygon)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A substring of the source text holding one complete geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryLiteral<'a> {
    pub kind: GeometryKind,
    /// Byte offset of the keyword in the source text.
    pub offset: usize,
    /// Keyword through the closing parenthesis, inclusive.
    pub text: &'a str,
}

impl<'a> GeometryLiteral<'a> {
    /// Everything after the keyword.
    pub fn body(&self) -> &'a str {
        &self.text[self.kind.keyword().len()..]
    }
}

/// A decoded sequence tagged by how it is rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum Shape {
    /// Exterior ring of a polygon.
    Polygon(PointSequence),
    Line(PointSequence),
}

impl Shape {
    pub fn points(&self) -> &[Point] {
        match self {
            Shape::Polygon(pts) | Shape::Line(pts) => pts,
        }
    }

    pub fn into_points(self) -> PointSequence {
        match self {
            Shape::Polygon(pts) | Shape::Line(pts) => pts,
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }
}

/// Splits decoded shapes into (polygons, lines), preserving order within each.
pub fn partition_shapes(shapes: Vec<Shape>) -> (Vec<PointSequence>, Vec<PointSequence>) {
    let mut polygons = Vec::new();
    let mut lines = Vec::new();
    for s in shapes {
        match s {
            Shape::Polygon(pts) => polygons.push(pts),
            Shape::Line(pts) => lines.push(pts),
        }
    }
    (polygons, lines)
}

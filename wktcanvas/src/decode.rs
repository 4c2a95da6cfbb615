//! Turns one geometry literal into tagged point sequences.
//!
//! The body is walked once, byte by byte, with an explicit depth counter. Each
//! kind fixes the depth at which coordinate lists appear; a group that opens
//! below that depth, coordinates outside it, an empty group, or sibling groups
//! not separated by exactly one comma is a malformed geometry. Interior rings are parsed (so bad numbers in a hole still reject
//! the polygon) but only exterior rings are emitted.

use crate::error::{Result, WktError};
use crate::model::{GeometryKind, GeometryLiteral, Point, PointSequence, Shape};

pub fn decode_literal(lit: &GeometryLiteral<'_>) -> Result<Vec<Shape>> {
    decode(lit.kind, lit.body())
}

/// Decodes `body`, the text following the keyword, as a geometry of `kind`.
pub fn decode(kind: GeometryKind, body: &str) -> Result<Vec<Shape>> {
    let leaf = kind.coord_depth();
    let bytes = body.as_bytes();
    let mut depth = 0usize;
    // children[d]: groups opened so far directly inside the open group at depth d
    let mut children = vec![0usize; leaf + 1];
    // comma[d]: a separator was seen after the last child of the group at depth d
    let mut comma = vec![false; leaf + 1];
    let mut leaf_start = 0usize;
    let mut closed = false;
    let mut out = Vec::new();

    for (i, &c) in bytes.iter().enumerate() {
        if closed {
            if !c.is_ascii_whitespace() {
                return Err(WktError::malformed(kind, "text after the closing parenthesis"));
            }
            continue;
        }
        match c {
            b'(' => {
                if depth == leaf {
                    return Err(WktError::malformed(kind, "nested deeper than expected"));
                }
                if children[depth] > 0 && !comma[depth] {
                    return Err(WktError::malformed(kind, "missing ',' between groups"));
                }
                children[depth] += 1;
                comma[depth] = false;
                depth += 1;
                children[depth] = 0;
                comma[depth] = false;
                if depth == leaf {
                    leaf_start = i + 1;
                }
            }
            b')' => {
                if depth == 0 {
                    return Err(WktError::malformed(kind, "unbalanced ')'"));
                }
                if depth == leaf {
                    let points = parse_coords(kind, &body[leaf_start..i])?;
                    let exterior = children[depth - 1] == 1;
                    match kind {
                        GeometryKind::Polygon | GeometryKind::MultiPolygon if exterior => {
                            out.push(Shape::Polygon(points))
                        }
                        GeometryKind::Polygon | GeometryKind::MultiPolygon => {}
                        GeometryKind::LineString | GeometryKind::MultiLineString => {
                            out.push(Shape::Line(points))
                        }
                    }
                } else if children[depth] == 0 {
                    return Err(WktError::malformed(kind, "empty group"));
                } else if comma[depth] {
                    return Err(WktError::malformed(kind, "trailing ','"));
                }
                depth -= 1;
                closed = depth == 0;
            }
            _ if depth == leaf => {}
            b',' if depth > 0 => {
                if children[depth] == 0 || comma[depth] {
                    return Err(WktError::malformed(kind, "unexpected ','"));
                }
                comma[depth] = true;
            }
            c if c.is_ascii_whitespace() => {}
            _ if depth == 0 => {
                return Err(WktError::malformed(kind, "expected '(' after keyword"));
            }
            _ => {
                return Err(WktError::malformed(kind, "coordinates at the wrong nesting depth"));
            }
        }
    }

    if depth != 0 {
        return Err(WktError::malformed(kind, "unterminated group"));
    }
    if !closed {
        return Err(WktError::malformed(kind, "missing coordinate group"));
    }
    Ok(out)
}

/// Parses `x y, x y, ...`.
fn parse_coords(kind: GeometryKind, text: &str) -> Result<PointSequence> {
    let mut points = Vec::new();
    for pair in text.split(',') {
        let mut tokens = pair.split_ascii_whitespace();
        let x = match tokens.next() {
            Some(t) => parse_num(kind, t)?,
            None => return Err(WktError::malformed(kind, "empty coordinate")),
        };
        let y = match tokens.next() {
            Some(t) => parse_num(kind, t)?,
            None => return Err(WktError::malformed(kind, "coordinate is missing y")),
        };
        if tokens.next().is_some() {
            return Err(WktError::malformed(kind, "expected two numbers per coordinate"));
        }
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn parse_num(kind: GeometryKind, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(WktError::Parse {
            kind,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> PointSequence {
        v.iter().copied().map(Point::from).collect()
    }

    fn code(r: Result<Vec<Shape>>) -> &'static str {
        match r {
            Ok(_) => "ok",
            Err(e) => e.code(),
        }
    }

    #[test]
    fn polygon_keeps_exterior_only() {
        let shapes = decode(
            GeometryKind::Polygon,
            " ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 1))",
        )
        .unwrap();
        assert_eq!(
            shapes,
            vec![Shape::Polygon(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]))]
        );
    }

    #[test]
    fn multipolygon_yields_one_exterior_per_member() {
        let shapes = decode(
            GeometryKind::MultiPolygon,
            "(((0 0, 1 0, 1 1, 0 0), (0.2 0.2, 0.3 0.2, 0.3 0.3, 0.2 0.2)),((5 5, 6 5, 6 6, 5 5)))",
        )
        .unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].points()[0], Point::new(0.0, 0.0));
        assert_eq!(shapes[1].points()[0], Point::new(5.0, 5.0));
        assert!(shapes.iter().all(Shape::is_polygon));
    }

    #[test]
    fn linestrings_decode_as_lines() {
        let shapes = decode(GeometryKind::LineString, "(-1.5 2e2, +3 .5)").unwrap();
        assert_eq!(shapes, vec![Shape::Line(pts(&[(-1.5, 200.0), (3.0, 0.5)]))]);

        let shapes = decode(GeometryKind::MultiLineString, "((0 0, 1 1), (2 2, 3 3, 4 4))").unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].points().len(), 3);
        assert!(!shapes[0].is_polygon());
    }

    #[test]
    fn bad_numbers_are_parse_errors() {
        assert_eq!(code(decode(GeometryKind::Polygon, "((0 0, abc 1))")), "parse_error");
        assert_eq!(code(decode(GeometryKind::LineString, "(0 0, inf 1)")), "parse_error");
        assert_eq!(code(decode(GeometryKind::LineString, "(0 0, 1 NaN)")), "parse_error");
        assert_eq!(code(decode(GeometryKind::LineString, "(0 0, 1e400 1)")), "parse_error");
        // a bad hole still rejects the polygon
        assert_eq!(
            code(decode(GeometryKind::Polygon, "((0 0, 1 0, 1 1, 0 0), (x 0, 1 1))")),
            "parse_error"
        );
    }

    #[test]
    fn wrong_nesting_is_malformed() {
        assert_eq!(code(decode(GeometryKind::Polygon, "(0 0, 1 1)")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::LineString, "((0 0, 1 1))")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::MultiPolygon, "((0 0, 1 1))")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, "()")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, "(())")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, "((0 0, 1 1)")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, "((0 0)))")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, "")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, " EMPTY")), "malformed_geometry");
    }

    #[test]
    fn group_separators_are_checked() {
        assert_eq!(
            code(decode(GeometryKind::Polygon, "((0 0, 2 0, 2 2, 0 0)(0.5 0.5, 1 0.5, 1 1, 0.5 0.5))")),
            "malformed_geometry"
        );
        assert_eq!(code(decode(GeometryKind::Polygon, "(,(0 0, 1 1))")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::Polygon, "((0 0, 1 1),)")), "malformed_geometry");
        assert_eq!(
            code(decode(GeometryKind::MultiLineString, "((0 0, 1 1),,(2 2, 3 3))")),
            "malformed_geometry"
        );
        assert_eq!(
            code(decode(GeometryKind::MultiPolygon, "(((0 0, 1 0, 1 1, 0 0)) ((2 2, 3 2, 3 3, 2 2)))")),
            "malformed_geometry"
        );
        assert_eq!(code(decode(GeometryKind::MultiLineString, "( (0 0, 1 1) ,\n (2 2, 3 3) )")), "ok");
    }

    #[test]
    fn wrong_arity_is_malformed() {
        assert_eq!(code(decode(GeometryKind::LineString, "(0 0 0, 1 1 1)")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::LineString, "(0, 1 1)")), "malformed_geometry");
        assert_eq!(code(decode(GeometryKind::LineString, "(0 0, 1 1,)")), "malformed_geometry");
    }

    #[test]
    fn literal_body_excludes_keyword() {
        let lit = GeometryLiteral {
            kind: GeometryKind::LineString,
            offset: 0,
            text: "linestring(1 2, 3 4)",
        };
        let shapes = decode_literal(&lit).unwrap();
        assert_eq!(shapes, vec![Shape::Line(pts(&[(1.0, 2.0), (3.0, 4.0)]))]);
    }
}

use crate::model::Point;
use crate::scene::Scene;

fn path_data(points: &[Point], close: bool) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!("M {} {}", first.x, first.y);
    for p in rest {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }
    if close {
        d.push_str(" Z");
    }
    Some(d)
}

/// One `d` string per sequence: polygons first (closed), then lines (open).
pub fn to_svg_paths_impl(scene: &Scene) -> Vec<String> {
    let polys = scene.polygons.iter().filter_map(|p| path_data(p, true));
    let lines = scene.lines.iter().filter_map(|l| path_data(l, false));
    polys.chain(lines).collect()
}

pub fn to_svg_document_impl(scene: &Scene) -> String {
    let size = scene.canvas_size;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
    );
    for p in scene.polygons.iter().filter_map(|p| path_data(p, true)) {
        out.push_str(&format!("  <path class=\"polygon\" d=\"{p}\"/>\n"));
    }
    for l in scene.lines.iter().filter_map(|l| path_data(l, false)) {
        out.push_str(&format!("  <path class=\"line\" d=\"{l}\" fill=\"none\"/>\n"));
    }
    out.push_str("</svg>\n");
    out
}

impl Scene {
    pub fn to_svg_paths(&self) -> Vec<String> {
        to_svg_paths_impl(self)
    }

    pub fn to_svg_document(&self) -> String {
        to_svg_document_impl(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            canvas_size: 10,
            polygons: vec![vec![Point::new(1.0, 1.0), Point::new(9.0, 1.0), Point::new(5.0, 9.0)]],
            lines: vec![vec![Point::new(0.5, 2.0), Point::new(3.0, 4.0)], vec![]],
            rejected: Vec::new(),
        }
    }

    #[test]
    fn paths_close_polygons_only() {
        assert_eq!(
            scene().to_svg_paths(),
            vec!["M 1 1 L 9 1 L 5 9 Z".to_string(), "M 0.5 2 L 3 4".to_string()]
        );
    }

    #[test]
    fn document_has_canvas_dimensions() {
        let doc = scene().to_svg_document();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains("width=\"10\" height=\"10\""));
        assert_eq!(doc.matches("<path ").count(), 2);
        assert!(doc.trim_end().ends_with("</svg>"));
    }
}

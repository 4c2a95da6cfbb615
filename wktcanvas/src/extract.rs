//! Locates WKT geometry literals inside free-form text.
//!
//! Keywords are matched case-insensitively as whole words. A keyword yields a
//! literal when the first `(` after it comes before any other keyword and opens
//! a group that is closed again before the end of the text; anything else is a
//! scan miss and is skipped without error. Text between the keyword and `(`
//! (a `Z`/`M` tag, say) stays in the literal for the decoder to judge.

use crate::model::{GeometryKind, GeometryLiteral};
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:MULTIPOLYGON|POLYGON|MULTILINESTRING|LINESTRING)\b").unwrap()
    })
}

/// Iterator over the literals of a document, in source order.
pub struct Literals<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Literals<'a> {
    pub fn new(text: &'a str) -> Literals<'a> {
        Literals { text, pos: 0 }
    }
}

impl<'a> Iterator for Literals<'a> {
    type Item = GeometryLiteral<'a>;

    fn next(&mut self) -> Option<GeometryLiteral<'a>> {
        let re = keyword_regex();
        while self.pos <= self.text.len() {
            let m = re.find_at(self.text, self.pos)?;
            // unicode case folding can match non-ASCII lookalikes (e.g. U+017F)
            let Some(kind) = GeometryKind::from_keyword(m.as_str()) else {
                self.pos = m.end();
                continue;
            };
            let bytes = self.text.as_bytes();
            let Some(open) = opening_paren(re, self.text, m.end()) else {
                trace!(offset = m.start(), %kind, "no '(' before the next keyword; skipped");
                self.pos = m.end();
                continue;
            };
            match closing_paren(bytes, open) {
                Some(close) => {
                    self.pos = close + 1;
                    return Some(GeometryLiteral {
                        kind,
                        offset: m.start(),
                        text: &self.text[m.start()..=close],
                    });
                }
                None => {
                    trace!(offset = m.start(), %kind, "unterminated geometry; skipped");
                    self.pos = m.end();
                }
            }
        }
        None
    }
}

/// All literals in `text`, in the order they appear.
pub fn extract_literals(text: &str) -> Vec<GeometryLiteral<'_>> {
    Literals::new(text).collect()
}

/// Index of the first `(` at or after `from`, unless another keyword starts first.
fn opening_paren(re: &Regex, text: &str, from: usize) -> Option<usize> {
    let open = from + text[from..].find('(')?;
    match re.find_at(text, from) {
        Some(next) if next.start() < open => None,
        _ => Some(open),
    }
}

/// Index of the `)` that brings the depth opened at `open` back to zero.
fn closing_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &c) in bytes.iter().enumerate().skip(open) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

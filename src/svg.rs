use std::fmt::Write as _;

use crate::scene::{Canvas, Element, Shape, TextAnchor};

/// An addressable drawing target the engine fully owns. `begin` discards the
/// previous subtree, so a committed scene can never leak elements from an
/// earlier pass.
pub trait Surface {
    fn begin(&mut self, canvas: Canvas);
    fn draw(&mut self, element: &Element);
    fn end(&mut self);
}

/// Surface backend emitting a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    buf: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the latest commit.
    pub fn document(&self) -> &str {
        &self.buf
    }
}

impl Surface for SvgSurface {
    fn begin(&mut self, canvas: Canvas) {
        self.buf.clear();
        let (w, h) = (canvas.width, canvas.height);
        let _ = writeln!(
            self.buf,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">"
        );
    }

    fn draw(&mut self, element: &Element) {
        let attrs = paint_attrs(element);
        let id = xml_escape(element.id.as_str());
        let out = &mut self.buf;
        match &element.shape {
            Shape::Circle { center, radius } => {
                let _ = writeln!(
                    out,
                    "  <circle id=\"{id}\" cx=\"{}\" cy=\"{}\" r=\"{radius}\"{attrs}/>",
                    center.x, center.y
                );
            }
            Shape::Line { from, to } => {
                let _ = writeln!(
                    out,
                    "  <line id=\"{id}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{attrs}/>",
                    from.x, from.y, to.x, to.y
                );
            }
            Shape::Rect { rect, rx } => {
                let _ = writeln!(
                    out,
                    "  <rect id=\"{id}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{rx}\"{attrs}/>",
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height()
                );
            }
            Shape::Path { path } => {
                let _ = writeln!(out, "  <path id=\"{id}\" d=\"{}\"{attrs}/>", path.to_svg());
            }
            Shape::Text {
                pos,
                content,
                size_px,
                weight,
                anchor,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = writeln!(
                    out,
                    "  <text id=\"{id}\" x=\"{}\" y=\"{}\" text-anchor=\"{anchor}\" \
                     dominant-baseline=\"middle\" font-size=\"{size_px}\" font-weight=\"{weight}\"{attrs}>{}</text>",
                    pos.x,
                    pos.y,
                    xml_escape(content)
                );
            }
        }
    }

    fn end(&mut self) {
        self.buf.push_str("</svg>\n");
    }
}

fn paint_attrs(element: &Element) -> String {
    let mut attrs = String::new();

    match (&element.fill, &element.shape) {
        (Some(color), _) => {
            let _ = write!(attrs, " fill=\"{}\"", color.to_hex());
        }
        // Unfilled closed shapes must opt out of the SVG default black fill.
        (None, Shape::Circle { .. } | Shape::Rect { .. } | Shape::Path { .. }) => {
            attrs.push_str(" fill=\"none\"");
        }
        (None, _) => {}
    }

    if let Some(stroke) = &element.stroke {
        let _ = write!(
            attrs,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.to_hex(),
            stroke.width
        );
        if let Some([on, off]) = stroke.dash {
            let _ = write!(attrs, " stroke-dasharray=\"{on},{off}\"");
        }
        if stroke.round_cap {
            attrs.push_str(" stroke-linecap=\"round\"");
        }
    }

    if element.opacity < 1.0 {
        let _ = write!(attrs, " opacity=\"{}\"", element.opacity);
    }

    attrs
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

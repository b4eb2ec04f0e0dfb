use std::fmt;

use kurbo::{BezPath, Point, Rect};

use crate::color::Color;

/// Logical pixel extent of a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Stable element address within one scene. Ids are derived from the domain
/// records (`"spoke:cover"`, `"cell:good:off_stump"`) so that the same input
/// always yields the same ids.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    Rect {
        rect: Rect,
        rx: f64,
    },
    Path {
        path: BezPath,
    },
    Text {
        pos: Point,
        content: String,
        size_px: f64,
        weight: u32,
        anchor: TextAnchor,
    },
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
    pub round_cap: bool,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            round_cap: false,
        }
    }

    pub fn dashed(mut self, on: f64, off: f64) -> Self {
        self.dash = Some([on, off]);
        self
    }

    pub fn round_cap(mut self) -> Self {
        self.round_cap = true;
        self
    }
}

/// One drawable node. Draw order is the scene's element order.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Element {
    pub id: ElementId,
    pub shape: Shape,
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
    pub opacity: f64,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Declarative description of one fully built diagram. A render pass owns
/// its scene exclusively; new input always builds a fresh scene.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Scene {
    pub canvas: Canvas,
    elements: Vec<Element>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Canvas {
            width: 0,
            height: 0,
        })
    }
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_str() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id.as_str() == id)
    }
}

use std::collections::BTreeMap;

use kurbo::{Point, Vec2};

use crate::{
    choreo::{AnimOp, AnimTask, Choreography, Ease},
    color::Color,
    geometry,
    record::{LengthBucket, LineBucket, Metric, PitchCell},
    scale::SequentialScale,
    scene::{Canvas, Element, ElementId, Scene, Shape, StrokeStyle, TextAnchor},
    session::RenderOptions,
};

const HEADER_FILL: Color = Color::from_rgb8(0x64, 0x74, 0x8b);
const CELL_STROKE: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);
const NOTE_FILL: Color = Color::from_rgb8(0x47, 0x55, 0x69);
const CORRIDOR_STROKE: Color = Color::from_rgb8(0xfb, 0xbf, 0x24);
const VALUE_LIGHT: Color = Color::rgb(1.0, 1.0, 1.0);

const STEP_MS: f64 = 15.0;
const FILL_MS: f64 = 400.0;
const TEXT_DELAY_MS: f64 = 300.0;
const TEXT_MS: f64 = 200.0;

#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    pub cell_w: f64,
    pub cell_h: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub right_gutter: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_w: 52.0,
            cell_h: 38.0,
            margin_left: 80.0,
            margin_top: 30.0,
            margin_bottom: 20.0,
            right_gutter: 10.0,
        }
    }
}

impl GridConfig {
    pub fn canvas(&self) -> Canvas {
        let cols = LineBucket::ALL.len() as f64;
        let rows = LengthBucket::ALL.len() as f64;
        Canvas {
            width: (self.margin_left + cols * self.cell_w + self.right_gutter).round() as u32,
            height: (self.margin_top + rows * self.cell_h + self.margin_bottom).round() as u32,
        }
    }
}

/// The line/length heat-intensity render for one metric.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PitchMap {
    pub scene: Scene,
    pub choreography: Choreography,
}

#[tracing::instrument(skip_all, fields(cells = cells.len(), metric = metric.as_str(), animated = options.animated))]
pub fn render(
    cells: &[PitchCell],
    metric: Metric,
    config: &GridConfig,
    options: &RenderOptions,
) -> PitchMap {
    let mut scene = Scene::new(config.canvas());
    let mut plan = Choreography::default();
    let origin = Vec2::new(config.margin_left, config.margin_top);
    let (w, h) = (config.cell_w, config.cell_h);
    let cols = LineBucket::ALL.len();
    let rows = LengthBucket::ALL.len();

    // Last writer wins on duplicate (length, line) pairs.
    let mut index: BTreeMap<(usize, usize), &PitchCell> = BTreeMap::new();
    for cell in cells {
        index.insert((cell.length.index(), cell.line.index()), cell);
    }

    // The color domain spans the full Cartesian cell set; a missing cell
    // reads as zero, so sparse data still anchors the gradient floor.
    let mut domain_min = f64::INFINITY;
    let mut domain_max = f64::NEG_INFINITY;
    for i in 0..rows {
        for j in 0..cols {
            let value = index.get(&(i, j)).map_or(0.0, |c| c.metric_value(metric));
            domain_min = domain_min.min(value);
            domain_max = domain_max.max(value);
        }
    }
    let scale = SequentialScale::new(metric.ramp(), domain_min, domain_max);

    for (j, line) in LineBucket::ALL.iter().enumerate() {
        scene.push(
            Element::new(
                format!("col-header:{}", line.as_str()),
                Shape::Text {
                    pos: Point::new(origin.x + j as f64 * w + w / 2.0, origin.y - 8.0),
                    content: line.label().to_owned(),
                    size_px: 10.0,
                    weight: 400,
                    anchor: TextAnchor::Middle,
                },
            )
            .fill(HEADER_FILL),
        );
    }

    for (i, length) in LengthBucket::ALL.iter().enumerate() {
        scene.push(
            Element::new(
                format!("row-header:{}", length.as_str()),
                Shape::Text {
                    pos: Point::new(origin.x - 8.0, origin.y + i as f64 * h + h / 2.0),
                    content: length.label().to_owned(),
                    size_px: 10.0,
                    weight: 400,
                    anchor: TextAnchor::End,
                },
            )
            .fill(HEADER_FILL),
        );

        for (j, line) in LineBucket::ALL.iter().enumerate() {
            let stagger = (i * cols + j) as f64 * STEP_MS;
            let cell_id = format!("cell:{}:{}", length.as_str(), line.as_str());
            let rect = geometry::cell_rect(i, j, w, h) + origin;
            let cell = index.get(&(i, j)).copied();
            let value = cell.map_or(0.0, |c| c.metric_value(metric));
            let fill_final = scale.map(value);

            let animate_fill = options.animated && cell.is_some();
            scene.push(
                Element::new(
                    cell_id.clone(),
                    Shape::Rect { rect, rx: 4.0 },
                )
                .fill(if animate_fill {
                    scale.map(domain_min)
                } else {
                    fill_final
                })
                .stroke(StrokeStyle::new(CELL_STROKE, 0.5)),
            );
            if animate_fill {
                plan.push(AnimTask {
                    element: ElementId::new(cell_id),
                    delay_ms: stagger,
                    duration_ms: FILL_MS,
                    ease: Ease::CubicInOut,
                    op: AnimOp::FillTo {
                        from: scale.map(domain_min),
                        to: fill_final,
                    },
                });
            }

            // Absent cells keep the gradient floor but show no fabricated
            // zero label; "no data" stays distinguishable from "measured
            // zero".
            let Some(cell) = cell else {
                continue;
            };

            let center_x = origin.x + j as f64 * w + w / 2.0;
            let center_y = origin.y + i as f64 * h + h / 2.0;

            let primary = match metric {
                Metric::Economy => format!("{:.1}", cell.economy),
                Metric::Balls => cell.balls.to_string(),
                Metric::Wickets => cell.wickets.to_string(),
            };
            let value_fill = if value > domain_max * 0.5 {
                VALUE_LIGHT
            } else {
                HEADER_FILL
            };
            let value_id = format!("value:{}:{}", length.as_str(), line.as_str());
            scene.push(
                Element::new(
                    value_id.clone(),
                    Shape::Text {
                        pos: Point::new(center_x, center_y - 6.0),
                        content: primary,
                        size_px: 11.0,
                        weight: 600,
                        anchor: TextAnchor::Middle,
                    },
                )
                .fill(value_fill)
                .opacity(if options.animated { 0.0 } else { 1.0 }),
            );

            let secondary = match metric {
                Metric::Balls => format!("{}w", cell.wickets),
                _ => format!("{}b", cell.balls),
            };
            let note_id = format!("note:{}:{}", length.as_str(), line.as_str());
            scene.push(
                Element::new(
                    note_id.clone(),
                    Shape::Text {
                        pos: Point::new(center_x, center_y + 8.0),
                        content: secondary,
                        size_px: 9.0,
                        weight: 400,
                        anchor: TextAnchor::Middle,
                    },
                )
                .fill(NOTE_FILL)
                .opacity(if options.animated { 0.0 } else { 1.0 }),
            );

            if options.animated {
                for id in [value_id, note_id] {
                    plan.push(AnimTask {
                        element: ElementId::new(id),
                        delay_ms: stagger + TEXT_DELAY_MS,
                        duration_ms: TEXT_MS,
                        ease: Ease::CubicInOut,
                        op: AnimOp::FadeTo { from: 0.0, to: 1.0 },
                    });
                }
            }
        }
    }

    scene.push(
        Element::new(
            "corridor",
            Shape::Rect {
                rect: geometry::corridor_rect(rows, w, h) + origin,
                rx: 4.0,
            },
        )
        .stroke(StrokeStyle::new(CORRIDOR_STROKE, 1.5).dashed(4.0, 2.0))
        .opacity(0.5),
    );

    PitchMap {
        scene,
        choreography: plan,
    }
}

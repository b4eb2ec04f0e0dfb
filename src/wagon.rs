use kurbo::Point;

use crate::{
    choreo::{AnimOp, AnimTask, Choreography, Ease},
    color::Color,
    geometry,
    record::{ScoreZone, ZoneId},
    scale::RadialScale,
    scene::{Canvas, Element, ElementId, Scene, Shape, StrokeStyle, TextAnchor},
    session::RenderOptions,
};

/// Fixed palette cycling by zone index; hue distinguishes zones, never
/// magnitude.
pub const ZONE_PALETTE: [Color; 9] = [
    Color::from_rgb8(0x22, 0xc5, 0x5e),
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0xec, 0x48, 0x99),
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0x14, 0xb8, 0xa6),
    Color::from_rgb8(0xf9, 0x73, 0x16),
    Color::from_rgb8(0x06, 0xb6, 0xd4),
    Color::from_rgb8(0x84, 0xcc, 0x16),
];

const RING_STROKE: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);
const FIELD_LABEL_FILL: Color = Color::from_rgb8(0x47, 0x55, 0x69);
const PITCH_FILL: Color = Color::from_rgb8(0x85, 0x4d, 0x0e);
const STUMP_STROKE: Color = Color::from_rgb8(0xfb, 0xbf, 0x24);

const RING_FRACTIONS: [f64; 3] = [1.0, 0.7, 0.4];

/// Static field-position captions around the boundary.
const FIELD_LABELS: [(&str, f64); 7] = [
    ("Fine Leg", 180.0),
    ("Sq Leg", 140.0),
    ("Mid-On", 50.0),
    ("Mid-Off", -50.0),
    ("Cover", -90.0),
    ("Point", -130.0),
    ("3rd Man", -170.0),
];

const STEP_MS: f64 = 80.0;
const SPOKE_GROW_MS: f64 = 600.0;
const WEDGE_FADE_DELAY_MS: f64 = 200.0;
const WEDGE_FADE_MS: f64 = 400.0;
const DOT_DELAY_MS: f64 = 500.0;
const DOT_MS: f64 = 300.0;
const LABEL_DELAY_MS: f64 = 600.0;
const LABEL_MS: f64 = 300.0;

const WEDGE_OPACITY: f64 = 0.18;
const SPOKE_OPACITY: f64 = 0.85;

#[derive(Clone, Copy, Debug)]
pub struct WagonConfig {
    /// Square canvas edge in px.
    pub size: f64,
    /// Boundary radius.
    pub outer_radius: f64,
    /// Pitch-strip radius; spokes grow from here.
    pub pitch_radius: f64,
}

impl Default for WagonConfig {
    fn default() -> Self {
        Self {
            size: 340.0,
            outer_radius: 145.0,
            pitch_radius: 28.0,
        }
    }
}

/// Aggregate strip shown alongside the wheel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct WagonSummary {
    pub runs: u32,
    pub fours: u32,
    pub sixes: u32,
}

/// One legend row: swatch + zone name + run count. Every input zone gets a
/// row, zero-run zones included.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LegendEntry {
    pub zone: ZoneId,
    pub label: &'static str,
    pub swatch: Color,
    pub runs: u32,
}

/// The full scoring-distribution render: scene, reveal plan, and the
/// host-facing summary data.
#[derive(Clone, Debug, serde::Serialize)]
pub struct WagonWheel {
    pub scene: Scene,
    pub choreography: Choreography,
    pub summary: WagonSummary,
    pub legend: Vec<LegendEntry>,
}

#[tracing::instrument(skip_all, fields(zones = zones.len(), animated = options.animated))]
pub fn render(zones: &[ScoreZone], config: &WagonConfig, options: &RenderOptions) -> WagonWheel {
    let center = Point::new(config.size / 2.0, config.size / 2.0);
    let outer = config.outer_radius;
    let pitch_r = config.pitch_radius;

    let mut scene = Scene::new(Canvas {
        width: config.size.round() as u32,
        height: config.size.round() as u32,
    });
    let mut plan = Choreography::default();

    for (i, fraction) in RING_FRACTIONS.iter().enumerate() {
        scene.push(
            Element::new(
                format!("ring:{i}"),
                Shape::Circle {
                    center,
                    radius: outer * fraction,
                },
            )
            .stroke(StrokeStyle::new(RING_STROKE, 1.0)),
        );
    }

    for (i, (label, angle)) in FIELD_LABELS.iter().enumerate() {
        scene.push(
            Element::new(
                format!("field-label:{i}"),
                Shape::Text {
                    pos: geometry::polar_point(center, outer + 12.0, *angle),
                    content: (*label).to_owned(),
                    size_px: 9.0,
                    weight: 400,
                    anchor: TextAnchor::Middle,
                },
            )
            .fill(FIELD_LABEL_FILL),
        );
    }

    scene.push(
        Element::new(
            "pitch",
            Shape::Rect {
                rect: kurbo::Rect::new(
                    center.x - 8.0,
                    center.y - pitch_r,
                    center.x + 8.0,
                    center.y + pitch_r,
                ),
                rx: 3.0,
            },
        )
        .fill(PITCH_FILL)
        .opacity(0.6),
    );

    let max_runs = zones.iter().map(|z| z.runs).max().unwrap_or(0);
    let radial = RadialScale::new(pitch_r, outer, f64::from(max_runs));

    for (i, zone) in zones.iter().enumerate() {
        if zone.runs == 0 {
            continue;
        }
        let color = ZONE_PALETTE[i % ZONE_PALETTE.len()];
        let name = zone.zone.as_str();
        let mid = geometry::mid_angle(zone.angle_start, zone.angle_end);
        let tip_radius = radial.radius(f64::from(zone.runs));
        let base = geometry::polar_point(center, pitch_r, mid);
        let tip = geometry::polar_point(center, tip_radius, mid);
        let delay = i as f64 * STEP_MS;
        let heavy = zone.sixes > 0;

        let wedge = geometry::wedge_path(
            center,
            pitch_r + 2.0,
            tip_radius,
            zone.angle_start,
            zone.angle_end,
        );
        scene.push(
            Element::new(format!("wedge:{name}"), Shape::Path { path: wedge })
                .fill(color)
                .opacity(if options.animated { 0.0 } else { WEDGE_OPACITY }),
        );

        scene.push(
            Element::new(
                format!("spoke:{name}"),
                Shape::Line {
                    from: base,
                    to: if options.animated { base } else { tip },
                },
            )
            .stroke(StrokeStyle::new(color, if heavy { 2.5 } else { 1.5 }).round_cap())
            .opacity(SPOKE_OPACITY),
        );

        scene.push(
            Element::new(
                format!("dot:{name}"),
                Shape::Circle {
                    center: if options.animated { base } else { tip },
                    radius: if heavy { 5.0 } else { 3.5 },
                },
            )
            .fill(color)
            .opacity(if options.animated { 0.0 } else { 1.0 }),
        );

        scene.push(
            Element::new(
                format!("runs-label:{name}"),
                Shape::Text {
                    pos: geometry::polar_point(center, tip_radius + 10.0, mid),
                    content: zone.runs.to_string(),
                    size_px: 10.0,
                    weight: 600,
                    anchor: TextAnchor::Middle,
                },
            )
            .fill(color)
            .opacity(if options.animated { 0.0 } else { 1.0 }),
        );

        if options.animated {
            plan.push(AnimTask {
                element: ElementId::new(format!("spoke:{name}")),
                delay_ms: delay,
                duration_ms: SPOKE_GROW_MS,
                ease: Ease::CubicOut,
                op: AnimOp::GrowLine { from: base, to: tip },
            });
            plan.push(AnimTask {
                element: ElementId::new(format!("wedge:{name}")),
                delay_ms: delay + WEDGE_FADE_DELAY_MS,
                duration_ms: WEDGE_FADE_MS,
                ease: Ease::CubicInOut,
                op: AnimOp::FadeTo {
                    from: 0.0,
                    to: WEDGE_OPACITY,
                },
            });
            plan.push(AnimTask {
                element: ElementId::new(format!("dot:{name}")),
                delay_ms: delay + DOT_DELAY_MS,
                duration_ms: DOT_MS,
                ease: Ease::CubicInOut,
                op: AnimOp::MoveTo { from: base, to: tip },
            });
            plan.push(AnimTask {
                element: ElementId::new(format!("dot:{name}")),
                delay_ms: delay + DOT_DELAY_MS,
                duration_ms: DOT_MS,
                ease: Ease::CubicInOut,
                op: AnimOp::FadeTo { from: 0.0, to: 1.0 },
            });
            plan.push(AnimTask {
                element: ElementId::new(format!("runs-label:{name}")),
                delay_ms: delay + LABEL_DELAY_MS,
                duration_ms: LABEL_MS,
                ease: Ease::CubicInOut,
                op: AnimOp::FadeTo { from: 0.0, to: 1.0 },
            });
        }
    }

    for (i, offset) in [-4.0, 0.0, 4.0].iter().enumerate() {
        scene.push(
            Element::new(
                format!("stump:{i}"),
                Shape::Line {
                    from: Point::new(center.x + offset, center.y - pitch_r + 4.0),
                    to: Point::new(center.x + offset, center.y + pitch_r - 4.0),
                },
            )
            .stroke(StrokeStyle::new(STUMP_STROKE, 1.5)),
        );
    }

    let summary = zones.iter().fold(WagonSummary::default(), |acc, z| {
        WagonSummary {
            runs: acc.runs + z.runs,
            fours: acc.fours + z.fours,
            sixes: acc.sixes + z.sixes,
        }
    });

    let legend = zones
        .iter()
        .enumerate()
        .map(|(i, z)| LegendEntry {
            zone: z.zone,
            label: z.zone.label(),
            swatch: ZONE_PALETTE[i % ZONE_PALETTE.len()],
            runs: z.runs,
        })
        .collect();

    WagonWheel {
        scene,
        choreography: plan,
        summary,
        legend,
    }
}

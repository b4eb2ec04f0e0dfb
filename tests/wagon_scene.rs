use kurbo::Point;
use pitchviz::{
    RenderOptions, ScoreZone, Shape, WagonConfig, ZoneId,
    wagon::{self, WagonSummary},
};

fn zone(id: ZoneId, runs: u32, fours: u32, sixes: u32) -> ScoreZone {
    let (angle_start, angle_end) = id.default_arc();
    ScoreZone {
        zone: id,
        runs,
        fours,
        sixes,
        angle_start,
        angle_end,
    }
}

fn nine_zones_with_cover(runs: u32, fours: u32) -> Vec<ScoreZone> {
    ZoneId::ALL
        .iter()
        .map(|&id| {
            if id == ZoneId::Cover {
                ScoreZone {
                    zone: id,
                    runs,
                    fours,
                    sixes: 0,
                    angle_start: 300.0,
                    angle_end: 340.0,
                }
            } else {
                zone(id, 0, 0, 0)
            }
        })
        .collect()
}

fn count_with_prefix(scene: &pitchviz::Scene, prefix: &str) -> usize {
    scene
        .iter()
        .filter(|e| e.id.as_str().starts_with(prefix))
        .count()
}

#[test]
fn single_scoring_zone_renders_exactly_one_of_each_mark() {
    let zones = nine_zones_with_cover(20, 2);
    let wheel = wagon::render(&zones, &WagonConfig::default(), &RenderOptions::default());

    assert_eq!(count_with_prefix(&wheel.scene, "wedge:"), 1);
    assert_eq!(count_with_prefix(&wheel.scene, "spoke:"), 1);
    assert_eq!(count_with_prefix(&wheel.scene, "dot:"), 1);
    assert_eq!(count_with_prefix(&wheel.scene, "runs-label:"), 1);
    assert!(wheel.scene.get("wedge:cover").is_some());

    assert_eq!(
        wheel.summary,
        WagonSummary {
            runs: 20,
            fours: 2,
            sixes: 0
        }
    );
}

#[test]
fn legend_run_counts_conserve_the_input_total() {
    let zones = vec![
        zone(ZoneId::FineLeg, 12, 1, 0),
        zone(ZoneId::Midwicket, 0, 0, 0),
        zone(ZoneId::Cover, 31, 4, 1),
        zone(ZoneId::ThirdMan, 7, 0, 0),
    ];
    let wheel = wagon::render(&zones, &WagonConfig::default(), &RenderOptions::default());

    let legend_total: u32 = wheel.legend.iter().map(|entry| entry.runs).sum();
    let input_total: u32 = zones.iter().map(|z| z.runs).sum();
    assert_eq!(legend_total, input_total);
    assert_eq!(wheel.legend.len(), zones.len());
}

#[test]
fn spoke_radius_is_monotone_in_runs() {
    let zones = vec![
        zone(ZoneId::FineLeg, 5, 0, 0),
        zone(ZoneId::Midwicket, 12, 0, 0),
        zone(ZoneId::Cover, 20, 0, 0),
    ];
    let wheel = wagon::render(
        &zones,
        &WagonConfig::default(),
        &RenderOptions { animated: false },
    );

    let center = Point::new(170.0, 170.0);
    let tip_distance = |name: &str| -> f64 {
        match wheel.scene.get(name).map(|e| &e.shape) {
            Some(Shape::Line { to, .. }) => to.distance(center),
            other => panic!("expected line, got {other:?}"),
        }
    };

    let small = tip_distance("spoke:fine_leg");
    let medium = tip_distance("spoke:midwicket");
    let large = tip_distance("spoke:cover");
    assert!(small <= medium && medium <= large);
    // The max-run zone reaches the boundary radius.
    assert!((large - 145.0).abs() < 1e-9);
}

#[test]
fn label_sits_just_beyond_the_spoke_tip() {
    let zones = vec![zone(ZoneId::Cover, 20, 0, 0)];
    let wheel = wagon::render(
        &zones,
        &WagonConfig::default(),
        &RenderOptions { animated: false },
    );

    let center = Point::new(170.0, 170.0);
    let tip = match wheel.scene.get("spoke:cover").map(|e| &e.shape) {
        Some(Shape::Line { to, .. }) => *to,
        other => panic!("expected line, got {other:?}"),
    };
    let label = match wheel.scene.get("runs-label:cover").map(|e| &e.shape) {
        Some(Shape::Text { pos, content, .. }) => {
            assert_eq!(content, "20");
            *pos
        }
        other => panic!("expected text, got {other:?}"),
    };
    assert!((label.distance(center) - (tip.distance(center) + 10.0)).abs() < 1e-9);
}

#[test]
fn render_is_a_pure_function_of_its_input() {
    let zones = nine_zones_with_cover(20, 2);
    let a = wagon::render(&zones, &WagonConfig::default(), &RenderOptions::default());
    let b = wagon::render(&zones, &WagonConfig::default(), &RenderOptions::default());
    assert_eq!(
        serde_json::to_string(&a.scene).unwrap(),
        serde_json::to_string(&b.scene).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&a.choreography).unwrap(),
        serde_json::to_string(&b.choreography).unwrap()
    );
}

use pitchviz::{RenderOptions, RenderSession, ScoreZone, SvgSurface, ZoneId};

fn zones() -> Vec<ScoreZone> {
    let runs = [34u32, 61, 88, 42, 57, 39, 74, 46, 18];
    let fours = [3u32, 6, 7, 4, 6, 5, 9, 6, 2];
    let sixes = [0u32, 2, 4, 1, 2, 0, 1, 0, 0];
    ZoneId::ALL
        .iter()
        .enumerate()
        .map(|(i, &zone)| {
            let (angle_start, angle_end) = zone.default_arc();
            ScoreZone {
                zone,
                runs: runs[i],
                fours: fours[i],
                sixes: sixes[i],
                angle_start,
                angle_end,
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt().init();

    let mut session = RenderSession::new();
    let (summary, legend) = session.render_wagon_wheel(&zones(), RenderOptions::default());

    // Step the reveal the way a host frame loop would, then settle.
    for tick in [0.0, 250.0, 500.0, 1000.0] {
        session.advance(tick);
    }
    session.settle();

    let mut surface = SvgSurface::new();
    session.commit(&mut surface);

    let out = std::path::Path::new("target").join("wagon_wheel.svg");
    std::fs::create_dir_all("target").expect("create target dir");
    std::fs::write(&out, surface.document()).expect("write svg");

    println!(
        "wrote {} ({} runs, {} fours, {} sixes)",
        out.display(),
        summary.runs,
        summary.fours,
        summary.sixes
    );
    for entry in legend {
        println!("  {:12} {:3} runs", entry.label, entry.runs);
    }
}

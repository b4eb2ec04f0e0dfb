use pitchviz::{LengthBucket, LineBucket, Metric, PitchCell, RenderOptions, RenderSession, SvgSurface};

fn cells() -> Vec<PitchCell> {
    let mut out = Vec::new();
    for (i, &length) in LengthBucket::ALL.iter().enumerate() {
        for (j, &line) in LineBucket::ALL.iter().enumerate() {
            // Leave the leg-side full tosses empty to show the no-data case.
            if i == 0 && j >= 4 {
                continue;
            }
            out.push(PitchCell {
                length,
                line,
                balls: ((i * 7 + j * 3) % 40) as u32,
                wickets: ((i + j) % 4) as u32,
                economy: 3.0 + ((i * 5 + j) % 12) as f64 * 0.5,
            });
        }
    }
    out
}

fn main() {
    tracing_subscriber::fmt().init();

    let cells = cells();
    let mut session = RenderSession::new();

    for metric in [Metric::Balls, Metric::Wickets, Metric::Economy] {
        session.render_pitch_map(&cells, metric, RenderOptions::default());
        session.settle();

        let mut surface = SvgSurface::new();
        session.commit(&mut surface);

        let out = std::path::Path::new("target").join(format!("pitch_map_{}.svg", metric.as_str()));
        std::fs::create_dir_all("target").expect("create target dir");
        std::fs::write(&out, surface.document()).expect("write svg");
        println!("wrote {}", out.display());
    }
}

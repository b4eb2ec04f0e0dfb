use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pitchviz::{Metric, PitchCell, RenderOptions, RenderSession, ScoreZone, SvgSurface};

#[derive(Parser, Debug)]
#[command(name = "pitchviz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scoring-distribution wagon wheel as SVG.
    Wagon(WagonArgs),
    /// Render a line/length pitch-map heat grid as SVG.
    Pitchmap(PitchmapArgs),
}

#[derive(Parser, Debug)]
struct WagonArgs {
    /// Input zone list JSON: {"zones": [...]}.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PitchmapArgs {
    /// Input cell list JSON: {"cells": [...]}.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Heat metric to normalize colors against.
    #[arg(long, value_enum, default_value_t = MetricChoice::Balls)]
    metric: MetricChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricChoice {
    Balls,
    Wickets,
    Economy,
}

impl From<MetricChoice> for Metric {
    fn from(choice: MetricChoice) -> Self {
        match choice {
            MetricChoice::Balls => Metric::Balls,
            MetricChoice::Wickets => Metric::Wickets,
            MetricChoice::Economy => Metric::Economy,
        }
    }
}

#[derive(serde::Deserialize)]
struct ZoneDoc {
    zones: Vec<ScoreZone>,
}

#[derive(serde::Deserialize)]
struct CellDoc {
    cells: Vec<PitchCell>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Wagon(args) => cmd_wagon(args),
        Command::Pitchmap(args) => cmd_pitchmap(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open input '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| "parse input JSON")
}

fn write_settled_svg(session: &mut RenderSession, out: &Path) -> anyhow::Result<()> {
    session.settle();
    let mut surface = SvgSurface::new();
    session.commit(&mut surface);
    std::fs::write(out, surface.document())
        .with_context(|| format!("write '{}'", out.display()))
}

fn cmd_wagon(args: WagonArgs) -> anyhow::Result<()> {
    let doc: ZoneDoc = read_json(&args.in_path)?;
    for zone in &doc.zones {
        zone.validate()?;
    }

    let mut session = RenderSession::new();
    let (summary, _legend) =
        session.render_wagon_wheel(&doc.zones, RenderOptions { animated: false });
    write_settled_svg(&mut session, &args.out)?;

    println!(
        "{} runs / {} fours / {} sixes -> {}",
        summary.runs,
        summary.fours,
        summary.sixes,
        args.out.display()
    );
    Ok(())
}

fn cmd_pitchmap(args: PitchmapArgs) -> anyhow::Result<()> {
    let doc: CellDoc = read_json(&args.in_path)?;
    for cell in &doc.cells {
        cell.validate()?;
    }

    let mut session = RenderSession::new();
    session.render_pitch_map(
        &doc.cells,
        args.metric.into(),
        RenderOptions { animated: false },
    );
    write_settled_svg(&mut session, &args.out)?;

    println!(
        "{} cells ({}) -> {}",
        doc.cells.len(),
        Metric::from(args.metric).as_str(),
        args.out.display()
    );
    Ok(())
}

use crate::{
    heatgrid::{self, GridConfig, PitchMap},
    record::{Metric, PitchCell, ScoreZone},
    scene::Scene,
    svg::Surface,
    timeline::{Generation, Timeline},
    wagon::{self, LegendEntry, WagonConfig, WagonSummary, WagonWheel},
};

/// Per-pass rendering options.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// When false, every element is placed at final geometry and color
    /// immediately and no timers are scheduled.
    pub animated: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { animated: true }
    }
}

/// Owns the live scene and its reveal schedule for a host-mounted diagram.
///
/// Each `render_*` call is a fresh pass: the generation counter bumps, the
/// scene is rebuilt from scratch, and anything still scheduled by the
/// previous pass is invalidated before the new geometry exists. Rendering
/// twice with identical input settles to an identical scene.
#[derive(Debug, Default)]
pub struct RenderSession {
    timeline: Timeline,
    wagon_config: WagonConfig,
    grid_config: GridConfig,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configs(wagon_config: WagonConfig, grid_config: GridConfig) -> Self {
        Self {
            timeline: Timeline::new(),
            wagon_config,
            grid_config,
        }
    }

    pub fn generation(&self) -> Generation {
        self.timeline.generation()
    }

    pub fn scene(&self) -> &Scene {
        self.timeline.scene()
    }

    /// Builds the scoring-distribution diagram and returns the host-facing
    /// summary and legend.
    #[tracing::instrument(skip_all, fields(zones = zones.len()))]
    pub fn render_wagon_wheel(
        &mut self,
        zones: &[ScoreZone],
        options: RenderOptions,
    ) -> (WagonSummary, Vec<LegendEntry>) {
        let WagonWheel {
            scene,
            choreography,
            summary,
            legend,
        } = wagon::render(zones, &self.wagon_config, &options);
        self.timeline.begin_pass(scene, choreography);
        (summary, legend)
    }

    /// Builds the line/length heat grid for the selected metric.
    #[tracing::instrument(skip_all, fields(cells = cells.len(), metric = metric.as_str()))]
    pub fn render_pitch_map(&mut self, cells: &[PitchCell], metric: Metric, options: RenderOptions) {
        let PitchMap {
            scene,
            choreography,
        } = heatgrid::render(cells, metric, &self.grid_config, &options);
        self.timeline.begin_pass(scene, choreography);
    }

    /// Applies the scene state at `elapsed_ms` into the current pass.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.timeline.advance(elapsed_ms);
    }

    /// Jumps straight to the fully revealed scene.
    pub fn settle(&mut self) {
        self.timeline.settle();
    }

    /// Clears the surface's subtree and redraws the current scene into it.
    pub fn commit(&self, surface: &mut dyn Surface) {
        let scene = self.timeline.scene();
        surface.begin(scene.canvas);
        for element in scene.iter() {
            surface.draw(element);
        }
        surface.end();
    }
}

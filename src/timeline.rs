use kurbo::Point;

use crate::{
    choreo::{AnimOp, AnimTask, Choreography, Lerp},
    color::Color,
    scene::{Scene, Shape},
};

/// Render-pass generation. Every new pass bumps the counter; tasks tagged
/// with an older generation are invalid and must never touch the scene.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Cooperative, tick-driven scheduler owning the current scene and the
/// generation-tagged task list for it.
///
/// `advance(now_ms)` applies every current-generation task at the given
/// clock, interpolating between each op's absolute `from`/`to`; calling it
/// twice with the same clock is a no-op the second time. Tasks left over
/// from a replaced pass are discarded on the next tick without being
/// applied, so a stale timer can never mutate an element that now belongs
/// to different data.
#[derive(Debug, Default)]
pub struct Timeline {
    generation: Generation,
    scene: Scene,
    tasks: Vec<(Generation, AnimTask)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of queued tasks, including not-yet-discarded stale ones.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Installs a freshly built scene and its reveal plan, invalidating
    /// everything queued by prior passes.
    pub fn begin_pass(&mut self, scene: Scene, choreography: Choreography) -> Generation {
        self.generation = self.generation.next();
        self.scene = scene;
        let generation = self.generation;
        self.tasks
            .extend(choreography.tasks.into_iter().map(|t| (generation, t)));
        generation
    }

    /// Applies the scene state at `now_ms` milliseconds into the current
    /// pass. Stale tasks are dropped here, never applied.
    pub fn advance(&mut self, now_ms: f64) {
        let current = self.generation;
        let before = self.tasks.len();
        self.tasks.retain(|(generation, _)| *generation == current);
        let dropped = before - self.tasks.len();
        if dropped > 0 {
            tracing::debug!(dropped, generation = current.0, "suppressed stale animation tasks");
        }

        for (_, task) in &self.tasks {
            apply_task(&mut self.scene, task, now_ms);
        }
    }

    /// Jumps the current pass to its fully revealed state.
    pub fn settle(&mut self) {
        let total = self
            .tasks
            .iter()
            .filter(|(generation, _)| *generation == self.generation)
            .map(|(_, task)| task.end_ms())
            .fold(0.0, f64::max);
        self.advance(total);
    }
}

fn apply_task(scene: &mut Scene, task: &AnimTask, now_ms: f64) {
    let progress = if task.duration_ms > 0.0 {
        ((now_ms - task.delay_ms) / task.duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let t = task.ease.apply(progress);

    let Some(element) = scene.get_mut(task.element.as_str()) else {
        tracing::warn!(element = %task.element, "animation task targets a missing element");
        return;
    };

    match (&task.op, &mut element.shape) {
        (AnimOp::FadeTo { from, to }, _) => {
            element.opacity = <f64 as Lerp>::lerp(from, to, t);
        }
        (AnimOp::GrowLine { from, to }, Shape::Line { to: end, .. }) => {
            *end = <Point as Lerp>::lerp(from, to, t);
        }
        (AnimOp::MoveTo { from, to }, Shape::Circle { center, .. }) => {
            *center = <Point as Lerp>::lerp(from, to, t);
        }
        (AnimOp::FillTo { from, to }, _) => {
            element.fill = Some(<Color as Lerp>::lerp(from, to, t));
        }
        (op, _) => {
            tracing::warn!(element = %task.element, ?op, "animation op does not match element shape");
        }
    }
}

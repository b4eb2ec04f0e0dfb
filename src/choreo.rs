use kurbo::Point;

use crate::{
    color::Color,
    error::{PitchvizError, PitchvizResult},
    scene::ElementId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    CubicOut,
    CubicInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Interpolation with exact endpoints: `t <= 0` yields `a`, `t >= 1` yields
/// `b`, so a settled scene is bit-identical to an immediately built one.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t <= 0.0 {
            *a
        } else if t >= 1.0 {
            *b
        } else {
            a + (b - a) * t
        }
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Color::lerp(*a, *b, t)
    }
}

/// One timed mutation against a scene element. `from`/`to` are absolute, so
/// applying a task at any instant is a pure function of the clock.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimOp {
    /// Element opacity.
    FadeTo { from: f64, to: f64 },
    /// Endpoint of a line shape; the spoke "grows" out of the pitch.
    GrowLine { from: Point, to: Point },
    /// Center of a circle shape.
    MoveTo { from: Point, to: Point },
    /// Fill color of a filled shape.
    FillTo { from: Color, to: Color },
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct AnimTask {
    pub element: ElementId,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
    pub op: AnimOp,
}

impl AnimTask {
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    pub fn validate(&self) -> PitchvizResult<()> {
        if !(self.delay_ms >= 0.0) {
            return Err(PitchvizError::animation("task delay_ms must be >= 0"));
        }
        if !(self.duration_ms > 0.0) {
            return Err(PitchvizError::animation("task duration_ms must be > 0"));
        }
        Ok(())
    }
}

/// The reveal plan for one render pass: a flat, ordered task list. Total
/// time is bounded by the latest task end; there is no unbounded growth.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Choreography {
    pub tasks: Vec<AnimTask>,
}

impl Choreography {
    pub fn push(&mut self, task: AnimTask) {
        self.tasks.push(task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn total_duration_ms(&self) -> f64 {
        self.tasks.iter().map(AnimTask::end_ms).fold(0.0, f64::max)
    }

    pub fn validate(&self) -> PitchvizResult<()> {
        for task in &self.tasks {
            task.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::CubicOut, Ease::CubicInOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(-2.0), 0.0);
            assert_eq!(ease.apply(3.0), 1.0);
        }
    }

    #[test]
    fn cubic_out_front_loads_motion() {
        assert!(Ease::CubicOut.apply(0.25) > 0.25);
        assert!(Ease::CubicInOut.apply(0.25) < 0.25);
    }

    fn fade(element: &str, delay_ms: f64, duration_ms: f64) -> AnimTask {
        AnimTask {
            element: ElementId::new(element),
            delay_ms,
            duration_ms,
            ease: Ease::Linear,
            op: AnimOp::FadeTo { from: 0.0, to: 1.0 },
        }
    }

    #[test]
    fn total_duration_is_latest_task_end() {
        let mut plan = Choreography::default();
        assert_eq!(plan.total_duration_ms(), 0.0);

        // Uniform stagger: (N-1)*step + duration.
        for i in 0..5u32 {
            plan.push(fade("e", f64::from(i) * 80.0, 600.0));
        }
        assert_eq!(plan.total_duration_ms(), 4.0 * 80.0 + 600.0);
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let mut plan = Choreography::default();
        plan.push(fade("e", 0.0, 0.0));
        assert!(plan.validate().is_err());
    }
}

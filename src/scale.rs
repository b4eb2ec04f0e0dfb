use crate::{color::Color, record::Metric};

/// Dark slate floor shared by all heat-grid gradients.
pub const HEAT_FLOOR: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);

const RAMP_WICKETS: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
const RAMP_ECONOMY: Color = Color::from_rgb8(0xef, 0x44, 0x44);
const RAMP_BALLS: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);

/// Affine map from a numeric domain onto a numeric range.
///
/// A degenerate domain (`max <= min`, including all-zero data) maps every
/// input to the range minimum instead of dividing by zero.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = self.normalize(value);
        self.range_min + (self.range_max - self.range_min) * t
    }

    fn normalize(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if !(span > 0.0) {
            return 0.0;
        }
        ((value - self.domain_min) / span).clamp(0.0, 1.0)
    }
}

/// Square-root radius encoding: small values stay visually distinguishable
/// because the spoke length encodes area rather than magnitude.
#[derive(Clone, Copy, Debug)]
pub struct RadialScale {
    inner: f64,
    outer: f64,
    max: f64,
}

impl RadialScale {
    pub fn new(inner: f64, outer: f64, max: f64) -> Self {
        Self { inner, outer, max }
    }

    pub fn radius(&self, value: f64) -> f64 {
        if !(self.max > 0.0) {
            return self.inner;
        }
        let t = (value / self.max).clamp(0.0, 1.0);
        self.inner + (self.outer - self.inner) * t.sqrt()
    }
}

/// Two-color gradient endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
    pub start: Color,
    pub end: Color,
}

impl Metric {
    /// Gradient selection by metric; the floor is shared, the ceiling names
    /// the metric.
    pub fn ramp(self) -> ColorRamp {
        let end = match self {
            Self::Wickets => RAMP_WICKETS,
            Self::Economy => RAMP_ECONOMY,
            Self::Balls => RAMP_BALLS,
        };
        ColorRamp {
            start: HEAT_FLOOR,
            end,
        }
    }
}

/// A [`ColorRamp`] bound to a concrete domain: `value -> Color` via linear
/// RGB interpolation. Degenerate domains collapse to the start color.
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    ramp: ColorRamp,
    scale: LinearScale,
}

impl SequentialScale {
    pub fn new(ramp: ColorRamp, domain_min: f64, domain_max: f64) -> Self {
        Self {
            ramp,
            scale: LinearScale::new(domain_min, domain_max, 0.0, 1.0),
        }
    }

    pub fn map(&self, value: f64) -> Color {
        Color::lerp(self.ramp.start, self.ramp.end, self.scale.map(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_endpoints() {
        let s = LinearScale::new(0.0, 10.0, 100.0, 200.0);
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 200.0);
        assert_eq!(s.map(5.0), 150.0);
        // Out-of-domain inputs clamp.
        assert_eq!(s.map(-1.0), 100.0);
        assert_eq!(s.map(99.0), 200.0);
    }

    #[test]
    fn degenerate_domain_returns_range_minimum_for_all_inputs() {
        let s = LinearScale::new(3.0, 3.0, 10.0, 20.0);
        for v in [-1.0, 0.0, 3.0, 100.0] {
            assert_eq!(s.map(v), 10.0);
        }

        let c = SequentialScale::new(Metric::Wickets.ramp(), 0.0, 0.0);
        assert_eq!(c.map(0.0), HEAT_FLOOR);
        assert_eq!(c.map(7.0), HEAT_FLOOR);
    }

    #[test]
    fn radial_scale_is_sqrt_shaped() {
        let r = RadialScale::new(28.0, 145.0, 100.0);
        assert_eq!(r.radius(0.0), 28.0);
        assert_eq!(r.radius(100.0), 145.0);
        // sqrt(0.25) = 0.5 of the band.
        let quarter = r.radius(25.0);
        assert!((quarter - (28.0 + (145.0 - 28.0) * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn radial_scale_is_monotone_and_total_on_zero_max() {
        let r = RadialScale::new(28.0, 145.0, 40.0);
        let mut prev = 0.0;
        for v in 0..=40 {
            let radius = r.radius(f64::from(v));
            assert!(radius >= prev);
            prev = radius;
        }

        let degenerate = RadialScale::new(28.0, 145.0, 0.0);
        assert_eq!(degenerate.radius(0.0), 28.0);
        assert_eq!(degenerate.radius(10.0), 28.0);
    }

    #[test]
    fn metric_ramps_share_the_floor_but_not_the_ceiling() {
        let balls = Metric::Balls.ramp();
        let wickets = Metric::Wickets.ramp();
        let economy = Metric::Economy.ramp();
        assert_eq!(balls.start, HEAT_FLOOR);
        assert_eq!(wickets.start, HEAT_FLOOR);
        assert_eq!(economy.start, HEAT_FLOOR);
        assert_ne!(balls.end, wickets.end);
        assert_ne!(wickets.end, economy.end);
    }

    #[test]
    fn sequential_scale_is_pure() {
        let s = SequentialScale::new(Metric::Economy.ramp(), 0.0, 9.0);
        assert_eq!(s.map(4.5), s.map(4.5));
        assert_eq!(s.map(0.0), HEAT_FLOOR);
        assert_eq!(s.map(9.0), Metric::Economy.ramp().end);
    }
}

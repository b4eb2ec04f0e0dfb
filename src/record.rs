use crate::error::{PitchvizError, PitchvizResult};

/// The nine named fielding sectors of the scoring wheel, in canonical order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    FineLeg,
    SquareLeg,
    Midwicket,
    MidOn,
    Straight,
    MidOff,
    Cover,
    Point,
    ThirdMan,
}

impl ZoneId {
    pub const ALL: [ZoneId; 9] = [
        Self::FineLeg,
        Self::SquareLeg,
        Self::Midwicket,
        Self::MidOn,
        Self::Straight,
        Self::MidOff,
        Self::Cover,
        Self::Point,
        Self::ThirdMan,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|z| *z == self).unwrap_or(0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FineLeg => "fine_leg",
            Self::SquareLeg => "square_leg",
            Self::Midwicket => "midwicket",
            Self::MidOn => "mid_on",
            Self::Straight => "straight",
            Self::MidOff => "mid_off",
            Self::Cover => "cover",
            Self::Point => "point",
            Self::ThirdMan => "third_man",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FineLeg => "Fine Leg",
            Self::SquareLeg => "Square Leg",
            Self::Midwicket => "Midwicket",
            Self::MidOn => "Mid-On",
            Self::Straight => "Straight",
            Self::MidOff => "Mid-Off",
            Self::Cover => "Cover",
            Self::Point => "Point",
            Self::ThirdMan => "Third Man",
        }
    }

    /// Uniform 40-degree sector tiling in canonical order, matching the
    /// upstream aggregator's zone layout.
    pub fn default_arc(self) -> (f64, f64) {
        let i = self.index() as f64;
        (i * 40.0, (i + 1.0) * 40.0)
    }
}

/// One scoring sector of the wagon wheel. Angles are in degrees, 0 pointing
/// straight down the ground, increasing clockwise; `angle_start < angle_end`
/// within a zone.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreZone {
    pub zone: ZoneId,
    pub runs: u32,
    pub fours: u32,
    pub sixes: u32,
    pub angle_start: f64,
    pub angle_end: f64,
}

impl ScoreZone {
    pub fn validate(&self) -> PitchvizResult<()> {
        if !self.angle_start.is_finite() || !self.angle_end.is_finite() {
            return Err(PitchvizError::validation(format!(
                "zone '{}' has non-finite angles",
                self.zone.as_str()
            )));
        }
        if !(0.0..360.0).contains(&self.angle_start) {
            return Err(PitchvizError::validation(format!(
                "zone '{}' angle_start must be in [0,360)",
                self.zone.as_str()
            )));
        }
        if self.angle_end <= 0.0 || self.angle_end > 360.0 {
            return Err(PitchvizError::validation(format!(
                "zone '{}' angle_end must be in (0,360]",
                self.zone.as_str()
            )));
        }
        if self.angle_end <= self.angle_start {
            return Err(PitchvizError::validation(format!(
                "zone '{}' has angle_end <= angle_start",
                self.zone.as_str()
            )));
        }
        Ok(())
    }
}

/// Delivery length buckets, in pitch-map row order (fullest first).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LengthBucket {
    FullToss,
    Yorker,
    Full,
    Good,
    ShortOfGood,
    Short,
}

impl LengthBucket {
    pub const ALL: [LengthBucket; 6] = [
        Self::FullToss,
        Self::Yorker,
        Self::Full,
        Self::Good,
        Self::ShortOfGood,
        Self::Short,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullToss => "full_toss",
            Self::Yorker => "yorker",
            Self::Full => "full",
            Self::Good => "good",
            Self::ShortOfGood => "short_of_good",
            Self::Short => "short",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullToss => "Full Toss",
            Self::Yorker => "Yorker",
            Self::Full => "Full",
            Self::Good => "Good Length",
            Self::ShortOfGood => "Back of Length",
            Self::Short => "Short",
        }
    }
}

/// Delivery line buckets, in pitch-map column order (off side first).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LineBucket {
    WideOutsideOff,
    OutsideOff,
    OffStump,
    MiddleStump,
    LegStump,
    OutsideLeg,
}

impl LineBucket {
    pub const ALL: [LineBucket; 6] = [
        Self::WideOutsideOff,
        Self::OutsideOff,
        Self::OffStump,
        Self::MiddleStump,
        Self::LegStump,
        Self::OutsideLeg,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WideOutsideOff => "wide_outside_off",
            Self::OutsideOff => "outside_off",
            Self::OffStump => "off_stump",
            Self::MiddleStump => "middle_stump",
            Self::LegStump => "leg_stump",
            Self::OutsideLeg => "outside_leg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WideOutsideOff => "Wide Off",
            Self::OutsideOff => "Out. Off",
            Self::OffStump => "Off",
            Self::MiddleStump => "Mid",
            Self::LegStump => "Leg",
            Self::OutsideLeg => "Out. Leg",
        }
    }
}

/// One (length, line) bucket of the pitch map. The full cell set is the
/// Cartesian product of the two bucket axes; missing cells read as zero.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PitchCell {
    pub length: LengthBucket,
    pub line: LineBucket,
    pub balls: u32,
    pub wickets: u32,
    pub economy: f64,
}

impl PitchCell {
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Balls => f64::from(self.balls),
            Metric::Wickets => f64::from(self.wickets),
            Metric::Economy => self.economy,
        }
    }

    pub fn validate(&self) -> PitchvizResult<()> {
        if !self.economy.is_finite() || self.economy < 0.0 {
            return Err(PitchvizError::validation(format!(
                "cell ({}, {}) economy must be finite and >= 0",
                self.length.as_str(),
                self.line.as_str()
            )));
        }
        Ok(())
    }
}

/// The heat-grid metric selector. The wagon wheel has no metric.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Balls,
    Wickets,
    Economy,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balls => "balls",
            Self::Wickets => "wickets",
            Self::Economy => "economy",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = PitchvizError;

    fn from_str(s: &str) -> PitchvizResult<Self> {
        match s {
            "balls" => Ok(Self::Balls),
            "wickets" => Ok(Self::Wickets),
            "economy" => Ok(Self::Economy),
            other => Err(PitchvizError::validation(format!(
                "unknown metric '{other}' (expected balls|wickets|economy)"
            ))),
        }
    }
}

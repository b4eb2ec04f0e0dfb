#![forbid(unsafe_code)]

pub mod choreo;
pub mod color;
pub mod error;
pub mod geometry;
pub mod heatgrid;
pub mod record;
pub mod scale;
pub mod scene;
pub mod session;
pub mod svg;
pub mod timeline;
pub mod wagon;

pub use choreo::{AnimOp, AnimTask, Choreography, Ease};
pub use color::Color;
pub use error::{PitchvizError, PitchvizResult};
pub use heatgrid::{GridConfig, PitchMap};
pub use record::{LengthBucket, LineBucket, Metric, PitchCell, ScoreZone, ZoneId};
pub use scene::{Canvas, Element, ElementId, Scene, Shape, StrokeStyle, TextAnchor};
pub use session::{RenderOptions, RenderSession};
pub use svg::{Surface, SvgSurface};
pub use timeline::{Generation, Timeline};
pub use wagon::{LegendEntry, WagonConfig, WagonSummary, WagonWheel};

pub mod result;
pub mod situation;
pub mod timeline;

pub use result::{Excitement, WinExpectancyResult};
pub use situation::{BaseState, GameSituation, InningPhase, LeverageBucket};
pub use timeline::{GameTimeline, ScoringEvent, TimelinePoint};

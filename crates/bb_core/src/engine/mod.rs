pub mod evaluator;
pub mod tables;
pub mod timeline;
pub mod win_probability;


pub use evaluator::{evaluate, ExcitementClassifier, SituationEvaluator};
pub use tables::{leverage_index, run_expectancy, LeverageIndexTable, RunExpectancyTable};
pub use timeline::{aggregate_many, aggregate_timeline, TimelineAggregator};
pub use win_probability::win_probability;

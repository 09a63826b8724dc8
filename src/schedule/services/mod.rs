//! Application services for project schedule parsing.

mod parsing;

pub use parsing::{ScheduleParsingError, ScheduleParsingResult, ScheduleParsingService};

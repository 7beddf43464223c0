pub mod lumi;
pub mod period;
pub mod sample;
pub mod seed;

pub use lumi::{LsEnd, LumiRange, LumiSection, RunNumber};
pub use period::FixedPeriod;
pub use sample::{Sample, TriggerPath};
pub use seed::Seed;

pub mod certification;
pub mod error;
pub mod loader;
pub mod periods;
pub mod report;
pub mod types;
pub mod util;

pub use certification::CertificationIndex;
pub use error::{Error, Result};
pub use periods::{compute_fixed_periods, PeriodsByPath};

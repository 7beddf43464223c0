use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::certification::CertificationIndex;
use crate::error::Result;
use crate::loader::SamplesByPath;
use crate::types::{FixedPeriod, Sample};

pub mod build;
pub mod compact;

pub use build::{build_periods, fill_gaps, retain_certified};
pub use compact::{clip_to_certified, compact};

pub type PeriodsByPath = BTreeMap<String, Vec<FixedPeriod>>;

/// Minimal constant-prescale periods of a single unversioned path.
#[instrument(skip(samples, index), level = "debug")]
pub fn process_path(
    path: &str,
    samples: Vec<Sample>,
    index: &CertificationIndex,
    clip: bool,
) -> Result<Vec<FixedPeriod>> {
    let periods = build_periods(path, samples)?;
    let periods = fill_gaps(periods, index);
    let periods = retain_certified(path, periods, index)?;
    let before = periods.len();
    let periods = compact(periods);
    debug!("{path}: {before} periods compacted into {}", periods.len());
    if clip {
        clip_to_certified(path, periods, index)
    } else {
        Ok(periods)
    }
}

/// Runs every path through the pipeline, stopping at the first failure.
pub fn compute_fixed_periods(
    index: &CertificationIndex,
    samples: SamplesByPath,
    clip: bool,
) -> Result<PeriodsByPath> {
    let result: PeriodsByPath = samples
        .into_iter()
        .map(|(path, samples)| {
            let periods = process_path(&path, samples, index, clip)?;
            Ok((path, periods))
        })
        .collect::<Result<_>>()?;
    info!(
        "Computed {} periods for {} trigger paths",
        result.values().map(Vec::len).sum::<usize>(),
        result.len()
    );
    Ok(result)
}

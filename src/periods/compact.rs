use itertools::Itertools;
use tracing::instrument;

use crate::certification::CertificationIndex;
use crate::error::{Error, Result};
use crate::types::{FixedPeriod, LsEnd};

/// Merges neighbouring periods with the same path, prescale and seed.
///
/// Input must be sorted by start. Each merged period keeps the values and start
/// of the first period of its chain and the end of the last one.
#[instrument(skip_all, level = "debug")]
pub fn compact(periods: Vec<FixedPeriod>) -> Vec<FixedPeriod> {
    periods
        .into_iter()
        .coalesce(|merged, next| {
            if merged.same_value(&next) {
                Ok(merged.extended_to(&next))
            } else {
                Err((merged, next))
            }
        })
        .collect()
}

/// Shrinks each period to its outermost certified lumi sections.
#[instrument(skip(periods, index), level = "debug")]
pub fn clip_to_certified(
    path: &str,
    periods: Vec<FixedPeriod>,
    index: &CertificationIndex,
) -> Result<Vec<FixedPeriod>> {
    periods
        .into_iter()
        .map(|period| {
            let first = index
                .intersect(period.start_run, period.start_ls, LsEnd::OpenEnded)
                .first()
                .map(|range| range.min_ls);
            let last = index
                .intersect(period.end_run, 0, period.end_ls)
                .last()
                .map(|range| range.max_ls);
            match (first, last) {
                (Some(start_ls), Some(end_ls)) => Ok(FixedPeriod {
                    start_ls,
                    end_ls: LsEnd::At(end_ls),
                    ..period
                }),
                _ => Err(Error::UncertifiedPeriod {
                    path: path.to_owned(),
                    period: period.to_string(),
                }),
            }
        })
        .collect()
}

use std::collections::HashSet;

use itertools::Itertools;
use tracing::instrument;

use crate::certification::CertificationIndex;
use crate::error::{Error, Result};
use crate::types::{FixedPeriod, LsEnd, RunNumber, Sample};
use crate::util::iterator::WithLookahead;

/// Turns the samples of one path into single-run periods.
///
/// A sample opens a period that lasts until the LS before the next sample of
/// the same run, or to the end of the run if there is none.
#[instrument(skip(samples), level = "debug")]
pub fn build_periods(path: &str, mut samples: Vec<Sample>) -> Result<Vec<FixedPeriod>> {
    samples.sort_by_key(Sample::key);
    if let Some((dup, _)) = samples
        .iter()
        .tuple_windows()
        .find(|(cur, next)| cur.key() == next.key())
    {
        return Err(Error::DuplicateSample {
            path: path.to_owned(),
            run: dup.run,
            ls: dup.lumi_section,
        });
    }

    let periods = samples
        .iter()
        .lookahead()
        .map(|(cur, next)| {
            let end_ls = match next {
                // Strictly increasing within a run, so this can't underflow
                Some(next) if next.run == cur.run => LsEnd::At(next.lumi_section - 1),
                _ => LsEnd::OpenEnded,
            };
            FixedPeriod::from_sample(cur, end_ls)
        })
        .collect();
    Ok(periods)
}

/// Adds a prescale-0 placeholder for every certified run the path never appeared in.
#[instrument(skip_all, level = "debug")]
pub fn fill_gaps(mut periods: Vec<FixedPeriod>, index: &CertificationIndex) -> Vec<FixedPeriod> {
    let covered: HashSet<RunNumber> = periods.iter().map(|p| p.start_run).collect();
    periods.extend(
        index
            .runs()
            .filter(|run| !covered.contains(run))
            .map(FixedPeriod::undefined),
    );
    periods.sort_by_key(FixedPeriod::start);
    periods
}

/// Drops periods that don't touch any certified lumi section.
#[instrument(skip(periods, index), level = "debug")]
pub fn retain_certified(
    path: &str,
    periods: Vec<FixedPeriod>,
    index: &CertificationIndex,
) -> Result<Vec<FixedPeriod>> {
    let periods = periods
        .into_iter()
        .filter(|p| {
            debug_assert_eq!(p.start_run, p.end_run, "multi-run period before compaction");
            !index.intersect(p.start_run, p.start_ls, p.end_ls).is_empty()
        })
        .collect_vec();
    if periods.is_empty() {
        return Err(Error::NoCertifiedPeriods {
            path: path.to_owned(),
        });
    }
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::{build_periods, fill_gaps, retain_certified};
    use crate::certification::CertificationIndex;
    use crate::error::Error;
    use crate::types::{FixedPeriod, LsEnd, Sample, Seed, TriggerPath};

    fn sample(run: u32, ls: u32, prescale: u32) -> Sample {
        Sample {
            path: TriggerPath::from_label("HLT_X_v1/0").unwrap(),
            run,
            lumi_section: ls,
            prescale,
            seed: Seed::new("OR", "L1_A/1"),
        }
    }

    fn bounds(periods: &[FixedPeriod]) -> Vec<(u32, u32, LsEnd)> {
        periods
            .iter()
            .map(|p| {
                assert_eq!(p.start_run, p.end_run);
                (p.start_run, p.start_ls, p.end_ls)
            })
            .collect()
    }

    #[test]
    fn test_build_periods() {
        let samples = vec![
            sample(101, 1, 1),
            sample(100, 40, 1),
            sample(100, 1, 1),
            sample(100, 20, 2),
        ];
        let periods = build_periods("HLT_X", samples).unwrap();
        assert_eq!(
            bounds(&periods),
            vec![
                (100, 1, LsEnd::At(19)),
                (100, 20, LsEnd::At(39)),
                (100, 40, LsEnd::OpenEnded),
                (101, 1, LsEnd::OpenEnded),
            ]
        );
        assert_eq!(periods[1].prescale, 2);
        assert_eq!(periods[1].path, "HLT_X_v1");
    }

    #[test]
    fn test_adjacent_samples() {
        let periods = build_periods("HLT_X", vec![sample(1, 5, 1), sample(1, 6, 2)]).unwrap();
        assert_eq!(
            bounds(&periods),
            vec![(1, 5, LsEnd::At(5)), (1, 6, LsEnd::OpenEnded)]
        );
    }

    #[test]
    fn test_duplicate_sample() {
        let err = build_periods("HLT_X", vec![sample(1, 5, 1), sample(2, 1, 1), sample(1, 5, 2)])
            .unwrap_err();
        match err {
            Error::DuplicateSample { path, run, ls } => {
                assert_eq!((path.as_str(), run, ls), ("HLT_X", 1, 5));
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn test_fill_gaps() {
        let index = CertificationIndex::new([
            (99, vec![(1, 10)]),
            (100, vec![(1, 10)]),
            (102, vec![(1, 10)]),
        ])
        .unwrap();
        let periods = build_periods("HLT_X", vec![sample(100, 3, 1), sample(100, 1, 1)]).unwrap();
        let periods = fill_gaps(periods, &index);
        assert_eq!(
            bounds(&periods),
            vec![
                (99, 0, LsEnd::OpenEnded),
                (100, 1, LsEnd::At(2)),
                (100, 3, LsEnd::OpenEnded),
                (102, 0, LsEnd::OpenEnded),
            ]
        );
        assert_eq!(periods[0], FixedPeriod::undefined(99));
        assert_eq!(periods[3], FixedPeriod::undefined(102));
    }

    #[test]
    fn test_retain_certified() {
        let index = CertificationIndex::new([(100, vec![(10, 20), (30, 40)])]).unwrap();
        let samples = vec![
            sample(100, 1, 1),
            sample(100, 5, 2),
            sample(100, 21, 3),
            sample(100, 41, 4),
        ];
        let periods = build_periods("HLT_X", samples).unwrap();
        let periods = retain_certified("HLT_X", periods, &index).unwrap();
        // [1,4] and [41,inf] touch nothing certified
        assert_eq!(
            bounds(&periods),
            vec![(100, 5, LsEnd::At(20)), (100, 21, LsEnd::At(40))]
        );
    }

    #[test]
    fn test_nothing_certified() {
        let index = CertificationIndex::new([(100, vec![(10, 20)])]).unwrap();
        let periods = build_periods("HLT_X", vec![sample(100, 21, 1)]).unwrap();
        let err = retain_certified("HLT_X", periods, &index).unwrap_err();
        assert!(matches!(err, Error::NoCertifiedPeriods { .. }), "{err}");
    }
}

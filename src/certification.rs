use std::collections::BTreeMap;
use std::io::Read;

use anyhow::Context;
use itertools::Itertools;
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::types::{LsEnd, LumiRange, LumiSection, RunNumber};

/// Certified-good lumi sections, per run.
///
/// Ranges of a run are sorted and disjoint; this is checked on construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CertificationIndex {
    runs: BTreeMap<RunNumber, Vec<LumiRange>>,
}

impl CertificationIndex {
    pub fn new(
        runs: impl IntoIterator<Item = (RunNumber, Vec<(LumiSection, LumiSection)>)>,
    ) -> Result<Self> {
        let mut result = BTreeMap::new();
        for (run, ranges) in runs {
            let ranges = validate_ranges(&run.to_string(), ranges)?;
            if result.insert(run, ranges).is_some() {
                return Err(Error::InvalidCertification {
                    run: run.to_string(),
                    reason: "run listed twice".to_owned(),
                });
            }
        }
        Ok(Self { runs: result })
    }

    /// Reads a `{"<run>": [[min_ls, max_ls], ...]}` document.
    #[instrument(skip_all, level = "debug")]
    pub fn from_json(reader: impl Read) -> Result<Self> {
        let raw: BTreeMap<String, Vec<(LumiSection, LumiSection)>> =
            serde_json::from_reader(reader).context("Couldn't parse certification JSON")?;
        let mut runs = Vec::with_capacity(raw.len());
        for (key, ranges) in raw {
            let run = key
                .trim()
                .parse::<RunNumber>()
                .map_err(|e| Error::InvalidCertification {
                    run: key.clone(),
                    reason: format!("run number is not an integer: {e}"),
                })?;
            runs.push((run, ranges));
        }
        let index = Self::new(runs)?;
        info!(
            "Certified runs: {}, lumi ranges: {}",
            index.runs.len(),
            index.runs.values().map(Vec::len).sum::<usize>()
        );
        Ok(index)
    }

    pub fn is_good_run(&self, run: RunNumber) -> bool {
        self.runs.contains_key(&run)
    }

    pub fn is_good_lumi_section(&self, run: RunNumber, ls: LumiSection) -> bool {
        self.ranges(run).iter().any(|range| range.contains(ls))
    }

    pub fn ranges(&self, run: RunNumber) -> &[LumiRange] {
        self.runs.get(&run).map(Vec::as_slice).unwrap_or_default()
    }

    /// Certified run numbers in ascending order.
    pub fn runs(&self) -> impl Iterator<Item = RunNumber> + '_ {
        self.runs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Every part of `[min_ls, max_ls]` in `run` that is certified, in order.
    ///
    /// Panics if `min_ls > max_ls`.
    pub fn intersect(&self, run: RunNumber, min_ls: LumiSection, max_ls: LsEnd) -> Vec<LumiRange> {
        assert!(
            LsEnd::At(min_ls) <= max_ls,
            "min_ls={min_ls} is not <= max_ls={max_ls}"
        );
        self.ranges(run)
            .iter()
            .filter_map(|range| range.intersect(min_ls, max_ls))
            .collect()
    }
}

fn validate_ranges(
    run: &str,
    ranges: Vec<(LumiSection, LumiSection)>,
) -> Result<Vec<LumiRange>> {
    let invalid = |reason: String| Error::InvalidCertification {
        run: run.to_owned(),
        reason,
    };
    if let Some((min, max)) = ranges.iter().find(|(min, max)| min > max) {
        return Err(invalid(format!("range [{min}, {max}] is inverted")));
    }
    let ranges = ranges
        .into_iter()
        .map(|(min, max)| LumiRange::new(min, max))
        .sorted()
        .collect_vec();
    for (cur, next) in ranges.iter().tuple_windows() {
        if cur.max_ls >= next.min_ls {
            return Err(invalid(format!("overlapping ranges {cur} and {next}")));
        }
    }
    Ok(ranges)
}

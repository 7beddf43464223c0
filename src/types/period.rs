use serde::Serialize;

use super::{LsEnd, LumiSection, RunNumber, Sample, Seed};

/// Path label of the placeholder periods covering certified runs in which a
/// path was not part of the trigger menu.
pub const UNDEFINED_PATH: &str = "undefined";

/// Run/LS interval over which a path kept the same prescale and seed.
///
/// Bounds are inclusive and ordered lexicographically by `(run, ls)`.
#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct FixedPeriod {
    pub path: String,
    pub start_run: RunNumber,
    pub start_ls: LumiSection,
    pub end_run: RunNumber,
    pub end_ls: LsEnd,
    pub prescale: u32,
    pub seed: Seed,
}

impl FixedPeriod {
    /// Period opened by `sample` and closed at `end_ls` within the same run.
    pub fn from_sample(sample: &Sample, end_ls: LsEnd) -> Self {
        Self {
            path: sample.path.versioned.clone(),
            start_run: sample.run,
            start_ls: sample.lumi_section,
            end_run: sample.run,
            end_ls,
            prescale: sample.prescale,
            seed: sample.seed.clone(),
        }
    }

    /// Whole-run placeholder with prescale 0 and no seed.
    pub fn undefined(run: RunNumber) -> Self {
        Self {
            path: UNDEFINED_PATH.to_owned(),
            start_run: run,
            start_ls: 0,
            end_run: run,
            end_ls: LsEnd::OpenEnded,
            prescale: 0,
            seed: Seed::Undefined,
        }
    }

    pub fn start(&self) -> (RunNumber, LumiSection) {
        (self.start_run, self.start_ls)
    }

    pub fn end(&self) -> (RunNumber, LsEnd) {
        (self.end_run, self.end_ls)
    }

    /// Two periods may be merged iff path, prescale and seed all match.
    pub fn same_value(&self, other: &Self) -> bool {
        self.path == other.path && self.prescale == other.prescale && self.seed == other.seed
    }

    /// Copy of this period ending where `last` ends.
    pub fn extended_to(self, last: &Self) -> Self {
        Self {
            end_run: last.end_run,
            end_ls: last.end_ls,
            ..self
        }
    }
}

impl std::fmt::Display for FixedPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})  prescale={}  seed={}  [{}]",
            self.start_run,
            self.start_ls,
            self.end_run,
            self.end_ls,
            self.prescale,
            self.seed,
            self.path
        )
    }
}

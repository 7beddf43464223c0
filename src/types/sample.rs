use lazy_static::lazy_static;
use regex::Regex;

use super::{LumiSection, RunNumber, Seed};

#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct TriggerPath {
    /// `<name>_v<digits>`
    pub versioned: String,
    /// `<name>`
    pub unversioned: String,
}

impl TriggerPath {
    /// Parses a `<name>_v<digits>/<digits>` label as found in the prescale log.
    pub fn from_label(label: &str) -> Option<Self> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^([A-Za-z0-9_]+)_v(\d+)/\d+$").unwrap();
        }
        let cap = RE.captures(label.trim())?;
        let name = cap.get(1)?.as_str();
        let version = cap.get(2)?.as_str();
        Some(Self {
            versioned: format!("{name}_v{version}"),
            unversioned: name.to_owned(),
        })
    }
}

impl std::fmt::Display for TriggerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.versioned)
    }
}

/// Prescale and seed observed for one path starting at `(run, lumi_section)`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Sample {
    pub path: TriggerPath,
    pub run: RunNumber,
    pub lumi_section: LumiSection,
    pub prescale: u32,
    pub seed: Seed,
}

impl Sample {
    pub fn key(&self) -> (RunNumber, LumiSection) {
        (self.run, self.lumi_section)
    }
}

use crate::types::{LumiSection, RunNumber};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed trigger path label '{label}' at line {line}")]
    MalformedLabel { line: u64, label: String },
    #[error("Malformed prescale record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    #[error("Invalid certification for run {run}: {reason}")]
    InvalidCertification { run: String, reason: String },
    #[error("Duplicate sample for {path} at run {run}, LS {ls}")]
    DuplicateSample {
        path: String,
        run: RunNumber,
        ls: LumiSection,
    },
    #[error("No certified lumi sections left for {path}")]
    NoCertifiedPeriods { path: String },
    #[error("Period {period} of {path} has no certified lumi sections")]
    UncertifiedPeriod { path: String, period: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::Context;
use tracing::{info, instrument, trace};

use crate::certification::CertificationIndex;
use crate::error::{Error, Result};
use crate::types::{Sample, Seed, TriggerPath};

// run,cmsls,prescidx,totprescval,hltpath/prescval,logic,l1bit/prescval
const RUN_COLUMN: usize = 0;
const LS_COLUMN: usize = 1;
const PRESCALE_COLUMN: usize = 3;
const LABEL_COLUMN: usize = 4;
const LOGIC_COLUMN: usize = 5;
const BITS_COLUMN: usize = 6;
const NUM_COLUMNS: usize = 7;

pub type SamplesByPath = BTreeMap<String, Vec<Sample>>;

/// Reads the prescale log, keeping only records of certified runs.
///
/// The first `header_rows` rows are skipped without being inspected.
#[instrument(skip_all, level = "debug")]
pub fn load_samples(
    reader: impl Read,
    index: &CertificationIndex,
    header_rows: usize,
) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for (row, record) in rdr.records().enumerate().skip(header_rows) {
        let record = record.context("Couldn't read prescale CSV")?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(row as u64 + 1);
        let run = parse_int(record.get(RUN_COLUMN).unwrap_or_default(), "run", line)?;
        if !index.is_good_run(run) {
            trace!("Skipping record of uncertified run {run} at line {line}");
            skipped += 1;
            continue;
        }
        if record.len() < NUM_COLUMNS {
            return Err(Error::MalformedRecord {
                line,
                reason: format!("expected {NUM_COLUMNS} columns, got {}", record.len()),
            });
        }
        let lumi_section = parse_int(&record[LS_COLUMN], "lumi section", line)?;
        let prescale = parse_int(&record[PRESCALE_COLUMN], "prescale", line)?;
        let label = &record[LABEL_COLUMN];
        let path = TriggerPath::from_label(label).ok_or_else(|| Error::MalformedLabel {
            line,
            label: label.to_owned(),
        })?;
        samples.push(Sample {
            path,
            run,
            lumi_section,
            prescale,
            seed: Seed::new(&record[LOGIC_COLUMN], &record[BITS_COLUMN]),
        });
    }
    info!(
        "Prescale records accepted: {}, skipped (uncertified run): {}",
        samples.len(),
        skipped
    );
    Ok(samples)
}

/// Groups samples by unversioned path, keeping their input order.
pub fn group_by_path(samples: impl IntoIterator<Item = Sample>) -> SamplesByPath {
    samples
        .into_iter()
        .fold(SamplesByPath::new(), |mut groups, sample| {
            groups
                .entry(sample.path.unversioned.clone())
                .or_default()
                .push(sample);
            groups
        })
}

fn parse_int(field: &str, what: &str, line: u64) -> Result<u32> {
    field.parse().map_err(|e| Error::MalformedRecord {
        line,
        reason: format!("{what} '{field}' is not a valid integer: {e}"),
    })
}

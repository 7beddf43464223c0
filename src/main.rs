// prescale-ranges, fixed-prescale run/lumi ranges of trigger paths.

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use prescale_ranges::loader::{group_by_path, load_samples};
use prescale_ranges::{compute_fixed_periods, report, CertificationIndex};

use crate::cli::Args;

mod cli;

fn setup_tracing(args: &Args) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_span_events(if args.log_span_durations {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt).try_init()?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    tracing::info!("Data cert JSON: {}", args.cert_json);
    let file = File::open(&args.cert_json)
        .with_context(|| format!("Couldn't open '{}'", args.cert_json))?;
    let index = CertificationIndex::from_json(BufReader::new(file))?;

    tracing::info!("Trigger prescale CSV: {}", args.prescale_csv);
    let file = File::open(&args.prescale_csv)
        .with_context(|| format!("Couldn't open '{}'", args.prescale_csv))?;
    let samples = load_samples(BufReader::new(file), &index, args.header_rows)?;

    let periods = compute_fixed_periods(&index, group_by_path(samples), !args.no_clip)?;

    let mut stdout = std::io::stdout().lock();
    report::write_text(&mut stdout, &periods)?;
    stdout.flush()?;

    if let Some(output) = &args.output {
        let file =
            File::create(output).with_context(|| format!("Couldn't create '{output}'"))?;
        let mut writer = BufWriter::new(file);
        report::write_json(&mut writer, &periods)?;
        writer.flush()?;
        tracing::info!("Report written to {output}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    setup_tracing(&args)?;
    run(args)
}

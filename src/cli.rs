use camino::Utf8PathBuf as PathBuf;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about = "Finds run/lumi ranges over which trigger paths have a fixed prescale")]
pub struct Args {
    /// JSON file specifying certified lumi section ranges
    #[clap(env, value_name = "CERT_JSON")]
    pub cert_json: PathBuf,

    /// CSV file containing trigger prescale information
    #[clap(env, value_name = "PRESCALE_CSV")]
    pub prescale_csv: PathBuf,

    /// Number of header rows at the top of the prescale CSV
    #[clap(long, env, value_name = "N", default_value_t = 2)]
    pub header_rows: usize,

    /// Also write the report as JSON to this file
    #[clap(short, long, env, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report periods as compacted, without shrinking them to certified lumi sections
    #[clap(long)]
    pub no_clip: bool,

    #[clap(long, env, hide(true))]
    pub log_span_durations: bool,
}

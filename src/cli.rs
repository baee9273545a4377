use std::path::PathBuf;

use lazy_static::lazy_static;
use structopt::StructOpt;

use db_maker::gen::{check_count, DEFAULT_DB_FILE, DEFAULT_RECORD_COUNT};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

lazy_static! {
    static ref DEFAULT_RECORDS: String = DEFAULT_RECORD_COUNT.to_string();
}

#[derive(StructOpt, Debug, Clone)]
#[structopt(
global_settings(& [structopt::clap::AppSettings::ColoredHelp, structopt::clap::AppSettings::DeriveDisplayOrder]),
name = "db_maker"
)]
/// Write the student database: zero padded 4 digit student ids, one per line,
/// ending with the 9999 marker.
pub struct CliCfg {
    #[structopt(short = "o", long = "output", name = "output", parse(from_os_str), conflicts_with = "stdout")]
    /// Database file to create or overwrite [default: database.txt]
    pub output: Option<PathBuf>,

    #[structopt(short = "n", long = "records", name = "records", default_value(& DEFAULT_RECORDS))]
    /// Number of records written, including the final 9999 marker
    ///
    /// Must be between 1 and 9999 so every id fits in 4 digits and never equals the marker.
    pub records: usize,

    #[structopt(long = "stdout", name = "stdout")]
    /// Write records to stdout instead of a file
    pub stdout: bool,

    #[structopt(short = "v", parse(from_occurrences))]
    /// Verbosity - use more than one v for greater detail
    pub verbose: usize,
}

fn check_cfg(cfg: &CliCfg) -> Result<()> {
    check_count(cfg.records)?;
    Ok(())
}

impl CliCfg {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }
}

pub fn get_cli() -> Result<CliCfg> {
    // from_args handles --help and bad options itself
    checked(CliCfg::from_args())
}

pub fn get_cli_from<I>(args: I) -> Result<CliCfg>
where
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    checked(CliCfg::from_iter_safe(args)?)
}

fn checked(cfg: CliCfg) -> Result<CliCfg> {
    check_cfg(&cfg)?;
    if cfg.verbose == 1 {
        eprintln!("CLI options: {:?}", cfg);
    } else if cfg.verbose > 1 {
        eprintln!("CLI options: {:#?}", cfg);
    }
    Ok(cfg)
}

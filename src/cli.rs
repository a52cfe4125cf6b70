// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use crate::config::consts::WORKERS;
use crate::config::options::ConvertOptions;
use crate::progress::Progress;

/// Convert handball match report documents (.pdf, .txt) into XML.
#[derive(Parser, Debug)]
#[command(name = "hb_report", version, about)]
pub struct Args {
    /// Directory holding the report documents
    pub source_dir: PathBuf,

    /// Directory receiving one .xml per document (created if missing)
    pub dest_dir: PathBuf,

    /// Concurrent conversions
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Also write hb_report.log into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(&self.source_dir, &self.dest_dir).with_workers(self.workers)
    }
}

/// Counts to stderr as documents complete.
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, source: &Path, _output: &Path) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, source.display());
    }

    fn item_failed(&mut self, source: &Path, error: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {} FAILED: {}", self.done, self.total, source.display(), error);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let _guard = crate::log::init(args.log_dir.as_deref(), args.verbose);

    let opts = args.options();
    let mut progress = CliProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&opts, Some(&mut progress))
        .wrap_err_with(|| format!("Batch conversion of {} failed", opts.source_dir.display()))?;

    for path in &summary.written {
        println!("{}", path.display());
    }

    if summary.anomalies > 0 {
        logw!("Batch: {} parse anomalies; see log for details", summary.anomalies);
    }
    if !summary.is_clean() {
        return Err(eyre!(
            "{} of {} documents failed",
            summary.failed.len(),
            summary.failed.len() + summary.written.len()
        ));
    }
    Ok(())
}

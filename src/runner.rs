// src/runner.rs
use std::{
    error::Error,
    path::{Path, PathBuf},
    thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::consts::OUTPUT_EXTENSION,
    config::options::ConvertOptions,
    convert::{self, ConversionReport},
    error::Result,
    file,
    progress::Progress,
    source,
};

/// Summary of what was produced, in source-file order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    /// Parse anomalies across all converted documents.
    pub anomalies: usize,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool { self.failed.is_empty() }
}

/// Convert a single document and write `<dest_dir>/<stem>.xml`.
pub fn convert_file(path: &Path, dest_dir: &Path) -> Result<(PathBuf, ConversionReport)> {
    let src = source::open(path)?;
    let conv = convert::convert_source(src.as_ref())?;
    let out = file::output_path_for(path, dest_dir, OUTPUT_EXTENSION);
    file::write_document(&out, &conv.xml)?;
    Ok((out, conv.report))
}

/// "outer: inner: innermost"
fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut cur = e.source();
    while let Some(inner) = cur {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        cur = inner.source();
    }
    msg
}

/// Convert every recognized document in `opts.source_dir`.
/// Per-document failures are collected, not propagated; only an unreadable
/// source directory or an unusable destination fails the whole run.
pub fn run(
    opts: &ConvertOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let sources = file::list_sources(&opts.source_dir)?;
    file::ensure_directory(&opts.dest_dir)?;

    if sources.is_empty() {
        logf!("Batch: no report documents in {}", opts.source_dir.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log("No report documents found.");
            p.finish();
        }
        return Ok(RunSummary::default());
    }

    let total = sources.len();
    logf!("Batch: {} documents from {} → {}", total, opts.source_dir.display(), opts.dest_dir.display());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    // Concurrency
    type Outcome = std::result::Result<(PathBuf, ConversionReport), String>;

    let sources = Arc::new(sources);
    let dest = Arc::new(opts.dest_dir.clone());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(usize, Outcome)>();

    let workers = opts.workers.min(total).max(1);

    for _ in 0..workers {
        let sources = Arc::clone(&sources);
        let dest = Arc::clone(&dest);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= sources.len() {
                    break;
                }
                let result = convert_file(&sources[i], &dest).map_err(|e| error_chain(&e));
                let _ = tx.send((i, result));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut outcomes: Vec<Option<Outcome>> = vec![None; total];

    for _ in 0..total {
        match res_rx.recv() {
            Ok((i, outcome)) => {
                let src = &sources[i];
                match &outcome {
                    Ok((out, report)) => {
                        logf!(
                            "Batch: {} → {} ({} players, {} anomalies)",
                            src.display(), out.display(), report.players, report.anomalies.len()
                        );
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(src, out);
                        }
                    }
                    Err(msg) => {
                        loge!("Batch: {}: {}", src.display(), msg);
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(src, msg);
                        }
                    }
                }
                outcomes[i] = Some(outcome);
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let mut summary = RunSummary::default();
    for (src, outcome) in sources.iter().zip(outcomes) {
        match outcome {
            Some(Ok((out, report))) => {
                summary.anomalies += report.anomalies.len();
                summary.written.push(out);
            }
            Some(Err(msg)) => summary.failed.push((src.clone(), msg)),
            None => summary.failed.push((src.clone(), s!("conversion did not complete"))),
        }
    }
    Ok(summary)
}

//! oxshift entrypoint: shift the word, selection or block at an offset of a
//! file and print (or write back) the result.
use anyhow::{Context, Result, bail};
use clap::Parser;
use core_actions::{BufferHost, Direction, ShiftReport, shift, shift_more};
use core_config::load_from;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "oxshift.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxshift", version, about = "Shift the value under the caret up or down")]
struct Args {
    /// UTF-8 text file to shift in.
    pub path: PathBuf,
    /// Caret byte offset. Defaults to the start of the file.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
    /// Selected byte range, `START..END`.
    #[arg(long, value_parser = parse_range)]
    pub selection: Option<Range<usize>>,
    /// Block caret range, `START..END`; repeat once per caret.
    #[arg(long = "block", value_parser = parse_range)]
    pub blocks: Vec<Range<usize>>,
    /// Shift down instead of up.
    #[arg(long)]
    pub down: bool,
    /// Repeat the shift this many times as one step ("shift more").
    #[arg(long)]
    pub repeat: Option<u32>,
    /// Answer for ambiguous shifts (0 is the default option); repeatable.
    #[arg(long = "choose")]
    pub answers: Vec<usize>,
    /// Optional configuration file path (overrides discovery of `oxshift.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Write the result back to the file instead of printing it.
    #[arg(long)]
    pub in_place: bool,
    /// Directory for `oxshift.log`; logging is off when omitted.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    fn direction(&self) -> Direction {
        if self.down { Direction::Down } else { Direction::Up }
    }
}

fn parse_range(s: &str) -> std::result::Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got `{s}`"))?;
    let start: usize = start.trim().parse().map_err(|e| format!("bad start: {e}"))?;
    let end: usize = end.trim().parse().map_err(|e| format!("bad end: {e}"))?;
    if start > end {
        return Err(format!("range start {start} is past its end {end}"));
    }
    Ok(start..end)
}

#[derive(Default)]
struct Startup {
    log_guard: Option<WorkerGuard>,
}

impl Startup {
    fn configure_logging(&mut self, log_dir: &Path) -> Result<()> {
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Build the in-memory host for `args` over `content`.
fn build_host(args: &Args, content: &str) -> Result<BufferHost> {
    let len = content.len();
    let in_bounds = |r: &Range<usize>| {
        r.end <= len && content.is_char_boundary(r.start) && content.is_char_boundary(r.end)
    };
    if args.offset > len || !content.is_char_boundary(args.offset) {
        bail!("offset {} is not a character boundary of a {len} byte file", args.offset);
    }
    if let Some(bad) = args.selection.iter().chain(&args.blocks).find(|r| !in_bounds(r)) {
        bail!("range {}..{} is outside the file or splits a character", bad.start, bad.end);
    }

    let config = load_from(args.config.clone())?;
    let name = args
        .path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    let mut host = BufferHost::new(name, content)?
        .with_preferences(config.preferences())
        .with_caret(args.offset);
    if let Some(selection) = args.selection.clone() {
        host = host.with_selection(selection);
    }
    if !args.blocks.is_empty() {
        host = host.with_blocks(args.blocks.clone());
    }
    for answer in &args.answers {
        host = host.with_answer(*answer);
    }
    Ok(host)
}

/// Run the requested shift(s); reports in order.
fn run_shift(args: &Args, host: &mut BufferHost) -> Result<Vec<ShiftReport>> {
    match args.repeat {
        Some(count) => shift_more(host, args.direction(), count),
        None => Ok(vec![shift(host, args.direction())?]),
    }
}

fn describe(report: &ShiftReport) -> String {
    match (report.applied, report.kind, report.reason) {
        (true, Some(kind), _) => format!("shifted {kind} ({} edit(s))", report.edits),
        (_, _, Some(reason)) => format!("not shifted: {reason}"),
        _ => "not shifted".to_string(),
    }
}

fn run(args: Args) -> Result<()> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    tracing::debug!(target: "io", file = %args.path.display(), size_bytes = content.len(), "file_read_ok");

    let mut host = build_host(&args, &content)?;
    let reports = run_shift(&args, &mut host)?;
    for report in &reports {
        eprintln!("{}", describe(report));
    }
    for note in host.notifications() {
        eprintln!("{note}");
    }

    let text = host.text();
    if args.in_place {
        if text != content {
            std::fs::write(&args.path, &text)
                .with_context(|| format!("writing {}", args.path.display()))?;
            info!(target: "io", file = %args.path.display(), size_bytes = text.len(), "file_written");
        }
    } else {
        print!("{text}");
    }
    if !reports.iter().any(|r| r.applied) {
        warn!(target: "runtime", "nothing_shifted");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = Startup::default();
    if let Some(dir) = args.log_dir.as_deref() {
        startup.configure_logging(dir)?;
    }
    Startup::install_panic_hook();
    info!(target: "runtime", path = %args.path.display(), direction = ?args.direction(), "startup");

    let result = run(args);
    if let Err(e) = &result {
        error!(target: "runtime", error = %e, "shift_failed");
    }
    result
}

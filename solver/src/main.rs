//! # `lexicover-solve`
//!
//! Tile a letter grid with non-crossing dictionary words from the command line.
//!
//! ```text
//! lexicover-solve -d words.txt -r 2 -c 4 treelake --known tree --timeout-secs 30
//! ```

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use lexicover::{Board, CancelToken, Progress, SolverConfig, SolverEngine, WordSet};

/// Solve a letter grid by covering every cell with dictionary words traced through adjacent cells.
#[derive(Clone, Debug, Parser)]
#[command(version)]
struct Opts {
    /// Newline-delimited word list.
    #[arg(short = 'd', long)]
    dictionary: String,

    /// Rows on the board.
    #[arg(short = 'r', long)]
    rows: usize,

    /// Columns on the board.
    #[arg(short = 'c', long)]
    cols: usize,

    /// Board letters, row-major. Whitespace is ignored.
    board: String,

    /// A word the solution must contain. May be repeated.
    #[arg(short = 'k', long = "known")]
    known: Vec<String>,

    /// A word the solution must not use. May be repeated.
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Milliseconds between progress lines.
    #[arg(long, default_value_t = 1000)]
    progress_ms: u64,

    /// Give up after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Shortest word to use.
    #[arg(long, default_value_t = lexicover::MIN_WORD_LEN)]
    min_len: usize,

    /// Skip the starter-word filter.
    #[arg(long)]
    no_filter: bool,

    /// More logging; repeat for more.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    debug!("command line options: {:?}", opts);

    let board = match Board::from_letters(opts.rows, opts.cols, &opts.board) {
        Ok(board) => board,
        Err(e) => {
            error!("invalid board: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = SolverConfig::default()
        .with_min_word_len(opts.min_len)
        .with_progress_interval(Duration::from_millis(opts.progress_ms))
        .with_heat_map(false)
        .with_starter_filter(!opts.no_filter);

    let mut engine = SolverEngine::new(config);
    match engine.load_dictionary_file(&opts.dictionary) {
        Ok(count) => info!("{} words loaded from {}", count, opts.dictionary),
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let known: WordSet = opts.known.iter().collect();
    let excluded: WordSet = opts.exclude.iter().collect();

    let cancel = CancelToken::new();
    if let Some(secs) = opts.timeout_secs {
        let watchdog = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            watchdog.cancel();
        });
    }

    print!("{}", board);
    println!();

    let mut progress = |progress: &Progress| {
        eprintln!("{:>10.0} words/s  {}", progress.words_per_second, progress.words.iter()
            .map(|path| path.word())
            .collect::<Vec<_>>()
            .join(" "));
    };

    let report = match engine.solve(&board, &known, &excluded, &cancel, &mut progress) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    for (word, status) in &report.known {
        println!("known {}: {:?}", word, status);
    }

    info!("{} words attempted in {:.2?} ({:.0}/s)",
        report.words_attempted, report.elapsed, report.words_per_second);

    if report.solution.solved {
        print!("{}", report.solution.render(&board));
        println!();
        print!("{}", report.solution.describe());
        ExitCode::SUCCESS
    } else if report.cancelled {
        println!("cancelled before a solution was found");
        ExitCode::FAILURE
    } else {
        println!("no solution");
        ExitCode::FAILURE
    }
}

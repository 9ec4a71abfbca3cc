use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ts4_toolkit::prelude::*;
use ts4_toolkit::ui::presentation::{self, FormState, UiLanguage};

/// Default Steam install used by the hasher.
const DEFAULT_HASH_ROOT: &str = r"C:\Program Files (x86)\Steam\steamapps\common\The Sims 4";

/// Default Steam library install used by the string relocator.
const DEFAULT_STRINGS_ROOT: &str = r"D:\SteamLibrary\steamapps\common\The Sims 4";

#[derive(Parser)]
#[command(name = "ts4-toolkit")]
#[command(about = "Sims 4 integrity hashing and language string relocation", long_about = None)]
struct Cli {
    /// Verbose diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash every file of the install's game folders and write reports
    Hash {
        /// Game installation directory
        #[arg(default_value = DEFAULT_HASH_ROOT)]
        root: PathBuf,

        /// Directory in which the Sims4_Integrity_<timestamp> folder is created
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Copy each installed language's string packages to a destination tree
    Strings {
        /// Game installation directory
        #[arg(default_value = DEFAULT_STRINGS_ROOT)]
        origin: PathBuf,

        /// Output destination (default: ~/Desktop/Strings)
        destination: Option<PathBuf>,

        /// Label language
        #[arg(long, value_enum, default_value_t = UiLanguage::Es)]
        lang: UiLanguage,

        /// Do not open the destination when done
        #[arg(long)]
        no_open: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    presentation::init(UiLanguage::default());

    let outcome = match cli.command {
        Command::Hash { root, output_dir } => hash(root, output_dir),
        Command::Strings {
            origin,
            destination,
            lang,
            no_open,
        } => strings(origin, destination, lang, no_open),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Diagnostics go to stderr, the run's log stream goes to stdout.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn spinner() -> ProgressBar {
    let accent = presentation::current().theme.accent;
    let pb = ProgressBar::new_spinner();
    let template = format!("{{spinner:.{accent}}} [{{elapsed_precise}}] {{msg}}");
    if let Ok(style) = ProgressStyle::default_spinner().template(&template) {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Print a log line above the spinner and mirror it as the spinner message.
fn render_line(pb: &ProgressBar, line: &str) {
    pb.suspend(|| println!("{line}"));
    pb.set_message(line.trim().to_string());
}

fn hash(root: PathBuf, output_dir: PathBuf) -> Result<bool> {
    println!("TS4 Hash & JSON Generator");
    println!("Game path: {}", root.display());
    println!();

    let worker = Worker::new();
    let job = HashJob::new(root, output_dir);
    let handle = worker
        .start(move |sink| run_hashing(&job, sink))
        .context("Failed to start hashing run")?;

    let pb = spinner();
    let result = handle.wait(|line| render_line(&pb, line));
    pb.finish_and_clear();

    match result {
        Ok(summary) => {
            println!();
            println!("==================================================");
            println!("PROCESS FINISHED");
            println!("==================================================");
            println!("Folders scanned: {}", summary.folders.len());
            println!("Files hashed: {}", summary.hashed);
            println!("Files skipped: {}", summary.skipped);
            println!("Reports: {}", summary.output_dir.display());
            println!("Manifest: {}", summary.manifest_path.display());
            Ok(true)
        }
        Err(ToolError::InvalidRoot(path)) => {
            eprintln!("Error: invalid path: {}", path.display());
            Ok(false)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(false)
        }
    }
}

fn strings(
    origin: PathBuf,
    destination: Option<PathBuf>,
    lang: UiLanguage,
    no_open: bool,
) -> Result<bool> {
    let destination = match destination {
        Some(dest) => dest,
        None => dirs::home_dir()
            .context("Cannot determine the home directory; pass DESTINATION explicitly")?
            .join("Desktop")
            .join("Strings"),
    };

    // The form opens in the startup language; `--lang` acts as the toggle.
    let form = FormState::new(origin, destination);
    let lines = if lang == presentation::current().language {
        form.render(lang)
    } else {
        form.toggle_language()
    };
    for line in lines {
        println!("{line}");
    }
    println!();

    let texts = presentation::current().language.texts();
    let worker = Worker::new();
    let job = RelocationJob::new(form.origin.clone(), form.destination.clone());
    let handle = worker
        .start(move |sink| {
            let opener: Option<&dyn FolderOpener> = if no_open { None } else { Some(&SystemOpener) };
            run_relocation(&job, sink, opener)
        })
        .context("Failed to start relocation run")?;

    println!("{}", texts.btn_start);
    let pb = spinner();
    let result = handle.wait(|line| render_line(&pb, line));
    pb.finish_and_clear();

    match result {
        Ok(summary) => {
            println!();
            println!("✅ {}", texts.success);
            println!(
                "{} language(s), {} file(s) → {}",
                summary.languages.len(),
                summary.copied.len(),
                form.destination.display()
            );
            Ok(true)
        }
        Err(ToolError::InvalidRoot(_)) => {
            eprintln!("Error: {}", texts.error_path);
            Ok(false)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(false)
        }
    }
}

mod cli;

use stillcast::{config, console, discovery, encode, tools, Error};

use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// Exit codes per outcome; the interactive original always exited 0, these
// make the tool usable from scripts.
const EXIT_MISSING_INPUT: u8 = 2;
const EXIT_TOOL_FAILED: u8 = 3;
const EXIT_FAULT: u8 = 4;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "stillcast=debug".to_string()
        } else {
            "stillcast=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        None => run(None, false, false, cli.config.as_deref()),
        Some(Commands::Run {
            dir,
            dry_run,
            no_pause,
        }) => run(dir, dry_run, no_pause, cli.config.as_deref()),
        Some(Commands::CheckTools) => check_tools(),
        Some(Commands::Version) => {
            println!("stillcast {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

/// Load config, run the conversion, and pause before returning so a
/// double-clicked console window stays readable. Every outcome, including
/// the missing-input early exit, passes through the final pause.
fn run(
    dir: Option<PathBuf>,
    dry_run: bool,
    no_pause: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let config = match config::load_config_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Unexpected error: {:#}", e);
            // No config to consult here, so only the flag can suppress the pause
            console::pause_for_ack(!no_pause);
            return ExitCode::from(EXIT_FAULT);
        }
    };

    let pause = config.console.pause && !no_pause;
    let code = convert(dir, dry_run, &config);
    console::pause_for_ack(pause);
    code
}

/// The straight-line conversion flow: discover, validate, build command,
/// execute, report.
fn convert(dir: Option<PathBuf>, dry_run: bool, config: &config::Config) -> ExitCode {
    let dir = match dir.map(Ok).unwrap_or_else(discovery::default_workdir) {
        Ok(dir) => dir,
        Err(e) => {
            println!("❌ Unexpected error: {}", e);
            return ExitCode::from(EXIT_FAULT);
        }
    };

    println!("📂 Working directory: {}", dir.display());
    println!("{}", "-".repeat(40));

    let found = match discovery::discover(&dir) {
        Ok(found) => found,
        Err(e) => {
            println!("❌ Unexpected error: {}", e);
            return ExitCode::from(EXIT_FAULT);
        }
    };

    let inputs = match found.into_inputs() {
        Ok(inputs) => inputs,
        Err(missing) => {
            println!("❌ Required files are missing:");
            for category in &missing {
                println!("   - {} ({})", category.label(), category.examples());
            }
            return ExitCode::from(EXIT_MISSING_INPUT);
        }
    };

    let output = dir.join(&config.output.filename);

    println!("🎵 Found: {}", file_name(&inputs.audio));
    println!("🖼️  Found: {}", file_name(&inputs.image));
    println!("🎥 Creating: {}", config.output.filename);
    println!("{}", "-".repeat(40));

    let args = encode::build_args(
        &inputs.image,
        &inputs.audio,
        &output,
        &config.output.audio_bitrate,
    );

    if dry_run {
        println!("[dry run] ffmpeg {}", args.join(" "));
        return ExitCode::SUCCESS;
    }

    let ffmpeg = match tools::get_tool_path("ffmpeg", config.tools.ffmpeg.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            println!("\n❌ Unexpected error: {}", e);
            return ExitCode::from(EXIT_FAULT);
        }
    };

    match encode::run_ffmpeg(&ffmpeg, &args) {
        Ok(()) => {
            println!("\n{}", "=".repeat(40));
            println!("✅ Conversion succeeded: {}", config.output.filename);
            println!("{}", "=".repeat(40));
            ExitCode::SUCCESS
        }
        Err(Error::ToolFailed { .. }) => {
            println!("\n❌ FFmpeg reported an error.");
            ExitCode::from(EXIT_TOOL_FAILED)
        }
        Err(e) => {
            println!("\n❌ Unexpected error: {}", e);
            ExitCode::from(EXIT_FAULT)
        }
    }
}

fn check_tools() -> ExitCode {
    let info = tools::check_tool("ffmpeg");

    if info.available {
        println!(
            "✅ ffmpeg: {}",
            info.version.as_deref().unwrap_or("unknown version")
        );
        if let Some(path) = &info.path {
            println!("   {}", path.display());
        }
        ExitCode::SUCCESS
    } else {
        println!("❌ ffmpeg: not found in PATH");
        ExitCode::from(EXIT_FAULT)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

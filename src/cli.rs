use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stillcast")]
#[command(author, version, about = "Wrap an audio file and a cover image into a static-image MP4")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Running with no subcommand is the same as `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find audio/cover inputs and encode them into a video
    Run {
        /// Directory to scan (defaults to the directory containing the executable)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print the ffmpeg command that would run without executing it
        #[arg(long)]
        dry_run: bool,

        /// Never wait for a keypress before exiting
        #[arg(long)]
        no_pause: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Display version information
    Version,
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Name of the video written into the working directory
    #[serde(default = "default_filename")]
    pub filename: String,

    /// AAC bitrate passed to ffmpeg as -b:a
    #[serde(default = "default_audio_bitrate")]
    pub audio_bitrate: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            audio_bitrate: default_audio_bitrate(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Explicit path to the ffmpeg binary; falls back to PATH lookup when unset
    #[serde(default)]
    pub ffmpeg: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Wait for a keypress before exiting when attached to a terminal
    #[serde(default = "default_pause")]
    pub pause: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            pause: default_pause(),
        }
    }
}

fn default_filename() -> String {
    "movie.mp4".to_string()
}

fn default_audio_bitrate() -> String {
    "192k".to_string()
}

fn default_pause() -> bool {
    true
}

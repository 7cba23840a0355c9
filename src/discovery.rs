//! Input file discovery.
//!
//! The program operates on a single directory and looks for exactly two
//! files: an `audio.*` track and a `cover.*` image, each matched against a
//! fixed extension allow-set.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Extensions accepted for the audio input (compared lower-case).
pub const AUDIO_EXTS: &[&str] = &["mp3", "wav", "m4a", "flac", "aac", "ogg"];

/// Extensions accepted for the cover image (compared lower-case).
pub const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Filename stem the audio input must carry.
pub const AUDIO_STEM: &str = "audio";

/// Filename stem the cover image must carry.
pub const COVER_STEM: &str = "cover";

/// Directory the program scans by default: where the executable itself lives,
/// not the process working directory. Mirrors the double-click use case of
/// dropping the binary next to the media files.
pub fn default_workdir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })?;
    Ok(dir.to_path_buf())
}

/// Find the first directory entry whose name begins with the literal prefix
/// `stem.` (case-sensitive) and whose final extension, lower-cased, is in
/// `allowed`. Multi-dot names like `audio.remix.mp3` qualify.
///
/// Multiple qualifying files are legal; ties are broken lexically by file
/// name so duplicate inputs resolve the same way on every platform. Zero
/// matches is not an error.
pub fn find_candidate(dir: &Path, stem: &str, allowed: &[&str]) -> Result<Option<PathBuf>> {
    let prefix = format!("{stem}.");
    let mut matches: Vec<PathBuf> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !name.starts_with(&prefix) {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if allowed.contains(&ext.to_ascii_lowercase().as_str()) {
            matches.push(path);
        }
    }

    matches.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(matches.into_iter().next())
}

/// An input category the run cannot proceed without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Audio,
    Image,
}

impl MissingInput {
    /// User-facing category label.
    pub fn label(&self) -> &'static str {
        match self {
            MissingInput::Audio => "audio file",
            MissingInput::Image => "image file",
        }
    }

    /// Example acceptable filenames for the diagnostic.
    pub fn examples(&self) -> &'static str {
        match self {
            MissingInput::Audio => "audio.mp3, audio.wav, ...",
            MissingInput::Image => "cover.jpg, cover.png, ...",
        }
    }
}

/// Result of scanning the working directory.
#[derive(Debug)]
pub struct Discovered {
    pub audio: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

impl Discovered {
    /// Split into the two resolved paths, or the list of missing categories.
    /// The audio label always precedes the image label.
    pub fn into_inputs(self) -> std::result::Result<Inputs, Vec<MissingInput>> {
        match (self.audio, self.image) {
            (Some(audio), Some(image)) => Ok(Inputs { audio, image }),
            (audio, image) => {
                let mut missing = Vec::new();
                if audio.is_none() {
                    missing.push(MissingInput::Audio);
                }
                if image.is_none() {
                    missing.push(MissingInput::Image);
                }
                Err(missing)
            }
        }
    }
}

/// The two validated input paths.
#[derive(Debug)]
pub struct Inputs {
    pub audio: PathBuf,
    pub image: PathBuf,
}

/// Scan `dir` for the audio and cover candidates.
pub fn discover(dir: &Path) -> Result<Discovered> {
    let audio = find_candidate(dir, AUDIO_STEM, AUDIO_EXTS)?;
    let image = find_candidate(dir, COVER_STEM, IMAGE_EXTS)?;
    tracing::debug!(?audio, ?image, "Scanned {}", dir.display());
    Ok(Discovered { audio, image })
}

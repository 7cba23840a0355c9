//! FFmpeg command construction and execution.
//!
//! The argument vector is fully deterministic given the two input paths and
//! the output path; nothing about it varies at runtime beyond the audio
//! bitrate taken from config.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Pad filter that rounds both frame dimensions up to the next even integer.
/// libx264 with yuv420p rejects odd width or height.
pub const PAD_EVEN_FILTER: &str = "pad=ceil(iw/2)*2:ceil(ih/2)*2";

/// Build the ffmpeg argument list for a static-image video.
///
/// The image is the first input, looped as a single frame; the audio is the
/// second. `-shortest` stops the encode when the audio ends, and `-y`
/// overwrites any previous output unconditionally.
pub fn build_args(image: &Path, audio: &Path, output: &Path, audio_bitrate: &str) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-loop".to_string(),
        "1".to_string(),
        "-i".to_string(),
        image.to_string_lossy().to_string(),
        "-i".to_string(),
        audio.to_string_lossy().to_string(),
        "-c:v".to_string(),
        "libx264".to_string(),
        "-tune".to_string(),
        "stillimage".to_string(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-b:a".to_string(),
        audio_bitrate.to_string(),
        "-pix_fmt".to_string(),
        "yuv420p".to_string(),
        "-vf".to_string(),
        PAD_EVEN_FILTER.to_string(),
        "-shortest".to_string(),
        output.to_string_lossy().to_string(),
    ]
}

/// Run ffmpeg synchronously with inherited stdio, waiting for completion.
///
/// A non-zero exit becomes [`Error::ToolFailed`]; a spawn fault (binary
/// missing, permission denied) surfaces as [`Error::Io`].
pub fn run_ffmpeg(ffmpeg: &Path, args: &[String]) -> Result<()> {
    debug!("FFmpeg args: {:?}", args);

    let status = Command::new(ffmpeg).args(args).status()?;

    if !status.success() {
        return Err(Error::tool_failed(
            "ffmpeg",
            format!("exited with status: {}", status),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_args() -> Vec<String> {
        build_args(
            &PathBuf::from("cover.png"),
            &PathBuf::from("audio.mp3"),
            &PathBuf::from("movie.mp4"),
            "192k",
        )
    }

    #[test]
    fn test_fixed_flags_always_present() {
        let args = sample_args();
        assert!(args.contains(&"-y".to_string()));
        assert!(args.contains(&"-shortest".to_string()));
        assert!(args.contains(&PAD_EVEN_FILTER.to_string()));
    }

    #[test]
    fn test_image_input_precedes_audio_input() {
        let args = sample_args();
        let image_pos = args.iter().position(|a| a == "cover.png").unwrap();
        let audio_pos = args.iter().position(|a| a == "audio.mp3").unwrap();
        assert!(image_pos < audio_pos);
        // Both are -i inputs
        assert_eq!(args[image_pos - 1], "-i");
        assert_eq!(args[audio_pos - 1], "-i");
    }

    #[test]
    fn test_image_is_looped_single_frame() {
        let args = sample_args();
        let loop_pos = args.iter().position(|a| a == "-loop").unwrap();
        assert_eq!(args[loop_pos + 1], "1");
        let image_pos = args.iter().position(|a| a == "cover.png").unwrap();
        assert!(loop_pos < image_pos);
    }

    #[test]
    fn test_codecs_and_bitrate() {
        let args = sample_args();
        let cv = args.iter().position(|a| a == "-c:v").unwrap();
        assert_eq!(args[cv + 1], "libx264");
        let ca = args.iter().position(|a| a == "-c:a").unwrap();
        assert_eq!(args[ca + 1], "aac");
        let ba = args.iter().position(|a| a == "-b:a").unwrap();
        assert_eq!(args[ba + 1], "192k");
        let pix = args.iter().position(|a| a == "-pix_fmt").unwrap();
        assert_eq!(args[pix + 1], "yuv420p");
    }

    #[test]
    fn test_output_path_is_last() {
        let args = sample_args();
        assert_eq!(args.last().unwrap(), "movie.mp4");
    }

    #[test]
    fn test_args_independent_of_chosen_extensions() {
        let args = build_args(
            &PathBuf::from("cover.bmp"),
            &PathBuf::from("audio.ogg"),
            &PathBuf::from("movie.mp4"),
            "192k",
        );
        assert!(args.contains(&"-shortest".to_string()));
        assert!(args.contains(&"-y".to_string()));
        assert!(args.contains(&PAD_EVEN_FILTER.to_string()));
    }
}

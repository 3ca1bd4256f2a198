/// Scan file loader
///
/// Reads an accepted image file from disk, base64-encodes it for transport
/// and builds the data URL whose payload segment becomes the predict request
/// body. The read is the single suspension point in the flow before any
/// network call; it is not cancellable once started.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::GenericImageView as _;
use thiserror::Error;
use tokio::task;

use crate::state::session::SelectedScan;

/// MIME identifiers the prediction service accepts.
/// JPEG is spelled two ways to match the service's allowlist.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Errors raised while loading a scan from disk
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("task join error: {0}")]
    Join(#[from] task::JoinError),
}

/// A scan read from disk, encoded and ready for preview + prediction
#[derive(Debug, Clone)]
pub struct LoadedScan {
    /// Filename only (e.g. "scan_0041.png")
    pub filename: String,
    /// MIME string derived from the file extension
    pub mime: &'static str,
    /// Raw file bytes, reused for the preview widget
    pub bytes: Vec<u8>,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
    /// Pixel dimensions of the decoded image
    pub width: u32,
    pub height: u32,
}

impl LoadedScan {
    /// Convert into the session's selected-scan record, extracting the
    /// transport payload from the data URL.
    pub fn into_selected(self) -> SelectedScan {
        let encoded_payload = payload_of(&self.data_url).to_string();

        SelectedScan {
            filename: self.filename,
            mime: self.mime,
            data_url: self.data_url,
            encoded_payload,
            width: self.width,
            height: self.height,
        }
    }
}

/// MIME string for a path, derived from its extension (case-insensitive).
/// Returns `None` for anything outside the allowlist.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();

    let mime = match extension.as_str() {
        "jpeg" => "image/jpeg",
        "jpg" => "image/jpg",
        "png" => "image/png",
        _ => return None,
    };

    ACCEPTED_MIME_TYPES.contains(&mime).then_some(mime)
}

/// Everything after the first comma of a data URL — the transport payload.
/// An input without a comma yields an empty payload.
pub fn payload_of(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or("")
}

/// Load a scan from disk and prepare it for preview and prediction.
///
/// Validation against the MIME allowlist happens again here as a backstop;
/// callers are expected to have already rejected unsupported files before
/// starting the read.
pub async fn load_scan(path: PathBuf) -> Result<LoadedScan, ScanError> {
    let mime = mime_for_path(&path)
        .ok_or_else(|| ScanError::UnsupportedType(path.display().to_string()))?;

    let bytes = tokio::fs::read(&path).await?;

    // Decoding and encoding are CPU-bound, keep them off the event loop
    task::spawn_blocking(move || {
        let decoded = image::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();

        let encoded = STANDARD.encode(&bytes);
        let data_url = format!("data:{};base64,{}", mime, encoded);

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        log::info!("📷 Loaded scan {} ({}x{})", filename, width, height);

        Ok(LoadedScan {
            filename,
            mime,
            bytes,
            data_url,
            width,
            height,
        })
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_allowlist() {
        assert_eq!(mime_for_path(Path::new("scan.png")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("scan.jpg")), Some("image/jpg"));
        assert_eq!(mime_for_path(Path::new("scan.jpeg")), Some("image/jpeg"));
        // Extension matching is case-insensitive
        assert_eq!(mime_for_path(Path::new("SCAN.PNG")), Some("image/png"));
    }

    #[test]
    fn test_unsupported_kinds_are_rejected() {
        assert_eq!(mime_for_path(Path::new("scan.gif")), None);
        assert_eq!(mime_for_path(Path::new("scan.bmp")), None);
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_payload_strips_data_url_prefix() {
        let encoded = STANDARD.encode(b"fake image bytes");
        let data_url = format!("data:image/png;base64,{}", encoded);

        assert_eq!(payload_of(&data_url), encoded);
    }

    #[test]
    fn test_payload_of_degenerate_inputs() {
        assert_eq!(payload_of(""), "");
        assert_eq!(payload_of("no comma here"), "");
        // Only the first comma splits; later commas belong to the payload
        assert_eq!(payload_of("data:,a,b"), "a,b");
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let result = load_scan(PathBuf::from("/nonexistent/scan.png")).await;
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_unsupported_type_fails_before_reading() {
        let result = load_scan(PathBuf::from("/nonexistent/scan.gif")).await;
        assert!(matches!(result, Err(ScanError::UnsupportedType(_))));
    }

    #[tokio::test]
    async fn test_loaded_payload_matches_file_bytes() {
        // Write a tiny real PNG so the decode step has something to chew on
        let path = std::env::temp_dir().join("ctscan_client_loader_test.png");
        image::RgbImage::new(4, 4)
            .save(&path)
            .expect("failed to write test image");

        let scan = load_scan(path.clone()).await.expect("load should succeed");
        let raw = std::fs::read(&path).expect("failed to re-read test image");

        assert_eq!(scan.mime, "image/png");
        assert_eq!(scan.width, 4);
        assert_eq!(scan.height, 4);

        let selected = scan.into_selected();
        assert_eq!(selected.encoded_payload, STANDARD.encode(&raw));
        assert!(selected
            .data_url
            .starts_with("data:image/png;base64,"));

        let _ = std::fs::remove_file(&path);
    }
}

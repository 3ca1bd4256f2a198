/// Scan validation and loading module
///
/// This module handles:
/// - The MIME allowlist check (JPG/JPEG/PNG only, derived from extension)
/// - Asynchronous file reads and base64 encoding
/// - Data-URL construction and payload extraction

pub mod loader;

pub use loader::{load_scan, mime_for_path, payload_of, LoadedScan, ScanError};

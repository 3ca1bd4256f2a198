/// View helper module
///
/// Widget builders for the upload-and-predict flow:
/// - Upload/drop area and the selected-scan preview panel (upload.rs)
/// - Classification result card (results.rs)
/// - Busy overlay shown during network calls (overlay.rs)

pub mod overlay;
pub mod results;
pub mod upload;

pub use overlay::busy_overlay;
pub use results::result_card;
pub use upload::{preview_panel, upload_area};

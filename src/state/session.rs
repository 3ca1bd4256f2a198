/// Per-upload-cycle client state
///
/// The `Session` owns the selected scan and its base64 payload. The pair
/// lives from the completion of an asynchronous load until the user removes
/// the scan or replaces it with a new selection. Keeping both behind one
/// struct (instead of two free-floating variables) makes the invariant
/// obvious: the payload exists exactly when a scan does.

/// A fully loaded, validated scan ready for preview and prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedScan {
    /// Filename only (e.g. "scan_0041.png")
    pub filename: String,
    /// MIME string derived from the file extension
    pub mime: &'static str,
    /// Full data URL (`data:<mime>;base64,<payload>`)
    pub data_url: String,
    /// Base64 payload sent to the prediction endpoint
    pub encoded_payload: String,
    /// Pixel width of the decoded image
    pub width: u32,
    /// Pixel height of the decoded image
    pub height: u32,
}

/// Client state for the current upload cycle.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<SelectedScan>,
}

impl Session {
    /// Create an empty session (no scan selected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection with a freshly loaded scan.
    ///
    /// Only one scan is processed at a time; if two loads were somehow in
    /// flight, whichever completes last wins.
    pub fn select(&mut self, scan: SelectedScan) {
        self.selected = Some(scan);
    }

    /// Discard the current selection. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// The currently selected scan, if any.
    pub fn scan(&self) -> Option<&SelectedScan> {
        self.selected.as_ref()
    }

    /// The base64 payload for the predict request, if a scan is loaded.
    pub fn encoded_payload(&self) -> Option<&str> {
        self.selected
            .as_ref()
            .map(|scan| scan.encoded_payload.as_str())
    }

    /// Predict is enabled exactly when a loaded scan (and therefore a
    /// non-empty payload) is present.
    pub fn can_predict(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scan() -> SelectedScan {
        SelectedScan {
            filename: "scan_0041.png".to_string(),
            mime: "image/png",
            data_url: "data:image/png;base64,aGVsbG8=".to_string(),
            encoded_payload: "aGVsbG8=".to_string(),
            width: 512,
            height: 512,
        }
    }

    #[test]
    fn test_empty_session_cannot_predict() {
        let session = Session::new();
        assert!(!session.can_predict());
        assert!(session.encoded_payload().is_none());
        assert!(session.scan().is_none());
    }

    #[test]
    fn test_select_enables_predict() {
        let mut session = Session::new();
        session.select(sample_scan());

        assert!(session.can_predict());
        assert_eq!(session.encoded_payload(), Some("aGVsbG8="));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = Session::new();
        session.select(sample_scan());

        session.reset();
        assert!(!session.can_predict());
        assert!(session.scan().is_none());

        // Resetting again must leave the same state
        session.reset();
        assert!(!session.can_predict());
        assert!(session.scan().is_none());
    }

    #[test]
    fn test_new_selection_overwrites_previous() {
        let mut session = Session::new();
        session.select(sample_scan());

        let mut replacement = sample_scan();
        replacement.filename = "scan_0042.jpg".to_string();
        replacement.mime = "image/jpg";
        session.select(replacement);

        assert_eq!(session.scan().unwrap().filename, "scan_0042.jpg");
    }
}

/// HTTP client for the prediction service
///
/// The service exposes two endpoints. `POST /predict` takes the base64
/// payload as JSON and answers with a JSON array whose first element names
/// the predicted class. `POST /train` takes no body and answers with plain
/// text that is shown to the user verbatim. Neither call is retried; no
/// timeout is enforced beyond the transport's own limits.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Where the prediction service lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Read the service base URL from `CT_API_URL`, falling back to a local
    /// development server.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CT_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn train_url(&self) -> String {
        format!("{}/train", self.base_url)
    }
}

/// Errors raised by the network operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Request body for `POST /predict`
#[derive(Debug, Serialize)]
struct PredictRequest {
    image: String,
}

/// Binary classification outcome, with the presentation strings the result
/// card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Tumor,
    Normal,
}

impl Classification {
    /// Map a raw class label onto a classification.
    ///
    /// The comparison is case-insensitive; anything that is not "tumor"
    /// (including the "Unknown" fallback) lands on `Normal`.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("tumor") {
            Self::Tumor
        } else {
            Self::Normal
        }
    }

    pub fn is_tumor(self) -> bool {
        matches!(self, Self::Tumor)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Tumor => "⚠️",
            Self::Normal => "✅",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Tumor => "Tumor Detected",
            Self::Normal => "Normal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Tumor => {
                "The AI analysis indicates the presence of a potential tumor in the \
                 kidney CT scan. Please consult a medical professional for further \
                 evaluation."
            }
            Self::Normal => {
                "The AI analysis indicates no tumor detected in the kidney CT scan. \
                 The kidney appears to be healthy based on this scan."
            }
        }
    }
}

/// Pull the predicted label out of a `/predict` response.
///
/// Expected shape: a JSON array whose element 0 carries the label in its
/// `image` field. Any other shape degrades to "Unknown" rather than failing,
/// which classifies as `Normal`.
pub fn classify_response(response: &Value) -> Classification {
    let label = response
        .get(0)
        .and_then(|entry| entry.get("image"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown");

    Classification::from_label(label)
}

/// Submit an encoded scan for classification.
pub async fn predict(
    config: ApiConfig,
    encoded_payload: String,
) -> Result<Classification, ApiError> {
    let response = reqwest::Client::new()
        .post(config.predict_url())
        .json(&PredictRequest {
            image: encoded_payload,
        })
        .send()
        .await?;

    let body: Value = response.json().await?;
    Ok(classify_response(&body))
}

/// Trigger server-side retraining. The response text is shown verbatim.
pub async fn train(config: ApiConfig) -> Result<String, ApiError> {
    let response = reqwest::Client::new()
        .post(config.train_url())
        .send()
        .await?;

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tumor_label_is_detected() {
        let response = json!([{"image": "Tumor"}]);
        let classification = classify_response(&response);

        assert_eq!(classification, Classification::Tumor);
        assert_eq!(classification.title(), "Tumor Detected");
        assert!(classification.is_tumor());
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        assert_eq!(Classification::from_label("TUMOR"), Classification::Tumor);
        assert_eq!(Classification::from_label("tumor"), Classification::Tumor);

        // A lowercase "normal" must land on the non-tumor branch
        let response = json!([{"image": "normal"}]);
        assert_eq!(classify_response(&response).title(), "Normal");
    }

    #[test]
    fn test_empty_array_degrades_to_normal() {
        let response = json!([]);
        let classification = classify_response(&response);

        assert_eq!(classification, Classification::Normal);
        assert_eq!(classification.title(), "Normal");
    }

    #[test]
    fn test_malformed_shapes_degrade_to_normal() {
        for response in [
            json!({"image": "Tumor"}),      // object, not array
            json!([{"label": "Tumor"}]),    // wrong field name
            json!([{"image": 42}]),         // wrong field type
            json!(null),
            json!("Tumor"),
        ] {
            assert_eq!(classify_response(&response), Classification::Normal);
        }
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::with_base_url("http://example.com:9000/");

        assert_eq!(config.base_url(), "http://example.com:9000");
        assert_eq!(config.predict_url(), "http://example.com:9000/predict");
        assert_eq!(config.train_url(), "http://example.com:9000/train");
    }
}

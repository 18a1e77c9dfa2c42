//! Data models for LibreTranslate requests and responses

use serde::{Deserialize, Serialize};
use std::fmt;

/// One language detection candidate, as ranked by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    /// Server-reported confidence
    pub confidence: f64,
    /// Language code
    pub language: String,
}

impl fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.language, self.confidence)
    }
}

/// Supported language entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language code, e.g. `en`
    pub code: String,
    /// Human-readable name
    pub name: String,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.code, self.name)
    }
}

/// Body of a successful `/translate` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// The translation
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error body returned by the server on failure
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_language_ignores_extra_fields() {
        let langs: Vec<Language> = serde_json::from_value(json!([
            {"code": "en", "name": "English", "targets": ["es", "fr"]},
            {"code": "es", "name": "Spanish"}
        ]))
        .unwrap();

        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].code, "en");
        assert_eq!(langs[1].name, "Spanish");
        assert_json_eq!(
            serde_json::to_value(&langs[0]).unwrap(),
            json!({"code": "en", "name": "English"})
        );
    }

    #[test]
    fn test_translate_response_requires_field() {
        let ok: TranslateResponse =
            serde_json::from_value(json!({"translatedText": "Hola"})).unwrap();
        assert_eq!(ok.translated_text, "Hola");

        let missing = serde_json::from_value::<TranslateResponse>(json!({"text": "Hola"}));
        assert!(missing.is_err());
    }

    #[test]
    fn test_display() {
        let detected = DetectedLanguage {
            confidence: 0.9,
            language: "en".to_string(),
        };
        assert_eq!(detected.to_string(), "en (0.9)");

        let lang = Language {
            code: "fr".to_string(),
            name: "French".to_string(),
        };
        assert_eq!(lang.to_string(), "fr\tFrench");
    }
}

use serde::{Deserialize, Serialize};

use crate::error::DiscoveryError;

/// Upper bound on the free-text query, in characters.
pub const MAX_QUERY_LEN: usize = 200;

/// Which model class serves the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Standard,
    Elevated,
}

impl ModelTier {
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelTier::Standard => "gemini-2.5-flash",
            ModelTier::Elevated => "gemini-2.5-pro",
        }
    }
}

/// Language the thematic text (pros/cons) should be produced in. Venue names
/// are never translated regardless of this setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLanguage {
    /// BCP 47 language code, e.g. "en", "ar", "he".
    pub code: String,
    pub rtl: bool,
}

impl ResponseLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let primary = code.split('-').next().unwrap_or_default().to_lowercase();
        let rtl = matches!(primary.as_str(), "ar" | "he" | "fa" | "ur");
        Self { code, rtl }
    }

    pub fn english() -> Self {
        Self::new("en")
    }
}

/// Immutable input for one discovery call.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text craving, e.g. "late night ramen".
    pub query: String,
    /// Unordered attribute filter tags, e.g. "vegan", "outdoor seating".
    pub filters: Vec<String>,
    pub tier: ModelTier,
    pub language: ResponseLanguage,
}

impl SearchRequest {
    pub fn new(latitude: f64, longitude: f64, query: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            query: query.into(),
            filters: Vec::new(),
            tier: ModelTier::Standard,
            language: ResponseLanguage::english(),
        }
    }

    /// Enforce the inbound contract. Runs before any network call.
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(DiscoveryError::Validation(
                "coordinates must be finite".to_string(),
            ));
        }
        if self.query.trim().is_empty() {
            return Err(DiscoveryError::Validation(
                "query must not be empty".to_string(),
            ));
        }
        if self.query.chars().count() > MAX_QUERY_LEN {
            return Err(DiscoveryError::Validation(format!(
                "query exceeds {MAX_QUERY_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// The model's untrusted claim about one venue, exactly as deserialized from
/// its reply. Carries no identifier and no link; it is not display-ready
/// until verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    /// AI-synthesized quality judgment, intended range 1.0-5.0.
    pub quality_score: f64,
    /// Platform star rating as reported by the model, not independently
    /// verified.
    pub rating: f64,
    /// Review count as reported by the model.
    pub review_count: u64,
    /// Exactly three short positive themes drawn from review sentiment.
    pub pros: Vec<String>,
    /// Exactly three short negative themes.
    pub cons: Vec<String>,
}

/// Authoritative fact from the model call's grounding side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingEntry {
    /// Canonical display title.
    pub title: String,
    /// Stable maps URI. Never empty on entries that verify a candidate.
    pub uri: String,
}

/// The only entity ever returned to callers. Constructed solely by joining a
/// CandidateRecord with a GroundingEntry; the URI is never synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedRestaurant {
    /// Canonical display title from grounding, falling back to the
    /// candidate's own name when grounding carried no title.
    pub name: String,
    pub quality_score: f64,
    pub rating: f64,
    pub review_count: u64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Authoritative maps URI, obtained from grounding.
    pub maps_uri: String,
}

/// Normalization shared by the grounding index and the verifier. Candidate
/// names and grounding titles must go through the same function or the join
/// silently misses.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_ordinary_request() {
        let request = SearchRequest::new(44.97, -93.26, "ramen");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_query() {
        let request = SearchRequest::new(44.97, -93.26, "   ");
        assert!(matches!(
            request.validate(),
            Err(DiscoveryError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_over_length_query() {
        let request = SearchRequest::new(44.97, -93.26, "x".repeat(MAX_QUERY_LEN + 1));
        assert!(matches!(
            request.validate(),
            Err(DiscoveryError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_non_finite_coordinates() {
        let request = SearchRequest::new(f64::NAN, -93.26, "ramen");
        assert!(matches!(
            request.validate(),
            Err(DiscoveryError::Validation(_))
        ));
    }

    #[test]
    fn language_rtl_detection() {
        assert!(ResponseLanguage::new("ar").rtl);
        assert!(ResponseLanguage::new("he-IL").rtl);
        assert!(!ResponseLanguage::new("en").rtl);
        assert!(!ResponseLanguage::new("ja").rtl);
    }

    #[test]
    fn normalize_folds_case_and_whitespace() {
        assert_eq!(normalize_name("  Ramen House "), "ramen house");
        assert_eq!(normalize_name("CAFÉ"), "café");
    }

    #[test]
    fn candidate_record_deserializes() {
        let json = r#"{
            "name": "Ramen House",
            "quality_score": 4.4,
            "rating": 4.5,
            "review_count": 1200,
            "pros": ["rich broth", "fast service", "late hours"],
            "cons": ["long lines", "cramped seating", "cash only"]
        }"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Ramen House");
        assert_eq!(record.review_count, 1200);
        assert_eq!(record.pros.len(), 3);
    }

    #[test]
    fn candidate_record_requires_all_fields() {
        let json = r#"{"name": "Ramen House"}"#;
        assert!(serde_json::from_str::<CandidateRecord>(json).is_err());
    }
}

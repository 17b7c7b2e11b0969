//! Risk classification against office-configured term lists.
//!
//! Text is folded with [`normalize_text`] and searched for each folded term.
//! High-risk terms are checked first and always win. Matching defaults to
//! plain substring containment, so a short term can hit inside an unrelated
//! word; [`MatchMode::Token`] restricts matches to whole words and must be
//! selected explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::domain::Case;
use crate::settings::domain::{AnalyticsConfig, OfficeSettings};
use crate::text::{MatchMode, normalize_text, split_terms};

/// Risk level assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// A high-risk term matched.
    #[serde(rename = "alto")]
    Alto,
    /// A medium-risk term matched and no high-risk term did.
    #[serde(rename = "médio")]
    Medio,
    /// No configured term matched.
    #[serde(rename = "nenhum")]
    Nenhum,
}

impl RiskLevel {
    /// Returns the stored label for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alto => "alto",
            Self::Medio => "médio",
            Self::Nenhum => "nenhum",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier holding pre-folded term lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskClassifier {
    high_terms: Vec<String>,
    medium_terms: Vec<String>,
    mode: MatchMode,
}

impl RiskClassifier {
    /// Builds a substring classifier from comma-separated term lists.
    #[must_use]
    pub fn new(high_terms_csv: &str, medium_terms_csv: &str) -> Self {
        Self {
            high_terms: split_terms(high_terms_csv),
            medium_terms: split_terms(medium_terms_csv),
            mode: MatchMode::Substring,
        }
    }

    /// Builds a classifier from the office-wide term lists.
    #[must_use]
    pub fn from_settings(settings: &OfficeSettings) -> Self {
        Self::new(&settings.high_risk_terms, &settings.medium_risk_terms)
    }

    /// Builds a classifier from the office-wide term lists using the
    /// matching mode selected in `config`.
    #[must_use]
    pub fn from_config(settings: &OfficeSettings, config: &AnalyticsConfig) -> Self {
        Self::from_settings(settings).with_mode(config.risk_match_mode)
    }

    /// Switches the term matching mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the active matching mode.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Classifies free text.
    #[must_use]
    pub fn classify(&self, text: &str) -> RiskLevel {
        let folded = normalize_text(text);
        let hits = |terms: &[String]| terms.iter().any(|term| self.mode.matches(&folded, term));

        if hits(&self.high_terms) {
            RiskLevel::Alto
        } else if hits(&self.medium_terms) {
            RiskLevel::Medio
        } else {
            RiskLevel::Nenhum
        }
    }

    /// Classifies the narrative texts of a case.
    #[must_use]
    pub fn classify_case(&self, case: &Case) -> RiskLevel {
        self.classify(&case.narrative())
    }
}

/// Classifies `text` against comma-separated high and medium term lists.
///
/// # Examples
///
/// ```rust
/// use jurisdash::case::risk::{RiskLevel, classify};
///
/// assert_eq!(classify("Há liminar urgente", "liminar", "audiência"), RiskLevel::Alto);
/// assert_eq!(classify("aguardando audiência", "liminar", "audiência"), RiskLevel::Medio);
/// assert_eq!(classify("arquivado", "liminar", "audiência"), RiskLevel::Nenhum);
/// ```
#[must_use]
pub fn classify(text: &str, high_terms_csv: &str, medium_terms_csv: &str) -> RiskLevel {
    RiskClassifier::new(high_terms_csv, medium_terms_csv).classify(text)
}

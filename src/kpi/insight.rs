//! Per-case view combining the effective deadline with a suggested risk
//! level.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::{
    deadline::{EffectiveDeadline, effective_deadline},
    domain::Case,
    risk::{RiskClassifier, RiskLevel},
};

/// Derived facts about one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInsight {
    /// Case identifier.
    pub case_id: String,
    /// Deadline currently governing the case.
    pub deadline: EffectiveDeadline,
    /// Whole days until the deadline, when one is known.
    pub days_to_due: Option<i64>,
    /// Risk level suggested by the office vocabularies.
    pub suggested_risk: RiskLevel,
    /// Risk label stored on the case, lowercased and possibly empty.
    pub stored_risk: String,
}

/// Builds insights for every case, in input order.
#[must_use]
pub fn case_insights(
    cases: &[Case],
    today: NaiveDate,
    classifier: &RiskClassifier,
) -> Vec<CaseInsight> {
    cases
        .iter()
        .map(|case| {
            let deadline = effective_deadline(case);
            CaseInsight {
                case_id: case.id.clone(),
                days_to_due: deadline.days_to_due(today),
                deadline,
                suggested_risk: classifier.classify_case(case),
                stored_risk: case.risk_label_lower(),
            }
        })
        .collect()
}

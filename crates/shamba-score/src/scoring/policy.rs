use serde::{Deserialize, Serialize};

/// Risk bands derived from the credit score. The thresholds here are the
/// only place score boundaries are defined; the advisory narrator reuses
/// this table so the two surfaces can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl RiskCategory {
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            RiskCategory::Excellent
        } else if score >= 75.0 {
            RiskCategory::VeryGood
        } else if score >= 60.0 {
            RiskCategory::Good
        } else if score >= 45.0 {
            RiskCategory::Moderate
        } else {
            RiskCategory::HighRisk
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::Excellent => "Excellent",
            RiskCategory::VeryGood => "Very Good",
            RiskCategory::Good => "Good",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::HighRisk => "High Risk",
        }
    }

    /// Longer form used in conversational replies.
    pub const fn profile_label(self) -> &'static str {
        match self {
            RiskCategory::Excellent => "Excellent Risk Profile",
            RiskCategory::VeryGood => "Very Good Risk Profile",
            RiskCategory::Good => "Good Risk Profile",
            RiskCategory::Moderate => "Moderate Risk Profile",
            RiskCategory::HighRisk => "High Risk Profile",
        }
    }

    /// Loan terms keyed by risk band; the single source of truth for
    /// monetary output.
    pub const fn loan_terms(self) -> LoanTerms {
        match self {
            RiskCategory::Excellent => LoanTerms {
                max_amount_kes: 150_000,
                interest_rate: 10.5,
                approval_probability: 0.98,
            },
            RiskCategory::VeryGood => LoanTerms {
                max_amount_kes: 100_000,
                interest_rate: 12.0,
                approval_probability: 0.95,
            },
            RiskCategory::Good => LoanTerms {
                max_amount_kes: 75_000,
                interest_rate: 14.0,
                approval_probability: 0.88,
            },
            RiskCategory::Moderate => LoanTerms {
                max_amount_kes: 50_000,
                interest_rate: 16.5,
                approval_probability: 0.75,
            },
            RiskCategory::HighRisk => LoanTerms {
                max_amount_kes: 25_000,
                interest_rate: 20.0,
                approval_probability: 0.45,
            },
        }
    }
}

/// Lending terms for one risk band.
///
/// `approval_probability` is a fraction in 0..=1; callers rendering text
/// multiply by 100 themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub max_amount_kes: u32,
    pub interest_rate: f64,
    pub approval_probability: f64,
}

//! Deterministic credit scoring over farmer feature records.

mod features;
mod policy;
mod router;
mod rules;
mod suggestions;
mod weights;

#[cfg(test)]
mod tests;

pub use features::{feature_catalog, FarmerFeatures, FeatureCatalog, FeatureInput};
pub use policy::{LoanTerms, RiskCategory};
pub use router::{
    score_router, BatchFarmerInput, BatchScoreEntry, BatchScoreRequest, BatchScoreResponse,
};
pub use weights::{Pillar, PillarWeights};

pub(crate) use suggestions::{improvement_suggestions, DROUGHT_ALERT_THRESHOLD};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stateless engine mapping a feature record to a [`ScoreResult`]. A pure
/// function of its input; scoring the same record twice yields bit-identical
/// output.
pub struct ScoringEngine {
    weights: PillarWeights,
}

impl ScoringEngine {
    pub fn new(weights: PillarWeights) -> Self {
        Self { weights }
    }

    pub fn standard() -> Self {
        Self::new(PillarWeights::standard())
    }

    pub fn score(&self, features: &FarmerFeatures) -> ScoreResult {
        let pillars = rules::pillar_scores(features);

        let credit_score = Pillar::ALL
            .iter()
            .map(|&pillar| pillars.get(pillar) * self.weights.get(pillar))
            .sum::<f64>();
        let credit_score = round_tenth(credit_score);

        let risk_category = RiskCategory::for_score(credit_score);
        let terms = risk_category.loan_terms();

        let mut factors: Vec<ContributingFactor> = Pillar::ALL
            .iter()
            .map(|&pillar| ContributingFactor {
                factor: pillar.label().to_string(),
                contribution: round_tenth(pillars.get(pillar) * self.weights.get(pillar)),
            })
            .collect();
        factors.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(Ordering::Equal)
        });
        factors.truncate(TOP_FACTOR_COUNT);

        ScoreResult {
            credit_score,
            risk_category,
            recommended_loan_amount: terms.max_amount_kes,
            interest_rate: terms.interest_rate,
            approval_probability: terms.approval_probability,
            top_contributing_factors: factors,
            improvement_suggestions: suggestions::improvement_suggestions(features),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

const TOP_FACTOR_COUNT: usize = 3;

/// Weighted pillar contribution surfaced in score explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub factor: String,
    pub contribution: f64,
}

/// Full scoring output for one farmer. Recomputed fresh on every call;
/// nothing is cached between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0..=100, rounded to one decimal.
    pub credit_score: f64,
    pub risk_category: RiskCategory,
    pub recommended_loan_amount: u32,
    pub interest_rate: f64,
    /// Fraction in 0..=1.
    pub approval_probability: f64,
    /// The three largest weighted pillar contributions, descending.
    pub top_contributing_factors: Vec<ContributingFactor>,
    /// One entry per violated feature threshold, fixed priority order.
    pub improvement_suggestions: Vec<String>,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

use crate::scoring::{FarmerFeatures, ScoringEngine};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

/// Build a feature record by mutating the defaults.
pub(super) fn features_with(mutate: impl FnOnce(&mut FarmerFeatures)) -> FarmerFeatures {
    let mut features = FarmerFeatures::default();
    mutate(&mut features);
    features
}

/// The calibration scenario from the product brief: every trust and savings
/// signal at its floor, elevated drought exposure, everything else default.
pub(super) fn floor_profile() -> FarmerFeatures {
    features_with(|features| {
        features.savings_rate = 0.0;
        features.chama_participation = false;
        features.advisory_usage = false;
        features.cooperative_endorsement = 0;
        features.loan_repayment_history = 0.0;
        features.drought_exposure_index = 0.6;
    })
}

use super::features::FarmerFeatures;
use super::weights::Pillar;

// Normalization ceilings for the open-ended counts and deviations. Values at
// or beyond a ceiling saturate the component rather than overflowing it.
const TRANSACTION_VELOCITY_CEILING: f64 = 60.0;
const SAVINGS_RATE_CEILING: f64 = 0.5;
const NEIGHBOR_VOUCH_CEILING: f64 = 6.0;
const RAINFALL_DEVIATION_LIMIT_PCT: f64 = 30.0;
const TEMPERATURE_ANOMALY_LIMIT_C: f64 = 5.0;
// NDVI trend of +/-0.1 per season spans the full trajectory component.
const NDVI_TREND_SPAN: f64 = 0.1;

/// The five pillar sub-scores, each bounded to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PillarScores {
    pub crop_health: f64,
    pub financial_behavior: f64,
    pub community_trust: f64,
    pub farming_practices: f64,
    pub climate_resilience: f64,
}

impl PillarScores {
    pub(crate) fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::CropHealth => self.crop_health,
            Pillar::FinancialBehavior => self.financial_behavior,
            Pillar::CommunityTrust => self.community_trust,
            Pillar::FarmingPractices => self.farming_practices,
            Pillar::ClimateResilience => self.climate_resilience,
        }
    }
}

pub(crate) fn pillar_scores(features: &FarmerFeatures) -> PillarScores {
    let ndvi = clamp01(features.mean_ndvi);
    let season = clamp01(features.growing_season_match);
    let trend = clamp01((features.ndvi_trend + NDVI_TREND_SPAN) / (2.0 * NDVI_TREND_SPAN));
    let crop_health = subscore(0.6 * ndvi + 0.25 * season + 0.15 * trend);

    let velocity = clamp01(f64::from(features.transaction_velocity) / TRANSACTION_VELOCITY_CEILING);
    let savings = clamp01(features.savings_rate / SAVINGS_RATE_CEILING);
    let repayment = clamp01(features.loan_repayment_history);
    let financial_behavior = subscore(0.4 * repayment + 0.3 * savings + 0.3 * velocity);

    let endorsement = clamp01(f64::from(features.cooperative_endorsement) / 5.0);
    let chama = if features.chama_participation { 1.0 } else { 0.0 };
    let vouches = clamp01(f64::from(features.neighbor_vouches) / NEIGHBOR_VOUCH_CEILING);
    let community_trust = subscore(0.5 * endorsement + 0.3 * chama + 0.2 * vouches);

    let fertilizer = clamp01(features.fertilizer_purchase_timing);
    let seed = clamp01(f64::from(features.seed_quality_tier.saturating_sub(1)) / 2.0);
    let advisory = if features.advisory_usage { 1.0 } else { 0.0 };
    let farming_practices = subscore(0.4 * fertilizer + 0.3 * seed + 0.3 * advisory);

    // Resilience is the inverse of exposure: more drought, larger rainfall
    // swings, or hotter anomalies all pull the sub-score down.
    let drought_headroom = clamp01(1.0 - features.drought_exposure_index);
    let rainfall = clamp01(1.0 - features.rainfall_deviation.abs() / RAINFALL_DEVIATION_LIMIT_PCT);
    let temperature = clamp01(1.0 - features.temperature_anomaly.max(0.0) / TEMPERATURE_ANOMALY_LIMIT_C);
    let climate_resilience = subscore(0.5 * drought_headroom + 0.3 * rainfall + 0.2 * temperature);

    PillarScores {
        crop_health,
        financial_behavior,
        community_trust,
        farming_practices,
        climate_resilience,
    }
}

fn subscore(blend: f64) -> f64 {
    (blend * 100.0).clamp(0.0, 100.0)
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

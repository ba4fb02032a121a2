use serde::{Deserialize, Serialize};

/// The 15-feature record the engine scores. All ratio fields are held within
/// their documented domains; construction through [`FarmerFeatures::from_input`]
/// clamps out-of-range values rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarmerFeatures {
    /// Satellite crop-health index, 0..=1.
    pub mean_ndvi: f64,
    /// Crop health trajectory, -1..=1.
    pub ndvi_trend: f64,
    /// Alignment with the expected planting calendar, 0..=1.
    pub growing_season_match: f64,
    /// Financial transactions per month.
    pub transaction_velocity: u32,
    /// Fraction of income saved, 0..=1.
    pub savings_rate: f64,
    /// 1.0 perfect, 0.5 partial, 0.0 poor.
    pub loan_repayment_history: f64,
    /// Peer/cooperative star rating, 0..=5.
    pub cooperative_endorsement: u8,
    /// Savings-group (chama) membership.
    pub chama_participation: bool,
    /// Neighbors willing to vouch for the farmer.
    pub neighbor_vouches: u32,
    /// Input-purchase timeliness, 0..=1.
    pub fertilizer_purchase_timing: f64,
    /// Certified seed tier, 1..=3.
    pub seed_quality_tier: u8,
    /// Uses agricultural extension services.
    pub advisory_usage: bool,
    /// Climate-risk severity, 0..=1.
    pub drought_exposure_index: f64,
    /// Signed percentage deviation from normal rainfall.
    pub rainfall_deviation: f64,
    /// Signed degrees above/below the seasonal norm.
    pub temperature_anomaly: f64,
}

impl Default for FarmerFeatures {
    /// Neutral defaults substituted for absent request fields.
    fn default() -> Self {
        Self {
            mean_ndvi: 0.65,
            ndvi_trend: 0.01,
            growing_season_match: 0.75,
            transaction_velocity: 35,
            savings_rate: 0.25,
            loan_repayment_history: 0.5,
            cooperative_endorsement: 3,
            chama_participation: false,
            neighbor_vouches: 2,
            fertilizer_purchase_timing: 0.65,
            seed_quality_tier: 2,
            advisory_usage: false,
            drought_exposure_index: 0.25,
            rainfall_deviation: -5.0,
            temperature_anomaly: 2.0,
        }
    }
}

/// Wire-level scoring request: any subset of the 15 features. Boolean-like
/// fields arrive as 0/1 to match the upstream data collection format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_ndvi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndvi_trend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growing_season_match: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_velocity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_repayment_history: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooperative_endorsement: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chama_participation: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbor_vouches: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer_purchase_timing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_quality_tier: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory_usage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drought_exposure_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall_deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_anomaly: Option<f64>,
}

impl FarmerFeatures {
    /// Fill absent fields with the documented defaults and clamp the rest to
    /// their domains. Total over any well-typed input.
    pub fn from_input(input: FeatureInput) -> Self {
        let base = Self::default();
        Self {
            mean_ndvi: input.mean_ndvi.unwrap_or(base.mean_ndvi).clamp(0.0, 1.0),
            ndvi_trend: input.ndvi_trend.unwrap_or(base.ndvi_trend).clamp(-1.0, 1.0),
            growing_season_match: input
                .growing_season_match
                .unwrap_or(base.growing_season_match)
                .clamp(0.0, 1.0),
            transaction_velocity: input
                .transaction_velocity
                .unwrap_or(base.transaction_velocity),
            savings_rate: input
                .savings_rate
                .unwrap_or(base.savings_rate)
                .clamp(0.0, 1.0),
            loan_repayment_history: input
                .loan_repayment_history
                .unwrap_or(base.loan_repayment_history)
                .clamp(0.0, 1.0),
            cooperative_endorsement: input
                .cooperative_endorsement
                .unwrap_or(base.cooperative_endorsement)
                .min(5),
            chama_participation: input
                .chama_participation
                .map(|value| value != 0)
                .unwrap_or(base.chama_participation),
            neighbor_vouches: input.neighbor_vouches.unwrap_or(base.neighbor_vouches),
            fertilizer_purchase_timing: input
                .fertilizer_purchase_timing
                .unwrap_or(base.fertilizer_purchase_timing)
                .clamp(0.0, 1.0),
            seed_quality_tier: input
                .seed_quality_tier
                .unwrap_or(base.seed_quality_tier)
                .clamp(1, 3),
            advisory_usage: input
                .advisory_usage
                .map(|value| value != 0)
                .unwrap_or(base.advisory_usage),
            drought_exposure_index: input
                .drought_exposure_index
                .unwrap_or(base.drought_exposure_index)
                .clamp(0.0, 1.0),
            rainfall_deviation: input
                .rainfall_deviation
                .unwrap_or(base.rainfall_deviation)
                .clamp(-100.0, 100.0),
            temperature_anomaly: input
                .temperature_anomaly
                .unwrap_or(base.temperature_anomaly)
                .clamp(-10.0, 10.0),
        }
    }

    /// Canonical high-performing profile used for demos and calibration.
    pub fn excellent() -> Self {
        Self {
            mean_ndvi: 0.85,
            ndvi_trend: 0.05,
            growing_season_match: 0.92,
            transaction_velocity: 55,
            savings_rate: 0.45,
            loan_repayment_history: 1.0,
            cooperative_endorsement: 5,
            chama_participation: true,
            neighbor_vouches: 6,
            fertilizer_purchase_timing: 0.88,
            seed_quality_tier: 3,
            advisory_usage: true,
            drought_exposure_index: 0.15,
            rainfall_deviation: 5.2,
            temperature_anomaly: 1.1,
        }
    }

    /// Canonical mid-range profile.
    pub fn average() -> Self {
        Self {
            chama_participation: true,
            rainfall_deviation: -8.5,
            temperature_anomaly: 2.1,
            ..Self::default()
        }
    }

    /// Canonical struggling profile.
    pub fn struggling() -> Self {
        Self {
            mean_ndvi: 0.35,
            ndvi_trend: -0.08,
            growing_season_match: 0.45,
            transaction_velocity: 15,
            savings_rate: 0.08,
            loan_repayment_history: 0.0,
            cooperative_endorsement: 2,
            chama_participation: false,
            neighbor_vouches: 0,
            fertilizer_purchase_timing: 0.25,
            seed_quality_tier: 1,
            advisory_usage: false,
            drought_exposure_index: 0.45,
            rainfall_deviation: -15.2,
            temperature_anomaly: 3.5,
        }
    }
}

/// The 15 features grouped by scoring pillar, as served by the feature
/// catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCatalog {
    pub satellite: &'static [&'static str],
    pub financial: &'static [&'static str],
    pub community: &'static [&'static str],
    pub agricultural: &'static [&'static str],
    pub climate: &'static [&'static str],
}

pub fn feature_catalog() -> FeatureCatalog {
    FeatureCatalog {
        satellite: &["mean_ndvi", "ndvi_trend", "growing_season_match"],
        financial: &[
            "transaction_velocity",
            "savings_rate",
            "loan_repayment_history",
        ],
        community: &[
            "cooperative_endorsement",
            "chama_participation",
            "neighbor_vouches",
        ],
        agricultural: &[
            "fertilizer_purchase_timing",
            "seed_quality_tier",
            "advisory_usage",
        ],
        climate: &[
            "drought_exposure_index",
            "rainfall_deviation",
            "temperature_anomaly",
        ],
    }
}

use crate::scoring::FarmerFeatures;
use serde::Serialize;

/// One entry in the read-only demo farmer registry. The registry is fixed
/// reference data; nothing in the crate mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemoFarmer {
    pub farmer_id: &'static str,
    pub name: &'static str,
    pub credit_score: f64,
    pub features: FarmerFeatures,
}

static DEMO_FARMERS: [DemoFarmer; 3] = [
    DemoFarmer {
        farmer_id: "FM0001",
        name: "John Mwangi",
        credit_score: 85.3,
        features: FarmerFeatures {
            mean_ndvi: 0.75,
            ndvi_trend: 0.01,
            growing_season_match: 0.75,
            transaction_velocity: 35,
            savings_rate: 0.35,
            loan_repayment_history: 1.0,
            cooperative_endorsement: 4,
            chama_participation: true,
            neighbor_vouches: 2,
            fertilizer_purchase_timing: 0.65,
            seed_quality_tier: 2,
            advisory_usage: true,
            drought_exposure_index: 0.25,
            rainfall_deviation: -5.0,
            temperature_anomaly: 2.0,
        },
    },
    DemoFarmer {
        farmer_id: "FM0002",
        name: "James Kamau",
        credit_score: 60.3,
        features: FarmerFeatures {
            mean_ndvi: 0.404,
            ndvi_trend: 0.01,
            growing_season_match: 0.75,
            transaction_velocity: 35,
            savings_rate: 0.136,
            loan_repayment_history: 0.5,
            cooperative_endorsement: 2,
            chama_participation: false,
            neighbor_vouches: 2,
            fertilizer_purchase_timing: 0.65,
            seed_quality_tier: 2,
            advisory_usage: false,
            drought_exposure_index: 0.03,
            rainfall_deviation: -5.0,
            temperature_anomaly: 2.0,
        },
    },
    DemoFarmer {
        farmer_id: "FM0008",
        name: "Grace Wanjiku",
        credit_score: 100.0,
        features: FarmerFeatures {
            mean_ndvi: 0.655,
            ndvi_trend: 0.01,
            growing_season_match: 0.75,
            transaction_velocity: 35,
            savings_rate: 0.237,
            loan_repayment_history: 1.0,
            cooperative_endorsement: 5,
            chama_participation: true,
            neighbor_vouches: 2,
            fertilizer_purchase_timing: 0.65,
            seed_quality_tier: 2,
            advisory_usage: true,
            drought_exposure_index: 0.021,
            rainfall_deviation: -5.0,
            temperature_anomaly: 2.0,
        },
    },
];

pub fn all() -> &'static [DemoFarmer] {
    &DEMO_FARMERS
}

pub fn lookup(farmer_id: &str) -> Option<&'static DemoFarmer> {
    DEMO_FARMERS
        .iter()
        .find(|farmer| farmer.farmer_id == farmer_id)
}

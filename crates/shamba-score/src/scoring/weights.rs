use serde::{Deserialize, Serialize};

/// The five pillars a credit score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    CropHealth,
    FinancialBehavior,
    CommunityTrust,
    FarmingPractices,
    ClimateResilience,
}

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::CropHealth,
        Pillar::FinancialBehavior,
        Pillar::CommunityTrust,
        Pillar::FarmingPractices,
        Pillar::ClimateResilience,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Pillar::CropHealth => "Crop Health",
            Pillar::FinancialBehavior => "Financial Behavior",
            Pillar::CommunityTrust => "Community Trust",
            Pillar::FarmingPractices => "Farming Practices",
            Pillar::ClimateResilience => "Climate Resilience",
        }
    }
}

/// Aggregation weights applied to the pillar sub-scores. The standard table
/// is the single source of truth for how much each pillar moves the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub crop_health: f64,
    pub financial_behavior: f64,
    pub community_trust: f64,
    pub farming_practices: f64,
    pub climate_resilience: f64,
}

impl PillarWeights {
    pub const fn standard() -> Self {
        Self {
            crop_health: 0.25,
            financial_behavior: 0.25,
            community_trust: 0.20,
            farming_practices: 0.15,
            climate_resilience: 0.15,
        }
    }

    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::CropHealth => self.crop_health,
            Pillar::FinancialBehavior => self.financial_behavior,
            Pillar::CommunityTrust => self.community_trust,
            Pillar::FarmingPractices => self.farming_practices,
            Pillar::ClimateResilience => self.climate_resilience,
        }
    }
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self::standard()
    }
}

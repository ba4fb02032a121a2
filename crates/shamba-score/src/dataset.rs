//! CSV import of farmer feature rows for batch scoring.
//!
//! Rows carry a farmer id, an optional display name, and any subset of the
//! 15 feature columns; absent or empty cells fall back to the documented
//! feature defaults.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::scoring::{FarmerFeatures, FeatureInput};

/// One imported dataset row, already normalized into scoring features.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmerRow {
    pub farmer_id: String,
    pub name: Option<String>,
    pub features: FarmerFeatures,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingFarmerId { row: usize },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to read farmer dataset: {}", err),
            DatasetError::Csv(err) => write!(f, "invalid farmer dataset CSV: {}", err),
            DatasetError::MissingFarmerId { row } => {
                write!(f, "row {} is missing a farmer_id", row)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Csv(err) => Some(err),
            DatasetError::MissingFarmerId { .. } => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct FarmerDatasetImporter;

impl FarmerDatasetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FarmerRow>, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<FarmerRow>, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (index, record) in csv_reader.deserialize::<DatasetRow>().enumerate() {
            let row = record?;
            let farmer_id = row
                .farmer_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .ok_or(DatasetError::MissingFarmerId { row: index + 1 })?;

            rows.push(FarmerRow {
                farmer_id,
                name: row.name.clone().filter(|name| !name.is_empty()),
                features: FarmerFeatures::from_input(row.into_feature_input()),
            });
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(default)]
    farmer_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    mean_ndvi: Option<f64>,
    #[serde(default)]
    ndvi_trend: Option<f64>,
    #[serde(default)]
    growing_season_match: Option<f64>,
    #[serde(default)]
    transaction_velocity: Option<u32>,
    #[serde(default)]
    savings_rate: Option<f64>,
    #[serde(default)]
    loan_repayment_history: Option<f64>,
    #[serde(default)]
    cooperative_endorsement: Option<u8>,
    #[serde(default)]
    chama_participation: Option<u8>,
    #[serde(default)]
    neighbor_vouches: Option<u32>,
    #[serde(default)]
    fertilizer_purchase_timing: Option<f64>,
    #[serde(default)]
    seed_quality_tier: Option<u8>,
    #[serde(default)]
    advisory_usage: Option<u8>,
    #[serde(default)]
    drought_exposure_index: Option<f64>,
    #[serde(default)]
    rainfall_deviation: Option<f64>,
    #[serde(default)]
    temperature_anomaly: Option<f64>,
}

impl DatasetRow {
    fn into_feature_input(self) -> FeatureInput {
        FeatureInput {
            mean_ndvi: self.mean_ndvi,
            ndvi_trend: self.ndvi_trend,
            growing_season_match: self.growing_season_match,
            transaction_velocity: self.transaction_velocity,
            savings_rate: self.savings_rate,
            loan_repayment_history: self.loan_repayment_history,
            cooperative_endorsement: self.cooperative_endorsement,
            chama_participation: self.chama_participation,
            neighbor_vouches: self.neighbor_vouches,
            fertilizer_purchase_timing: self.fertilizer_purchase_timing,
            seed_quality_tier: self.seed_quality_tier,
            advisory_usage: self.advisory_usage,
            drought_exposure_index: self.drought_exposure_index,
            rainfall_deviation: self.rainfall_deviation,
            temperature_anomaly: self.temperature_anomaly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_rows_with_partial_feature_columns() {
        let csv = "farmer_id,name,mean_ndvi,savings_rate,chama_participation\n\
                   FM0001,John Mwangi,0.75,0.35,1\n\
                   FM0002,,0.404,0.136,0\n";

        let rows = FarmerDatasetImporter::from_reader(Cursor::new(csv)).expect("dataset imports");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].farmer_id, "FM0001");
        assert_eq!(rows[0].name.as_deref(), Some("John Mwangi"));
        assert!(rows[0].features.chama_participation);
        assert_eq!(rows[0].features.mean_ndvi, 0.75);
        // Absent columns fall back to defaults.
        assert_eq!(rows[0].features.transaction_velocity, 35);
        assert!(rows[1].name.is_none());
        assert!(!rows[1].features.chama_participation);
    }

    #[test]
    fn rejects_rows_without_farmer_id() {
        let csv = "farmer_id,mean_ndvi\n,0.5\n";
        let result = FarmerDatasetImporter::from_reader(Cursor::new(csv));
        assert!(matches!(
            result,
            Err(DatasetError::MissingFarmerId { row: 1 })
        ));
    }

    #[test]
    fn surfaces_unparseable_cells_as_csv_errors() {
        let csv = "farmer_id,mean_ndvi\nFM0001,not-a-number\n";
        let result = FarmerDatasetImporter::from_reader(Cursor::new(csv));
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }
}

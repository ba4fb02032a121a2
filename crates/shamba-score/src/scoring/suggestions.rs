use super::features::FarmerFeatures;

// Feature thresholds that trigger an improvement suggestion.
const SAVINGS_RATE_TARGET: f64 = 0.3;
const ENDORSEMENT_TARGET: u8 = 4;
const REPAYMENT_TARGET: f64 = 0.8;
pub(crate) const DROUGHT_ALERT_THRESHOLD: f64 = 0.4;

/// Emit one suggestion per violated threshold, in fixed priority order.
/// Point estimates are interpolated from the distance to the threshold so
/// repeated calls over the same features produce identical text.
pub(crate) fn improvement_suggestions(features: &FarmerFeatures) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !features.chama_participation {
        suggestions.push(
            "Join a savings group (chama) to improve community trust (+10 points)".to_string(),
        );
    }

    if features.savings_rate < SAVINGS_RATE_TARGET {
        let gap = (SAVINGS_RATE_TARGET - features.savings_rate) / SAVINGS_RATE_TARGET;
        suggestions.push(format!(
            "Increase your savings rate to at least 30% of income (+{} points)",
            scaled_points(5, 8, gap)
        ));
    }

    if !features.advisory_usage {
        suggestions.push(
            "Use agricultural extension services for better farming practices (+3 points)"
                .to_string(),
        );
    }

    if features.cooperative_endorsement < ENDORSEMENT_TARGET {
        let gap = f64::from(ENDORSEMENT_TARGET - features.cooperative_endorsement)
            / f64::from(ENDORSEMENT_TARGET);
        suggestions.push(format!(
            "Improve participation in farmer cooperatives (+{} points)",
            scaled_points(4, 7, gap)
        ));
    }

    if features.loan_repayment_history < REPAYMENT_TARGET {
        let gap = (REPAYMENT_TARGET - features.loan_repayment_history) / REPAYMENT_TARGET;
        suggestions.push(format!(
            "Maintain consistent loan repayments to build credit history (+{} points)",
            scaled_points(10, 15, gap)
        ));
    }

    if features.drought_exposure_index > DROUGHT_ALERT_THRESHOLD {
        let gap = (features.drought_exposure_index - DROUGHT_ALERT_THRESHOLD)
            / (1.0 - DROUGHT_ALERT_THRESHOLD);
        suggestions.push(format!(
            "Adopt drought mitigation such as water harvesting or resistant varieties (+{} points)",
            scaled_points(4, 8, gap)
        ));
    }

    suggestions
}

/// Interpolate between the band's floor and ceiling by the gap fraction.
fn scaled_points(min: u8, max: u8, gap_fraction: f64) -> u8 {
    let gap = gap_fraction.clamp(0.0, 1.0);
    let span = f64::from(max - min);
    min + (span * gap).round() as u8
}

use super::common::*;
use crate::scoring::improvement_suggestions;

#[test]
fn emits_one_entry_per_violated_threshold_in_priority_order() {
    let suggestions = improvement_suggestions(&floor_profile());

    assert_eq!(suggestions.len(), 6);
    assert!(suggestions[0].contains("chama"));
    assert!(suggestions[1].contains("savings rate"));
    assert!(suggestions[2].contains("extension services"));
    assert!(suggestions[3].contains("cooperatives"));
    assert!(suggestions[4].contains("loan repayments"));
    assert!(suggestions[5].contains("drought"));
}

#[test]
fn point_estimates_scale_with_the_threshold_gap() {
    // Savings at zero sits at the full gap, so the band ceiling applies.
    let at_floor = improvement_suggestions(&features_with(|f| f.savings_rate = 0.0));
    assert!(at_floor.iter().any(|s| s.contains("income (+8 points)")));

    // Nearly at target, the band floor applies.
    let near_target = improvement_suggestions(&features_with(|f| f.savings_rate = 0.29));
    assert!(near_target.iter().any(|s| s.contains("income (+5 points)")));
}

#[test]
fn point_estimates_are_deterministic() {
    let profile = floor_profile();
    assert_eq!(
        improvement_suggestions(&profile),
        improvement_suggestions(&profile)
    );
}

#[test]
fn satisfied_thresholds_emit_nothing() {
    let suggestions = improvement_suggestions(&features_with(|f| {
        f.chama_participation = true;
        f.savings_rate = 0.35;
        f.advisory_usage = true;
        f.cooperative_endorsement = 4;
        f.loan_repayment_history = 1.0;
        f.drought_exposure_index = 0.2;
    }));

    assert!(suggestions.is_empty());
}

#[test]
fn elevated_drought_exposure_triggers_mitigation_advice() {
    let suggestions = improvement_suggestions(&features_with(|f| {
        f.drought_exposure_index = 0.8;
    }));

    assert!(suggestions.iter().any(|s| s.contains("drought mitigation")));
}

use crate::scoring::RiskCategory;

#[test]
fn thresholds_map_boundary_scores_consistently() {
    assert_eq!(RiskCategory::for_score(100.0), RiskCategory::Excellent);
    assert_eq!(RiskCategory::for_score(90.0), RiskCategory::Excellent);
    assert_eq!(RiskCategory::for_score(89.9), RiskCategory::VeryGood);
    assert_eq!(RiskCategory::for_score(75.0), RiskCategory::VeryGood);
    assert_eq!(RiskCategory::for_score(74.9), RiskCategory::Good);
    assert_eq!(RiskCategory::for_score(60.0), RiskCategory::Good);
    assert_eq!(RiskCategory::for_score(59.9), RiskCategory::Moderate);
    assert_eq!(RiskCategory::for_score(45.0), RiskCategory::Moderate);
    assert_eq!(RiskCategory::for_score(44.9), RiskCategory::HighRisk);
    assert_eq!(RiskCategory::for_score(0.0), RiskCategory::HighRisk);
}

#[test]
fn loan_terms_follow_the_fixed_table() {
    let excellent = RiskCategory::Excellent.loan_terms();
    assert_eq!(excellent.max_amount_kes, 150_000);
    assert_eq!(excellent.interest_rate, 10.5);
    assert_eq!(excellent.approval_probability, 0.98);

    let high_risk = RiskCategory::HighRisk.loan_terms();
    assert_eq!(high_risk.max_amount_kes, 25_000);
    assert_eq!(high_risk.interest_rate, 20.0);
    assert_eq!(high_risk.approval_probability, 0.45);

    // Better bands never offer worse terms.
    let bands = [
        RiskCategory::Excellent,
        RiskCategory::VeryGood,
        RiskCategory::Good,
        RiskCategory::Moderate,
        RiskCategory::HighRisk,
    ];
    for pair in bands.windows(2) {
        let better = pair[0].loan_terms();
        let worse = pair[1].loan_terms();
        assert!(better.max_amount_kes > worse.max_amount_kes);
        assert!(better.interest_rate < worse.interest_rate);
        assert!(better.approval_probability > worse.approval_probability);
    }
}

#[test]
fn labels_serialize_as_the_documented_strings() {
    let json = serde_json::to_string(&RiskCategory::VeryGood).expect("category serializes");
    assert_eq!(json, "\"Very Good\"");
    let json = serde_json::to_string(&RiskCategory::HighRisk).expect("category serializes");
    assert_eq!(json, "\"High Risk\"");

    assert_eq!(RiskCategory::Excellent.label(), "Excellent");
    assert_eq!(
        RiskCategory::Moderate.profile_label(),
        "Moderate Risk Profile"
    );
}

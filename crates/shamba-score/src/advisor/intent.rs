/// Utterance intents, checked in fixed priority order; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Score,
    Explanation,
    Improvement,
    Loan,
    Fallback,
}

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "help"];
const SCORE_KEYWORDS: &[&str] = &["score", "rating"];
const EXPLANATION_KEYWORDS: &[&str] = &["why", "explain", "factors"];
const IMPROVEMENT_KEYWORDS: &[&str] = &["improve", "better", "increase"];
const LOAN_KEYWORDS: &[&str] = &["loan", "borrow", "credit"];

/// Case-insensitive substring match over the per-intent keyword sets.
pub fn classify(utterance: &str) -> Intent {
    let lowered = utterance.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|keyword| lowered.contains(keyword));

    if matches(GREETING_KEYWORDS) {
        Intent::Greeting
    } else if matches(SCORE_KEYWORDS) {
        Intent::Score
    } else if matches(EXPLANATION_KEYWORDS) {
        Intent::Explanation
    } else if matches(IMPROVEMENT_KEYWORDS) {
        Intent::Improvement
    } else if matches(LOAN_KEYWORDS) {
        Intent::Loan
    } else {
        Intent::Fallback
    }
}

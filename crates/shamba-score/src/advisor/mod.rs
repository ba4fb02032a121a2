//! Rule-based advisory narrator over the demo farmer registry.
//!
//! Stateless: every reply is a pure function of the utterance, the optional
//! farmer id, and the fixed registry. Risk labels and loan terms come from
//! the same tables the scoring engine uses.

mod farmers;
mod intent;
mod router;


pub use farmers::{all as demo_farmers, lookup, DemoFarmer};
pub use intent::{classify, Intent};
pub use router::{chat_router, ChatRequest, ChatResponse};

use crate::scoring::{improvement_suggestions, RiskCategory, DROUGHT_ALERT_THRESHOLD};

// Ceiling for the projected score shown in improvement replies.
const SCORE_CEILING: f64 = 100.0;
const IMPROVEMENT_HEADROOM: f64 = 15.0;

/// Produce a reply for one utterance. Intents that reference personal data
/// require a known farmer id; unknown or missing ids yield a prompt string
/// rather than an error.
pub fn respond(utterance: &str, farmer_id: Option<&str>) -> String {
    match intent::classify(utterance) {
        Intent::Greeting => greeting_reply(),
        Intent::Score => with_farmer(farmer_id, PROMPT_SCORE, score_reply),
        Intent::Explanation => with_farmer(farmer_id, PROMPT_EXPLANATION, explanation_reply),
        Intent::Improvement => with_farmer(farmer_id, PROMPT_IMPROVEMENT, improvement_reply),
        Intent::Loan => with_farmer(farmer_id, PROMPT_LOAN, loan_reply),
        Intent::Fallback => fallback_reply(),
    }
}

const PROMPT_SCORE: &str =
    "Please provide a valid Farmer ID (FM0001, FM0002, or FM0008) to check your score.";
const PROMPT_EXPLANATION: &str =
    "Please provide a valid Farmer ID to get a detailed explanation of your score.";
const PROMPT_IMPROVEMENT: &str =
    "Please provide a valid Farmer ID to get personalized improvement suggestions.";
const PROMPT_LOAN: &str = "Please provide a valid Farmer ID to check your loan eligibility.";

fn with_farmer(
    farmer_id: Option<&str>,
    prompt: &str,
    reply: fn(&DemoFarmer) -> String,
) -> String {
    match farmer_id.and_then(farmers::lookup) {
        Some(farmer) => reply(farmer),
        None => prompt.to_string(),
    }
}

fn greeting_reply() -> String {
    "Hello! I'm your Shamba Score Assistant. I can help you with:\n\n\
     - Check your credit score\n\
     - Explain your score factors\n\
     - Get loan recommendations\n\
     - Understand improvement tips\n\n\
     Try asking: \"What is my score?\" or \"How can I improve my score?\""
        .to_string()
}

fn fallback_reply() -> String {
    "I can help you with your Shamba Score! Try asking:\n\n\
     - \"What is my score?\" (use Farmer ID: FM0001, FM0002, or FM0008)\n\
     - \"Why is my score this way?\"\n\
     - \"How can I improve my score?\"\n\
     - \"What are my loan terms?\"\n\n\
     What would you like to know?"
        .to_string()
}

fn score_reply(farmer: &DemoFarmer) -> String {
    let category = RiskCategory::for_score(farmer.credit_score);
    let terms = category.loan_terms();

    format!(
        "Hello {name}! Your current Shamba Score is {score:.1}.\n\n\
         Status: {status}\n\n\
         Loan Eligibility:\n\
         - Maximum Amount: KES {amount}\n\
         - Interest Rate: {rate}%\n\
         - Approval Probability: {probability}%\n\n\
         This score is based on your crop health, financial behavior, community \
         standing, and farming practices.",
        name = farmer.name,
        score = farmer.credit_score,
        status = category.profile_label(),
        amount = format_kes(terms.max_amount_kes),
        rate = terms.interest_rate,
        probability = percent(terms.approval_probability),
    )
}

fn explanation_reply(farmer: &DemoFarmer) -> String {
    let features = &farmer.features;
    let mut positive: Vec<&str> = Vec::new();
    let mut negative: Vec<&str> = Vec::new();

    if features.mean_ndvi > 0.7 {
        positive.push("Excellent crop health (NDVI)");
    } else if features.mean_ndvi < 0.4 {
        negative.push("Poor crop health (NDVI)");
    }

    if features.savings_rate > 0.4 {
        positive.push("High savings rate");
    } else if features.savings_rate < 0.2 {
        negative.push("Low savings rate");
    }

    if features.loan_repayment_history >= 1.0 {
        positive.push("Perfect repayment history");
    } else if features.loan_repayment_history < 0.5 {
        negative.push("Poor repayment history");
    }

    if features.cooperative_endorsement >= 4 {
        positive.push("Strong cooperative participation");
    } else if features.cooperative_endorsement <= 2 {
        negative.push("Weak cooperative participation");
    }

    format!(
        "Your score of {score:.1} is influenced by:\n\n\
         Positive Factors:\n{positive}\n\n\
         Areas for Improvement:\n{negative}\n\n\
         Focus on improving the negative factors to boost your score!",
        score = farmer.credit_score,
        positive = bullet_list(&positive, "Basic farming practices"),
        negative = bullet_list(&negative, "Minor optimization opportunities"),
    )
}

fn improvement_reply(farmer: &DemoFarmer) -> String {
    let suggestions = improvement_suggestions(&farmer.features);
    let current = farmer.credit_score;
    let potential = (current + IMPROVEMENT_HEADROOM).min(SCORE_CEILING);

    let listed: Vec<&str> = suggestions.iter().map(String::as_str).collect();
    format!(
        "How to Improve Your Score:\n\n{suggestions}\n\n\
         Potential Impact:\n\
         Current Score: {current:.1}\n\
         Potential Score: {potential:.1} ({gain:.1} point increase)\n\n\
         Focus on 2-3 improvements for the best results!",
        suggestions = bullet_list(&listed, "Keep up your current practices"),
        gain = potential - current,
    )
}

fn loan_reply(farmer: &DemoFarmer) -> String {
    let category = RiskCategory::for_score(farmer.credit_score);
    let terms = category.loan_terms();

    let mut reply = format!(
        "Your Loan Terms:\n\n\
         - Maximum Amount: KES {amount}\n\
         - Interest Rate: {rate}%\n\
         - Approval Probability: {probability}%",
        amount = format_kes(terms.max_amount_kes),
        rate = terms.interest_rate,
        probability = percent(terms.approval_probability),
    );

    if farmer.features.drought_exposure_index > DROUGHT_ALERT_THRESHOLD {
        reply.push_str(
            "\n\nClimate Safeguard: Due to high drought risk in your area, you may \
             qualify for a 60-day grace period after harvest.",
        );
    }

    reply
}

fn bullet_list(entries: &[&str], fallback: &str) -> String {
    if entries.is_empty() {
        return format!("- {fallback}");
    }
    entries
        .iter()
        .map(|entry| format!("- {entry}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

/// Group digits in threes, matching how amounts are shown to farmers.
fn format_kes(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

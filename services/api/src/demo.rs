use clap::{Args, ValueEnum};
use std::path::PathBuf;

use shamba_score::advisor;
use shamba_score::dataset::FarmerDatasetImporter;
use shamba_score::error::AppError;
use shamba_score::scoring::{FarmerFeatures, FeatureInput, ScoreResult, ScoringEngine};

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum DemoProfile {
    Excellent,
    Average,
    Struggling,
}

impl DemoProfile {
    fn features(self) -> FarmerFeatures {
        match self {
            DemoProfile::Excellent => FarmerFeatures::excellent(),
            DemoProfile::Average => FarmerFeatures::average(),
            DemoProfile::Struggling => FarmerFeatures::struggling(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Score one of the canonical demo profiles
    #[arg(long, value_enum)]
    pub(crate) profile: Option<DemoProfile>,
    /// Score a farmer from the demo registry (FM0001, FM0002, FM0008)
    #[arg(long)]
    pub(crate) farmer_id: Option<String>,
    /// Score features read from a JSON file (any subset of the 15 fields)
    #[arg(long)]
    pub(crate) features_json: Option<PathBuf>,
    /// Score every row of a farmer dataset CSV
    #[arg(long)]
    pub(crate) dataset_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// The utterance to send to the assistant
    pub(crate) message: String,
    /// Farmer ID for personalized replies
    #[arg(long)]
    pub(crate) farmer_id: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the assistant portion of the demo
    #[arg(long)]
    pub(crate) skip_chat: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::standard();

    if let Some(path) = args.dataset_csv {
        let rows = FarmerDatasetImporter::from_path(path)?;
        println!("Scored {} farmer(s)", rows.len());
        for row in rows {
            let result = engine.score(&row.features);
            match row.name {
                Some(name) => println!(
                    "- {} ({}): {:.1} ({})",
                    row.farmer_id,
                    name,
                    result.credit_score,
                    result.risk_category.label()
                ),
                None => println!(
                    "- {}: {:.1} ({})",
                    row.farmer_id,
                    result.credit_score,
                    result.risk_category.label()
                ),
            }
        }
        return Ok(());
    }

    let features = if let Some(farmer_id) = args.farmer_id {
        match advisor::lookup(&farmer_id) {
            Some(farmer) => farmer.features,
            None => {
                eprintln!("Unknown farmer id '{farmer_id}'. Known ids: FM0001, FM0002, FM0008.");
                return Ok(());
            }
        }
    } else if let Some(path) = args.features_json {
        let raw = std::fs::read_to_string(path)?;
        let input: FeatureInput = serde_json::from_str(&raw).map_err(|err| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })?;
        FarmerFeatures::from_input(input)
    } else {
        args.profile
            .map(DemoProfile::features)
            .unwrap_or_default()
    };

    render_scorecard(&engine.score(&features));
    Ok(())
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    println!(
        "{}",
        advisor::respond(&args.message, args.farmer_id.as_deref())
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::standard();

    println!("Shamba Score demo");
    for (label, features) in [
        ("Excellent farmer", FarmerFeatures::excellent()),
        ("Average farmer", FarmerFeatures::average()),
        ("Struggling farmer", FarmerFeatures::struggling()),
    ] {
        println!("\n== {label} ==");
        render_scorecard(&engine.score(&features));
    }

    if args.skip_chat {
        return Ok(());
    }

    println!("\n== Advisory assistant ==");
    for (message, farmer_id) in [
        ("hello", None),
        ("what is my score?", Some("FM0001")),
        ("how can I improve?", Some("FM0002")),
        ("what are my loan terms?", Some("FM0008")),
    ] {
        println!("\n> {message}");
        println!("{}", advisor::respond(message, farmer_id));
    }

    Ok(())
}

fn render_scorecard(result: &ScoreResult) {
    println!(
        "Shamba Score: {:.1} ({})",
        result.credit_score,
        result.risk_category.label()
    );
    println!("Loan terms:");
    println!("- Maximum amount: KES {}", result.recommended_loan_amount);
    println!("- Interest rate: {}%", result.interest_rate);
    println!(
        "- Approval probability: {:.0}%",
        result.approval_probability * 100.0
    );

    println!("Top contributing factors:");
    for factor in &result.top_contributing_factors {
        println!("- {}: {:.1}", factor.factor, factor.contribution);
    }

    if result.improvement_suggestions.is_empty() {
        println!("Improvement suggestions: none");
    } else {
        println!("Improvement suggestions:");
        for suggestion in &result.improvement_suggestions {
            println!("- {suggestion}");
        }
    }
}

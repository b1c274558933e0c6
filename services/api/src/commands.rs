use crate::infra::{load_assistant, load_directory, parse_land_holding, parse_variant};
use clap::Args;
use krishi_assist::config::AppConfig;
use krishi_assist::error::AppError;
use krishi_assist::schemes::{
    Crop, EligibleSchemeView, FarmerProfile, FarmingType, IrrigationSource, LandHolding,
};
use krishi_assist::Language;

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Message to answer
    pub(crate) message: String,
    /// Reply language (en or hi)
    #[arg(long, default_value = "en")]
    pub(crate) language: String,
    /// Print the reply as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// Land holding bracket, e.g. less-than-1-hectare
    #[arg(long, value_parser = parse_land_holding)]
    pub(crate) land_holding: Option<LandHolding>,
    /// Farming practice: organic, conventional, mixed or other
    #[arg(long, value_parser = parse_variant::<FarmingType>)]
    pub(crate) farming_type: Option<FarmingType>,
    /// Crop grown; repeat for several crops
    #[arg(long, value_parser = parse_variant::<Crop>)]
    pub(crate) crop: Vec<Crop>,
    /// Main irrigation source, e.g. rain-fed
    #[arg(long, value_parser = parse_variant::<IrrigationSource>)]
    pub(crate) irrigation: Option<IrrigationSource>,
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Output language (en or hi)
    #[arg(long, default_value = "en")]
    pub(crate) language: String,
    /// Print the ranked schemes as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Scheme ids to compare, e.g. pm-kisan pm-fby
    #[arg(required = true)]
    pub(crate) ids: Vec<String>,
    /// Output language (en or hi)
    #[arg(long, default_value = "en")]
    pub(crate) language: String,
    /// Print the comparison as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl EligibilityArgs {
    fn profile(&self) -> FarmerProfile {
        FarmerProfile {
            land_holding_category: self.land_holding,
            farming_type: self.farming_type,
            crops_grown: self.crop.clone(),
            irrigation_source: self.irrigation,
            state: self.state.clone(),
        }
    }
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let assistant = load_assistant(&config.rules)?;
    let reply = assistant.respond(&args.message, Language::from_tag(&args.language));

    if args.json {
        match serde_json::to_string_pretty(&reply) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Reply unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    println!("Topic: {}", reply.topic.as_deref().unwrap_or("general help"));
    println!("\n{}", reply.reply);
    if !reply.suggestions.is_empty() {
        println!("\nYou could also ask:");
        for suggestion in &reply.suggestions {
            println!("  - {suggestion}");
        }
    }
    Ok(())
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = load_directory(&config.rules)?;
    let profile = args.profile();
    let ranked = directory.check_eligibility(&profile, Language::from_tag(&args.language));

    if args.json {
        match serde_json::to_string_pretty(&ranked) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Eligibility results unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    render_ranking(&profile, &ranked);
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = load_directory(&config.rules)?;
    let comparison = directory.compare(&args.ids, Language::from_tag(&args.language));

    if args.json {
        match serde_json::to_string_pretty(&comparison) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Comparison unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    if comparison.schemes.is_empty() {
        println!("No catalog schemes match the requested ids");
        return Ok(());
    }

    println!("Scheme comparison");
    for scheme in &comparison.schemes {
        let complexity = comparison
            .application_complexity
            .get(&scheme.id)
            .map(|complexity| format!("{complexity:?}").to_lowercase())
            .unwrap_or_else(|| "unrated".to_string());
        println!(
            "- {} [{}] | {} | application effort: {complexity}",
            scheme.title, scheme.id, scheme.benefits
        );
    }
    println!("Estimated combined value: ₹{}", comparison.total_benefits);
    for recommendation in &comparison.recommendations {
        println!("  * {recommendation}");
    }
    Ok(())
}

fn render_ranking(profile: &FarmerProfile, ranked: &[EligibleSchemeView]) {
    let holding = profile
        .land_holding_category
        .map(LandHolding::label)
        .unwrap_or("not answered");
    println!("Scheme eligibility (land holding: {holding})");

    if ranked.is_empty() {
        println!("- No schemes match this profile");
        return;
    }

    for (rank, entry) in ranked.iter().enumerate() {
        println!(
            "{}. {} [{}] score {}",
            rank + 1,
            entry.scheme.title,
            entry.scheme.id,
            entry.match_score
        );
        for component in &entry.score_components {
            println!(
                "     {:?}: {:+} ({})",
                component.factor, component.points, component.notes
            );
        }
        if let Some(amount) = &entry.scheme.amount {
            println!("     benefit: {amount}");
        }
    }
}

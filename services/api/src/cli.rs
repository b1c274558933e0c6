use crate::commands::{
    run_ask, run_compare, run_eligibility, AskArgs, CompareArgs, EligibilityArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use krishi_assist::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Krishi Assist",
    about = "Bilingual farming assistant: keyword chat replies and scheme eligibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer a single chat message from the rule catalog
    Ask(AskArgs),
    /// Rank government schemes for a farmer profile
    Eligibility(EligibilityArgs),
    /// Compare selected schemes side by side
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Ask(args) => run_ask(args),
        Command::Eligibility(args) => run_eligibility(args),
        Command::Compare(args) => run_compare(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_assist::schemes::{Crop, LandHolding};

    #[test]
    fn defaults_to_serve_when_no_subcommand_given() {
        let cli = Cli::try_parse_from(["krishi-assist-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_eligibility_profile_flags() {
        let cli = Cli::try_parse_from([
            "krishi-assist-api",
            "eligibility",
            "--land-holding",
            "less-than-1-hectare",
            "--crop",
            "rice",
            "--crop",
            "pulses",
            "--language",
            "hi",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Eligibility(args)) => {
                assert_eq!(args.land_holding, Some(LandHolding::LessThanOneHectare));
                assert_eq!(args.crop, vec![Crop::Rice, Crop::Pulses]);
                assert_eq!(args.language, "hi");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_compare_ids() {
        let cli = Cli::try_parse_from(["krishi-assist-api", "compare", "pm-kisan", "pm-fby"])
            .expect("parses");

        match cli.command {
            Some(Command::Compare(args)) => {
                assert_eq!(args.ids, vec!["pm-kisan", "pm-fby"]);
                assert_eq!(args.language, "en");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_land_holding() {
        let result = Cli::try_parse_from([
            "krishi-assist-api",
            "eligibility",
            "--land-holding",
            "huge",
        ]);
        assert!(result.is_err());
    }
}

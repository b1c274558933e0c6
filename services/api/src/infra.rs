use krishi_assist::config::RulesConfig;
use krishi_assist::rules::ConfigurationError;
use krishi_assist::schemes::LandHolding;
use krishi_assist::{ChatAssistant, SchemeDirectory};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Chat replies from the configured file, or the embedded catalog.
pub(crate) fn load_assistant(rules: &RulesConfig) -> Result<ChatAssistant, ConfigurationError> {
    match &rules.chat_rules {
        Some(path) => {
            let assistant = ChatAssistant::with_replies_from(path)?;
            info!(path = %path.display(), topics = assistant.replies().len(), "chat rules loaded");
            Ok(assistant)
        }
        None => ChatAssistant::builtin(),
    }
}

/// Scheme catalog from the configured file, or the embedded catalog.
pub(crate) fn load_directory(rules: &RulesConfig) -> Result<SchemeDirectory, ConfigurationError> {
    match &rules.scheme_catalog {
        Some(path) => {
            let directory = SchemeDirectory::from_path(path)?;
            info!(
                path = %path.display(),
                schemes = directory.catalog().schemes().len(),
                "scheme catalog loaded"
            );
            Ok(directory)
        }
        None => SchemeDirectory::builtin(),
    }
}

/// Parses a questionnaire value using the same spelling as the JSON API.
pub(crate) fn parse_variant<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
        .map_err(|_| format!("unrecognised value '{raw}'"))
}

pub(crate) fn parse_land_holding(raw: &str) -> Result<LandHolding, String> {
    parse_variant(raw).map_err(|_| {
        let accepted = LandHolding::ordered()
            .iter()
            .filter_map(|holding| serde_json::to_value(holding).ok())
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect::<Vec<_>>();
        format!(
            "unrecognised land holding '{raw}' (expected one of: {})",
            accepted.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_assist::schemes::IrrigationSource;
    use std::path::PathBuf;

    #[test]
    fn land_holding_errors_list_accepted_values() {
        let err = parse_land_holding("huge").expect_err("unknown bracket");
        assert!(err.contains("no-land"));
        assert!(err.contains("more-than-5-hectares"));
        assert_eq!(
            parse_land_holding(" 2-5-hectares "),
            Ok(LandHolding::TwoToFiveHectares)
        );
    }

    #[test]
    fn variants_use_kebab_case_spelling() {
        assert_eq!(
            parse_variant::<IrrigationSource>("well-tubewell"),
            Ok(IrrigationSource::WellTubewell)
        );
        assert!(parse_variant::<IrrigationSource>("WellTubewell").is_err());
    }

    #[test]
    fn missing_override_file_is_reported() {
        let rules = RulesConfig {
            chat_rules: None,
            scheme_catalog: Some(PathBuf::from("/nonexistent/schemes.json")),
        };
        assert!(load_assistant(&rules).is_ok());
        assert!(matches!(
            load_directory(&rules),
            Err(ConfigurationError::Io { .. })
        ));
    }
}

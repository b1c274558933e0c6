use serde::{Deserialize, Serialize};

use crate::language::Localized;

/// Land-holding brackets offered by the eligibility questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandHolding {
    #[serde(rename = "no-land")]
    NoLand,
    #[serde(rename = "less-than-1-hectare")]
    LessThanOneHectare,
    #[serde(rename = "1-2-hectares")]
    OneToTwoHectares,
    #[serde(rename = "2-5-hectares")]
    TwoToFiveHectares,
    #[serde(rename = "more-than-5-hectares")]
    MoreThanFiveHectares,
}

impl LandHolding {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NoLand,
            Self::LessThanOneHectare,
            Self::OneToTwoHectares,
            Self::TwoToFiveHectares,
            Self::MoreThanFiveHectares,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoLand => "No land",
            Self::LessThanOneHectare => "Less than 1 hectare",
            Self::OneToTwoHectares => "1-2 hectares",
            Self::TwoToFiveHectares => "2-5 hectares",
            Self::MoreThanFiveHectares => "More than 5 hectares",
        }
    }

    pub const fn has_land(self) -> bool {
        !matches!(self, Self::NoLand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FarmingType {
    Organic,
    Conventional,
    Mixed,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Crop {
    Rice,
    Wheat,
    Pulses,
    Oilseeds,
    Horticulture,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IrrigationSource {
    Canal,
    WellTubewell,
    RainFed,
    Drip,
}

/// Questionnaire answers. Every attribute may be left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    #[serde(default, alias = "landHolding")]
    pub land_holding_category: Option<LandHolding>,
    #[serde(default)]
    pub farming_type: Option<FarmingType>,
    #[serde(default)]
    pub crops_grown: Vec<Crop>,
    #[serde(default)]
    pub irrigation_source: Option<IrrigationSource>,
    #[serde(default)]
    pub state: Option<String>,
}

impl FarmerProfile {
    pub fn with_land_holding(land_holding: LandHolding) -> Self {
        Self {
            land_holding_category: Some(land_holding),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeCategory {
    Financial,
    Insurance,
    Infrastructure,
    Education,
    Sustainable,
    Technology,
}

impl SchemeCategory {
    /// Parse a query value. Unknown values, `all` included, yield `None`.
    pub fn from_query(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "financial" => Some(Self::Financial),
            "insurance" => Some(Self::Insurance),
            "infrastructure" => Some(Self::Infrastructure),
            "education" => Some(Self::Education),
            "sustainable" => Some(Self::Sustainable),
            "technology" => Some(Self::Technology),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeStatus {
    Active,
    Upcoming,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemePriority {
    High,
    Medium,
    Low,
}

/// Paperwork effort expected when applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationComplexity {
    Low,
    Medium,
    High,
}

/// Farmer groups a scheme is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFarmer {
    Small,
    Marginal,
    All,
}

/// Qualification predicate over a [`FarmerProfile`]. An unanswered attribute never satisfies
/// a predicate that inspects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "kebab-case")]
pub enum Qualification {
    #[default]
    Universal,
    LandHoldingIn(Vec<LandHolding>),
    RequiresLand,
    FarmingTypeIn(Vec<FarmingType>),
    IrrigationSourceIn(Vec<IrrigationSource>),
    GrowsAnyCrop(Vec<Crop>),
    AllOf(Vec<Qualification>),
}

impl Qualification {
    pub fn admits(&self, profile: &FarmerProfile) -> bool {
        match self {
            Self::Universal => true,
            Self::LandHoldingIn(allowed) => profile
                .land_holding_category
                .map(|holding| allowed.contains(&holding))
                .unwrap_or(false),
            Self::RequiresLand => profile
                .land_holding_category
                .map(LandHolding::has_land)
                .unwrap_or(false),
            Self::FarmingTypeIn(allowed) => profile
                .farming_type
                .map(|farming| allowed.contains(&farming))
                .unwrap_or(false),
            Self::IrrigationSourceIn(allowed) => profile
                .irrigation_source
                .map(|source| allowed.contains(&source))
                .unwrap_or(false),
            Self::GrowsAnyCrop(crops) => {
                profile.crops_grown.iter().any(|crop| crops.contains(crop))
            }
            Self::AllOf(predicates) => {
                predicates.iter().all(|predicate| predicate.admits(profile))
            }
        }
    }
}

/// Government scheme together with the rule deciding who qualifies for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub category: SchemeCategory,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub benefits: Localized<String>,
    #[serde(default)]
    pub eligibility: Localized<Vec<String>>,
    pub application_deadline: String,
    pub status: SchemeStatus,
    pub application_link: String,
    pub ministry: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub application_complexity: Option<ApplicationComplexity>,
    /// One-line pitch shown when the scheme is compared with others.
    #[serde(default)]
    pub recommendation: Localized<String>,
    pub priority: SchemePriority,
    #[serde(default)]
    pub target_farmers: Vec<TargetFarmer>,
    #[serde(default)]
    pub qualification: Qualification,
}

impl Scheme {
    pub fn targets(&self, group: TargetFarmer) -> bool {
        self.target_farmers.contains(&group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_legacy_land_holding_key() {
        let profile: FarmerProfile = serde_json::from_str(
            r#"{"landHolding": "1-2-hectares", "cropsGrown": ["rice", "pulses"]}"#,
        )
        .expect("profile parses");

        assert_eq!(
            profile.land_holding_category,
            Some(LandHolding::OneToTwoHectares)
        );
        assert_eq!(profile.crops_grown, vec![Crop::Rice, Crop::Pulses]);
        assert_eq!(profile.farming_type, None);
    }

    #[test]
    fn unanswered_attributes_fail_predicates_that_need_them() {
        let empty = FarmerProfile::default();
        assert!(Qualification::Universal.admits(&empty));
        assert!(!Qualification::RequiresLand.admits(&empty));
        assert!(!Qualification::LandHoldingIn(vec![LandHolding::NoLand]).admits(&empty));
        assert!(!Qualification::FarmingTypeIn(vec![FarmingType::Organic]).admits(&empty));
        assert!(!Qualification::IrrigationSourceIn(vec![IrrigationSource::Drip]).admits(&empty));
        assert!(!Qualification::GrowsAnyCrop(vec![Crop::Wheat]).admits(&empty));
    }

    #[test]
    fn combined_predicates_require_every_part() {
        let predicate = Qualification::AllOf(vec![
            Qualification::RequiresLand,
            Qualification::IrrigationSourceIn(vec![IrrigationSource::RainFed]),
        ]);

        let mut profile = FarmerProfile::with_land_holding(LandHolding::TwoToFiveHectares);
        assert!(!predicate.admits(&profile));

        profile.irrigation_source = Some(IrrigationSource::RainFed);
        assert!(predicate.admits(&profile));

        profile.land_holding_category = Some(LandHolding::NoLand);
        assert!(!predicate.admits(&profile));
    }

    #[test]
    fn qualification_deserializes_from_tagged_json() {
        let predicate: Qualification = serde_json::from_str(
            r#"{"kind": "land-holding-in", "values": ["less-than-1-hectare", "1-2-hectares"]}"#,
        )
        .expect("predicate parses");
        assert_eq!(
            predicate,
            Qualification::LandHoldingIn(vec![
                LandHolding::LessThanOneHectare,
                LandHolding::OneToTwoHectares
            ])
        );

        let predicate: Qualification =
            serde_json::from_str(r#"{"kind": "requires-land"}"#).expect("unit predicate parses");
        assert_eq!(predicate, Qualification::RequiresLand);
    }
}

use serde::{Deserialize, Serialize};

use super::domain::{FarmerProfile, LandHolding, Scheme, SchemePriority, TargetFarmer};

pub const MIN_SCORE: i16 = 0;
pub const MAX_SCORE: i16 = 100;

/// Scoring weights applied to every qualifying scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub base_score: i16,
    pub affinity_bonuses: Vec<AffinityBonus>,
    pub high_priority_bonus: i16,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            affinity_bonuses: vec![
                AffinityBonus {
                    target: TargetFarmer::Small,
                    land_holding: LandHolding::LessThanOneHectare,
                    bonus: 30,
                },
                AffinityBonus {
                    target: TargetFarmer::Marginal,
                    land_holding: LandHolding::OneToTwoHectares,
                    bonus: 25,
                },
            ],
            high_priority_bonus: 10,
        }
    }
}

/// Bonus granted when a scheme targets `target` and the farmer reports `land_holding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffinityBonus {
    pub target: TargetFarmer,
    pub land_holding: LandHolding,
    pub bonus: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    TargetAffinity,
    HighPriority,
}

/// Discrete contribution to a match score, kept for transparent explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i16,
    pub notes: String,
}

/// Qualifying scheme with its clamped match score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredScheme<'a> {
    pub scheme: &'a Scheme,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

/// Stateless evaluator ranking schemes against a farmer profile.
#[derive(Debug, Clone, Default)]
pub struct EligibilityScorer {
    config: ScoringConfig,
}

impl EligibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Every qualifying candidate, highest score first. Ties keep candidate order.
    pub fn score_all<'a>(
        &self,
        profile: &FarmerProfile,
        candidates: &'a [Scheme],
    ) -> Vec<ScoredScheme<'a>> {
        let mut scored = candidates
            .iter()
            .filter(|scheme| scheme.qualification.admits(profile))
            .map(|scheme| self.score(profile, scheme))
            .collect::<Vec<_>>();

        // `sort_by` is stable, which keeps declaration order among equal scores.
        scored.sort_by(|left, right| right.score.cmp(&left.score));
        scored
    }

    pub fn score<'a>(&self, profile: &FarmerProfile, scheme: &'a Scheme) -> ScoredScheme<'a> {
        let mut components = vec![ScoreComponent {
            factor: ScoreFactor::Base,
            points: self.config.base_score,
            notes: "base match score".to_string(),
        }];

        if let Some(holding) = profile.land_holding_category {
            for affinity in &self.config.affinity_bonuses {
                if affinity.land_holding == holding && scheme.targets(affinity.target) {
                    components.push(ScoreComponent {
                        factor: ScoreFactor::TargetAffinity,
                        points: affinity.bonus,
                        notes: format!(
                            "scheme targets {:?} farmers and holding is {}",
                            affinity.target,
                            holding.label().to_lowercase()
                        ),
                    });
                }
            }
        }

        if scheme.priority == SchemePriority::High {
            components.push(ScoreComponent {
                factor: ScoreFactor::HighPriority,
                points: self.config.high_priority_bonus,
                notes: "high-priority scheme".to_string(),
            });
        }

        let total = components
            .iter()
            .map(|component| i32::from(component.points))
            .sum::<i32>();
        let score = total.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8;

        ScoredScheme {
            scheme,
            score,
            components,
        }
    }
}

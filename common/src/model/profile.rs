//! The user's health profile: the demographic and delivery form the builder
//! starts from, plus the goals and allergies the user told us about.

use crate::catalog::stacks::health_goal;
use crate::model::catalog::Demographic;
use crate::model::formula::DeliveryForm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_PROFILE_GOALS: usize = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("at most {max} health goals can be selected (got {count})")]
    TooManyGoals { count: usize, max: usize },

    #[error("unknown health goal '{0}'")]
    UnknownGoal(String),

    #[error("allergies must not be blank")]
    BlankAllergy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub gender: Option<Demographic>,
    #[serde(default)]
    pub preferred_form: Option<DeliveryForm>,
    /// Ids from the health goal list.
    #[serde(default)]
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl HealthProfile {
    /// Checks the goal ids and returns a copy with allergies trimmed and
    /// duplicate goals dropped.
    pub fn normalized(&self) -> Result<HealthProfile, ProfileError> {
        let mut goals: Vec<String> = Vec::with_capacity(self.health_goals.len());
        for id in &self.health_goals {
            if health_goal(id).is_none() {
                return Err(ProfileError::UnknownGoal(id.clone()));
            }
            if !goals.contains(id) {
                goals.push(id.clone());
            }
        }
        if goals.len() > MAX_PROFILE_GOALS {
            return Err(ProfileError::TooManyGoals {
                count: goals.len(),
                max: MAX_PROFILE_GOALS,
            });
        }

        let allergies = self
            .allergies
            .iter()
            .map(|a| a.trim())
            .map(|a| if a.is_empty() { Err(ProfileError::BlankAllergy) } else { Ok(a.to_string()) })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HealthProfile {
            gender: self.gender,
            preferred_form: self.preferred_form,
            health_goals: goals,
            allergies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_profile_is_the_default_on_the_wire() {
        let profile: HealthProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, HealthProfile::default());

        let profile: HealthProfile =
            serde_json::from_str(r#"{"gender":"women","preferred_form":"gummy"}"#).unwrap();
        assert_eq!(profile.gender, Some(Demographic::Women));
        assert_eq!(profile.preferred_form, Some(DeliveryForm::Gummy));
    }

    #[test]
    fn normalizes_goals_and_allergies() {
        let profile = HealthProfile {
            health_goals: vec!["sleep".into(), "energy".into(), "sleep".into()],
            allergies: vec!["  nuts ".into()],
            ..Default::default()
        };
        let normalized = profile.normalized().unwrap();
        assert_eq!(normalized.health_goals, vec!["sleep", "energy"]);
        assert_eq!(normalized.allergies, vec!["nuts"]);
    }

    #[test]
    fn rejects_unknown_or_too_many_goals() {
        let unknown = HealthProfile {
            health_goals: vec!["flight".into()],
            ..Default::default()
        };
        assert_eq!(unknown.normalized(), Err(ProfileError::UnknownGoal("flight".into())));

        let greedy = HealthProfile {
            health_goals: ["energy", "muscle", "beauty", "brain", "sleep"]
                .iter()
                .map(|g| g.to_string())
                .collect(),
            ..Default::default()
        };
        assert_eq!(
            greedy.normalized(),
            Err(ProfileError::TooManyGoals { count: 5, max: 4 })
        );

        let blank = HealthProfile {
            allergies: vec!["  ".into()],
            ..Default::default()
        };
        assert_eq!(blank.normalized(), Err(ProfileError::BlankAllergy));
    }
}

//! Self-service profile edits

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::{DomainError, MemberId};
use crate::config::SkillDefaults;
use crate::domains::member::models::{Availability, Member, ProfileChanges, SkillInput};
use crate::kernel::ServerDeps;

/// Profile edit request. Absent fields are left unchanged; skill lists are
/// replaced wholesale when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub skills_offered: Option<Vec<SkillInput>>,
    #[serde(default)]
    pub skills_wanted: Option<Vec<SkillInput>>,
}

impl ProfileUpdate {
    /// Validate and resolve default skill levels
    pub fn into_changes(self, defaults: &SkillDefaults) -> Result<ProfileChanges, DomainError> {
        let name = match self.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(DomainError::validation("Name cannot be empty"));
                }
                Some(name)
            }
            None => None,
        };

        let skills_offered = self
            .skills_offered
            .map(|skills| {
                skills
                    .into_iter()
                    .map(|s| s.into_entry(defaults.offered_level))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let skills_wanted = self
            .skills_wanted
            .map(|skills| {
                skills
                    .into_iter()
                    .map(|s| s.into_entry(defaults.wanted_level))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(ProfileChanges {
            name,
            location: self.location.map(|l| l.trim().to_string()),
            availability: self.availability,
            is_public: self.is_public,
            skills_offered,
            skills_wanted,
        })
    }
}

/// Apply a member's own profile edits.
///
/// Offered skills whose (skill, description, level) did not change keep their
/// review outcome; new or edited entries go back to pending review.
pub async fn update_profile(
    member_id: MemberId,
    update: ProfileUpdate,
    deps: &ServerDeps,
) -> Result<Member, DomainError> {
    let changes = update.into_changes(&deps.skill_defaults)?;
    let updated = deps.members.update_profile(member_id, &changes).await?;

    info!(
        member_id = %member_id,
        skills_offered = updated.skills_offered.len(),
        skills_wanted = updated.skills_wanted.len(),
        "Profile updated"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::SkillLevel;

    fn input(skill: &str, level: Option<SkillLevel>) -> SkillInput {
        SkillInput {
            skill: skill.to_string(),
            description: None,
            level,
        }
    }

    #[test]
    fn test_default_levels_per_list() {
        let update = ProfileUpdate {
            skills_offered: Some(vec![input("Guitar", None)]),
            skills_wanted: Some(vec![input("Spanish", None), input("Chess", Some(SkillLevel::Expert))]),
            ..Default::default()
        };

        let changes = update.into_changes(&SkillDefaults::default()).unwrap();
        let offered = changes.skills_offered.unwrap();
        let wanted = changes.skills_wanted.unwrap();

        assert_eq!(offered[0].level, SkillLevel::Intermediate);
        assert_eq!(wanted[0].level, SkillLevel::Beginner);
        assert_eq!(wanted[1].level, SkillLevel::Expert);
    }

    #[test]
    fn test_blank_name_rejected() {
        let update = ProfileUpdate {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            update.into_changes(&SkillDefaults::default()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_skill_name_rejected() {
        let update = ProfileUpdate {
            skills_offered: Some(vec![input("", None)]),
            ..Default::default()
        };
        assert!(update.into_changes(&SkillDefaults::default()).is_err());
    }
}

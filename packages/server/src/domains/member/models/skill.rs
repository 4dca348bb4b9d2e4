use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{DomainError, MemberId, SkillEntryId};

/// Self-assessed proficiency attached to a skill entry or swap snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "Beginner"),
            SkillLevel::Intermediate => write!(f, "Intermediate"),
            SkillLevel::Advanced => write!(f, "Advanced"),
            SkillLevel::Expert => write!(f, "Expert"),
        }
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Advanced" => Ok(SkillLevel::Advanced),
            "Expert" => Ok(SkillLevel::Expert),
            _ => Err(anyhow::anyhow!("Invalid skill level: {}", s)),
        }
    }
}

/// Which list on the member profile an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Offered,
    Wanted,
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillKind::Offered => write!(f, "offered"),
            SkillKind::Wanted => write!(f, "wanted"),
        }
    }
}

impl std::str::FromStr for SkillKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "offered" => Ok(SkillKind::Offered),
            "wanted" => Ok(SkillKind::Wanted),
            _ => Err(anyhow::anyhow!("Invalid skill kind: {}", s)),
        }
    }
}

/// One advertised skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: SkillEntryId,
    pub skill: String,
    pub description: Option<String>,
    pub level: SkillLevel,
}

impl SkillEntry {
    /// Same advertised content, ignoring identity.
    pub fn same_content(&self, other: &SkillEntry) -> bool {
        self.skill == other.skill
            && self.description == other.description
            && self.level == other.level
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.skill.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Moderation status derived from the two review flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Review sub-state carried by every offered skill.
///
/// `is_approved` and `is_rejected` are never both true; both false means pending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    pub is_approved: bool,
    pub is_rejected: bool,
    pub rejection_reason: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<MemberId>,
}

impl ReviewState {
    pub fn status(&self) -> ReviewStatus {
        match (self.is_approved, self.is_rejected) {
            (true, _) => ReviewStatus::Approved,
            (false, true) => ReviewStatus::Rejected,
            (false, false) => ReviewStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status() == ReviewStatus::Pending
    }
}

/// An offered skill together with its review sub-state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferedSkill {
    #[serde(flatten)]
    pub entry: SkillEntry,
    #[serde(flatten)]
    pub review: ReviewState,
}

impl OfferedSkill {
    pub fn pending(entry: SkillEntry) -> Self {
        Self {
            entry,
            review: ReviewState::default(),
        }
    }
}

/// Skill as submitted by a member editing their profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInput {
    pub skill: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: Option<SkillLevel>,
}

impl SkillInput {
    /// Validate and turn into a fresh entry, applying `default_level` when absent.
    pub fn into_entry(self, default_level: SkillLevel) -> Result<SkillEntry, DomainError> {
        let skill = self.skill.trim().to_string();
        if skill.is_empty() {
            return Err(DomainError::validation("Skill name is required"));
        }

        Ok(SkillEntry {
            id: SkillEntryId::new(),
            skill,
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            level: self.level.unwrap_or(default_level),
        })
    }
}

/// Replace an offered-skill list, keeping identity and review state of entries
/// whose advertised content did not change. Edited or new entries start pending.
pub fn merge_offered_skills(existing: &[OfferedSkill], incoming: Vec<SkillEntry>) -> Vec<OfferedSkill> {
    let mut unclaimed: Vec<&OfferedSkill> = existing.iter().collect();

    incoming
        .into_iter()
        .map(|entry| {
            match unclaimed
                .iter()
                .position(|kept| kept.entry.same_content(&entry))
            {
                Some(idx) => unclaimed.remove(idx).clone(),
                None => OfferedSkill::pending(entry),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, level: SkillLevel) -> SkillEntry {
        SkillEntry {
            id: SkillEntryId::new(),
            skill: name.to_string(),
            description: None,
            level,
        }
    }

    #[test]
    fn test_review_status_from_flags() {
        let mut review = ReviewState::default();
        assert_eq!(review.status(), ReviewStatus::Pending);

        review.is_approved = true;
        assert_eq!(review.status(), ReviewStatus::Approved);

        review.is_approved = false;
        review.is_rejected = true;
        assert_eq!(review.status(), ReviewStatus::Rejected);
    }

    #[test]
    fn test_skill_input_requires_name() {
        let input = SkillInput {
            skill: "   ".to_string(),
            description: None,
            level: None,
        };
        assert!(matches!(
            input.into_entry(SkillLevel::Intermediate),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_skill_input_applies_default_level() {
        let input = SkillInput {
            skill: " Guitar ".to_string(),
            description: Some("".to_string()),
            level: None,
        };
        let entry = input.into_entry(SkillLevel::Beginner).unwrap();
        assert_eq!(entry.skill, "Guitar");
        assert_eq!(entry.level, SkillLevel::Beginner);
        assert_eq!(entry.description, None);
    }

    #[test]
    fn test_merge_keeps_review_of_unchanged_entries() {
        let mut approved = OfferedSkill::pending(entry("Guitar", SkillLevel::Expert));
        approved.review.is_approved = true;
        let rejected = {
            let mut s = OfferedSkill::pending(entry("Juggling", SkillLevel::Beginner));
            s.review.is_rejected = true;
            s.review.rejection_reason = Some("not a teachable skill".to_string());
            s
        };
        let existing = vec![approved.clone(), rejected];

        let merged = merge_offered_skills(
            &existing,
            vec![
                entry("Guitar", SkillLevel::Expert),
                entry("Juggling", SkillLevel::Advanced),
            ],
        );

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].entry.id, approved.entry.id);
        assert!(merged[0].review.is_approved);
        assert!(merged[1].review.is_pending());
    }

    #[test]
    fn test_matches_name_is_case_insensitive() {
        let e = entry("Photography", SkillLevel::Advanced);
        assert!(e.matches_name("photography"));
        assert!(e.matches_name(" PHOTOGRAPHY "));
        assert!(!e.matches_name("photo"));
    }
}

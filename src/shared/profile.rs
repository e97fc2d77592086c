//! Profile Data Structure
//!
//! A profile is an aggregate document owned by exactly one user (at most one
//! profile per user). It embeds the `experience` and `education` collections,
//! both kept newest-first. Entries in those collections have no author of
//! their own; they belong to the profile owner.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Social network links of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A job entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// A school entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// A profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// Owner of the profile
    pub user: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub social: Social,
    pub date: DateTime<Utc>,
}

/// Partial update of a profile.
///
/// Every field is independently optional; `None` leaves the stored value
/// untouched. `social` is the exception: it always replaces the stored links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub skills: Option<Vec<String>>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
}

impl Profile {
    /// Create an empty profile for `owner`.
    pub fn new(owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: owner,
            company: None,
            website: None,
            location: None,
            status: String::new(),
            skills: Vec::new(),
            bio: None,
            githubusername: None,
            experience: Vec::new(),
            education: Vec::new(),
            social: Social::default(),
            date: Utc::now(),
        }
    }

    /// Apply a partial update to this profile.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(githubusername) = update.githubusername {
            self.githubusername = Some(githubusername);
        }
        self.social = update.social;
    }
}

/// Split a comma separated skill list, trimming blanks.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reject a date range whose end precedes its start.
pub fn check_date_range(from: NaiveDate, to: Option<NaiveDate>) -> Result<(), SharedError> {
    match to {
        Some(to) if to < from => Err(SharedError::validation(
            "to",
            "End date must not precede start date",
        )),
        _ => Ok(()),
    }
}

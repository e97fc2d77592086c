//! Profile sub-entry mutations
//!
//! Experience and education entries have no author of their own. The
//! profile they live in is always looked up by the acting user's id, so the
//! owner check is implied by the lookup and entries are located by their id.

use uuid::Uuid;

use crate::backend::mutator::{self, MutationError};
use crate::shared::{Education, Experience, Profile};

pub const EXPERIENCE_NOT_FOUND: &str = "Experience not found";
pub const EDUCATION_NOT_FOUND: &str = "Education not found";
pub const NOT_AUTHORIZED: &str = "User not authorized";

/// Add an experience entry on behalf of `actor`, newest first.
pub fn add_experience(profile: &mut Profile, actor: Uuid, entry: Experience) -> Result<(), MutationError> {
    mutator::authorize_owner(&profile.user, &actor, NOT_AUTHORIZED)?;
    mutator::prepend(&mut profile.experience, entry);
    Ok(())
}

/// Remove experience `id` on behalf of `actor`.
pub fn remove_experience(profile: &mut Profile, actor: Uuid, id: Uuid) -> Result<Experience, MutationError> {
    mutator::authorize_owner(&profile.user, &actor, NOT_AUTHORIZED)?;
    mutator::remove_by_key(&mut profile.experience, &id, |entry| &entry.id, EXPERIENCE_NOT_FOUND)
}

/// Add an education entry on behalf of `actor`, newest first.
pub fn add_education(profile: &mut Profile, actor: Uuid, entry: Education) -> Result<(), MutationError> {
    mutator::authorize_owner(&profile.user, &actor, NOT_AUTHORIZED)?;
    mutator::prepend(&mut profile.education, entry);
    Ok(())
}

/// Remove education `id` on behalf of `actor`.
pub fn remove_education(profile: &mut Profile, actor: Uuid, id: Uuid) -> Result<Education, MutationError> {
    mutator::authorize_owner(&profile.user, &actor, NOT_AUTHORIZED)?;
    mutator::remove_by_key(&mut profile.education, &id, |entry| &entry.id, EDUCATION_NOT_FOUND)
}

/**
 * Profile Handlers
 *
 * # Endpoints
 *
 * - `GET /api/profile/me` - caller's profile (auth)
 * - `POST /api/profile` - create or update the caller's profile (auth)
 * - `GET /api/profile` - every profile
 * - `GET /api/profile/user/{user_id}` - profile of one user
 * - `DELETE /api/profile` - delete the caller's posts, profile and account (auth)
 * - `PUT /api/profile/experience` - add experience (auth)
 * - `DELETE /api/profile/experience/{exp_id}` - remove experience (auth)
 * - `PUT /api/profile/education` - add education (auth)
 * - `DELETE /api/profile/education/{edu_id}` - remove education (auth)
 * - `GET /api/profile/github/{username}` - latest GitHub repositories
 *
 * Profiles returned by the read and upsert endpoints have their `user`
 * field replaced by the owner's public summary `{id, name, avatar}`.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::backend::auth::handlers::me::USER_NOT_FOUND;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::handlers::{parse_id, MessageResponse};
use crate::backend::profiles::github::GithubClient;
use crate::backend::profiles::ops;
use crate::backend::store::{PostStore, ProfileStore, Store, UserStore};
use crate::backend::validation::ValidJson;
use crate::shared::profile::{check_date_range, parse_skills};
use crate::shared::{Education, Experience, Profile, ProfileUpdate, Social, User, UserSummary};

pub const NO_PROFILE: &str = "There is no profile for this user";
pub const PROFILE_NOT_FOUND: &str = "Profile not found";

/// Profile fields sent by the client
///
/// `status` and `skills` are required. Every other field is applied only
/// when present and non-empty. Social links are rebuilt on every upsert.
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct ProfileRequest {
    #[validate(custom(function = "validate_status", message = "Status is required"))]
    pub status: String,
    /// Comma separated list
    #[validate(custom(function = "validate_skills", message = "Skills is required"))]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(ValidationError::new("status"));
    }
    Ok(())
}

/// At least one skill must survive splitting and trimming.
fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if parse_skills(skills).is_empty() {
        return Err(ValidationError::new("skills"));
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ProfileRequest> for ProfileUpdate {
    fn from(request: ProfileRequest) -> Self {
        ProfileUpdate {
            company: non_empty(request.company),
            website: non_empty(request.website),
            location: non_empty(request.location),
            status: non_empty(Some(request.status)),
            skills: Some(parse_skills(&request.skills)).filter(|skills| !skills.is_empty()),
            bio: non_empty(request.bio),
            githubusername: non_empty(request.githubusername),
            social: Social {
                youtube: non_empty(request.youtube),
                twitter: non_empty(request.twitter),
                facebook: non_empty(request.facebook),
                linkedin: non_empty(request.linkedin),
                instagram: non_empty(request.instagram),
            },
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct ExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct EducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub fieldofstudy: String,
    #[validate(required(message = "From date is required"))]
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// `from` after validation, with the range checked against `to`
fn checked_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<NaiveDate, BackendError> {
    let from = from.ok_or_else(|| BackendError::validation("from", "From date is required"))?;
    check_date_range(from, to)?;
    Ok(from)
}

/// Serialise a profile with `user` replaced by the owner's summary, or
/// `null` when the owner no longer exists.
fn populate(profile: &Profile, owner: Option<&User>) -> Result<Value, BackendError> {
    let mut value = serde_json::to_value(profile).map_err(BackendError::internal)?;
    value["user"] = match owner {
        Some(user) => serde_json::to_value(UserSummary::from(user)).map_err(BackendError::internal)?,
        None => Value::Null,
    };
    Ok(value)
}

async fn populate_from_store(store: &dyn Store, profile: &Profile) -> Result<Value, BackendError> {
    let owner = store.find_user_by_id(profile.user).await?;
    populate(profile, owner.as_ref())
}

async fn own_profile(store: &dyn Store, user_id: Uuid) -> Result<Profile, BackendError> {
    store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_PROFILE))
}

/// Caller's own profile
pub async fn get_my_profile(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Value>, BackendError> {
    let profile = own_profile(store.as_ref(), auth.user_id).await?;
    Ok(Json(populate_from_store(store.as_ref(), &profile).await?))
}

/// Create the caller's profile, or update the fields that were sent
pub async fn upsert_profile(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    ValidJson(request): ValidJson<ProfileRequest>,
) -> Result<Json<Value>, BackendError> {
    let owner = store.find_user_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("Token subject no longer exists: {}", auth.user_id);
        BackendError::not_found(USER_NOT_FOUND)
    })?;

    let mut profile = match store.find_profile_by_user(auth.user_id).await? {
        Some(existing) => existing,
        None => {
            tracing::info!("Creating profile for {}", auth.user_id);
            Profile::new(auth.user_id)
        }
    };
    profile.apply(request.into());
    store.save_profile(&profile).await?;

    Ok(Json(populate(&profile, Some(&owner))?))
}

pub async fn list_profiles(State(store): State<Arc<dyn Store>>) -> Result<Json<Vec<Value>>, BackendError> {
    let profiles = store.list_profiles().await?;
    let mut populated = Vec::with_capacity(profiles.len());
    for profile in &profiles {
        populated.push(populate_from_store(store.as_ref(), profile).await?);
    }
    Ok(Json(populated))
}

pub async fn get_profile_by_user(
    State(store): State<Arc<dyn Store>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let user_id = parse_id(&user_id, PROFILE_NOT_FOUND)?;
    let profile = store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(PROFILE_NOT_FOUND))?;
    Ok(Json(populate_from_store(store.as_ref(), &profile).await?))
}

/// Delete the caller's posts, profile and account.
///
/// Likes and comments the caller left on other users' posts are kept.
pub async fn delete_account(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    let posts = store.delete_posts_by_user(auth.user_id).await?;
    store.delete_profile_by_user(auth.user_id).await?;
    store.delete_user(auth.user_id).await?;

    tracing::info!("Account {} deleted along with {} posts", auth.user_id, posts);
    Ok(Json(MessageResponse {
        msg: "User deleted".to_string(),
    }))
}

pub async fn add_experience(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    ValidJson(request): ValidJson<ExperienceRequest>,
) -> Result<Json<Profile>, BackendError> {
    let from = checked_range(request.from, request.to)?;
    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;

    let entry = Experience {
        id: Uuid::new_v4(),
        title: request.title,
        company: request.company,
        location: non_empty(request.location),
        from,
        to: request.to,
        current: request.current,
        description: non_empty(request.description),
    };
    ops::add_experience(&mut profile, auth.user_id, entry)?;
    store.save_profile(&profile).await?;
    Ok(Json(profile))
}

pub async fn remove_experience(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;
    let exp_id = parse_id(&exp_id, ops::EXPERIENCE_NOT_FOUND)?;
    ops::remove_experience(&mut profile, auth.user_id, exp_id)?;
    store.save_profile(&profile).await?;
    Ok(Json(profile))
}

pub async fn add_education(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    ValidJson(request): ValidJson<EducationRequest>,
) -> Result<Json<Profile>, BackendError> {
    let from = checked_range(request.from, request.to)?;
    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;

    let entry = Education {
        id: Uuid::new_v4(),
        school: request.school,
        degree: request.degree,
        fieldofstudy: request.fieldofstudy,
        from,
        to: request.to,
        current: request.current,
        description: non_empty(request.description),
    };
    ops::add_education(&mut profile, auth.user_id, entry)?;
    store.save_profile(&profile).await?;
    Ok(Json(profile))
}

pub async fn remove_education(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;
    let edu_id = parse_id(&edu_id, ops::EDUCATION_NOT_FOUND)?;
    ops::remove_education(&mut profile, auth.user_id, edu_id)?;
    store.save_profile(&profile).await?;
    Ok(Json(profile))
}

pub async fn github_repos(
    State(github): State<GithubClient>,
    Path(username): Path<String>,
) -> Result<Json<Value>, BackendError> {
    Ok(Json(github.latest_repos(&username).await?))
}

/**
 * API Routes
 *
 * # Public
 * - `POST /api/users` - register
 * - `POST /api/auth` - login
 * - `GET /api/profile` - all profiles
 * - `GET /api/profile/user/{user_id}` - profile by owner
 * - `GET /api/profile/github/{username}` - GitHub repositories
 *
 * # Behind the auth middleware
 * - `GET /api/auth` - current user
 * - `/api/posts/...` - posts, likes, comments
 * - `GET /api/profile/me`, `POST /api/profile`, `DELETE /api/profile`
 * - `/api/profile/experience...`, `/api/profile/education...`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts;
use crate::backend::profiles;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/auth", post(login))
        .route("/api/profile", get(profiles::list_profiles))
        .route("/api/profile/user/{user_id}", get(profiles::get_profile_by_user))
        .route("/api/profile/github/{username}", get(profiles::github_repos))
}

/// Routes that require a verified token
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth", get(get_me))
        // Posts
        .route("/api/posts", post(posts::create_post).get(posts::list_posts))
        .route("/api/posts/{post_id}", get(posts::get_post).delete(posts::delete_post))
        .route("/api/posts/like/{post_id}", put(posts::like_post))
        .route("/api/posts/unlike/{post_id}", put(posts::unlike_post))
        .route("/api/posts/comment/{post_id}", post(posts::add_comment))
        .route("/api/posts/comment/{post_id}/{comment_id}", delete(posts::remove_comment))
        // Own profile
        .route("/api/profile/me", get(profiles::get_my_profile))
        .route("/api/profile", post(profiles::upsert_profile).delete(profiles::delete_account))
        .route("/api/profile/experience", put(profiles::add_experience))
        .route("/api/profile/experience/{exp_id}", delete(profiles::remove_experience))
        .route("/api/profile/education", put(profiles::add_education))
        .route("/api/profile/education/{edu_id}", delete(profiles::remove_education))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router.merge(public_routes()).merge(protected_routes(app_state))
}

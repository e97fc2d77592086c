//! Post mutations
//!
//! Like, unlike, comment and the owner check for deletion, expressed on an
//! in-memory [`Post`]. Handlers load the post, call one of these and save
//! the whole document back.

use uuid::Uuid;

use crate::backend::mutator::{self, MutationError};
use crate::shared::{Comment, Like, Post, User};

pub const ALREADY_LIKED: &str = "Post already liked";
pub const NOT_LIKED: &str = "Post has not yet been liked";
pub const COMMENT_NOT_FOUND: &str = "Comment does not exist";
pub const NOT_AUTHORIZED: &str = "User not authorized";

/// Add a like from `actor`. A user can like a post once.
pub fn like(post: &mut Post, actor: Uuid) -> Result<(), MutationError> {
    mutator::append_unique(&mut post.likes, Like { user: actor }, |like| &like.user, ALREADY_LIKED)
}

/// Remove the like left by `actor`.
pub fn unlike(post: &mut Post, actor: Uuid) -> Result<(), MutationError> {
    mutator::remove_by_key(&mut post.likes, &actor, |like| &like.user, NOT_LIKED).map(|_| ())
}

/// Add a comment written by `author`, newest first.
pub fn add_comment(post: &mut Post, author: &User, text: String) -> Uuid {
    let comment = Comment::new(author, text);
    let id = comment.id;
    mutator::prepend(&mut post.comments, comment);
    id
}

/// Remove comment `comment_id`; only its author may do so, the post owner
/// included.
pub fn remove_comment(post: &mut Post, comment_id: Uuid, actor: Uuid) -> Result<Comment, MutationError> {
    mutator::remove_authored(
        &mut post.comments,
        &comment_id,
        &actor,
        |comment| &comment.id,
        |comment| &comment.user,
        COMMENT_NOT_FOUND,
        NOT_AUTHORIZED,
    )
}

/// Check that `actor` may delete the post.
pub fn authorize_delete(post: &Post, actor: Uuid) -> Result<(), MutationError> {
    mutator::authorize_owner(&post.user, &actor, NOT_AUTHORIZED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(name: &str) -> User {
        User::new(name.into(), format!("{}@x.com", name), String::new())
    }

    #[test]
    fn test_like_twice_is_rejected() {
        let owner = user("a");
        let fan = user("b");
        let mut post = Post::new(&owner, "hello".into());

        like(&mut post, fan.id).unwrap();
        assert_eq!(like(&mut post, fan.id), Err(MutationError::AlreadyExists(ALREADY_LIKED)));
        assert_eq!(post.likes, vec![Like { user: fan.id }]);
    }

    #[test]
    fn test_newest_like_first() {
        let mut post = Post::new(&user("a"), "hello".into());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        like(&mut post, first).unwrap();
        like(&mut post, second).unwrap();

        assert_eq!(post.likes, vec![Like { user: second }, Like { user: first }]);
    }

    #[test]
    fn test_like_unlike_round_trip() {
        let mut post = Post::new(&user("a"), "hello".into());
        like(&mut post, Uuid::new_v4()).unwrap();
        let before = post.likes.clone();
        let actor = Uuid::new_v4();

        like(&mut post, actor).unwrap();
        unlike(&mut post, actor).unwrap();

        assert_eq!(post.likes, before);
    }

    #[test]
    fn test_unlike_without_like() {
        let mut post = Post::new(&user("a"), "hello".into());
        assert_eq!(unlike(&mut post, Uuid::new_v4()), Err(MutationError::NotFound(NOT_LIKED)));
    }

    #[test]
    fn test_comment_is_denormalized() {
        let mut author = user("b");
        let mut post = Post::new(&user("a"), "hello".into());

        let id = add_comment(&mut post, &author, "nice".into());
        author.name = "renamed".into();

        assert_eq!(post.comments[0].id, id);
        assert_eq!(post.comments[0].user, author.id);
        assert_eq!(post.comments[0].name, "b");
    }

    #[test]
    fn test_post_owner_cannot_remove_foreign_comment() {
        let owner = user("a");
        let author = user("b");
        let mut post = Post::new(&owner, "hello".into());
        let id = add_comment(&mut post, &author, "nice".into());

        assert_eq!(
            remove_comment(&mut post, id, owner.id),
            Err(MutationError::Forbidden(NOT_AUTHORIZED))
        );
        assert_eq!(post.comments.len(), 1);

        let removed = remove_comment(&mut post, id, author.id).unwrap();
        assert_eq!(removed.id, id);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_remove_comment_picks_requested_one() {
        let author = user("b");
        let mut post = Post::new(&user("a"), "hello".into());
        let older = add_comment(&mut post, &author, "first".into());
        let newer = add_comment(&mut post, &author, "second".into());

        remove_comment(&mut post, older, author.id).unwrap();

        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].id, newer);
    }

    #[test]
    fn test_authorize_delete() {
        let owner = user("a");
        let post = Post::new(&owner, "hello".into());
        assert!(authorize_delete(&post, owner.id).is_ok());
        assert_eq!(
            authorize_delete(&post, Uuid::new_v4()),
            Err(MutationError::Forbidden(NOT_AUTHORIZED))
        );
    }
}

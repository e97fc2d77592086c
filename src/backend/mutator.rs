/**
 * Ownership-Checked Mutation of Nested Collections
 *
 * Posts and profiles embed ordered collections (likes, comments, experience,
 * education). Every change to those collections goes through the operations
 * in this module so that ordering, duplicate and absence rules, and the
 * authorization check are applied the same way everywhere.
 *
 * # Ordering
 *
 * New entries are always inserted at index 0: collections are kept
 * newest-first. Removal never reorders the remaining entries.
 *
 * # Authorization
 *
 * Two rules exist and are not interchangeable:
 * - entries with their own author (comments) may only be removed by that
 *   author, see [`remove_authored`]
 * - entries without an author (profile sub-entries) belong to the document
 *   owner, who is checked with [`authorize_owner`] before the collection is
 *   touched
 *
 * The functions operate on an in-memory document. Persisting it is the
 * caller's job (read-modify-write, last write wins).
 */

use thiserror::Error;

/// Reason a nested-collection mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// An entry with the same key is already present
    #[error("{0}")]
    AlreadyExists(&'static str),

    /// No entry matches the requested key or id
    #[error("{0}")]
    NotFound(&'static str),

    /// The acting user may not perform this mutation
    #[error("{0}")]
    Forbidden(&'static str),
}

/// Insert `entry` at the front of `items`.
pub fn prepend<T>(items: &mut Vec<T>, entry: T) {
    items.insert(0, entry);
}

/// Insert `entry` at the front of `items` unless an entry with the same key
/// is already present.
///
/// # Errors
///
/// * `AlreadyExists(message)` - when `key(entry)` is already in the collection.
///   The collection is left untouched.
pub fn append_unique<T, K, F>(
    items: &mut Vec<T>,
    entry: T,
    key: F,
    message: &'static str,
) -> Result<(), MutationError>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    if items.iter().any(|item| key(item) == key(&entry)) {
        return Err(MutationError::AlreadyExists(message));
    }
    prepend(items, entry);
    Ok(())
}

/// Remove the first entry whose key equals `wanted`.
///
/// # Errors
///
/// * `NotFound(message)` - when no entry has that key
pub fn remove_by_key<T, K, F>(
    items: &mut Vec<T>,
    wanted: &K,
    key: F,
    message: &'static str,
) -> Result<T, MutationError>
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let index = items
        .iter()
        .position(|item| key(item) == wanted)
        .ok_or(MutationError::NotFound(message))?;
    Ok(items.remove(index))
}

/// Remove the entry identified by `id` on behalf of `actor`, allowed only
/// when `actor` is that entry's author.
///
/// The entry is located by its id first; the author check applies to that
/// entry and exactly that entry is removed, even if `actor` authored other
/// entries in the same collection.
///
/// # Errors
///
/// * `NotFound(not_found)` - no entry has this id
/// * `Forbidden(forbidden)` - the entry exists but `actor` is not its author
pub fn remove_authored<T, I, A, FI, FA>(
    items: &mut Vec<T>,
    id: &I,
    actor: &A,
    entry_id: FI,
    author: FA,
    not_found: &'static str,
    forbidden: &'static str,
) -> Result<T, MutationError>
where
    I: PartialEq + ?Sized,
    A: PartialEq + ?Sized,
    FI: Fn(&T) -> &I,
    FA: Fn(&T) -> &A,
{
    let index = items
        .iter()
        .position(|item| entry_id(item) == id)
        .ok_or(MutationError::NotFound(not_found))?;
    if author(&items[index]) != actor {
        return Err(MutationError::Forbidden(forbidden));
    }
    Ok(items.remove(index))
}

/// Check that `actor` owns the aggregate document.
///
/// # Errors
///
/// * `Forbidden(message)` - `actor` is not `owner`
pub fn authorize_owner<K>(owner: &K, actor: &K, message: &'static str) -> Result<(), MutationError>
where
    K: PartialEq + ?Sized,
{
    if owner == actor {
        Ok(())
    } else {
        Err(MutationError::Forbidden(message))
    }
}

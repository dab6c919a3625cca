//! Ranking projection over the user store.

use crate::store::{User, UserStore};

/// Top `limit` users by score. Ties break by earlier registration, then by
/// id, so the ordering is total and two reads of unchanged data agree.
pub fn top(users: &UserStore, limit: usize) -> Vec<User> {
    let mut ranked = users.all();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    });
    ranked.truncate(limit);
    ranked
}

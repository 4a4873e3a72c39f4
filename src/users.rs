//! User lookup keyed by user id.

use std::collections::HashMap;

use crate::types::User;

/// Users keyed by id. Tickets may reference ids that are not present.
pub type UserIndex = HashMap<String, User>;

/// Build the user index. A repeated id keeps the last record seen.
pub fn build_user_index(users: &[User]) -> UserIndex {
    users
        .iter()
        .map(|user| (user.id.clone(), user.clone()))
        .collect()
}

/// Display name for a user id, falling back to a placeholder for unknown ids.
pub fn user_display_name(index: &UserIndex, user_id: &str) -> String {
    match index.get(user_id) {
        Some(user) => user.name.clone(),
        None => format!("Unknown user ({user_id})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, available: bool) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            available,
        }
    }

    #[test]
    fn test_build_user_index_empty() {
        assert!(build_user_index(&[]).is_empty());
    }

    #[test]
    fn test_build_user_index_keys_by_id() {
        let index = build_user_index(&[user("U1", "Ada", true), user("U2", "Grace", false)]);
        assert_eq!(index.len(), 2);
        assert_eq!(index["U1"].name, "Ada");
        assert!(!index["U2"].available);
    }

    #[test]
    fn test_build_user_index_last_write_wins() {
        let index = build_user_index(&[user("U1", "Ada", true), user("U1", "Ada L.", false)]);
        assert_eq!(index.len(), 1);
        assert_eq!(index["U1"].name, "Ada L.");
        assert!(!index["U1"].available);
    }

    #[test]
    fn test_user_display_name_fallback() {
        let index = build_user_index(&[user("U1", "Ada", true)]);
        assert_eq!(user_display_name(&index, "U1"), "Ada");
        assert_eq!(user_display_name(&index, "U9"), "Unknown user (U9)");
    }
}

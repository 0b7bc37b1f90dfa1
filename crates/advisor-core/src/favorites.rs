//! ============================================================================
//! Favorites - Pure set operations over starred build ids
//! ============================================================================
//! The engine only computes set updates and their persisted layout (a JSON
//! array of build ids); storage itself belongs to the caller.
//! ============================================================================

use std::collections::BTreeSet;

use crate::types::BuildId;

/// Set of starred build ids. A BTreeSet keeps the persisted array stable.
pub type FavoriteSet = BTreeSet<BuildId>;

/// Return a new set with the id removed if present, added otherwise.
/// The input set is never mutated.
pub fn toggle(favorites: &FavoriteSet, id: BuildId) -> FavoriteSet {
    let mut next = favorites.clone();
    if !next.remove(&id) {
        next.insert(id);
    }
    next
}

/// Whether a build is starred
pub fn contains(favorites: &FavoriteSet, id: BuildId) -> bool {
    favorites.contains(&id)
}

/// Encode the set in its persisted layout, e.g. "[1,3]"
pub fn to_json(favorites: &FavoriteSet) -> Result<String, serde_json::Error> {
    serde_json::to_string(favorites)
}

/// Decode a persisted favorites array
pub fn from_json(raw: &str) -> Result<FavoriteSet, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_adds_missing_id() {
        let set = FavoriteSet::new();
        let updated = toggle(&set, 2);
        assert!(contains(&updated, 2));
        assert!(!contains(&set, 2), "input set must stay untouched");
    }

    #[test]
    fn test_toggle_removes_present_id() {
        let set: FavoriteSet = [1, 2, 3].into_iter().collect();
        let updated = toggle(&set, 2);
        assert!(!contains(&updated, 2));
        assert_eq!(updated.len(), 2);
        assert_eq!(set.len(), 3, "input set must stay untouched");
    }

    #[test]
    fn test_toggle_leaves_other_ids_alone() {
        let set: FavoriteSet = [1, 3].into_iter().collect();
        let updated = toggle(&set, 2);
        assert!(contains(&updated, 1));
        assert!(contains(&updated, 3));
    }

    #[test]
    fn test_json_layout_is_sorted_id_array() {
        let set: FavoriteSet = [3, 1].into_iter().collect();
        assert_eq!(to_json(&set).unwrap(), "[1,3]");
        assert_eq!(to_json(&FavoriteSet::new()).unwrap(), "[]");
    }

    #[test]
    fn test_json_round_trip() {
        let set: FavoriteSet = [1, 2].into_iter().collect();
        let parsed = from_json(&to_json(&set).unwrap()).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("not json").is_err());
        assert!(from_json("{\"id\": 1}").is_err());
    }

    proptest! {
        #[test]
        fn prop_toggle_twice_is_identity(
            set in proptest::collection::btree_set(any::<BuildId>(), 0..16),
            id: BuildId,
        ) {
            prop_assert_eq!(toggle(&toggle(&set, id), id), set);
        }

        #[test]
        fn prop_toggle_flips_membership(
            set in proptest::collection::btree_set(any::<BuildId>(), 0..16),
            id: BuildId,
        ) {
            let updated = toggle(&set, id);
            prop_assert_ne!(contains(&set, id), contains(&updated, id));
        }
    }
}

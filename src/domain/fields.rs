//! Operations on list-valued draft sub-fields (responsibilities,
//! technologies, batch drafts). All removals keep the list at length >= 1.

/// Appends an empty entry for the user to fill in.
pub fn push_entry(list: &mut Vec<String>) {
    list.push(String::new());
}

/// Removes the entry at `index`. A no-op if the list would drop below one
/// entry or the index is out of bounds. Returns whether anything changed.
pub fn remove_entry(list: &mut Vec<String>, index: usize) -> bool {
    if list.len() <= 1 || index >= list.len() {
        return false;
    }
    list.remove(index);
    true
}

/// Replaces the entry at `index`, preserving the rest.
pub fn set_entry(list: &mut Vec<String>, index: usize, value: impl Into<String>) -> bool {
    match list.get_mut(index) {
        Some(entry) => {
            *entry = value.into();
            true
        }
        None => false,
    }
}

/// Drops blank entries before a draft is sent over the wire.
pub fn prune_blanks(list: &mut Vec<String>) {
    list.retain(|entry| !entry.trim().is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_entry_is_noop_at_length_one() {
        let mut list = vec!["only".to_string()];
        assert!(!remove_entry(&mut list, 0));
        assert_eq!(list, vec!["only".to_string()]);
    }

    #[test]
    fn remove_entry_drops_the_right_index() {
        let mut list = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(remove_entry(&mut list, 1));
        assert_eq!(list, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn remove_entry_ignores_out_of_bounds() {
        let mut list = vec!["a".to_string(), "b".to_string()];
        assert!(!remove_entry(&mut list, 5));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn set_entry_preserves_the_rest() {
        let mut list = vec!["a".to_string(), "b".to_string()];
        assert!(set_entry(&mut list, 0, "edited"));
        assert_eq!(list, vec!["edited".to_string(), "b".to_string()]);
    }

    #[test]
    fn prune_blanks_drops_whitespace_only_entries() {
        let mut list = vec![
            "Wrote code".to_string(),
            "   ".to_string(),
            String::new(),
            "Reviewed PRs".to_string(),
        ];
        prune_blanks(&mut list);
        assert_eq!(list, vec!["Wrote code".to_string(), "Reviewed PRs".to_string()]);
    }
}

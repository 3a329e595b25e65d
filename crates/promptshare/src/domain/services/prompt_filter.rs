//! Feed filtering
//!
//! Client-side search over an already fetched prompt collection.

use crate::domain::Prompt;

/// Keep prompts whose creator username, body or tag contains `search`
/// (case-insensitive). An empty search keeps everything.
pub fn filter_prompts(prompts: &[Prompt], search: &str) -> Vec<Prompt> {
    let needle = search.to_lowercase();
    prompts
        .iter()
        .filter(|p| p.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// The list a feed actually shows.
///
/// An empty filter result falls back to the full collection, so a search
/// with zero matches shows everything.
pub fn visible_prompts<'a>(all: &'a [Prompt], filtered: &'a [Prompt]) -> &'a [Prompt] {
    if filtered.is_empty() {
        all
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(username: &str, prompt: &str, tag: &str) -> Prompt {
        let now = Utc::now();
        Prompt {
            id: Uuid::new_v4(),
            creator: User::new(Uuid::new_v4(), username),
            prompt: prompt.to_string(),
            tag: tag.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn dataset() -> Vec<Prompt> {
        vec![
            post("alice", "hello world", "greeting"),
            post("bob", "goodbye", "farewell"),
        ]
    }

    #[test]
    fn test_search_by_username() {
        let data = dataset();
        let result = filter_prompts(&data, "alice");
        assert_eq!(result, vec![data[0].clone()]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = dataset();
        assert_eq!(filter_prompts(&data, "GOODBYE"), vec![data[1].clone()]);
        assert_eq!(filter_prompts(&data, "Greet"), vec![data[0].clone()]);
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let data = dataset();
        assert_eq!(filter_prompts(&data, ""), data);
    }

    #[test]
    fn test_result_is_matching_subset() {
        let data = dataset();
        for search in ["o", "e", "far", "wor", "x", "BOB"] {
            let result = filter_prompts(&data, search);
            let needle = search.to_lowercase();
            assert!(result.iter().all(|p| data.contains(p)));
            assert!(result.iter().all(|p| p.matches_lowercase(&needle)));
            assert_eq!(
                result.len(),
                data.iter().filter(|p| p.matches_lowercase(&needle)).count()
            );
        }
    }

    #[test]
    fn test_no_match_falls_back_to_all() {
        let data = dataset();
        let filtered = filter_prompts(&data, "zzz");
        assert!(filtered.is_empty());
        assert_eq!(visible_prompts(&data, &filtered), data.as_slice());
    }

    #[test]
    fn test_visible_prefers_filtered() {
        let data = dataset();
        let filtered = filter_prompts(&data, "bob");
        assert_eq!(visible_prompts(&data, &filtered), &data[1..]);
    }
}

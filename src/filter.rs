use crate::catalog::{ProjectRecord, CATEGORY_ALL};

/// Projects matching both the category and the free-text query, in catalog order.
///
/// The category must match exactly unless it is `"All"`. The query is trimmed
/// and lower-cased, then matched as a substring of the title, description and
/// tags; a blank query matches everything the category stage kept.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    category: &str,
    query: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = query.trim().to_lowercase();

    projects
        .iter()
        .filter(|project| category == CATEGORY_ALL || project.category == category)
        .filter(|project| needle.is_empty() || project.search_text().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn ids(projects: &[&ProjectRecord]) -> Vec<u32> {
        projects.iter().map(|project| project.id).collect()
    }

    fn catalog() -> Catalog {
        Catalog::builtin().expect("embedded projects parse")
    }

    #[test]
    fn all_with_blank_query_returns_whole_catalog() {
        let catalog = catalog();

        assert_eq!(ids(&catalog.filter("All", "")), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&catalog.filter("All", "   ")), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_alone_keeps_matching_records_in_order() {
        let catalog = catalog();

        assert_eq!(ids(&catalog.filter("Web", "")), vec![1, 2, 3, 5]);
        assert_eq!(ids(&catalog.filter("Infra", "")), vec![4]);
        assert_eq!(ids(&catalog.filter("Backend", "")), vec![6]);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        assert!(catalog().filter("web", "").is_empty());
    }

    #[test]
    fn unknown_category_yields_nothing() {
        assert!(catalog().filter("Mobile", "").is_empty());
    }

    #[test]
    fn query_matches_tags_case_insensitively() {
        let catalog = catalog();

        assert_eq!(ids(&catalog.filter("All", "mongodb")), vec![2]);
        assert_eq!(
            ids(&catalog.filter("All", "REACT")),
            ids(&catalog.filter("All", "react"))
        );
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        assert_eq!(ids(&catalog().filter("All", "  Automation \t")), vec![6]);
    }

    #[test]
    fn query_matches_across_field_boundaries() {
        // title "Today Talks" followed by the description "Developed ..."
        assert_eq!(ids(&catalog().filter("All", "talks developed")), vec![2]);
    }

    #[test]
    fn query_is_a_substring_not_a_token_match() {
        assert_eq!(ids(&catalog().filter("All", "festiv")), vec![4]);
    }

    #[test]
    fn disjoint_category_and_query_is_empty() {
        assert!(catalog().filter("Backend", "react").is_empty());
    }

    #[test]
    fn results_are_always_an_ordered_subsequence() {
        let catalog = catalog();
        let queries = ["", "react", "node", "css", "portfolio", "zzz", " E "];

        for category in catalog.categories() {
            for query in queries {
                let found = ids(&catalog.filter(category, query));
                let mut sorted = found.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(found, sorted, "category={category:?} query={query:?}");
            }
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_projects(&[], "All", "react").is_empty());
    }
}

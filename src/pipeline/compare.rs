// src/pipeline/compare.rs

//! Comparison of two affair lists.

use crate::models::{AffairList, Comparison};

/// Identifiers of `comparison` that also occur in `reference`, in `comparison` order.
pub fn compare_lists(reference: &AffairList, comparison: &AffairList) -> Comparison {
    let matches = comparison
        .iter()
        .filter(|id| reference.contains(id))
        .cloned()
        .collect();
    Comparison { matches }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::load_lines;
    use crate::services::IdentifierNormalizer;

    fn list(lines: &[&str]) -> AffairList {
        load_lines(&IdentifierNormalizer::new().unwrap(), lines).list
    }

    #[test]
    fn test_intersection() {
        let reference = list(&["21.0001", "21.0002", "21.0003"]);
        let comparison = list(&["21.0002", "21.0004"]);

        let result = compare_lists(&reference, &comparison);
        assert_eq!(result.count(), 1);
        assert_eq!(result.matches[0].as_str(), "20210002");
    }

    #[test]
    fn test_order_follows_comparison_list() {
        let reference = list(&["21.0001", "21.0002", "21.0003"]);
        let comparison = list(&["21.0003", "21.0009", "21.0001"]);

        let result = compare_lists(&reference, &comparison);
        let got: Vec<&str> = result.matches.iter().map(|id| id.as_str()).collect();
        assert_eq!(got, vec!["20210003", "20210001"]);
    }

    #[test]
    fn test_disjoint_and_empty() {
        let reference = list(&["21.0001"]);
        assert_eq!(compare_lists(&reference, &list(&["22.0001"])).count(), 0);
        assert_eq!(compare_lists(&reference, &AffairList::new()).count(), 0);
        assert_eq!(compare_lists(&AffairList::new(), &reference).count(), 0);
    }
}

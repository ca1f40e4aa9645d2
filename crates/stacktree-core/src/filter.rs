//! Order-preserving classification of links by category.
//!
//! Link lists returned by the graph mix elements of every category. The
//! renderers print them grouped per category, always in [`Category::ALL`]
//! order, and within a group in the order the links were recorded.

use crate::element::{Category, Element};

/// Returns the elements of `links` whose category is `category`, preserving
/// their relative order.
///
/// # Examples
///
/// ```
/// use stacktree_core::{Category, Element, filter::by_category};
///
/// let links = [
///     Element::resource("Role"),
///     Element::parameter("Env"),
///     Element::resource("Bucket"),
/// ];
///
/// assert_eq!(
///     by_category(&links, Category::Resource),
///     vec![Element::resource("Role"), Element::resource("Bucket")]
/// );
/// assert!(by_category(&links, Category::Output).is_empty());
/// ```
pub fn by_category(links: &[Element], category: Category) -> Vec<Element> {
    links
        .iter()
        .copied()
        .filter(|link| link.category() == category)
        .collect()
}

/// Groups `links` by category in [`Category::ALL`] order.
///
/// Categories without any matching link are omitted, so every returned group
/// is non-empty.
pub fn group_by_category(links: &[Element]) -> Vec<(Category, Vec<Element>)> {
    Category::ALL
        .into_iter()
        .map(|category| (category, by_category(links, category)))
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_by_category_preserves_order() {
        let links = [
            Element::resource("C"),
            Element::output("X"),
            Element::resource("A"),
            Element::resource("B"),
        ];

        assert_eq!(
            by_category(&links, Category::Resource),
            vec![
                Element::resource("C"),
                Element::resource("A"),
                Element::resource("B"),
            ]
        );
    }

    #[test]
    fn test_by_category_keeps_duplicates() {
        let links = [Element::resource("A"), Element::resource("A")];

        assert_eq!(by_category(&links, Category::Resource).len(), 2);
    }

    #[test]
    fn test_by_category_empty_input() {
        assert!(by_category(&[], Category::Parameter).is_empty());
    }

    #[test]
    fn test_group_by_category_fixed_order_and_no_empty_groups() {
        let links = [
            Element::output("O"),
            Element::resource("R1"),
            Element::resource("R2"),
        ];

        let groups = group_by_category(&links);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::Resource);
        assert_eq!(
            groups[0].1,
            vec![Element::resource("R1"), Element::resource("R2")]
        );
        assert_eq!(groups[1].0, Category::Output);
        assert_eq!(groups[1].1, vec![Element::output("O")]);
    }

    #[test]
    fn test_group_by_category_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    fn arb_element() -> impl Strategy<Value = Element> {
        ("[A-D]", 0..3usize)
            .prop_map(|(name, category)| Element::new(name.as_str(), Category::ALL[category]))
    }

    proptest! {
        #[test]
        fn prop_filter_is_pure(links in prop::collection::vec(arb_element(), 0..16)) {
            for category in Category::ALL {
                let filtered = by_category(&links, category);
                prop_assert!(filtered.iter().all(|link| link.category() == category));
                prop_assert_eq!(
                    filtered.len(),
                    links.iter().filter(|link| link.category() == category).count()
                );
            }

            let grouped: usize = group_by_category(&links).iter().map(|(_, group)| group.len()).sum();
            prop_assert_eq!(grouped, links.len());
        }
    }
}

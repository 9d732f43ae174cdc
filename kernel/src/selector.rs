//! Body-selector mask resolution.
//!
//! A [`crate::model::Selector`] names affected bodies either explicitly or
//! via pair endpoints; resolving it against a world's body-id index yields
//! a boolean mask over the flat body arrays the driver and external-law
//! evaluators both consume.

use std::collections::BTreeMap;

use crate::model::Selector;

/// Resolve `sel` against `index_by_id` (as produced by
/// [`crate::model::World::body_index`]) into a boolean mask of length `n`.
///
/// The mask is the union of explicit `bodies` entries and `pairs`
/// endpoints present in the index. Unknown ids are ignored. The mask
/// defaults to all-true when `sel` is `None`, when it resolves to an
/// empty selector, or when the union of known ids is empty: an empty or
/// unresolved selector selects all bodies.
#[must_use]
pub fn mask_from_selector(sel: Option<&Selector>, index_by_id: &BTreeMap<String, usize>, n: usize) -> Vec<bool> {
    let mut mask = vec![false; n];

    let Some(sel) = sel else {
        mask.fill(true);
        return mask;
    };

    if sel.is_empty() {
        mask.fill(true);
        return mask;
    }

    if let Some(bodies) = &sel.bodies {
        for id in bodies {
            if let Some(&j) = index_by_id.get(id) {
                mask[j] = true;
            }
        }
    }

    if let Some(pairs) = &sel.pairs {
        for [a, b] in pairs {
            if let Some(&ia) = index_by_id.get(a) {
                mask[ia] = true;
            }
            if let Some(&ib) = index_by_id.get(b) {
                mask[ib] = true;
            }
        }
    }

    if mask.iter().all(|&set| !set) {
        mask.fill(true);
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(ids: &[&str]) -> BTreeMap<String, usize> {
        ids.iter().enumerate().map(|(i, id)| ((*id).to_string(), i)).collect()
    }

    #[test]
    fn none_selector_selects_all() {
        let idx = index(&["a", "b", "c"]);
        assert_eq!(mask_from_selector(None, &idx, 3), vec![true, true, true]);
    }

    #[test]
    fn empty_selector_selects_all() {
        let idx = index(&["a", "b"]);
        let sel = Selector::default();
        assert_eq!(mask_from_selector(Some(&sel), &idx, 2), vec![true, true]);
    }

    #[test]
    fn explicit_bodies_union_with_pair_endpoints() {
        let idx = index(&["a", "b", "c", "d"]);
        let sel = Selector {
            bodies: Some(vec!["a".to_string()]),
            pairs: Some(vec![["b".to_string(), "c".to_string()]]),
        };
        assert_eq!(mask_from_selector(Some(&sel), &idx, 4), vec![true, true, true, false]);
    }

    #[test]
    fn unresolved_ids_fall_back_to_all() {
        let idx = index(&["a", "b"]);
        let sel = Selector {
            bodies: Some(vec!["nonexistent".to_string()]),
            pairs: None,
        };
        assert_eq!(mask_from_selector(Some(&sel), &idx, 2), vec![true, true]);
    }

    #[test]
    fn unknown_ids_among_known_are_ignored_not_fallback() {
        let idx = index(&["a", "b", "c"]);
        let sel = Selector {
            bodies: Some(vec!["a".to_string(), "nonexistent".to_string()]),
            pairs: None,
        };
        assert_eq!(mask_from_selector(Some(&sel), &idx, 3), vec![true, false, false]);
    }
}

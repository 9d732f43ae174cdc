//! Drag-family external acceleration evaluators.
//!
//! Accumulates accelerations from every dynamic whose referenced card is
//! not the gravity law; unrecognized card ids are silently skipped so
//! future law families can slot in without touching this evaluator.

use std::collections::BTreeMap;

use crate::model::{Dynamic, LawCard};
use crate::selector::mask_from_selector;
use crate::{LINEAR_DRAG_LAW_ID, QUADRATIC_DRAG_LAW_ID};

/// Resolve a dynamic's referenced card: by key first, then by the card's
/// own declared `id` among the resolved set. Resolving by id and by ref
/// must yield the same card object.
fn card_by_ref<'a>(cards: &'a BTreeMap<String, LawCard>, law_ref: &str) -> Option<&'a LawCard> {
    cards.get(law_ref).or_else(|| cards.values().find(|c| c.id == law_ref))
}

/// Sum external accelerations over `dynamics` at velocity `v_now`, skipping
/// the gravity dynamic (`gravity_card_id`) and any dynamic whose card
/// cannot be resolved. `n` is the body count; the returned array is in
/// body-registration order.
#[must_use]
pub fn external_accelerations(
    dynamics: &[Dynamic],
    cards: &BTreeMap<String, LawCard>,
    gravity_card_id: &str,
    v_now: &[[f64; 3]],
    m: &[f64],
    index_by_id: &BTreeMap<String, usize>,
) -> Vec<[f64; 3]> {
    let n = v_now.len();
    let mut a_ext = vec![[0.0; 3]; n];

    for dyn_ in dynamics {
        if dyn_.law_ref == gravity_card_id {
            continue;
        }
        let Some(card) = card_by_ref(cards, &dyn_.law_ref) else {
            continue;
        };
        let mask = mask_from_selector(dyn_.selector.as_ref(), index_by_id, n);

        match card.id.as_str() {
            LINEAR_DRAG_LAW_ID => {
                let gamma = dyn_.param_or("gamma", card.parameter_value("gamma").unwrap_or(0.0));
                for i in 0..n {
                    if !mask[i] {
                        continue;
                    }
                    let coeff = -gamma / m[i];
                    a_ext[i][0] += coeff * v_now[i][0];
                    a_ext[i][1] += coeff * v_now[i][1];
                    a_ext[i][2] += coeff * v_now[i][2];
                }
            }
            QUADRATIC_DRAG_LAW_ID => {
                let cq = dyn_.param_or("Cq", card.parameter_value("Cq").unwrap_or(0.0));
                for i in 0..n {
                    if !mask[i] {
                        continue;
                    }
                    let speed = (v_now[i][0] * v_now[i][0] + v_now[i][1] * v_now[i][1] + v_now[i][2] * v_now[i][2]).sqrt();
                    let coeff = -cq * speed / m[i];
                    a_ext[i][0] += coeff * v_now[i][0];
                    a_ext[i][1] += coeff * v_now[i][1];
                    a_ext[i][2] += coeff * v_now[i][2];
                }
            }
            _ => {}
        }
    }

    a_ext
}

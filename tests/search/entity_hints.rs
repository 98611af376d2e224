//! Entity hint behavior, including the first-group-wins tie-break.

use super::common::{make_row_simple, row_named, sample_sheet};
use fieldfinder::{hinted_entity, rank, score_row, Query, ENTITY_HINTS};

#[test]
fn test_agency_hint_bonus_and_penalty() {
    let rows = sample_sheet();
    let results = rank("agency", &rows, rows.len()).unwrap();
    for result in &results {
        let expected = if result.row.entity == "agency" { 4 } else { -1 };
        assert_eq!(
            result.score - result.explanation.syn_phrase_hit - result.explanation.token_overlap,
            expected,
            "row {}",
            result.row.common
        );
    }
}

#[test]
fn test_ambiguous_query_uses_first_group() {
    // "donor" (group 2) and "ledger" (group 5)
    let rows = vec![
        make_row_simple("Ledger Row", "ledger"),
        make_row_simple("Donor Row", "donors"),
    ];
    let results = rank("donor ledger balance", &rows, 2).unwrap();
    assert_eq!(results[0].row.common, "Donor Row");
    assert_eq!(results[0].explanation.entity_bonus, 4);
    assert_eq!(results[1].explanation.hinted_entity, Some("donors"));
}

#[test]
fn test_multiword_trigger() {
    let query = Query::new("General-Ledger balance");
    assert_eq!(hinted_entity(&query.normalized).map(|h| h.entity), Some("ledger"));
}

#[test]
fn test_each_group_triggers_itself() {
    for hint in ENTITY_HINTS {
        for trigger in hint.triggers.iter().filter(|t| !t.contains('/')) {
            let found = hinted_entity(trigger).map(|h| h.entity);
            // A trigger may also contain an earlier group's trigger
            let earlier = ENTITY_HINTS
                .iter()
                .take_while(|h| h.entity != hint.entity)
                .any(|h| h.triggered_by(trigger));
            if !earlier {
                assert_eq!(found, Some(hint.entity), "trigger {:?}", trigger);
            }
        }
    }
}

#[test]
fn test_mismatched_hint_costs_one_point() {
    let rows = sample_sheet();
    let row = row_named(&rows, "GL Account");
    let (with_hint, _) = score_row(&Query::new("account sku"), row);
    let (without_hint, _) = score_row(&Query::new("account"), row);
    assert_eq!(with_hint, without_hint - 1);
}

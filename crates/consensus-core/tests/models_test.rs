//! Serialized shape of the public models.

use consensus_core::models::{AnswerGroup, Grouping, PriorWeights, SelectionResult};
use consensus_core::tracing_setup::init_tracing;

#[test]
fn selection_result_serializes_as_a_flat_record() {
    let result = SelectionResult::new("4", "the answer is 4", 0, 0.5);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "answer": "4",
            "completion": "the answer is 4",
            "index": 0,
            "confidence": 0.5
        })
    );
    assert_eq!(result.into_tuple(), ("4".to_string(), "the answer is 4".to_string(), 0, 0.5));
}

#[test]
fn prior_weights_are_a_bare_array() {
    let weights: PriorWeights = serde_json::from_str("[0.1, 0.1, 0.9]").unwrap();
    assert_eq!(weights.as_slice(), &[0.1, 0.1, 0.9]);
    assert_eq!(serde_json::to_string(&weights).unwrap(), "[0.1,0.1,0.9]");
}

#[test]
fn grouping_round_trips_through_json() {
    let mut four = AnswerGroup::new("4", "a", 0);
    four.push("b", 2);
    let grouping = Grouping {
        groups: vec![four, AnswerGroup::new("5", "c", 1)],
        skipped: vec![3],
        total: 4,
    };
    let json = serde_json::to_string(&grouping).unwrap();
    let back: Grouping = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grouping);
}

#[test]
fn tracing_init_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialized twice without panicking");
}

mod properties {
    use consensus_core::models::PriorWeights;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_non_negative_weights_pass(weights in prop::collection::vec(0.0f64..1e6, 0..32)) {
            let weights = PriorWeights::new(weights);
            prop_assert!(weights.check_values().is_ok());
            prop_assert!(weights.check_len(weights.len()).is_ok());
            prop_assert!(weights.check_len(weights.len() + 1).is_err());
        }

        #[test]
        fn a_negative_weight_is_reported_at_its_index(
            mut weights in prop::collection::vec(0.0f64..10.0, 1..16),
            slot in any::<prop::sample::Index>(),
        ) {
            let at = slot.index(weights.len());
            weights[at] = -1.0;
            let err = PriorWeights::new(weights).check_values().unwrap_err();
            prop_assert_eq!(err.to_string(), format!("prior weight at index {at} is invalid: -1"));
        }
    }
}

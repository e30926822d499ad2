//! Error display and code tests.

use consensus_core::errors::error_code::{self, ConsensusErrorCode};
use consensus_core::errors::{
    AggregationError, ConfigError, ConsensusError, EquivalenceError, ExtractionError,
};

#[test]
fn no_valid_completions_has_a_distinct_code() {
    let err = AggregationError::NoValidCompletions { total: 3, skipped: 3 };
    assert_eq!(err.error_code(), error_code::NO_VALID_COMPLETIONS);
    assert_eq!(
        err.coded_string(),
        "[NO_VALID_COMPLETIONS] there are no valid completions (3 of 3 failed extraction)"
    );
}

#[test]
fn top_level_error_forwards_subsystem_codes() {
    let cases: Vec<(ConsensusError, &str)> = vec![
        (
            ExtractionError::EmptyAnswer { index: 0 }.into(),
            error_code::EMPTY_ANSWER,
        ),
        (
            EquivalenceError::DivisionByZero {
                expression: "1/0".into(),
            }
            .into(),
            error_code::PREDICATE_FAILED,
        ),
        (
            AggregationError::WeightLengthMismatch {
                expected: 3,
                actual: 2,
            }
            .into(),
            error_code::WEIGHT_LENGTH_MISMATCH,
        ),
        (
            ConfigError::FileNotFound {
                path: "consensus.toml".into(),
            }
            .into(),
            error_code::CONFIG_ERROR,
        ),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "wrong code for {err}");
    }
}

#[test]
fn overlapping_groups_names_all_three_answers() {
    let err = AggregationError::OverlappingGroups {
        answer: "0.5".into(),
        first: "1/2".into(),
        second: "50%".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("0.5") && msg.contains("1/2") && msg.contains("50%"));
    assert_eq!(err.error_code(), error_code::OVERLAPPING_GROUPS);
}

#[test]
fn wrapped_error_display_includes_subsystem() {
    let err: ConsensusError = AggregationError::NonPositiveConfidence { score: 0.0 }.into();
    assert!(err.to_string().starts_with("Aggregation error:"));
}

//! Golden extraction cases from `test-fixtures/golden/extraction`.

use consensus_core::traits::{AnswerExtractor, GoldExtractor};
use consensus_extraction::{BoxedExtractor, BoxedGoldExtractor, MarkerExtractor};
use test_fixtures::{load_fixture, ExtractionFixture};

fn non_empty(answer: String) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}

fn check_extractor(fixture_path: &str, extractor: &dyn AnswerExtractor) {
    let fixture: ExtractionFixture = load_fixture(fixture_path);
    for case in &fixture.cases {
        let answer = extractor.extract(&case.text).unwrap();
        assert_eq!(
            non_empty(answer),
            case.expected,
            "{}: wrong answer for {:?}",
            fixture.description,
            case.text
        );
    }
}

#[test]
fn marker_cases() {
    check_extractor("golden/extraction/marker_cases.json", &MarkerExtractor::new());
}

#[test]
fn boxed_cases() {
    check_extractor("golden/extraction/boxed_cases.json", &BoxedExtractor::new(true));
}

#[test]
fn gold_solutions() {
    let fixture: ExtractionFixture = load_fixture("golden/extraction/gold_solutions.json");
    for case in &fixture.cases {
        assert_eq!(
            BoxedGoldExtractor.extract_gold(&case.text),
            case.expected,
            "wrong gold answer for {:?}",
            case.text
        );
    }
}

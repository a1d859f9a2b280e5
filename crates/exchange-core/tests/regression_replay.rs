use exchange_core::MatchingEngine;
use exchange_protocol::{format_output_line, parse_input_line};

/// Drive a whole event file through codec + engine and compare the
/// produced records line for line against the checked-in reference.
#[test]
fn replayed_stream_matches_reference_output() {
    const INPUT: &str = include_str!("data/input.csv");
    const EXPECTED: &str = include_str!("data/expected_output.csv");

    let mut engine = MatchingEngine::new();
    let mut records = Vec::new();

    for raw_line in INPUT.lines() {
        if let Some(event) = parse_input_line(raw_line) {
            engine
                .process_event(event, &mut records)
                .expect("reference stream has no duplicate live ids");
        }
    }

    let actual: Vec<String> = records.iter().map(format_output_line).collect();
    let expected: Vec<String> = EXPECTED
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    assert_eq!(actual, expected);
}

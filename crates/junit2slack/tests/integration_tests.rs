// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for junit2slack
//!
//! These tests run JUnit fixtures through the parser and the digest engine and
//! compare the rendered JSON against the expected payloads.


use std::num::NonZeroUsize;

use junit2slack::digest::{Assembler, SkipReason, StopPolicy, assemble};
use junit2slack::output::render;
use junit2slack::slack::{Block, FAILURE_COLOR};
use junit2slack_report::{Suite, SuiteCollection};
use similar_asserts::assert_eq;
use test_utils::{expected_json, failing, parse_fixture, single_suite};

fn rendered(collection: &SuiteCollection) -> serde_json::Value {
    let json = render(&assemble([collection]), false).expect("render");
    serde_json::from_str(&json).expect("rendered output is JSON")
}

// ============================================================================
// Expected payloads
// ============================================================================

#[test]
fn test_message_sample_matches_expected() {
    let report = parse_fixture("message-sample.xml");
    assert_eq!(rendered(&report), expected_json("message-expected.json"));
}

#[test]
fn test_value_sample_matches_expected() {
    let report = parse_fixture("value-sample.xml");
    assert_eq!(rendered(&report), expected_json("value-expected.json"));
}

#[test]
fn test_combined_sample_matches_expected() {
    let report = parse_fixture("combined-sample.xml");
    assert_eq!(rendered(&report), expected_json("combined-expected.json"));
}

#[test]
fn test_expected_payloads_render_byte_identical() {
    for (sample, expected) in [
        ("message-sample.xml", "message-expected.json"),
        ("value-sample.xml", "value-expected.json"),
        ("combined-sample.xml", "combined-expected.json"),
    ] {
        let json = render(&assemble([&parse_fixture(sample)]), false).expect("render");
        assert_eq!(
            json.as_str(),
            test_utils::read_fixture(expected).trim_end(),
            "compact rendering of {sample}"
        );
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_zero_failure_suite_is_ignored() {
    let report = parse_fixture("zero-failures.xml");
    assert_eq!(report.failing_results(), 1);
    assert!(assemble([&report]).is_empty());
}

#[test]
fn test_empty_failure_listed_in_index_only() {
    let report = parse_fixture("empty-failure.xml");
    let digest = Assembler::default().assemble([&report]);

    assert_eq!(digest.attachments.len(), 1);
    assert_eq!(
        digest.attachments[0].blocks,
        vec![
            Block::header("Failed tests"),
            Block::plain_section("net: TestDial"),
        ]
    );
    assert_eq!(digest.skipped.len(), 1);
    assert_eq!(digest.skipped[0].title, "net: TestDial");
    assert_eq!(digest.skipped[0].reason, SkipReason::NoContent);
}

#[test]
fn test_whitespace_only_body_gets_info_card() {
    let report = junit2slack_report::parse(
        "<testsuite failures=\"1\"><testcase name=\"t\"><failure>\n   \n</failure></testcase></testsuite>",
    )
    .expect("Should parse");
    let digest = Assembler::new(StopPolicy::Unbounded).assemble([&report]);

    assert!(digest.skipped.is_empty());
    assert_eq!(digest.attachments.len(), 2);
    assert_eq!(
        digest.attachments[1].blocks,
        vec![
            Block::header("t"),
            Block::mrkdwn_section("*Info*"),
            Block::plain_section("\n   \n"),
        ]
    );
}

#[test]
fn test_stack_trace_indentation_reaches_payload() {
    let report = junit2slack_report::parse(
        "<testsuite failures=\"1\" time=\"\"><testcase classname=\"c\" name=\"t\" time=\"\">\
<failure message=\"m\">\n    at a()\n    at b()\n</failure></testcase></testsuite>",
    )
    .expect("Should parse");
    let digest = assemble([&report]);

    assert_eq!(
        digest[1].blocks[4],
        Block::plain_section("\n    at a()\n    at b()\n")
    );
}

#[test]
fn test_all_attachments_use_failure_color() {
    let report = parse_fixture("multi-failure.xml");
    let digest = Assembler::new(StopPolicy::Unbounded).assemble([&report]);
    assert!(digest.attachments.iter().all(|a| a.color == FAILURE_COLOR));
}

// ============================================================================
// Stop policies
// ============================================================================

fn index_titles(blocks: &[Block]) -> Vec<&str> {
    blocks[1..].iter().map(|b| b.text().text.as_str()).collect()
}

#[test]
fn test_default_policy_on_multi_failure_report() {
    let report = parse_fixture("multi-failure.xml");
    let digest = Assembler::default().assemble([&report]);

    assert!(digest.stopped_early);
    assert_eq!(digest.failure_count(), 1);
    assert_eq!(
        index_titles(&digest.attachments[0].blocks),
        vec!["api: TestEmpty", "api: TestCreate"]
    );
    assert_eq!(digest.attachments[1].blocks[0], Block::header("api: TestCreate"));
}

#[test]
fn test_limit_policy_on_multi_failure_report() {
    let report = parse_fixture("multi-failure.xml");
    let max = NonZeroUsize::new(2).expect("non-zero");
    let digest = Assembler::new(StopPolicy::Limit(max)).assemble([&report]);

    assert!(digest.stopped_early);
    assert_eq!(digest.failure_count(), 2);
    assert_eq!(
        index_titles(&digest.attachments[0].blocks),
        vec!["api: TestEmpty", "api: TestCreate", "api: TestDelete"]
    );
}

#[test]
fn test_unbounded_policy_on_multi_failure_report() {
    let report = parse_fixture("multi-failure.xml");
    let digest = Assembler::new(StopPolicy::Unbounded).assemble([&report]);

    assert!(!digest.stopped_early);
    assert_eq!(digest.failures_seen, 6);
    assert_eq!(digest.failure_count(), 5);
    assert_eq!(
        index_titles(&digest.attachments[0].blocks),
        vec![
            "api: TestEmpty",
            "api: TestCreate",
            "api: TestDelete",
            "TestRetry",
            "worker: TestBackoff",
            "worker: TestDrain",
        ]
    );

    let headers: Vec<&str> = digest.attachments[1..]
        .iter()
        .map(|a| a.blocks[0].text().text.as_str())
        .collect();
    assert_eq!(
        headers,
        vec![
            "api: TestCreate",
            "api: TestDelete",
            "TestRetry",
            "worker: TestBackoff",
            "worker: TestDrain",
        ]
    );
}

#[test]
fn test_multiple_collections_are_concatenated() {
    let first = single_suite(vec![failing("a", "one", "m", "")]);
    let second = single_suite(vec![failing("b", "two", "", "v")]);
    let digest = Assembler::new(StopPolicy::Unbounded).assemble([&first, &second]);

    assert_eq!(
        index_titles(&digest.attachments[0].blocks),
        vec!["a: one", "b: two"]
    );
    assert_eq!(digest.failure_count(), 2);
}

#[test]
fn test_suite_without_failures_between_failing_suites() {
    let passing = Suite::new("passing").with_result(junit2slack_report::TestResult::new("ok"));
    let failing_suite = Suite::new("failing").with_result(failing("c", "t", "m", ""));
    let report = SuiteCollection::new(vec![passing, failing_suite]);

    let payload = assemble([&report]);
    assert_eq!(payload.len(), 2);
    assert_eq!(payload[1].blocks[0], Block::header("c: t"));
}

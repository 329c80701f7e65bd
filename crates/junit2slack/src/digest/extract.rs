// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failing-result traversal

use junit2slack_report::{Failure, Suite, SuiteCollection, TestResult};

/// A failing result together with the suite that reported it
#[derive(Debug, Clone, Copy)]
pub struct FailingResult<'a> {
    /// Owning suite
    pub suite: &'a Suite,
    /// The failing test case
    pub result: &'a TestResult,
    /// The result's failure details
    pub failure: &'a Failure,
}

/// Lazily yield every failing result across `collections`
///
/// Collections, suites and results are visited in order. Suites that report
/// zero failures are skipped without looking at their results.
pub fn failing_results<'a, I>(collections: I) -> impl Iterator<Item = FailingResult<'a>>
where
    I: IntoIterator<Item = &'a SuiteCollection>,
{
    collections
        .into_iter()
        .flat_map(|collection| collection.suites.iter())
        .filter(|suite| suite.has_failures())
        .flat_map(|suite| {
            suite.results.iter().filter_map(move |result| {
                result.failure.as_ref().map(|failure| FailingResult {
                    suite,
                    result,
                    failure,
                })
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn failing(name: &str) -> TestResult {
        TestResult::new(name).with_failure(Failure::new("boom", ""))
    }

    fn names<'a>(collections: &'a [SuiteCollection]) -> Vec<&'a str> {
        failing_results(collections)
            .map(|f| f.result.name.as_str())
            .collect()
    }

    #[test]
    fn test_yields_only_failures_in_order() {
        let collection = SuiteCollection::new(vec![
            Suite::new("a")
                .with_result(failing("a1"))
                .with_result(TestResult::new("a2"))
                .with_result(failing("a3")),
            Suite::new("b").with_result(failing("b1")),
        ]);

        assert_eq!(names(&[collection]), vec!["a1", "a3", "b1"]);
    }

    #[test]
    fn test_skips_suites_reporting_zero_failures() {
        let collection = SuiteCollection::new(vec![
            Suite::new("quiet").with_result(failing("hidden")).with_failures(0),
            Suite::new("loud").with_result(failing("shown")),
        ]);

        assert_eq!(names(&[collection]), vec!["shown"]);
    }

    #[test]
    fn test_concatenates_collections() {
        let first = SuiteCollection::new(vec![Suite::new("a").with_result(failing("one"))]);
        let second = SuiteCollection::new(vec![Suite::new("b").with_result(failing("two"))]);

        assert_eq!(names(&[first, second]), vec!["one", "two"]);
    }

    #[test]
    fn test_reports_owning_suite() {
        let collection = SuiteCollection::new(vec![Suite::new("owner").with_result(failing("t"))]);
        let found: Vec<_> = failing_results([&collection]).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suite.name, "owner");
        assert_eq!(found[0].failure.message, "boom");
    }

    #[test]
    fn test_empty_input() {
        assert!(names(&[]).is_empty());
        assert!(names(&[SuiteCollection::default()]).is_empty());
    }
}

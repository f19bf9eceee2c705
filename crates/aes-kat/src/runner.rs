//! Runs known-answer cases and collects the outcomes.

use std::fmt;

use aes_core::{block_from_hex, block_to_hex, Aes128, Aes128Key};
use tracing::{debug, info, warn};

use crate::vector::{Direction, KnownAnswer};

/// Result of running one case.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseOutcome {
    /// Label copied from the case.
    pub label: String,
    /// Direction that was run.
    pub direction: Direction,
    /// Expected output as given by the case.
    pub expected_hex: String,
    /// Lowercase hex actually produced, or why the case could not run.
    pub actual: Result<String, aes_core::Error>,
}

impl CaseOutcome {
    /// Whether the produced output equals the expected one, ignoring hex case.
    pub fn passed(&self) -> bool {
        match &self.actual {
            Ok(actual) => actual.eq_ignore_ascii_case(self.expected_hex.trim()),
            Err(_) => false,
        }
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "{status}  {:<7}  {}", self.direction, self.label)?;
        match &self.actual {
            Ok(actual) if self.passed() => write!(f, "  {actual}"),
            Ok(actual) => write!(f, "  expected {}, got {actual}", self.expected_hex.trim()),
            Err(err) => write!(f, "  error: {err}"),
        }
    }
}

/// Runs a single case. Malformed hex is reported in the outcome.
pub fn run_case(case: &KnownAnswer) -> CaseOutcome {
    let actual = compute(case);
    let outcome = CaseOutcome {
        label: case.label.clone(),
        direction: case.direction,
        expected_hex: case.expected_hex.clone(),
        actual,
    };
    debug!(
        label = %outcome.label,
        direction = %outcome.direction,
        passed = outcome.passed(),
        "ran case"
    );
    outcome
}

fn compute(case: &KnownAnswer) -> Result<String, aes_core::Error> {
    let cipher = Aes128::new(&Aes128Key::from_hex(&case.key_hex)?);
    let input = block_from_hex(&case.input_hex)?;
    let output = match case.direction {
        Direction::Encrypt => cipher.encrypt_block(&input),
        Direction::Decrypt => cipher.decrypt_block(&input),
    };
    Ok(block_to_hex(&output))
}

/// Runs every case; a failing case never stops the ones after it.
pub fn run_all<'a, I>(cases: I) -> Report
where
    I: IntoIterator<Item = &'a KnownAnswer>,
{
    let outcomes: Vec<CaseOutcome> = cases.into_iter().map(run_case).collect();
    for outcome in outcomes.iter().filter(|o| !o.passed()) {
        match &outcome.actual {
            Ok(actual) => warn!(
                label = %outcome.label,
                direction = %outcome.direction,
                expected = %outcome.expected_hex,
                actual = %actual,
                "known answer mismatch"
            ),
            Err(err) => warn!(
                label = %outcome.label,
                direction = %outcome.direction,
                error = %err,
                "case could not run"
            ),
        }
    }
    let report = Report { outcomes };
    info!(
        total = report.outcomes.len(),
        passed = report.passed(),
        failed = report.failed(),
        "known answer run finished"
    );
    report
}

/// Outcomes of a run, in case order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// One entry per case.
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    /// Number of passing cases.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failing cases, including ones that could not run.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// The cases whose outcome failed.
    ///
    /// `cases` must be the same sequence that was passed to [`run_all`].
    pub fn failing_cases<'a>(
        &'a self,
        cases: &'a [KnownAnswer],
    ) -> impl Iterator<Item = &'a KnownAnswer> + 'a {
        cases
            .iter()
            .zip(&self.outcomes)
            .filter(|(_, outcome)| !outcome.passed())
            .map(|(case, _)| case)
    }

    /// True when at least one case ran and every case passed.
    pub fn success(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cases: {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        )
    }
}

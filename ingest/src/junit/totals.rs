use std::ops::AddAssign;

use super::types::{Status, Suite, Test, Totals};

impl Totals {
    fn count(&mut self, test: &Test) {
        self.tests += 1;
        self.duration = self.duration.saturating_add(test.duration);
        match test.status {
            Status::Passed => self.passed += 1,
            Status::Skipped => self.skipped += 1,
            Status::Failed => self.failed += 1,
            Status::Error => self.error += 1,
        }
    }
}

impl AddAssign<&Totals> for Totals {
    fn add_assign(&mut self, other: &Totals) {
        self.tests += other.tests;
        self.passed += other.passed;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.error += other.error;
        self.duration = self.duration.saturating_add(other.duration);
    }
}

impl<'a> FromIterator<&'a Test> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a Test>>(tests: I) -> Self {
        tests.into_iter().fold(Totals::default(), |mut totals, test| {
            totals.count(test);
            totals
        })
    }
}

impl Suite {
    /// Recomputes `totals` from this suite's own tests and the totals its
    /// nested suites already carry.
    ///
    /// Nested suites are not re-aggregated, so they must be complete first.
    pub fn aggregate(&mut self) {
        let mut totals: Totals = self.tests.iter().collect();
        for suite in &self.suites {
            totals += &suite.totals;
        }
        self.totals = totals;
    }
}

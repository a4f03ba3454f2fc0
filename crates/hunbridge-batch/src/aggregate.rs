// Ordered, length-preserving collection of per-word outcomes

use hunbridge_core::ItemOutcome;

/// Counts of how a batch's words were handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Number of words recorded.
    pub total: usize,
    /// Words that reached the engine.
    pub converted: usize,
    /// Words that took the failure-default.
    pub defaulted: usize,
}

/// Collects one result per input word, in input order.
///
/// Every recorded outcome occupies exactly one slot; a defaulted outcome
/// fills its slot with `T::default()` (`false` for check, an empty list
/// for suggest/analyze/stem).
#[derive(Debug)]
pub struct ResultAggregator<T> {
    expected: usize,
    values: Vec<T>,
    defaulted: usize,
}

impl<T: Default> ResultAggregator<T> {
    /// Create an aggregator for a batch of `expected` words.
    pub fn with_expected(expected: usize) -> Self {
        Self {
            expected,
            values: Vec::with_capacity(expected),
            defaulted: 0,
        }
    }

    pub fn record(&mut self, outcome: ItemOutcome<T>) {
        if outcome.is_defaulted() {
            self.defaulted += 1;
        }
        self.values.push(outcome.into_value());
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total: self.values.len(),
            converted: self.values.len() - self.defaulted,
            defaulted: self.defaulted,
        }
    }

    /// Number of slots still unfilled.
    pub fn remaining(&self) -> usize {
        self.expected.saturating_sub(self.values.len())
    }

    /// The collected results.
    ///
    /// The batch loop records exactly one outcome per input word, so the
    /// output always has the input's length.
    pub fn finalize(self) -> Vec<T> {
        debug_assert_eq!(
            self.values.len(),
            self.expected,
            "batch recorded a different number of outcomes than it had words"
        );
        self.values
    }
}

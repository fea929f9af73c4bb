use metrics::Counter;
use metrics_derive::Metrics;

/// The metrics for the [`super::Expander`].
#[derive(Metrics, Clone)]
#[metrics(scope = "inbox_expander")]
pub struct ExpanderMetrics {
    /// A counter on the messages successfully expanded.
    pub expanded_messages: Counter,
    /// A counter on the transactions derived from messages.
    pub derived_transactions: Counter,
    /// A counter on the L2 message entries skipped during expansion.
    pub skipped_entries: Counter,
    /// A counter on the messages that failed expansion.
    pub failed_messages: Counter,
}

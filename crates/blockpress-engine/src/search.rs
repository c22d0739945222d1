//! Debounced search.
//!
//! Every keystroke is submitted to a [`QueryGate`]. Short queries are
//! rejected straight away; longer ones wait out the idle period and are
//! dropped if anything was typed in the meantime.

use crate::client::ContentSource;
use crate::models::SearchResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Queries with fewer characters never reach the network.
    pub min_query_len: usize,
    /// Idle period before a query is sent.
    pub debounce: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            debounce: Duration::from_millis(500),
        }
    }
}

/// Outcome of submitting the current input.
#[derive(Debug)]
pub enum Submission {
    /// Below the minimum length: clear results, nothing is sent.
    TooShort,
    Pending(PendingQuery),
}

/// Hands out pending queries and invalidates older ones.
#[derive(Debug, Clone, Default)]
pub struct QueryGate {
    settings: SearchSettings,
    generation: Arc<AtomicU64>,
}

impl QueryGate {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    /// Register new input. Any query submitted earlier becomes stale.
    pub fn submit(&self, input: &str) -> Submission {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if input.chars().count() < self.settings.min_query_len {
            return Submission::TooShort;
        }
        Submission::Pending(PendingQuery {
            query: input.to_string(),
            generation,
            latest: Arc::clone(&self.generation),
            delay: self.settings.debounce,
        })
    }
}

/// A query waiting for the input to go idle.
#[derive(Debug)]
pub struct PendingQuery {
    query: String,
    generation: u64,
    latest: Arc<AtomicU64>,
    delay: Duration,
}

impl PendingQuery {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    /// Wait out the idle period; yields the query only if it is still the latest input.
    pub async fn settle(self) -> Option<String> {
        tokio::time::sleep(self.delay).await;
        if self.is_current() {
            Some(self.query)
        } else {
            log::debug!("Dropping superseded query {:?}", self.query);
            None
        }
    }
}

/// Search for `pending` once it settles. `None` when it was superseded.
pub async fn debounced_search(
    source: &dyn ContentSource,
    pending: PendingQuery,
) -> Option<Vec<SearchResult>> {
    let query = pending.settle().await?;
    Some(source.search(&query).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FakeSource;
    use pretty_assertions::assert_eq;

    fn pending(submission: Submission) -> PendingQuery {
        match submission {
            Submission::Pending(pending) => pending,
            Submission::TooShort => panic!("expected a pending query"),
        }
    }

    #[test]
    fn test_short_queries_are_rejected() {
        let gate = QueryGate::default();

        assert!(matches!(gate.submit(""), Submission::TooShort));
        assert!(matches!(gate.submit("ab"), Submission::TooShort));
        assert!(matches!(gate.submit("abc"), Submission::Pending(_)));
        // characters, not bytes
        assert!(matches!(gate.submit("éé"), Submission::TooShort));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_query_searches_once() {
        let source = FakeSource::default().with_results(vec![SearchResult {
            id: 1,
            title: "Pricing".to_string(),
            ..Default::default()
        }]);
        let gate = QueryGate::default();

        let results = debounced_search(&source, pending(gate.submit("pricing"))).await;

        assert_eq!(results.map(|r| r.len()), Some(1));
        assert_eq!(source.searches(), vec!["pricing"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_sends_only_last_query() {
        let source = FakeSource::default();
        let gate = QueryGate::default();

        let first = pending(gate.submit("pri"));
        let second = pending(gate.submit("pric"));
        let last = pending(gate.submit("price"));

        let (a, b, c) = tokio::join!(
            debounced_search(&source, first),
            debounced_search(&source, second),
            debounced_search(&source, last),
        );

        assert!(a.is_none());
        assert!(b.is_none());
        assert!(c.is_some());
        assert_eq!(source.searches(), vec!["price"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_mid_period_restarts_idle_wait() {
        let source = FakeSource::default();
        let gate = QueryGate::default();
        let start = tokio::time::Instant::now();

        let first = pending(gate.submit("pri"));
        let typing = async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            let last = pending(gate.submit("price"));
            let results = debounced_search(&source, last).await;
            (results, start.elapsed())
        };

        let (early, (late, settled_at)) = tokio::join!(debounced_search(&source, first), typing);

        assert!(early.is_none());
        assert!(late.is_some());
        assert!(settled_at >= Duration::from_millis(800));
        assert!(settled_at < Duration::from_millis(810));
        assert_eq!(source.searches(), vec!["price"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shortening_input_cancels_pending_query() {
        let source = FakeSource::default();
        let gate = QueryGate::default();

        let waiting = pending(gate.submit("pricing"));
        assert!(matches!(gate.submit("pr"), Submission::TooShort));

        assert!(debounced_search(&source, waiting).await.is_none());
        assert!(source.searches().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_waits_for_idle_period() {
        let gate = QueryGate::new(SearchSettings {
            min_query_len: 3,
            debounce: Duration::from_millis(500),
        });
        let start = tokio::time::Instant::now();

        let settled = pending(gate.submit("team")).settle().await;

        assert_eq!(settled.as_deref(), Some("team"));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}

//! Helpers for search-as-you-type.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out increasing tickets so only the newest request's response is
/// applied. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct QueryGeneration {
    latest: Arc<AtomicU64>,
}

/// Proof of which generation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl QueryGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every earlier ticket.
    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Whether `query` is long enough to send, counting characters after trimming.
pub fn is_searchable(query: &str, min_len: usize) -> bool {
    query.trim().chars().count() >= min_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let generation = QueryGeneration::new();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.clone().next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_out_of_order_responses() {
        let generation = QueryGeneration::new();
        let slow = generation.next();
        let fast = generation.next();

        let mut applied = Vec::new();
        for (ticket, result) in [(fast, "car"), (slow, "ca")] {
            if generation.is_current(ticket) {
                applied.push(result);
            }
        }
        assert_eq!(applied, vec!["car"]);
    }

    #[test]
    fn test_min_length() {
        assert!(!is_searchable("", 2));
        assert!(!is_searchable(" a ", 2));
        assert!(is_searchable("ab", 2));
        assert!(is_searchable("", 0));
        assert!(is_searchable("éé", 2));
    }
}

//! Ordering for overlapping refreshes.
//!
//! Polls are not de-duplicated, so a slow refresh can finish after a newer
//! one. Each refresh takes a [`Ticket`] when it starts and only results
//! carrying a ticket newer than the last applied one are accepted.

/// Position of a refresh in start order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out tickets and tracks the newest applied result.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: u64,
    applied: u64,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the start of a refresh.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Returns true if the result for `ticket` should be applied, recording it.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    /// Number of refreshes started so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_results_accepted() {
        let mut seq = RefreshSequencer::new();
        let first = seq.begin();
        assert!(seq.accept(first));
        let second = seq.begin();
        assert!(seq.accept(second));
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn test_stale_result_rejected() {
        let mut seq = RefreshSequencer::new();
        let slow = seq.begin();
        let fast = seq.begin();

        assert!(seq.accept(fast));
        assert!(!seq.accept(slow));
    }

    #[test]
    fn test_failed_refresh_does_not_block_older_success() {
        let mut seq = RefreshSequencer::new();
        let older = seq.begin();
        let _failed = seq.begin();

        // The newer refresh failed and never calls accept.
        assert!(seq.accept(older));
    }

    #[test]
    fn test_ticket_accepted_once() {
        let mut seq = RefreshSequencer::new();
        let ticket = seq.begin();
        assert!(seq.accept(ticket));
        assert!(!seq.accept(ticket));
    }
}

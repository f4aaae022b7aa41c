//! Display-ID generation. Each domain owns an [`IdCounter`] with a fixed
//! prefix; issued IDs look like `A-001`, `APT-014`, `Q-103`.
//!
//! The counter is monotonic and owned by the store. It is deliberately *not*
//! derived from the current collection length, so removing a record never
//! frees its ID for reuse.

#[derive(Debug, Clone)]
pub struct IdCounter {
    prefix: &'static str,
    next: u32,
}

impl IdCounter {
    pub fn new(prefix: &'static str) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Start above already-present records (e.g. seed data).
    pub fn starting_at(prefix: &'static str, next: u32) -> Self {
        Self { prefix, next }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{:03}", self.prefix, self.next);
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_zero_padded() {
        let mut counter = IdCounter::new("A");
        let ids: Vec<String> = (0..5).map(|_| counter.next_id()).collect();
        assert_eq!(ids, vec!["A-001", "A-002", "A-003", "A-004", "A-005"]);
    }

    #[test]
    fn counter_grows_past_three_digits() {
        let mut counter = IdCounter::starting_at("Q", 999);
        assert_eq!(counter.next_id(), "Q-999");
        assert_eq!(counter.next_id(), "Q-1000");
    }

    #[test]
    fn seeded_counter_continues_after_existing_records() {
        let mut counter = IdCounter::starting_at("RPT", 4);
        assert_eq!(counter.next_id(), "RPT-004");
        assert_eq!(counter.peek(), 5);
    }
}

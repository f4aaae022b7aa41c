//! Walk-in queue display ordering.
//!
//! The stored queue keeps insertion order; this module derives the service
//! order fresh on every read. Three tiers, each a tie-break for the previous:
//!
//! 1. Completed entries sort after every non-Completed entry, regardless of
//!    priority. Finished cases fall to the bottom even if they were
//!    emergencies.
//! 2. Priority rank, Emergency first through Low last.
//! 3. `position` ascending, i.e. arrival order within a priority band.
//!
//! Skipped entries get no special treatment: they interleave by priority and
//! position like Waiting and In Progress ones.

use crate::model::{QueueEntry, QueueStatus};
use std::cmp::Ordering;

pub fn compare(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    let a_done = a.status == QueueStatus::Completed;
    let b_done = b.status == QueueStatus::Completed;
    match (a_done, b_done) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a
            .priority
            .rank()
            .cmp(&b.priority.rank())
            .then(a.position.cmp(&b.position)),
    }
}

/// Service order for display. Pure; never touches stored order or positions.
pub fn ordered(entries: &[QueueEntry]) -> Vec<QueueEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(compare);
    sorted
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueTally {
    pub waiting: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn tally(entries: &[QueueEntry]) -> QueueTally {
    let mut t = QueueTally::default();
    for entry in entries {
        match entry.status {
            QueueStatus::Waiting => t.waiting += 1,
            QueueStatus::InProgress => t.in_progress += 1,
            QueueStatus::Completed => t.completed += 1,
            QueueStatus::Skipped => {}
        }
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::Utc;

    fn entry(id: &str, position: u32, priority: Priority, status: QueueStatus) -> QueueEntry {
        QueueEntry {
            id: id.to_string(),
            position,
            animal_name: format!("animal-{}", id),
            species: "Dog".to_string(),
            owner_name: "Owner".to_string(),
            owner_phone: "0700000000".to_string(),
            reason: "Checkup".to_string(),
            priority,
            status,
            arrived_at: Utc::now(),
            vet: "Dr. Omuya".to_string(),
        }
    }

    fn ids(entries: &[QueueEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn emergency_then_position_scenario() {
        // A(Emergency, pos 3), B(Normal, pos 1), C(Emergency, pos 1) -> C, A, B
        let queue = vec![
            entry("A", 3, Priority::Emergency, QueueStatus::Waiting),
            entry("B", 1, Priority::Normal, QueueStatus::Waiting),
            entry("C", 1, Priority::Emergency, QueueStatus::Waiting),
        ];
        assert_eq!(ids(&ordered(&queue)), vec!["C", "A", "B"]);
    }

    #[test]
    fn completed_sinks_below_everything_regardless_of_priority() {
        let queue = vec![
            entry("done", 1, Priority::Emergency, QueueStatus::Completed),
            entry("low", 2, Priority::Low, QueueStatus::Waiting),
        ];
        assert_eq!(ids(&ordered(&queue)), vec!["low", "done"]);
    }

    #[test]
    fn priority_bands_order_by_rank() {
        let queue = vec![
            entry("n", 1, Priority::Normal, QueueStatus::Waiting),
            entry("l", 2, Priority::Low, QueueStatus::Waiting),
            entry("h", 3, Priority::High, QueueStatus::Waiting),
            entry("e", 4, Priority::Emergency, QueueStatus::Waiting),
        ];
        assert_eq!(ids(&ordered(&queue)), vec!["e", "h", "n", "l"]);
    }

    #[test]
    fn equal_priority_breaks_ties_by_position() {
        let queue = vec![
            entry("second", 7, Priority::Normal, QueueStatus::Waiting),
            entry("first", 2, Priority::Normal, QueueStatus::InProgress),
        ];
        assert_eq!(ids(&ordered(&queue)), vec!["first", "second"]);
    }

    #[test]
    fn skipped_entries_interleave_like_active_ones() {
        let queue = vec![
            entry("waiting-low", 1, Priority::Low, QueueStatus::Waiting),
            entry("skipped-high", 2, Priority::High, QueueStatus::Skipped),
        ];
        assert_eq!(ids(&ordered(&queue)), vec!["skipped-high", "waiting-low"]);
    }

    #[test]
    fn ordering_is_idempotent() {
        let queue = vec![
            entry("a", 3, Priority::Emergency, QueueStatus::Waiting),
            entry("b", 1, Priority::Normal, QueueStatus::Completed),
            entry("c", 2, Priority::Normal, QueueStatus::Waiting),
            entry("d", 4, Priority::Normal, QueueStatus::Waiting),
        ];
        let once = ordered(&queue);
        let twice = ordered(&once);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn tally_counts_waiting_in_progress_completed() {
        let queue = vec![
            entry("a", 1, Priority::Normal, QueueStatus::Waiting),
            entry("b", 2, Priority::Normal, QueueStatus::Waiting),
            entry("c", 3, Priority::Normal, QueueStatus::InProgress),
            entry("d", 4, Priority::Normal, QueueStatus::Completed),
            entry("e", 5, Priority::Normal, QueueStatus::Skipped),
        ];
        assert_eq!(
            tally(&queue),
            QueueTally {
                waiting: 2,
                in_progress: 1,
                completed: 1
            }
        );
    }
}

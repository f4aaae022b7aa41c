//! Which actions the front desk offers for a record in a given status.
//!
//! These are affordances, not an enforced transition table: the store accepts
//! any status update; only the offered actions change with the current
//! status. The CLI uses these lists to print action hints next to each row.

use crate::model::{AppointmentStatus, QueueStatus};

/// Scheduled appointments can be completed or cancelled; every other status
/// is terminal.
pub fn appointment_actions(status: AppointmentStatus) -> &'static [&'static str] {
    match status {
        AppointmentStatus::Scheduled => &["complete", "cancel"],
        AppointmentStatus::Completed
        | AppointmentStatus::Cancelled
        | AppointmentStatus::NoShow => &[],
    }
}

/// Waiting entries can be started or skipped, In Progress ones completed or
/// skipped, and finished ones only removed.
pub fn queue_actions(status: QueueStatus) -> &'static [&'static str] {
    match status {
        QueueStatus::Waiting => &["start", "skip"],
        QueueStatus::InProgress => &["complete", "skip"],
        QueueStatus::Completed | QueueStatus::Skipped => &["remove"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_offers_complete_and_cancel() {
        assert_eq!(
            appointment_actions(AppointmentStatus::Scheduled),
            &["complete", "cancel"]
        );
    }

    #[test]
    fn terminal_appointment_statuses_offer_nothing() {
        assert!(appointment_actions(AppointmentStatus::Completed).is_empty());
        assert!(appointment_actions(AppointmentStatus::Cancelled).is_empty());
        assert!(appointment_actions(AppointmentStatus::NoShow).is_empty());
    }

    #[test]
    fn queue_affordances_follow_the_service_flow() {
        assert_eq!(queue_actions(QueueStatus::Waiting), &["start", "skip"]);
        assert_eq!(
            queue_actions(QueueStatus::InProgress),
            &["complete", "skip"]
        );
        assert_eq!(queue_actions(QueueStatus::Completed), &["remove"]);
        assert_eq!(queue_actions(QueueStatus::Skipped), &["remove"]);
    }
}

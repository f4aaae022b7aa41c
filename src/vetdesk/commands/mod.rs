//! Business logic for each front-desk operation. Commands operate on the
//! store and return structured [`CmdResult`]s; nothing in here prints or
//! assumes a terminal.

use crate::error::{Result, VetError};
use crate::model::{Animal, Appointment, MedicalReport, Pet, QueueEntry};
use crate::queue::QueueTally;

pub mod animals;
pub mod appointments;
pub mod auth;
pub mod pets;
pub mod queue;
pub mod reports;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command produced: the records a view should show plus any leveled
/// messages. Only the vectors relevant to the command are populated.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub animals: Vec<Animal>,
    pub appointments: Vec<Appointment>,
    pub queue: Vec<QueueEntry>,
    pub queue_tally: Option<QueueTally>,
    pub reports: Vec<MedicalReport>,
    pub pets: Vec<Pet>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_animals(mut self, animals: Vec<Animal>) -> Self {
        self.animals = animals;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.appointments = appointments;
        self
    }

    pub fn with_queue(mut self, queue: Vec<QueueEntry>, tally: QueueTally) -> Self {
        self.queue = queue;
        self.queue_tally = Some(tally);
        self
    }

    pub fn with_reports(mut self, reports: Vec<MedicalReport>) -> Self {
        self.reports = reports;
        self
    }

    pub fn with_pets(mut self, pets: Vec<Pet>) -> Self {
        self.pets = pets;
        self
    }
}

/// Presence check for a mandatory form field; returns the trimmed value.
pub(crate) fn require(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VetError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_and_rejects_empty() {
        assert_eq!(require("  Simba ", "err").unwrap(), "Simba");
        assert!(require("", "Animal name is required.").is_err());
        assert!(require("   ", "err").is_err());
    }
}

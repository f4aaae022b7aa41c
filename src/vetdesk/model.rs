//! Core data types: the five record domains and their closed categorical
//! enums. Status, priority and report-type values are enums rather than
//! free-form strings, so an out-of-domain value is unrepresentable.
//! Transitions between statuses are *not* enforced by the store (see
//! [`crate::lifecycle`]).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Vet,
    Owner,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Vet => write!(f, "vet"),
            Role::Owner => write!(f, "owner"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalStatus {
    Active,
    UnderTreatment,
    Discharged,
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimalStatus::Active => write!(f, "Active"),
            AnimalStatus::UnderTreatment => write!(f, "Under Treatment"),
            AnimalStatus::Discharged => write!(f, "Discharged"),
        }
    }
}

impl FromStr for AnimalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "active" => Ok(AnimalStatus::Active),
            "under treatment" => Ok(AnimalStatus::UnderTreatment),
            "discharged" => Ok(AnimalStatus::Discharged),
            _ => Err(format!(
                "Unknown animal status: '{}'. Expected one of: active, under-treatment, discharged",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
            AppointmentStatus::NoShow => write!(f, "No Show"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Ok(AppointmentStatus::Cancelled),
            "no show" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!(
                "Unknown appointment status: '{}'. Expected one of: scheduled, completed, cancelled, no-show",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueStatus {
    Waiting,
    InProgress,
    Completed,
    Skipped,
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueStatus::Waiting => write!(f, "Waiting"),
            QueueStatus::InProgress => write!(f, "In Progress"),
            QueueStatus::Completed => write!(f, "Completed"),
            QueueStatus::Skipped => write!(f, "Skipped"),
        }
    }
}

impl FromStr for QueueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "waiting" => Ok(QueueStatus::Waiting),
            "in progress" => Ok(QueueStatus::InProgress),
            "completed" => Ok(QueueStatus::Completed),
            "skipped" => Ok(QueueStatus::Skipped),
            _ => Err(format!(
                "Unknown queue status: '{}'. Expected one of: waiting, in-progress, completed, skipped",
                s
            )),
        }
    }
}

/// Triage priority for walk-in queue entries. Lower rank serves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Emergency,
    High,
    Normal,
    Low,
}

impl Priority {
    /// Ordinal used by the queue comparator: Emergency(0) < High(1) <
    /// Normal(2) < Low(3).
    pub fn rank(self) -> u8 {
        match self {
            Priority::Emergency => 0,
            Priority::High => 1,
            Priority::Normal => 2,
            Priority::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Emergency => write!(f, "Emergency"),
            Priority::High => write!(f, "High"),
            Priority::Normal => write!(f, "Normal"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "emergency" => Ok(Priority::Emergency),
            "high" => Ok(Priority::High),
            "normal" => Ok(Priority::Normal),
            "low" => Ok(Priority::Low),
            _ => Err(format!(
                "Unknown priority: '{}'. Expected one of: emergency, high, normal, low",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    Treatment,
    Vaccination,
    Diagnosis,
    Discharge,
    FollowUp,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Treatment => write!(f, "Treatment"),
            ReportType::Vaccination => write!(f, "Vaccination"),
            ReportType::Diagnosis => write!(f, "Diagnosis"),
            ReportType::Discharge => write!(f, "Discharge"),
            ReportType::FollowUp => write!(f, "Follow-up"),
        }
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "treatment" => Ok(ReportType::Treatment),
            "vaccination" => Ok(ReportType::Vaccination),
            "diagnosis" => Ok(ReportType::Diagnosis),
            "discharge" => Ok(ReportType::Discharge),
            "follow up" => Ok(ReportType::FollowUp),
            _ => Err(format!(
                "Unknown report type: '{}'. Expected one of: treatment, vaccination, diagnosis, discharge, follow-up",
                s
            )),
        }
    }
}

// Accept "In Progress", "in-progress" and "in_progress" alike.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: String,
    pub registered_at: NaiveDate,
    pub status: AnimalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub animal_id: String,
    pub animal_name: String,
    pub species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
    pub vet: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: String,
    /// Arrival order, assigned once at insertion and never renumbered.
    /// Gaps appear after removals; the display order is always recomputed.
    pub position: u32,
    pub animal_name: String,
    pub species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub reason: String,
    pub priority: Priority,
    pub status: QueueStatus,
    pub arrived_at: DateTime<Utc>,
    pub vet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalReport {
    pub id: String,
    pub animal_id: String,
    pub animal_name: String,
    pub species: String,
    pub owner_name: String,
    pub date: NaiveDate,
    pub report_type: ReportType,
    pub diagnosis: String,
    pub treatment: String,
    pub medication: String,
    pub vet: String,
    pub notes: String,
    pub next_visit: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub color: String,
    pub weight: String,
    pub notes: String,
    pub county: String,
    /// Denormalized owner display name, not an ID. Two owners with the same
    /// display name alias each other's pets; a known limit of the demo model.
    pub owner_name: String,
    pub registered_at: NaiveDate,
}

static KENYA_COUNTIES: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        "Baringo", "Bomet", "Bungoma", "Busia", "Elgeyo-Marakwet", "Embu",
        "Garissa", "Homa Bay", "Isiolo", "Kajiado", "Kakamega", "Kericho",
        "Kiambu", "Kilifi", "Kirinyaga", "Kisii", "Kisumu", "Kitui",
        "Kwale", "Laikipia", "Lamu", "Machakos", "Makueni", "Mandera",
        "Marsabit", "Meru", "Migori", "Mombasa", "Murang'a", "Nairobi",
        "Nakuru", "Nandi", "Narok", "Nyamira", "Nyandarua", "Nyeri",
        "Samburu", "Siaya", "Taita-Taveta", "Tana River", "Tharaka-Nithi",
        "Trans Nzoia", "Turkana", "Uasin Gishu", "Vihiga", "Wajir",
        "West Pokot",
    ]
    .into_iter()
    .collect()
});

/// Resolve a county name case-insensitively to its canonical spelling.
pub fn canonical_county(input: &str) -> Option<&'static str> {
    let needle = input.trim();
    KENYA_COUNTIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(needle))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_uses_human_labels() {
        assert_eq!(AnimalStatus::UnderTreatment.to_string(), "Under Treatment");
        assert_eq!(AppointmentStatus::NoShow.to_string(), "No Show");
        assert_eq!(QueueStatus::InProgress.to_string(), "In Progress");
        assert_eq!(ReportType::FollowUp.to_string(), "Follow-up");
    }

    #[test]
    fn status_parsing_is_forgiving_about_case_and_separators() {
        assert_eq!(
            "In Progress".parse::<QueueStatus>(),
            Ok(QueueStatus::InProgress)
        );
        assert_eq!(
            "in-progress".parse::<QueueStatus>(),
            Ok(QueueStatus::InProgress)
        );
        assert_eq!(
            "NO_SHOW".parse::<AppointmentStatus>(),
            Ok(AppointmentStatus::NoShow)
        );
        assert_eq!("follow-up".parse::<ReportType>(), Ok(ReportType::FollowUp));
        assert_eq!(
            "under-treatment".parse::<AnimalStatus>(),
            Ok(AnimalStatus::UnderTreatment)
        );
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_ranks_order_emergency_first() {
        assert!(Priority::Emergency.rank() < Priority::High.rank());
        assert!(Priority::High.rank() < Priority::Normal.rank());
        assert!(Priority::Normal.rank() < Priority::Low.rank());
    }

    #[test]
    fn county_lookup_is_case_insensitive() {
        assert_eq!(canonical_county("nairobi"), Some("Nairobi"));
        assert_eq!(canonical_county("  MOMBASA "), Some("Mombasa"));
        assert_eq!(canonical_county("Atlantis"), None);
    }
}

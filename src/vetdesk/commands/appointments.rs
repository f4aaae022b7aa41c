//! Appointment scheduling and status changes.
//!
//! Scheduling takes a registered animal's ID and copies name, species and
//! owner details from the animal record, so an appointment can never point
//! at an animal the clinic has not seen. Status updates are direct: the
//! lifecycle is an affordance, not a constraint, so `set_status` will move a
//! Cancelled appointment back to Scheduled if asked.

use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{Result, VetError};
use crate::model::{Appointment, AppointmentStatus};
use crate::search::category_matches;
use crate::store::{ClinicStore, NewAppointment};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Default)]
pub struct ScheduleAppointment {
    pub animal_id: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub vet: String,
}

pub fn schedule(store: &mut ClinicStore, form: ScheduleAppointment) -> Result<CmdResult> {
    let animal_id = require(&form.animal_id, "Animal ID is required.")?;
    let date_raw = require(&form.date, "Date is required.")?;
    let time_raw = require(&form.time, "Time is required.")?;
    let reason = require(&form.reason, "Reason for visit is required.")?;
    let vet = require(&form.vet, "Veterinarian is required.")?;

    let animal = store
        .animal(&animal_id)
        .ok_or_else(|| VetError::NotFound(format!("animal {}", animal_id)))?
        .clone();

    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|_| VetError::Validation("Date must be in YYYY-MM-DD format.".to_string()))?;
    let time = NaiveTime::parse_from_str(&time_raw, "%H:%M")
        .map_err(|_| VetError::Validation("Time must be in HH:MM format.".to_string()))?;

    let appointment = store
        .create_appointment(NewAppointment {
            animal_id: animal.id.clone(),
            animal_name: animal.name.clone(),
            species: animal.species.clone(),
            owner_name: animal.owner_name.clone(),
            owner_phone: animal.owner_phone.clone(),
            date,
            time,
            reason,
            vet,
        })
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} scheduled for {} on {} at {}.",
        appointment.id,
        appointment.animal_name,
        appointment.date,
        appointment.time.format("%H:%M")
    )));
    Ok(result.with_appointments(vec![appointment]))
}

/// Status filter with an "All" sentinel; `None` shows everything.
pub fn list(store: &ClinicStore, status: Option<&str>) -> Result<CmdResult> {
    let appointments: Vec<Appointment> = store
        .appointments()
        .iter()
        .filter(|a| category_matches(status, &a.status.to_string()))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_appointments(appointments))
}

pub fn view(store: &ClinicStore, id: &str) -> Result<CmdResult> {
    let appointment = store
        .appointment(id)
        .ok_or_else(|| VetError::NotFound(format!("appointment {}", id)))?
        .clone();
    Ok(CmdResult::default().with_appointments(vec![appointment]))
}

pub fn set_status(
    store: &mut ClinicStore,
    id: &str,
    status: AppointmentStatus,
) -> Result<CmdResult> {
    let appointment = store.set_appointment_status(id, status)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} marked {}.",
        appointment.id, appointment.status
    )));
    Ok(result.with_appointments(vec![appointment]))
}

//! Medical report generation and lookup. Like appointments, a report is
//! always written against a registered animal.

use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{Result, VetError};
use crate::model::{MedicalReport, ReportType};
use crate::search::{category_matches, matches_query};
use crate::store::{ClinicStore, NewReport};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct CreateReport {
    pub animal_id: String,
    pub date: String,
    pub report_type: Option<ReportType>,
    pub diagnosis: String,
    pub treatment: String,
    pub medication: String,
    pub vet: String,
    pub notes: String,
    pub next_visit: String,
}

pub fn create(store: &mut ClinicStore, form: CreateReport) -> Result<CmdResult> {
    let animal_id = require(&form.animal_id, "Animal ID is required.")?;
    let date_raw = require(&form.date, "Report date is required.")?;
    let report_type = form
        .report_type
        .ok_or_else(|| VetError::Validation("Report type is required.".to_string()))?;
    let diagnosis = require(&form.diagnosis, "Diagnosis is required.")?;
    let treatment = require(&form.treatment, "Treatment is required.")?;
    let vet = require(&form.vet, "Veterinarian is required.")?;

    let animal = store
        .animal(&animal_id)
        .ok_or_else(|| VetError::NotFound(format!("animal {}", animal_id)))?
        .clone();

    let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|_| VetError::Validation("Report date must be in YYYY-MM-DD format.".to_string()))?;
    let next_visit = match form.next_visit.trim() {
        "" => None,
        raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            VetError::Validation("Next visit date must be in YYYY-MM-DD format.".to_string())
        })?),
    };

    let report = store
        .create_report(NewReport {
            animal_id: animal.id.clone(),
            animal_name: animal.name.clone(),
            species: animal.species.clone(),
            owner_name: animal.owner_name.clone(),
            date,
            report_type,
            diagnosis,
            treatment,
            medication: form.medication.trim().to_string(),
            vet,
            notes: form.notes.trim().to_string(),
            next_visit,
        })
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Medical report {} generated for {}.",
        report.id, report.animal_name
    )));
    Ok(result.with_reports(vec![report]))
}

fn matches(report: &MedicalReport, query: &str) -> bool {
    matches_query(
        query,
        &[
            &report.animal_name,
            &report.id,
            &report.owner_name,
            &report.diagnosis,
        ],
    )
}

/// Text search AND type filter (with "All" sentinel).
pub fn list(store: &ClinicStore, query: &str, report_type: Option<&str>) -> Result<CmdResult> {
    let reports: Vec<MedicalReport> = store
        .reports()
        .iter()
        .filter(|r| matches(r, query) && category_matches(report_type, &r.report_type.to_string()))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_reports(reports))
}

pub fn view(store: &ClinicStore, id: &str) -> Result<CmdResult> {
    let report = store
        .report(id)
        .ok_or_else(|| VetError::NotFound(format!("report {}", id)))?
        .clone();
    Ok(CmdResult::default().with_reports(vec![report]))
}

use colored::*;
use unicode_width::UnicodeWidthStr;
use vetdesk::commands::{CmdMessage, MessageLevel};
use vetdesk::lifecycle;
use vetdesk::model::{Animal, Appointment, MedicalReport, Pet, Priority, QueueEntry};
use vetdesk::queue::QueueTally;

const TIME_WIDTH: usize = 14;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> vetdesk::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cell(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn detail(label: &str, value: &str) {
    println!("  {} {}", cell(label, 14).dimmed(), value);
}

// ── Animals ─────────────────────────────────────────────────────────────

pub fn print_animals(animals: &[Animal]) {
    if animals.is_empty() {
        println!("No animals found.");
        return;
    }

    for animal in animals {
        println!(
            "{}  {} {} {}  {}  {}",
            animal.id.yellow(),
            cell(&animal.name, 12).bold(),
            cell(&animal.species, 8),
            cell(&animal.breed, 18).dimmed(),
            cell(&animal.owner_name, 16),
            status_plain(&animal.status.to_string())
        );
    }
    println!("{}", format!("{} animal(s)", animals.len()).dimmed());
}

pub fn print_animal_detail(animal: &Animal) {
    println!("{} {}", animal.id.yellow(), animal.name.bold());
    detail("Species", &animal.species);
    detail("Breed", &animal.breed);
    detail("Age", &animal.age);
    detail("Gender", &animal.gender);
    detail("Owner", &animal.owner_name);
    detail("Phone", &animal.owner_phone);
    detail("Email", blank_dash(&animal.owner_email));
    detail("Registered", &animal.registered_at.to_string());
    detail("Status", &animal.status.to_string());
}

// ── Appointments ────────────────────────────────────────────────────────

pub fn print_appointments(appointments: &[Appointment]) {
    if appointments.is_empty() {
        println!("No appointments found.");
        return;
    }

    for appt in appointments {
        let actions = lifecycle::appointment_actions(appt.status);
        let hint = if actions.is_empty() {
            String::new()
        } else {
            format!("  [{}]", actions.join(", "))
        };
        println!(
            "{}  {} {}  {} {}  {}{}",
            appt.id.yellow(),
            appt.date,
            appt.time.format("%H:%M"),
            cell(&appt.animal_name, 12).bold(),
            cell(&appt.vet, 12),
            status_colored(appt.status.to_string()),
            hint.dimmed()
        );
    }
    println!("{}", format!("{} appointment(s)", appointments.len()).dimmed());
}

pub fn print_appointment_detail(appt: &Appointment) {
    println!("{} {}", appt.id.yellow(), appt.animal_name.bold());
    detail("Animal ID", &appt.animal_id);
    detail("Species", &appt.species);
    detail("Owner", &appt.owner_name);
    detail("Phone", &appt.owner_phone);
    detail("Date", &appt.date.to_string());
    detail("Time", &appt.time.format("%H:%M").to_string());
    detail("Reason", &appt.reason);
    detail("Vet", &appt.vet);
    detail("Status", &appt.status.to_string());
}

// ── Queue ───────────────────────────────────────────────────────────────

pub fn print_queue(queue: &[QueueEntry], tally: Option<&QueueTally>) {
    if queue.is_empty() {
        println!("Queue is empty. No patients waiting.");
        return;
    }

    for entry in queue {
        let actions = lifecycle::queue_actions(entry.status);
        let hint = if actions.is_empty() {
            String::new()
        } else {
            format!("  [{}]", actions.join(", "))
        };
        println!(
            "{} {}  {} {}  {}  {}  {}{}",
            format!("#{}", entry.position).bold(),
            entry.id.yellow(),
            cell(&entry.animal_name, 12).bold(),
            cell(&entry.species, 8),
            priority_badge(entry.priority),
            status_colored(entry.status.to_string()),
            format_time_ago(entry.arrived_at).dimmed(),
            hint.dimmed()
        );
    }

    if let Some(tally) = tally {
        println!(
            "{}",
            format!(
                "{} waiting, {} in progress, {} completed",
                tally.waiting, tally.in_progress, tally.completed
            )
            .dimmed()
        );
    }
}

fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("{:<9}", priority.to_string());
    match priority {
        Priority::Emergency => label.red().bold(),
        Priority::High => label.yellow(),
        Priority::Normal => label.normal(),
        Priority::Low => label.dimmed(),
    }
}

// ── Reports ─────────────────────────────────────────────────────────────

pub fn print_reports(reports: &[MedicalReport]) {
    if reports.is_empty() {
        println!("No reports found.");
        return;
    }

    for report in reports {
        println!(
            "{}  {}  {} {}  {}",
            report.id.yellow(),
            report.date,
            cell(&report.animal_name, 12).bold(),
            cell(&report.report_type.to_string(), 12),
            cell(&report.diagnosis, 36).dimmed()
        );
    }
    println!("{}", format!("{} report(s)", reports.len()).dimmed());
}

pub fn print_report_detail(report: &MedicalReport) {
    println!("{} {}", report.id.yellow(), report.animal_name.bold());
    detail("Animal ID", &report.animal_id);
    detail("Species", &report.species);
    detail("Owner", &report.owner_name);
    detail("Date", &report.date.to_string());
    detail("Type", &report.report_type.to_string());
    detail("Diagnosis", &report.diagnosis);
    detail("Treatment", &report.treatment);
    detail("Medication", blank_dash(&report.medication));
    detail("Vet", &report.vet);
    detail("Notes", blank_dash(&report.notes));
    let next = report
        .next_visit
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    detail("Next visit", &next);
}

// ── Pets ────────────────────────────────────────────────────────────────

pub fn print_pets(pets: &[Pet]) {
    if pets.is_empty() {
        println!("No pets found.");
        return;
    }

    for pet in pets {
        println!(
            "{}  {} {} {}  {}  {}",
            pet.id.yellow(),
            cell(&pet.name, 12).bold(),
            cell(&pet.species, 8),
            cell(&pet.breed, 18).dimmed(),
            cell(&pet.owner_name, 16),
            pet.county
        );
    }
    println!("{}", format!("{} pet(s)", pets.len()).dimmed());
}

fn status_plain(status: &str) -> String {
    format!("[{}]", status)
}

fn status_colored(status: String) -> ColoredString {
    let label = format!("{:<12}", status);
    match status.as_str() {
        "Scheduled" | "Waiting" => label.normal(),
        "In Progress" => label.cyan(),
        "Completed" => label.green(),
        "Cancelled" | "Skipped" | "No Show" => label.dimmed(),
        _ => label.normal(),
    }
}

fn blank_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

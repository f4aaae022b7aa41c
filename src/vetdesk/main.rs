use clap::{CommandFactory, Parser};
use console::Term;
use directories::ProjectDirs;
use std::path::PathBuf;
use vetdesk::api::VetdeskApi;
use vetdesk::commands::{animals, appointments, pets, queue, reports};
use vetdesk::error::{Result, VetError};
use vetdesk::model::{AnimalStatus, AppointmentStatus, Priority, QueueStatus, ReportType};
use vetdesk::session::SessionStore;
use vetdesk::store::ClinicStore;

mod args;
mod render;

use args::{AnimalCmd, ApptCmd, Cli, Commands, LoginMode, PetsCmd, QueueCmd, ReportCmd};
use render::print_messages;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: VetdeskApi,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Shell) => run_shell(&mut ctx),
        Some(cmd) => dispatch(&mut ctx, cmd),
        None => {
            Cli::command().print_help().map_err(VetError::Io)?;
            Ok(())
        }
    }
}

/// Clinic records are rebuilt from the seed roster on every start; only the
/// login session lives on disk, under `VETDESK_HOME` when set.
fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("VETDESK_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "vetdesk", "vetdesk")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let api = VetdeskApi::new(ClinicStore::seeded(), SessionStore::new(&data_dir))?;
    Ok(AppContext { api })
}

fn dispatch(ctx: &mut AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Shell => {
            println!("Already in a session.");
            Ok(())
        }
        Commands::Login { mode } => handle_login(ctx, mode),
        Commands::Logout => {
            let result = ctx.api.logout()?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Whoami => {
            let result = ctx.api.whoami()?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Animal(cmd) => handle_animal(ctx, cmd),
        Commands::Appt(cmd) => handle_appt(ctx, cmd),
        Commands::Queue(cmd) => handle_queue(ctx, cmd),
        Commands::Report(cmd) => handle_report(ctx, cmd),
        Commands::Pets(cmd) => handle_pets(ctx, cmd),
        Commands::AllPets {
            search,
            county,
            species,
        } => {
            let result = ctx
                .api
                .all_pets(&search, county.as_deref(), species.as_deref())?;
            render::print_pets(&result.pets);
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_login(ctx: &mut AppContext, mode: LoginMode) -> Result<()> {
    let result = match mode {
        LoginMode::Vet { email, password } => ctx.api.login_vet(&email, &password)?,
        LoginMode::Owner { email, password } => ctx.api.login_owner(&email, &password)?,
        LoginMode::Register {
            name,
            email,
            phone,
            password,
            confirm,
        } => ctx
            .api
            .register_owner(&name, &email, &phone, &password, &confirm)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_animal(ctx: &mut AppContext, cmd: AnimalCmd) -> Result<()> {
    match cmd {
        AnimalCmd::Register {
            name,
            species,
            breed,
            age,
            gender,
            owner,
            phone,
            email,
        } => {
            let result = ctx.api.register_animal(animals::RegisterAnimal {
                name,
                species,
                breed,
                age,
                gender,
                owner_name: owner,
                owner_phone: phone,
                owner_email: email,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        AnimalCmd::List { search } => {
            let result = ctx.api.list_animals(&search)?;
            render::print_animals(&result.animals);
            print_messages(&result.messages);
            Ok(())
        }
        AnimalCmd::View { id, json } => {
            let result = ctx.api.view_animal(&id)?;
            if json {
                if let Some(animal) = result.animals.first() {
                    render::print_json(animal)?;
                }
            } else {
                for animal in &result.animals {
                    render::print_animal_detail(animal);
                }
                print_messages(&result.messages);
            }
            Ok(())
        }
        AnimalCmd::Status { id, status } => {
            let status = parse_or_invalid::<AnimalStatus>(&status)?;
            let result = ctx.api.set_animal_status(&id, status)?;
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_appt(ctx: &mut AppContext, cmd: ApptCmd) -> Result<()> {
    match cmd {
        ApptCmd::Schedule {
            animal,
            date,
            time,
            reason,
            vet,
        } => {
            let result = ctx.api.schedule_appointment(appointments::ScheduleAppointment {
                animal_id: animal,
                date,
                time,
                reason,
                vet,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        ApptCmd::List { status } => {
            // Accept CLI spellings like "no-show" for the stored "No Show".
            let status = status.map(|s| match s.parse::<AppointmentStatus>() {
                Ok(parsed) => parsed.to_string(),
                Err(_) => s,
            });
            let result = ctx.api.list_appointments(status.as_deref())?;
            render::print_appointments(&result.appointments);
            print_messages(&result.messages);
            Ok(())
        }
        ApptCmd::View { id, json } => {
            let result = ctx.api.view_appointment(&id)?;
            if json {
                if let Some(appt) = result.appointments.first() {
                    render::print_json(appt)?;
                }
            } else {
                for appt in &result.appointments {
                    render::print_appointment_detail(appt);
                }
                print_messages(&result.messages);
            }
            Ok(())
        }
        ApptCmd::Complete { id } => {
            set_appt_status(ctx, &id, AppointmentStatus::Completed)
        }
        ApptCmd::Cancel { id } => set_appt_status(ctx, &id, AppointmentStatus::Cancelled),
        ApptCmd::Status { id, status } => {
            let status = parse_or_invalid::<AppointmentStatus>(&status)?;
            set_appt_status(ctx, &id, status)
        }
    }
}

fn set_appt_status(ctx: &mut AppContext, id: &str, status: AppointmentStatus) -> Result<()> {
    let result = ctx.api.set_appointment_status(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_queue(ctx: &mut AppContext, cmd: QueueCmd) -> Result<()> {
    match cmd {
        QueueCmd::Add {
            name,
            species,
            owner,
            phone,
            reason,
            priority,
            vet,
        } => {
            let priority = parse_or_invalid::<Priority>(&priority)?;
            let result = ctx.api.queue_add(queue::AddToQueue {
                animal_name: name,
                species,
                owner_name: owner,
                owner_phone: phone,
                reason,
                priority,
                vet,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        QueueCmd::List => {
            let result = ctx.api.queue_list()?;
            render::print_queue(&result.queue, result.queue_tally.as_ref());
            print_messages(&result.messages);
            Ok(())
        }
        QueueCmd::Start { id } => set_queue_status(ctx, &id, QueueStatus::InProgress),
        QueueCmd::Complete { id } => set_queue_status(ctx, &id, QueueStatus::Completed),
        QueueCmd::Skip { id } => set_queue_status(ctx, &id, QueueStatus::Skipped),
        QueueCmd::Remove { id } => {
            let result = ctx.api.queue_remove(&id)?;
            print_messages(&result.messages);
            Ok(())
        }
        QueueCmd::Status { id, status } => {
            let status = parse_or_invalid::<QueueStatus>(&status)?;
            set_queue_status(ctx, &id, status)
        }
    }
}

fn set_queue_status(ctx: &mut AppContext, id: &str, status: QueueStatus) -> Result<()> {
    let result = ctx.api.queue_set_status(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &mut AppContext, cmd: ReportCmd) -> Result<()> {
    match cmd {
        ReportCmd::Create {
            animal,
            date,
            report_type,
            diagnosis,
            treatment,
            medication,
            vet,
            notes,
            next_visit,
        } => {
            let report_type = parse_or_invalid::<ReportType>(&report_type)?;
            let result = ctx.api.create_report(reports::CreateReport {
                animal_id: animal,
                date,
                report_type: Some(report_type),
                diagnosis,
                treatment,
                medication,
                vet,
                notes,
                next_visit,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        ReportCmd::List {
            search,
            report_type,
        } => {
            let report_type = report_type.map(|t| match t.parse::<ReportType>() {
                Ok(parsed) => parsed.to_string(),
                Err(_) => t,
            });
            let result = ctx.api.list_reports(&search, report_type.as_deref())?;
            render::print_reports(&result.reports);
            print_messages(&result.messages);
            Ok(())
        }
        ReportCmd::View { id, json } => {
            let result = ctx.api.view_report(&id)?;
            if json {
                if let Some(report) = result.reports.first() {
                    render::print_json(report)?;
                }
            } else {
                for report in &result.reports {
                    render::print_report_detail(report);
                }
                print_messages(&result.messages);
            }
            Ok(())
        }
    }
}

fn handle_pets(ctx: &mut AppContext, cmd: PetsCmd) -> Result<()> {
    match cmd {
        PetsCmd::Register {
            name,
            species,
            breed,
            age,
            gender,
            color,
            weight,
            notes,
            county,
        } => {
            let result = ctx.api.register_pet(pets::RegisterPet {
                name,
                species,
                breed,
                age,
                gender,
                color,
                weight,
                notes,
                county,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        PetsCmd::List { search } => {
            let result = ctx.api.my_pets(&search)?;
            render::print_pets(&result.pets);
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn parse_or_invalid<T: std::str::FromStr<Err = String>>(s: &str) -> Result<T> {
    s.parse().map_err(VetError::Validation)
}

// ── Interactive shell ───────────────────────────────────────────────────

/// The interactive session is where the clinic roster behaves like a real
/// front desk: every command below runs against the same store, and
/// everything is discarded when the session ends.
fn run_shell(ctx: &mut AppContext) -> Result<()> {
    let term = Term::stdout();
    println!("VetDesk interactive session. Records last until you exit.");
    println!("Type commands without the leading 'vetdesk'; 'exit' leaves.");

    loop {
        term.write_str("vetdesk> ")?;
        let line = term.read_line()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let mut argv = vec!["vetdesk".to_string()];
        argv.extend(words);

        match Cli::try_parse_from(&argv) {
            Ok(cli) => match cli.command {
                Some(cmd) => {
                    if let Err(e) = dispatch(ctx, cmd) {
                        eprintln!("Error: {}", e);
                    }
                }
                None => {
                    Cli::command().print_help().map_err(VetError::Io)?;
                }
            },
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    println!("Session ended. Clinic records discarded.");
    Ok(())
}

/// Split a shell line into words, honoring double and single quotes so
/// multi-word names and reasons survive.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(VetError::Validation("Unterminated quote.".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let words = tokenize("queue list").unwrap();
        assert_eq!(words, vec!["queue", "list"]);
    }

    #[test]
    fn tokenize_keeps_quoted_words_together() {
        let words = tokenize("animal register --name \"Simba Jr\" --owner 'John Kamau'").unwrap();
        assert_eq!(
            words,
            vec!["animal", "register", "--name", "Simba Jr", "--owner", "John Kamau"]
        );
    }

    #[test]
    fn tokenize_handles_empty_quotes_and_extra_spaces() {
        let words = tokenize("  animal   view  \"\"  ").unwrap();
        assert_eq!(words, vec!["animal", "view", ""]);
    }

    #[test]
    fn tokenize_rejects_unterminated_quotes() {
        assert!(tokenize("animal register --name \"Simba").is_err());
    }
}

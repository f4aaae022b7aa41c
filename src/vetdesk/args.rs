use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vetdesk")]
#[command(about = "Veterinary clinic front desk in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session; clinic data lives until you exit
    Shell,

    /// Log in as a vet or a pet owner
    Login {
        #[command(subcommand)]
        mode: LoginMode,
    },

    /// Clear the saved session
    Logout,

    /// Show the active session
    Whoami,

    /// Animal registration desk (vet)
    #[command(subcommand, alias = "a")]
    Animal(AnimalCmd),

    /// Appointment scheduling desk (vet)
    #[command(subcommand, alias = "appointment")]
    Appt(ApptCmd),

    /// Walk-in queue (vet)
    #[command(subcommand, alias = "q")]
    Queue(QueueCmd),

    /// Medical reports desk (vet)
    #[command(subcommand, alias = "rpt")]
    Report(ReportCmd),

    /// Your registered pets (owner)
    #[command(subcommand)]
    Pets(PetsCmd),

    /// Directory of every owner-registered pet (vet)
    AllPets {
        /// Match against pet name, owner, breed or ID
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact county filter ("all" clears it)
        #[arg(long)]
        county: Option<String>,

        /// Exact species filter ("all" clears it)
        #[arg(long)]
        species: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LoginMode {
    /// Staff login against the clinic credential list
    Vet {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Owner login; any non-empty email and password works
    Owner {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Owner sign-up; logs you in directly
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnimalCmd {
    /// Register a new animal
    #[command(alias = "new")]
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        species: String,
        #[arg(long, default_value = "")]
        breed: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
    },

    /// List animals, newest first
    #[command(alias = "ls")]
    List {
        /// Match against name, ID, owner or species
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show one animal in full
    #[command(alias = "v")]
    View {
        id: String,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the animal's status (active, under-treatment, discharged)
    Status { id: String, status: String },
}

#[derive(Subcommand, Debug)]
pub enum ApptCmd {
    /// Schedule an appointment for a registered animal
    #[command(alias = "new")]
    Schedule {
        /// Animal ID (e.g. A-001); name, species and owner are copied
        /// from the registration record
        #[arg(long)]
        animal: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        vet: String,
    },

    /// List appointments
    #[command(alias = "ls")]
    List {
        /// Filter: scheduled, completed, cancelled, no-show, or all
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one appointment in full
    #[command(alias = "v")]
    View {
        id: String,
        #[arg(long)]
        json: bool,
    },

    /// Mark a scheduled appointment completed
    Complete { id: String },

    /// Mark a scheduled appointment cancelled
    Cancel { id: String },

    /// Set any status directly (scheduled, completed, cancelled, no-show)
    Status { id: String, status: String },
}

#[derive(Subcommand, Debug)]
pub enum QueueCmd {
    /// Add a walk-in patient to the queue
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        species: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        reason: String,
        /// emergency, high, normal or low
        #[arg(long, default_value = "normal")]
        priority: String,
        #[arg(long)]
        vet: String,
    },

    /// Show the queue in service order
    #[command(alias = "ls")]
    List,

    /// Start serving a waiting entry
    Start { id: String },

    /// Finish an in-progress entry
    Complete { id: String },

    /// Skip an entry
    Skip { id: String },

    /// Remove a finished or skipped entry
    #[command(alias = "rm")]
    Remove { id: String },

    /// Set any status directly (waiting, in-progress, completed, skipped)
    Status { id: String, status: String },
}

#[derive(Subcommand, Debug)]
pub enum ReportCmd {
    /// Generate a medical report for a registered animal
    #[command(alias = "new")]
    Create {
        /// Animal ID (e.g. A-001)
        #[arg(long)]
        animal: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// treatment, vaccination, diagnosis, discharge or follow-up
        #[arg(long = "type")]
        report_type: String,
        #[arg(long)]
        diagnosis: String,
        #[arg(long)]
        treatment: String,
        #[arg(long, default_value = "")]
        medication: String,
        #[arg(long)]
        vet: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// YYYY-MM-DD, optional
        #[arg(long, default_value = "")]
        next_visit: String,
    },

    /// List reports
    #[command(alias = "ls")]
    List {
        /// Match against animal name, ID, owner or diagnosis
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter by report type ("all" clears it)
        #[arg(long = "type")]
        report_type: Option<String>,
    },

    /// Show one report in full
    #[command(alias = "v")]
    View {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PetsCmd {
    /// Register one of your pets
    #[command(alias = "new")]
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        species: String,
        #[arg(long, default_value = "")]
        breed: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long)]
        gender: String,
        #[arg(long, default_value = "")]
        color: String,
        #[arg(long, default_value = "")]
        weight: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// One of the 47 Kenyan counties
        #[arg(long)]
        county: String,
    },

    /// List your pets
    #[command(alias = "ls")]
    List {
        /// Match against name, species or breed
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

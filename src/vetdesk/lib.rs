//! # VetDesk Architecture
//!
//! VetDesk is a **UI-agnostic clinic-desk library** with a CLI client on
//! top. The binary is a thin shell; anything another front end would need
//! lives behind the API facade.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! CLI Layer (main.rs, args.rs, render.rs)
//!   - Parses arguments, renders tables and cards, owns the interactive
//!     shell. The ONLY place that knows about stdout/stderr/exit codes.
//!           |
//!           v
//! API Layer (api.rs)
//!   - Thin facade over commands: loads the session, gates operations by
//!     role (vet desks vs. owner pets), returns structured Result types.
//!           |
//!           v
//! Command Layer (commands/*.rs)
//!   - Pure business logic per desk: validation, search, message shaping.
//!     No I/O assumptions whatsoever.
//!           |
//!           v
//! Store Layer (store.rs)
//!   - One in-memory ClinicStore per process, seeded with the sample
//!     roster; owns ID counters and all mutation.
//! ```
//!
//! ## State model
//!
//! Clinic records live only in memory and last exactly one session: a
//! one-shot invocation seeds the store, runs a command and exits, while the
//! interactive shell keeps the store alive across commands. The login
//! session is the single persisted key, a small JSON file under the data
//! directory (see [`session`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each desk
//! - [`store`]: The in-memory record store and its create/update/remove ops
//! - [`model`]: Record types and the closed categorical enums
//! - [`ids`]: Monotonic per-domain display-ID counters
//! - [`queue`]: Walk-in queue service ordering and tallies
//! - [`search`]: Substring search and sentinel category filters
//! - [`lifecycle`]: Which actions each status affords
//! - [`session`]: Login, credentials, and the persisted session file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod queue;
pub mod search;
pub mod session;
pub mod store;

mod seed;

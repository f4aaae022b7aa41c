//! # API Facade
//!
//! Single entry point for every VetDesk operation, regardless of the UI in
//! front of it. The facade owns the clinic store and the session store,
//! loads the signed-in user at construction, and gates each operation by
//! role: clinic desks (animals, appointments, queue, reports, the all-pets
//! directory) require a vet session, while `pets` requires an owner session.
//!
//! No business logic lives here; commands do the work and the facade
//! dispatches, updates the persisted session on login/logout, and returns
//! structured `Result<CmdResult>` values. Nothing in this module prints.

use crate::commands::{self, CmdResult};
use crate::error::{Result, VetError};
use crate::model::{AnimalStatus, AppointmentStatus, QueueStatus, Role};
use crate::session::{self, AuthUser, SessionStore};
use crate::store::ClinicStore;

pub struct VetdeskApi {
    store: ClinicStore,
    session: SessionStore,
    user: Option<AuthUser>,
}

impl VetdeskApi {
    pub fn new(store: ClinicStore, session: SessionStore) -> Result<Self> {
        let user = session.load()?;
        Ok(Self {
            store,
            session,
            user,
        })
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    fn require_vet(&self) -> Result<&AuthUser> {
        match &self.user {
            Some(user) if user.role == Role::Vet => Ok(user),
            Some(_) => Err(VetError::Auth(
                "This desk is for clinic staff. Log in with `vetdesk login vet`.".to_string(),
            )),
            None => Err(VetError::Auth(
                "Not logged in. Run `vetdesk login vet` first.".to_string(),
            )),
        }
    }

    fn require_owner(&self) -> Result<&AuthUser> {
        match &self.user {
            Some(user) if user.role == Role::Owner => Ok(user),
            Some(_) => Err(VetError::Auth(
                "Pet registration is for owners. Log in with `vetdesk login owner`.".to_string(),
            )),
            None => Err(VetError::Auth(
                "Not logged in. Run `vetdesk login owner` first.".to_string(),
            )),
        }
    }

    fn start_session(&mut self, user: AuthUser) -> Result<CmdResult> {
        self.session.save(&user)?;
        let result = commands::auth::logged_in(&user);
        self.user = Some(user);
        result
    }

    // ── Auth ────────────────────────────────────────────────────────────

    pub fn login_vet(&mut self, email: &str, password: &str) -> Result<CmdResult> {
        let user = session::login_vet(email, password)?;
        self.start_session(user)
    }

    pub fn login_owner(&mut self, email: &str, password: &str) -> Result<CmdResult> {
        let user = session::login_owner(email, password)?;
        self.start_session(user)
    }

    pub fn register_owner(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
        confirm: &str,
    ) -> Result<CmdResult> {
        let user = session::register_owner(name, email, phone, password, confirm)?;
        self.start_session(user)
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        self.session.clear()?;
        let result = commands::auth::logged_out(self.user.as_ref());
        self.user = None;
        result
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        commands::auth::whoami(self.user.as_ref())
    }

    // ── Animals ─────────────────────────────────────────────────────────

    pub fn register_animal(&mut self, form: commands::animals::RegisterAnimal) -> Result<CmdResult> {
        self.require_vet()?;
        commands::animals::register(&mut self.store, form)
    }

    pub fn list_animals(&self, query: &str) -> Result<CmdResult> {
        self.require_vet()?;
        commands::animals::list(&self.store, query)
    }

    pub fn view_animal(&self, id: &str) -> Result<CmdResult> {
        self.require_vet()?;
        commands::animals::view(&self.store, id)
    }

    pub fn set_animal_status(&mut self, id: &str, status: AnimalStatus) -> Result<CmdResult> {
        self.require_vet()?;
        commands::animals::set_status(&mut self.store, id, status)
    }

    // ── Appointments ────────────────────────────────────────────────────

    pub fn schedule_appointment(
        &mut self,
        form: commands::appointments::ScheduleAppointment,
    ) -> Result<CmdResult> {
        self.require_vet()?;
        commands::appointments::schedule(&mut self.store, form)
    }

    pub fn list_appointments(&self, status: Option<&str>) -> Result<CmdResult> {
        self.require_vet()?;
        commands::appointments::list(&self.store, status)
    }

    pub fn view_appointment(&self, id: &str) -> Result<CmdResult> {
        self.require_vet()?;
        commands::appointments::view(&self.store, id)
    }

    pub fn set_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<CmdResult> {
        self.require_vet()?;
        commands::appointments::set_status(&mut self.store, id, status)
    }

    // ── Queue ───────────────────────────────────────────────────────────

    pub fn queue_add(&mut self, form: commands::queue::AddToQueue) -> Result<CmdResult> {
        self.require_vet()?;
        commands::queue::add(&mut self.store, form)
    }

    pub fn queue_list(&self) -> Result<CmdResult> {
        self.require_vet()?;
        commands::queue::list(&self.store)
    }

    pub fn queue_set_status(&mut self, id: &str, status: QueueStatus) -> Result<CmdResult> {
        self.require_vet()?;
        commands::queue::set_status(&mut self.store, id, status)
    }

    pub fn queue_remove(&mut self, id: &str) -> Result<CmdResult> {
        self.require_vet()?;
        commands::queue::remove(&mut self.store, id)
    }

    // ── Reports ─────────────────────────────────────────────────────────

    pub fn create_report(&mut self, form: commands::reports::CreateReport) -> Result<CmdResult> {
        self.require_vet()?;
        commands::reports::create(&mut self.store, form)
    }

    pub fn list_reports(&self, query: &str, report_type: Option<&str>) -> Result<CmdResult> {
        self.require_vet()?;
        commands::reports::list(&self.store, query, report_type)
    }

    pub fn view_report(&self, id: &str) -> Result<CmdResult> {
        self.require_vet()?;
        commands::reports::view(&self.store, id)
    }

    // ── Pets ────────────────────────────────────────────────────────────

    pub fn register_pet(&mut self, form: commands::pets::RegisterPet) -> Result<CmdResult> {
        let owner = self.require_owner()?.name.clone();
        commands::pets::register(&mut self.store, &owner, form)
    }

    pub fn my_pets(&self, query: &str) -> Result<CmdResult> {
        let owner = self.require_owner()?;
        commands::pets::my_pets(&self.store, &owner.name, query)
    }

    pub fn all_pets(
        &self,
        query: &str,
        county: Option<&str>,
        species: Option<&str>,
    ) -> Result<CmdResult> {
        self.require_vet()?;
        commands::pets::all_pets(&self.store, query, county, species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_in(dir: &std::path::Path) -> VetdeskApi {
        VetdeskApi::new(ClinicStore::seeded(), SessionStore::new(dir)).unwrap()
    }

    #[test]
    fn clinic_desks_require_a_vet_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api_in(dir.path());
        assert!(api.queue_list().is_err());

        api.login_owner("jane@example.com", "pw").unwrap();
        assert!(api.queue_list().is_err());
        assert!(api.list_animals("").is_err());

        api.login_vet("dr.peter@vetms.ac.ke", "vet123").unwrap();
        assert_eq!(api.queue_list().unwrap().queue.len(), 4);
    }

    #[test]
    fn pet_registration_requires_an_owner_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api_in(dir.path());
        api.login_vet("admin@vetms.ac.ke", "admin123").unwrap();
        assert!(api.my_pets("").is_err());

        api.login_owner("jane@example.com", "pw").unwrap();
        assert!(api.my_pets("").unwrap().pets.is_empty());
        // The all-pets directory is the vet view, off limits to owners.
        assert!(api.all_pets("", None, None).is_err());
    }

    #[test]
    fn login_persists_and_a_new_api_picks_it_up() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api_in(dir.path());
        api.login_vet("dr.wanjiku@vetms.ac.ke", "vet123").unwrap();
        drop(api);

        let api = api_in(dir.path());
        assert_eq!(api.user().map(|u| u.name.as_str()), Some("Dr. Wanjiku"));

        let mut api = api_in(dir.path());
        api.logout().unwrap();
        let api = api_in(dir.path());
        assert!(api.user().is_none());
    }

    #[test]
    fn clinic_state_is_per_process_but_session_is_not() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api_in(dir.path());
        api.login_vet("dr.peter@vetms.ac.ke", "vet123").unwrap();
        api.register_animal(commands::animals::RegisterAnimal {
            name: "Rocky".to_string(),
            species: "Dog".to_string(),
            gender: "Male".to_string(),
            owner_name: "Sam Otieno".to_string(),
            owner_phone: "0799999999".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(api.list_animals("").unwrap().animals.len(), 4);

        // A fresh store (new process) is back to the seed roster.
        let api = api_in(dir.path());
        assert_eq!(api.list_animals("").unwrap().animals.len(), 3);
    }
}

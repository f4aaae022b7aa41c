//! In-memory record store for all five domains.
//!
//! One [`ClinicStore`] is constructed at process start and passed by
//! reference to everything that reads or mutates it; there is no hidden
//! module-level state. All mutation is synchronous and immediately visible
//! to the next read. Nothing here persists: the store (and its seed data)
//! lives exactly as long as the session.
//!
//! Create operations assign the generated ID and default status and insert
//! new records at the front, except queue entries which append at the back.
//! Status updates replace the value without checking that the transition is
//! offered (see [`crate::lifecycle`]); removal exists only for the queue.

use crate::error::{Result, VetError};
use crate::ids::IdCounter;
use crate::model::{
    Animal, AnimalStatus, Appointment, AppointmentStatus, MedicalReport, Pet, Priority,
    QueueEntry, QueueStatus, ReportType,
};
use chrono::{NaiveDate, NaiveTime, Utc};

/// Field bundle for registering an animal. Validation happens in the command
/// layer; the store only assigns identity and defaults.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: String,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub animal_id: String,
    pub animal_name: String,
    pub species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
    pub vet: String,
}

#[derive(Debug, Clone)]
pub struct NewQueueEntry {
    pub animal_name: String,
    pub species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub reason: String,
    pub priority: Priority,
    pub vet: String,
}

#[derive(Debug, Clone)]
pub struct NewReport {
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

#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub color: String,
    pub weight: String,
    pub notes: String,
    pub county: String,
    pub owner_name: String,
}

pub struct ClinicStore {
    pub(crate) animals: Vec<Animal>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) queue: Vec<QueueEntry>,
    pub(crate) reports: Vec<MedicalReport>,
    pub(crate) pets: Vec<Pet>,
    pub(crate) animal_ids: IdCounter,
    pub(crate) appointment_ids: IdCounter,
    pub(crate) queue_ids: IdCounter,
    pub(crate) report_ids: IdCounter,
    pub(crate) pet_ids: IdCounter,
    pub(crate) next_position: u32,
}

impl Default for ClinicStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicStore {
    /// An empty store with fresh counters.
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            appointments: Vec::new(),
            queue: Vec::new(),
            reports: Vec::new(),
            pets: Vec::new(),
            animal_ids: IdCounter::new("A"),
            appointment_ids: IdCounter::new("APT"),
            queue_ids: IdCounter::new("Q"),
            report_ids: IdCounter::new("RPT"),
            pet_ids: IdCounter::new("P"),
            next_position: 1,
        }
    }

    /// The store every session starts from: sample records for each domain,
    /// with counters advanced past them.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        crate::seed::apply(&mut store);
        store
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    pub fn reports(&self) -> &[MedicalReport] {
        &self.reports
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn animal(&self, id: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(id))
    }

    pub fn queue_entry(&self, id: &str) -> Option<&QueueEntry> {
        self.queue.iter().find(|q| q.id.eq_ignore_ascii_case(id))
    }

    pub fn report(&self, id: &str) -> Option<&MedicalReport> {
        self.reports.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    pub fn create_animal(&mut self, new: NewAnimal) -> &Animal {
        let animal = Animal {
            id: self.animal_ids.next_id(),
            name: new.name,
            species: new.species,
            breed: new.breed,
            age: new.age,
            gender: new.gender,
            owner_name: new.owner_name,
            owner_phone: new.owner_phone,
            owner_email: new.owner_email,
            registered_at: Utc::now().date_naive(),
            status: AnimalStatus::Active,
        };
        self.animals.insert(0, animal);
        &self.animals[0]
    }

    pub fn create_appointment(&mut self, new: NewAppointment) -> &Appointment {
        let appointment = Appointment {
            id: self.appointment_ids.next_id(),
            animal_id: new.animal_id,
            animal_name: new.animal_name,
            species: new.species,
            owner_name: new.owner_name,
            owner_phone: new.owner_phone,
            date: new.date,
            time: new.time,
            reason: new.reason,
            vet: new.vet,
            status: AppointmentStatus::Scheduled,
        };
        self.appointments.insert(0, appointment);
        &self.appointments[0]
    }

    /// Queue entries append at the back; position comes from its own
    /// monotonic counter, so removals leave gaps rather than shifting later
    /// arrivals forward.
    pub fn enqueue(&mut self, new: NewQueueEntry) -> &QueueEntry {
        let entry = QueueEntry {
            id: self.queue_ids.next_id(),
            position: self.next_position,
            animal_name: new.animal_name,
            species: new.species,
            owner_name: new.owner_name,
            owner_phone: new.owner_phone,
            reason: new.reason,
            priority: new.priority,
            status: QueueStatus::Waiting,
            arrived_at: Utc::now(),
            vet: new.vet,
        };
        self.next_position += 1;
        let idx = self.queue.len();
        self.queue.push(entry);
        &self.queue[idx]
    }

    pub fn create_report(&mut self, new: NewReport) -> &MedicalReport {
        let report = MedicalReport {
            id: self.report_ids.next_id(),
            animal_id: new.animal_id,
            animal_name: new.animal_name,
            species: new.species,
            owner_name: new.owner_name,
            date: new.date,
            report_type: new.report_type,
            diagnosis: new.diagnosis,
            treatment: new.treatment,
            medication: new.medication,
            vet: new.vet,
            notes: new.notes,
            next_visit: new.next_visit,
        };
        self.reports.insert(0, report);
        &self.reports[0]
    }

    pub fn create_pet(&mut self, new: NewPet) -> &Pet {
        let pet = Pet {
            id: self.pet_ids.next_id(),
            name: new.name,
            species: new.species,
            breed: new.breed,
            age: new.age,
            gender: new.gender,
            color: new.color,
            weight: new.weight,
            notes: new.notes,
            county: new.county,
            owner_name: new.owner_name,
            registered_at: Utc::now().date_naive(),
        };
        self.pets.insert(0, pet);
        &self.pets[0]
    }

    pub fn set_animal_status(&mut self, id: &str, status: AnimalStatus) -> Result<&Animal> {
        let animal = self
            .animals
            .iter_mut()
            .find(|a| a.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| VetError::NotFound(format!("animal {}", id)))?;
        animal.status = status;
        Ok(animal)
    }

    /// Replace the status of the matching appointment. Any target status is
    /// accepted from any current status.
    pub fn set_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<&Appointment> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| VetError::NotFound(format!("appointment {}", id)))?;
        appointment.status = status;
        Ok(appointment)
    }

    pub fn set_queue_status(&mut self, id: &str, status: QueueStatus) -> Result<&QueueEntry> {
        let entry = self
            .queue
            .iter_mut()
            .find(|q| q.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| VetError::NotFound(format!("queue entry {}", id)))?;
        entry.status = status;
        Ok(entry)
    }

    /// Drop a queue entry entirely. The only domain supporting removal.
    pub fn remove_queue_entry(&mut self, id: &str) -> Result<QueueEntry> {
        let idx = self
            .queue
            .iter()
            .position(|q| q.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| VetError::NotFound(format!("queue entry {}", id)))?;
        Ok(self.queue.remove(idx))
    }
}

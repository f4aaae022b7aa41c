//! Sample records every session starts with. Queue arrival instants are
//! staggered relative to process start so the "arrived N minutes ago"
//! rendering stays meaningful.

use crate::ids::IdCounter;
use crate::model::{
    Animal, AnimalStatus, Appointment, AppointmentStatus, MedicalReport, Pet, Priority,
    QueueEntry, QueueStatus, ReportType,
};
use crate::store::ClinicStore;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

pub(crate) fn apply(store: &mut ClinicStore) {
    store.animals = vec![
        Animal {
            id: "A-001".into(),
            name: "Simba".into(),
            species: "Dog".into(),
            breed: "German Shepherd".into(),
            age: "3 years".into(),
            gender: "Male".into(),
            owner_name: "John Mwangi".into(),
            owner_phone: "0712345678".into(),
            owner_email: "john@example.com".into(),
            registered_at: date(2025, 1, 10),
            status: AnimalStatus::Active,
        },
        Animal {
            id: "A-002".into(),
            name: "Bella".into(),
            species: "Cat".into(),
            breed: "Persian".into(),
            age: "2 years".into(),
            gender: "Female".into(),
            owner_name: "Mary Wanjiku".into(),
            owner_phone: "0723456789".into(),
            owner_email: "mary@example.com".into(),
            registered_at: date(2025, 1, 15),
            status: AnimalStatus::UnderTreatment,
        },
        Animal {
            id: "A-003".into(),
            name: "Daisy".into(),
            species: "Cow".into(),
            breed: "Friesian".into(),
            age: "5 years".into(),
            gender: "Female".into(),
            owner_name: "Peter Kamau".into(),
            owner_phone: "0734567890".into(),
            owner_email: "peter@example.com".into(),
            registered_at: date(2025, 2, 1),
            status: AnimalStatus::Active,
        },
    ];
    store.animal_ids = IdCounter::starting_at("A", 4);

    store.appointments = vec![
        Appointment {
            id: "APT-001".into(),
            animal_id: "A-001".into(),
            animal_name: "Simba".into(),
            species: "Dog".into(),
            owner_name: "John Mwangi".into(),
            owner_phone: "0712345678".into(),
            date: date(2025, 2, 21),
            time: time(9, 0),
            reason: "Routine vaccination".into(),
            vet: "Dr. Peter".into(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "APT-002".into(),
            animal_id: "A-002".into(),
            animal_name: "Bella".into(),
            species: "Cat".into(),
            owner_name: "Mary Wanjiku".into(),
            owner_phone: "0723456789".into(),
            date: date(2025, 2, 21),
            time: time(10, 30),
            reason: "Skin infection treatment".into(),
            vet: "Dr. Kamau".into(),
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: "APT-003".into(),
            animal_id: "A-003".into(),
            animal_name: "Daisy".into(),
            species: "Cow".into(),
            owner_name: "Peter Kamau".into(),
            owner_phone: "0734567890".into(),
            date: date(2025, 2, 22),
            time: time(8, 0),
            reason: "Deworming".into(),
            vet: "Dr. Peter".into(),
            status: AppointmentStatus::Scheduled,
        },
    ];
    store.appointment_ids = IdCounter::starting_at("APT", 4);

    let now = Utc::now();
    store.queue = vec![
        QueueEntry {
            id: "Q-001".into(),
            position: 1,
            animal_name: "Simba".into(),
            species: "Dog".into(),
            owner_name: "John Mwangi".into(),
            owner_phone: "0712345678".into(),
            reason: "Vaccination".into(),
            priority: Priority::Normal,
            status: QueueStatus::InProgress,
            arrived_at: now - Duration::minutes(45),
            vet: "Dr. Omuya".into(),
        },
        QueueEntry {
            id: "Q-002".into(),
            position: 2,
            animal_name: "Daisy".into(),
            species: "Cow".into(),
            owner_name: "Peter Kamau".into(),
            owner_phone: "0734567890".into(),
            reason: "Deworming".into(),
            priority: Priority::Normal,
            status: QueueStatus::Waiting,
            arrived_at: now - Duration::minutes(30),
            vet: "Dr. Omuya".into(),
        },
        QueueEntry {
            id: "Q-003".into(),
            position: 3,
            animal_name: "Rex".into(),
            species: "Dog".into(),
            owner_name: "Alice Njeri".into(),
            owner_phone: "0745678901".into(),
            reason: "Emergency - broken leg".into(),
            priority: Priority::Emergency,
            status: QueueStatus::Waiting,
            arrived_at: now - Duration::minutes(20),
            vet: "Dr. Kamau".into(),
        },
        QueueEntry {
            id: "Q-004".into(),
            position: 4,
            animal_name: "Mimi".into(),
            species: "Cat".into(),
            owner_name: "Grace Wambua".into(),
            owner_phone: "0756789012".into(),
            reason: "Routine checkup".into(),
            priority: Priority::Low,
            status: QueueStatus::Waiting,
            arrived_at: now - Duration::minutes(10),
            vet: "Dr. Njoroge".into(),
        },
    ];
    store.queue_ids = IdCounter::starting_at("Q", 5);
    store.next_position = 5;

    store.reports = vec![
        MedicalReport {
            id: "RPT-001".into(),
            animal_id: "A-001".into(),
            animal_name: "Simba".into(),
            species: "Dog".into(),
            owner_name: "John Mwangi".into(),
            date: date(2025, 2, 10),
            report_type: ReportType::Vaccination,
            diagnosis: "Healthy - routine vaccination".into(),
            treatment: "Rabies vaccine administered".into(),
            medication: "Rabies vaccine (1 dose)".into(),
            vet: "Dr. Omuya".into(),
            notes: "Animal is in good health. No adverse reactions observed.".into(),
            next_visit: Some(date(2026, 2, 10)),
        },
        MedicalReport {
            id: "RPT-002".into(),
            animal_id: "A-002".into(),
            animal_name: "Bella".into(),
            species: "Cat".into(),
            owner_name: "Mary Wanjiku".into(),
            date: date(2025, 2, 15),
            report_type: ReportType::Treatment,
            diagnosis: "Dermatitis - skin infection".into(),
            treatment: "Topical antifungal cream applied. Oral antibiotics prescribed.".into(),
            medication: "Amoxicillin 250mg (7 days), Clotrimazole cream".into(),
            vet: "Dr. Kamau".into(),
            notes: "Owner advised to keep animal dry and clean. Return in 7 days for follow-up."
                .into(),
            next_visit: Some(date(2025, 2, 22)),
        },
        MedicalReport {
            id: "RPT-003".into(),
            animal_id: "A-003".into(),
            animal_name: "Daisy".into(),
            species: "Cow".into(),
            owner_name: "Peter Kamau".into(),
            date: date(2025, 2, 18),
            report_type: ReportType::Diagnosis,
            diagnosis: "Mild respiratory infection".into(),
            treatment: "Antibiotic injection administered. Supportive care recommended.".into(),
            medication: "Oxytetracycline 20% (3 days)".into(),
            vet: "Dr. Omuya".into(),
            notes: "Isolate from other cattle. Monitor temperature daily.".into(),
            next_visit: Some(date(2025, 2, 25)),
        },
    ];
    store.report_ids = IdCounter::starting_at("RPT", 4);

    store.pets = vec![Pet {
        id: "P-001".into(),
        name: "Max".into(),
        species: "Dog".into(),
        breed: "German Shepherd".into(),
        age: "3 years".into(),
        gender: "Male".into(),
        color: "Black & Tan".into(),
        weight: "30 kg".into(),
        notes: "Vaccinated. Friendly with children.".into(),
        county: "Nairobi".into(),
        owner_name: "Jane Wanjiku".into(),
        registered_at: date(2025, 1, 15),
    }];
    store.pet_ids = IdCounter::starting_at("P", 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_matches_the_sample_roster() {
        let store = ClinicStore::seeded();
        assert_eq!(store.animals().len(), 3);
        assert_eq!(store.appointments().len(), 3);
        assert_eq!(store.queue().len(), 4);
        assert_eq!(store.reports().len(), 3);
        assert_eq!(store.pets().len(), 1);
        assert_eq!(store.animals()[0].name, "Simba");
        assert_eq!(store.pets()[0].owner_name, "Jane Wanjiku");
    }

    #[test]
    fn counters_continue_after_the_seed() {
        let mut store = ClinicStore::seeded();
        let entry = store.enqueue(crate::store::NewQueueEntry {
            animal_name: "Nala".into(),
            species: "Cat".into(),
            owner_name: "Grace Wambua".into(),
            owner_phone: "0756789012".into(),
            reason: "Vaccination".into(),
            priority: Priority::Normal,
            vet: "Dr. Omuya".into(),
        });
        assert_eq!(entry.id, "Q-005");
        assert_eq!(entry.position, 5);
    }
}

//! Walk-in queue operations. Walk-ins stay free-form (an unregistered
//! animal may be queued), unlike appointments which require a registered
//! animal ID.

use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Priority, QueueStatus};
use crate::queue::{ordered, tally};
use crate::store::{ClinicStore, NewQueueEntry};

#[derive(Debug, Clone)]
pub struct AddToQueue {
    pub animal_name: String,
    pub species: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub reason: String,
    pub priority: Priority,
    pub vet: String,
}

pub fn add(store: &mut ClinicStore, form: AddToQueue) -> Result<CmdResult> {
    let animal_name = require(&form.animal_name, "Animal name is required.")?;
    let species = require(&form.species, "Species is required.")?;
    let owner_name = require(&form.owner_name, "Owner name is required.")?;
    let owner_phone = require(&form.owner_phone, "Owner phone is required.")?;
    let reason = require(&form.reason, "Reason for visit is required.")?;
    let vet = require(&form.vet, "Assigned vet is required.")?;

    let entry = store
        .enqueue(NewQueueEntry {
            animal_name,
            species,
            owner_name,
            owner_phone,
            reason,
            priority: form.priority,
            vet,
        })
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} added to queue as {}.",
        entry.animal_name, entry.id
    )));
    Ok(result.with_queue(vec![entry], tally(store.queue())))
}

/// The queue in service order plus the waiting/in-progress/completed tallies.
pub fn list(store: &ClinicStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_queue(ordered(store.queue()), tally(store.queue())))
}

pub fn set_status(store: &mut ClinicStore, id: &str, status: QueueStatus) -> Result<CmdResult> {
    let entry = store.set_queue_status(id, status)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} ({}) is now {}.",
        entry.animal_name, entry.id, entry.status
    )));
    Ok(result.with_queue(vec![entry], tally(store.queue())))
}

pub fn remove(store: &mut ClinicStore, id: &str) -> Result<CmdResult> {
    let entry = store.remove_queue_entry(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} ({}) removed from the queue.",
        entry.animal_name, entry.id
    )));
    Ok(result.with_queue(Vec::new(), tally(store.queue())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_in(name: &str, priority: Priority) -> AddToQueue {
        AddToQueue {
            animal_name: name.to_string(),
            species: "Dog".to_string(),
            owner_name: "Alice Njeri".to_string(),
            owner_phone: "0745678901".to_string(),
            reason: "Limping".to_string(),
            priority,
            vet: "Dr. Kamau".to_string(),
        }
    }

    #[test]
    fn add_reports_the_assigned_queue_id() {
        let mut store = ClinicStore::seeded();
        let result = add(&mut store, walk_in("Rafiki", Priority::High)).unwrap();
        assert_eq!(result.queue[0].id, "Q-005");
        assert!(result.messages[0]
            .content
            .contains("Rafiki added to queue as Q-005."));
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut store = ClinicStore::seeded();
        let mut form = walk_in("Rafiki", Priority::Normal);
        form.reason = String::new();
        assert!(add(&mut store, form).is_err());
        assert_eq!(store.queue().len(), 4);
    }

    #[test]
    fn list_returns_service_order_not_insertion_order() {
        // Seed insertion order: Simba, Daisy, Rex(Emergency), Mimi(Low).
        let store = ClinicStore::seeded();
        let result = list(&store).unwrap();
        let names: Vec<&str> = result.queue.iter().map(|q| q.animal_name.as_str()).collect();
        assert_eq!(names, vec!["Rex", "Simba", "Daisy", "Mimi"]);

        let tally = result.queue_tally.unwrap();
        assert_eq!(tally.waiting, 3);
        assert_eq!(tally.in_progress, 1);
        assert_eq!(tally.completed, 0);
    }

    #[test]
    fn listing_never_mutates_stored_order() {
        let store = ClinicStore::seeded();
        list(&store).unwrap();
        assert_eq!(store.queue()[0].animal_name, "Simba");
        assert_eq!(store.queue()[3].animal_name, "Mimi");
    }

    #[test]
    fn status_flow_and_removal() {
        let mut store = ClinicStore::seeded();
        set_status(&mut store, "Q-002", QueueStatus::InProgress).unwrap();
        set_status(&mut store, "Q-002", QueueStatus::Completed).unwrap();
        let result = remove(&mut store, "Q-002").unwrap();
        assert_eq!(store.queue().len(), 3);
        assert!(result.messages[0].content.contains("removed"));
        assert!(remove(&mut store, "Q-002").is_err());
    }
}

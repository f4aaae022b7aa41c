//! Animal registration and lookup.

use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{Result, VetError};
use crate::model::{Animal, AnimalStatus};
use crate::search::matches_query;
use crate::store::{ClinicStore, NewAnimal};

/// Raw form input for registering an animal. Name, species, gender, owner
/// name and owner phone are mandatory; the rest may be blank.
#[derive(Debug, Clone, Default)]
pub struct RegisterAnimal {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_email: String,
}

pub fn register(store: &mut ClinicStore, form: RegisterAnimal) -> Result<CmdResult> {
    let name = require(&form.name, "Animal name is required.")?;
    let species = require(&form.species, "Species is required.")?;
    let gender = require(&form.gender, "Gender is required.")?;
    let owner_name = require(&form.owner_name, "Owner name is required.")?;
    let owner_phone = require(&form.owner_phone, "Owner phone is required.")?;

    let animal = store
        .create_animal(NewAnimal {
            name,
            species,
            breed: form.breed.trim().to_string(),
            age: form.age.trim().to_string(),
            gender,
            owner_name,
            owner_phone,
            owner_email: form.owner_email.trim().to_string(),
        })
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal \"{}\" registered successfully with ID {}.",
        animal.name, animal.id
    )));
    Ok(result.with_animals(vec![animal]))
}

fn matches(animal: &Animal, query: &str) -> bool {
    matches_query(
        query,
        &[
            &animal.name,
            &animal.id,
            &animal.owner_name,
            &animal.species,
        ],
    )
}

pub fn list(store: &ClinicStore, query: &str) -> Result<CmdResult> {
    let animals: Vec<Animal> = store
        .animals()
        .iter()
        .filter(|a| matches(a, query))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_animals(animals))
}

pub fn view(store: &ClinicStore, id: &str) -> Result<CmdResult> {
    let animal = store
        .animal(id)
        .ok_or_else(|| VetError::NotFound(format!("animal {}", id)))?
        .clone();
    Ok(CmdResult::default().with_animals(vec![animal]))
}

pub fn set_status(store: &mut ClinicStore, id: &str, status: AnimalStatus) -> Result<CmdResult> {
    let animal = store.set_animal_status(id, status)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} ({}) is now {}.",
        animal.name, animal.id, animal.status
    )));
    Ok(result.with_animals(vec![animal]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> RegisterAnimal {
        RegisterAnimal {
            name: name.to_string(),
            species: "Dog".to_string(),
            gender: "Male".to_string(),
            owner_name: "Jane Wanjiku".to_string(),
            owner_phone: "0711000000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn register_assigns_id_and_active_status() {
        let mut store = ClinicStore::new();
        let result = register(&mut store, form("Rocky")).unwrap();
        let animal = &result.animals[0];
        assert_eq!(animal.id, "A-001");
        assert_eq!(animal.status, AnimalStatus::Active);
        assert!(result.messages[0].content.contains("A-001"));
    }

    #[test]
    fn register_rejects_missing_mandatory_fields() {
        let mut store = ClinicStore::new();
        let mut f = form("Rocky");
        f.owner_phone = "  ".to_string();
        let err = register(&mut store, f).unwrap_err();
        assert!(err.to_string().contains("Owner phone is required."));
        assert!(store.animals().is_empty());
    }

    #[test]
    fn search_covers_name_id_owner_and_species() {
        let store = ClinicStore::seeded();
        assert_eq!(list(&store, "sim").unwrap().animals[0].name, "Simba");
        assert_eq!(list(&store, "a-003").unwrap().animals[0].name, "Daisy");
        assert_eq!(list(&store, "wanjiku").unwrap().animals[0].name, "Bella");
        assert_eq!(list(&store, "cow").unwrap().animals[0].name, "Daisy");
        assert!(list(&store, "zzz").unwrap().animals.is_empty());
        assert_eq!(list(&store, "").unwrap().animals.len(), 3);
    }

    #[test]
    fn status_change_is_reported_with_the_display_label() {
        let mut store = ClinicStore::seeded();
        let result = set_status(&mut store, "A-001", AnimalStatus::UnderTreatment).unwrap();
        assert_eq!(result.animals[0].status, AnimalStatus::UnderTreatment);
        assert!(result.messages[0]
            .content
            .contains("Simba (A-001) is now Under Treatment."));
        assert!(set_status(&mut store, "A-999", AnimalStatus::Discharged).is_err());
    }

    #[test]
    fn view_unknown_animal_is_not_found() {
        let store = ClinicStore::seeded();
        assert!(view(&store, "A-999").is_err());
        assert_eq!(view(&store, "a-001").unwrap().animals[0].name, "Simba");
    }
}

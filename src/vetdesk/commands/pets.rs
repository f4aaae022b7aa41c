//! Owner-registered pets: the owner-facing register/list and the vet-facing
//! directory of every pet.
//!
//! Pets belong to whatever display name the session carries. That link is a
//! plain string, so two owners who happen to share a name see each other's
//! pets; a quirk of the demo data model, pinned down by a test.

use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::{Result, VetError};
use crate::model::{canonical_county, Pet};
use crate::search::{category_matches, matches_query};
use crate::store::{ClinicStore, NewPet};

#[derive(Debug, Clone, Default)]
pub struct RegisterPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub color: String,
    pub weight: String,
    pub notes: String,
    pub county: String,
}

fn or_default(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn register(store: &mut ClinicStore, owner_name: &str, form: RegisterPet) -> Result<CmdResult> {
    let name = require(&form.name, "Pet name is required.")?;
    let species = require(&form.species, "Species is required.")?;
    let gender = require(&form.gender, "Gender is required.")?;
    let county_raw = require(&form.county, "Location (county) is required.")?;
    let county = canonical_county(&county_raw).ok_or_else(|| {
        VetError::Validation(format!("'{}' is not a Kenyan county.", county_raw))
    })?;

    let pet = store
        .create_pet(NewPet {
            name,
            species,
            breed: or_default(&form.breed, "Unknown"),
            age: or_default(&form.age, "Unknown"),
            gender,
            color: or_default(&form.color, "-"),
            weight: or_default(&form.weight, "-"),
            notes: form.notes.trim().to_string(),
            county: county.to_string(),
            owner_name: owner_name.to_string(),
        })
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} registered with ID {}.",
        pet.name, pet.id
    )));
    Ok(result.with_pets(vec![pet]))
}

/// The signed-in owner's pets, optionally narrowed by a text query.
pub fn my_pets(store: &ClinicStore, owner_name: &str, query: &str) -> Result<CmdResult> {
    let pets: Vec<Pet> = store
        .pets()
        .iter()
        .filter(|p| p.owner_name == owner_name)
        .filter(|p| matches_query(query, &[&p.name, &p.species, &p.breed]))
        .cloned()
        .collect();
    Ok(CmdResult::default().with_pets(pets))
}

/// Vet-side directory of every registered pet, with text search plus county
/// and species filters, AND-composed.
pub fn all_pets(
    store: &ClinicStore,
    query: &str,
    county: Option<&str>,
    species: Option<&str>,
) -> Result<CmdResult> {
    let pets: Vec<Pet> = store
        .pets()
        .iter()
        .filter(|p| {
            matches_query(query, &[&p.name, &p.owner_name, &p.breed, &p.id])
                && category_matches(county, &p.county)
                && category_matches(species, &p.species)
        })
        .cloned()
        .collect();
    Ok(CmdResult::default().with_pets(pets))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, county: &str) -> RegisterPet {
        RegisterPet {
            name: name.to_string(),
            species: "Cat".to_string(),
            gender: "Female".to_string(),
            county: county.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn register_fills_defaults_for_optional_fields() {
        let mut store = ClinicStore::seeded();
        let result = register(&mut store, "Jane", form("Nala", "kisumu")).unwrap();
        let pet = &result.pets[0];
        assert_eq!(pet.id, "P-002");
        assert_eq!(pet.breed, "Unknown");
        assert_eq!(pet.age, "Unknown");
        assert_eq!(pet.color, "-");
        assert_eq!(pet.county, "Kisumu");
        assert_eq!(pet.owner_name, "Jane");
    }

    #[test]
    fn register_validates_required_fields_and_county() {
        let mut store = ClinicStore::seeded();
        assert!(register(&mut store, "Jane", form("", "Nairobi")).is_err());
        assert!(register(&mut store, "Jane", form("Nala", "Gotham")).is_err());

        let mut no_gender = form("Nala", "Nairobi");
        no_gender.gender = String::new();
        assert!(register(&mut store, "Jane", no_gender).is_err());
        assert_eq!(store.pets().len(), 1);
    }

    #[test]
    fn my_pets_shows_only_the_named_owners_pets() {
        let mut store = ClinicStore::seeded();
        register(&mut store, "Jane", form("Nala", "Nairobi")).unwrap();
        assert_eq!(my_pets(&store, "Jane", "").unwrap().pets.len(), 1);
        // Seeded Max belongs to "Jane Wanjiku", a different display name.
        assert_eq!(my_pets(&store, "Jane Wanjiku", "").unwrap().pets.len(), 1);
        assert!(my_pets(&store, "Peter", "").unwrap().pets.is_empty());
    }

    #[test]
    fn owners_sharing_a_display_name_alias_each_others_pets() {
        // Session one registers a pet as "Jane Wanjiku"; a later session
        // under the same display name sees it alongside the seeded Max.
        let mut store = ClinicStore::seeded();
        register(&mut store, "Jane Wanjiku", form("Nala", "Mombasa")).unwrap();
        let listed = my_pets(&store, "Jane Wanjiku", "").unwrap().pets;
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn all_pets_composes_search_county_and_species_filters() {
        let mut store = ClinicStore::seeded();
        register(&mut store, "Jane", form("Nala", "Nairobi")).unwrap();
        assert_eq!(all_pets(&store, "", None, None).unwrap().pets.len(), 2);
        assert_eq!(
            all_pets(&store, "", Some("Nairobi"), None).unwrap().pets.len(),
            2
        );
        assert_eq!(
            all_pets(&store, "", Some("Nairobi"), Some("Dog"))
                .unwrap()
                .pets
                .len(),
            1
        );
        assert_eq!(all_pets(&store, "max", None, None).unwrap().pets.len(), 1);
        assert!(all_pets(&store, "max", None, Some("Cat"))
            .unwrap()
            .pets
            .is_empty());
    }
}

//! Login session: the one piece of state that outlives a process.
//!
//! A single `session.json` under the data directory holds the signed-in
//! user's display name, role and optional email. It is read at startup,
//! written on login and deleted on logout. A file that is missing or fails
//! to parse means "not logged in".
//!
//! Vets authenticate against a fixed in-source list; owners get in with any
//! non-empty email and password, or by registering on the spot. This is a
//! demo, not an auth system.

use crate::error::{Result, VetError};
use crate::model::Role;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub struct VetCredential {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

/// Fixed demo credentials.
pub static VET_CREDENTIALS: &[VetCredential] = &[
    VetCredential {
        email: "dr.peter@vetms.ac.ke",
        password: "vet123",
        name: "Dr. Peter",
    },
    VetCredential {
        email: "dr.wanjiku@vetms.ac.ke",
        password: "vet123",
        name: "Dr. Wanjiku",
    },
    VetCredential {
        email: "admin@vetms.ac.ke",
        password: "admin123",
        name: "Admin",
    },
];

pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }

    /// `None` when no session exists; an unreadable file also counts as
    /// logged out rather than an error.
    pub fn load(&self) -> Result<Option<AuthUser>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(VetError::Io)?;
        Ok(serde_json::from_str(&content).ok())
    }

    pub fn save(&self, user: &AuthUser) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(VetError::Io)?;
        }
        let content = serde_json::to_string_pretty(user).map_err(VetError::Serialization)?;
        fs::write(self.session_path(), content).map_err(VetError::Io)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(path).map_err(VetError::Io)?;
        }
        Ok(())
    }
}

/// Exact-match lookup against the credential list.
pub fn login_vet(email: &str, password: &str) -> Result<AuthUser> {
    let email = email.trim();
    VET_CREDENTIALS
        .iter()
        .find(|c| c.email == email && c.password == password)
        .map(|c| AuthUser {
            name: c.name.to_string(),
            role: Role::Vet,
            email: Some(c.email.to_string()),
        })
        .ok_or_else(|| VetError::Auth("Invalid email or password. Please try again.".to_string()))
}

/// Any non-empty email and password pair works for owners; the display name
/// is the local part of the email.
pub fn login_owner(email: &str, password: &str) -> Result<AuthUser> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(VetError::Validation(
            "Please enter your email and password.".to_string(),
        ));
    }
    let name = email.split('@').next().unwrap_or(email).to_string();
    Ok(AuthUser {
        name,
        role: Role::Owner,
        email: Some(email.to_string()),
    })
}

/// Owner sign-up. There is no account database; a valid registration logs
/// the owner in directly.
pub fn register_owner(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirm: &str,
) -> Result<AuthUser> {
    if name.trim().is_empty() {
        return Err(VetError::Validation("Full name is required.".to_string()));
    }
    if email.trim().is_empty() {
        return Err(VetError::Validation("Email is required.".to_string()));
    }
    if phone.trim().is_empty() {
        return Err(VetError::Validation(
            "Phone number is required.".to_string(),
        ));
    }
    if password.len() < 6 {
        return Err(VetError::Validation(
            "Password must be at least 6 characters.".to_string(),
        ));
    }
    if password != confirm {
        return Err(VetError::Validation("Passwords do not match.".to_string()));
    }
    Ok(AuthUser {
        name: name.trim().to_string(),
        role: Role::Owner,
        email: Some(email.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vet_login_matches_credentials_exactly() {
        let user = login_vet("dr.peter@vetms.ac.ke", "vet123").unwrap();
        assert_eq!(user.name, "Dr. Peter");
        assert_eq!(user.role, Role::Vet);

        assert!(login_vet("dr.peter@vetms.ac.ke", "wrong").is_err());
        assert!(login_vet("nobody@vetms.ac.ke", "vet123").is_err());
    }

    #[test]
    fn vet_login_trims_the_email() {
        assert!(login_vet("  admin@vetms.ac.ke ", "admin123").is_ok());
    }

    #[test]
    fn owner_login_uses_email_local_part_as_name() {
        let user = login_owner("jane@example.com", "whatever").unwrap();
        assert_eq!(user.name, "jane");
        assert_eq!(user.role, Role::Owner);

        assert!(login_owner("", "pw").is_err());
        assert!(login_owner("jane@example.com", "").is_err());
    }

    #[test]
    fn owner_registration_validates_fields() {
        assert!(register_owner("", "j@e.com", "0700", "secret1", "secret1").is_err());
        assert!(register_owner("Jane", "", "0700", "secret1", "secret1").is_err());
        assert!(register_owner("Jane", "j@e.com", "", "secret1", "secret1").is_err());
        assert!(register_owner("Jane", "j@e.com", "0700", "short", "short").is_err());
        assert!(register_owner("Jane", "j@e.com", "0700", "secret1", "secret2").is_err());

        let user = register_owner(" Jane ", "j@e.com", "0700", "secret1", "secret1").unwrap();
        assert_eq!(user.name, "Jane");
        assert_eq!(user.role, Role::Owner);
    }

    #[test]
    fn session_roundtrip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert_eq!(store.load().unwrap(), None);

        let user = AuthUser {
            name: "Dr. Peter".to_string(),
            role: Role::Vet,
            email: Some("dr.peter@vetms.ac.ke".to_string()),
        };
        store.save(&user).unwrap();
        assert_eq!(store.load().unwrap(), Some(user));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing an already-empty session is fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(dir.path().join(SESSION_FILENAME), "not json").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}

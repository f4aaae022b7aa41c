//! Message shaping for login, logout and whoami. The credential checks live
//! in [`crate::session`]; these helpers only build the user-facing results.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::AuthUser;

pub fn logged_in(user: &AuthUser) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {} ({}).",
        user.name, user.role
    )));
    Ok(result)
}

pub fn logged_out(previous: Option<&AuthUser>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match previous {
        Some(user) => result.add_message(CmdMessage::success(format!(
            "{} logged out.",
            user.name
        ))),
        None => result.add_message(CmdMessage::info("No active session.")),
    }
    Ok(result)
}

pub fn whoami(user: Option<&AuthUser>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match user {
        Some(user) => {
            let email = user.email.as_deref().unwrap_or("-");
            result.add_message(CmdMessage::info(format!(
                "{} ({}) <{}>",
                user.name, user.role, email
            )));
        }
        None => result.add_message(CmdMessage::info("Not logged in.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Role;

    fn jane() -> AuthUser {
        AuthUser {
            name: "Jane".to_string(),
            role: Role::Owner,
            email: Some("jane@example.com".to_string()),
        }
    }

    #[test]
    fn login_and_logout_messages_name_the_user() {
        let result = logged_in(&jane()).unwrap();
        assert!(result.messages[0].content.contains("Jane (owner)"));

        let result = logged_out(Some(&jane())).unwrap();
        assert!(result.messages[0].content.contains("Jane logged out."));

        let result = logged_out(None).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn whoami_reports_session_or_absence() {
        let result = whoami(Some(&jane())).unwrap();
        assert!(result.messages[0].content.contains("jane@example.com"));

        let result = whoami(None).unwrap();
        assert_eq!(result.messages[0].content, "Not logged in.");
    }
}

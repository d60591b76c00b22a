//! System status report
//!
//! Reports configuration facts only: the store is always reported online
//! and the mail flag reflects credential presence, not reachability.

use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub database: DatabaseStatus,
    pub brevo: MailStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseStatus {
    pub online: bool,
    pub file_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailStatus {
    pub active: bool,
}

/// Build the status report for the given database file and mail state
pub fn system_status(db_path: &Path, mail_active: bool) -> SystemStatus {
    SystemStatus {
        database: DatabaseStatus {
            online: true,
            file_exists: db_path.exists(),
        },
        brevo: MailStatus {
            active: mail_active,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let status = system_status(&dir.path().join("absent.db"), false);

        assert!(status.database.online);
        assert!(!status.database.file_exists);
        assert!(!status.brevo.active);
    }

    #[test]
    fn wire_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.db");
        std::fs::write(&path, b"").unwrap();

        let status = system_status(&path, true);
        assert_eq!(
            serde_json::to_value(status).unwrap(),
            json!({
                "database": {"online": true, "file_exists": true},
                "brevo": {"active": true}
            })
        );
    }
}

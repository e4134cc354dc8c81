//! Privilege and role listings (read-only surface).

use crate::error::Result;
use crate::http::{decode_results, Client};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub display: String,
    /// Absent on partial representations → empty.
    #[serde(default)]
    pub privileges: Vec<Privilege>,
}

impl Client {
    /// GET `privilege`.
    pub async fn list_privileges(&self) -> Result<Vec<Privilege>> {
        let resp = self
            .request(Method::GET, "/privilege", None, "Failed to load privileges")
            .await?;
        decode_results(resp)
    }

    /// GET `role`.
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        let resp = self
            .request(Method::GET, "/role", None, "Failed to load roles")
            .await?;
        decode_results(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_without_privileges_decodes_empty() {
        let role: Role =
            serde_json::from_value(json!({"uuid": "r1", "display": "Clerk"})).unwrap();
        assert!(role.privileges.is_empty());
    }

    #[test]
    fn role_nested_privileges_decode() {
        let role: Role = serde_json::from_value(json!({
            "uuid": "r2",
            "display": "Nurse",
            "privileges": [{"uuid": "pr1", "display": "Get Patients"}]
        }))
        .unwrap();
        assert_eq!(role.privileges.len(), 1);
        assert_eq!(role.privileges[0].description, "");
    }
}

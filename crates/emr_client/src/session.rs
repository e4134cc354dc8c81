//! Session check — who the credential authenticates as, if anyone.

use crate::error::Result;
use crate::http::{decode_one, Client};
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub user_display: String,
}

#[derive(Debug, Deserialize)]
struct WireSession {
    #[serde(default)]
    authenticated: bool,
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    #[serde(default)]
    display: String,
}

impl Client {
    /// GET `session`.
    pub async fn get_session(&self) -> Result<Session> {
        let resp = self
            .request(Method::GET, "/session", None, "Failed to load session")
            .await?;
        let wire: WireSession = decode_one(resp)?;
        Ok(Session {
            authenticated: wire.authenticated,
            user_display: wire.user.map(|u| u.display).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_session_has_no_user() {
        let wire: WireSession =
            serde_json::from_value(serde_json::json!({"authenticated": false})).unwrap();
        assert!(!wire.authenticated);
        assert!(wire.user.is_none());
    }
}

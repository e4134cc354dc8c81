//! Visit-type configuration.
//!
//! Update is a full replace (same contract as attribute update); retirement
//! is a DELETE with a reason, not a soft-delete flag at this layer.

use crate::error::Result;
use crate::http::{decode_one, decode_results, Client};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitType {
    pub uuid: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct WireVisitType {
    #[serde(default)]
    uuid: String,
    name: Option<String>,
    display: Option<String>,
    description: Option<String>,
}

impl WireVisitType {
    // List endpoints return `display`, full representations `name`.
    fn normalize(self) -> VisitType {
        VisitType {
            uuid: self.uuid,
            name: self.name.or(self.display).unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

impl Client {
    /// GET `visittype`.
    pub async fn list_visit_types(&self) -> Result<Vec<VisitType>> {
        let resp = self
            .request(Method::GET, "/visittype", None, "Failed to load visit types")
            .await?;
        let wires: Vec<WireVisitType> = decode_results(resp)?;
        Ok(wires.into_iter().map(WireVisitType::normalize).collect())
    }

    /// POST `visittype`.
    pub async fn create_visit_type(&self, name: &str, description: &str) -> Result<VisitType> {
        let body = json!({"name": name, "description": description});
        let resp = self
            .request(
                Method::POST,
                "/visittype",
                Some(&body),
                "Failed to create visit type",
            )
            .await?;
        decode_one::<WireVisitType>(resp).map(WireVisitType::normalize)
    }

    /// POST `visittype/{uuid}` — full replace of name and description.
    pub async fn update_visit_type(
        &self,
        uuid: &str,
        name: &str,
        description: &str,
    ) -> Result<VisitType> {
        let body = json!({"name": name, "description": description});
        let resp = self
            .request(
                Method::POST,
                &format!("/visittype/{uuid}"),
                Some(&body),
                "Failed to update visit type",
            )
            .await?;
        decode_one::<WireVisitType>(resp).map(WireVisitType::normalize)
    }

    /// DELETE `visittype/{uuid}?reason=...`.
    pub async fn retire_visit_type(&self, uuid: &str, reason: &str) -> Result<()> {
        let path = format!("/visittype/{uuid}?reason={}", urlencoding::encode(reason));
        self.request(Method::DELETE, &path, None, "Failed to retire visit type")
            .await?;
        Ok(())
    }
}

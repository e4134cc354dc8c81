//! Encounter management for a patient.

use crate::error::Result;
use crate::http::{decode_one, decode_results, Client};
use crate::types::Reference;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub uuid: String,
    pub display: String,
    pub encounter_type: Reference,
    pub encounter_datetime: String,
}

#[derive(Debug, Clone)]
pub struct NewEncounter {
    pub patient: String,
    pub encounter_type: String,
    /// ISO-8601 datetime.
    pub encounter_datetime: String,
}

#[derive(Debug, Deserialize)]
struct WireEncounter {
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    display: String,
    #[serde(rename = "encounterType")]
    encounter_type: Option<Reference>,
    #[serde(rename = "encounterDatetime", default)]
    encounter_datetime: String,
}

impl WireEncounter {
    fn normalize(self) -> Encounter {
        Encounter {
            uuid: self.uuid,
            display: self.display,
            encounter_type: self.encounter_type.unwrap_or_default(),
            encounter_datetime: self.encounter_datetime,
        }
    }
}

impl Client {
    /// GET `encounter?patient={uuid}`.
    pub async fn list_encounters(&self, patient: &str) -> Result<Vec<Encounter>> {
        let path = format!("/encounter?patient={}", urlencoding::encode(patient));
        let resp = self
            .request(Method::GET, &path, None, "Failed to load encounters")
            .await?;
        let wires: Vec<WireEncounter> = decode_results(resp)?;
        Ok(wires.into_iter().map(WireEncounter::normalize).collect())
    }

    /// POST `encounter`.
    pub async fn create_encounter(&self, enc: &NewEncounter) -> Result<Encounter> {
        let body = json!({
            "patient": enc.patient,
            "encounterType": enc.encounter_type,
            "encounterDatetime": enc.encounter_datetime,
        });
        let resp = self
            .request(
                Method::POST,
                "/encounter",
                Some(&body),
                "Failed to create encounter",
            )
            .await?;
        decode_one::<WireEncounter>(resp).map(WireEncounter::normalize)
    }

    /// DELETE `encounter/{uuid}`.
    pub async fn delete_encounter(&self, uuid: &str) -> Result<()> {
        self.request(
            Method::DELETE,
            &format!("/encounter/{uuid}"),
            None,
            "Failed to delete encounter",
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_defaults_missing_encounter_type() {
        let wire: WireEncounter = serde_json::from_value(json!({
            "uuid": "e1",
            "display": "Checkup",
            "encounterDatetime": "2024-05-01T10:00:00.000+0000"
        }))
        .unwrap();
        let enc = wire.normalize();
        assert_eq!(enc.encounter_type, Reference::default());
        assert_eq!(enc.encounter_datetime, "2024-05-01T10:00:00.000+0000");
    }
}

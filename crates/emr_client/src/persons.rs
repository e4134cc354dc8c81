//! Person management: search, create, delete.

use crate::error::Result;
use crate::http::{decode_one, decode_results, Client};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub uuid: String,
    pub display: String,
    pub gender: String,
    pub birthdate: String,
}

/// Payload for creating a person. `birthdate` is `YYYY-MM-DD` when present.
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub given_name: String,
    pub family_name: String,
    pub gender: String,
    pub birthdate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WirePerson {
    #[serde(default)]
    uuid: String,
    #[serde(default)]
    display: String,
    #[serde(default)]
    gender: String,
    birthdate: Option<String>,
}

impl WirePerson {
    fn normalize(self) -> Person {
        Person {
            uuid: self.uuid,
            display: self.display,
            gender: self.gender,
            birthdate: self.birthdate.unwrap_or_default(),
        }
    }
}

impl Client {
    /// GET `person?q={query}`.
    pub async fn search_persons(&self, query: &str) -> Result<Vec<Person>> {
        let path = format!("/person?q={}", urlencoding::encode(query));
        let resp = self
            .request(Method::GET, &path, None, "Failed to load persons")
            .await?;
        let wires: Vec<WirePerson> = decode_results(resp)?;
        Ok(wires.into_iter().map(WirePerson::normalize).collect())
    }

    /// POST `person`.
    pub async fn create_person(&self, person: &NewPerson) -> Result<Person> {
        let mut body = json!({
            "names": [{
                "givenName": person.given_name,
                "familyName": person.family_name,
            }],
            "gender": person.gender,
        });
        if let Some(birthdate) = &person.birthdate {
            body["birthdate"] = json!(birthdate);
        }
        let resp = self
            .request(Method::POST, "/person", Some(&body), "Failed to create person")
            .await?;
        decode_one::<WirePerson>(resp).map(WirePerson::normalize)
    }

    /// DELETE `person/{uuid}`.
    pub async fn delete_person(&self, uuid: &str) -> Result<()> {
        self.request(
            Method::DELETE,
            &format!("/person/{uuid}"),
            None,
            "Failed to delete person",
        )
        .await?;
        Ok(())
    }
}

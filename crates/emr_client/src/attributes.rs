//! Person-attribute records — the attribute adapter.
//!
//! A record lives under its owner: `person/{person}/attribute[/{id}]`. The
//! wire side returns partial objects (`attributeType` may be missing or
//! incomplete); normalization rewrites the reference with empty-string
//! defaults so the typed [`PersonAttribute`] never carries an absent field.

use crate::error::Result;
use crate::http::{decode_one, decode_results, Client};
use crate::types::Reference;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Normalized attribute record: identifier, classifying reference, value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAttribute {
    pub uuid: String,
    pub attribute_type: Reference,
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct WireAttribute {
    #[serde(default)]
    uuid: String,
    #[serde(rename = "attributeType")]
    attribute_type: Option<Reference>,
    #[serde(default)]
    value: String,
}

impl WireAttribute {
    fn normalize(self) -> PersonAttribute {
        PersonAttribute {
            uuid: self.uuid,
            attribute_type: self.attribute_type.unwrap_or_default(),
            value: self.value,
        }
    }
}

impl Client {
    /// POST `person/{person}/attribute` with `{attributeType, value}`.
    pub async fn create_attribute(
        &self,
        person: &str,
        type_id: &str,
        value: &str,
    ) -> Result<PersonAttribute> {
        let body = json!({"attributeType": type_id, "value": value});
        let resp = self
            .request(
                Method::POST,
                &format!("/person/{person}/attribute"),
                Some(&body),
                "Failed to create attribute",
            )
            .await?;
        decode_one::<WireAttribute>(resp).map(WireAttribute::normalize)
    }

    /// GET `person/{person}/attribute`, unwrapping the `results` envelope.
    pub async fn list_attributes(&self, person: &str) -> Result<Vec<PersonAttribute>> {
        let resp = self
            .request(
                Method::GET,
                &format!("/person/{person}/attribute"),
                None,
                "Failed to load attributes",
            )
            .await?;
        let wires: Vec<WireAttribute> = decode_results(resp)?;
        Ok(wires.into_iter().map(WireAttribute::normalize).collect())
    }

    /// POST `person/{person}/attribute/{id}` with `{value}` only — full value
    /// replacement, the type is never re-sent.
    pub async fn update_attribute(
        &self,
        person: &str,
        id: &str,
        value: &str,
    ) -> Result<PersonAttribute> {
        let body = json!({"value": value});
        let resp = self
            .request(
                Method::POST,
                &format!("/person/{person}/attribute/{id}"),
                Some(&body),
                "Failed to update attribute",
            )
            .await?;
        decode_one::<WireAttribute>(resp).map(WireAttribute::normalize)
    }

    /// DELETE `person/{person}/attribute/{id}` — hard delete, no data back.
    pub async fn delete_attribute(&self, person: &str, id: &str) -> Result<()> {
        self.request(
            Method::DELETE,
            &format!("/person/{person}/attribute/{id}"),
            None,
            "Failed to delete attribute",
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_full_shape() {
        let wire: WireAttribute = serde_json::from_value(json!({
            "uuid": "a1",
            "attributeType": {"uuid": "t1", "display": "Type"},
            "value": "5"
        }))
        .unwrap();
        let attr = wire.normalize();
        assert_eq!(attr.uuid, "a1");
        assert_eq!(attr.attribute_type, Reference::new("t1", "Type"));
        assert_eq!(attr.value, "5");
    }

    #[test]
    fn normalize_defaults_missing_type_to_empty_strings() {
        let wire: WireAttribute =
            serde_json::from_value(json!({"uuid": "a2", "value": "x"})).unwrap();
        let attr = wire.normalize();
        assert_eq!(attr.attribute_type, Reference::default());
        assert_eq!(attr.value, "x");
    }

    #[test]
    fn normalize_defaults_partial_type_fields() {
        let wire: WireAttribute = serde_json::from_value(json!({
            "uuid": "a3",
            "attributeType": {"uuid": "t3"},
            "value": "y"
        }))
        .unwrap();
        let attr = wire.normalize();
        assert_eq!(attr.attribute_type.uuid, "t3");
        assert_eq!(attr.attribute_type.display, "");
    }
}

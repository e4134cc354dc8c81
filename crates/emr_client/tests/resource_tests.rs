use emr_client::{Anonymous, Client, NewEncounter, NewPerson};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(&server.uri(), Anonymous);
    (server, client)
}

// ── persons ──────────────────────────────────────────────────────

#[tokio::test]
async fn search_persons_encodes_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/person"))
        .and(query_param("q", "jo doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"uuid": "p1", "display": "Jo Doe", "gender": "F", "birthdate": "1990-01-01"}]
        })))
        .mount(&server)
        .await;

    let persons = client.search_persons("jo doe").await.unwrap();
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].display, "Jo Doe");
    assert_eq!(persons[0].birthdate, "1990-01-01");
}

#[tokio::test]
async fn create_person_sends_nested_name_payload() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/person"))
        .and(body_json(json!({
            "names": [{"givenName": "Jo", "familyName": "Doe"}],
            "gender": "F",
            "birthdate": "1990-01-01"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": "p1", "display": "Jo Doe", "gender": "F", "birthdate": "1990-01-01"
        })))
        .mount(&server)
        .await;

    let person = client
        .create_person(&NewPerson {
            given_name: "Jo".into(),
            family_name: "Doe".into(),
            gender: "F".into(),
            birthdate: Some("1990-01-01".into()),
        })
        .await
        .unwrap();
    assert_eq!(person.uuid, "p1");
}

#[tokio::test]
async fn create_person_omits_absent_birthdate() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/person"))
        .and(body_json(json!({
            "names": [{"givenName": "Jo", "familyName": "Doe"}],
            "gender": "F"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": "p2", "display": "Jo Doe", "gender": "F"
        })))
        .mount(&server)
        .await;

    let person = client
        .create_person(&NewPerson {
            given_name: "Jo".into(),
            family_name: "Doe".into(),
            gender: "F".into(),
            birthdate: None,
        })
        .await
        .unwrap();
    assert_eq!(person.birthdate, "");
}

#[tokio::test]
async fn delete_person_hits_identifier_path() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/person/p1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_person("p1").await.unwrap();
}

// ── encounters ───────────────────────────────────────────────────

#[tokio::test]
async fn list_encounters_filters_by_patient() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/encounter"))
        .and(query_param("patient", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "uuid": "e1",
                "display": "Checkup",
                "encounterType": {"uuid": "et1", "display": "Visit Note"},
                "encounterDatetime": "2024-05-01T10:00:00.000+0000"
            }]
        })))
        .mount(&server)
        .await;

    let encounters = client.list_encounters("p1").await.unwrap();
    assert_eq!(encounters[0].encounter_type.display, "Visit Note");
}

#[tokio::test]
async fn create_encounter_posts_wire_field_names() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/encounter"))
        .and(body_json(json!({
            "patient": "p1",
            "encounterType": "et1",
            "encounterDatetime": "2024-05-01T10:00:00.000+0000"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": "e1", "display": "Checkup",
            "encounterType": {"uuid": "et1", "display": "Visit Note"},
            "encounterDatetime": "2024-05-01T10:00:00.000+0000"
        })))
        .mount(&server)
        .await;

    let enc = client
        .create_encounter(&NewEncounter {
            patient: "p1".into(),
            encounter_type: "et1".into(),
            encounter_datetime: "2024-05-01T10:00:00.000+0000".into(),
        })
        .await
        .unwrap();
    assert_eq!(enc.uuid, "e1");
}

// ── visit types ──────────────────────────────────────────────────

#[tokio::test]
async fn visit_type_update_is_full_replace() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/visittype/v1"))
        .and(body_json(json!({"name": "Inpatient", "description": "Ward stay"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "v1", "name": "Inpatient", "description": "Ward stay"
        })))
        .mount(&server)
        .await;

    let vt = client
        .update_visit_type("v1", "Inpatient", "Ward stay")
        .await
        .unwrap();
    assert_eq!(vt.description, "Ward stay");
}

#[tokio::test]
async fn retire_visit_type_sends_reason_query() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/visittype/v1"))
        .and(query_param("reason", "no longer used"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.retire_visit_type("v1", "no longer used").await.unwrap();
}

// ── privileges & roles ───────────────────────────────────────────

#[tokio::test]
async fn list_privileges_returns_typed_rows() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/privilege"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"uuid": "pr1", "display": "Get Patients", "description": "Read access"},
                {"uuid": "pr2", "display": "Edit Patients"}
            ]
        })))
        .mount(&server)
        .await;

    let privileges = client.list_privileges().await.unwrap();
    assert_eq!(privileges.len(), 2);
    assert_eq!(privileges[1].description, "");
}

#[tokio::test]
async fn list_roles_includes_nested_privileges() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "uuid": "r1",
                "display": "Nurse",
                "privileges": [{"uuid": "pr1", "display": "Get Patients"}]
            }]
        })))
        .mount(&server)
        .await;

    let roles = client.list_roles().await.unwrap();
    assert_eq!(roles[0].privileges[0].display, "Get Patients");
}

// ── session ──────────────────────────────────────────────────────

#[tokio::test]
async fn session_reports_authenticated_user() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "user": {"display": "admin"}
        })))
        .mount(&server)
        .await;

    let session = client.get_session().await.unwrap();
    assert!(session.authenticated);
    assert_eq!(session.user_display, "admin");
}

#[tokio::test]
async fn session_defaults_user_when_unauthenticated() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;

    let session = client.get_session().await.unwrap();
    assert!(!session.authenticated);
    assert_eq!(session.user_display, "");
}

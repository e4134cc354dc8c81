//! EMR REST client — typed resource adapters over the clinical records API.
//!
//! Each adapter translates between the server's wire shapes (list envelopes,
//! partial objects, UUID-keyed references) and flat typed records, one
//! resource kind at a time:
//!
//! ```text
//! caller (console command, UI)
//!   │
//!   ▼
//! Client::{create,list,update,delete}_*
//!   │
//!   ▼  single round trip, bearer token read per call
//! raw JSON ──▶ normalize ──▶ typed record  |  ClientError
//! ```
//!
//! No failure crosses the boundary as a panic: transport errors, non-2xx
//! statuses, and malformed success bodies all come back as [`ClientError`].
//! There is no retry, no caching, and no ordering between concurrent calls —
//! last-response-wins arbitration belongs to the caller.

pub mod attributes;
pub mod auth;
pub mod encounters;
pub mod error;
pub mod http;
pub mod persons;
pub mod privileges;
pub mod session;
pub mod types;
pub mod visit_types;

pub use attributes::PersonAttribute;
pub use auth::{Anonymous, EnvToken, StaticToken, TokenProvider};
pub use encounters::{Encounter, NewEncounter};
pub use error::{ClientError, Result};
pub use http::Client;
pub use persons::{NewPerson, Person};
pub use privileges::{Privilege, Role};
pub use session::Session;
pub use types::Reference;
pub use visit_types::VisitType;

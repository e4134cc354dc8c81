//! Credential injection for the client.
//!
//! The credential is read through a [`TokenProvider`] at call time, once per
//! request — never cached, never validated locally. A provider that yields
//! `None` sends the request unauthenticated and leaves rejection to the
//! server.

/// Source of the bearer credential attached to every request.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed credential, e.g. from a CLI flag.
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads an environment variable on every call. Absent or empty means
/// unauthenticated.
pub struct EnvToken(pub String);

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(&self.0).ok().filter(|t| !t.is_empty())
    }
}

/// No credential at all.
pub struct Anonymous;

impl TokenProvider for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }
}

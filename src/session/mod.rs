mod auth;
mod loading;

pub use auth::{AuthSession, LoginData, LoginEnvelope, MemoryStore, SessionStore};
pub use loading::{LoadingCounter, LoadingGuard};

//! Secret handling for collaborator API keys.

mod credentials;

pub use credentials::{SecretString, ServiceCredentials};

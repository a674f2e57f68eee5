//! Access to the remote backend: configuration bootstrap, RPC client, session token

pub mod client;
pub mod error;
pub mod provider;
pub mod session_storage;

pub use client::RemoteClient;
pub use error::{ErrorKind, RemoteError};
pub use provider::{ClientProvider, ConfigurationError};

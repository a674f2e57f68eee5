//! Generic detail view: fetch a markup fragment, call one RPC for the
//! aggregate, map it to a view-model and bind it into the fragment.
//!
//! One loader serves every entity; an entity is described by a
//! [`DetailEntity`] implementation (markup path, RPC descriptor, envelope
//! shape, mapping function).

pub mod badge;
pub mod binding;
pub mod entity;
pub mod error;
pub mod fallback;
pub mod host;
pub mod http_backend;
pub mod loader;
pub mod payments;
pub mod view;

pub use entity::{DetailAction, DetailEntity, EnvelopeShape};
pub use error::{LoadError, MountError};
pub use fallback::FallbackPanel;
pub use loader::{DetailBackend, DetailLoader, DetailState, LoadGeneration, LoadOutcome, MountPoint};
pub use view::{Cell, DetailView, SlotValue, TableRows};

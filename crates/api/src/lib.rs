//! REST wrapper and per-screen collection state for the CRM backend.
//!
//! Screens construct one [`ApiClient`] from an [`ApiConfig`], hand a bearer
//! token into every call, and drive a [`CollectionLoader`] per list screen.
//! Filtering the loaded collection is handled by `utils::search`.

pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod state;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use resource::{CreateAck, CreateShape, Created, ListShape, Resource};
pub use state::{CollectionLoader, CollectionState, LoadTicket};

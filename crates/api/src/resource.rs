//! Per-resource wire-shape descriptors.
//!
//! The backend is not uniform: most list endpoints return a bare JSON array,
//! but the services-web surface wraps collections in `{ "data": [...] }`,
//! and the lease endpoint answers a create with `{ "message", "id" }`
//! instead of the entity. Each resource declares the shapes it actually
//! speaks rather than pretending there is one contract.

use models::{Client, Contract, EmailAccount, Hardware, Hosting, Lease, Visit};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Shape of a list endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// Bare JSON array of entities.
    Bare,
    /// `{ "data": [...] }` envelope.
    Enveloped,
}

/// Shape of a create endpoint's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateShape {
    /// The created entity, fully populated.
    Entity,
    /// `{ "message", "id" }` acknowledgement only.
    Ack,
}

/// A REST resource of the CRM backend.
pub trait Resource: DeserializeOwned {
    /// Path segment under `/api/`.
    const PATH: &'static str;
    const LIST_SHAPE: ListShape = ListShape::Bare;
    const CREATE_SHAPE: CreateShape = CreateShape::Entity;

    fn id(&self) -> i64;
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Vec<T>,
}

/// Acknowledgement body returned by `CreateShape::Ack` endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateAck {
    pub id: i64,
    pub message: Option<String>,
}

/// Outcome of a create, matching whichever shape the endpoint speaks.
#[derive(Debug)]
pub enum Created<R> {
    Entity(R),
    Ack(CreateAck),
}

impl<R: Resource> Created<R> {
    /// Identifier of the created record, whichever shape came back.
    pub fn id(&self) -> i64 {
        match self {
            Created::Entity(entity) => entity.id(),
            Created::Ack(ack) => ack.id,
        }
    }

    /// The full entity, when the endpoint returned one.
    pub fn into_entity(self) -> Option<R> {
        match self {
            Created::Entity(entity) => Some(entity),
            Created::Ack(_) => None,
        }
    }
}

impl Resource for Client {
    const PATH: &'static str = "clients";
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Contract {
    const PATH: &'static str = "contracts";
    fn id(&self) -> i64 {
        self.id
    }
}

// Hosting and email accounts live behind the services-web surface, which
// wraps every list in a data envelope.
impl Resource for Hosting {
    const PATH: &'static str = "hosting";
    const LIST_SHAPE: ListShape = ListShape::Enveloped;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for EmailAccount {
    const PATH: &'static str = "emails";
    const LIST_SHAPE: ListShape = ListShape::Enveloped;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Hardware {
    const PATH: &'static str = "hardware";
    fn id(&self) -> i64 {
        self.id
    }
}

// The lease endpoint acknowledges creates with `{ message, id }` only;
// callers re-fetch to obtain the record.
impl Resource for Lease {
    const PATH: &'static str = "leases";
    const CREATE_SHAPE: CreateShape = CreateShape::Ack;
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Visit {
    const PATH: &'static str = "visits";
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shapes_are_bare_and_entity() {
        assert_eq!(Client::LIST_SHAPE, ListShape::Bare);
        assert_eq!(Client::CREATE_SHAPE, CreateShape::Entity);
        assert_eq!(Visit::LIST_SHAPE, ListShape::Bare);
    }

    #[test]
    fn services_web_resources_are_enveloped() {
        assert_eq!(Hosting::LIST_SHAPE, ListShape::Enveloped);
        assert_eq!(EmailAccount::LIST_SHAPE, ListShape::Enveloped);
    }

    #[test]
    fn lease_creates_are_acknowledged_only() {
        assert_eq!(Lease::CREATE_SHAPE, CreateShape::Ack);
    }

    #[test]
    fn created_id_is_uniform_across_shapes() {
        let ack: Created<Lease> = Created::Ack(CreateAck {
            id: 42,
            message: Some("lease created".to_string()),
        });
        assert_eq!(ack.id(), 42);
        assert!(ack.into_entity().is_none());
    }
}

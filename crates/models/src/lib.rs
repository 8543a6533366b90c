//! Domain entities for the field-service CRM backend.
//!
//! One module per resource. All types derive `TS` so the mobile front-end's
//! TypeScript definitions stay in sync with the wire format.

pub mod client;
pub mod contract;
pub mod email_account;
pub mod hardware;
pub mod hosting;
pub mod lease;
pub mod visit;

pub use client::{Client, ClientPatch, NewClient};
pub use contract::{Contract, ContractPatch, ContractStatus, NewContract};
pub use email_account::{EmailAccount, EmailAccountPatch, NewEmailAccount};
pub use hardware::{Hardware, HardwarePatch, NewHardware};
pub use hosting::{Hosting, HostingPatch, NewHosting};
pub use lease::{Lease, LeasePatch, NewLease};
pub use visit::{NewVisit, Visit, VisitPatch};

#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # hbnb-entities
//!
//! Reusable, agnostic domain entities for the HBnB marketplace client.
//!
//! The entities are owned and validated by the backend. They only contain
//! generic functionality that does not reveal any workflow-specific logic.

pub mod booking;
pub mod id;
pub mod payment;
pub mod place;
pub mod review;
pub mod stay;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

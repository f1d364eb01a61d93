#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # btl-entities
//!
//! Reusable, agnostic domain entities for the BTL listing backend.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod comment;
pub mod house;
pub mod id;
pub mod like;
pub mod number;
pub mod password;
pub mod room;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

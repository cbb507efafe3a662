//! # Blog Core
//!
//! The domain layer of the blog listing service.
//! This crate contains the post model, pagination rules and the ports
//! that persistence adapters implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::RepoError;
pub use pagination::{MAX_PAGE, PER_PAGE, Page, PageRequest};

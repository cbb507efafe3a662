//! # Blog Shared
//!
//! Wire types shared between the server and its JSON clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

//! Services - use cases built on top of the ports.

mod post_store;

pub use post_store::PostStore;

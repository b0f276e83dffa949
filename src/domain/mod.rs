//! Domain types received from the shortener backend.

pub mod link;

pub use link::Link;

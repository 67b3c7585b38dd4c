//! Shared types used across all modules.
//!
//! Other modules import the credential record from here rather than
//! reaching into the store's internals.

pub mod credentials;

pub use credentials::Credentials;

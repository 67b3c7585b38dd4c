//! twurlrc — reader for Twurl's `~/.twurlrc` credential files (library crate).
//!
//! Parse a file with [`load`] or [`parse`], then query the resulting
//! [`Twurlrc`] for profiles, consumer keys and [`Credentials`].

pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod store;

pub use models::Credentials;
pub use store::{ShapeError, Twurlrc, TwurlrcError, default_path, load, parse};

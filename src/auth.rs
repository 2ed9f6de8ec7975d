//! Access token model and redacted secrets.

pub mod token;

pub use token::*;

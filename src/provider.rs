//! Provider-facing configuration (data), capability traits (behavior), and the HeadHunter
//! adapter.
//!
//! `config` holds the client credentials, redirect URI, and optional state a provider is
//! constructed with. `endpoints` exposes a validated HTTPS endpoint set. `strategy` defines
//! the capability traits the engine in [`crate::flows`] is generic over, and `headhunter`
//! implements them for hh.ru.

pub mod config;
pub mod endpoints;
pub mod headhunter;
pub mod strategy;

pub use config::*;
pub use endpoints::*;
pub use headhunter::*;
pub use strategy::*;

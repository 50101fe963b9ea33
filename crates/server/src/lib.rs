pub mod api;

#[cfg(feature = "server")]
pub mod auth;

#[cfg(feature = "server")]
pub mod backend;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod telemetry;

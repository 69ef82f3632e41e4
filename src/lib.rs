//! Client library behind the trustbadge widget: shop rating, certification status and
//! purchase-protection guarantee, fetched from the rating service.
//!
//! # Overview
//!
//! The library is a small fetch pipeline:
//!
//! - [`datasource`]s perform one HTTP request each and parse the body into a model.
//! - [`repository`]s combine datasources (e.g., fetching an access token before the channel
//!   rating).
//! - [`use_case`]s assemble the models a UI needs.
//! - [`TrustbadgeViewModel`] holds the latest successfully fetched [`TrustbadgeData`] and
//!   [`Guarantee`] as observable slots for UI binding.
//!
//! [`TrustbadgeClient`] wires all of the above from a [`ClientConfig`]. Every layer takes its
//! dependencies as trait objects, so any of them can be replaced in tests.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. A failed fetch never changes the state published
//! by [`TrustbadgeViewModel`]; the UI keeps showing the last known value.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with target `trustbadge`.
//! Consider integrating a `log`-compatible logger implementation for better visibility into fetch
//! failures.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod datasource;
pub mod models;
pub mod repository;
pub mod use_case;

mod client;
mod config;
mod error;
mod view_model;

pub use client::TrustbadgeClient;
pub use config::{ClientConfig, Environment};
pub use error::{Error, Result};
pub use models::{ChannelInfo, Guarantee, Shop, TrustMark, TrustMarkStatus, TrustbadgeData};
pub use view_model::{FetchHandle, StateReceiver, TrustbadgeViewModel};

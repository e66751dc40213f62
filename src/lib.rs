//! This crate implements the line-level core of a small G-code controller.
//! The dialect is a subset of what [grblHAL](https://github.com/grblHAL/core) accepts and errors
//! are reported with grblHAL's numeric codes.
//!
//! A line goes through three stages, each one failing with the same [`Error`] vocabulary:
//! - [`parse_line`] splits it into typed [`Code`]s,
//! - [`CodeGroup`] folds the codes into one command plus its parameters, rejecting modal
//!   group violations,
//! - [`Controller`] applies the group to the machine state.
//!
//! [`Session`] ties the stages to a byte stream and answers every line with a single
//! [`Response`].
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod stream;
mod utils;

pub mod config;
mod controller;
mod error;
mod group;
#[cfg(feature = "std")]
pub mod logging;
mod parser;
mod protocol;
mod session;
mod types;

pub use controller::{Controller, Positions, Units};
pub use error::{Error, ErrorRecord};
pub use group::CodeGroup;
pub use parser::{parse_line, Line, Parser};
pub use protocol::{Notification, Response, ServerLine};
pub use session::Session;
pub use types::{Axis, Code, Command, CoordinateSystem, Parameter, Value};

//! Core library for the jobdeck job-listing client.
//!
//! The interesting logic lives in [`board`]: a raw collection of job records
//! is narrowed by five independent filter predicates, sliced into fixed-size
//! pages, and composed into the view models the presentation layers render.
//! [`config`], [`error`], and [`telemetry`] carry the ambient service
//! concerns shared by the CLI and the HTTP service.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;

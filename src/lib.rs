//! Terminal front-end for the eBay seller analysis service.
//!
//! A single form: paste a listing link, submit, and read back feedback
//! totals, recent comments and an issue sentiment table.

pub mod analysis;
pub mod args;
pub mod config;
pub mod controller;
pub mod logging;
pub mod service;
pub mod ui;

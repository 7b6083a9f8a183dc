//! Command-line front end for browsing the anidex catalog.
#![allow(missing_docs)]

pub mod cli;
pub mod render;
pub mod runner;

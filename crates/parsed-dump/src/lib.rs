//! parsed-dump: normalized YAML dumps of parsed C++ module metadata.
//!
//! A snapshot of parsed modules (classes, templates, functions, enums,
//! typedefs) is loaded, every collection is put into a canonical order with
//! non-comparable details stripped, and the result is written as block-style
//! YAML so dumps from different platforms can be diffed line by line.
//!
//! Pipeline: [`store::snapshot::load_snapshot`] →
//! [`report::build_dump`] (canonicalize + aggregate) → [`report::write_dump`].

pub mod canonical;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod report;
pub mod store;

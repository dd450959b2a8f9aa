//! seqscan — integer sequence analysis toolkit.
//!
//! Two independent, stateless components: a valley/peak profit scanner and
//! a non-adjacent pair-sum combination selector. Library crate exposing all
//! modules for use by integration tests and the binary entry point.

pub mod config;
pub mod types;
pub mod scanner;
pub mod selector;
pub mod analysis;

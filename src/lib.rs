pub mod arguments;
pub mod config;
pub mod error;
pub mod git;
pub mod maven;
pub mod parsers;
pub mod runner;
pub mod syncer;

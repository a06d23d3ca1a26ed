//! Filesystem conventions of the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; everything the plugin reads
//! or writes goes through these helpers.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_export_dir, strip_host_prefix, HOST_ROOT};

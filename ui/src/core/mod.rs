//! Platform-facing plumbing shared by every view: wire types, the API
//! client, endpoint configuration, formatting, and the theme flag.

pub mod api;
pub mod config;
pub mod format;
pub mod model;
pub mod theme;

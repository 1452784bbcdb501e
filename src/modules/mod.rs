//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for resources outside the request cycle, such as upload storage.

pub mod storage;

//! Security Module
//!
//! Response hardening headers applied to every route.

pub mod middleware;

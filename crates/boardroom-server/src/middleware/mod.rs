//! HTTP middleware concerns for the proxy surface.

pub mod cors;

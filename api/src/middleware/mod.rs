//! HTTP middleware components

pub mod cors;

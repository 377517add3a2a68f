//! HTTP transport for the handling service: routing, request decoding and
//! response encoding.

pub mod app;
pub mod config;

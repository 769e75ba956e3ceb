//! Adapters module - implementations of the core's ports.

pub mod document;

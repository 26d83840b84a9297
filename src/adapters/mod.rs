//! Adapters layered over the domain ports.

pub mod cache;

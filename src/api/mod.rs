//! Typed wrappers over the remote API, one module per server blueprint.
//!
//! Wrappers forward request bodies verbatim and decode responses into the
//! shapes in `models`; all cross-cutting policy (signing, unauthorized
//! invalidation, error mapping) lives in the HTTP pipeline, never here.

pub mod admin;
pub mod analysis;
pub mod auth;
pub mod student;

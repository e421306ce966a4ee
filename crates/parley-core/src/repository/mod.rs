//! Repository trait definitions.
//!
//! Traits live here so the relay can be tested against in-memory fakes;
//! the Postgres implementations live in parley-infra.

pub mod message;

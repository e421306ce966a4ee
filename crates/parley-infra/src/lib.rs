//! Infrastructure implementations for Parley.
//!
//! Concrete LLM vendor clients (OpenAI, Gemini), the Postgres-backed
//! message repository, an in-memory repository, and environment
//! configuration loading.

pub mod config;
pub mod llm;
pub mod memory;
pub mod postgres;

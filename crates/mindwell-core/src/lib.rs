//! mindwell-core — Pure domain logic, no UI.
//!
//! This crate contains the conversation engine, the keyword responder,
//! the mood/stress tracker, and the profile/admin models for the
//! MindWell wellness companion. It is completely UI-agnostic —
//! frontends subscribe to events via tokio::broadcast.

pub mod admin;
pub mod config;
pub mod conversation;
pub mod events;
pub mod profile;
pub mod responder;
pub mod tracker;
pub mod types;
pub mod wellness;

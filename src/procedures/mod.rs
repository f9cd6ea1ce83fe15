//! Procedures for answering queries of an engine.
//!
//! For the most part these are methods accessed via an [engine](crate::engine::InferenceEngine), and primarily placed here for documentation.

pub mod entails;
pub mod models;

//! # Workflows Module
//!
//! High-level entry points tying [`crate::core`] and [`crate::engine`]
//! together.
//!
//! - **Generation Workflow** ([`generate`]) - Prepares the host scene, walks the
//!   sequence once and emits base blocks, backbone segments and joints, returning
//!   a [`generate::GenerationReport`].

pub mod generate;

//! # Core Module
//!
//! Stateless building blocks of the helix generator.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Bases, helix forms, primitives, transforms and ids
//! - **Host Scene** ([`scene`]) - The object-creation contract and its in-memory implementation
//! - **Geometry** ([`utils`]) - Rotation and vector helpers built on `nalgebra`
//!
//! Nothing in this module knows about sequences or strands; that lives in
//! [`crate::engine`].

pub mod models;
pub mod scene;
pub mod utils;

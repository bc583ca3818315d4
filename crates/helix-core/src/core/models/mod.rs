//! # Core Models Module
//!
//! Plain data types shared by every layer of the generator.
//!
//! ## Key Components
//!
//! - [`base`] - Nucleotide bases and the complement pairing
//! - [`form`] - The A, B and Z helix forms and their geometry constants
//! - [`primitive`] - Colors, mesh primitive descriptors and object transforms
//! - [`ids`] - Slot-map keys for scene objects and materials

pub mod base;
pub mod form;
pub mod ids;
pub mod primitive;

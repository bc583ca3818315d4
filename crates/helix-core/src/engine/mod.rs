//! # Engine Module
//!
//! The stateful side of generation: turning a sequence into strand points and
//! strand points into host primitives.
//!
//! - [`helix`] - The helix coordinate generator
//! - [`placement`] - Base blocks, backbone cylinders and joint spheres
//! - [`config`] - Validated generation settings and their builder
//! - [`progress`] - Progress events for front ends
//! - [`error`] - The engine error type

pub mod config;
pub mod error;
pub mod helix;
pub mod placement;
pub mod progress;

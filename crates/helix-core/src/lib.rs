//! # dnahelix Core Library
//!
//! Procedural generation of DNA double-helix geometry for a host 3-D scene.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Base`, `DnaForm`,
//!   `Primitive`, `Transform`), the `HostScene` contract with an in-memory
//!   implementation, and geometry helpers.
//!
//! - **[`engine`]: The Logic Core.** The helix coordinate generator, primitive
//!   placement, validated configuration and progress reporting.
//!
//! - **[`workflows`]: The Public API.** A single linear pass over a sequence that
//!   populates a host scene and reports what it built.
//!
//! ```
//! use dnahelix::core::models::form::DnaForm;
//! use dnahelix::core::scene::memory::InMemoryScene;
//! use dnahelix::engine::config::GenerationConfigBuilder;
//! use dnahelix::engine::progress::ProgressReporter;
//! use dnahelix::workflows::generate;
//!
//! let config = GenerationConfigBuilder::new().form(DnaForm::B).build().unwrap();
//! let mut scene = InMemoryScene::new();
//! let report = generate::run(&mut scene, "ATGC", &config, &ProgressReporter::new()).unwrap();
//! assert_eq!(report.pairs_placed, 4);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

//! The host scene seam.
//!
//! [`traits::HostScene`] is the only way the generator touches the outside
//! world. [`memory::InMemoryScene`] is a self-contained implementation used by
//! the command line tool and the tests.

pub mod memory;
pub mod traits;

//! Filesystem primitives for the hook configuration loader
//!
//! Reads config files and writes them back atomically under an advisory lock.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};

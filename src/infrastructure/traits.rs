//! I/O boundary traits for testability
//!
//! Input is read through a trait so the service container can be tested
//! with an in-memory implementation.

use std::io::{self, Read};
use std::path::Path;

/// Source of parent-array text.
pub trait InputSource: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Read all of standard input.
    fn read_stdin(&self) -> io::Result<String>;
}

/// Real filesystem and stdin implementation.
#[derive(Debug, Default)]
pub struct RealInputSource;

impl InputSource for RealInputSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_stdin(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

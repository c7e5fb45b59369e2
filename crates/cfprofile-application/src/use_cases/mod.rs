//! Use Cases

/// Startup profile initialization
pub mod initializer;

pub use initializer::ProfileInitializer;

// src/lib.rs
// Library interface for hearsay

pub mod alphabet;
pub mod assembler;
pub mod export;
pub mod library;

pub use alphabet::Symbol;
pub use assembler::{SessionConfig, TrackAssembler};
pub use library::{Clip, ClipLibrary, LoadError};

// Adapters layer: concrete address sources (memory, file, stdin).

pub mod source;

pub use source::{LineFileSource, MemorySource, StdinSource, SAMPLE_ADDRESSES};

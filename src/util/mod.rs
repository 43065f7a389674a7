//! Common utilities and data structures

pub mod buffer;
pub mod samplefmt;
pub mod timestamp;

pub use buffer::{Buffer, OutputBuffer};
pub use samplefmt::{AudioFormat, SampleFormat, OUTPUT_BITS_PER_SAMPLE};
pub use timestamp::Timestamp;

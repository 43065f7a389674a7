//! Decoder plugin contract

use super::AudioFrame;
use crate::error::Result;
use crate::format::{Packet, StreamParams};

/// Decoder trait exposed to the surrounding codec framework
pub trait Decoder {
    /// Configure the decoder for a stream
    ///
    /// On success `stream.format` is rewritten to the decoder's output format.
    fn open(&mut self, stream: &mut StreamParams) -> Result<()>;

    /// Decode one packet
    fn decode(&mut self, packet: &Packet) -> Result<DecodeOutput>;

    /// Framework control hook
    fn control(&mut self, command: u32, arg: &mut [u8]) -> Result<usize>;

    /// Return the decoder to its just-opened state
    fn reset(&mut self) -> Result<()>;

    /// Release all decoder resources
    fn close(&mut self) -> Result<()>;
}

/// Result of a successful decode call
#[derive(Debug)]
pub struct DecodeOutput {
    /// Packet bytes consumed
    pub consumed: usize,

    /// Produced frame, if any
    pub frame: Option<AudioFrame>,
}

impl DecodeOutput {
    /// Whether a frame was produced
    pub fn got_frame(&self) -> bool {
        self.frame.is_some()
    }
}

/// Fold a decode result into the framework's integer convention
///
/// Returns the consumed byte count and `got_frame` on success, or a negative
/// status with `got_frame == false` on failure.
pub fn decode_status(result: &Result<DecodeOutput>) -> (i32, bool) {
    match result {
        Ok(output) => (
            i32::try_from(output.consumed).unwrap_or(i32::MAX),
            output.got_frame(),
        ),
        Err(e) => (e.code(), false),
    }
}

//! Audio sample format definitions

use crate::error::{Error, Result};
use std::fmt;

/// Bit depth of every decoded output sample
pub const OUTPUT_BITS_PER_SAMPLE: u16 = 32;

/// Packed audio sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Unsigned 8-bit
    U8,
    /// Signed 16-bit
    I16,
    /// Signed 24-bit, packed in 3 bytes
    I24,
    /// Signed 32-bit
    I32,
    /// Unknown format
    Unknown,
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::U8 => "u8",
            SampleFormat::I16 => "s16",
            SampleFormat::I24 => "s24",
            SampleFormat::I32 => "s32",
            SampleFormat::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Channel layout, rate and sample representation of a PCM stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioFormat {
    /// Number of interleaved channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Whether samples are signed
    pub signed: bool,
}

impl AudioFormat {
    /// Create a new format descriptor
    ///
    /// Samples wider than 8 bits are signed.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        AudioFormat {
            channels,
            sample_rate,
            bits_per_sample,
            signed: bits_per_sample > 8,
        }
    }

    /// The decoder's output form of this format: 32-bit signed, same layout
    pub fn to_output(&self) -> Self {
        AudioFormat::new(self.channels, self.sample_rate, OUTPUT_BITS_PER_SAMPLE)
    }

    /// Reject descriptors with a zero channel count, rate or bit depth
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 || self.sample_rate == 0 || self.bits_per_sample == 0 {
            return Err(Error::invalid_config(format!(
                "format must have non-zero channels, rate and bit depth ({})",
                self
            )));
        }
        Ok(())
    }

    /// Bytes occupied by one sample of one channel
    pub fn bytes_per_sample(&self) -> usize {
        (self.bits_per_sample as usize + 7) / 8
    }

    /// Bytes per sample-frame (all channels)
    pub fn frame_size(&self) -> usize {
        self.bytes_per_sample() * self.channels as usize
    }

    /// Packed sample format matching this descriptor
    pub fn sample_format(&self) -> SampleFormat {
        match (self.bits_per_sample, self.signed) {
            (8, false) => SampleFormat::U8,
            (16, true) => SampleFormat::I16,
            (24, true) => SampleFormat::I24,
            (32, true) => SampleFormat::I32,
            _ => SampleFormat::Unknown,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ch={} rate={} bits={} {}",
            self.channels,
            self.sample_rate,
            self.bits_per_sample,
            if self.signed { "signed" } else { "unsigned" }
        )
    }
}

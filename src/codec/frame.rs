//! Frame representation for decoded audio

use crate::error::{Error, Result};
use crate::util::{AudioFormat, Buffer, SampleFormat, Timestamp};
use byteorder::{ByteOrder, LittleEndian};

/// An interleaved PCM audio frame
#[derive(Debug, Clone)]
pub struct AudioFrame {
    /// Interleaved little-endian sample data
    pub data: Buffer,

    /// Number of samples per channel
    pub nb_samples: usize,

    /// Sample layout of `data`
    pub format: AudioFormat,

    /// Presentation timestamp
    pub pts: Timestamp,

    /// Duration
    pub duration: i64,
}

impl AudioFrame {
    /// Build a 32-bit frame by copying interleaved samples
    ///
    /// `samples` must hold `nb_samples * format.channels` values. Fails with
    /// [`Error::FrameAllocFailed`] when the frame storage cannot be allocated.
    pub fn from_i32_samples(format: AudioFormat, nb_samples: usize, samples: &[i32]) -> Result<Self> {
        let bytes = samples.len() * std::mem::size_of::<i32>();

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| Error::FrameAllocFailed { bytes })?;
        data.resize(bytes, 0);
        LittleEndian::write_i32_into(samples, &mut data);

        Ok(AudioFrame {
            data: Buffer::from_vec(data),
            nb_samples,
            format,
            pts: Timestamp::none(),
            duration: 0,
        })
    }

    /// Packed sample format of the data
    pub fn sample_format(&self) -> SampleFormat {
        self.format.sample_format()
    }

    /// Get total number of samples across all channels
    pub fn total_samples(&self) -> usize {
        self.nb_samples * self.format.channels as usize
    }

    /// Decode the data back into interleaved `i32` samples
    pub fn samples_i32(&self) -> Vec<i32> {
        let raw = self.data.as_slice();
        let mut out = vec![0i32; raw.len() / 4];
        LittleEndian::read_i32_into(&raw[..out.len() * 4], &mut out);
        out
    }
}

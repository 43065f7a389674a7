//! Buffer management for media data

use crate::error::{Error, Result};
use bytes::Bytes;
use std::mem;

/// Bytes per native decoder sample
const SAMPLE_BYTES: usize = mem::size_of::<i32>();

/// A reference-counted, immutable buffer for media data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Bytes,
}

impl Buffer {
    /// Create a buffer from a vector
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Buffer {
            data: Bytes::from(vec),
        }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a slice of the buffer data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Grow-only scratch region holding native 32-bit decoder samples
///
/// Capacity is accounted in bytes. Growth keeps every sample already written
/// and the buffer never shrinks, so one allocation is reused across packets.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    samples: Vec<i32>,
}

impl OutputBuffer {
    /// Allocate a buffer holding at least `bytes` bytes
    pub fn with_capacity(bytes: usize) -> Result<Self> {
        let mut buffer = OutputBuffer::default();
        buffer.ensure_capacity(bytes)?;
        Ok(buffer)
    }

    /// Usable capacity in bytes
    pub fn capacity(&self) -> usize {
        self.samples.len() * SAMPLE_BYTES
    }

    /// Usable capacity in samples
    pub fn sample_capacity(&self) -> usize {
        self.samples.len()
    }

    /// Grow to at least `min_bytes`; a no-op when already large enough
    ///
    /// On failure the buffer keeps its previous capacity and content.
    pub fn ensure_capacity(&mut self, min_bytes: usize) -> Result<()> {
        let needed = min_bytes.div_ceil(SAMPLE_BYTES);
        if needed <= self.samples.len() {
            return Ok(());
        }

        self.samples
            .try_reserve_exact(needed - self.samples.len())
            .map_err(|_| Error::Oom {
                requested: min_bytes,
            })?;
        self.samples.resize(needed, 0);

        tracing::debug!("output buffer grown to {} bytes", self.capacity());
        Ok(())
    }

    /// Samples currently held
    pub fn as_slice(&self) -> &[i32] {
        &self.samples
    }

    /// Mutable access to the whole usable region
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.samples
    }
}

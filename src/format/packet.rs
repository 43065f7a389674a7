//! Packet representation for compressed audio data

use crate::util::{Buffer, Timestamp};
use std::fmt;

/// A packet of compressed audio data as produced by a demuxer
#[derive(Debug, Clone)]
pub struct Packet {
    /// Compressed data
    pub data: Buffer,

    /// Presentation timestamp
    pub pts: Timestamp,

    /// Duration of this packet
    pub duration: i64,
}

impl Packet {
    /// Create a new packet
    pub fn new(data: Buffer) -> Self {
        Packet {
            data,
            pts: Timestamp::none(),
            duration: 0,
        }
    }

    /// Create a packet owning a copy of `data`
    pub fn from_slice(data: &[u8]) -> Self {
        Packet::new(Buffer::from_vec(data.to_vec()))
    }

    /// Get the size of the packet data
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Borrow the compressed bytes
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Packet(size={}, pts={}, duration={})",
            self.size(),
            self.pts,
            self.duration
        )
    }
}

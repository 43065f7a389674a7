//! Stream parameters handed to a decoder at open time

use crate::util::AudioFormat;
use bytes::Bytes;
use std::fmt;

/// WMA bitstream variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecVariant {
    /// Windows Media Audio 1
    V1,
    /// Windows Media Audio 2
    V2,
}

impl CodecVariant {
    /// Codec identifier string
    pub fn codec_id(&self) -> &'static str {
        match self {
            CodecVariant::V1 => "wmav1",
            CodecVariant::V2 => "wmav2",
        }
    }
}

impl fmt::Display for CodecVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codec_id())
    }
}

/// Declared configuration of an audio stream
///
/// A successful open rewrites `format` to the decoder's output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamParams {
    /// Sample format declared by the container
    pub format: AudioFormat,

    /// Block alignment in bytes
    pub block_align: u32,

    /// Declared bitrate in bits per second
    pub bitrate: u32,

    /// WMA bitstream variant
    pub variant: CodecVariant,

    /// Codec-specific side configuration
    pub extradata: Option<Bytes>,
}

impl StreamParams {
    /// Create stream parameters without side configuration
    pub fn new(format: AudioFormat, block_align: u32, bitrate: u32, variant: CodecVariant) -> Self {
        StreamParams {
            format,
            block_align,
            bitrate,
            variant,
            extradata: None,
        }
    }

    /// Attach codec-specific side configuration
    pub fn with_extradata(mut self, data: impl Into<Bytes>) -> Self {
        self.extradata = Some(data.into());
        self
    }
}

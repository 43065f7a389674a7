//! Windows Media Audio (WMA v1/v2) decoder
//!
//! The bitstream itself is decoded by an engine supplied through
//! [`EngineFactory`]. This module owns everything around it: the superframe
//! loop that walks a packet's sub-frames, the grow-only output buffer sized
//! from a worst-case compression ratio, saturation of the engine's
//! fixed-point output into 32-bit PCM, and the open/reset/close lifecycle.

pub mod decoder;
pub mod engine;
pub mod saturate;
pub mod superframe;

pub use decoder::{DecoderState, WmaDecoder};
pub use engine::{EngineBinding, EngineError, EngineFactory, EngineParams, WmaEngine};
pub use saturate::{saturate_in_place, saturate_sample};
pub use superframe::decode_superframe;

use serde::{Deserialize, Serialize};

/// Upper bound on decoded-to-compressed size used for the first allocation
pub const COMPRESS_RATIO_MAX: usize = 20;

/// Extra samples per sub-frame allowed by the corrective allocation
pub const SUBFRAME_HEADROOM: usize = 128;

/// Output buffer size allocated at open: 2048 stereo 16-bit samples
pub const DEFAULT_OUTPUT_BUFFER_SIZE: usize = 2048 * 2 * 2;

/// Most side-configuration bytes passed on to the engine
pub const MAX_EXTRADATA_SIZE: usize = 6;

/// Tunables for output buffer sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// Multiplier applied to the packet length for the initial grow
    pub compress_ratio_max: usize,

    /// Per-sub-frame slack in the corrective grow, in samples
    pub subframe_headroom: usize,

    /// Bytes allocated when the decoder is opened
    pub initial_buffer_size: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            compress_ratio_max: COMPRESS_RATIO_MAX,
            subframe_headroom: SUBFRAME_HEADROOM,
            initial_buffer_size: DEFAULT_OUTPUT_BUFFER_SIZE,
        }
    }
}

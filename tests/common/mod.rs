//! Common test utilities for WMA decoder integration tests
//!
//! Provides a scripted engine standing in for the real bitstream decoder.
//! Scripted packets have the layout:
//!
//! ```text
//! [nb_frames: u8] [count: u16 LE] * nb_frames [amplitude: i32 LE] [padding]
//! ```
//!
//! Each sub-frame decodes to `count` samples per channel, all equal to
//! `amplitude`. A count of zero makes that sub-frame fail.

#![allow(dead_code)]

use byteorder::{ByteOrder, LittleEndian};
use zvd_wma::codec::wma::{EngineError, EngineParams, WmaEngine};
use zvd_wma::format::{CodecVariant, Packet, StreamParams};
use zvd_wma::util::{AudioFormat, Buffer, Timestamp};

// ============================================================================
// Scripted Engine
// ============================================================================

pub struct ScriptedEngine {
    channels: usize,
    counts: Vec<usize>,
    amplitude: i32,
    next: usize,
}

impl ScriptedEngine {
    pub fn new(params: &EngineParams) -> Self {
        ScriptedEngine {
            channels: params.channels as usize,
            counts: Vec::new(),
            amplitude: 0,
            next: 0,
        }
    }
}

impl WmaEngine for ScriptedEngine {
    fn superframe_init(&mut self, packet: &[u8]) -> Result<usize, EngineError> {
        let (&nb_frames, rest) = packet
            .split_first()
            .ok_or_else(|| EngineError::new("empty packet"))?;
        let nb_frames = nb_frames as usize;
        let header = nb_frames * 2 + 4;
        if rest.len() < header {
            return Err(EngineError::new("truncated superframe header"));
        }

        self.counts = rest[..nb_frames * 2]
            .chunks_exact(2)
            .map(|c| LittleEndian::read_u16(c) as usize)
            .collect();
        self.amplitude = LittleEndian::read_i32(&rest[nb_frames * 2..header]);
        self.next = 0;
        Ok(nb_frames)
    }

    fn decode_subframe(&mut self, _packet: &[u8], out: &mut [i32]) -> Result<usize, EngineError> {
        let count = *self
            .counts
            .get(self.next)
            .ok_or_else(|| EngineError::new("no sub-frame left"))?;
        self.next += 1;

        if count == 0 {
            return Err(EngineError::new("corrupt sub-frame"));
        }
        let n = count * self.channels;
        if n > out.len() {
            return Err(EngineError::new("output region too small"));
        }
        out[..n].fill(self.amplitude);
        Ok(count)
    }
}

/// Factory for [`ScriptedEngine`]; rejects WMA v1 streams with more than two channels
pub fn scripted_factory(params: &EngineParams) -> Result<ScriptedEngine, EngineError> {
    if params.variant == CodecVariant::V1 && params.channels > 2 {
        return Err(EngineError::new("wmav1 supports at most 2 channels"));
    }
    Ok(ScriptedEngine::new(params))
}

// ============================================================================
// Packet and Stream Helpers
// ============================================================================

/// Build a scripted packet padded to at least `min_len` bytes
pub fn build_packet(counts: &[u16], amplitude: i32, min_len: usize) -> Packet {
    let mut data = vec![counts.len() as u8];
    for &count in counts {
        let mut raw = [0u8; 2];
        LittleEndian::write_u16(&mut raw, count);
        data.extend_from_slice(&raw);
    }
    let mut raw = [0u8; 4];
    LittleEndian::write_i32(&mut raw, amplitude);
    data.extend_from_slice(&raw);

    if data.len() < min_len {
        data.resize(min_len, 0);
    }
    Packet::new(Buffer::from_vec(data))
}

/// Scripted packet carrying a timestamp
pub fn build_timed_packet(counts: &[u16], amplitude: i32, pts: i64, duration: i64) -> Packet {
    let mut packet = build_packet(counts, amplitude, 2048);
    packet.pts = Timestamp::new(pts);
    packet.duration = duration;
    packet
}

/// Stereo 44.1 kHz 16-bit WMA v2 stream without side configuration
pub fn stereo_stream() -> StreamParams {
    StreamParams::new(AudioFormat::new(2, 44100, 16), 2048, 128_000, CodecVariant::V2)
}

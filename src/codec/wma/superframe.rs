//! Superframe decode loop
//!
//! A WMA packet may bundle several sub-frames. The output size is unknown
//! until decoding starts, so the buffer is first grown to
//! `packet_len * compress_ratio_max` bytes. Once the first of several
//! sub-frames has decoded, one corrective grow sizes it to
//! `(first_samples + headroom) * nb_frames * frame_size`. No packet causes
//! more than two growth requests.

use super::engine::WmaEngine;
use super::DecoderOptions;
use crate::error::{Error, Result};
use crate::util::{AudioFormat, OutputBuffer};
use tracing::{error, trace};

/// Decode every sub-frame of `packet` into `buffer`
///
/// Sub-frames are stored back to back as interleaved native samples starting
/// at the beginning of the buffer. `format` is the output format and sets the
/// frame stride. Returns the total number of samples per channel. Any failing
/// sub-frame aborts the whole packet.
pub fn decode_superframe<E: WmaEngine + ?Sized>(
    engine: &mut E,
    buffer: &mut OutputBuffer,
    packet: &[u8],
    format: &AudioFormat,
    options: &DecoderOptions,
) -> Result<usize> {
    let nb_frames = engine.superframe_init(packet).map_err(|e| {
        error!("superframe init failed: {}", e);
        Error::malformed_superframe(e.0)
    })?;
    if nb_frames == 0 {
        error!("superframe of {} bytes holds no frames", packet.len());
        return Err(Error::malformed_superframe("superframe holds no frames"));
    }

    buffer.ensure_capacity(packet.len().saturating_mul(options.compress_ratio_max))?;

    let channels = format.channels as usize;
    let mut total_samples = 0usize;

    for index in 0..nb_frames {
        let offset = total_samples * channels;
        let out = buffer
            .as_mut_slice()
            .get_mut(offset..)
            .ok_or_else(|| Error::subframe_failed(index, "offset beyond output buffer"))?;
        let room = out.len();

        let nb_samples = engine
            .decode_subframe(packet, out)
            .map_err(|e| Error::subframe_failed(index, e.0))?;
        if nb_samples == 0 {
            return Err(Error::subframe_failed(index, "no samples decoded"));
        }
        if nb_samples.saturating_mul(channels) > room {
            return Err(Error::subframe_failed(
                index,
                format!("{} samples exceed remaining room of {}", nb_samples, room),
            ));
        }

        total_samples += nb_samples;
        trace!(
            "sub-frame {}/{}: {} samples (total {})",
            index + 1,
            nb_frames,
            nb_samples,
            total_samples
        );

        if index == 0 && nb_frames > 1 {
            let size = nb_samples
                .saturating_add(options.subframe_headroom)
                .saturating_mul(nb_frames)
                .saturating_mul(format.frame_size());
            buffer.ensure_capacity(size)?;
        }
    }

    Ok(total_samples)
}

//! WMA decoder lifecycle

use super::engine::{EngineBinding, EngineFactory};
use super::saturate::saturate_in_place;
use super::superframe::decode_superframe;
use super::DecoderOptions;
use crate::codec::{AudioFrame, DecodeOutput, Decoder};
use crate::error::{Error, Result};
use crate::format::{Packet, StreamParams};
use crate::util::{AudioFormat, OutputBuffer};
use tracing::{debug, trace, warn};

/// Lifecycle state of a [`WmaDecoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// No engine or buffer allocated
    Closed,
    /// Ready to decode packets
    Opened,
}

/// Resources held between open and close
struct Session<E> {
    binding: EngineBinding<E>,
    buffer: OutputBuffer,
    output_format: AudioFormat,
}

/// WMA v1/v2 decoder producing interleaved 32-bit signed PCM
///
/// Starts [`Closed`](DecoderState::Closed). A successful
/// [`open`](Decoder::open) allocates the output buffer and engine; both are
/// dropped again by [`close`](Decoder::close).
pub struct WmaDecoder<F: EngineFactory> {
    factory: F,
    options: DecoderOptions,
    session: Option<Session<F::Engine>>,
}

impl<F: EngineFactory> WmaDecoder<F> {
    /// Create a closed decoder with default buffer sizing
    pub fn new(factory: F) -> Self {
        Self::with_options(factory, DecoderOptions::default())
    }

    /// Create a closed decoder with custom buffer sizing
    pub fn with_options(factory: F, options: DecoderOptions) -> Self {
        WmaDecoder {
            factory,
            options,
            session: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DecoderState {
        if self.session.is_some() {
            DecoderState::Opened
        } else {
            DecoderState::Closed
        }
    }

    /// Format of decoded frames, once opened
    pub fn output_format(&self) -> Option<AudioFormat> {
        self.session.as_ref().map(|s| s.output_format)
    }

    /// Current output buffer capacity in bytes, zero when closed
    pub fn buffer_capacity(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.buffer.capacity())
    }

    /// Buffer sizing options
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }
}

impl<F: EngineFactory> Decoder for WmaDecoder<F> {
    fn open(&mut self, stream: &mut StreamParams) -> Result<()> {
        if self.session.is_some() {
            return Err(Error::invalid_state("decoder is already open"));
        }

        let buffer = OutputBuffer::with_capacity(self.options.initial_buffer_size)?;
        let binding = EngineBinding::init(&self.factory, stream)?;
        let output_format = stream.format.to_output();

        debug!(
            "{} decoder opened: {} => {} ({})",
            stream.variant,
            stream.format,
            output_format,
            output_format.sample_format()
        );
        stream.format = output_format;
        self.session = Some(Session {
            binding,
            buffer,
            output_format,
        });

        Ok(())
    }

    fn decode(&mut self, packet: &Packet) -> Result<DecodeOutput> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| Error::invalid_state("decode called on a closed decoder"))?;
        let format = session.output_format;

        let nb_samples = decode_superframe(
            session.binding.engine_mut(),
            &mut session.buffer,
            packet.as_slice(),
            &format,
            &self.options,
        )
        .inspect_err(|e| warn!("failed to decode {}: {}", packet, e))?;

        let samples = &mut session.buffer.as_mut_slice()[..nb_samples * format.channels as usize];
        saturate_in_place(samples);

        let mut frame = AudioFrame::from_i32_samples(format, nb_samples, samples).inspect_err(|_| {
            debug!(
                "frame alloc failed, may be oom. nb_samples = {}, format => {}",
                nb_samples, format
            )
        })?;
        frame.pts = packet.pts;
        frame.duration = packet.duration;

        Ok(DecodeOutput {
            consumed: packet.size(),
            frame: Some(frame),
        })
    }

    fn control(&mut self, command: u32, arg: &mut [u8]) -> Result<usize> {
        trace!("control command {} ({} byte arg) ignored", command, arg.len());
        Ok(0)
    }

    fn reset(&mut self) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| Error::invalid_state("reset called on a closed decoder"))?;
        session.binding.reinit(&self.factory)?;
        debug!(
            "decoder reset, keeping {} byte output buffer",
            session.buffer.capacity()
        );
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.session.take() {
            Some(session) => {
                debug!(
                    "decoder closed, releasing {} byte output buffer",
                    session.buffer.capacity()
                );
                Ok(())
            }
            None => Err(Error::invalid_state("decoder is already closed")),
        }
    }
}

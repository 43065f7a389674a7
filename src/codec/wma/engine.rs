//! Binding to the WMA bitstream engine
//!
//! The engine does the entropy decoding and inverse transform. Its state is
//! opaque here: a [`WmaEngine`] value is built by an [`EngineFactory`] from
//! [`EngineParams`] and owned by exactly one [`EngineBinding`].

use super::MAX_EXTRADATA_SIZE;
use crate::error::{Error, Result};
use crate::format::{CodecVariant, StreamParams};
use bytes::Bytes;
use tracing::{debug, error};

/// Failure reported by the engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    /// Create an engine error
    pub fn new<S: Into<String>>(msg: S) -> Self {
        EngineError(msg.into())
    }
}

/// Superframe-level interface of a WMA decoding engine
pub trait WmaEngine {
    /// Parse the superframe header of `packet` and return its sub-frame count
    fn superframe_init(&mut self, packet: &[u8]) -> std::result::Result<usize, EngineError>;

    /// Decode the next sub-frame of `packet` into `out`
    ///
    /// Writes interleaved native fixed-point samples and returns the number
    /// of samples per channel produced.
    fn decode_subframe(
        &mut self,
        packet: &[u8],
        out: &mut [i32],
    ) -> std::result::Result<usize, EngineError>;
}

impl<E: WmaEngine + ?Sized> WmaEngine for Box<E> {
    fn superframe_init(&mut self, packet: &[u8]) -> std::result::Result<usize, EngineError> {
        (**self).superframe_init(packet)
    }

    fn decode_subframe(
        &mut self,
        packet: &[u8],
        out: &mut [i32],
    ) -> std::result::Result<usize, EngineError> {
        (**self).decode_subframe(packet, out)
    }
}

/// Builds engine state from stream parameters
pub trait EngineFactory {
    /// Engine produced by this factory
    type Engine: WmaEngine;

    /// Validate `params` and build a fresh engine
    fn create(&self, params: &EngineParams) -> std::result::Result<Self::Engine, EngineError>;
}

impl<F, E> EngineFactory for F
where
    F: Fn(&EngineParams) -> std::result::Result<E, EngineError>,
    E: WmaEngine,
{
    type Engine = E;

    fn create(&self, params: &EngineParams) -> std::result::Result<E, EngineError> {
        self(params)
    }
}

/// Parameters the engine is initialized from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineParams {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Declared bitrate in bits per second
    pub bitrate: u32,
    /// Channel count
    pub channels: u16,
    /// Block alignment in bytes
    pub block_align: u32,
    /// Bits per sample declared by the stream
    pub bits_per_sample: u16,
    /// Bitstream variant
    pub variant: CodecVariant,
    /// Side configuration, at most [`MAX_EXTRADATA_SIZE`] bytes
    pub extradata: Bytes,
}

impl EngineParams {
    /// Derive engine parameters from a stream declaration
    ///
    /// Fails with [`Error::InvalidConfig`] when channels, rate, bit depth,
    /// block alignment or bitrate is zero. Extradata beyond
    /// [`MAX_EXTRADATA_SIZE`] bytes is dropped.
    pub fn from_stream(stream: &StreamParams) -> Result<Self> {
        let format = stream.format;
        let checked = format.validate().and_then(|_| {
            if stream.block_align == 0 || stream.bitrate == 0 {
                return Err(Error::invalid_config(format!(
                    "block_align ({}) and bitrate ({}) must be non-zero",
                    stream.block_align, stream.bitrate
                )));
            }
            Ok(())
        });
        if let Err(e) = checked {
            error!(
                "stream invalid. block_align = {}, bitrate = {}, format => {}",
                stream.block_align, stream.bitrate, format
            );
            return Err(e);
        }

        let extradata = match &stream.extradata {
            Some(data) => data.slice(..data.len().min(MAX_EXTRADATA_SIZE)),
            None => Bytes::new(),
        };

        Ok(EngineParams {
            sample_rate: format.sample_rate,
            bitrate: stream.bitrate,
            channels: format.channels,
            block_align: stream.block_align,
            bits_per_sample: format.bits_per_sample,
            variant: stream.variant,
            extradata,
        })
    }
}

/// Exclusive owner of one engine instance and the parameters it was built from
pub struct EngineBinding<E> {
    engine: E,
    params: EngineParams,
}

impl<E: WmaEngine> EngineBinding<E> {
    /// Validate the stream and initialize an engine for it
    pub fn init<F>(factory: &F, stream: &StreamParams) -> Result<Self>
    where
        F: EngineFactory<Engine = E>,
    {
        let params = EngineParams::from_stream(stream)?;
        let engine = Self::build(factory, &params)?;
        Ok(EngineBinding { engine, params })
    }

    /// Discard the engine and build a new one from the stored parameters
    ///
    /// The current engine is only replaced once the new one exists.
    pub fn reinit<F>(&mut self, factory: &F) -> Result<()>
    where
        F: EngineFactory<Engine = E>,
    {
        self.engine = Self::build(factory, &self.params)?;
        Ok(())
    }

    fn build<F>(factory: &F, params: &EngineParams) -> Result<E>
    where
        F: EngineFactory<Engine = E>,
    {
        let engine = factory.create(params).map_err(|e| {
            error!("{} engine init failed: {}", params.variant, e);
            Error::engine_rejected(e.0)
        })?;
        debug!(
            "{} engine ready: {} Hz, {} ch, block_align {}, {} extradata bytes",
            params.variant,
            params.sample_rate,
            params.channels,
            params.block_align,
            params.extradata.len()
        );
        Ok(engine)
    }

    /// Parameters the engine was built from
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Mutable access to the engine
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::AudioFormat;
    use std::cell::Cell;

    struct NullEngine {
        generation: u32,
    }

    impl WmaEngine for NullEngine {
        fn superframe_init(&mut self, _packet: &[u8]) -> std::result::Result<usize, EngineError> {
            Ok(1)
        }

        fn decode_subframe(
            &mut self,
            _packet: &[u8],
            _out: &mut [i32],
        ) -> std::result::Result<usize, EngineError> {
            Ok(1)
        }
    }

    fn stereo_stream() -> StreamParams {
        StreamParams::new(AudioFormat::new(2, 44100, 16), 2048, 128_000, CodecVariant::V2)
    }

    #[test]
    fn test_extradata_is_truncated() {
        let stream = stereo_stream().with_extradata(vec![1u8, 2, 3, 4, 5, 6, 7, 8]);
        let params = EngineParams::from_stream(&stream).unwrap();
        assert_eq!(&params.extradata[..], &[1, 2, 3, 4, 5, 6]);

        let short = stereo_stream().with_extradata(vec![9u8, 9]);
        assert_eq!(&EngineParams::from_stream(&short).unwrap().extradata[..], &[9, 9]);
    }

    #[test]
    fn test_zero_fields_are_invalid_config() {
        let mut stream = stereo_stream();
        stream.block_align = 0;
        assert!(matches!(
            EngineParams::from_stream(&stream),
            Err(Error::InvalidConfig(_))
        ));

        let mut stream = stereo_stream();
        stream.bitrate = 0;
        assert!(matches!(
            EngineParams::from_stream(&stream),
            Err(Error::InvalidConfig(_))
        ));

        let mut stream = stereo_stream();
        stream.format.sample_rate = 0;
        assert!(matches!(
            EngineParams::from_stream(&stream),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_config_never_reaches_factory() {
        let calls = Cell::new(0);
        let factory = |_: &EngineParams| -> std::result::Result<NullEngine, EngineError> {
            calls.set(calls.get() + 1);
            Ok(NullEngine { generation: 0 })
        };

        let mut stream = stereo_stream();
        stream.format.channels = 0;
        assert!(EngineBinding::init(&factory, &stream).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_factory_rejection() {
        let factory = |_: &EngineParams| -> std::result::Result<NullEngine, EngineError> {
            Err(EngineError::new("unsupported flags"))
        };
        let err = EngineBinding::init(&factory, &stereo_stream()).err().unwrap();
        assert_eq!(err, Error::engine_rejected("unsupported flags"));
    }

    #[test]
    fn test_reinit_builds_new_engine() {
        let built = Cell::new(0);
        let factory = |_: &EngineParams| -> std::result::Result<NullEngine, EngineError> {
            built.set(built.get() + 1);
            Ok(NullEngine {
                generation: built.get(),
            })
        };

        let mut binding = EngineBinding::init(&factory, &stereo_stream()).unwrap();
        assert_eq!(binding.engine_mut().generation, 1);
        binding.reinit(&factory).unwrap();
        assert_eq!(binding.engine_mut().generation, 2);
        assert_eq!(binding.params().variant, CodecVariant::V2);
    }

    #[test]
    fn test_failed_reinit_keeps_engine() {
        let built = Cell::new(0);
        let factory = |_: &EngineParams| -> std::result::Result<NullEngine, EngineError> {
            built.set(built.get() + 1);
            if built.get() == 2 {
                return Err(EngineError::new("out of engine memory"));
            }
            Ok(NullEngine {
                generation: built.get(),
            })
        };

        let mut binding = EngineBinding::init(&factory, &stereo_stream()).unwrap();
        let err = binding.reinit(&factory).unwrap_err();
        assert_eq!(err, Error::engine_rejected("out of engine memory"));
        assert_eq!(binding.engine_mut().generation, 1);

        binding.reinit(&factory).unwrap();
        assert_eq!(binding.engine_mut().generation, 3);
    }
}

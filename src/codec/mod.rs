//! Codec implementations

pub mod decoder;
pub mod frame;
pub mod wma;

pub use decoder::{decode_status, DecodeOutput, Decoder};
pub use frame::AudioFrame;
pub use wma::{DecoderOptions, DecoderState, WmaDecoder};

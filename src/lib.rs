//! ZVD WMA - a Windows Media Audio packet decoder written in Rust
//!
//! Turns WMA v1/v2 packets into interleaved 32-bit signed PCM. Bitstream
//! decoding is delegated to an engine implementing
//! [`codec::wma::WmaEngine`]; this crate drives it over each packet's
//! superframe, manages the output buffer and saturates the result.
//!
//! # Architecture
//!
//! - `codec`: the decoder plugin contract, decoded frames and the WMA decoder
//! - `format`: packets and stream parameters supplied by a demuxer
//! - `util`: sample formats, buffers and timestamps
//!
//! # Example
//!
//! ```rust,ignore
//! use zvd_wma::codec::{Decoder, WmaDecoder};
//! use zvd_wma::format::{CodecVariant, Packet, StreamParams};
//! use zvd_wma::util::AudioFormat;
//!
//! let mut decoder = WmaDecoder::new(my_engine_factory);
//! let mut stream = StreamParams::new(AudioFormat::new(2, 44100, 16), 2048, 128_000, CodecVariant::V2);
//! decoder.open(&mut stream)?;
//! let output = decoder.decode(&Packet::from_slice(&packet_bytes))?;
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod util;

pub use error::{Error, Result};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;

/// Configuration for the library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the library with the given configuration
///
/// Installs a `tracing` subscriber when logging is requested. A subscriber
/// that is already installed is left in place.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        if let Err(e) = tracing_subscriber::fmt().with_env_filter(level).try_init() {
            tracing::debug!("keeping existing tracing subscriber: {}", e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION_MAJOR, 0);
        assert_eq!(VERSION_MINOR, 1);
        assert_eq!(VERSION_PATCH, 0);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_init() {
        assert!(init(Config::default()).is_ok());
        assert!(init(Config {
            verbose: true,
            debug: true,
        })
        .is_ok());
    }
}

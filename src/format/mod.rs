//! Packet and stream descriptions supplied by the container layer

pub mod packet;
pub mod stream;

pub use packet::Packet;
pub use stream::{CodecVariant, StreamParams};

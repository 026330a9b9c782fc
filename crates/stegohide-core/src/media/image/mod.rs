pub mod decoder;
pub mod encoder;
mod iterators;
pub mod lsb_codec;

pub use decoder::{LsbDecoder, UnveilBit};
pub use encoder::{HideBit, LsbEncoder};
pub use lsb_codec::{LsbCodec, DELIMITER_BITS, DELIMITER_V1};

use crate::Channel;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A packed value does not fit in 24 bits.
    #[error("value must be in the [0, 16777215] range, found {value}")]
    OutOfRange {
        /// The rejected value.
        value: i64,
    },

    /// An integer channel is outside of [0, 255].
    #[error("{channel} must be in the [0, 255] range, found {value}")]
    ChannelOutOfRange {
        /// The offending channel.
        channel: Channel,
        /// The rejected value.
        value: i32,
    },

    /// A normalized channel is outside of [0.0, 1.0], or is NaN.
    #[error("{channel} must be in the [0.0, 1.0] range, found {value}")]
    NormalizedOutOfRange {
        /// The offending channel.
        channel: Channel,
        /// The rejected value.
        value: f32,
    },

    /// The string is not a `#` followed by one to six hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

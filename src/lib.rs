//! Exact-width 24-bit unsigned integers and the packed RGB colors built on them.
//!
//! # Integers
//!
//! A [U24] takes up exactly three bytes and never holds a value above `0xFFFFFF`:
//!
//! ```
//! use rgb24::U24;
//! let n = U24::new(0xABCDEF).unwrap();
//! assert_eq!(0x543210, (!n).get());
//! assert!(U24::new(0x1000000).is_err());
//! ```
//!
//! # Colors
//!
//! A [Color] wraps one `U24`. Create colors from bytes, a packed integer, integer channels, or
//! normalized float channels:
//!
//! ```
//! use rgb24::Color;
//! let a = Color::new(0xFF, 0, 0);
//! let b = Color::from_packed(0xFF0000).unwrap();
//! let c = Color::from_channels(255, 0, 0).unwrap();
//! let d = Color::from_normalized(1.0, 0.0, 0.0).unwrap();
//! assert!(a == b && b == c && c == d);
//! ```
//!
//! Channel algebra works on the whole packed value:
//!
//! ```
//! use rgb24::Color;
//! assert_eq!(Color::YELLOW, Color::RED.combine(Color::GREEN));
//! assert_eq!(Color::RED, Color::YELLOW.remove(Color::MAGENTA));
//! assert_eq!(Color::BLACK, Color::WHITE.invert());
//! ```
//!
//! The canonical text form is the unpadded lowercase hex of the packed value:
//!
//! ```
//! use rgb24::Color;
//! assert_eq!("#ff0000", Color::RED.to_string());
//! assert_eq!("#1", Color::new(0, 0, 1).to_string());
//! assert_eq!("#000001", format!("#{:06x}", Color::new(0, 0, 1)));
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod color;
mod error;
pub mod u24;

pub use crate::color::{Channel, Color};
pub use crate::error::Error;
pub use crate::u24::U24;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

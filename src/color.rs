use crate::{Error, Result, U24};
use byteorder::BigEndian;
use num_traits::ToPrimitive;
use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;

/// One of the three channels of a [Color].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, bits 16 through 23 of the packed value.
    Red,
    /// Green, bits 8 through 15 of the packed value.
    Green,
    /// Blue, bits 0 through 7 of the packed value.
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Channel::Red => write!(f, "r"),
            Channel::Green => write!(f, "g"),
            Channel::Blue => write!(f, "b"),
        }
    }
}

/// A RGB color value, packed into three bytes.
///
/// The channels are not stored separately; they are views of a single [U24] holding
/// `r << 16 | g << 8 | b`. Ordering, equality, and hashing all use that packed value.
///
/// # Examples
///
/// ```
/// use rgb24::Color;
/// let color = Color::new(1, 2, 3);
/// assert_eq!(1, color.r());
/// assert_eq!(2, color.g());
/// assert_eq!(3, color.b());
/// assert_eq!(0x010203, color.to_packed());
/// assert_eq!(3, std::mem::size_of::<Color>());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Color(U24);

impl Color {
    /// `#ffffff`
    pub const WHITE: Color = Color(U24::MAX);
    /// `#000000`
    pub const BLACK: Color = Color(U24::MIN);
    /// `#c0c0c0`
    pub const GRAY: Color = Color::new(0xC0, 0xC0, 0xC0);
    /// `#ff0000`
    pub const RED: Color = Color::new(0xFF, 0, 0);
    /// `#00ff00`
    pub const GREEN: Color = Color::new(0, 0xFF, 0);
    /// `#0000ff`
    pub const BLUE: Color = Color::new(0, 0, 0xFF);
    /// `#00ffff`
    pub const TEAL: Color = Color::new(0, 0xFF, 0xFF);
    /// `#ffff00`
    pub const YELLOW: Color = Color::new(0xFF, 0xFF, 0);
    /// `#ff00ff`
    pub const MAGENTA: Color = Color::new(0xFF, 0, 0xFF);

    /// Creates a new color from byte channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// assert_eq!(Color::RED, Color::new(255, 0, 0));
    /// ```
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color(U24::from_le_bytes([b, g, r]))
    }

    /// Creates a new color from a packed `0xRRGGBB` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// assert_eq!(Color::TEAL, Color::from_packed(0x00FFFF).unwrap());
    /// assert!(Color::from_packed(0x1000000).is_err());
    /// ```
    pub fn from_packed(value: u32) -> Result<Color> {
        U24::new(value).map(Color)
    }

    /// Creates a new color from integer channels, each of which must be in [0, 255].
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::{Channel, Color, Error};
    /// assert_eq!(Color::new(1, 2, 3), Color::from_channels(1, 2, 3).unwrap());
    /// assert_eq!(
    ///     Error::ChannelOutOfRange { channel: Channel::Green, value: 256 },
    ///     Color::from_channels(0, 256, 0).unwrap_err()
    /// );
    /// ```
    pub fn from_channels(r: i32, g: i32, b: i32) -> Result<Color> {
        Ok(Color::new(
            checked_channel(r, Channel::Red)?,
            checked_channel(g, Channel::Green)?,
            checked_channel(b, Channel::Blue)?,
        ))
    }

    /// Creates a new color from normalized channels, each of which must be in [0.0, 1.0].
    ///
    /// Each channel is scaled by 255 and truncated toward zero, not rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// assert_eq!(Color::RED, Color::from_normalized(1.0, 0.0, 0.0).unwrap());
    /// assert_eq!(254, Color::from_normalized(0.999, 0.0, 0.0).unwrap().r());
    /// assert!(Color::from_normalized(0.0, 0.0, 1.5).is_err());
    /// ```
    pub fn from_normalized(r: f32, g: f32, b: f32) -> Result<Color> {
        Ok(Color::new(
            normalized_channel(r, Channel::Red)?,
            normalized_channel(g, Channel::Green)?,
            normalized_channel(b, Channel::Blue)?,
        ))
    }

    /// Reads a color from three bytes in red, green, blue order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// let color = Color::read_from(&[0xff, 0x80, 0x00][..]).unwrap();
    /// assert_eq!(Color::new(0xff, 0x80, 0x00), color);
    /// ```
    pub fn read_from<R: Read>(read: R) -> io::Result<Color> {
        U24::read_from::<BigEndian, _>(read).map(Color)
    }

    /// Writes this color as three bytes in red, green, blue order.
    pub fn write_to<W: Write>(self, write: W) -> io::Result<()> {
        self.0.write_to::<BigEndian, _>(write)
    }

    /// The red channel.
    pub const fn r(self) -> u8 {
        (self.0.get() >> 16) as u8
    }

    /// The green channel.
    pub const fn g(self) -> u8 {
        (self.0.get() >> 8) as u8
    }

    /// The blue channel.
    pub const fn b(self) -> u8 {
        self.0.get() as u8
    }

    /// Returns the value of one channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::{Channel, Color};
    /// assert_eq!(0xC0, Color::GRAY.channel(Channel::Blue));
    /// ```
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r(),
            Channel::Green => self.g(),
            Channel::Blue => self.b(),
        }
    }

    /// Returns the `(r, g, b)` channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn to_packed(self) -> u32 {
        self.0.get()
    }

    /// Combines two colors with a bitwise or of their packed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// assert_eq!(Color::YELLOW, Color::RED.combine(Color::GREEN));
    /// ```
    pub fn combine(self, other: Color) -> Color {
        Color(self.0 | other.0)
    }

    /// Keeps only the bits set in both colors, a bitwise and of their packed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// assert_eq!(Color::GREEN, Color::YELLOW.remove(Color::TEAL));
    /// ```
    pub fn remove(self, other: Color) -> Color {
        Color(self.0 & other.0)
    }

    /// Returns the complement of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::Color;
    /// assert_eq!(Color::BLACK, Color::WHITE.invert());
    /// assert_eq!(Color::TEAL, Color::RED.invert());
    /// ```
    pub fn invert(self) -> Color {
        Color(!self.0)
    }
}

fn checked_channel(value: i32, channel: Channel) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        log::debug!("rejecting {channel} channel value {value}");
        Error::ChannelOutOfRange { channel, value }
    })
}

fn normalized_channel(value: f32, channel: Channel) -> Result<u8> {
    let error = || {
        log::debug!("rejecting normalized {channel} channel value {value}");
        Error::NormalizedOutOfRange { channel, value }
    };
    if !(0.0..=1.0).contains(&value) {
        return Err(error());
    }
    // `to_u8` truncates toward zero, so 0.999 becomes 254 rather than 255.
    (value * 255.0).to_u8().ok_or_else(error)
}

impl From<U24> for Color {
    fn from(value: U24) -> Color {
        Color(value)
    }
}

impl From<Color> for U24 {
    fn from(color: Color) -> U24 {
        color.0
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> u32 {
        color.to_packed()
    }
}

impl TryFrom<u32> for Color {
    type Error = Error;
    fn try_from(value: u32) -> Result<Color> {
        Color::from_packed(value)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Color {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> [u8; 3] {
        [color.r(), color.g(), color.b()]
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses the canonical form written by `Display`, a `#` followed by one to six hex digits.
    fn from_str(s: &str) -> Result<Color> {
        let invalid = || Error::InvalidHex(s.to_string());
        let digits = s
            .strip_prefix('#')
            .filter(|digits| {
                (1..=6).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_hexdigit())
            })
            .ok_or_else(invalid)?;
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Color::from_packed(value)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .finish()
    }
}

/// Writes `#` and the lowercase hex digits of the packed value, without zero padding.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Octal for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl fmt::Binary for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

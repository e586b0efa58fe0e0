//! Exact-width 24-bit unsigned integers.
//!
//! A `U24` occupies exactly three bytes, stored little-endian. Every constructor that takes a
//! wider integer checks the range, so a `U24` never holds a value above `U24::MAX`.

use crate::{Error, Result};
use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};
use num_traits::{Bounded, FromPrimitive, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Read, Write};
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

const MASK: u32 = 0x00FF_FFFF;

/// A 24-bit unsigned integer that takes up exactly three bytes.
///
/// # Examples
///
/// ```
/// use rgb24::U24;
/// assert_eq!(3, std::mem::size_of::<U24>());
/// let n = U24::new(0x123456).unwrap();
/// assert_eq!(0x123456, u32::from(n));
/// assert!(U24::new(0x1000000).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct U24([u8; 3]);

impl U24 {
    /// The smallest value, zero.
    pub const MIN: U24 = U24([0; 3]);

    /// The largest value, `0xFFFFFF`.
    pub const MAX: U24 = U24([0xFF; 3]);

    /// The number of bits in a `U24`.
    pub const BITS: u32 = 24;

    /// Creates a new `U24`, failing if the value does not fit in 24 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::U24;
    /// assert_eq!(U24::MAX, U24::new(0xFFFFFF).unwrap());
    /// assert!(U24::new(0xFFFFFF + 1).is_err());
    /// ```
    pub fn new(n: u32) -> Result<U24> {
        U24::checked(n).ok_or_else(|| {
            log::debug!("rejecting {n:#x}, which does not fit in 24 bits");
            Error::OutOfRange { value: n.into() }
        })
    }

    /// Creates a new `U24` from the low 24 bits of `n`, discarding the high byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::U24;
    /// assert_eq!(0x345678, U24::truncating(0x12345678).get());
    /// ```
    pub const fn truncating(n: u32) -> U24 {
        let [a, b, c, _] = n.to_le_bytes();
        U24([a, b, c])
    }

    /// Returns this value widened to a `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::U24;
    /// assert_eq!(42, U24::from(42u8).get());
    /// ```
    pub const fn get(self) -> u32 {
        let U24([a, b, c]) = self;
        u32::from_le_bytes([a, b, c, 0])
    }

    /// Creates a `U24` from its little-endian byte representation.
    pub const fn from_le_bytes(bytes: [u8; 3]) -> U24 {
        U24(bytes)
    }

    /// Returns the little-endian byte representation of this value.
    pub const fn to_le_bytes(self) -> [u8; 3] {
        self.0
    }

    /// Creates a `U24` from its big-endian byte representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::U24;
    /// assert_eq!(0x010203, U24::from_be_bytes([1, 2, 3]).get());
    /// ```
    pub fn from_be_bytes(bytes: [u8; 3]) -> U24 {
        U24::truncating(BigEndian::read_u24(&bytes))
    }

    /// Returns the big-endian byte representation of this value.
    pub fn to_be_bytes(self) -> [u8; 3] {
        let mut bytes = [0; 3];
        BigEndian::write_u24(&mut bytes, self.get());
        bytes
    }

    /// Reads a `U24` from three bytes in the given byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteorder::BigEndian;
    /// use rgb24::U24;
    /// let n = U24::read_from::<BigEndian, _>(&[0xab, 0xcd, 0xef][..]).unwrap();
    /// assert_eq!(0xabcdef, n.get());
    /// ```
    pub fn read_from<B: ByteOrder, R: Read>(mut read: R) -> io::Result<U24> {
        read.read_u24::<B>().map(U24::truncating)
    }

    /// Writes this value as three bytes in the given byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteorder::LittleEndian;
    /// use rgb24::U24;
    /// let mut buf = Vec::new();
    /// U24::new(0xabcdef).unwrap().write_to::<LittleEndian, _>(&mut buf).unwrap();
    /// assert_eq!(vec![0xef, 0xcd, 0xab], buf);
    /// ```
    pub fn write_to<B: ByteOrder, W: Write>(self, mut write: W) -> io::Result<()> {
        write.write_u24::<B>(self.get())
    }

    /// Checked addition, `None` on overflow past `U24::MAX`.
    pub fn checked_add(self, rhs: U24) -> Option<U24> {
        self.get()
            .checked_add(rhs.get())
            .and_then(U24::checked)
    }

    /// Checked subtraction, `None` on underflow.
    pub fn checked_sub(self, rhs: U24) -> Option<U24> {
        self.get().checked_sub(rhs.get()).map(U24::truncating)
    }

    /// Checked multiplication, `None` on overflow past `U24::MAX`.
    pub fn checked_mul(self, rhs: U24) -> Option<U24> {
        self.get()
            .checked_mul(rhs.get())
            .and_then(U24::checked)
    }

    /// Checked division, `None` if `rhs` is zero.
    pub fn checked_div(self, rhs: U24) -> Option<U24> {
        self.get().checked_div(rhs.get()).map(U24::truncating)
    }

    /// Checked remainder, `None` if `rhs` is zero.
    pub fn checked_rem(self, rhs: U24) -> Option<U24> {
        self.get().checked_rem(rhs.get()).map(U24::truncating)
    }

    /// Addition modulo 2^24.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb24::U24;
    /// assert_eq!(U24::MIN, U24::MAX.wrapping_add(U24::from(1u8)));
    /// ```
    pub fn wrapping_add(self, rhs: U24) -> U24 {
        U24::truncating(self.get().wrapping_add(rhs.get()))
    }

    /// Subtraction modulo 2^24.
    pub fn wrapping_sub(self, rhs: U24) -> U24 {
        U24::truncating(self.get().wrapping_sub(rhs.get()))
    }

    /// Multiplication modulo 2^24.
    pub fn wrapping_mul(self, rhs: U24) -> U24 {
        U24::truncating(self.get().wrapping_mul(rhs.get()))
    }

    fn checked(n: u32) -> Option<U24> {
        if n > MASK {
            None
        } else {
            Some(U24::truncating(n))
        }
    }
}

impl BitOr for U24 {
    type Output = U24;
    fn bitor(self, rhs: U24) -> U24 {
        let (U24([a0, a1, a2]), U24([b0, b1, b2])) = (self, rhs);
        U24([a0 | b0, a1 | b1, a2 | b2])
    }
}

impl BitAnd for U24 {
    type Output = U24;
    fn bitand(self, rhs: U24) -> U24 {
        let (U24([a0, a1, a2]), U24([b0, b1, b2])) = (self, rhs);
        U24([a0 & b0, a1 & b1, a2 & b2])
    }
}

impl BitXor for U24 {
    type Output = U24;
    fn bitxor(self, rhs: U24) -> U24 {
        let (U24([a0, a1, a2]), U24([b0, b1, b2])) = (self, rhs);
        U24([a0 ^ b0, a1 ^ b1, a2 ^ b2])
    }
}

impl Not for U24 {
    type Output = U24;
    fn not(self) -> U24 {
        // Complement within 24 bits; the high byte of the widened value must stay zero.
        U24::truncating(!self.get() & MASK)
    }
}

/// Shifting by 24 or more bits yields zero.
impl Shl<u32> for U24 {
    type Output = U24;
    fn shl(self, rhs: u32) -> U24 {
        U24::truncating(self.get().checked_shl(rhs).unwrap_or(0))
    }
}

/// Shifting by 24 or more bits yields zero.
impl Shr<u32> for U24 {
    type Output = U24;
    fn shr(self, rhs: u32) -> U24 {
        U24::truncating(self.get().checked_shr(rhs).unwrap_or(0))
    }
}

impl PartialOrd for U24 {
    fn partial_cmp(&self, other: &U24) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U24 {
    fn cmp(&self, other: &U24) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl Hash for U24 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.get());
    }
}

impl Bounded for U24 {
    fn min_value() -> U24 {
        U24::MIN
    }

    fn max_value() -> U24 {
        U24::MAX
    }
}

impl ToPrimitive for U24 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.get().into())
    }

    fn to_u64(&self) -> Option<u64> {
        Some(self.get().into())
    }

    fn to_u32(&self) -> Option<u32> {
        Some(self.get())
    }
}

impl FromPrimitive for U24 {
    fn from_i64(n: i64) -> Option<U24> {
        u32::try_from(n).ok().and_then(U24::checked)
    }

    fn from_u64(n: u64) -> Option<U24> {
        u32::try_from(n).ok().and_then(U24::checked)
    }
}

impl From<u8> for U24 {
    fn from(n: u8) -> U24 {
        U24([n, 0, 0])
    }
}

impl From<u16> for U24 {
    fn from(n: u16) -> U24 {
        U24::truncating(n.into())
    }
}

impl TryFrom<u32> for U24 {
    type Error = Error;
    fn try_from(n: u32) -> Result<U24> {
        U24::new(n)
    }
}

impl TryFrom<i32> for U24 {
    type Error = Error;
    fn try_from(n: i32) -> Result<U24> {
        match u32::try_from(n) {
            Ok(n) => U24::new(n),
            Err(_) => {
                log::debug!("rejecting negative value {n}");
                Err(Error::OutOfRange { value: n.into() })
            }
        }
    }
}

impl From<U24> for u32 {
    fn from(n: U24) -> u32 {
        n.get()
    }
}

impl From<U24> for u64 {
    fn from(n: U24) -> u64 {
        n.get().into()
    }
}

impl From<U24> for i32 {
    fn from(n: U24) -> i32 {
        // 24 bits always fit in the positive half of an i32.
        n.get() as i32
    }
}

impl From<U24> for i64 {
    fn from(n: U24) -> i64 {
        n.get().into()
    }
}

impl fmt::Debug for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl fmt::Display for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl fmt::LowerHex for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.get(), f)
    }
}

impl fmt::UpperHex for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.get(), f)
    }
}

impl fmt::Octal for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.get(), f)
    }
}

impl fmt::Binary for U24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::LittleEndian;
    use std::collections::hash_map::DefaultHasher;
    use std::io::Cursor;

    fn u24(n: u32) -> U24 {
        U24::new(n).unwrap()
    }

    fn hash(n: U24) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn three_bytes() {
        assert_eq!(3, size_of::<U24>());
        assert_eq!(6, size_of::<[U24; 2]>());
    }

    #[test]
    fn new_checks_range() {
        assert_eq!(0, u24(0).get());
        assert_eq!(0xFFFFFF, u24(0xFFFFFF).get());
        assert_eq!(
            Error::OutOfRange { value: 0x1000000 },
            U24::new(0x1000000).unwrap_err()
        );
        assert!(U24::new(u32::MAX).is_err());
    }

    #[test]
    fn truncating_drops_high_byte() {
        assert_eq!(0, U24::truncating(0x1000000).get());
        assert_eq!(0xFFFFFF, U24::truncating(u32::MAX).get());
    }

    #[test]
    fn little_endian_storage() {
        assert_eq!([0x56, 0x34, 0x12], u24(0x123456).to_le_bytes());
        assert_eq!([0x12, 0x34, 0x56], u24(0x123456).to_be_bytes());
        assert_eq!(u24(0x123456), U24::from_le_bytes([0x56, 0x34, 0x12]));
        assert_eq!(u24(0x123456), U24::from_be_bytes([0x12, 0x34, 0x56]));
    }

    #[test]
    fn read_and_write() {
        let mut cursor = Cursor::new(Vec::new());
        u24(0x010203).write_to::<LittleEndian, _>(&mut cursor).unwrap();
        u24(0x040506).write_to::<BigEndian, _>(&mut cursor).unwrap();
        assert_eq!(vec![3, 2, 1, 4, 5, 6], *cursor.get_ref());
        cursor.set_position(0);
        assert_eq!(u24(0x010203), U24::read_from::<LittleEndian, _>(&mut cursor).unwrap());
        assert_eq!(u24(0x040506), U24::read_from::<BigEndian, _>(&mut cursor).unwrap());
        assert!(U24::read_from::<BigEndian, _>(&mut cursor).is_err());
    }

    #[test]
    fn not_stays_in_range() {
        assert_eq!(U24::MAX, !U24::MIN);
        assert_eq!(U24::MIN, !U24::MAX);
        assert_eq!(0xEDCBA9, (!u24(0x123456)).get());
        for n in [0, 1, 0x7F, 0x8000, 0xABCDEF, 0xFFFFFF] {
            assert!((!u24(n)).get() <= 0xFFFFFF);
            assert_eq!(u24(n), !!u24(n));
        }
    }

    #[test]
    fn bitwise() {
        assert_eq!(0xFFFF00, (u24(0xFF0000) | u24(0x00FF00)).get());
        assert_eq!(0x00FF00, (u24(0xFFFF00) & u24(0x00FFFF)).get());
        assert_eq!(0xFF00FF, (u24(0xFFFF00) ^ u24(0x00FFFF)).get());
    }

    #[test]
    fn shifts() {
        assert_eq!(0x345600, (u24(0x123456) << 8).get());
        assert_eq!(0x001234, (u24(0x123456) >> 8).get());
        assert_eq!(0, (u24(0x123456) << 24).get());
        assert_eq!(0, (u24(0x123456) >> 24).get());
        assert_eq!(0, (u24(0x123456) << 40).get());
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(Some(u24(3)), u24(1).checked_add(u24(2)));
        assert_eq!(None, U24::MAX.checked_add(u24(1)));
        assert_eq!(Some(u24(1)), u24(3).checked_sub(u24(2)));
        assert_eq!(None, u24(2).checked_sub(u24(3)));
        assert_eq!(Some(u24(0xFFFF00)), u24(0xFFFF).checked_mul(u24(0x100)));
        assert_eq!(None, u24(0x1000).checked_mul(u24(0x1000)));
        assert_eq!(None, U24::MAX.checked_mul(U24::MAX));
        assert_eq!(Some(u24(3)), u24(7).checked_div(u24(2)));
        assert_eq!(None, u24(7).checked_div(U24::MIN));
        assert_eq!(Some(u24(1)), u24(7).checked_rem(u24(2)));
        assert_eq!(None, u24(7).checked_rem(U24::MIN));
    }

    #[test]
    fn wrapping_arithmetic() {
        assert_eq!(u24(1), U24::MAX.wrapping_add(u24(2)));
        assert_eq!(U24::MAX, U24::MIN.wrapping_sub(u24(1)));
        assert_eq!(u24(1), U24::MAX.wrapping_mul(U24::MAX));
    }

    #[test]
    fn ordering() {
        // Little-endian storage must not leak into the ordering.
        assert!(u24(0x000100) > u24(0x0000FF));
        assert!(u24(0x010000) > u24(0x00FFFF));
        let mut values = vec![u24(0x010000), u24(0xFF), u24(0x100), U24::MIN];
        values.sort();
        assert_eq!(vec![U24::MIN, u24(0xFF), u24(0x100), u24(0x010000)], values);
    }

    #[test]
    fn equal_values_hash_equally() {
        assert_eq!(hash(u24(0xABCDEF)), hash(U24::from_be_bytes([0xAB, 0xCD, 0xEF])));
    }

    #[test]
    fn primitive_conversions() {
        assert_eq!(Some(u24(5)), U24::from_i64(5));
        assert_eq!(None, U24::from_i64(-1));
        assert_eq!(None, U24::from_u64(0x1000000));
        assert_eq!(Some(0xFFFFFF), U24::MAX.to_u32());
        assert_eq!(Some(0xFFFF), U24::from(0xFFFFu16).to_u16());
        assert_eq!(None, U24::MAX.to_u16());
        assert_eq!(U24::MAX, U24::max_value());
        assert_eq!(0xFFFFFF, i32::from(U24::MAX));
        assert_eq!(
            Error::OutOfRange { value: -1 },
            U24::try_from(-1i32).unwrap_err()
        );
        assert_eq!(u24(7), U24::try_from(7u32).unwrap());
    }

    #[test]
    fn formatting() {
        assert_eq!("16777215", U24::MAX.to_string());
        assert_eq!("0000ff", format!("{:06x}", u24(0xFF)));
        assert_eq!("FF", format!("{:X}", u24(0xFF)));
        assert_eq!("255", format!("{:?}", u24(0xFF)));
    }
}

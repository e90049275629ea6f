//! Byte-order aware primitive writing
//!
//! The session byte order is only known at runtime, while `byteorder` picks
//! it at compile time. Every helper here matches on [`Endian`] once and
//! hands off to the monomorphic `byteorder` call.

use asewire_core::{Endian, Scalar, WriteError};
use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Write `n` into the first two bytes of `buf`
pub(crate) fn put_u16(buf: &mut [u8], endian: Endian, n: u16) {
    match endian {
        Endian::Little => LittleEndian::write_u16(buf, n),
        Endian::Big => BigEndian::write_u16(buf, n),
    }
}

/// Write `n` into the first four bytes of `buf`
pub(crate) fn put_u32(buf: &mut [u8], endian: Endian, n: u32) {
    match endian {
        Endian::Little => LittleEndian::write_u32(buf, n),
        Endian::Big => BigEndian::write_u32(buf, n),
    }
}

/// Write `n` into the first eight bytes of `buf`
pub(crate) fn put_u64(buf: &mut [u8], endian: Endian, n: u64) {
    match endian {
        Endian::Little => LittleEndian::write_u64(buf, n),
        Endian::Big => BigEndian::write_u64(buf, n),
    }
}

/// Serialize a scalar's in-memory representation into `w`
///
/// Booleans are one byte (0 or 1), numbers their fixed width in `endian`
/// order, and byte strings are copied as-is.
pub fn write_scalar<W: Write>(w: &mut W, endian: Endian, scalar: &Scalar) -> Result<(), WriteError> {
    match endian {
        Endian::Little => write_scalar_as::<LittleEndian, W>(w, scalar)?,
        Endian::Big => write_scalar_as::<BigEndian, W>(w, scalar)?,
    }
    Ok(())
}

fn write_scalar_as<B: ByteOrder, W: Write>(w: &mut W, scalar: &Scalar) -> std::io::Result<()> {
    match scalar {
        Scalar::Bool(v) => w.write_u8(u8::from(*v)),
        Scalar::Int8(v) => w.write_i8(*v),
        Scalar::Int16(v) => w.write_i16::<B>(*v),
        Scalar::Int32(v) => w.write_i32::<B>(*v),
        Scalar::Int64(v) => w.write_i64::<B>(*v),
        Scalar::UInt8(v) => w.write_u8(*v),
        Scalar::UInt16(v) => w.write_u16::<B>(*v),
        Scalar::UInt32(v) => w.write_u32::<B>(*v),
        Scalar::UInt64(v) => w.write_u64::<B>(*v),
        Scalar::Float32(v) => w.write_f32::<B>(*v),
        Scalar::Float64(v) => w.write_f64::<B>(*v),
        Scalar::Bytes(b) => w.write_all(b),
    }
}

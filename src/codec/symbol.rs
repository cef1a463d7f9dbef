//! The atomic unit the codec counts and encodes.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::fmt::Debug;
use std::hash::Hash;
use std::io::{self, Read, Write};

/// An atomic input unit, compared by equality only.
///
/// `Ord` is used purely to make table iteration and tree tie-breaking
/// deterministic. `KIND` and the read/write pair give each symbol type a fixed
/// binary representation for persisted frequency tables.
pub trait Symbol: Ord + Clone + Hash + Debug {
    /// Tag stored in containers so a byte stream is never decoded as text.
    const KIND: u8;

    fn write_symbol<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    fn read_symbol<R: Read>(reader: &mut R) -> io::Result<Self>;
}

impl Symbol for u8 {
    const KIND: u8 = 1;

    fn write_symbol<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(*self)
    }

    fn read_symbol<R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_u8()
    }
}

impl Symbol for char {
    const KIND: u8 = 2;

    fn write_symbol<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<BigEndian>(*self as u32)
    }

    fn read_symbol<R: Read>(reader: &mut R) -> io::Result<Self> {
        let scalar = reader.read_u32::<BigEndian>()?;
        char::from_u32(scalar).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("0x{:X} is not a Unicode scalar value", scalar),
            )
        })
    }
}

//! # wirebuf
//!
//! Little-endian binary encoding of typed values into growable byte buffers.
//!
//! This crate is the wire-format layer under a message protocol: it turns
//! integers, floats, vectors, quaternions, strings, timestamps and raw byte
//! runs into bytes at caller-chosen offsets, and reads them back. Framing,
//! message dispatch and transport live above it.
//!
//! ## Architecture
//!
//! - **Layout**: byte widths per type, exact-size buffer growth
//! - **Codec**: typed writes (growing on demand) and unchecked typed reads
//! - **Cursors**: [`PacketWriter`] / [`PacketReader`] for field-by-field
//!   layouts, with bounds-checked reads
//!
//! Offsets and buffer lengths are bounded by 65535; writes past that fail
//! with [`BufferError::LengthOverflow`].
//!
//! ## Example
//!
//! ```
//! use bytes::BytesMut;
//! use wirebuf::codec::{read, write};
//! use wirebuf::diagnostics::describe;
//!
//! let buf = write(BytesMut::new(), 0, 1u16).unwrap();
//! let buf = write(buf, 2, "hi").unwrap();
//!
//! assert_eq!(read::<u16>(&buf, 0), 1);
//! assert_eq!(read::<String>(&buf, 2), "hi");
//! assert_eq!(describe(&buf), "Buffer[(6) 01 00 02 00 68 69]");
//! ```

pub mod codec;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod reader;
pub mod value;
pub mod writer;

pub use codec::{read, write, WireDecode, WireEncode};
pub use error::{BufferError, Result};
pub use reader::{PacketReader, ReaderConfig};
pub use value::{Quaternion, Timestamp, Value, ValueKind, Vector3};
pub use writer::{PacketWriter, WriterConfig};

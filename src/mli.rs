//! # ProDOS 8 MLI Boundary
//!
//! Application code calls ProDOS through the Machine Language Interface:
//!
//! ```text
//! JSR $BF00
//! .byte call_number
//! .word param_block
//! ```
//!
//! The CPU recognizes the JSR, reads the inline descriptor and hands it to an
//! [`MliContext`]. The context services the call against emulated memory and
//! returns a status byte; zero is success, anything else is a ProDOS error
//! code. The CPU does not interpret status values beyond zero/non-zero.
//!
//! This module also carries the ProDOS call and error names used for
//! diagnostics.

use crate::apple2mem::Apple2Memory;

/// Host-side handler for trapped MLI calls.
///
/// `dispatch` runs against the memory the CPU is bound to, in its current
/// Language Card configuration.
///
/// # Examples
///
/// ```
/// use prodos8emu::{Apple2Memory, MliContext};
/// use prodos8emu::mli::ERR_BAD_CALL_NUMBER;
///
/// struct Unsupported;
///
/// impl MliContext for Unsupported {
///     fn dispatch(&mut self, _memory: &mut Apple2Memory, _call: u8, _param: u16) -> u8 {
///         ERR_BAD_CALL_NUMBER
///     }
/// }
/// ```
pub trait MliContext {
    /// Services one MLI call and returns its status byte.
    fn dispatch(&mut self, memory: &mut Apple2Memory, call_number: u8, param_block: u16) -> u8;
}

impl<T: MliContext + ?Sized> MliContext for Box<T> {
    fn dispatch(&mut self, memory: &mut Apple2Memory, call_number: u8, param_block: u16) -> u8 {
        (**self).dispatch(memory, call_number, param_block)
    }
}

impl<T: MliContext + ?Sized> MliContext for &mut T {
    fn dispatch(&mut self, memory: &mut Apple2Memory, call_number: u8, param_block: u16) -> u8 {
        (**self).dispatch(memory, call_number, param_block)
    }
}

/// Placeholder context type for a CPU that never has one attached.
///
/// It has no values, so a `CPU<NoMli>` always reports
/// [`NoMliContext`](crate::EmulatorError::NoMliContext) when the trap fires.
#[derive(Debug)]
pub enum NoMli {}

impl MliContext for NoMli {
    fn dispatch(&mut self, _memory: &mut Apple2Memory, _call_number: u8, _param_block: u16) -> u8 {
        match *self {}
    }
}

// ========== Call Numbers ==========

pub const MLI_QUIT: u8 = 0x65;
pub const MLI_ALLOC_INTERRUPT: u8 = 0x40;
pub const MLI_DEALLOC_INTERRUPT: u8 = 0x41;
pub const MLI_READ_BLOCK: u8 = 0x80;
pub const MLI_WRITE_BLOCK: u8 = 0x81;
pub const MLI_GET_TIME: u8 = 0x82;
pub const MLI_CREATE: u8 = 0xC0;
pub const MLI_DESTROY: u8 = 0xC1;
pub const MLI_RENAME: u8 = 0xC2;
pub const MLI_SET_FILE_INFO: u8 = 0xC3;
pub const MLI_GET_FILE_INFO: u8 = 0xC4;
pub const MLI_ON_LINE: u8 = 0xC5;
pub const MLI_SET_PREFIX: u8 = 0xC6;
pub const MLI_GET_PREFIX: u8 = 0xC7;
pub const MLI_OPEN: u8 = 0xC8;
pub const MLI_NEWLINE: u8 = 0xC9;
pub const MLI_READ: u8 = 0xCA;
pub const MLI_WRITE: u8 = 0xCB;
pub const MLI_CLOSE: u8 = 0xCC;
pub const MLI_FLUSH: u8 = 0xCD;
pub const MLI_SET_MARK: u8 = 0xCE;
pub const MLI_GET_MARK: u8 = 0xCF;
pub const MLI_SET_EOF: u8 = 0xD0;
pub const MLI_GET_EOF: u8 = 0xD1;
pub const MLI_SET_BUF: u8 = 0xD2;
pub const MLI_GET_BUF: u8 = 0xD3;

// ========== Error Codes ==========

pub const ERR_NO_ERROR: u8 = 0x00;
pub const ERR_BAD_CALL_NUMBER: u8 = 0x01;
pub const ERR_BAD_CALL_PARAM_COUNT: u8 = 0x04;
pub const ERR_INTERRUPT_TABLE_FULL: u8 = 0x25;
pub const ERR_IO_ERROR: u8 = 0x27;
pub const ERR_NO_DEVICE: u8 = 0x28;
pub const ERR_WRITE_PROTECTED: u8 = 0x2B;
pub const ERR_DISK_SWITCHED: u8 = 0x2E;
pub const ERR_INVALID_PATH_SYNTAX: u8 = 0x40;
pub const ERR_TOO_MANY_FILES_OPEN: u8 = 0x42;
/// Alias of [`ERR_TOO_MANY_FILES_OPEN`].
pub const ERR_FCB_ERROR: u8 = 0x42;
pub const ERR_BAD_REF_NUM: u8 = 0x43;
pub const ERR_PATH_NOT_FOUND: u8 = 0x44;
/// Alias of [`ERR_PATH_NOT_FOUND`].
pub const ERR_DIR_NOT_FOUND: u8 = 0x44;
pub const ERR_VOL_NOT_FOUND: u8 = 0x45;
pub const ERR_FILE_NOT_FOUND: u8 = 0x46;
pub const ERR_DUPLICATE_FILENAME: u8 = 0x47;
pub const ERR_VOLUME_FULL: u8 = 0x48;
/// Alias of [`ERR_VOLUME_FULL`].
pub const ERR_OVERRUN_ERROR: u8 = 0x48;
pub const ERR_VOL_DIR_FULL: u8 = 0x49;
pub const ERR_INCOMPATIBLE_VERSION: u8 = 0x4A;
pub const ERR_UNSUPPORTED_STOR_TYPE: u8 = 0x4B;
pub const ERR_EOF_ENCOUNTERED: u8 = 0x4C;
pub const ERR_POSITION_OUT_OF_RANGE: u8 = 0x4D;
pub const ERR_ACCESS_ERROR: u8 = 0x4E;
pub const ERR_FILE_OPEN: u8 = 0x50;
pub const ERR_DIR_COUNT_ERROR: u8 = 0x51;
pub const ERR_NOT_PRODOS_VOL: u8 = 0x52;
pub const ERR_INVALID_PARAMETER: u8 = 0x53;
pub const ERR_VCB_TABLE_FULL: u8 = 0x55;
pub const ERR_BAD_BUFFER_ADDR: u8 = 0x56;
pub const ERR_DUPLICATE_VOLUME: u8 = 0x57;
pub const ERR_FILE_STRUCTURE_DAMAGED: u8 = 0x5A;
/// Alias of [`ERR_FILE_STRUCTURE_DAMAGED`].
pub const ERR_BAD_FILE_FORMAT: u8 = 0x5A;

/// ProDOS name of an MLI call number, or `"UNKNOWN"`.
///
/// # Examples
///
/// ```
/// use prodos8emu::mli::call_name;
///
/// assert_eq!(call_name(0xC8), "OPEN");
/// assert_eq!(call_name(0x12), "UNKNOWN");
/// ```
pub fn call_name(call_number: u8) -> &'static str {
    match call_number {
        MLI_CREATE => "CREATE",
        MLI_DESTROY => "DESTROY",
        MLI_RENAME => "RENAME",
        MLI_SET_FILE_INFO => "SET_FILE_INFO",
        MLI_GET_FILE_INFO => "GET_FILE_INFO",
        MLI_ON_LINE => "ON_LINE",
        MLI_SET_PREFIX => "SET_PREFIX",
        MLI_GET_PREFIX => "GET_PREFIX",
        MLI_OPEN => "OPEN",
        MLI_NEWLINE => "NEWLINE",
        MLI_READ => "READ",
        MLI_WRITE => "WRITE",
        MLI_CLOSE => "CLOSE",
        MLI_FLUSH => "FLUSH",
        MLI_SET_MARK => "SET_MARK",
        MLI_GET_MARK => "GET_MARK",
        MLI_SET_EOF => "SET_EOF",
        MLI_GET_EOF => "GET_EOF",
        MLI_SET_BUF => "SET_BUF",
        MLI_GET_BUF => "GET_BUF",
        MLI_ALLOC_INTERRUPT => "ALLOC_INTERRUPT",
        MLI_DEALLOC_INTERRUPT => "DEALLOC_INTERRUPT",
        MLI_READ_BLOCK => "READ_BLOCK",
        MLI_WRITE_BLOCK => "WRITE_BLOCK",
        MLI_GET_TIME => "GET_TIME",
        MLI_QUIT => "QUIT",
        _ => "UNKNOWN",
    }
}

/// ProDOS name of an error code.
///
/// Success and unrecognized codes return `""`. Codes shared by two names
/// return the first one listed in the ProDOS technical reference.
pub fn error_name(code: u8) -> &'static str {
    match code {
        ERR_BAD_CALL_NUMBER => "BAD_CALL_NUMBER",
        ERR_BAD_CALL_PARAM_COUNT => "BAD_CALL_PARAM_COUNT",
        ERR_INTERRUPT_TABLE_FULL => "INTERRUPT_TABLE_FULL",
        ERR_IO_ERROR => "IO_ERROR",
        ERR_NO_DEVICE => "NO_DEVICE",
        ERR_WRITE_PROTECTED => "WRITE_PROTECTED",
        ERR_DISK_SWITCHED => "DISK_SWITCHED",
        ERR_INVALID_PATH_SYNTAX => "INVALID_PATH_SYNTAX",
        ERR_TOO_MANY_FILES_OPEN => "TOO_MANY_FILES_OPEN",
        ERR_BAD_REF_NUM => "BAD_REF_NUM",
        ERR_PATH_NOT_FOUND => "PATH_NOT_FOUND",
        ERR_VOL_NOT_FOUND => "VOL_NOT_FOUND",
        ERR_FILE_NOT_FOUND => "FILE_NOT_FOUND",
        ERR_DUPLICATE_FILENAME => "DUPLICATE_FILENAME",
        ERR_VOLUME_FULL => "VOLUME_FULL",
        ERR_VOL_DIR_FULL => "VOL_DIR_FULL",
        ERR_INCOMPATIBLE_VERSION => "INCOMPATIBLE_VERSION",
        ERR_UNSUPPORTED_STOR_TYPE => "UNSUPPORTED_STOR_TYPE",
        ERR_EOF_ENCOUNTERED => "EOF_ENCOUNTERED",
        ERR_POSITION_OUT_OF_RANGE => "POSITION_OUT_OF_RANGE",
        ERR_ACCESS_ERROR => "ACCESS_ERROR",
        ERR_FILE_OPEN => "FILE_OPEN",
        ERR_DIR_COUNT_ERROR => "DIR_COUNT_ERROR",
        ERR_NOT_PRODOS_VOL => "NOT_PRODOS_VOL",
        ERR_INVALID_PARAMETER => "INVALID_PARAMETER",
        ERR_VCB_TABLE_FULL => "VCB_TABLE_FULL",
        ERR_BAD_BUFFER_ADDR => "BAD_BUFFER_ADDR",
        ERR_DUPLICATE_VOLUME => "DUPLICATE_VOLUME",
        ERR_FILE_STRUCTURE_DAMAGED => "FILE_STRUCTURE_DAMAGED",
        _ => "",
    }
}

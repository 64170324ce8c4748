//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for emitting PDFs from host
//! applications in other languages (web backends, C#, Python, Node.js).

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::{emit_text, emit_to_file};

/// Byte-buffer result returned by FFI emit functions.
#[repr(C)]
pub struct TopdfBuffer {
    /// Whether the operation succeeded.
    pub success: bool,
    /// PDF bytes (null if failed). Must be freed with `topdf_free_buffer`.
    pub data: *mut u8,
    /// Length of `data` in bytes.
    pub len: usize,
    /// Error message (null if succeeded). Must be freed with `topdf_free_string`.
    pub error: *mut c_char,
}

impl TopdfBuffer {
    fn success(bytes: Vec<u8>) -> Self {
        let mut bytes = bytes.into_boxed_slice();
        let data = bytes.as_mut_ptr();
        let len = bytes.len();
        std::mem::forget(bytes);
        Self {
            success: true,
            data,
            len,
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            len: 0,
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// Emit a PDF from a text string.
///
/// # Safety
///
/// `text` must be a valid null-terminated UTF-8 string.
/// The returned buffer must be freed with `topdf_free_buffer`.
#[no_mangle]
pub unsafe extern "C" fn topdf_emit(text: *const c_char) -> TopdfBuffer {
    if text.is_null() {
        return TopdfBuffer::error("Text cannot be null".to_string());
    }

    let text_str = match CStr::from_ptr(text).to_str() {
        Ok(s) => s,
        Err(_) => return TopdfBuffer::error("Invalid input: not valid UTF-8 text".to_string()),
    };

    match emit_text(text_str) {
        Ok(bytes) => TopdfBuffer::success(bytes),
        Err(e) => TopdfBuffer::error(e.to_string()),
    }
}

/// Emit a PDF from a text string straight to a file.
///
/// Returns null on success, or an error message that must be freed with
/// `topdf_free_string`.
///
/// # Safety
///
/// `text` and `path` must be valid null-terminated UTF-8 strings.
#[no_mangle]
pub unsafe extern "C" fn topdf_emit_to_file(
    text: *const c_char,
    path: *const c_char,
) -> *mut c_char {
    if text.is_null() || path.is_null() {
        return CString::new("Text and path cannot be null")
            .unwrap_or_default()
            .into_raw();
    }

    let text_str = match CStr::from_ptr(text).to_str() {
        Ok(s) => s,
        Err(_) => {
            return CString::new("Invalid input: not valid UTF-8 text")
                .unwrap_or_default()
                .into_raw()
        }
    };
    let path_str = match CStr::from_ptr(path).to_str() {
        Ok(s) => s,
        Err(_) => {
            return CString::new("Invalid UTF-8 path")
                .unwrap_or_default()
                .into_raw()
        }
    };

    match emit_to_file(Path::new(path_str), text_str) {
        Ok(()) => ptr::null_mut(),
        Err(e) => CString::new(e.to_string()).unwrap_or_default().into_raw(),
    }
}

/// Free a buffer returned by `topdf_emit`.
///
/// # Safety
///
/// `buffer` must have been returned by a topdf FFI function and not freed
/// before.
#[no_mangle]
pub unsafe extern "C" fn topdf_free_buffer(buffer: TopdfBuffer) {
    if !buffer.data.is_null() {
        drop(Box::from_raw(std::slice::from_raw_parts_mut(
            buffer.data,
            buffer.len,
        )));
    }
    if !buffer.error.is_null() {
        drop(CString::from_raw(buffer.error));
    }
}

/// Free a string returned by a topdf FFI function.
///
/// # Safety
///
/// `s` must have been returned by a topdf FFI function and not freed before.
#[no_mangle]
pub unsafe extern "C" fn topdf_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_emit_round_trip() {
        let text = CString::new("hello ffi").unwrap();
        let buffer = unsafe { topdf_emit(text.as_ptr()) };
        assert!(buffer.success);
        assert!(buffer.error.is_null());

        let bytes = unsafe { std::slice::from_raw_parts(buffer.data, buffer.len) };
        assert!(bytes.starts_with(b"%PDF-1.4"));
        unsafe { topdf_free_buffer(buffer) };
    }

    #[test]
    fn test_null_text_is_error() {
        let buffer = unsafe { topdf_emit(ptr::null()) };
        assert!(!buffer.success);
        assert!(!buffer.error.is_null());
        unsafe { topdf_free_buffer(buffer) };
    }
}

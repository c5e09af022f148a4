// Callers must ensure pointer validity; each function documents what it
// expects.
#![allow(clippy::missing_safety_doc)]

// spell-ffi: C-compatible FFI layer for SpellHandle.
//
// Memory management rules:
// - Opaque `SpellHandle` pointer: created by `spell_new`, freed by `spell_free`.
// - Returned strings: caller must free with `spell_free_str`.
// - Returned misspelling arrays: caller must free with `spell_free_misspellings`.
// - Words passed to `spell_check` are null-terminated C strings; text passed
//   to `spell_misspellings` is a byte buffer with explicit length and may
//   contain any bytes.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;
use std::sync::LazyLock;

use spell_core::token::Misspelling;
use spell_engine::handle::SpellHandle;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a handle from the raw contents of a word list.
///
/// `data` + `len`: the word list, one word per line. A zero length gives an
/// empty dictionary that rejects every word.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error
/// string that the caller must free with `spell_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spell_new(
    data: *const u8,
    len: usize,
    error_out: *mut *mut c_char,
) -> *mut SpellHandle {
    if len == 0 {
        return Box::into_raw(Box::new(SpellHandle::default()));
    }
    if data.is_null() {
        set_error(error_out, "dictionary data is null");
        return ptr::null_mut();
    }

    let data = unsafe { slice::from_raw_parts(data, len) };
    Box::into_raw(Box::new(SpellHandle::from_bytes(data)))
}

/// Free a handle created by `spell_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spell_free(handle: *mut SpellHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Spell checking ──────────────────────────────────────────────

/// Check whether a single word is correctly spelled. No punctuation is
/// trimmed.
///
/// Returns 1 for correct, 0 for misspelled, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spell_check(handle: *const SpellHandle, word: *const c_char) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(word) = cstr_to_bytes(word) else {
        return -1;
    };
    if handle.spell_result(word).is_ok() { 1 } else { 0 }
}

/// One misspelled word.
#[repr(C)]
pub struct SpellMisspelling {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column.
    pub col: usize,
    /// The word after trimming. Bytes are copied as found; a word holding a
    /// NUL byte is cut short at it.
    pub word: *mut c_char,
}

/// Misspelling array.
#[repr(C)]
pub struct SpellMisspellingArray {
    pub items: *mut SpellMisspelling,
    pub count: usize,
}

/// Find every misspelled word in a text buffer.
///
/// Returns a `SpellMisspellingArray` in text order. Caller must free with
/// `spell_free_misspellings`. Returns an empty array (NULL, 0) on error or
/// when nothing is misspelled.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spell_misspellings(
    handle: *const SpellHandle,
    text: *const u8,
    len: usize,
) -> SpellMisspellingArray {
    let empty = SpellMisspellingArray { items: ptr::null_mut(), count: 0 };

    let Some(handle) = (unsafe { handle.as_ref() }) else { return empty; };
    if text.is_null() || len == 0 {
        return empty;
    }
    let text = unsafe { slice::from_raw_parts(text, len) };

    let items: Box<[SpellMisspelling]> = handle
        .misspellings(text)
        .map(|m| to_c_misspelling(&m))
        .collect();
    if items.is_empty() {
        return empty;
    }

    let count = items.len();
    let items = Box::into_raw(items).cast::<SpellMisspelling>();
    SpellMisspellingArray { items, count }
}

/// Free a misspelling array returned by `spell_misspellings`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spell_free_misspellings(arr: SpellMisspellingArray) {
    if arr.items.is_null() || arr.count == 0 {
        return;
    }
    let items = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr.items, arr.count)) };
    for m in items.iter() {
        free_c_str(m.word);
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn spell_version() -> *const c_char {
    static VERSION: LazyLock<CString> =
        LazyLock::new(|| CString::new(SpellHandle::version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by spell functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn spell_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_bytes<'a>(s: *const c_char) -> Option<&'a [u8]> {
    if s.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(s) }.to_bytes())
}

fn bytes_to_c(bytes: &[u8]) -> *mut c_char {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default().into_raw()
}

fn to_c_misspelling(m: &Misspelling<'_>) -> SpellMisspelling {
    SpellMisspelling {
        line: m.line,
        col: m.col,
        word: bytes_to_c(m.word),
    }
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = bytes_to_c(msg.as_bytes()); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

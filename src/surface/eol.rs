//! Line-ending conversion for surfaces with `convertEol` enabled.

use std::borrow::Cow;

/// Turn every bare LF into CR LF. Existing CR LF pairs are left alone.
///
/// Borrows when there is nothing to convert.
pub fn convert_eol(input: &str) -> Cow<'_, str> {
    match convert_eol_bytes(input.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(input),
        // Only ASCII CR bytes were inserted, so the result is still UTF-8.
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

/// Byte-level [`convert_eol`], for raw output streams.
pub fn convert_eol_bytes(input: &[u8]) -> Cow<'_, [u8]> {
    let bare = count_bare_lf(input);
    if bare == 0 {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(input.len() + bare);
    let mut prev = None;
    for &byte in input {
        if byte == b'\n' && prev != Some(b'\r') {
            out.push(b'\r');
        }
        out.push(byte);
        prev = Some(byte);
    }
    Cow::Owned(out)
}

fn count_bare_lf(input: &[u8]) -> usize {
    input
        .iter()
        .enumerate()
        .filter(|(i, byte)| **byte == b'\n' && (*i == 0 || input[i - 1] != b'\r'))
        .count()
}

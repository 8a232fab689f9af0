//! Thin wrappers giving standard library methods their canonical free-function
//! spelling. Types are re-exported directly from `mod.rs`.

#[cfg(csv_alias_trim_ascii = "standard")]
#[inline]
pub fn trim_ascii(bytes: &[u8]) -> &[u8] {
    bytes.trim_ascii()
}

#[cfg(csv_alias_trim_ascii = "standard")]
#[inline]
pub fn trim_ascii_start(bytes: &[u8]) -> &[u8] {
    bytes.trim_ascii_start()
}

#[cfg(csv_alias_trim_ascii = "standard")]
#[inline]
pub fn trim_ascii_end(bytes: &[u8]) -> &[u8] {
    bytes.trim_ascii_end()
}

#[cfg(csv_alias_utf8_chunks = "standard")]
#[inline]
pub fn utf8_chunks(bytes: &[u8]) -> core::str::Utf8Chunks<'_> {
    bytes.utf8_chunks()
}

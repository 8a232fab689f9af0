use core::iter::FusedIterator;
use core::str;

/// A valid UTF-8 run followed by the invalid bytes that ended it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utf8Chunk<'a> {
    valid: &'a str,
    invalid: &'a [u8],
}

impl<'a> Utf8Chunk<'a> {
    pub fn valid(&self) -> &'a str {
        self.valid
    }

    /// Empty only for the last chunk of input that ends in valid UTF-8.
    pub fn invalid(&self) -> &'a [u8] {
        self.invalid
    }
}

/// Splits bytes into [`Utf8Chunk`]s, yielding nothing for empty input.
#[derive(Clone, Debug)]
pub struct Utf8Chunks<'a> {
    source: &'a [u8],
}

impl<'a> Iterator for Utf8Chunks<'a> {
    type Item = Utf8Chunk<'a>;

    fn next(&mut self) -> Option<Utf8Chunk<'a>> {
        if self.source.is_empty() {
            return None;
        }
        match str::from_utf8(self.source) {
            Ok(valid) => {
                self.source = &[];
                Some(Utf8Chunk { valid, invalid: &[] })
            }
            Err(err) => {
                let (valid, rest) = self.source.split_at(err.valid_up_to());
                // error_len is None when the input ends mid-sequence.
                let (invalid, rest) = rest.split_at(err.error_len().unwrap_or(rest.len()));
                self.source = rest;
                Some(Utf8Chunk {
                    valid: str::from_utf8(valid).unwrap_or_default(),
                    invalid,
                })
            }
        }
    }
}

impl FusedIterator for Utf8Chunks<'_> {}

pub fn utf8_chunks(bytes: &[u8]) -> Utf8Chunks<'_> {
    Utf8Chunks { source: bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(bytes: &[u8]) -> Vec<(&str, &[u8])> {
        utf8_chunks(bytes)
            .map(|chunk| (chunk.valid(), chunk.invalid()))
            .collect()
    }

    #[test]
    fn valid_input_is_one_chunk() {
        assert_eq!(parts("a,é".as_bytes()), vec![("a,é", &b""[..])]);
        assert!(parts(b"").is_empty());
    }

    #[test]
    fn invalid_bytes_split_chunks() {
        assert_eq!(
            parts(b"ab\xffcd\xfe"),
            vec![("ab", &b"\xff"[..]), ("cd", &b"\xfe"[..])]
        );
    }

    #[test]
    fn truncated_sequence_at_end_is_invalid() {
        assert_eq!(parts(b"x\xe2\x82"), vec![("x", &b"\xe2\x82"[..])]);
    }

    #[test]
    fn lossy_decode_matches_std() {
        let bytes = b"id\xc3\x28,name\xf0\x90\x80";
        let mut decoded = String::new();
        for chunk in utf8_chunks(bytes) {
            decoded.push_str(chunk.valid());
            if !chunk.invalid().is_empty() {
                decoded.push('\u{FFFD}');
            }
        }
        assert_eq!(decoded, String::from_utf8_lossy(bytes));
    }
}

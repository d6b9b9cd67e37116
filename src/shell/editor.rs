use std::io::{self, BufRead};

/// A line consisting of exactly this text ends an editing session.
pub const END_SENTINEL: &str = "END";

/// Reads lines until [`END_SENTINEL`] and returns them joined with `\n`.
///
/// Returns `Ok(None)` if input runs out before the sentinel, in which case the
/// caller must not commit anything.
pub fn capture<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut lines = Vec::new();
    let mut buffer = String::new();
    loop {
        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let line = buffer.trim_end_matches(['\n', '\r']);
        if line == END_SENTINEL {
            return Ok(Some(lines.join("\n")));
        }
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("END\n", "")]
    #[case("one\nEND\n", "one")]
    #[case("one\ntwo\n\nthree\nEND\n", "one\ntwo\n\nthree")]
    #[case("crlf\r\nEND\r\n", "crlf")]
    #[case("  END\nEND", "  END")]
    #[case("end\nEND\n", "end")]
    fn captures_until_sentinel(#[case] input: &str, #[case] expected: &str) {
        let mut cursor = Cursor::new(input);
        assert_eq!(capture(&mut cursor).unwrap(), Some(expected.to_string()));
    }

    #[test]
    fn leaves_input_after_sentinel_untouched() {
        let mut cursor = Cursor::new("body\nEND\ndir\n");
        capture(&mut cursor).unwrap();
        let mut rest = String::new();
        cursor.read_line(&mut rest).unwrap();
        assert_eq!(rest, "dir\n");
    }

    #[rstest]
    #[case("")]
    #[case("unterminated\nlines\n")]
    fn end_of_input_discards_capture(#[case] input: &str) {
        let mut cursor = Cursor::new(input);
        assert_eq!(capture(&mut cursor).unwrap(), None);
    }
}

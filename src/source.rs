//! Resolves the feed URL from the command line or an interactive prompt.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

pub const PROMPT: &str = "Enter URL of RSS Feed: ";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input error: {0}")]
    Read(#[from] io::Error),

    #[error("Input error: entered URL is not valid UTF-8")]
    NotUtf8,
}

/// Returns the URL to fetch.
///
/// An argument wins and is used verbatim; the prompt is only written (and
/// `input` only read) when no argument was given. The line read has one
/// trailing `\n` and then one trailing `\r` removed. Empty input is passed
/// through as an empty string.
pub fn resolve<R, W>(arg: Option<String>, input: &mut R, output: &mut W) -> Result<String, InputError>
where
    R: BufRead,
    W: Write,
{
    if let Some(url) = arg {
        debug!("Using URL from command line: {}", url);
        return Ok(url);
    }

    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => InputError::NotUtf8,
        _ => InputError::Read(e),
    })?;

    let url = strip_line_ending(&line).to_string();
    debug!("Using URL from prompt: {:?}", url);
    Ok(url)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that fails the test if anything tries to read from it
    struct NoRead;

    impl io::Read for NoRead {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            panic!("stdin must not be read when a URL argument is given");
        }
    }

    impl BufRead for NoRead {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            panic!("stdin must not be read when a URL argument is given");
        }

        fn consume(&mut self, _amt: usize) {}
    }

    fn resolve_from(input: &[u8]) -> (Result<String, InputError>, String) {
        let mut reader = Cursor::new(input.to_vec());
        let mut out = Vec::new();
        let result = resolve(None, &mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_argument_is_used_verbatim() {
        let mut out = Vec::new();
        let url = resolve(Some("  not even a url ".to_string()), &mut NoRead, &mut out).unwrap();

        assert_eq!(url, "  not even a url ");
        assert!(out.is_empty(), "no prompt expected");
    }

    #[test]
    fn test_prompt_written_and_newline_stripped() {
        let (result, prompt) = resolve_from(b"https://example.com/rss\n");

        assert_eq!(result.unwrap(), "https://example.com/rss");
        assert_eq!(prompt, "Enter URL of RSS Feed: ");
    }

    #[test]
    fn test_crlf_stripped() {
        let (result, _) = resolve_from(b"https://example.com/rss\r\n");
        assert_eq!(result.unwrap(), "https://example.com/rss");
    }

    #[test]
    fn test_only_first_line_read() {
        let (result, _) = resolve_from(b"https://a.example\nhttps://b.example\n");
        assert_eq!(result.unwrap(), "https://a.example");
    }

    #[test]
    fn test_missing_trailing_newline() {
        let (result, _) = resolve_from(b"https://example.com/rss");
        assert_eq!(result.unwrap(), "https://example.com/rss");
    }

    #[test]
    fn test_empty_line_passes_through() {
        let (result, _) = resolve_from(b"\n");
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_eof_gives_empty_url() {
        let (result, _) = resolve_from(b"");
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let (result, _) = resolve_from(b" https://example.com/rss \n");
        assert_eq!(result.unwrap(), " https://example.com/rss ");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let (result, _) = resolve_from(&[0xFF, 0xFE, b'\n']);
        assert!(matches!(result, Err(InputError::NotUtf8)));
    }

    #[test]
    fn test_strip_line_ending_only_one_of_each() {
        assert_eq!(strip_line_ending("a\r\r\n"), "a\r");
        assert_eq!(strip_line_ending("a\n\n"), "a\n");
        assert_eq!(strip_line_ending("a\r"), "a");
    }
}

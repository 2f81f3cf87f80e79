//! Strict quote validation.
//!
//! The tokenizer accepts malformed quoting silently (an unterminated quote
//! swallows the rest of the file). This pass rejects such input up front.

/// The quote character of the delimited-text format.
pub(crate) const QUOTE: u8 = b'"';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A quoting problem and the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuotingError {
    pub(crate) line: u64,
    pub(crate) message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// Checks that every quoted field is closed and that quotes appear only
/// where standard delimited-text quoting allows them.
///
/// Records end at `\n`, `\r` or `\r\n`, and a leading UTF-8 BOM is
/// skipped, matching the tokenizer.
pub(crate) fn check_quoting(content: &[u8], delimiter: u8) -> Result<(), QuotingError> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut state = State::FieldStart;
    let mut line: u64 = 1;
    let mut quote_line: u64 = 1;
    let mut after_cr = false;

    for &byte in content {
        let is_terminator = byte == b'\n' || byte == b'\r';
        // The `\n` of a `\r\n` pair ends the same line as its `\r`.
        if is_terminator && !(byte == b'\n' && after_cr) {
            line += 1;
        }
        after_cr = byte == b'\r';

        state = match state {
            State::FieldStart | State::Unquoted if byte == delimiter || is_terminator => {
                State::FieldStart
            }
            State::FieldStart if byte == QUOTE => {
                quote_line = line;
                State::Quoted
            }
            State::FieldStart | State::Unquoted if byte == QUOTE => {
                return Err(QuotingError {
                    line,
                    message: "bare quote in unquoted field",
                });
            }
            State::FieldStart | State::Unquoted => State::Unquoted,
            State::Quoted if byte == QUOTE => State::QuoteInQuoted,
            State::Quoted => State::Quoted,
            State::QuoteInQuoted if byte == QUOTE => State::Quoted,
            State::QuoteInQuoted if byte == delimiter || is_terminator => State::FieldStart,
            State::QuoteInQuoted => {
                return Err(QuotingError {
                    line,
                    message: "extraneous character after closing quote",
                });
            }
        };
    }

    if state == State::Quoted {
        return Err(QuotingError {
            line: quote_line,
            message: "unterminated quoted field",
        });
    }

    Ok(())
}

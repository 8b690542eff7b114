//! JSON lexer/tokenizer.
//!
//! Converts JSON input into a stream of tokens for the parser. The input is
//! validated as UTF-8 once up front; after that the lexer scans string
//! slices, so multi-byte characters never need manual decoding. String
//! content is copied out in bulk runs between escapes, and `\uXXXX` escapes
//! (including surrogate pairs) are decoded as UTF-16 code units. Number
//! tokens carry the raw text of the full RFC 8259 grammar so the parser can
//! decide between integer and double reads.
//!
//! The lexer is strict: no comments, no unquoted keys, no `NaN`/`Infinity`
//! literals, no leading zeros, and unpaired surrogates are rejected.

use super::limits::Limits;
use crate::error::{Error, ParseResult};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number value (raw text, full RFC 8259 grammar)
    Number(String),
    /// End of input
    Eof,
}

/// JSON lexer that tokenizes input on demand.
pub struct Lexer<'a> {
    src: &'a str,
    cursor: usize,
    limits: Limits,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    ///
    /// Validates the input size limit and that the input is well-formed
    /// UTF-8 before any token is produced.
    pub fn new(input: &'a [u8], limits: Limits) -> ParseResult<Self> {
        if input.len() as u64 > limits.max_input_size {
            return Err(Error::InputLimitExceeded(
                input.len() as u64,
                limits.max_input_size,
            ));
        }

        let src = std::str::from_utf8(input).map_err(|_| Error::InvalidUtf8)?;

        Ok(Self {
            src,
            cursor: 0,
            limits,
        })
    }

    /// Get the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The unconsumed tail of the input.
    fn rest(&self) -> &'a str {
        &self.src[self.cursor..]
    }

    /// The next unconsumed character, if any.
    fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `bytes` bytes.
    fn bump(&mut self, bytes: usize) {
        self.cursor += bytes;
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        let trimmed = self.rest().trim_start_matches([' ', '\t', '\n', '\r']);
        self.cursor = self.src.len() - trimmed.len();

        let Some(c) = self.first() else {
            return Ok(Token::Eof);
        };

        let structural = match c {
            '{' => Some(Token::LeftBrace),
            '}' => Some(Token::RightBrace),
            '[' => Some(Token::LeftBracket),
            ']' => Some(Token::RightBracket),
            ':' => Some(Token::Colon),
            ',' => Some(Token::Comma),
            _ => None,
        };
        if let Some(token) = structural {
            self.bump(1);
            return Ok(token);
        }

        match c {
            '"' => self.read_string(),
            '-' | '0'..='9' => self.read_number(),
            't' => self.read_keyword("true", Token::True),
            'f' => self.read_keyword("false", Token::False),
            'n' => self.read_keyword("null", Token::Null),
            _ => Err(Error::InvalidJson),
        }
    }

    /// Read a string token. Clean spans between escapes are appended in
    /// bulk; the scan stops at the closing quote, a backslash, or a raw
    /// control character.
    fn read_string(&mut self) -> ParseResult<Token> {
        // Opening quote
        self.bump(1);

        let mut out = String::new();
        loop {
            // No stop character before the end of input: unterminated string
            let run = self
                .rest()
                .find(|c: char| c == '"' || c == '\\' || c < '\x20')
                .ok_or(Error::InvalidJson)?;

            out.push_str(&self.rest()[..run]);
            self.bump(run);

            if out.len() as u64 > self.limits.max_string_length {
                return Err(Error::StringLimitExceeded(
                    out.len() as u64,
                    self.limits.max_string_length,
                ));
            }

            match self.first() {
                Some('"') => {
                    self.bump(1);
                    return Ok(Token::String(out));
                }
                Some('\\') => {
                    self.bump(1);
                    out.push(self.read_escape()?);
                }
                // Raw control characters are not allowed in strings
                _ => return Err(Error::InvalidJson),
            }
        }
    }

    /// Decode one escape sequence, with the cursor just past the backslash.
    fn read_escape(&mut self) -> ParseResult<char> {
        let c = self.first().ok_or(Error::InvalidJson)?;
        self.bump(c.len_utf8());

        match c {
            '"' | '\\' | '/' => Ok(c),
            'b' => Ok('\u{8}'),
            'f' => Ok('\u{c}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.read_unicode_escape(),
            _ => Err(Error::InvalidJson),
        }
    }

    /// Decode a `\uXXXX` escape as UTF-16: a high surrogate must be
    /// followed by an escaped low surrogate, and lone surrogates fail the
    /// UTF-16 decode.
    fn read_unicode_escape(&mut self) -> ParseResult<char> {
        let first = self.read_hex4()?;

        let decoded = if (0xD800..=0xDBFF).contains(&first) {
            if !self.rest().starts_with("\\u") {
                return Err(Error::InvalidJson);
            }
            self.bump(2);
            let second = self.read_hex4()?;
            std::char::decode_utf16([first, second]).next()
        } else {
            std::char::decode_utf16([first]).next()
        };

        match decoded {
            Some(Ok(c)) => Ok(c),
            _ => Err(Error::InvalidJson),
        }
    }

    /// Read 4 hex digits as a UTF-16 code unit.
    fn read_hex4(&mut self) -> ParseResult<u16> {
        let digits = self.rest().get(..4).ok_or(Error::InvalidJson)?;
        // from_str_radix would also take a sign, so check the digits first
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidJson);
        }
        let unit = u16::from_str_radix(digits, 16).map_err(|_| Error::InvalidJson)?;
        self.bump(4);
        Ok(unit)
    }

    /// Read a number token covering the full RFC 8259 grammar:
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    fn read_number(&mut self) -> ParseResult<Token> {
        let start = self.rest();
        let mut scan = start.strip_prefix('-').unwrap_or(start);

        // Integer part: a lone zero, or a run led by a nonzero digit
        scan = match scan.strip_prefix('0') {
            Some(after) => {
                if after.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(Error::InvalidJson);
                }
                after
            }
            None => {
                let run = digit_run(scan);
                if run.is_empty() {
                    return Err(Error::InvalidJson);
                }
                &scan[run.len()..]
            }
        };

        // Fractional part
        if let Some(after) = scan.strip_prefix('.') {
            let run = digit_run(after);
            if run.is_empty() {
                return Err(Error::InvalidJson);
            }
            scan = &after[run.len()..];
        }

        // Exponent
        if let Some(after) = scan.strip_prefix(['e', 'E']) {
            let after = after.strip_prefix(['+', '-']).unwrap_or(after);
            let run = digit_run(after);
            if run.is_empty() {
                return Err(Error::InvalidJson);
            }
            scan = &after[run.len()..];
        }

        let text = start[..start.len() - scan.len()].to_string();
        self.bump(text.len());
        Ok(Token::Number(text))
    }

    /// Consume a literal keyword (`true`, `false`, `null`).
    fn read_keyword(&mut self, word: &str, token: Token) -> ParseResult<Token> {
        if self.rest().starts_with(word) {
            self.bump(word.len());
            Ok(token)
        } else {
            Err(Error::InvalidJson)
        }
    }
}

/// Longest leading run of ASCII digits.
fn digit_run(s: &str) -> &str {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

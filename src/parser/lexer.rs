//! SQL tokenization
//!
//! This module handles breaking SQL input into tokens. Words are not split
//! into keyword variants: almost every Spark keyword is non-reserved, so the
//! parser decides from context whether a word is a keyword or an identifier.

use crate::error::{Error, Result};

/// Token types for SQL lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: keyword or unquoted identifier, as written
    Word(String),
    /// Backtick identifier; holds the text between the backticks
    QuotedIdentifier(String),
    /// String literal including its quotes (and an `r` prefix for raw strings)
    StringLiteral(String),
    /// Numeric literal as written, including any type suffix
    Number(String),

    /// `/*+`
    HintStart,
    /// `*/` closing a hint
    HintEnd,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    DoubleEq,
    NotEq,      // <>
    BangEq,     // !=
    Lt,
    LtEq,
    Gt,
    GtEq,
    NullSafeEq, // <=>
    Concat,     // ||
    Pipe,
    Ampersand,
    Caret,
    Tilde,
    Bang,
    Arrow,      // ->
    FatArrow,   // =>

    // Punctuation
    Comma,
    Dot,
    Semicolon,
    Colon,
    DoubleColon,
    LParen,
    RParen,
    LBracket,
    RBracket,

    Eof,
}

impl Token {
    /// True when this is a word matching `keyword`, ignoring ASCII case
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    /// Human readable description used in error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("'{}'", w),
            Token::QuotedIdentifier(w) => format!("`{}`", w),
            Token::StringLiteral(s) | Token::Number(s) => s.clone(),
            Token::Eof => "end of input".to_string(),
            other => format!("'{}'", other.symbol()),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Token::HintStart => "/*+",
            Token::HintEnd => "*/",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Eq => "=",
            Token::DoubleEq => "==",
            Token::NotEq => "<>",
            Token::BangEq => "!=",
            Token::Lt => "<",
            Token::LtEq => "<=",
            Token::Gt => ">",
            Token::GtEq => ">=",
            Token::NullSafeEq => "<=>",
            Token::Concat => "||",
            Token::Pipe => "|",
            Token::Ampersand => "&",
            Token::Caret => "^",
            Token::Tilde => "~",
            Token::Bang => "!",
            Token::Arrow => "->",
            Token::FatArrow => "=>",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::DoubleColon => "::",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Word(_)
            | Token::QuotedIdentifier(_)
            | Token::StringLiteral(_)
            | Token::Number(_)
            | Token::Eof => "",
        }
    }
}

/// A token with its byte range in the input
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

/// Tokenize SQL input. The result always ends with [`Token::Eof`].
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>> {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    in_hint: bool,
    tokens: Vec<SpannedToken>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            in_hint: false,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<SpannedToken>> {
        loop {
            self.skip_whitespace_and_comments()?;
            let start = self.pos;
            let Some(c) = self.current() else {
                break;
            };
            let token = match c {
                b'\'' | b'"' => self.scan_string(start)?,
                b'`' => self.scan_backtick_identifier(start)?,
                b'0'..=b'9' => self.scan_number(),
                b'.' if self.peek_is_digit() && !self.follows_name() => self.scan_number(),
                c if is_word_start(c) => {
                    if (c == b'r' || c == b'R') && matches!(self.peek_char(), Some(b'\'' | b'"')) {
                        self.scan_raw_string(start)?
                    } else {
                        self.scan_word()
                    }
                }
                _ => self.scan_symbol(start)?,
            };
            self.tokens.push(SpannedToken {
                token,
                start,
                end: self.pos,
            });
        }
        if self.in_hint {
            return Err(Error::parse("Unterminated hint", Some((self.input.len(), 0))));
        }
        self.tokens.push(SpannedToken {
            token: Token::Eof,
            start: self.input.len(),
            end: self.input.len(),
        });
        Ok(self.tokens)
    }

    fn current(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_char(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    fn peek_is_digit(&self) -> bool {
        matches!(self.peek_char(), Some(b'0'..=b'9'))
    }

    /// A `.` right after a name is a qualifier, not a decimal point.
    fn follows_name(&self) -> bool {
        match self.tokens.last() {
            Some(last) if last.end == self.pos => matches!(
                last.token,
                Token::Word(_) | Token::QuotedIdentifier(_) | Token::RParen | Token::RBracket
            ),
            _ => false,
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            match self.current() {
                Some(c) if c.is_ascii_whitespace() => self.pos += 1,
                Some(b'-') if self.peek_char() == Some(b'-') => {
                    while let Some(c) = self.current() {
                        if c == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some(b'/') if self.peek_char() == Some(b'*') => {
                    if self.bytes.get(self.pos + 2) == Some(&b'+') {
                        return Ok(());
                    }
                    self.skip_block_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Block comments nest, as in Spark's bracketed comments.
    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.pos;
        let mut depth = 0usize;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'/' && self.peek_char() == Some(b'*') {
                depth += 1;
                self.pos += 2;
            } else if self.bytes[self.pos] == b'*' && self.peek_char() == Some(b'/') {
                depth -= 1;
                self.pos += 2;
                if depth == 0 {
                    return Ok(());
                }
            } else {
                self.pos += 1;
            }
        }
        Err(Error::parse("Unterminated comment", Some((start, 2))))
    }

    fn scan_word(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.current() {
            if is_word_part(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
        Token::Word(self.input[start..self.pos].to_string())
    }

    fn scan_number(&mut self) -> Token {
        let start = self.pos;
        self.consume_digits();
        if self.current() == Some(b'.') && !matches!(self.peek_char(), Some(b'.')) {
            self.pos += 1;
            self.consume_digits();
        }
        if matches!(self.current(), Some(b'e' | b'E')) {
            let mut lookahead = self.pos + 1;
            if matches!(self.bytes.get(lookahead), Some(b'+' | b'-')) {
                lookahead += 1;
            }
            if matches!(self.bytes.get(lookahead), Some(b'0'..=b'9')) {
                self.pos = lookahead;
                self.consume_digits();
            }
        }
        self.consume_numeric_suffix();
        Token::Number(self.input[start..self.pos].to_string())
    }

    fn consume_digits(&mut self) {
        while matches!(self.current(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    /// `L`, `S`, `Y`, `D`, `F` and `BD` suffixes, only when not followed by more word characters.
    fn consume_numeric_suffix(&mut self) {
        let rest = &self.bytes[self.pos..];
        let suffix_len = match rest {
            [b'b' | b'B', b'd' | b'D', ..] => 2,
            [b'l' | b'L' | b's' | b'S' | b'y' | b'Y' | b'd' | b'D' | b'f' | b'F', ..] => 1,
            _ => 0,
        };
        if suffix_len > 0 && !rest.get(suffix_len).copied().is_some_and(is_word_part) {
            self.pos += suffix_len;
        }
    }

    fn scan_string(&mut self, start: usize) -> Result<Token> {
        let Some(quote) = self.current() else {
            return Err(Error::parse("Unterminated string literal", Some((start, 1))));
        };
        self.pos += 1;
        while let Some(c) = self.current() {
            if c == b'\\' {
                self.pos += 2;
                continue;
            }
            if c == quote && self.peek_char() == Some(quote) {
                // doubled quote stays inside the literal
                self.pos += 2;
                continue;
            }
            self.pos += 1;
            if c == quote {
                return Ok(Token::StringLiteral(self.input[start..self.pos].to_string()));
            }
        }
        Err(Error::parse("Unterminated string literal", Some((start, 1))))
    }

    fn scan_raw_string(&mut self, start: usize) -> Result<Token> {
        self.pos += 1;
        let Some(quote) = self.current() else {
            return Err(Error::parse("Unterminated string literal", Some((start, 1))));
        };
        self.pos += 1;
        while let Some(c) = self.current() {
            self.pos += 1;
            if c == quote {
                return Ok(Token::StringLiteral(self.input[start..self.pos].to_string()));
            }
        }
        Err(Error::parse("Unterminated string literal", Some((start, 1))))
    }

    fn scan_backtick_identifier(&mut self, start: usize) -> Result<Token> {
        self.pos += 1;
        let content_start = self.pos;
        while let Some(c) = self.current() {
            if c == b'`' {
                if self.peek_char() == Some(b'`') {
                    self.pos += 2;
                    continue;
                }
                let value = self.input[content_start..self.pos].to_string();
                self.pos += 1;
                return Ok(Token::QuotedIdentifier(value));
            }
            self.pos += 1;
        }
        Err(Error::parse("Unterminated quoted identifier", Some((start, 1))))
    }

    fn scan_symbol(&mut self, start: usize) -> Result<Token> {
        let c = self.bytes[self.pos];
        let next = self.peek_char();
        let (token, len) = match (c, next) {
            (b'/', Some(b'*')) => {
                self.in_hint = true;
                (Token::HintStart, 3)
            }
            (b'*', Some(b'/')) if self.in_hint => {
                self.in_hint = false;
                (Token::HintEnd, 2)
            }
            (b'<', Some(b'=')) if self.bytes.get(self.pos + 2) == Some(&b'>') => {
                (Token::NullSafeEq, 3)
            }
            (b'<', Some(b'=')) => (Token::LtEq, 2),
            (b'<', Some(b'>')) => (Token::NotEq, 2),
            (b'<', _) => (Token::Lt, 1),
            (b'>', Some(b'=')) => (Token::GtEq, 2),
            (b'>', _) => (Token::Gt, 1),
            (b'=', Some(b'=')) => (Token::DoubleEq, 2),
            (b'=', Some(b'>')) => (Token::FatArrow, 2),
            (b'=', _) => (Token::Eq, 1),
            (b'!', Some(b'=')) => (Token::BangEq, 2),
            (b'!', _) => (Token::Bang, 1),
            (b'|', Some(b'|')) => (Token::Concat, 2),
            (b'|', _) => (Token::Pipe, 1),
            (b'-', Some(b'>')) => (Token::Arrow, 2),
            (b'-', _) => (Token::Minus, 1),
            (b':', Some(b':')) => (Token::DoubleColon, 2),
            (b':', _) => (Token::Colon, 1),
            (b'+', _) => (Token::Plus, 1),
            (b'*', _) => (Token::Star, 1),
            (b'/', _) => (Token::Slash, 1),
            (b'%', _) => (Token::Percent, 1),
            (b'&', _) => (Token::Ampersand, 1),
            (b'^', _) => (Token::Caret, 1),
            (b'~', _) => (Token::Tilde, 1),
            (b',', _) => (Token::Comma, 1),
            (b'.', _) => (Token::Dot, 1),
            (b';', _) => (Token::Semicolon, 1),
            (b'(', _) => (Token::LParen, 1),
            (b')', _) => (Token::RParen, 1),
            (b'[', _) => (Token::LBracket, 1),
            (b']', _) => (Token::RBracket, 1),
            _ => {
                let ch = self.input[start..].chars().next().unwrap_or('?');
                return Err(Error::parse(
                    format!("Unexpected character '{}'", ch),
                    Some((start, ch.len_utf8())),
                ));
            }
        };
        self.pos += len;
        Ok(token)
    }
}

fn is_word_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c >= 0x80
}

fn is_word_part(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("should tokenize")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn spans_cover_source_text() {
        let tokens = tokenize("select `a b`").expect("should tokenize");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 6));
        assert_eq!((tokens[1].start, tokens[1].end), (7, 12));
    }

    #[test]
    fn qualified_name_is_not_a_decimal() {
        assert_eq!(
            kinds("t.5"),
            vec![
                Token::Word("t".into()),
                Token::Dot,
                Token::Number("5".into()),
                Token::Eof
            ]
        );
    }

    #[test]
    fn nested_block_comment_is_skipped() {
        assert_eq!(kinds("/* a /* b */ c */ 1"), vec![Token::Number("1".into()), Token::Eof]);
    }
}

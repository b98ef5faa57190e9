//! String literal extraction from Python source.
//!
//! A tokenizer, not a full parser: it understands comments, bracket nesting,
//! line continuations, string prefixes, triple quotes and implicit
//! concatenation, which is everything needed to recover the `str` constants a
//! Python syntax tree would hold. Bytes literals are skipped. F-strings
//! contribute their literal text, their format specs and the string constants
//! inside replacement fields, including same-quote nesting.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Tokenization failure; callers of [extract_literals] never see it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal starting on line {0}")]
    UnterminatedString(usize),

    #[error("unmatched closing bracket on line {0}")]
    UnmatchedBracket(usize),
}

/// Extracts every string constant from a Python file.
///
/// Missing, unreadable, non-UTF-8 or untokenizable files yield an empty list
/// so that one bad file never aborts a scan.
pub fn extract_literals(path: &Path) -> Vec<String> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log::debug!("skipping {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match parse_literals(&source) {
        Ok(literals) => literals,
        Err(e) => {
            log::debug!("skipping {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Tokenizes Python source and returns its string constants in source order.
pub fn parse_literals(source: &str) -> Result<Vec<String>, LexError> {
    Lexer::new(source).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    depth: usize,
    pending: Option<String>,
    literals: Vec<String>,
}

struct Prefix {
    raw: bool,
    bytes: bool,
    format: bool,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            depth: 0,
            pending: None,
            literals: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn flush(&mut self) {
        if let Some(literal) = self.pending.take() {
            self.literals.push(literal);
        }
    }

    fn run(mut self) -> Result<Vec<String>, LexError> {
        while let Some(ch) = self.peek(0) {
            match ch {
                '#' => {
                    while matches!(self.peek(0), Some(c) if c != '\n') {
                        self.bump();
                    }
                }
                '\\' if matches!(self.peek(1), Some('\n')) => {
                    self.bump();
                    self.bump();
                }
                '\\' if matches!((self.peek(1), self.peek(2)), (Some('\r'), Some('\n'))) => {
                    self.bump();
                    self.bump();
                    self.bump();
                }
                '\n' => {
                    if self.depth == 0 {
                        self.flush();
                    }
                    self.bump();
                }
                ' ' | '\t' | '\r' | '\x0c' => {
                    self.bump();
                }
                '\'' | '"' => {
                    let prefix = Prefix {
                        raw: false,
                        bytes: false,
                        format: false,
                    };
                    self.string(prefix)?;
                }
                '(' | '[' | '{' => {
                    self.flush();
                    self.depth += 1;
                    self.bump();
                }
                ')' | ']' | '}' => {
                    self.flush();
                    if self.depth == 0 {
                        return Err(LexError::UnmatchedBracket(self.line));
                    }
                    self.depth -= 1;
                    self.bump();
                }
                c if c.is_alphabetic() || c == '_' => {
                    let word = self.identifier();
                    match (string_prefix(&word), self.peek(0)) {
                        (Some(prefix), Some('\'' | '"')) => self.string(prefix)?,
                        _ => self.flush(),
                    }
                }
                c if c.is_ascii_digit() => {
                    self.flush();
                    while matches!(self.peek(0), Some(c) if c.is_alphanumeric() || c == '_' || c == '.')
                    {
                        self.bump();
                    }
                }
                _ => {
                    self.flush();
                    self.bump();
                }
            }
        }

        self.flush();
        Ok(self.literals)
    }

    fn identifier(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek(0) {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }
        word
    }

    fn string(&mut self, prefix: Prefix) -> Result<(), LexError> {
        let start_line = self.line;
        let quote = match self.bump() {
            Some(q) => q,
            None => return Err(LexError::UnterminatedString(start_line)),
        };
        let triple = self.peek(0) == Some(quote) && self.peek(1) == Some(quote);
        if triple {
            self.bump();
            self.bump();
        }

        if prefix.format {
            return self.format_string(prefix.raw, quote, triple, start_line);
        }

        let mut body = String::new();
        loop {
            let ch = self
                .bump()
                .ok_or(LexError::UnterminatedString(start_line))?;
            match ch {
                '\\' => {
                    let next = self
                        .bump()
                        .ok_or(LexError::UnterminatedString(start_line))?;
                    body.push('\\');
                    body.push(next);
                }
                '\n' if !triple => return Err(LexError::UnterminatedString(start_line)),
                c if c == quote && self.closes(quote, triple) => break,
                c => body.push(c),
            }
        }

        if prefix.bytes {
            self.flush();
            return Ok(());
        }

        let value = if prefix.raw { body } else { decode_escapes(&body) };
        match self.pending.as_mut() {
            Some(pending) => pending.push_str(&value),
            None => self.pending = Some(value),
        }
        Ok(())
    }

    /// After a closing `quote` has been consumed, consumes the rest of a
    /// triple-quote delimiter. False when the quote belongs to the body.
    fn closes(&mut self, quote: char, triple: bool) -> bool {
        if !triple {
            return true;
        }
        if self.peek(0) == Some(quote) && self.peek(1) == Some(quote) {
            self.bump();
            self.bump();
            return true;
        }
        false
    }

    /// Skips a plain string literal starting at its opening quote.
    fn skip_string(&mut self, start_line: usize) -> Result<(), LexError> {
        let quote = self
            .bump()
            .ok_or(LexError::UnterminatedString(start_line))?;
        let triple = self.peek(0) == Some(quote) && self.peek(1) == Some(quote);
        if triple {
            self.bump();
            self.bump();
        }

        loop {
            match self
                .bump()
                .ok_or(LexError::UnterminatedString(start_line))?
            {
                '\\' => {
                    self.bump()
                        .ok_or(LexError::UnterminatedString(start_line))?;
                }
                '\n' if !triple => return Err(LexError::UnterminatedString(start_line)),
                c if c == quote && self.closes(quote, triple) => return Ok(()),
                _ => {}
            }
        }
    }

    fn push_part(&mut self, text: &mut String, raw: bool) {
        let part = std::mem::take(text);
        let part = if raw { part } else { decode_escapes(&part) };
        if !part.is_empty() {
            self.literals.push(part);
        }
    }

    /// Lexes an f-string body; the opening delimiter is already consumed.
    fn format_string(
        &mut self,
        raw: bool,
        quote: char,
        triple: bool,
        start_line: usize,
    ) -> Result<(), LexError> {
        self.flush();
        let mut text = String::new();

        loop {
            let ch = self
                .bump()
                .ok_or(LexError::UnterminatedString(start_line))?;
            match ch {
                '\\' => {
                    let next = self
                        .bump()
                        .ok_or(LexError::UnterminatedString(start_line))?;
                    text.push('\\');
                    text.push(next);
                    // `\N{NAME}` braces are not a replacement field
                    if next == 'N' && !raw && self.peek(0) == Some('{') {
                        while let Some(c) = self.bump() {
                            text.push(c);
                            if c == '}' {
                                break;
                            }
                        }
                    }
                }
                '\n' if !triple => return Err(LexError::UnterminatedString(start_line)),
                c if c == quote && self.closes(quote, triple) => break,
                '{' if self.peek(0) == Some('{') => {
                    self.bump();
                    text.push('{');
                }
                '}' if self.peek(0) == Some('}') => {
                    self.bump();
                    text.push('}');
                }
                '{' => {
                    let expression = self.field_expression(start_line)?;
                    if is_self_documenting(&expression) {
                        text.push_str(&expression);
                    }
                    self.push_part(&mut text, raw);
                    self.push_expression_literals(&expression, start_line)?;
                    self.field_tail(raw, start_line)?;
                }
                c => text.push(c),
            }
        }

        self.push_part(&mut text, raw);
        Ok(())
    }

    /// Reads a replacement field's expression up to its `!`, `:` or `}`.
    fn field_expression(&mut self, start_line: usize) -> Result<String, LexError> {
        let mut expression = String::new();
        let mut depth = 0usize;

        loop {
            let ch = self
                .peek(0)
                .ok_or(LexError::UnterminatedString(start_line))?;
            match ch {
                '\'' | '"' => {
                    let from = self.pos;
                    self.skip_string(start_line)?;
                    expression.extend(&self.chars[from..self.pos]);
                    continue;
                }
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' if depth > 0 => depth -= 1,
                '}' | ':' if depth == 0 => return Ok(expression),
                '!' if depth == 0 && self.peek(1) != Some('=') => return Ok(expression),
                _ => {}
            }
            expression.push(ch);
            self.bump();
        }
    }

    fn push_expression_literals(
        &mut self,
        expression: &str,
        start_line: usize,
    ) -> Result<(), LexError> {
        let nested = parse_literals(expression)
            .map_err(|_| LexError::UnterminatedString(start_line))?;
        self.literals.extend(nested);
        Ok(())
    }

    /// Consumes an optional `!conversion`, an optional `:format_spec` and the
    /// closing `}` of a replacement field.
    fn field_tail(&mut self, raw: bool, start_line: usize) -> Result<(), LexError> {
        if self.peek(0) == Some('!') {
            self.bump();
            while matches!(self.peek(0), Some(c) if c.is_alphanumeric()) {
                self.bump();
            }
        }

        if self.peek(0) == Some(':') {
            self.bump();
            let mut spec = String::new();
            loop {
                match self
                    .bump()
                    .ok_or(LexError::UnterminatedString(start_line))?
                {
                    '}' => {
                        self.push_part(&mut spec, raw);
                        return Ok(());
                    }
                    '{' => {
                        self.push_part(&mut spec, raw);
                        let expression = self.field_expression(start_line)?;
                        self.push_expression_literals(&expression, start_line)?;
                        self.field_tail(raw, start_line)?;
                    }
                    c => spec.push(c),
                }
            }
        }

        match self.bump() {
            Some('}') => Ok(()),
            _ => Err(LexError::UnterminatedString(start_line)),
        }
    }
}

fn string_prefix(word: &str) -> Option<Prefix> {
    let lower = word.to_ascii_lowercase();
    let prefix = match lower.as_str() {
        "r" => (true, false, false),
        "u" => (false, false, false),
        "b" => (false, true, false),
        "f" => (false, false, true),
        "br" | "rb" => (true, true, false),
        "fr" | "rf" => (true, false, true),
        _ => return None,
    };
    Some(Prefix {
        raw: prefix.0,
        bytes: prefix.1,
        format: prefix.2,
    })
}

/// `{expr=}` fields repeat their expression text in the output.
fn is_self_documenting(expression: &str) -> bool {
    let trimmed = expression.trim_end();
    trimmed.ends_with('=')
        && !["==", "!=", "<=", ">="]
            .iter()
            .any(|op| trimmed.ends_with(op))
}

/// Decodes Python escape sequences in a non-raw string body.
///
/// Unknown or malformed escapes are kept verbatim, as are `\N{...}` names.
pub fn decode_escapes(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\\' || i + 1 >= chars.len() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let next = chars[i + 1];
        i += 2;
        match next {
            '\n' => {}
            '\r' if chars.get(i) == Some(&'\n') => i += 1,
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 && matches!(chars.get(i), Some('0'..='7')) {
                    digits.push(chars[i]);
                    i += 1;
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars[i..].iter().take(width).collect();
                let decoded = if digits.len() == width
                    && digits.chars().all(|c| c.is_ascii_hexdigit())
                {
                    u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(c) => {
                        out.push(c);
                        i += width;
                    }
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

use std::fmt;

use super::error::EngineError;

/// One whitespace-delimited word, punctuation still attached.
///
/// Attributes that drive pacing (length, trailing punctuation class, digit
/// presence) are derived on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Word length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn has_digit(&self) -> bool {
        self.0.chars().any(|c| c.is_ascii_digit())
    }

    pub fn punctuation_class(&self) -> PunctuationClass {
        PunctuationClass::of(&self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Punctuation shape of a word for pause weighting.
///
/// Precedence is fixed: a trailing sentence terminator wins over a trailing
/// clause separator, and both win over a dash or parenthesis anywhere in
/// the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuationClass {
    /// Ends with `.`, `!` or `?`.
    SentenceEnd,
    /// Ends with `,`, `;` or `:`.
    ClauseSeparator,
    /// Contains a dash, em-dash or parenthesis anywhere.
    DashOrParen,
    Plain,
}

impl PunctuationClass {
    pub fn of(word: &str) -> Self {
        match word.chars().last() {
            Some('.') | Some('!') | Some('?') => PunctuationClass::SentenceEnd,
            Some(',') | Some(';') | Some(':') => PunctuationClass::ClauseSeparator,
            _ => {
                if word.chars().any(|c| matches!(c, '-' | '\u{2014}' | '(' | ')')) {
                    PunctuationClass::DashOrParen
                } else {
                    PunctuationClass::Plain
                }
            }
        }
    }
}

/// Ordered, immutable word sequence produced from one source text.
///
/// Invariants: no token is empty, original left-to-right order is kept, and
/// the sequence is never mutated in place; loading a new text replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a sequence built by `tokenize`, but callers that
    /// construct sequences in tests may still ask.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Splits raw text into words on whitespace boundaries.
///
/// Runs of whitespace (newlines included) collapse into single separators,
/// leading and trailing whitespace is trimmed, and zero-length results are
/// dropped. Identical input always yields an identical sequence. The only
/// failure mode is text with no words at all.
pub fn tokenize(text: &str) -> Result<TokenSequence, EngineError> {
    let tokens: Vec<Token> = text.split_whitespace().map(Token::new).collect();

    if tokens.is_empty() {
        return Err(EngineError::EmptyContent);
    }

    Ok(TokenSequence { tokens })
}

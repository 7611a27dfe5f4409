/// One lexical unit of the builder language.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Identifier(String),
    Operator(char),
}

/// Lazy scanner over the program source.
///
/// Tokens are produced one at a time; the parser layers single-token pushback
/// on top. Any character outside the known classes ends the stream, which the
/// parser reports as an ordinary "expected ..." failure. No comments, no
/// strings, no source positions.
pub(crate) struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

const OPERATORS: &[char] = &['(', ')', ',', '.', '=', '>', '<', ';'];

/// Greedy numeral charset: digits, decimal point, exponent letters, sign
/// characters, and the `f` unit suffix.
fn is_numeral_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | 'f' | 'F' | '+' | '-')
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    pub(crate) fn next_token(&mut self) -> Option<Token> {
        self.eat_while(char::is_whitespace);
        let c = self.peek_char()?;

        if c.is_ascii_digit() || c == '+' || c == '-' {
            let spelling = self.eat_while(is_numeral_char);
            // One uniform suffix rule: trailing unit letters are stripped
            // before parsing, so `1.5f` and `1e5` both lex as numbers.
            let trimmed = spelling.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            return trimmed.parse::<f64>().ok().map(Token::Number);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let spelling = self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
            return Some(Token::Identifier(spelling.to_owned()));
        }

        if OPERATORS.contains(&c) {
            self.pos += c.len_utf8();
            return Some(Token::Operator(c));
        }

        None
    }
}

use crate::foundation::error::{TrajectError, TrajectResult};
use crate::geometry::vec2::Vector2;
use crate::program::ast::{MoverMethod, MoverStatement, PathStatement, Program};
use crate::program::lexer::{Token, Tokenizer};

/// Parse program source into its statement tree.
///
/// Parsing stops at the first failing production and reports a descriptive
/// message; there is no resynchronization and no multi-error collection.
pub fn parse(src: &str) -> TrajectResult<Program> {
    Parser::new(src).parse_program()
}

/// Recursive-descent consumer of the lazy token stream, with single-token
/// pushback for the lookahead the grammar needs.
struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    putback: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(src),
            putback: None,
        }
    }

    fn peek(&mut self) -> Option<&Token> {
        if self.putback.is_none() {
            self.putback = self.tokenizer.next_token();
        }
        self.putback.as_ref()
    }

    fn bump(&mut self) -> Option<Token> {
        self.peek();
        self.putback.take()
    }

    fn fail<T>(msg: impl Into<String>) -> TrajectResult<T> {
        Err(TrajectError::parse(msg))
    }

    /// Semantic checks on values the grammar already accepted.
    fn reject<T>(msg: impl Into<String>) -> TrajectResult<T> {
        Err(TrajectError::validation(msg))
    }

    fn expect_identifier(&mut self, name: &str) -> TrajectResult<()> {
        match self.bump() {
            Some(Token::Identifier(s)) if s == name => Ok(()),
            _ => Self::fail(format!("expected '{name}'")),
        }
    }

    fn expect_operator(&mut self, op: char) -> TrajectResult<()> {
        match self.bump() {
            Some(Token::Operator(c)) if c == op => Ok(()),
            _ => Self::fail(format!("expected '{op}'")),
        }
    }

    fn want_identifier(&mut self, what: &str) -> TrajectResult<String> {
        match self.bump() {
            Some(Token::Identifier(s)) => Ok(s),
            _ => Self::fail(format!("expected {what}")),
        }
    }

    fn want_number(&mut self, what: &str) -> TrajectResult<f64> {
        match self.bump() {
            Some(Token::Number(v)) => Ok(v),
            _ => Self::fail(format!("expected a number for {what}")),
        }
    }

    fn want_segments(&mut self) -> TrajectResult<u32> {
        let v = self.want_number("segment count")?;
        if !v.is_finite() || v.fract() != 0.0 || v < 1.0 || v > f64::from(u32::MAX) {
            return Self::reject(format!("segment count must be a positive integer, got {v}"));
        }
        Ok(v as u32)
    }

    fn want_vector(&mut self) -> TrajectResult<Vector2> {
        self.expect_identifier("new")?;
        self.expect_identifier("Vector2")?;
        self.expect_operator('(')?;
        let x = self.want_number("vector x")?;
        self.expect_operator(',')?;
        let y = self.want_number("vector y")?;
        self.expect_operator(')')?;
        Ok(Vector2::new(x, y))
    }

    fn parse_path_call(&mut self) -> TrajectResult<PathStatement> {
        self.expect_operator('.')?;
        let name = self.want_identifier("a path method name")?;
        self.expect_operator('(')?;
        let statement = match name.as_str() {
            "Start" => PathStatement::Start {
                start: self.want_vector()?,
            },
            "Line" => PathStatement::Line {
                end: self.want_vector()?,
            },
            "LineContinue" => PathStatement::LineContinue {
                length: self.want_number("LineContinue length")?,
            },
            "Arc" => {
                let center = self.want_vector()?;
                self.expect_operator(',')?;
                let angle = self.want_number("Arc angle")?;
                PathStatement::Arc { center, angle }
            }
            "ArcContinue" => {
                let radius = self.want_number("ArcContinue radius")?;
                self.expect_operator(',')?;
                let angle = self.want_number("ArcContinue angle")?;
                PathStatement::ArcContinue { radius, angle }
            }
            "Bezier" => {
                let c1 = self.want_vector()?;
                self.expect_operator(',')?;
                let c2 = self.want_vector()?;
                self.expect_operator(',')?;
                let end = self.want_vector()?;
                self.expect_operator(',')?;
                let segments = self.want_segments()?;
                PathStatement::Bezier {
                    c1,
                    c2,
                    end,
                    segments,
                }
            }
            "BezierContinue" => {
                let c1_offset = self.want_number("BezierContinue c1 offset")?;
                self.expect_operator(',')?;
                let c2 = self.want_vector()?;
                self.expect_operator(',')?;
                let end = self.want_vector()?;
                self.expect_operator(',')?;
                let segments = self.want_segments()?;
                PathStatement::BezierContinue {
                    c1_offset,
                    c2,
                    end,
                    segments,
                }
            }
            other => return Self::fail(format!("unknown path method '{other}'")),
        };
        self.expect_operator(')')?;
        Ok(statement)
    }

    fn parse_mover_call(&mut self) -> TrajectResult<MoverStatement> {
        self.expect_operator('.')?;
        let name = self.want_identifier("a mover method name")?;
        let Some(method) = MoverMethod::from_name(&name) else {
            return Self::fail(format!("unknown mover method '{name}'"));
        };
        self.expect_operator('(')?;
        let duration = self.want_number("duration")?;
        if !(duration >= 0.0) {
            return Self::reject(format!("duration must be >= 0, got {duration}"));
        }
        self.expect_operator(',')?;
        // The closure parameter is echoed on both sides of `=>`.
        let param = self.want_identifier("a closure parameter")?;
        self.expect_operator('=')?;
        self.expect_operator('>')?;
        let echoed = self.want_identifier("a closure parameter")?;
        if param != echoed {
            return Self::fail(format!(
                "closure parameter names do not match: '{param}' vs '{echoed}'"
            ));
        }
        let mut paths = Vec::new();
        loop {
            match self.peek() {
                None => return Self::fail("unexpected end of input in mover body"),
                Some(Token::Operator(')')) => {
                    self.bump();
                    break;
                }
                Some(_) => paths.push(self.parse_path_call()?),
            }
        }
        Ok(MoverStatement {
            method,
            duration,
            paths,
        })
    }

    fn parse_program(&mut self) -> TrajectResult<Program> {
        self.expect_identifier("new")?;
        self.expect_identifier("MoverBuilder")?;
        self.expect_operator('(')?;
        self.expect_operator(')')?;
        let mut movers = Vec::new();
        loop {
            match self.peek() {
                // The trailing semicolon is optional; end of input also ends
                // the program.
                None => break,
                Some(Token::Operator(';')) => {
                    self.bump();
                    break;
                }
                Some(_) => movers.push(self.parse_mover_call()?),
            }
        }
        Ok(Program::new(movers))
    }
}

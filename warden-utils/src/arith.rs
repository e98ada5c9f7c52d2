//! Bounded arithmetic evaluator used by the `math` command.
//!
//! Only digits, `+ - * / ( ) . %` and spaces are accepted. Integer arithmetic
//! is checked, `/` always produces a float, `%` and `//` are floored, and
//! `**` is right-associative.

use std::fmt;

pub const ALLOWED_CHARS: &str = "0123456789+-*/().% ";
pub const MAX_EXPRESSION_LEN: usize = 256;
pub const MAX_NESTING_DEPTH: usize = 32;
const MAX_INT_EXPONENT: i64 = 1_024;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("only digits and arithmetic operators are allowed")]
    DisallowedCharacter(char),
    #[error("expression is empty")]
    Empty,
    #[error("expression is longer than {MAX_EXPRESSION_LEN} characters")]
    TooLong,
    #[error("expression is nested too deeply")]
    TooDeep,
    #[error("unexpected `{0}`")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is too large")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Self::Int(value) => value == 0,
            Self::Float(value) => value == 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Reject anything outside [`ALLOWED_CHARS`] without parsing it.
pub fn check_allowed(expr: &str) -> Result<(), EvalError> {
    match expr.chars().find(|ch| !ALLOWED_CHARS.contains(*ch)) {
        Some(ch) => Err(EvalError::DisallowedCharacter(ch)),
        None => Ok(()),
    }
}

pub fn evaluate(expr: &str) -> Result<Value, EvalError> {
    check_allowed(expr)?;

    if expr.len() > MAX_EXPRESSION_LEN {
        return Err(EvalError::TooLong);
    }

    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        cursor: 0,
        depth: 0,
    };
    let value = parser.expression()?;

    match parser.peek() {
        None => Ok(value),
        Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Value),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    Power,
    Open,
    Close,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::DoubleSlash => f.write_str("//"),
            Self::Percent => f.write_str("%"),
            Self::Power => f.write_str("**"),
            Self::Open => f.write_str("("),
            Self::Close => f.write_str(")"),
        }
    }
}

fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let bytes = expr.as_bytes();
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let byte = bytes[cursor];
        let token = match byte {
            b' ' => {
                cursor += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                let start = cursor;
                while cursor < bytes.len() && (bytes[cursor].is_ascii_digit() || bytes[cursor] == b'.') {
                    cursor += 1;
                }
                tokens.push(Token::Number(parse_number(&expr[start..cursor])?));
                continue;
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' if bytes.get(cursor + 1) == Some(&b'*') => {
                cursor += 1;
                Token::Power
            }
            b'*' => Token::Star,
            b'/' if bytes.get(cursor + 1) == Some(&b'/') => {
                cursor += 1;
                Token::DoubleSlash
            }
            b'/' => Token::Slash,
            b'%' => Token::Percent,
            b'(' => Token::Open,
            b')' => Token::Close,
            other => return Err(EvalError::DisallowedCharacter(other as char)),
        };
        tokens.push(token);
        cursor += 1;
    }

    Ok(tokens)
}

fn parse_number(raw: &str) -> Result<Value, EvalError> {
    if raw.contains('.') {
        if raw == "." || raw.matches('.').count() > 1 {
            return Err(EvalError::InvalidNumber(raw.to_owned()));
        }
        return raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| EvalError::InvalidNumber(raw.to_owned()));
    }

    raw.parse::<i64>().map(Value::Int).map_err(|_| EvalError::Overflow)
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.cursor);
        self.cursor += 1;
        token
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(EvalError::TooDeep);
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<Value, EvalError> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => Token::Plus,
                Some(Token::Minus) => Token::Minus,
                _ => return Ok(left),
            };
            self.cursor += 1;
            let right = self.term()?;
            left = apply(&op, left, right)?;
        }
    }

    fn term(&mut self) -> Result<Value, EvalError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(token @ (Token::Star | Token::Slash | Token::DoubleSlash | Token::Percent)) => {
                    token.clone()
                }
                _ => return Ok(left),
            };
            self.cursor += 1;
            let right = self.unary()?;
            left = apply(&op, left, right)?;
        }
    }

    fn unary(&mut self) -> Result<Value, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.cursor += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                negate(value)
            }
            Some(Token::Plus) => {
                self.cursor += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(value)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Value, EvalError> {
        let base = self.atom()?;
        if self.peek() != Some(&Token::Power) {
            return Ok(base);
        }
        self.cursor += 1;
        self.descend()?;
        // Exponent binds tighter than a unary minus on the left, looser on the right.
        let exponent = self.unary()?;
        self.depth -= 1;
        apply(&Token::Power, base, exponent)
    }

    fn atom(&mut self) -> Result<Value, EvalError> {
        match self.next().cloned() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Open) => {
                self.descend()?;
                let value = self.expression()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::Close) => Ok(value),
                    Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

fn negate(value: Value) -> Result<Value, EvalError> {
    match value {
        Value::Int(value) => value.checked_neg().map(Value::Int).ok_or(EvalError::Overflow),
        Value::Float(value) => Ok(Value::Float(-value)),
    }
}

fn apply(op: &Token, left: Value, right: Value) -> Result<Value, EvalError> {
    let result = match (op, left, right) {
        (Token::Plus, Value::Int(a), Value::Int(b)) => Value::Int(a.checked_add(b).ok_or(EvalError::Overflow)?),
        (Token::Minus, Value::Int(a), Value::Int(b)) => Value::Int(a.checked_sub(b).ok_or(EvalError::Overflow)?),
        (Token::Star, Value::Int(a), Value::Int(b)) => Value::Int(a.checked_mul(b).ok_or(EvalError::Overflow)?),
        (Token::Plus, a, b) => Value::Float(a.as_f64() + b.as_f64()),
        (Token::Minus, a, b) => Value::Float(a.as_f64() - b.as_f64()),
        (Token::Star, a, b) => Value::Float(a.as_f64() * b.as_f64()),
        (Token::Slash, a, b) => {
            if b.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            Value::Float(a.as_f64() / b.as_f64())
        }
        (Token::DoubleSlash | Token::Percent, _, b) if b.is_zero() => {
            return Err(EvalError::DivisionByZero);
        }
        (Token::DoubleSlash, Value::Int(a), Value::Int(b)) => {
            Value::Int(floor_div(a, b).ok_or(EvalError::Overflow)?)
        }
        (Token::DoubleSlash, a, b) => Value::Float((a.as_f64() / b.as_f64()).floor()),
        (Token::Percent, Value::Int(a), Value::Int(b)) => {
            Value::Int(floor_mod(a, b).ok_or(EvalError::Overflow)?)
        }
        (Token::Percent, a, b) => {
            let (a, b) = (a.as_f64(), b.as_f64());
            Value::Float(a - b * (a / b).floor())
        }
        (Token::Power, Value::Int(a), Value::Int(b)) if b >= 0 => {
            if b > MAX_INT_EXPONENT {
                return Err(EvalError::Overflow);
            }
            let exponent = u32::try_from(b).map_err(|_| EvalError::Overflow)?;
            Value::Int(a.checked_pow(exponent).ok_or(EvalError::Overflow)?)
        }
        (Token::Power, a, b) => {
            if a.is_zero() && b.as_f64() < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::Float(a.as_f64().powf(b.as_f64()))
        }
        (token, _, _) => return Err(EvalError::UnexpectedToken(token.to_string())),
    };

    match result {
        Value::Float(value) if !value.is_finite() => Err(EvalError::Overflow),
        value => Ok(value),
    }
}

fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

fn floor_mod(a: i64, b: i64) -> Option<i64> {
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::{EvalError, MAX_NESTING_DEPTH, Value, evaluate};

    fn eval(expr: &str) -> String {
        evaluate(expr).map(|value| value.to_string()).unwrap()
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(eval("2+2"), "4");
        assert_eq!(eval("2 + 3 * 4"), "14");
        assert_eq!(eval("(2 + 3) * 4"), "20");
        assert_eq!(eval("10 - 2 - 3"), "5");
        assert_eq!(eval("-3 + 5"), "2");
    }

    #[test]
    fn division_yields_float() {
        assert_eq!(eval("4/2"), "2.0");
        assert_eq!(eval("7/2"), "3.5");
        assert_eq!(evaluate("1/4"), Ok(Value::Float(0.25)));
    }

    #[test]
    fn floored_division_and_modulo() {
        assert_eq!(eval("7//2"), "3");
        assert_eq!(eval("-7//2"), "-4");
        assert_eq!(eval("7%3"), "1");
        assert_eq!(eval("-7%3"), "2");
        assert_eq!(eval("7%-3"), "-2");
        assert_eq!(eval("7.5%2"), "1.5");
    }

    #[test]
    fn powers() {
        assert_eq!(eval("2**10"), "1024");
        assert_eq!(eval("2**3**2"), "512");
        assert_eq!(eval("-2**2"), "-4");
        assert_eq!(eval("2**-1"), "0.5");
    }

    #[test]
    fn decimals() {
        assert_eq!(eval("1.5*2"), "3.0");
        assert_eq!(eval(".5+.25"), "0.75");
    }

    #[test]
    fn disallowed_characters_are_rejected_before_parsing() {
        assert_eq!(evaluate("2+2; rm"), Err(EvalError::DisallowedCharacter(';')));
        assert_eq!(evaluate("abs(2)"), Err(EvalError::DisallowedCharacter('a')));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("   "), Err(EvalError::Empty));
        assert_eq!(evaluate("2+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("(2"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("2)"), Err(EvalError::UnexpectedToken(")".to_owned())));
        assert_eq!(evaluate("1..2"), Err(EvalError::InvalidNumber("1..2".to_owned())));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1//0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1%0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("0**-1"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(evaluate("9999999999*9999999999"), Err(EvalError::Overflow));
        assert_eq!(evaluate("2**100000"), Err(EvalError::Overflow));
        assert_eq!(evaluate("99999999999999999999"), Err(EvalError::Overflow));
    }

    #[test]
    fn nesting_is_bounded() {
        let shallow = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
        assert_eq!(eval(&shallow), "1");

        let deep = format!(
            "{}1{}",
            "(".repeat(MAX_NESTING_DEPTH + 1),
            ")".repeat(MAX_NESTING_DEPTH + 1)
        );
        assert_eq!(evaluate(&deep), Err(EvalError::TooDeep));
        assert_eq!(evaluate(&"-".repeat(40)), Err(EvalError::TooDeep));
    }

    #[test]
    fn long_input_is_rejected() {
        let long = "1+".repeat(200) + "1";
        assert_eq!(evaluate(&long), Err(EvalError::TooLong));
    }
}

//! Numeric evaluation of small LaTeX arithmetic expressions.
//!
//! Grammar (whitespace ignored):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '\cdot' | '\times' | '/' | '\div') unary | power)*
//! unary  := ('-' | '+') unary | power
//! power  := atom ('^' unary)?
//! atom   := number | '(' expr ')' | '{' expr '}'
//!         | '\frac' group group | '\sqrt' group | '\pi'
//! group  := '{' expr '}' | digit
//! ```
//!
//! Juxtaposition multiplies (`2\sqrt{3}`, `3(4)`). Anything outside the
//! grammar (variables, commas, relations) is "not numeric", and so is input
//! longer than [`MAX_EXPRESSION_LEN`] or nested deeper than [`MAX_DEPTH`].

use std::f64::consts::PI;

use consensus_core::errors::EquivalenceError;

/// Longest input the evaluator looks at, in bytes.
pub const MAX_EXPRESSION_LEN: usize = 4096;

/// Deepest nesting of signs, brackets and exponents the parser follows.
pub const MAX_DEPTH: usize = 256;

enum Halt {
    NotNumeric,
    DivisionByZero,
}

type Eval = Result<f64, Halt>;

/// Evaluate `expression`; `Ok(None)` when it is not a closed numeric expression.
pub fn evaluate(expression: &str) -> Result<Option<f64>, EquivalenceError> {
    if expression.len() > MAX_EXPRESSION_LEN {
        return Ok(None);
    }
    let mut parser = Parser::new(expression);
    match parser.parse() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        Ok(_) | Err(Halt::NotNumeric) => Ok(None),
        Err(Halt::DivisionByZero) => Err(EquivalenceError::DivisionByZero {
            expression: expression.to_string(),
        }),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn parse(&mut self) -> Eval {
        if self.src.trim().is_empty() {
            return Err(Halt::NotNumeric);
        }
        let value = self.expr()?;
        self.skip_ws();
        if self.pos == self.src.len() {
            Ok(value)
        } else {
            Err(Halt::NotNumeric)
        }
    }

    fn expr(&mut self) -> Eval {
        let mut value = self.term()?;
        loop {
            if self.eat("+") {
                value += self.term()?;
            } else if self.eat("-") {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Eval {
        let mut value = self.unary()?;
        loop {
            if self.eat("*") || self.eat(r"\cdot") || self.eat(r"\times") {
                value *= self.unary()?;
            } else if self.eat("/") || self.eat(r"\div") {
                let divisor = self.unary()?;
                value = divide(value, divisor)?;
            } else if self.starts_atom() {
                value *= self.power()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Run `step` one nesting level deeper.
    fn nested(&mut self, step: fn(&mut Self) -> Eval) -> Eval {
        if self.depth >= MAX_DEPTH {
            return Err(Halt::NotNumeric);
        }
        self.depth += 1;
        let value = step(self);
        self.depth -= 1;
        value
    }

    fn unary(&mut self) -> Eval {
        self.nested(Self::signed)
    }

    fn signed(&mut self) -> Eval {
        if self.eat("-") {
            return Ok(-self.unary()?);
        }
        if self.eat("+") {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Eval {
        let base = self.atom()?;
        if self.eat("^") {
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn starts_atom(&mut self) -> bool {
        self.skip_ws();
        let rest = self.rest();
        match rest.chars().next() {
            Some(c) if c.is_ascii_digit() || c == '.' || c == '(' || c == '{' => true,
            Some('\\') => {
                rest.starts_with(r"\frac") || rest.starts_with(r"\sqrt") || rest.starts_with(r"\pi")
            }
            _ => false,
        }
    }

    fn atom(&mut self) -> Eval {
        self.nested(Self::primary)
    }

    fn primary(&mut self) -> Eval {
        if self.eat("(") {
            return self.closed_by(")");
        }
        if self.eat("{") {
            return self.closed_by("}");
        }
        if self.eat(r"\frac") {
            let numerator = self.group()?;
            let denominator = self.group()?;
            return divide(numerator, denominator);
        }
        if self.eat(r"\sqrt") {
            let radicand = self.group()?;
            if radicand < 0.0 {
                return Err(Halt::NotNumeric);
            }
            return Ok(radicand.sqrt());
        }
        if self.eat(r"\pi") {
            return Ok(PI);
        }
        self.number()
    }

    fn closed_by(&mut self, close: &str) -> Eval {
        let value = self.expr()?;
        if self.eat(close) {
            Ok(value)
        } else {
            Err(Halt::NotNumeric)
        }
    }

    fn group(&mut self) -> Eval {
        if self.eat("{") {
            return self.closed_by("}");
        }
        self.skip_ws();
        match self.rest().chars().next().and_then(|c| c.to_digit(10)) {
            Some(digit) => {
                self.pos += 1;
                Ok(f64::from(digit))
            }
            None => Err(Halt::NotNumeric),
        }
    }

    fn number(&mut self) -> Eval {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .bytes()
            .take_while(|b| b.is_ascii_digit() || *b == b'.')
            .count();
        if len == 0 {
            return Err(Halt::NotNumeric);
        }
        let value = rest[..len].parse::<f64>().map_err(|_| Halt::NotNumeric)?;
        self.pos += len;
        Ok(value)
    }
}

fn divide(numerator: f64, denominator: f64) -> Eval {
    if denominator == 0.0 {
        return Err(Halt::DivisionByZero);
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Option<f64> {
        evaluate(s).unwrap()
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(eval("4"), Some(4.0));
        assert_eq!(eval(" -2.5 "), Some(-2.5));
        assert_eq!(eval(".5"), Some(0.5));
    }

    #[test]
    fn latex_fractions_and_roots() {
        assert_eq!(eval(r"\frac{1}{2}"), Some(0.5));
        assert_eq!(eval(r"-\frac{3}{4}"), Some(-0.75));
        assert_eq!(eval(r"\frac12"), Some(0.5));
        assert_eq!(eval(r"\sqrt{16}"), Some(4.0));
        let v = eval(r"2\sqrt{3}").unwrap();
        assert!((v - 2.0 * 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn precedence_and_power() {
        assert_eq!(eval("1 + 2 * 3"), Some(7.0));
        assert_eq!(eval("(1 + 2) * 3"), Some(9.0));
        assert_eq!(eval("2^{10}"), Some(1024.0));
        assert_eq!(eval("-2^2"), Some(-4.0));
        assert_eq!(eval(r"6 \div 4"), Some(1.5));
        assert_eq!(eval(r"3 \cdot 4"), Some(12.0));
    }

    #[test]
    fn pi_multiples() {
        let v = eval(r"2\pi").unwrap();
        assert!((v - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn non_numeric_inputs() {
        assert_eq!(eval("x + 1"), None);
        assert_eq!(eval("(1, 2)"), None);
        assert_eq!(eval(""), None);
        assert_eq!(eval("1.2.3"), None);
        assert_eq!(eval(r"\sqrt{-1}"), None);
    }

    #[test]
    fn deep_nesting_is_not_numeric() {
        let signs = format!("{}1", "-".repeat(200_000));
        assert_eq!(eval(&signs), None);
        // Short enough to parse, too deep to follow.
        let signs = format!("{}1", "-".repeat(1_000));
        assert!(signs.len() < MAX_EXPRESSION_LEN);
        assert_eq!(eval(&signs), None);

        let within = format!("{}1", "-".repeat(MAX_DEPTH / 2));
        assert_eq!(eval(&within), Some(1.0));

        let parens = format!("{}1{}", "(".repeat(1_000), ")".repeat(1_000));
        assert_eq!(eval(&parens), None);
        let shallow = format!("{}1{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(eval(&shallow), Some(1.0));
    }

    #[test]
    fn overlong_input_is_not_numeric() {
        let sum = vec!["1"; MAX_EXPRESSION_LEN].join("+");
        assert_eq!(eval(&sum), None);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(matches!(
            evaluate(r"\frac{1}{0}"),
            Err(EquivalenceError::DivisionByZero { .. })
        ));
        assert!(evaluate("3/0").is_err());
    }
}

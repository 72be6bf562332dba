use std::collections::VecDeque;
use std::io::{self, BufRead};

use sequence::{ElementType, Error, Result, Value};

/// Whitespace-separated tokens, read one line at a time.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

pub fn parse_int(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("`{token}` is not an integer")))
}

pub fn parse_value(element: ElementType, token: String) -> Result<Value> {
    match element {
        ElementType::Int => parse_int(&token).map(Value::Int),
        ElementType::Double => token
            .parse()
            .map(Value::Double)
            .map_err(|_| Error::InvalidArgument(format!("`{token}` is not a number"))),
        ElementType::Str => Ok(Value::Str(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut tokens = Tokens::new("1 2\n\n  three\t4\n".as_bytes());
        let mut seen = Vec::new();
        while let Some(token) = tokens.next_token().unwrap() {
            seen.push(token);
        }
        assert_eq!(seen, ["1", "2", "three", "4"]);
    }

    #[test]
    fn discard_drops_rest_of_line() {
        let mut tokens = Tokens::new("a b c\nd\n".as_bytes());
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("a"));
        tokens.discard_line();
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("d"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn values_follow_element_type() {
        assert_eq!(parse_value(ElementType::Int, "-3".into()), Ok(Value::Int(-3)));
        assert_eq!(
            parse_value(ElementType::Double, "2.5".into()),
            Ok(Value::Double(2.5))
        );
        assert_eq!(
            parse_value(ElementType::Str, "2.5".into()),
            Ok(Value::Str("2.5".into()))
        );
        assert!(matches!(
            parse_value(ElementType::Int, "2.5".into()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(parse_value(ElementType::Double, "abc".into()).is_err());
    }
}

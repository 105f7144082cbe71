/// ## A resolved console token
///
/// The interpreter only ever sees these. Turning raw serial text into
/// tokens is the caller's business; `Token::resolve` is the resolver
/// the terminal front end uses.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(i32),
    Word(String),
}

impl Token {
    /// Decimal (`-12`), or hex with a `0x` or `$` prefix. Hex values up
    /// to `0xffffffff` are taken as raw 32-bit patterns so addresses in
    /// the upper half of the map can be typed directly.
    /// Anything that is not a number is a word.
    pub fn resolve(s: &str) -> Token {
        match parse_literal(s) {
            Some(n) => Token::Literal(n),
            None => Token::Word(s.to_string()),
        }
    }
}

pub fn tokens(line: &str) -> Vec<Token> {
    line.split_whitespace().map(Token::resolve).collect()
}

fn parse_literal(s: &str) -> Option<i32> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let hex = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .or_else(|| digits.strip_prefix('$'));
    let value = match hex {
        Some(h) => {
            if h.is_empty() || !h.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            u32::from_str_radix(h, 16).ok()? as i32
        }
        None => {
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            if negative {
                return s.parse::<i32>().ok();
            }
            digits.parse::<i32>().ok()?
        }
    };
    if negative {
        Some(value.wrapping_neg())
    } else {
        Some(value)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Literal(n) => write!(f, "{}", n),
            Token::Word(s) => write!(f, "{}", s),
        }
    }
}

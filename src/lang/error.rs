pub struct Error {
    code: u16,
    word: Option<String>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $word:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_word($word)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $word:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_word($word)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            word: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Attach the command that raised the error. The first word sticks,
    /// so handlers can name themselves and the dispatcher won't overwrite.
    pub fn in_word(self, word: &str) -> Error {
        if self.word.is_some() {
            return self;
        }
        Error {
            code: self.code,
            word: Some(word.to_string()),
            message: self.message,
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            word: self.word,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    IllegalFunctionCall = 5,
    Overflow = 6,
    StackOverflow = 7,
    DivisionByZero = 11,
    StackUnderflow = 22,
    UnknownCommand = 24,
    AddressOutOfRange = 25,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "STACK OVERFLOW",
            11 => "DIVISION BY ZERO",
            22 => "STACK UNDERFLOW",
            24 => "UNKNOWN COMMAND",
            25 => "ADDRESS OUT OF RANGE",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(word) = &self.word {
            suffix.push_str(&format!(" {}", word));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

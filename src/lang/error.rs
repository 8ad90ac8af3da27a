use super::Position;

pub struct Error {
    code: u16,
    position: Option<Position>,
    character: Option<char>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_position($pos)
    };
    ($err:ident, $pos:expr, $ch:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .with_char($ch)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .message($msg)
    };
    ($err:ident, $pos:expr, $ch:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .with_char($ch)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            position: None,
            character: None,
            message: "",
        }
    }

    pub fn at_position(&self, position: Position) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            code: self.code,
            position: Some(position),
            character: self.character,
            message: self.message,
        }
    }

    pub fn with_char(&self, character: char) -> Error {
        debug_assert!(self.character.is_none());
        Error {
            code: self.code,
            position: self.position,
            character: Some(character),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            position: self.position,
            character: self.character,
            message,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Process exit status for this error. Resource exhaustion is the one
    /// condition with its own status.
    pub fn exit_code(&self) -> i32 {
        if self.code == ErrorCode::OutOfMemory as u16 {
            2
        } else {
            1
        }
    }
}

pub enum ErrorCode {
    SyntaxError = 1,
    UnclosedLiteral = 2,
    UnmatchedDelimiter = 3,
    StackUnderflow = 4,
    DivisionByZero = 5,
    Interrupted = 6,
    OutOfMemory = 7,
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
            1 => "syntax error",
            2 => "unclosed literal",
            3 => "unmatched delimiter",
            4 => "stack is empty",
            5 => "division by zero",
            6 => "interrupted",
            7 => "out of memory",
            51 => "internal error",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(character) = self.character {
            suffix.push_str(&format!(" ('{}')", character));
        }
        if let Some(position) = self.position {
            suffix.push_str(&format!(" at position {}", position));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "program error {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// what went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// checked division by zero scalar
    DivisionByZero,
}

#[derive(Debug)]
pub struct VectorError {
    kind: ErrorKind,
    err: String,
}

impl VectorError {
    pub fn new(kind: ErrorKind, err: &str) -> VectorError {
        VectorError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError::{:?}]: {}", self.kind, self.err)
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! vec_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::vec_error::VectorError::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

use crate::vec_error::{ErrorKind, VectorError};

/// mathmatic 2d vector
///
/// Value type: every operation returns a new vector, the receiver is never changed.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

/// shared zero vector
pub const ZERO: Vector2D = Vector2D::ZERO;

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// absent component is 0
    pub fn from_optional(x: Option<f64>, y: Option<f64>) -> Self {
        Vector2D {
            x: x.unwrap_or(0.0),
            y: y.unwrap_or(0.0),
        }
    }

    /// euclidean norm, no intermediate overflow or underflow
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    /// `self - other`
    pub fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    /// Divide both components by `n`.
    ///
    /// Zero `n` follows IEEE-754: components become inf or NaN. Use
    /// [`Vector2D::checked_div`] to get an error instead.
    pub fn div(self, n: f64) -> Vector2D {
        Vector2D::new(self.x / n, self.y / n)
    }

    pub fn checked_div(self, n: f64) -> Result<Vector2D, VectorError> {
        if n == 0.0 {
            return Err(vec_err!(
                ErrorKind::DivisionByZero,
                &format!("divide vector {} by zero", self)
            ));
        }
        Ok(self.div(n))
    }

    /// component-wise product, not dot product
    pub fn mult(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x * other.x, self.y * other.y)
    }

    pub fn scale(self, n: f64) -> Vector2D {
        Vector2D::new(self.x * n, self.y * n)
    }

    pub fn distance(self, other: Vector2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Unit vector in the same direction, zero vector stays zero.
    ///
    /// Non-finite components are not special-cased: an infinite component
    /// turns into NaN (`inf / inf`), NaN stays NaN.
    pub fn normalized(self) -> Vector2D {
        let len = self.length();
        if len == 0.0 {
            ZERO
        } else {
            self.div(len)
        }
    }
}

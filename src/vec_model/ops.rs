use super::*;
use float_cmp::{ApproxEq, F64Margin};
use std::fmt::{Display, Formatter};
use std::ops;

impl ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl ops::Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::sub(self, rhs)
    }
}

impl ops::Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

/// scale
impl ops::Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        self.scale(rhs)
    }
}

/// component-wise product
impl ops::Mul for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        self.mult(rhs)
    }
}

impl ops::Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::div(self, rhs)
    }
}

impl ApproxEq for Vector2D {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D { x, y }
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2D { x, y }
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}

#[cfg(test)]
mod test_ops {
    use super::*;

    #[test]
    fn test_operators() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, -4.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(-a, Vector2D::new(-1.0, -2.0));
        assert_eq!(a * 2.5, a.scale(2.5));
        assert_eq!(a * b, Vector2D::new(3.0, -8.0));
        assert_eq!(b / 2.0, Vector2D::new(1.5, -2.0));
    }

    #[test]
    fn test_approx_eq() {
        let a = Vector2D::new(0.1 + 0.2, 1.0);
        let b = Vector2D::new(0.3, 1.0);
        assert_ne!(a, b);
        assert!(a.approx_eq(b, F64Margin::default()));
        assert!(!a.approx_eq(Vector2D::new(0.3, 1.001), F64Margin::default()));
        assert!(a.approx_eq(Vector2D::new(0.3, 1.001), (0.01, 0)));
    }

    #[test]
    fn test_display_and_from() {
        assert_eq!(Vector2D::new(3.0, -0.5).to_string(), "(3, -0.5)");
        assert_eq!(Vector2D::from((1.0, 2.0)), Vector2D::new(1.0, 2.0));
        assert_eq!(Vector2D::from([1.0, 2.0]), Vector2D::new(1.0, 2.0));
        let t: (f64, f64) = Vector2D::new(5.0, 6.0).into();
        assert_eq!(t, (5.0, 6.0));
    }
}

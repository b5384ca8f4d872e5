mod ops;
mod vector;

pub use self::vector::*;

//! `element` defines the runtime tags used to describe the scalar type
//! stored in a tensor, and the `Element` trait that links Rust scalar
//! types to their tag.
//!
//! Tags are what a `Schema` carries: they let a table allocate a column
//! of the right concrete type without knowing it at compile time.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime tag of the scalar type stored in a tensor.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementType {
    Bool,
    Uint8,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Bool => "Bool",
            ElementType::Uint8 => "Uint8",
            ElementType::Int32 => "Int32",
            ElementType::Int64 => "Int64",
            ElementType::Float32 => "Float32",
            ElementType::Float64 => "Float64",
            ElementType::String => "String",
        };
        f.write_str(name)
    }
}

/// Scalar types that can be stored in a `Tensor`.
///
/// `Default` provides the value of freshly allocated or appended rows.
pub trait Element: Clone + Default + Send + Sync + 'static {
    const TYPE: ElementType;
}

macro_rules! impl_element {
    ($($t:ty => $tag:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const TYPE: ElementType = ElementType::$tag;
            }
        )*
    };
}

impl_element!(
    bool => Bool,
    u8 => Uint8,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => String,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(<f32 as Element>::TYPE, ElementType::Float32);
        assert_eq!(<String as Element>::TYPE, ElementType::String);
        assert_eq!(<u8 as Element>::TYPE, ElementType::Uint8);
    }

    #[test]
    fn display() {
        assert_eq!(ElementType::Float64.to_string(), "Float64");
        assert_eq!(ElementType::Bool.to_string(), "Bool");
    }
}

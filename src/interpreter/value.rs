use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// The tag records whether a value is an integer or a float, so no
/// speculative casting is ever needed when storing or reading it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A floating-point value. Produced by literals such as `1.5` and by
    /// every binary operation.
    Float(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(v: LiteralValue) -> Self {
        match v {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Float(r) => Self::Float(r),
        }
    }
}

impl Value {
    /// Promotes the value to `f64`.
    ///
    /// Integers beyond 2^53 lose precision, the same as any host
    /// integer-to-double conversion.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float(), 10.0);
    /// assert_eq!(Value::Float(2.5).as_float(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(r) => r,
        }
    }

    /// The name of the builtin type this value belongs to.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Integer(_) => "Int",
            Self::Float(_) => "Float",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:?}"),
        }
    }
}

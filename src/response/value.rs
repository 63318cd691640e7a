//! Classification of caller values into response shapes.
//!
//! # Responsibilities
//! - Define the closed set of value shapes the formatter handles
//! - Convert common Rust and JSON values into that set
//!
//! # Design Decisions
//! - Classification happens once, at construction; the formatter pattern
//!   matches exhaustively instead of probing run-time shape
//! - `Callable` carries no payload: it exists to mark "caller tried to
//!   return executable code as data" and is only reachable by constructing
//!   it deliberately
//! - `serde_json::Value::Null` and `Option::None` both classify as `Absent`

use serde_json::Value;

use crate::error::{ErrorLike, HttpError};

/// A caller value classified by response shape.
#[derive(Debug)]
pub enum ResponseValue {
    /// Error-shaped value; rendered with a `{"message": ...}` body.
    Error(Box<dyn ErrorLike + Send + Sync>),

    /// Structured value; rendered as its JSON encoding.
    Object(Value),

    /// Boolean, numeric, or string value; rendered as plain text.
    Literal(Literal),

    /// No value at all.
    Absent,

    /// Executable code passed where data was expected.
    Callable,
}

impl ResponseValue {
    /// Classify any error-capable value.
    pub fn error(err: impl ErrorLike + Send + Sync + 'static) -> Self {
        ResponseValue::Error(Box::new(err))
    }
}

/// A value rendered as its plain-text representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

impl From<Value> for ResponseValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ResponseValue::Absent,
            Value::Bool(b) => ResponseValue::Literal(Literal::Bool(b)),
            Value::Number(n) => ResponseValue::Literal(Literal::Number(n)),
            Value::String(s) => ResponseValue::Literal(Literal::Text(s)),
            structured => ResponseValue::Object(structured),
        }
    }
}

impl From<HttpError> for ResponseValue {
    fn from(err: HttpError) -> Self {
        ResponseValue::error(err)
    }
}

impl From<Literal> for ResponseValue {
    fn from(lit: Literal) -> Self {
        ResponseValue::Literal(lit)
    }
}

impl From<bool> for ResponseValue {
    fn from(b: bool) -> Self {
        ResponseValue::Literal(Literal::Bool(b))
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::Literal(Literal::Text(s.to_string()))
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        ResponseValue::Literal(Literal::Text(s))
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ResponseValue {
            fn from(n: $ty) -> Self {
                ResponseValue::Literal(Literal::Number(n.into()))
            }
        })*
    };
}

from_int!(i32, i64, u16, u32, u64);

impl From<f64> for ResponseValue {
    fn from(n: f64) -> Self {
        // NaN / infinities have no JSON representation
        match serde_json::Number::from_f64(n) {
            Some(n) => ResponseValue::Literal(Literal::Number(n)),
            None => ResponseValue::Absent,
        }
    }
}

impl<T> From<Option<T>> for ResponseValue
where
    T: Into<ResponseValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => ResponseValue::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_value_classification() {
        assert!(matches!(ResponseValue::from(json!(null)), ResponseValue::Absent));
        assert!(matches!(
            ResponseValue::from(json!(true)),
            ResponseValue::Literal(Literal::Bool(true))
        ));
        assert!(matches!(
            ResponseValue::from(json!(1)),
            ResponseValue::Literal(Literal::Number(_))
        ));
        assert!(matches!(
            ResponseValue::from(json!("hi")),
            ResponseValue::Literal(Literal::Text(_))
        ));
        assert!(matches!(
            ResponseValue::from(json!({"hello": "world"})),
            ResponseValue::Object(_)
        ));
        assert!(matches!(ResponseValue::from(json!([1, 2])), ResponseValue::Object(_)));
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Bool(false).to_string(), "false");
        assert_eq!(Literal::Number(1.into()).to_string(), "1");
        assert_eq!(Literal::Text("hello world!".into()).to_string(), "hello world!");
    }

    #[test]
    fn test_option_classification() {
        assert!(matches!(ResponseValue::from(None::<bool>), ResponseValue::Absent));
        assert!(matches!(
            ResponseValue::from(Some("x")),
            ResponseValue::Literal(Literal::Text(_))
        ));
    }

    #[test]
    fn test_non_finite_float_is_absent() {
        assert!(matches!(ResponseValue::from(f64::NAN), ResponseValue::Absent));
        assert!(matches!(ResponseValue::from(f64::INFINITY), ResponseValue::Absent));
    }
}

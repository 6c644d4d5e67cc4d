//! Query options for API operations.
//!
//! Every operation accepts an [`Options`] mapping that is forwarded
//! verbatim as URL query parameters. The client performs no validation
//! of parameter names or value ranges; invalid combinations are rejected
//! by the remote service.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value, serialized as `true`/`false`.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Ordered collection of query parameters.
///
/// Keys may repeat; the Echo Nest API accepts multiple `bucket` or
/// `license` parameters on the same request. Insertion order is
/// preserved in the outgoing query string.
///
/// # Example
///
/// ```rust
/// use echonest::Options;
///
/// let options = Options::new()
///     .set("id", "ARH6W4X1187B99274F")
///     .set("results", 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    params: Vec<(String, ParamValue)>,
}

impl Options {
    /// Create an empty options mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, consuming and returning `self` for chaining.
    pub fn set<K: Into<String>, V: Into<ParamValue>>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// True if no parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of parameters, counting repeated keys separately.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Render as `(key, value)` string pairs for the query string.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_preserve_insertion_order() {
        let options = Options::new()
            .set("name", "radiohead")
            .set("results", 15)
            .set("start", 0);

        let query = options.to_query();
        assert_eq!(
            query,
            vec![
                ("name".to_string(), "radiohead".to_string()),
                ("results".to_string(), "15".to_string()),
                ("start".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_options_allow_repeated_keys() {
        let options = Options::new()
            .set("bucket", "familiarity")
            .set("bucket", "hotttnesss");

        let query = options.to_query();
        assert_eq!(query.len(), 2);
        assert!(query.iter().all(|(k, _)| k == "bucket"));
    }

    #[test]
    fn test_param_value_rendering() {
        assert_eq!(ParamValue::from("a").to_string(), "a");
        assert_eq!(ParamValue::from(42).to_string(), "42");
        assert_eq!(ParamValue::from(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_empty_options() {
        let options = Options::new();
        assert!(options.is_empty());
        assert_eq!(options.len(), 0);
        assert!(options.to_query().is_empty());
    }
}

//! API operations, grouped by resource.
//!
//! Each operation maps 1:1 to a remote GET endpoint. The endpoint tables
//! in the resource modules are declarative data; all request and
//! deserialization behavior lives in [`crate::client::EchonestApi`].

pub mod artist;

/// Whether an endpoint yields a single result object or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One result per element of the envelope array.
    List,
    /// Exactly one result from a single envelope object.
    Single,
}

/// One row of an endpoint table: a remote operation and where its
/// payload lives in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Symbolic operation name, e.g. "artist/biographies".
    pub name: &'static str,
    /// HTTP path under the API base URL.
    pub path: &'static str,
    /// Key under the `response` envelope holding the payload.
    pub envelope_key: &'static str,
    /// Payload arity.
    pub arity: Arity,
}

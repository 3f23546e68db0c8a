//! The seam between the engine and the HTTP transport

use crate::error::Result;
use serde_json::Value;

/// Something that can answer `GET {host}{path}?{query}` with a JSON body.
///
/// Implementations authenticate every request and must turn any non-2xx
/// response into [`ReportError::Transport`](crate::ReportError::Transport).
/// The engine issues one request at a time and never retries.
pub trait JsonSource {
    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value>;
}

impl<T: JsonSource + ?Sized> JsonSource for &T {
    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        (**self).get_json(path, query)
    }
}

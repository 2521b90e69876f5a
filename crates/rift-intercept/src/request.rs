//! Request options and diagnostic rendering.
//!
//! When no registered interceptor matches, the registration layer reports the
//! performed request as pretty JSON. The rendering is byte-deterministic so it
//! can be compared against snapshots.

use crate::headers::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

const DEFAULT_PROTO: &str = "http";

/// Options of an intercepted outbound request.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    pub method: String,

    /// "http" or "https"; defaults to "http"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proto: Option<String>,

    #[serde(default)]
    pub hostname: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub headers: HeaderMap,

    /// `hostname[:port]` as sent in the Host header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl RequestOptions {
    pub fn proto(&self) -> &str {
        self.proto.as_deref().unwrap_or(DEFAULT_PROTO)
    }

    /// Explicit port, or the default port of the protocol.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| default_port(self.proto()))
    }

    /// Full request URL: `{proto}://{hostname}:{port}{path}`.
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.proto(),
            self.hostname,
            self.port(),
            self.path
        )
    }

    /// Fill in protocol, port, hostname and host.
    ///
    /// A missing hostname is taken from `host` (dropping its port), then falls
    /// back to `localhost`. `host` carries the port only when it is not the
    /// protocol's default.
    pub fn normalized(mut self) -> Self {
        let proto = self.proto().to_string();

        if self.hostname.is_empty() {
            if let Some(host) = self.host.as_deref() {
                let (name, port) = split_host(host);
                self.hostname = name.to_string();
                if self.port.is_none() {
                    self.port = port;
                }
            }
        }
        if self.hostname.is_empty() {
            self.hostname = "localhost".to_string();
        }

        let port = self.port.unwrap_or_else(|| default_port(&proto));
        self.host = Some(if port == default_port(&proto) {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, port)
        });
        self.port = Some(port);
        self.proto = Some(proto);
        self
    }
}

fn default_port(proto: &str) -> u16 {
    if proto == "https" {
        443
    } else {
        80
    }
}

fn split_host(host: &str) -> (&str, Option<u16>) {
    match host.rsplit_once(':') {
        Some((name, port)) => match port.parse() {
            Ok(port) => (name, Some(port)),
            Err(_) => (host, None),
        },
        None => (host, None),
    }
}

#[derive(Serialize)]
struct RenderedRequest<'a> {
    method: &'a str,
    url: String,
    headers: &'a HeaderMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a Value>,
}

/// Render a performed request as pretty JSON with two-space indentation.
///
/// Fields are always ordered `method`, `url`, `headers`, `body`; `body` is
/// omitted when absent or null.
pub fn stringify_request(options: &RequestOptions, body: Option<&Value>) -> String {
    let rendered = RenderedRequest {
        method: &options.method,
        url: options.url(),
        headers: &options.headers,
        body: body.filter(|b| !b.is_null()),
    };
    serde_json::to_string_pretty(&rendered).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to render request");
        String::new()
    })
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

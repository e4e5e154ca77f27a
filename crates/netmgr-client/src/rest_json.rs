// crates/netmgr-client/src/rest_json.rs
// ============================================================================
// Module: REST-JSON Transport
// Description: Signed HTTPS transport for the Network Manager REST-JSON API.
// Purpose: Render bound requests onto the wire and decode service responses.
// Dependencies: aws-config, aws-credential-types, aws-sigv4, reqwest, url
// ============================================================================

//! ## Overview
//! [`RestJsonTransport`] expands URI labels, appends query parameters,
//! serializes the JSON body, signs the call with `SigV4`, and enforces a
//! response size limit. Credentials and the region are resolved lazily on the
//! first call from the ambient AWS configuration chain.
//! Invariants:
//! - Redirects are never followed.
//! - Response bodies larger than the configured limit are rejected unread.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;
use std::time::SystemTime;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_sigv4::http_request::SignableBody;
use aws_sigv4::http_request::SignableRequest;
use aws_sigv4::http_request::SigningParams;
use aws_sigv4::http_request::SigningSettings;
use aws_sigv4::http_request::sign;
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use netmgr_config::ClientConfig;
use netmgr_config::config::DEFAULT_REGION;
use netmgr_core::HttpMethod;
use netmgr_core::Request;
use netmgr_core::Response;
use reqwest::Client;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use serde_json::Map;
use serde_json::Value;
use tokio::sync::OnceCell;
use url::Url;

use crate::error::ServiceError;
use crate::error::is_name_resolution_failure;
use crate::transport::ServiceTransport;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// `SigV4` signing name of the service.
pub const SIGNING_NAME: &str = "networkmanager";
/// Header carrying the service error type.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
/// Header carrying the service request identifier.
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";
/// Maximum characters of a raw error body kept as a message.
const MAX_RAW_MESSAGE_CHARS: usize = 512;
/// Client user agent.
const USER_AGENT: &str = concat!("netmgr/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Transport settings derived from client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    /// Pinned signing region.
    pub region: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Named AWS profile.
    pub profile: Option<String>,
    /// Per-call timeout.
    pub timeout: Duration,
    /// Maximum response body size in bytes.
    pub max_response_bytes: usize,
}

impl TransportSettings {
    /// Builds settings from validated client configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
            profile: config.profile.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            max_response_bytes: config.max_response_bytes,
        }
    }
}

/// Resolved signing inputs.
#[derive(Debug)]
struct SigningContext {
    /// Credentials provider; caches on its own.
    credentials: SharedCredentialsProvider,
    /// Signing region.
    region: String,
    /// Service endpoint base URL.
    endpoint: Url,
}

// ============================================================================
// SECTION: Transport
// ============================================================================

/// Signed REST-JSON transport over `reqwest`.
#[derive(Debug)]
pub struct RestJsonTransport {
    /// HTTP client.
    http: Client,
    /// Transport settings.
    settings: TransportSettings,
    /// Lazily resolved signing inputs.
    signing: OnceCell<SigningContext>,
}

impl RestJsonTransport {
    /// Creates a transport resolving credentials from the ambient AWS chain on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] when the HTTP client cannot be built.
    pub fn new(settings: TransportSettings) -> Result<Self, ServiceError> {
        Ok(Self {
            http: build_http_client(settings.timeout)?,
            settings,
            signing: OnceCell::new(),
        })
    }

    /// Creates a transport signing with fixed credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] when the HTTP client cannot be built or
    /// the endpoint is invalid.
    pub fn with_credentials(
        settings: TransportSettings,
        credentials: Credentials,
    ) -> Result<Self, ServiceError> {
        let region = settings.region.clone().unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint = resolve_endpoint(settings.endpoint.as_deref(), &region)?;
        let context = SigningContext {
            credentials: SharedCredentialsProvider::new(credentials),
            region,
            endpoint,
        };
        Ok(Self {
            http: build_http_client(settings.timeout)?,
            settings,
            signing: OnceCell::new_with(Some(context)),
        })
    }

    /// Returns the signing inputs, loading them on first use.
    async fn signing_context(&self) -> Result<&SigningContext, ServiceError> {
        self.signing.get_or_try_init(|| load_signing_context(&self.settings)).await
    }

    /// Maps a `reqwest` send failure onto the service error taxonomy.
    fn classify_send_error(&self, err: reqwest::Error, url: &Url) -> ServiceError {
        if err.is_timeout() {
            let millis = u64::try_from(self.settings.timeout.as_millis()).unwrap_or(u64::MAX);
            return ServiceError::Timeout(millis);
        }
        if is_name_resolution_failure(&err) {
            return ServiceError::NameResolution {
                host: url.host_str().unwrap_or_default().to_string(),
                source: Box::new(err),
            };
        }
        ServiceError::Transport(err.to_string())
    }
}

#[async_trait]
impl ServiceTransport for RestJsonTransport {
    async fn send(&self, request: &Request) -> Result<Response, ServiceError> {
        let context = self.signing_context().await?;
        let url = build_url(&context.endpoint, request)?;
        let has_body = request.has_body();
        let body = if has_body {
            serde_json::to_vec(&request.body)
                .map_err(|err| ServiceError::Protocol(format!("request encoding failed: {err}")))?
        } else {
            Vec::new()
        };
        let mut headers = Vec::new();
        if has_body {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        let credentials = context
            .credentials
            .provide_credentials()
            .await
            .map_err(|err| ServiceError::Credentials(err.to_string()))?;
        let signed =
            signature_headers(request.method, &url, &headers, &body, credentials, &context.region)?;

        tracing::debug!(
            operation = %request.operation,
            method = request.method.as_str(),
            url = %url,
            "sending service request"
        );
        let mut builder = self.http.request(reqwest_method(request.method), url.clone());
        for (name, value) in headers.iter().chain(signed.iter()) {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if has_body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(|err| self.classify_send_error(err, &url))?;

        let status = response.status();
        let request_id = header_text(response.headers(), REQUEST_ID_HEADER);
        let error_type = header_text(response.headers(), ERROR_TYPE_HEADER);
        let bytes =
            read_response_body_with_limit(response, self.settings.max_response_bytes).await?;
        if !status.is_success() {
            return Err(rejected(status.as_u16(), error_type, &bytes, request_id));
        }
        let body = parse_body(&bytes)?;
        tracing::debug!(
            operation = %request.operation,
            status = status.as_u16(),
            request_id = request_id.as_deref().unwrap_or(""),
            "service request succeeded"
        );
        Ok(Response::new(&request.operation, body).with_request_id(request_id))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the HTTP client used for every call.
fn build_http_client(timeout: Duration) -> Result<Client, ServiceError> {
    Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| ServiceError::Config(err.to_string()))
}

/// Loads region and credentials from the ambient AWS configuration chain.
async fn load_signing_context(
    settings: &TransportSettings,
) -> Result<SigningContext, ServiceError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;
    let credentials = sdk_config.credentials_provider().ok_or_else(|| {
        ServiceError::Credentials("no AWS credentials provider is configured".to_string())
    })?;
    let region = settings
        .region
        .clone()
        .or_else(|| sdk_config.region().map(ToString::to_string))
        .unwrap_or_else(|| DEFAULT_REGION.to_string());
    let endpoint = resolve_endpoint(settings.endpoint.as_deref(), &region)?;
    tracing::debug!(region = %region, endpoint = %endpoint, "resolved service endpoint");
    Ok(SigningContext {
        credentials,
        region,
        endpoint,
    })
}

/// Returns the endpoint override or the regional default endpoint.
///
/// # Errors
///
/// Returns [`ServiceError::Config`] when the endpoint is not a valid base URL.
pub fn resolve_endpoint(endpoint: Option<&str>, region: &str) -> Result<Url, ServiceError> {
    let text = endpoint.map_or_else(
        || format!("https://{SIGNING_NAME}.{region}.amazonaws.com"),
        ToString::to_string,
    );
    let url = Url::parse(&text)
        .map_err(|err| ServiceError::Config(format!("invalid endpoint {text}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ServiceError::Config(format!("endpoint {text} cannot be a base url")));
    }
    Ok(url)
}

/// Expands the request path and query onto the endpoint.
///
/// # Errors
///
/// Returns [`ServiceError::Config`] when a URI label has no value or a
/// label value is `.` or `..`, which would rewrite the route.
pub fn build_url(endpoint: &Url, request: &Request) -> Result<Url, ServiceError> {
    let segments = request.path_segments().ok_or_else(|| {
        ServiceError::Config(format!("unbound uri label in {}", request.uri))
    })?;
    if let Some(segment) = segments.iter().find(|segment| matches!(segment.as_str(), "." | "..")) {
        return Err(ServiceError::Config(format!(
            "path segment {segment:?} in {} would change the route",
            request.uri
        )));
    }
    let mut url = endpoint.clone();
    url.set_query(None);
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| ServiceError::Config("endpoint cannot be a base url".to_string()))?;
        path.pop_if_empty();
        for segment in &segments {
            path.push(segment);
        }
    }
    if !request.query.is_empty() {
        let query = request
            .query
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| format!("{}={}", encode(key), encode(value)))
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }
    Ok(url)
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Computes the `SigV4` headers for a call.
fn signature_headers(
    method: HttpMethod,
    url: &Url,
    headers: &[(String, String)],
    body: &[u8],
    credentials: Credentials,
    region: &str,
) -> Result<Vec<(String, String)>, ServiceError> {
    let identity: Identity = credentials.into();
    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(region)
        .name(SIGNING_NAME)
        .time(SystemTime::now())
        .settings(SigningSettings::default())
        .build()
        .map_err(|err| ServiceError::Credentials(err.to_string()))?
        .into();
    let signable = SignableRequest::new(
        method.as_str(),
        url.as_str(),
        headers.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        SignableBody::Bytes(body),
    )
    .map_err(|err| ServiceError::Credentials(format!("request signing failed: {err}")))?;
    let (instructions, _signature) = sign(signable, &params)
        .map_err(|err| ServiceError::Credentials(format!("request signing failed: {err}")))?
        .into_parts();
    Ok(instructions.headers().map(|(name, value)| (name.to_string(), value.to_string())).collect())
}

/// Maps the descriptor method onto `reqwest`.
fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Returns a header value as text.
fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_string)
}

/// Reads a response body while enforcing a hard size limit.
async fn read_response_body_with_limit(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, ServiceError> {
    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > limit {
            return Err(ServiceError::ResponseTooLarge {
                actual: length,
                limit,
            });
        }
    }
    let mut body = Vec::new();
    let mut total: usize = 0;
    while let Some(chunk) =
        response.chunk().await.map_err(|err| ServiceError::Transport(err.to_string()))?
    {
        let next_total = total.checked_add(chunk.len()).ok_or(ServiceError::ResponseTooLarge {
            actual: usize::MAX,
            limit,
        })?;
        if next_total > limit {
            return Err(ServiceError::ResponseTooLarge {
                actual: next_total,
                limit,
            });
        }
        body.extend_from_slice(&chunk);
        total = next_total;
    }
    Ok(body)
}

/// Decodes a success body; an empty body is an empty response.
fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, ServiceError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ServiceError::Protocol("response body is not a json object".to_string())),
        Err(err) => Err(ServiceError::Protocol(format!("invalid response json: {err}"))),
    }
}

/// Builds a rejection from an error response.
fn rejected(
    status: u16,
    error_type: Option<String>,
    body: &[u8],
    request_id: Option<String>,
) -> ServiceError {
    let parsed = serde_json::from_slice::<Value>(body).ok();
    let member = |names: &[&str]| {
        parsed.as_ref().and_then(Value::as_object).and_then(|object| {
            names.iter().find_map(|name| object.get(*name).and_then(Value::as_str))
        })
    };
    let code = error_type
        .as_deref()
        .or_else(|| member(&["__type", "code", "Code"]))
        .map_or_else(|| format!("Http{status}"), normalize_error_code);
    let message = member(&["message", "Message"]).map_or_else(
        || String::from_utf8_lossy(body).trim().chars().take(MAX_RAW_MESSAGE_CHARS).collect(),
        str::to_string,
    );
    ServiceError::Rejected {
        status,
        code,
        message,
        request_id,
    }
}

/// Strips namespace and URL decorations from an error code.
///
/// `aws.protocoljson#ValidationException:http://internal` becomes
/// `ValidationException`.
#[must_use]
pub fn normalize_error_code(raw: &str) -> String {
    let without_url = raw.split(':').next().unwrap_or(raw);
    without_url.rsplit('#').next().unwrap_or(without_url).trim().to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;

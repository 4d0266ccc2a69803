use thiserror::Error;

/// ApiError
///
/// The single error surface for every call that leaves the console. Server-side
/// failures are mapped from the response status once, here, so the API wrapper
/// functions and the shell never inspect raw status codes themselves.
///
/// The **Unauthorized** variant is special: by the time a caller sees it, the
/// session has already been purged and navigation forced back to the sign-in
/// screen. Callers only need to report it, never act on it.
#[derive(Debug, Error)]
pub enum ApiError {
    // 401. Session already cleared by the time this surfaces.
    #[error("session expired or invalid, please sign in again")]
    Unauthorized,
    // 403. Carries the server's own message verbatim; the session stays intact.
    #[error("{0}")]
    Forbidden(String),
    // 404. Carries the server's own message verbatim.
    #[error("{0}")]
    NotFound(String),
    // Any other non-success status the server responded with.
    #[error("server rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
    // The request never completed (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    // A 2xx response whose body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

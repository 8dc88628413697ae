//! The seam between the I/O-free core and whoever performs HTTP.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one request and returns the response as data.
///
/// Implementations must return non-2xx responses as `Ok`; only failures to
/// obtain any response at all map to `ApiError::Transport`.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

//! Kernelspecs API operations.

use crate::api::error::ApiError;
use crate::api::http;
use crate::config::{API_BASE_URL, cache as cache_keys};
use crate::models::KernelSpecsResponse;
use crate::utils::cache;

/// List kernel specifications, with sessionStorage caching.
///
/// The listing only changes when kernels are installed server-side, so a
/// session-scoped cache keeps launcher remounts cheap. Cache writes are
/// best-effort.
pub async fn list() -> Result<KernelSpecsResponse, ApiError> {
    if let Some(cached) = cache::get::<KernelSpecsResponse>(cache_keys::KERNELSPECS_KEY) {
        return Ok(cached);
    }

    let url = format!("{}/api/kernelspecs", API_BASE_URL);
    let resp: KernelSpecsResponse = http::fetch_json(&url).await?;

    let _ = cache::set(cache_keys::KERNELSPECS_KEY, &resp);

    Ok(resp)
}

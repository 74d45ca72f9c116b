pub mod demand;

use common::ErrorResponse;
use dashboard::ApiError;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use web_sys::AbortController;

use crate::settings;

// API base is retrieved from settings on every call so overrides apply without reload
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Attaches a fresh abort signal to the request so a timeout can cancel it.
fn abortable(builder: RequestBuilder) -> (RequestBuilder, Option<AbortController>) {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    (builder.abort_signal(signal.as_ref()), controller)
}

/// Races `request` against the configured request timeout.
async fn with_timeout<T, F>(
    method: &str,
    endpoint: &str,
    abort: Option<AbortController>,
    request: F,
) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let timeout_ms = settings::get_settings().request_timeout_ms;
    let request = Box::pin(request);
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            if let Some(abort) = abort {
                abort.abort();
            }
            let err = ApiError::Timeout(timeout_ms);
            log::error!("{} {} - {}", method, endpoint, err);
            Err(err)
        }
    }
}

async fn read_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        let error_response: Result<ErrorResponse, _> = response.json().await;
        let err = match error_response {
            Ok(body) => ApiError::Server {
                status,
                message: body.error,
            },
            Err(_) => ApiError::Status(status),
        };
        log::error!("{} {} - {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data: T = response.json().await.map_err(|e| {
        let err = ApiError::Parse(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

fn request_failed(method: &str, endpoint: &str, e: gloo_net::Error) -> ApiError {
    let err = ApiError::Network(e.to_string());
    log::error!("{} {} - {}", method, endpoint, err);
    err
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let (builder, abort) = abortable(Request::get(&url));

    with_timeout("GET", endpoint, abort, async {
        let response = builder
            .send()
            .await
            .map_err(|e| request_failed("GET", endpoint, e))?;
        read_json("GET", endpoint, response).await
    })
    .await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let (builder, abort) = abortable(Request::post(&url));
    let request = builder.json(body).map_err(|e| {
        let err = ApiError::Encode(e.to_string());
        log::error!("POST {} - {}", endpoint, err);
        err
    })?;

    with_timeout("POST", endpoint, abort, async {
        let response = request
            .send()
            .await
            .map_err(|e| request_failed("POST", endpoint, e))?;
        read_json("POST", endpoint, response).await
    })
    .await
}

use lambda_http::{Body, Error, Response, http::StatusCode};
use model_udagram::error_response::ErrorResponse;
use serde::Serialize;
use udagram::domain::models::GalleryErr;

pub(crate) const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// A json response, every route allows any origin
pub(crate) fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(body)?;

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))?)
}

pub(crate) fn error(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json(status, &ErrorResponse { error: message })
}

/// Maps a domain failure to its status code.
/// Internal errors are logged and their details withheld from the caller.
pub(crate) fn gallery_err(err: GalleryErr) -> Result<Response<Body>, Error> {
    match err {
        GalleryErr::GroupNotFound | GalleryErr::ImageNotFound => {
            error(StatusCode::NOT_FOUND, &err.to_string())
        }
        GalleryErr::InvalidRequest(msg) => error(StatusCode::BAD_REQUEST, &msg),
        GalleryErr::Internal(e) => {
            tracing::error!(error = ?e, "request failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
        }
    }
}

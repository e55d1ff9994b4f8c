use lambda_http::{Body, Error, Request, RequestExt, Response, http::StatusCode};
use model_udagram::{
    error_response::{ItemsResponse, NewItemResponse},
    group::NewGroup,
    image::NewImage,
};
use serde::de::DeserializeOwned;
use udagram::domain::ports::GalleryService;

use crate::response::{error, gallery_err, json};


fn path_parameter(req: &Request, name: &str) -> Option<String> {
    req.path_parameters()
        .first(name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_body<T: DeserializeOwned>(req: &Request) -> Result<T, String> {
    let body: &[u8] = req.body().as_ref();
    if body.is_empty() {
        return Err("Request body is required".to_string());
    }
    serde_json::from_slice(body).map_err(|e| format!("Invalid request body: {e}"))
}

/// `GET /groups`
#[tracing::instrument(skip_all)]
pub async fn get_groups<S: GalleryService>(
    service: &S,
    _req: Request,
) -> Result<Response<Body>, Error> {
    match service.get_groups().await {
        Ok(items) => json(StatusCode::OK, &ItemsResponse { items }),
        Err(e) => gallery_err(e),
    }
}

/// `POST /groups`
#[tracing::instrument(skip_all)]
pub async fn create_group<S: GalleryService>(
    service: &S,
    req: Request,
) -> Result<Response<Body>, Error> {
    let new_group: NewGroup = match parse_body(&req) {
        Ok(body) => body,
        Err(msg) => return error(StatusCode::BAD_REQUEST, &msg),
    };

    match service.create_group(new_group).await {
        Ok(new_item) => json(StatusCode::CREATED, &NewItemResponse { new_item }),
        Err(e) => gallery_err(e),
    }
}

/// `GET /groups/{groupId}/images`
#[tracing::instrument(skip_all)]
pub async fn get_images<S: GalleryService>(
    service: &S,
    req: Request,
) -> Result<Response<Body>, Error> {
    let Some(group_id) = path_parameter(&req, "groupId") else {
        return error(StatusCode::BAD_REQUEST, "groupId is required");
    };
    tracing::info!(group_id = %group_id, "getting images");

    match service.get_images(&group_id).await {
        Ok(items) => json(StatusCode::OK, &ItemsResponse { items }),
        Err(e) => gallery_err(e),
    }
}

/// `GET /images/{imageId}`
#[tracing::instrument(skip_all)]
pub async fn get_image<S: GalleryService>(
    service: &S,
    req: Request,
) -> Result<Response<Body>, Error> {
    let Some(image_id) = path_parameter(&req, "imageId") else {
        return error(StatusCode::BAD_REQUEST, "imageId is required");
    };
    tracing::info!(image_id = %image_id, "getting image");

    match service.get_image(&image_id).await {
        Ok(image) => json(StatusCode::OK, &image),
        Err(e) => gallery_err(e),
    }
}

/// `POST /groups/{groupId}/images`
#[tracing::instrument(skip_all)]
pub async fn create_image<S: GalleryService>(
    service: &S,
    req: Request,
) -> Result<Response<Body>, Error> {
    let Some(group_id) = path_parameter(&req, "groupId") else {
        return error(StatusCode::BAD_REQUEST, "groupId is required");
    };
    let new_image: NewImage = match parse_body(&req) {
        Ok(body) => body,
        Err(msg) => return error(StatusCode::BAD_REQUEST, &msg),
    };

    match service.create_image(&group_id, new_image).await {
        Ok(created) => json(StatusCode::CREATED, &created),
        Err(e) => gallery_err(e),
    }
}

//! HTTP routes and the translation of service errors into responses.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod products;
pub mod reviews;

/// Body returned with `404 Not Found`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned with `400 Bad Request` when the body is not JSON.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

/// Map a [`ServiceError`] to the JSON response for `entity`.
pub fn service_error_response(err: ServiceError, entity: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorResponse {
            error: format!("{entity} not found"),
        }),
        ServiceError::Malformed(detail) => {
            log::debug!("Rejected request body: {detail}");
            HttpResponse::BadRequest().json(DetailResponse { detail })
        }
        ServiceError::Form(errors) => HttpResponse::BadRequest().json(errors),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

/// Entity addressed by an `/<resource>/{id}` path.
fn entity_for_path(path: &str) -> &'static str {
    match path.trim_end_matches('/').rsplit('/').nth(1) {
        Some("products") => products::ENTITY,
        Some("reviews") => reviews::ENTITY,
        _ => categories::ENTITY,
    }
}

/// Path extractor settings: ids too large for a row id are simply not found.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let response = service_error_response(ServiceError::NotFound, entity_for_path(req.path()));
        InternalError::from_response(err, response).into()
    })
}

/// Register every catalog route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .service(categories::list_categories_with_count)
        .service(categories::list_categories)
        .service(categories::create_category)
        .service(categories::get_category)
        .service(categories::replace_category)
        .service(categories::delete_category)
        .service(products::list_products_with_reviews)
        .service(products::list_products)
        .service(products::create_product)
        .service(products::get_product)
        .service(products::replace_product)
        .service(products::delete_product)
        .service(reviews::list_reviews)
        .service(reviews::create_review)
        .service(reviews::get_review)
        .service(reviews::replace_review)
        .service(reviews::delete_review);
}

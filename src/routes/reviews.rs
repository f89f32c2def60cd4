use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::FormBody;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::reviews::{
    create_review as create_review_service, delete_review as delete_review_service,
    get_review as get_review_service, list_reviews as list_reviews_service,
    replace_review as replace_review_service,
};

pub(crate) const ENTITY: &str = "Review";

#[get("/reviews")]
pub async fn list_reviews(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_reviews_service(repo.get_ref()) {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[post("/reviews")]
pub async fn create_review(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match create_review_service(&FormBody::from(&body[..]), repo.get_ref()) {
        Ok(review) => HttpResponse::Created().json(review),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[get("/reviews/{review_id:\\d+}")]
pub async fn get_review(
    review_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_review_service(review_id.into_inner(), repo.get_ref()) {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[put("/reviews/{review_id:\\d+}")]
pub async fn replace_review(
    review_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match replace_review_service(
        review_id.into_inner(),
        &FormBody::from(&body[..]),
        repo.get_ref(),
    ) {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[delete("/reviews/{review_id:\\d+}")]
pub async fn delete_review(
    review_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_review_service(review_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err, ENTITY),
    }
}

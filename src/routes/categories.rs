use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::FormBody;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::categories::{
    create_category as create_category_service, delete_category as delete_category_service,
    get_category as get_category_service, list_categories as list_categories_service,
    list_categories_with_count as list_categories_with_count_service,
    replace_category as replace_category_service,
};

pub(crate) const ENTITY: &str = "Category";

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[post("/categories")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match create_category_service(&FormBody::from(&body[..]), repo.get_ref()) {
        Ok(category) => {
            log::info!("Created category {}", category.id);
            HttpResponse::Created().json(category)
        }
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[get("/categories/with-count")]
pub async fn list_categories_with_count(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_with_count_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[get("/categories/{category_id:\\d+}")]
pub async fn get_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[put("/categories/{category_id:\\d+}")]
pub async fn replace_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match replace_category_service(
        category_id.into_inner(),
        &FormBody::from(&body[..]),
        repo.get_ref(),
    ) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[delete("/categories/{category_id:\\d+}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = category_id.into_inner();
    match delete_category_service(category_id, repo.get_ref()) {
        Ok(()) => {
            log::info!("Deleted category {category_id}");
            HttpResponse::NoContent().finish()
        }
        Err(err) => service_error_response(err, ENTITY),
    }
}

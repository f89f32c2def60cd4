use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::FormBody;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, list_products as list_products_service,
    list_products_with_reviews as list_products_with_reviews_service,
    replace_product as replace_product_service,
};

pub(crate) const ENTITY: &str = "Product";

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[post("/products")]
pub async fn create_product(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match create_product_service(&FormBody::from(&body[..]), repo.get_ref()) {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            HttpResponse::Created().json(product)
        }
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[get("/products/with-reviews")]
pub async fn list_products_with_reviews(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products_with_reviews_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[get("/products/{product_id:\\d+}")]
pub async fn get_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[put("/products/{product_id:\\d+}")]
pub async fn replace_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match replace_product_service(
        product_id.into_inner(),
        &FormBody::from(&body[..]),
        repo.get_ref(),
    ) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => service_error_response(err, ENTITY),
    }
}

#[delete("/products/{product_id:\\d+}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    match delete_product_service(product_id, repo.get_ref()) {
        Ok(()) => {
            log::info!("Deleted product {product_id}");
            HttpResponse::NoContent().finish()
        }
        Err(err) => service_error_response(err, ENTITY),
    }
}

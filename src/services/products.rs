use std::collections::HashMap;

use crate::domain::product::Product;
use crate::domain::review::Review;
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::products::ProductWithReviewsDto;
use crate::forms::products::{ProductForm, ProductFormPayload};
use crate::forms::{FieldErrors, FormBody, does_not_exist_message};
use crate::repository::{
    CategoryReader, ProductReader, ProductWriter, RepositoryError, ReviewReader,
};

use super::{ServiceError, ServiceResult};

fn find_product<R>(product_id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let product_id = ProductId::new(product_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn missing_category(category_id: CategoryId) -> ServiceError {
    ServiceError::Form(FieldErrors::single(
        "category_id",
        does_not_exist_message(category_id),
    ))
}

/// Parse the body and check that the referenced category exists.
fn validate_product_form<R>(body: &FormBody, repo: &R) -> ServiceResult<ProductFormPayload>
where
    R: CategoryReader,
{
    let payload: ProductFormPayload = ProductForm::from_body(body)?.try_into()?;

    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => Ok(payload),
        Ok(None) => Err(missing_category(payload.category_id)),
        Err(e) => {
            log::error!("Failed to get category by id: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    repo.list_products().map_err(|e| {
        log::error!("Failed to list products: {e}");
        ServiceError::Internal
    })
}

pub fn create_product<R>(body: &FormBody, repo: &R) -> ServiceResult<Product>
where
    R: CategoryReader + ProductWriter,
{
    let payload = validate_product_form(body, repo)?;
    let category_id = payload.category_id;

    repo.create_product(&payload.into_new_product())
        .map_err(|e| match e {
            RepositoryError::ForeignKeyViolation(_) => missing_category(category_id),
            e => {
                log::error!("Failed to create product: {e}");
                ServiceError::Internal
            }
        })
}

pub fn get_product<R>(product_id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    find_product(product_id, repo)
}

/// Overwrite every field of an existing product.
pub fn replace_product<R>(
    product_id: i32,
    body: &FormBody,
    repo: &R,
) -> ServiceResult<Product>
where
    R: CategoryReader + ProductReader + ProductWriter,
{
    let product = find_product(product_id, repo)?;
    let payload = validate_product_form(body, repo)?;
    let category_id = payload.category_id;

    repo.update_product(product.id, &payload.into_new_product())
        .map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ForeignKeyViolation(_) => missing_category(category_id),
            e => {
                log::error!("Failed to update product: {e}");
                ServiceError::Internal
            }
        })
}

/// Delete a product along with its reviews.
pub fn delete_product<R>(product_id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter,
{
    let product = find_product(product_id, repo)?;

    match repo.delete_product(product.id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Every product with its reviews and average star rating.
pub fn list_products_with_reviews<R>(repo: &R) -> ServiceResult<Vec<ProductWithReviewsDto>>
where
    R: ProductReader + ReviewReader,
{
    let products = list_products(repo)?;
    let reviews = repo.list_reviews().map_err(|e| {
        log::error!("Failed to list reviews: {e}");
        ServiceError::Internal
    })?;

    let mut by_product: HashMap<ProductId, Vec<Review>> = HashMap::new();
    for review in reviews {
        by_product.entry(review.product_id).or_default().push(review);
    }
    for reviews in by_product.values_mut() {
        reviews.sort_by_key(|r| r.id);
    }

    Ok(products
        .into_iter()
        .map(|product| {
            let reviews = by_product.remove(&product.id).unwrap_or_default();
            ProductWithReviewsDto::new(product, reviews)
        })
        .collect())
}

use crate::domain::review::Review;
use crate::domain::types::{ProductId, ReviewId};
use crate::forms::reviews::{ReviewForm, ReviewFormPayload};
use crate::forms::{FieldErrors, FormBody, does_not_exist_message};
use crate::repository::{ProductReader, RepositoryError, ReviewReader, ReviewWriter};

use super::{ServiceError, ServiceResult};

fn find_review<R>(review_id: i32, repo: &R) -> ServiceResult<Review>
where
    R: ReviewReader,
{
    let review_id = ReviewId::new(review_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_review_by_id(review_id) {
        Ok(Some(review)) => Ok(review),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get review: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn missing_product(product_id: ProductId) -> ServiceError {
    ServiceError::Form(FieldErrors::single(
        "product_id",
        does_not_exist_message(product_id),
    ))
}

fn validate_review_form<R>(body: &FormBody, repo: &R) -> ServiceResult<ReviewFormPayload>
where
    R: ProductReader,
{
    let payload: ReviewFormPayload = ReviewForm::from_body(body)?.try_into()?;

    match repo.get_product_by_id(payload.product_id) {
        Ok(Some(_)) => Ok(payload),
        Ok(None) => Err(missing_product(payload.product_id)),
        Err(e) => {
            log::error!("Failed to get product by id: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_reviews<R>(repo: &R) -> ServiceResult<Vec<Review>>
where
    R: ReviewReader,
{
    repo.list_reviews().map_err(|e| {
        log::error!("Failed to list reviews: {e}");
        ServiceError::Internal
    })
}

pub fn create_review<R>(body: &FormBody, repo: &R) -> ServiceResult<Review>
where
    R: ProductReader + ReviewWriter,
{
    let payload = validate_review_form(body, repo)?;
    let product_id = payload.product_id;

    repo.create_review(&payload.into_new_review())
        .map_err(|e| match e {
            RepositoryError::ForeignKeyViolation(_) => missing_product(product_id),
            e => {
                log::error!("Failed to create review: {e}");
                ServiceError::Internal
            }
        })
}

pub fn get_review<R>(review_id: i32, repo: &R) -> ServiceResult<Review>
where
    R: ReviewReader,
{
    find_review(review_id, repo)
}

pub fn replace_review<R>(review_id: i32, body: &FormBody, repo: &R) -> ServiceResult<Review>
where
    R: ProductReader + ReviewReader + ReviewWriter,
{
    let review = find_review(review_id, repo)?;
    let payload = validate_review_form(body, repo)?;
    let product_id = payload.product_id;

    repo.update_review(review.id, &payload.into_new_review())
        .map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ForeignKeyViolation(_) => missing_product(product_id),
            e => {
                log::error!("Failed to update review: {e}");
                ServiceError::Internal
            }
        })
}

pub fn delete_review<R>(review_id: i32, repo: &R) -> ServiceResult<()>
where
    R: ReviewReader + ReviewWriter,
{
    let review = find_review(review_id, repo)?;

    match repo.delete_review(review.id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete review: {e}");
            Err(ServiceError::Internal)
        }
    }
}

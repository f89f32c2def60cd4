use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategoryName};
use crate::dto::categories::CategoryWithCountDto;
use crate::forms::categories::{CategoryForm, CategoryFormPayload};
use crate::forms::{FieldErrors, FormBody};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

pub const DUPLICATE_NAME_MESSAGE: &str = "category with this name already exists.";

fn duplicate_name() -> ServiceError {
    ServiceError::Form(FieldErrors::single("name", DUPLICATE_NAME_MESSAGE))
}

fn find_category<R>(category_id: i32, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Reject `name` when another category already uses it.
fn ensure_unique_name<R>(
    name: &CategoryName,
    current: Option<CategoryId>,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader,
{
    match repo.get_category_by_name(name) {
        Ok(Some(existing)) if Some(existing.id) != current => Err(duplicate_name()),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to look up category by name: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })
}

pub fn create_category<R>(body: &FormBody, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let payload: CategoryFormPayload = CategoryForm::from_body(body)?.try_into()?;
    ensure_unique_name(&payload.name, None, repo)?;

    // The name may have been taken since the check above.
    repo.create_category(&payload.into_new_category())
        .map_err(|e| match e {
            RepositoryError::UniqueViolation(_) => duplicate_name(),
            e => {
                log::error!("Failed to create category: {e}");
                ServiceError::Internal
            }
        })
}

pub fn get_category<R>(category_id: i32, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    find_category(category_id, repo)
}

/// Overwrite every field of an existing category.
///
/// The category must exist before the body is parsed.
pub fn replace_category<R>(
    category_id: i32,
    body: &FormBody,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let category = find_category(category_id, repo)?;

    let payload: CategoryFormPayload = CategoryForm::from_body(body)?.try_into()?;
    ensure_unique_name(&payload.name, Some(category.id), repo)?;

    repo.update_category(category.id, &payload.into_new_category())
        .map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::UniqueViolation(_) => duplicate_name(),
            e => {
                log::error!("Failed to update category: {e}");
                ServiceError::Internal
            }
        })
}

/// Delete a category along with its products and their reviews.
pub fn delete_category<R>(category_id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let category = find_category(category_id, repo)?;

    match repo.delete_category(category.id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn list_categories_with_count<R>(repo: &R) -> ServiceResult<Vec<CategoryWithCountDto>>
where
    R: CategoryReader,
{
    match repo.list_categories_with_count() {
        Ok(items) => Ok(items.into_iter().map(CategoryWithCountDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories with product count: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::domain::review::Review;
    use crate::domain::types::{
        ProductId, ProductPrice, ProductTitle, ReviewId, ReviewStars, ReviewText,
    };
    use crate::forms::REQUIRED_MESSAGE;
    use crate::repository::test::{StaleReadRepository, TestRepository};
    use crate::repository::{ProductReader, ReviewReader};
    use serde_json::json;

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        }
    }

    fn sample_product(id: i32, category_id: i32) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            title: ProductTitle::new(format!("Product {id}")).unwrap(),
            description: String::new(),
            price: ProductPrice::new(10.0).unwrap(),
            category_id: CategoryId::new(category_id).unwrap(),
        }
    }

    fn body(name: &str) -> FormBody {
        FormBody::from(json!({ "name": name }))
    }

    #[test]
    fn creates_and_fetches_category() {
        let repo = TestRepository::default();

        let created = create_category(&body("Tea"), &repo).unwrap();
        let fetched = get_category(created.id.get(), &repo).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name.as_str(), "Tea");
    }

    #[test]
    fn rejects_duplicate_name() {
        let repo = TestRepository::new(vec![sample_category(1, "Tea")], vec![], vec![]);

        let err = create_category(&body("Tea"), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Form(FieldErrors::single("name", DUPLICATE_NAME_MESSAGE))
        );
    }

    #[test]
    fn replace_keeps_own_name() {
        let repo = TestRepository::new(vec![sample_category(1, "Tea")], vec![], vec![]);

        let updated = replace_category(1, &body("Tea"), &repo).unwrap();
        assert_eq!(updated.name.as_str(), "Tea");
    }

    #[test]
    fn replace_missing_category_is_not_found_before_validation() {
        let repo = TestRepository::default();

        let err = replace_category(7, &FormBody::from(&b"{"[..]), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn replace_without_name_names_the_field() {
        let repo = TestRepository::new(vec![sample_category(1, "Tea")], vec![], vec![]);

        let err = replace_category(1, &FormBody::from(json!({})), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Form(FieldErrors::single("name", REQUIRED_MESSAGE))
        );
    }

    #[test]
    fn non_positive_id_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(get_category(0, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn delete_cascades_to_products_and_reviews() {
        let review = Review {
            id: ReviewId::new(1).unwrap(),
            text: ReviewText::new("Nice").unwrap(),
            stars: ReviewStars::new(5).unwrap(),
            product_id: ProductId::new(1).unwrap(),
        };
        let repo = TestRepository::new(
            vec![sample_category(1, "Tea"), sample_category(2, "Coffee")],
            vec![sample_product(1, 1), sample_product(2, 2)],
            vec![review],
        );

        delete_category(1, &repo).unwrap();

        assert_eq!(get_category(1, &repo).unwrap_err(), ServiceError::NotFound);
        let products = repo.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.get(), 2);
        assert!(repo.list_reviews().unwrap().is_empty());
    }

    #[test]
    fn counts_products_per_category() {
        let repo = TestRepository::new(
            vec![sample_category(1, "Tea"), sample_category(2, "Coffee")],
            vec![
                sample_product(1, 1),
                sample_product(2, 1),
                sample_product(3, 1),
            ],
            vec![],
        );

        let items = list_categories_with_count(&repo).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].products_count.get(), 3);
        assert_eq!(items[1].products_count.get(), 0);
    }

    #[test]
    fn duplicate_insert_after_check_is_a_field_error() {
        let repo = StaleReadRepository(TestRepository::new(
            vec![sample_category(1, "Tea")],
            vec![],
            vec![],
        ));

        let err = create_category(&body("Tea"), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Form(FieldErrors::single("name", DUPLICATE_NAME_MESSAGE))
        );
    }

    #[test]
    fn replace_of_concurrently_deleted_category_is_not_found() {
        let repo = StaleReadRepository(TestRepository::default());

        let err = replace_category(3, &body("Tea"), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn malformed_body_is_reported_whole() {
        let repo = TestRepository::default();

        let err = create_category(&FormBody::from(&b"{"[..]), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }
}

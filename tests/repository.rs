use pushkind_catalog::domain::category::NewCategory;
use pushkind_catalog::domain::product::NewProduct;
use pushkind_catalog::domain::review::NewReview;
use pushkind_catalog::domain::types::{
    CategoryId, CategoryName, ProductId, ProductPrice, ProductTitle, ReviewId, ReviewStars,
    ReviewText,
};
use pushkind_catalog::repository::{
    CategoryReader, CategoryWriter, DieselRepository, ProductReader, ProductWriter,
    RepositoryError, ReviewReader, ReviewWriter,
};

mod common;

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
    }
}

fn new_product(title: &str, category_id: CategoryId) -> NewProduct {
    NewProduct {
        title: ProductTitle::new(title).expect("valid product title"),
        description: String::new(),
        price: ProductPrice::new(12.5).expect("valid price"),
        category_id,
    }
}

#[test]
fn category_crud_round_trip() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_category(&new_category("Tea"))
        .expect("should create category");
    let fetched = repo
        .get_category_by_id(created.id)
        .expect("should query category")
        .expect("category should exist");
    assert_eq!(created, fetched);

    let by_name = repo
        .get_category_by_name(&CategoryName::new("Tea").unwrap())
        .expect("should query by name");
    assert_eq!(by_name, Some(created.clone()));

    let updated = repo
        .update_category(created.id, &new_category("Green Tea"))
        .expect("should update category");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_str(), "Green Tea");

    assert_eq!(repo.delete_category(created.id).expect("should delete"), 1);
    assert!(
        repo.get_category_by_id(created.id)
            .expect("should query category")
            .is_none()
    );
}

#[test]
fn duplicate_category_name_is_a_unique_violation() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let tea = repo
        .create_category(&new_category("Tea"))
        .expect("should create category");
    let coffee = repo
        .create_category(&new_category("Coffee"))
        .expect("should create category");

    let err = repo.create_category(&new_category("Tea")).unwrap_err();
    assert!(matches!(err, RepositoryError::UniqueViolation(_)), "{err:?}");

    let err = repo
        .update_category(coffee.id, &new_category("Tea"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::UniqueViolation(_)), "{err:?}");
    assert_eq!(repo.get_category_by_id(tea.id).unwrap(), Some(tea));
}

#[test]
fn dangling_references_are_foreign_key_violations() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_product(&new_product("Orphan", CategoryId::new(42).unwrap()))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)), "{err:?}");

    let err = repo
        .create_review(&NewReview {
            text: ReviewText::new("Ghost").unwrap(),
            stars: ReviewStars::new(3).unwrap(),
            product_id: ProductId::new(42).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)), "{err:?}");
    assert!(repo.list_products().unwrap().is_empty());
}

#[test]
fn updating_missing_rows_is_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let tea = repo.create_category(&new_category("Tea")).unwrap();

    let err = repo
        .update_category(CategoryId::new(99).unwrap(), &new_category("Coffee"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound), "{err:?}");

    let err = repo
        .update_product(ProductId::new(99).unwrap(), &new_product("Sencha", tea.id))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound), "{err:?}");

    let err = repo
        .update_review(
            ReviewId::new(99).unwrap(),
            &NewReview {
                text: ReviewText::new("Late").unwrap(),
                stars: ReviewStars::new(2).unwrap(),
                product_id: ProductId::new(1).unwrap(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound), "{err:?}");
}

#[test]
fn counts_products_per_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let tea = repo.create_category(&new_category("Tea")).unwrap();
    let coffee = repo.create_category(&new_category("Coffee")).unwrap();
    for title in ["Sencha", "Gyokuro", "Matcha"] {
        repo.create_product(&new_product(title, tea.id))
            .expect("should create product");
    }

    let counts = repo
        .list_categories_with_count()
        .expect("should list categories with count");

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].0.id, tea.id);
    assert_eq!(counts[0].1.get(), 3);
    assert_eq!(counts[1].0.id, coffee.id);
    assert_eq!(counts[1].1.get(), 0);
}

#[test]
fn product_update_overwrites_all_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let tea = repo.create_category(&new_category("Tea")).unwrap();
    let coffee = repo.create_category(&new_category("Coffee")).unwrap();
    let product = repo.create_product(&new_product("Sencha", tea.id)).unwrap();

    let replacement = NewProduct {
        title: ProductTitle::new("Espresso").unwrap(),
        description: "Dark roast".to_string(),
        price: ProductPrice::new(0.0).unwrap(),
        category_id: coffee.id,
    };
    let updated = repo
        .update_product(product.id, &replacement)
        .expect("should update product");

    let fetched = repo.get_product_by_id(product.id).unwrap().unwrap();
    assert_eq!(updated, fetched);
    assert_eq!(fetched.title.as_str(), "Espresso");
    assert_eq!(fetched.description, "Dark roast");
    assert_eq!(fetched.price, 0.0);
    assert_eq!(fetched.category_id, coffee.id);
}

#[test]
fn delete_category_removes_products_and_reviews() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let tea = repo.create_category(&new_category("Tea")).unwrap();
    let coffee = repo.create_category(&new_category("Coffee")).unwrap();
    let sencha = repo.create_product(&new_product("Sencha", tea.id)).unwrap();
    let espresso = repo
        .create_product(&new_product("Espresso", coffee.id))
        .unwrap();

    for product_id in [sencha.id, espresso.id] {
        repo.create_review(&NewReview {
            text: ReviewText::new("Lovely").unwrap(),
            stars: ReviewStars::new(5).unwrap(),
            product_id,
        })
        .expect("should create review");
    }

    repo.delete_category(tea.id).expect("should delete category");

    let products = repo.list_products().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, espresso.id);

    let reviews = repo.list_reviews().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].product_id, espresso.id);
}

#[test]
fn delete_product_removes_its_reviews() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let tea = repo.create_category(&new_category("Tea")).unwrap();
    let sencha = repo.create_product(&new_product("Sencha", tea.id)).unwrap();
    let review = repo
        .create_review(&NewReview {
            text: ReviewText::new("Grassy").unwrap(),
            stars: ReviewStars::new(4).unwrap(),
            product_id: sencha.id,
        })
        .unwrap();
    assert_eq!(repo.get_review_by_id(review.id).unwrap(), Some(review.clone()));

    assert_eq!(repo.delete_product(sencha.id).unwrap(), 1);
    assert!(repo.get_review_by_id(review.id).unwrap().is_none());
    assert!(repo.list_reviews().unwrap().is_empty());
}

#[test]
fn review_update_overwrites_all_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let tea = repo.create_category(&new_category("Tea")).unwrap();
    let sencha = repo.create_product(&new_product("Sencha", tea.id)).unwrap();
    let matcha = repo.create_product(&new_product("Matcha", tea.id)).unwrap();
    let review = repo
        .create_review(&NewReview {
            text: ReviewText::new("Grassy").unwrap(),
            stars: ReviewStars::new(2).unwrap(),
            product_id: sencha.id,
        })
        .unwrap();

    let updated = repo
        .update_review(
            review.id,
            &NewReview {
                text: ReviewText::new("Vivid").unwrap(),
                stars: ReviewStars::new(5).unwrap(),
                product_id: matcha.id,
            },
        )
        .expect("should update review");

    assert_eq!(updated.id, review.id);
    assert_eq!(updated.text.as_str(), "Vivid");
    assert_eq!(updated.stars, 5);
    assert_eq!(updated.product_id, matcha.id);
}

use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::domain::types::{ReviewStars, ReviewText, TypeConstraintError};

/// Diesel model representing the `reviews` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Review {
    pub id: i32,
    pub text: String,
    pub stars: i32,
    pub product_id: i32,
}

/// Insertable/patchable form of [`Review`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub text: String,
    pub stars: i32,
    pub product_id: i32,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: review.id.try_into()?,
            text: ReviewText::new(review.text)?,
            stars: ReviewStars::new(review.stars)?,
            product_id: review.product_id.try_into()?,
        })
    }
}

impl From<DomainNewReview> for NewReview {
    fn from(review: DomainNewReview) -> Self {
        Self {
            text: review.text.into_inner(),
            stars: review.stars.get(),
            product_id: review.product_id.get(),
        }
    }
}

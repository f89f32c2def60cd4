use diesel::prelude::*;

use crate::domain::review::{NewReview, Review};
use crate::domain::types::ReviewId;
use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
use crate::repository::{DieselRepository, RepositoryResult, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let items = reviews::table
            .order(reviews::id.asc())
            .load::<DbReview>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Review>, _>>()?;

        Ok(items)
    }

    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let review = reviews::table
            .find(id.get())
            .first::<DbReview>(&mut conn)
            .optional()?;

        let review = review.map(TryInto::try_into).transpose()?;
        Ok(review)
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_review: DbNewReview = review.clone().into();

        let created = conn.transaction(|conn| {
            diesel::insert_into(reviews::table)
                .values(db_review)
                .get_result::<DbReview>(conn)
        })?;

        Ok(created.try_into()?)
    }

    fn update_review(&self, id: ReviewId, review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_review: DbNewReview = review.clone().into();

        let updated = diesel::update(reviews::table.find(id.get()))
            .set(&db_review)
            .get_result::<DbReview>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_review(&self, id: ReviewId) -> RepositoryResult<usize> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let affected = diesel::delete(reviews::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}

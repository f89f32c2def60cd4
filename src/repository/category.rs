use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName, ProductCount};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.get())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn get_category_by_name(&self, name: &CategoryName) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::name.eq(name.as_str()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn list_categories_with_count(&self) -> RepositoryResult<Vec<(Category, ProductCount)>> {
        use crate::schema::{categories, products};
        use diesel::dsl::count_star;

        let mut conn = self.conn()?;

        let counts: HashMap<i32, i64> = products::table
            .group_by(products::category_id)
            .select((products::category_id, count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        let items = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(|db_category| -> RepositoryResult<(Category, ProductCount)> {
                let count = counts.get(&db_category.id).copied().unwrap_or_default();
                let category: Category = db_category.try_into()?;
                Ok((category, ProductCount::new(count)?))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(items)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(categories::table)
            .values(db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(
        &self,
        id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let updated = diesel::update(categories::table.find(id.get()))
            .set(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::{categories, products, reviews};

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            diesel::delete(
                reviews::table.filter(
                    reviews::product_id.eq_any(
                        products::table
                            .filter(products::category_id.eq(id.get()))
                            .select(products::id),
                    ),
                ),
            )
            .execute(conn)?;

            diesel::delete(products::table.filter(products::category_id.eq(id.get())))
                .execute(conn)?;

            diesel::delete(categories::table.find(id.get())).execute(conn)
        })?;

        Ok(affected)
    }
}

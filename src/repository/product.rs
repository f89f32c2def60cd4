use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let created = conn.transaction(|conn| {
            diesel::insert_into(products::table)
                .values(db_product)
                .get_result::<DbProduct>(conn)
        })?;

        Ok(created.try_into()?)
    }

    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let updated = diesel::update(products::table.find(id.get()))
            .set(&db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::{products, reviews};

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            diesel::delete(reviews::table.filter(reviews::product_id.eq(id.get())))
                .execute(conn)?;

            diesel::delete(products::table.find(id.get())).execute(conn)
        })?;

        Ok(affected)
    }
}

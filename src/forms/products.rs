use validator::Validate;

use crate::domain::product::NewProduct;
use crate::domain::types::{CategoryId, ProductPrice, ProductTitle};
use crate::forms::{FieldErrors, FieldReader, FormBody, FormError, does_not_exist_message};

/// Body accepted by `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Default, Validate)]
pub struct ProductForm {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub title: Option<String>,
    /// Optional; stored as an empty string when omitted.
    pub description: Option<String>,
    #[validate(
        required(message = "This field is required."),
        range(min = 0.0, message = "Ensure this value is greater than or equal to 0.")
    )]
    pub price: Option<f64>,
    #[validate(required(message = "This field is required."))]
    pub category_id: Option<i32>,
}

impl ProductForm {
    pub fn from_body(body: &FormBody) -> Result<Self, FormError> {
        let mut reader = FieldReader::parse(body)?;
        let form = Self {
            title: reader.string("title"),
            description: reader.string("description"),
            price: reader.number("price"),
            category_id: reader.primary_key("category_id"),
        };
        reader.finish(form)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
    pub title: ProductTitle,
    pub description: String,
    pub price: ProductPrice,
    pub category_id: CategoryId,
}

impl ProductFormPayload {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            title: self.title,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
        }
    }
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = FieldErrors;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let mut errors = FieldErrors::default();
        let title = errors.capture(ProductTitle::new(value.title.unwrap_or_default()));
        let price = errors.capture(ProductPrice::new(value.price.unwrap_or_default()));
        let raw_category_id = value.category_id.unwrap_or_default();
        let category_id = errors.capture(CategoryId::new(raw_category_id).map_err(|_| {
            FieldErrors::single("category_id", does_not_exist_message(raw_category_id))
        }));

        match (title, price, category_id) {
            (Some(title), Some(price), Some(category_id)) if errors.is_empty() => Ok(Self {
                title,
                description: value.description.unwrap_or_default(),
                price,
                category_id,
            }),
            _ => Err(errors),
        }
    }
}

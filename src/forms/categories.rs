use validator::Validate;

use crate::domain::category::NewCategory;
use crate::domain::types::CategoryName;
use crate::forms::{FieldErrors, FieldReader, FormBody, FormError};

/// Body accepted by `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Default, Validate)]
pub struct CategoryForm {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub name: Option<String>,
}

impl CategoryForm {
    pub fn from_body(body: &FormBody) -> Result<Self, FormError> {
        let mut reader = FieldReader::parse(body)?;
        let form = Self {
            name: reader.string("name"),
        };
        reader.finish(form)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFormPayload {
    pub name: CategoryName,
}

impl CategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory { name: self.name }
    }
}

impl TryFrom<CategoryForm> for CategoryFormPayload {
    type Error = FieldErrors;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name.unwrap_or_default())?,
        })
    }
}

use validator::Validate;

use crate::domain::review::NewReview;
use crate::domain::types::{ProductId, ReviewStars, ReviewText};
use crate::forms::{FieldErrors, FieldReader, FormBody, FormError, does_not_exist_message};

/// Body accepted by `POST /reviews` and `PUT /reviews/{id}`.
#[derive(Debug, Default, Validate)]
pub struct ReviewForm {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub text: Option<String>,
    #[validate(
        required(message = "This field is required."),
        range(min = 1, max = 5, message = "Ensure this value is between 1 and 5.")
    )]
    pub stars: Option<i32>,
    #[validate(required(message = "This field is required."))]
    pub product_id: Option<i32>,
}

impl ReviewForm {
    pub fn from_body(body: &FormBody) -> Result<Self, FormError> {
        let mut reader = FieldReader::parse(body)?;
        let form = Self {
            text: reader.string("text"),
            stars: reader.integer("stars"),
            product_id: reader.primary_key("product_id"),
        };
        reader.finish(form)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewFormPayload {
    pub text: ReviewText,
    pub stars: ReviewStars,
    pub product_id: ProductId,
}

impl ReviewFormPayload {
    pub fn into_new_review(self) -> NewReview {
        NewReview {
            text: self.text,
            stars: self.stars,
            product_id: self.product_id,
        }
    }
}

impl TryFrom<ReviewForm> for ReviewFormPayload {
    type Error = FieldErrors;

    fn try_from(value: ReviewForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let mut errors = FieldErrors::default();
        let text = errors.capture(ReviewText::new(value.text.unwrap_or_default()));
        let stars = errors.capture(ReviewStars::new(value.stars.unwrap_or_default()));
        let raw_product_id = value.product_id.unwrap_or_default();
        let product_id = errors.capture(ProductId::new(raw_product_id).map_err(|_| {
            FieldErrors::single("product_id", does_not_exist_message(raw_product_id))
        }));

        match (text, stars, product_id) {
            (Some(text), Some(stars), Some(product_id)) if errors.is_empty() => Ok(Self {
                text,
                stars,
                product_id,
            }),
            _ => Err(errors),
        }
    }
}

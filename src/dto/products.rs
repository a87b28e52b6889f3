use serde::Deserialize;
use utoipa::ToSchema;

use super::{required, required_text};
use crate::error::{AppError, AppResult};

pub const PRODUCT_CODE_MAX_CHARS: usize = 25;
pub const NAME_MAX_CHARS: usize = 256;
pub const STATUS_MAX_CHARS: usize = 64;

/// Body of `POST /products`. Every field is optional at decode time so that a
/// missing field surfaces as a validation error instead of a decode failure;
/// a caller-supplied `id` is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_code: Option<String>,
    pub name: Option<String>,
    pub inventory: Option<i32>,
    pub price: Option<i64>,
    pub status: Option<String>,
}

/// A product that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub product_code: String,
    pub name: String,
    pub inventory: i32,
    pub price: i64,
    pub status: String,
}

impl CreateProductRequest {
    pub fn validate(self) -> AppResult<NewProduct> {
        let product_code =
            required_text("productCode", self.product_code, PRODUCT_CODE_MAX_CHARS)?;
        let name = required_text("name", self.name, NAME_MAX_CHARS)?;
        let inventory = required("inventory", self.inventory)?;
        if inventory < 0 {
            return Err(AppError::validation("inventory must not be negative"));
        }
        let price = required("price", self.price)?;
        let status = required_text("status", self.status, STATUS_MAX_CHARS)?;
        Ok(NewProduct {
            product_code,
            name,
            inventory,
            price,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn widget() -> CreateProductRequest {
        CreateProductRequest {
            product_code: Some("ABC1".into()),
            name: Some("Widget".into()),
            inventory: Some(5),
            price: Some(100),
            status: Some("active".into()),
        }
    }

    #[test]
    fn complete_request_validates() {
        let product = widget().validate().unwrap();
        assert_eq!(product.product_code, "ABC1");
        assert_eq!(product.inventory, 5);
    }

    #[test]
    fn caller_id_is_ignored_when_decoding() {
        let request: CreateProductRequest = serde_json::from_str(
            r#"{"id":42,"productCode":"ABC1","name":"Widget","inventory":5,"price":100,"status":"active"}"#,
        )
        .unwrap();
        assert_eq!(request.validate().unwrap().name, "Widget");
    }

    #[test]
    fn missing_fields_are_validation_errors() {
        let err = CreateProductRequest {
            price: None,
            ..widget()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "price is required");

        let err = CreateProductRequest::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "productCode is required");
    }

    #[test]
    fn blank_and_oversized_text_is_rejected() {
        let err = CreateProductRequest {
            name: Some("   ".into()),
            ..widget()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "name must not be blank");

        let err = CreateProductRequest {
            product_code: Some("X".repeat(PRODUCT_CODE_MAX_CHARS + 1)),
            ..widget()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn negative_inventory_is_rejected() {
        let err = CreateProductRequest {
            inventory: Some(-1),
            ..widget()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "inventory must not be negative");
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::cart::use_cases::empty_cart::{EmptyCartParams, EmptyCartUseCase};
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{AddItemRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddItemUseCase>,
    empty_cart_use_case: Arc<dyn EmptyCartUseCase>,
    get_cart_use_case: Arc<dyn GetCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddItemUseCase>,
        empty_cart_use_case: Arc<dyn EmptyCartUseCase>,
        get_cart_use_case: Arc<dyn GetCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            empty_cart_use_case,
            get_cart_use_case,
        }
    }
}

/// Cart API
///
/// Add items to a user's cart, read it back and empty it.
#[OpenApi]
impl CartApi {
    /// Add an item
    ///
    /// Merges the item into the user's cart: the quantity is added to the
    /// product's existing entry, or a new entry is created.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddItemRequest>) -> AddItemResponse {
        let params = AddItemParams {
            user_id: UserId::new(body.0.user_id),
            product_id: body.0.item.product_id,
            quantity: body.0.item.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(()) => AddItemResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    503 => AddItemResponse::ServiceUnavailable(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a cart
    ///
    /// Returns the user's cart. An unknown user gets an empty cart.
    #[oai(path = "/cart/:user_id", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, user_id: Path<String>) -> GetCartResponse {
        let params = GetCartParams {
            user_id: UserId::new(user_id.0),
        };

        match self.get_cart_use_case.execute(params).await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCartResponse::BadRequest(json),
                    503 => GetCartResponse::ServiceUnavailable(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty a cart
    ///
    /// Removes every item of the user. Emptying an empty cart succeeds.
    #[oai(path = "/cart/:user_id", method = "delete", tag = "ApiTags::Cart")]
    async fn empty_cart(&self, user_id: Path<String>) -> EmptyCartResponse {
        let params = EmptyCartParams {
            user_id: UserId::new(user_id.0),
        };

        match self.empty_cart_use_case.execute(params).await {
            Ok(()) => EmptyCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => EmptyCartResponse::BadRequest(json),
                    503 => EmptyCartResponse::ServiceUnavailable(json),
                    _ => EmptyCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EmptyCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

//! OpenAPI document for the customer routes.
//!
//! The handlers are generic over the identifier type, so the paths are
//! described on the non-generic stubs below; ids are documented as strings.
#![allow(dead_code)]

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

/// Stored record. `id` is a decimal integer or a UUID string depending on
/// the configured scheme.
#[derive(ToSchema)]
pub struct CustomerDoc {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

/// Create/replace payload; every field is optional.
#[derive(ToSchema)]
pub struct CustomerInputDoc {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contacted: Option<bool>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = HealthResponse)))]
fn health() {}

#[utoipa::path(get, path = "/customers", tag = "customers", responses((status = 200, description = "All customers in storage order", body = [CustomerDoc])))]
fn list_customers() {}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "The customer", body = CustomerDoc),
        (status = 404, description = "Customer not found", body = MessageResponse)
    )
)]
fn get_customer() {}

#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = CustomerDoc),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Customer with this ID already exist", body = MessageResponse)
    )
)]
fn create_customer() {}

#[utoipa::path(
    patch,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer identifier")),
    request_body = CustomerInputDoc,
    responses(
        (status = 200, description = "Full collection after the replacement", body = [CustomerDoc]),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 404, description = "The customer not exist", body = MessageResponse)
    )
)]
fn replace_customer() {}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Remaining collection", body = [CustomerDoc]),
        (status = 404, description = "Customer not found", body = MessageResponse)
    )
)]
fn delete_customer() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_customers,
        get_customer,
        create_customer,
        replace_customer,
        delete_customer,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            CustomerDoc,
            CustomerInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

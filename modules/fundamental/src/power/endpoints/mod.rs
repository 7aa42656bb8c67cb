use crate::{
    power::{
        model::{PowerCreate, PowerHead, PowerPatch},
        service::PowerService,
    },
    Error,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use herodex_common::db::Database;
use utoipa::OpenApi;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = PowerService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(create)
        .service(update)
        .service(delete);
}

#[derive(OpenApi)]
#[openapi(
    paths(all, get, create, update, delete),
    components(schemas(PowerHead, PowerCreate, PowerPatch)),
    tags()
)]
pub struct ApiDoc;

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers", body = [PowerHead]),
    ),
)]
#[get("/powers")]
/// List powers
pub async fn all(state: web::Data<PowerService>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(state.list_powers().await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "Matching power", body = PowerHead),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[get("/powers/{id}")]
/// Retrieve a power
pub async fn get(
    state: web::Data<PowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.fetch_power(*id).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::not_found("Power").into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "createPower",
    request_body = PowerCreate,
    responses(
        (status = 201, description = "Created power", body = PowerHead),
        (status = 400, description = "Description failed validation"),
    ),
)]
#[post("/powers")]
/// Create a power
pub async fn create(
    state: web::Data<PowerService>,
    web::Json(request): web::Json<PowerCreate>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(state.create_power(request).await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    request_body = PowerPatch,
    responses(
        (status = 200, description = "Updated power", body = PowerHead),
        (status = 400, description = "Description failed validation"),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[patch("/powers/{id}")]
/// Update a power's description
pub async fn update(
    state: web::Data<PowerService>,
    id: web::Path<i32>,
    web::Json(request): web::Json<PowerPatch>,
) -> actix_web::Result<impl Responder> {
    match state.update_description(*id, request).await? {
        Some(power) => Ok(HttpResponse::Ok().json(power)),
        None => Err(Error::not_found("Power").into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "deletePower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 204, description = "Power deleted, associations included"),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[delete("/powers/{id}")]
/// Delete a power and the associations referencing it
pub async fn delete(
    state: web::Data<PowerService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    if state.delete_power(*id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found("Power").into())
    }
}

use crate::hero_power::{
    model::{HeroPowerCreate, HeroPowerDetails, HeroPowerHead},
    service::HeroPowerService,
};
use actix_web::{post, web, HttpResponse, Responder};
use herodex_common::db::Database;
use utoipa::OpenApi;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = HeroPowerService::new(db);
    config.app_data(web::Data::new(service)).service(create);
}

#[derive(OpenApi)]
#[openapi(
    paths(create),
    components(schemas(HeroPowerHead, HeroPowerDetails, HeroPowerCreate)),
    tags()
)]
pub struct ApiDoc;

#[utoipa::path(
    tag = "hero_power",
    operation_id = "createHeroPower",
    request_body = HeroPowerCreate,
    responses(
        (status = 201, description = "Created association", body = HeroPowerDetails),
        (status = 400, description = "Strength failed validation, or a reference does not exist"),
    ),
)]
#[post("/hero_powers")]
/// Associate a hero with a power
pub async fn create(
    state: web::Data<HeroPowerService>,
    web::Json(request): web::Json<HeroPowerCreate>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(state.create_hero_power(request).await?))
}

#[cfg(test)]
mod test;

use crate::{
    hero::{
        model::{HeroCreate, HeroDetails, HeroHead},
        service::HeroService,
    },
    Error,
};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use herodex_common::db::Database;
use utoipa::OpenApi;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    let service = HeroService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(create)
        .service(delete);
}

#[derive(OpenApi)]
#[openapi(
    paths(all, get, create, delete),
    components(schemas(HeroHead, HeroDetails, HeroCreate)),
    tags()
)]
pub struct ApiDoc;

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes", body = [HeroHead]),
    ),
)]
#[get("/heroes")]
/// List heroes
pub async fn all(state: web::Data<HeroService>) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(state.list_heroes().await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "Matching hero", body = HeroDetails),
        (status = 404, description = "Matching hero not found"),
    ),
)]
#[get("/heroes/{id}")]
/// Retrieve a hero with its power associations
pub async fn get(
    state: web::Data<HeroService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    match state.fetch_hero(*id).await? {
        Some(hero) => Ok(HttpResponse::Ok().json(hero)),
        None => Err(Error::not_found("Hero").into()),
    }
}

#[utoipa::path(
    tag = "hero",
    operation_id = "createHero",
    request_body = HeroCreate,
    responses(
        (status = 201, description = "Created hero", body = HeroHead),
    ),
)]
#[post("/heroes")]
/// Create a hero
pub async fn create(
    state: web::Data<HeroService>,
    web::Json(request): web::Json<HeroCreate>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Created().json(state.create_hero(request).await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "deleteHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 204, description = "Hero deleted, associations included"),
        (status = 404, description = "Matching hero not found"),
    ),
)]
#[delete("/heroes/{id}")]
/// Delete a hero and its power associations
pub async fn delete(
    state: web::Data<HeroService>,
    id: web::Path<i32>,
) -> actix_web::Result<impl Responder> {
    if state.delete_hero(*id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found("Hero").into())
    }
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(title = "Herodex API"))]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.merge(crate::hero::endpoints::ApiDoc::openapi());
    doc.merge(crate::power::endpoints::ApiDoc::openapi());
    doc.merge(crate::hero_power::endpoints::ApiDoc::openapi());

    doc
}

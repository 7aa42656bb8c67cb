use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test::init_service,
    App, Error,
};
use herodex_test_context::HerodexContext;

/// An actix test app serving the full API against the context's database.
pub async fn caller(
    ctx: &HerodexContext,
) -> anyhow::Result<impl Service<Request, Response = ServiceResponse, Error = Error>> {
    let db = ctx.db.clone();
    Ok(init_service(App::new().configure(|config| crate::configure(config, db))).await)
}

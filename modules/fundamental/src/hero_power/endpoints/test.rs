use crate::test::caller;
use actix_http::StatusCode;
use actix_web::test::{read_body_json, TestRequest};
use herodex_test_context::{call::CallService, HerodexContext};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn create_hero_power(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Kamala Khan", "Ms. Marvel").await?;
    let power = ctx
        .seed_power("elasticity", "stretch, embiggen and reshape at will")
        .await?;
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Strong",
            "hero_id": hero.id,
            "power_id": power.id,
        }))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = read_body_json(response).await;
    let id = body["id"].as_i64().expect("generated id");

    // both nested records are the flat projections, neither carries a
    // hero_powers list of its own
    assert_eq!(
        body,
        json!({
            "id": id,
            "strength": "Strong",
            "hero_id": hero.id,
            "power_id": power.id,
            "hero": {
                "id": hero.id,
                "name": "Kamala Khan",
                "super_name": "Ms. Marvel",
            },
            "power": {
                "id": power.id,
                "name": "elasticity",
                "description": "stretch, embiggen and reshape at will",
            },
        })
    );

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn create_hero_power_rejections(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Kamala Khan", "Ms. Marvel").await?;
    let power = ctx
        .seed_power("elasticity", "stretch, embiggen and reshape at will")
        .await?;
    let app = caller(ctx).await?;

    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Mediocre",
            "hero_id": hero.id,
            "power_id": power.id,
        }))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(response).await;
    assert_eq!(
        body,
        json!({"errors": ["Strength must be 'Strong', 'Weak', or 'Average'"]})
    );

    let request = TestRequest::post()
        .uri("/hero_powers")
        .set_json(json!({
            "strength": "Weak",
            "hero_id": 999999,
            "power_id": power.id,
        }))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(response).await;
    assert_eq!(
        body,
        json!({"errors": ["hero_id 999999 does not reference an existing hero"]})
    );

    Ok(())
}

use crate::hero_power::{model::HeroPowerCreate, service::HeroPowerService};
use herodex_entity::{hero_power, strength::Strength};
use herodex_test_context::HerodexContext;
use sea_orm::EntityTrait;
use test_context::test_context;
use test_log::test;

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn create_hero_power(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Kamala Khan", "Ms. Marvel").await?;
    let power = ctx
        .seed_power("elasticity", "stretch, embiggen and reshape at will")
        .await?;

    let service = HeroPowerService::new(ctx.db.clone());
    let details = service
        .create_hero_power(HeroPowerCreate {
            strength: "Strong".to_string(),
            hero_id: hero.id,
            power_id: power.id,
        })
        .await?;

    assert_eq!(details.head.strength, Strength::Strong);
    assert_eq!(details.head.hero_id, hero.id);
    assert_eq!(details.head.power_id, power.id);
    assert_eq!(details.hero.super_name, "Ms. Marvel");
    assert_eq!(details.power.name, "elasticity");

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn rejects_invalid_strength(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Kamala Khan", "Ms. Marvel").await?;
    let power = ctx
        .seed_power("elasticity", "stretch, embiggen and reshape at will")
        .await?;

    let service = HeroPowerService::new(ctx.db.clone());
    let err = service
        .create_hero_power(HeroPowerCreate {
            strength: "Mediocre".to_string(),
            hero_id: hero.id,
            power_id: power.id,
        })
        .await
        .expect_err("strength must be rejected");

    assert_eq!(
        err.to_string(),
        "Strength must be 'Strong', 'Weak', or 'Average'"
    );
    assert!(hero_power::Entity::find().all(&ctx.db).await?.is_empty());

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn rejects_dangling_references(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Kamala Khan", "Ms. Marvel").await?;
    let power = ctx
        .seed_power("elasticity", "stretch, embiggen and reshape at will")
        .await?;

    let service = HeroPowerService::new(ctx.db.clone());

    let err = service
        .create_hero_power(HeroPowerCreate {
            strength: "Weak".to_string(),
            hero_id: 999999,
            power_id: power.id,
        })
        .await
        .expect_err("dangling hero_id must be rejected");
    assert_eq!(
        err.to_string(),
        "hero_id 999999 does not reference an existing hero"
    );

    let err = service
        .create_hero_power(HeroPowerCreate {
            strength: "Weak".to_string(),
            hero_id: hero.id,
            power_id: 999999,
        })
        .await
        .expect_err("dangling power_id must be rejected");
    assert_eq!(
        err.to_string(),
        "power_id 999999 does not reference an existing power"
    );

    assert!(hero_power::Entity::find().all(&ctx.db).await?.is_empty());

    Ok(())
}

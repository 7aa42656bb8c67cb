use crate::hero::{model::HeroCreate, service::HeroService};
use herodex_entity::{hero_power, strength::Strength};
use herodex_test_context::HerodexContext;
use sea_orm::EntityTrait;
use test_context::test_context;
use test_log::test;

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn hero_crud(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let service = HeroService::new(ctx.db.clone());

    let created = service
        .create_hero(HeroCreate {
            name: "Kamala Khan".to_string(),
            super_name: "Ms. Marvel".to_string(),
        })
        .await?;

    assert_eq!(created.name, "Kamala Khan");
    assert_eq!(created.super_name, "Ms. Marvel");

    let heroes = service.list_heroes().await?;
    assert_eq!(heroes, vec![created.clone()]);

    let details = service
        .fetch_hero(created.id)
        .await?
        .expect("hero just created");
    assert_eq!(details.head, created);
    assert!(details.hero_powers.is_empty());

    assert!(service.fetch_hero(999999).await?.is_none());

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn fetch_hero_includes_associations(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Clark Kent", "Superman").await?;
    let flight = ctx
        .seed_power("flight", "the ability to soar through the skies unaided")
        .await?;
    let strength = ctx
        .seed_power("super strength", "lift anything from cars to continents")
        .await?;
    ctx.seed_hero_power(&hero, &flight, Strength::Strong).await?;
    ctx.seed_hero_power(&hero, &strength, Strength::Average)
        .await?;

    let service = HeroService::new(ctx.db.clone());
    let details = service.fetch_hero(hero.id).await?.expect("seeded hero");

    assert_eq!(details.hero_powers.len(), 2);
    let flight_entry = &details.hero_powers[0];
    assert_eq!(flight_entry.head.hero_id, hero.id);
    assert_eq!(flight_entry.head.strength, Strength::Strong);
    assert_eq!(flight_entry.power.id, flight.id);
    assert_eq!(flight_entry.power.name, "flight");

    Ok(())
}

#[test_context(HerodexContext)]
#[test(actix_web::test)]
async fn delete_hero_cascades(ctx: &HerodexContext) -> Result<(), anyhow::Error> {
    let hero = ctx.seed_hero("Clark Kent", "Superman").await?;
    let other = ctx.seed_hero("Diana Prince", "Wonder Woman").await?;
    let power = ctx
        .seed_power("flight", "the ability to soar through the skies unaided")
        .await?;
    ctx.seed_hero_power(&hero, &power, Strength::Strong).await?;
    let kept = ctx.seed_hero_power(&other, &power, Strength::Average).await?;

    let service = HeroService::new(ctx.db.clone());
    assert!(service.delete_hero(hero.id).await?);

    // only the other hero's association survives
    let remaining = hero_power::Entity::find().all(&ctx.db).await?;
    assert_eq!(
        remaining.iter().map(|hp| hp.id).collect::<Vec<_>>(),
        vec![kept.id]
    );

    assert!(service.fetch_hero(hero.id).await?.is_none());
    assert!(!service.delete_hero(hero.id).await?);

    Ok(())
}

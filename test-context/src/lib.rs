#![allow(clippy::expect_used)]

pub mod call;

use herodex_common::db::Database;
use herodex_entity::{hero, hero_power, power, strength::Strength};
use sea_orm::{ActiveModelTrait, Set};
use test_context::AsyncTestContext;

/// Per-test context: a fresh in-memory database with the full schema.
pub struct HerodexContext {
    pub db: Database,
}

impl HerodexContext {
    pub async fn seed_hero(
        &self,
        name: &str,
        super_name: &str,
    ) -> Result<hero::Model, anyhow::Error> {
        Ok(hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn seed_power(
        &self,
        name: &str,
        description: &str,
    ) -> Result<power::Model, anyhow::Error> {
        Ok(power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn seed_hero_power(
        &self,
        hero: &hero::Model,
        power: &power::Model,
        strength: Strength,
    ) -> Result<hero_power::Model, anyhow::Error> {
        Ok(hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }
}

impl AsyncTestContext for HerodexContext {
    async fn setup() -> HerodexContext {
        let db = Database::for_test()
            .await
            .expect("creating the test database");

        HerodexContext { db }
    }

    async fn teardown(self) {
        let _ = self.db.close().await;
    }
}

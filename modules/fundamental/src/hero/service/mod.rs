use crate::{
    hero::model::{HeroCreate, HeroDetails, HeroHead},
    Error,
};
use herodex_common::db::Database;
use herodex_entity::{hero, hero_power};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct HeroService {
    db: Database,
}

impl HeroService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_heroes(&self) -> Result<Vec<HeroHead>, Error> {
        let heroes = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(&self.db)
            .await?;

        Ok(HeroHead::from_entities(&heroes))
    }

    pub async fn fetch_hero(&self, id: i32) -> Result<Option<HeroDetails>, Error> {
        if let Some(hero) = hero::Entity::find_by_id(id).one(&self.db).await? {
            Ok(Some(HeroDetails::from_entity(&hero, &self.db).await?))
        } else {
            Ok(None)
        }
    }

    pub async fn create_hero(&self, request: HeroCreate) -> Result<HeroHead, Error> {
        let tx = self.db.begin().await?;

        let hero = hero::ActiveModel {
            name: Set(request.name),
            super_name: Set(request.super_name),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        Ok(HeroHead::from_entity(&hero))
    }

    /// Delete a hero and all of its associations. Returns `false` if no such
    /// hero exists.
    pub async fn delete_hero(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;

        let Some(hero) = hero::Entity::find_by_id(id).one(&tx).await? else {
            return Ok(false);
        };

        // dependent rows go in the same transaction, the schema's cascade
        // clause is the backstop
        hero_power::Entity::delete_many()
            .filter(hero_power::Column::HeroId.eq(id))
            .exec(&tx)
            .await?;
        hero.delete(&tx).await?;

        tx.commit().await?;

        Ok(true)
    }
}

#[cfg(test)]
mod test;

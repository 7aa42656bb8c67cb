use crate::{
    power::model::{PowerCreate, PowerHead, PowerPatch},
    validate::validate_description,
    Error,
};
use herodex_common::db::Database;
use herodex_entity::{hero_power, power};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct PowerService {
    db: Database,
}

impl PowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list_powers(&self) -> Result<Vec<PowerHead>, Error> {
        let powers = power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(&self.db)
            .await?;

        Ok(PowerHead::from_entities(&powers))
    }

    pub async fn fetch_power(&self, id: i32) -> Result<Option<PowerHead>, Error> {
        Ok(power::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|power| PowerHead::from_entity(&power)))
    }

    pub async fn create_power(&self, request: PowerCreate) -> Result<PowerHead, Error> {
        let description = validate_description(request.description.as_deref())?;

        let tx = self.db.begin().await?;

        let power = power::ActiveModel {
            name: Set(request.name),
            description: Set(description),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        Ok(PowerHead::from_entity(&power))
    }

    /// Update a power's description. Returns `None` if no such power exists;
    /// validation runs only against an existing row, so a missing id yields
    /// 404 rather than 400.
    pub async fn update_description(
        &self,
        id: i32,
        request: PowerPatch,
    ) -> Result<Option<PowerHead>, Error> {
        let tx = self.db.begin().await?;

        let Some(power) = power::Entity::find_by_id(id).one(&tx).await? else {
            return Ok(None);
        };

        // failing here drops the transaction, rolling back
        let description = validate_description(request.description.as_deref())?;

        let mut power = power.into_active_model();
        power.description = Set(description);
        let power = power.update(&tx).await?;

        tx.commit().await?;

        Ok(Some(PowerHead::from_entity(&power)))
    }

    /// Delete a power and all associations referencing it. Returns `false`
    /// if no such power exists.
    pub async fn delete_power(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;

        let Some(power) = power::Entity::find_by_id(id).one(&tx).await? else {
            return Ok(false);
        };

        hero_power::Entity::delete_many()
            .filter(hero_power::Column::PowerId.eq(id))
            .exec(&tx)
            .await?;
        power.delete(&tx).await?;

        tx.commit().await?;

        Ok(true)
    }
}

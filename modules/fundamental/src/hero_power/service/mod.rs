use crate::{
    hero_power::model::{HeroPowerCreate, HeroPowerDetails},
    validate::validate_strength,
    Error,
};
use herodex_common::db::Database;
use herodex_entity::{hero, hero_power, power};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

#[derive(Clone)]
pub struct HeroPowerService {
    db: Database,
}

impl HeroPowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create an association between an existing hero and an existing power.
    ///
    /// Dangling `hero_id`/`power_id` values are rejected up front rather
    /// than left to the foreign-key constraint, so the caller gets a 400
    /// with a message naming the reference instead of a raw database error.
    pub async fn create_hero_power(
        &self,
        request: HeroPowerCreate,
    ) -> Result<HeroPowerDetails, Error> {
        let strength = validate_strength(&request.strength)?;

        let tx = self.db.begin().await?;

        if hero::Entity::find_by_id(request.hero_id)
            .one(&tx)
            .await?
            .is_none()
        {
            return Err(Error::validation(format!(
                "hero_id {} does not reference an existing hero",
                request.hero_id
            )));
        }
        if power::Entity::find_by_id(request.power_id)
            .one(&tx)
            .await?
            .is_none()
        {
            return Err(Error::validation(format!(
                "power_id {} does not reference an existing power",
                request.power_id
            )));
        }

        let hero_power = hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(request.hero_id),
            power_id: Set(request.power_id),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        let details = HeroPowerDetails::from_entity(&hero_power, &tx).await?;

        tx.commit().await?;

        Ok(details)
    }
}

#[cfg(test)]
mod test;

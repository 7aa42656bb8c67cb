use crate::{hero::model::HeroHead, power::model::PowerHead, Error};
use anyhow::anyhow;
use herodex_entity::{hero, hero_power, power, strength::Strength};
use sea_orm::{ConnectionTrait, ModelTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The flat projection of an association.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct HeroPowerHead {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

impl HeroPowerHead {
    pub fn from_entity(hero_power: &hero_power::Model) -> Self {
        HeroPowerHead {
            id: hero_power.id,
            strength: hero_power.strength,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
        }
    }
}

/// The association as seen from its hero: the far-side power is nested
/// (flat, without its own associations), the hero back-reference is not.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HeroPowerSummary {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub power: PowerHead,
}

impl HeroPowerSummary {
    pub async fn from_entity<C: ConnectionTrait>(
        hero_power: &hero_power::Model,
        tx: &C,
    ) -> Result<Self, Error> {
        let power = hero_power
            .find_related(power::Entity)
            .one(tx)
            .await?
            .ok_or_else(|| {
                Error::Any(anyhow!(
                    "hero_power {} references a missing power",
                    hero_power.id
                ))
            })?;

        Ok(HeroPowerSummary {
            head: HeroPowerHead::from_entity(hero_power),
            power: PowerHead::from_entity(&power),
        })
    }

    pub async fn from_entities<C: ConnectionTrait>(
        hero_powers: &[hero_power::Model],
        tx: &C,
    ) -> Result<Vec<Self>, Error> {
        let mut summaries = Vec::new();

        for hero_power in hero_powers {
            summaries.push(Self::from_entity(hero_power, tx).await?);
        }

        Ok(summaries)
    }
}

/// The full association: both endpoints nested, each as its flat projection.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HeroPowerDetails {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub hero: HeroHead,
    pub power: PowerHead,
}

impl HeroPowerDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        hero_power: &hero_power::Model,
        tx: &C,
    ) -> Result<Self, Error> {
        let hero = hero_power
            .find_related(hero::Entity)
            .one(tx)
            .await?
            .ok_or_else(|| {
                Error::Any(anyhow!(
                    "hero_power {} references a missing hero",
                    hero_power.id
                ))
            })?;
        let power = hero_power
            .find_related(power::Entity)
            .one(tx)
            .await?
            .ok_or_else(|| {
                Error::Any(anyhow!(
                    "hero_power {} references a missing power",
                    hero_power.id
                ))
            })?;

        Ok(HeroPowerDetails {
            head: HeroPowerHead::from_entity(hero_power),
            hero: HeroHead::from_entity(&hero),
            power: PowerHead::from_entity(&power),
        })
    }
}

/// The association request. `strength` stays a string here so that an
/// invalid value reaches `validate_strength` and comes back with the
/// documented message instead of a deserialization failure.
#[derive(Deserialize, Clone, Debug, ToSchema)]
pub struct HeroPowerCreate {
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

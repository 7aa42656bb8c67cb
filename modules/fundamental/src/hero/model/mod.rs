use crate::{hero_power::model::HeroPowerSummary, Error};
use herodex_entity::{hero, hero_power};
use sea_orm::{ConnectionTrait, ModelTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The flat projection of a hero: exactly `id`, `name` and `super_name`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct HeroHead {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl HeroHead {
    pub fn from_entity(hero: &hero::Model) -> Self {
        HeroHead {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }

    pub fn from_entities(heroes: &[hero::Model]) -> Vec<Self> {
        heroes.iter().map(Self::from_entity).collect()
    }
}

/// A hero with its power associations. The nested entries carry no `hero`
/// back-reference, which is what keeps the output tree-shaped.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroHead,

    pub hero_powers: Vec<HeroPowerSummary>,
}

impl HeroDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        hero: &hero::Model,
        tx: &C,
    ) -> Result<Self, Error> {
        let hero_powers = hero.find_related(hero_power::Entity).all(tx).await?;

        Ok(HeroDetails {
            head: HeroHead::from_entity(hero),
            hero_powers: HeroPowerSummary::from_entities(&hero_powers, tx).await?,
        })
    }
}

#[derive(Deserialize, Clone, Debug, ToSchema)]
pub struct HeroCreate {
    pub name: String,
    pub super_name: String,
}

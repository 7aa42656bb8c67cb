use herodex_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The flat projection of a power: exactly `id`, `name` and `description`.
///
/// There is no `PowerDetails` — nothing serializes a power together with its
/// associations, so the flat projection is the whole wire contract.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, PartialEq, Eq)]
pub struct PowerHead {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl PowerHead {
    pub fn from_entity(power: &power::Model) -> Self {
        PowerHead {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }

    pub fn from_entities(powers: &[power::Model]) -> Vec<Self> {
        powers.iter().map(Self::from_entity).collect()
    }
}

#[derive(Deserialize, Clone, Debug, ToSchema)]
pub struct PowerCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Clone, Debug, ToSchema)]
pub struct PowerPatch {
    pub description: Option<String>,
}

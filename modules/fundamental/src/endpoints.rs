use crate::{hero, hero_power, power};
use actix_web::web;
use herodex_common::db::Database;

pub fn configure(config: &mut web::ServiceConfig, db: Database) {
    hero::endpoints::configure(config, db.clone());
    power::endpoints::configure(config, db.clone());
    hero_power::endpoints::configure(config, db);
}

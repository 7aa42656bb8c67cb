pub mod endpoints;
pub mod model;
pub mod service;

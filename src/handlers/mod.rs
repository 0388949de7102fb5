pub mod auth;
pub mod catalog;
pub mod helpers;
pub mod instances;
pub mod middleware;
pub mod system;

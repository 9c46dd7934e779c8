pub mod activity;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod finding;
pub mod notification;
pub mod organization;
pub mod project;
pub mod schema;
pub mod shared;
pub mod template;
pub mod user;

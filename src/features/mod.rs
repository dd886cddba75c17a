pub mod auth;
pub mod infrastructure;
pub mod notifications;
pub mod reports;
pub mod statuses;
pub mod users;

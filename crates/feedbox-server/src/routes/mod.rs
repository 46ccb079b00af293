pub mod admin;
pub mod dashboard;
pub mod feedback;
pub mod health;

pub mod activities;
pub mod assessments;
pub mod badges;
pub mod health;
pub mod instruments;
pub mod interpret;
pub mod profile;

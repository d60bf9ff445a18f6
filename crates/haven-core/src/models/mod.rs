pub mod activity;
pub mod assessment;
pub mod badge;
pub mod profile;

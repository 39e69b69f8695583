pub mod examples;
pub mod health;
pub mod rules;
pub mod symbols;
pub mod translate;

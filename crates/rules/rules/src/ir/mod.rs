pub mod rule;
pub mod set;
pub mod template;

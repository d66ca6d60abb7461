pub mod entities;
pub mod fields;
pub mod use_cases;

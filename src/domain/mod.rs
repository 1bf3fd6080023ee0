pub mod question;
pub mod result_set;
pub mod selectors;
pub mod validation;

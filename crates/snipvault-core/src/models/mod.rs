pub mod conflict;
pub mod payload;
pub mod snippet;

pub mod classify;
pub mod scan;

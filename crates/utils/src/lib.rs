pub mod dates;
pub mod search;

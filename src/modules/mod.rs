pub mod basis;
pub mod parse;

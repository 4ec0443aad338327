pub mod cli;
pub mod fragment;
pub mod row;

pub use cli::to_fragment::{convert, csv_to_fragment, Error};
pub use fragment::{Entry, ToXml};

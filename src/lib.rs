pub mod app;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod grid;
pub mod money;
pub mod session;
pub mod view;

pub mod test_helpers;

pub use error::{
    Error,
    Result,
};

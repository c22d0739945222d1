mod app;
pub mod components;
pub mod route;

pub use app::{App, Site};
pub use route::Route;

#[cfg(test)]
pub mod test_support;

pub mod items_client;

#[cfg(test)]
pub mod mock_backend;

pub use items_client::*;

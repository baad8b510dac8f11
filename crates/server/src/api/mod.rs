pub mod catalog;
pub mod mock_store;

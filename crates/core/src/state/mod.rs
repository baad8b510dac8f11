pub mod catalog_state;
pub mod draft;

pub use catalog_state::{CatalogAction, CatalogState};
pub use draft::{DraftField, ProductDraft};

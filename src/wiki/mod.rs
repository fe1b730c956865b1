//! Wiki domain module
//!
//! Defines the page entity, the title allow-list validator, and the
//! flat-file page store.

pub mod page;
pub mod store;
pub mod title;

// Re-export the types handlers work with
pub use page::Page;
pub use store::{PageStore, StoreError};
pub use title::{Title, TitleError, TitleValidator};

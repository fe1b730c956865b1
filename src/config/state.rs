// Application state module
// Process-wide immutable state, built once at startup

use std::path::Path;

use super::types::Config;
use crate::templates::{TemplateError, TemplateSet};
use crate::wiki::{PageStore, TitleValidator};

/// Application state shared by every request handler
///
/// Everything here is initialized once in `main` and never mutated;
/// handlers receive it behind an `Arc` instead of reaching for globals.
pub struct AppState {
    pub config: Config,
    pub store: PageStore,
    pub templates: TemplateSet,
    pub validator: TitleValidator,
}

impl AppState {
    /// Build the full application state from configuration
    ///
    /// Loads the template set eagerly; a missing template file fails
    /// startup rather than the first request.
    pub fn new(config: Config) -> Result<Self, TemplateError> {
        let templates = TemplateSet::load(Path::new(&config.templates.dir))?;
        let store = PageStore::new(&config.storage.data_dir);
        Ok(Self {
            config,
            store,
            templates,
            validator: TitleValidator::new(),
        })
    }
}

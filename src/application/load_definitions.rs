//! Load definitions use case
//!
//! Feeds every discovered definition file to the engine, then exports the
//! loaded set, clears the engine and restores the set again.

use crate::application::dto::BatchOptions;
use crate::domain::repositories::{DetectionEngine, EngineError};
use std::path::PathBuf;
use tracing::{debug, info};

/// Load definitions use case
pub struct LoadDefinitionsUseCase {
    options: BatchOptions,
}

impl LoadDefinitionsUseCase {
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// Loads all files into the engine, returning the loaded count
    ///
    /// The first failing file aborts loading.
    pub fn execute<E: DetectionEngine>(
        &self,
        engine: &mut E,
        files: &[PathBuf],
    ) -> Result<usize, EngineError> {
        for file in files {
            engine.load_definition(file)?;
        }
        info!("Loaded {} definition(s)", engine.definition_count());

        if !self.options.skip_reload {
            let snapshot = engine.definitions();
            engine.clear_definitions();
            engine.set_definitions(snapshot);
            debug!(
                "Definition set restored from snapshot ({} definitions)",
                engine.definition_count()
            );
        }

        Ok(engine.definition_count())
    }
}

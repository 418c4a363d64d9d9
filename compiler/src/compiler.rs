use std::path::PathBuf;

use jvpp_gen_schema::ApiDescription;
use serde::Serialize;

use crate::{
    callback_gen::generate_callbacks,
    classify::classify_all,
    config::{GeneratorConfig, OutputLayout},
    dto_gen::generate_dtos,
    error::GenError,
    future_gen::generate_future_facade,
    gen_java::JavaBackend,
    output::ensure_output_dir,
    traits::Backend,
    verifier::verify_api,
};

/// Paths written by each generator, in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub callbacks: Vec<PathBuf>,
    pub dtos:      Vec<PathBuf>,
    pub future:    Vec<PathBuf>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.callbacks.len() + self.dtos.len() + self.future.len()
    }
}

/// Verify `api`, then run the callback, DTO and future facade generators in
/// sequence, printing Java sources.
/// Returns `Err(GenError)` on the first failure; rerunning from scratch is
/// the only recovery.
pub fn compile_api(
    api: &ApiDescription,
    config: &GeneratorConfig,
    layout: &OutputLayout,
) -> Result<GenerationReport, GenError> {
    compile_api_with(api, config, layout, &JavaBackend)
}

pub fn compile_api_with(
    api: &ApiDescription,
    config: &GeneratorConfig,
    layout: &OutputLayout,
    backend: &dyn Backend,
) -> Result<GenerationReport, GenError> {
    config.validate()?;
    verify_api(api, &config.naming)?;
    for dir in [&layout.callback_dir, &layout.dto_dir, &layout.future_dir] {
        ensure_output_dir(dir)?;
    }

    let messages = classify_all(api, &config.naming);
    tracing::info!("Classified {} messages from {}", messages.len(), config.input_file);

    let callbacks = generate_callbacks(&messages, config, &layout.callback_dir, backend)?;
    let dtos = generate_dtos(&messages, config, &layout.dto_dir, backend)?;
    let future = generate_future_facade(&messages, config, &layout.future_dir, backend)?;

    Ok(GenerationReport { callbacks, dtos, future })
}

//! Callback interfaces: one per reply or notification, plus the global
//! callback extending all of them.

use std::path::{Path, PathBuf};

use crate::{
    classify::ClassifiedMessage,
    config::GeneratorConfig,
    error::GenError,
    ir::{CompilationUnit, Member},
    naming::{add_notification_suffix, remove_reply_suffix, CALLBACK_SUFFIX},
    output::{ensure_output_dir, write_units},
    traits::Backend,
    utils::message_javadoc,
};

pub const GLOBAL_CALLBACK: &str = "JVppGlobalCallback";

/// Type reference of the DTO a callback receives. Control-ping DTOs are
/// framework types and are never generated into the plugin package.
pub(crate) fn dto_reference(message: &ClassifiedMessage<'_>, dto_name: &str, config: &GeneratorConfig) -> String {
    if message.class.is_control_ping() {
        config.base_dto(dto_name)
    } else {
        config.plugin_dto(dto_name)
    }
}

pub fn build_callbacks(
    messages: &[ClassifiedMessage<'_>],
    config: &GeneratorConfig,
) -> Result<Vec<CompilationUnit>, GenError> {
    let package = format!("{}.{}", config.plugin_package, config.callback_package);
    let mut units = Vec::new();
    let mut callbacks: Vec<String> = Vec::new();

    for message in messages {
        let class = message.class;
        if class.is_ignored() || (!class.is_reply() && !class.is_notification()) {
            continue;
        }

        let (base_name, dto_name, callback_type) = if class.is_reply() {
            (
                remove_reply_suffix(&message.class_name).to_string(),
                message.class_name.clone(),
                "JVppCallback",
            )
        } else {
            let dto_name = add_notification_suffix(&message.class_name);
            (dto_name.clone(), dto_name, "JVppNotificationCallback")
        };
        let callback_name = format!("{}{}", base_name, CALLBACK_SUFFIX);

        let mut unit = CompilationUnit::interface(package.clone(), callback_name.clone());
        unit.javadoc = message_javadoc(
            &format!("Represents callback for {} message.", message.name()),
            "callback_gen",
            &config.input_file,
            message.descriptor,
        )?;
        unit.supertypes
            .push(config.base_type(&config.callback_package, callback_type));
        unit.members.push(Member::CallbackMethod {
            method:     format!("on{}", dto_name),
            param_type: dto_reference(message, &dto_name, config),
        });
        units.push(unit);

        let reference = config.plugin_type(&config.callback_package, &callback_name);
        if !callbacks.contains(&reference) {
            callbacks.push(reference);
        }
    }

    let mut global = CompilationUnit::interface(package, GLOBAL_CALLBACK);
    global.javadoc = vec![
        "<p>Global aggregated callback interface.".to_string(),
        format!(
            "<br>It was generated by callback_gen based on {}",
            config.input_file
        ),
        "<br>(preparsed representation of the API description).".to_string(),
    ];
    global.supertypes = callbacks;
    units.push(global);

    Ok(units)
}

/// Write the callback interfaces into `out_dir`.
pub fn generate_callbacks(
    messages: &[ClassifiedMessage<'_>],
    config: &GeneratorConfig,
    out_dir: &Path,
    backend: &dyn Backend,
) -> Result<Vec<PathBuf>, GenError> {
    tracing::info!("Generating Callback interfaces");
    ensure_output_dir(out_dir)?;

    let units = build_callbacks(messages, config)?;
    let written = write_units(out_dir, &units, backend)?;
    tracing::info!("Wrote {} callback interfaces to {}", written.len(), out_dir.display());
    Ok(written)
}

//! The future facade callback: completes the `CompletableFuture` registered
//! for a request when its reply (or its dump) arrives.
//!
//! Notifications are not routed to futures.

use std::path::{Path, PathBuf};

use crate::{
    callback_gen::{dto_reference, GLOBAL_CALLBACK},
    classify::ClassifiedMessage,
    config::GeneratorConfig,
    error::GenError,
    ir::{CompilationUnit, Completion, Member},
    naming::dump_reply_wrapper_name,
    output::{ensure_output_dir, write_units},
    traits::Backend,
};

pub const FACADE_CALLBACK: &str = "FutureJVppFacadeCallback";

/// Future type accumulating the records of a dump.
const DUMP_FUTURE: &str = "FutureJVppFacade.CompletableDumpFuture";

pub fn build_future_facade(messages: &[ClassifiedMessage<'_>], config: &GeneratorConfig) -> CompilationUnit {
    let reply_base = config.base_dto("JVppReply");
    let dump_future = config.base_type(&config.future_package, DUMP_FUTURE);

    let mut unit = CompilationUnit::class(
        format!("{}.{}", config.plugin_package, config.future_package),
        FACADE_CALLBACK,
    );
    unit.javadoc = vec!["Async facade callback setting values to future objects".to_string()];
    unit.supertypes
        .push(config.plugin_type(&config.callback_package, GLOBAL_CALLBACK));
    unit.members.push(Member::FacadeState {
        class_name: FACADE_CALLBACK.to_string(),
        reply_base: reply_base.clone(),
    });

    for message in messages {
        let class = message.class;
        if class.is_notification() || class.is_ignored() || !class.is_reply() {
            continue;
        }

        let completion = if class.is_details() {
            Completion::Details {
                dump_future:  dump_future.clone(),
                wrapper_type: config.plugin_dto(&dump_reply_wrapper_name(message.name(), &config.naming)),
                field:        message.method_name.clone(),
            }
        } else if class.is_control_ping() {
            Completion::ControlPing { dump_future: dump_future.clone() }
        } else {
            Completion::Plain
        };

        unit.members.push(Member::FacadeCallback {
            method:     format!("on{}", message.class_name),
            reply_type: dto_reference(message, &message.class_name, config),
            reply_base: reply_base.clone(),
            completion,
        });
    }

    unit
}

/// Write the facade callback into `out_dir`.
pub fn generate_future_facade(
    messages: &[ClassifiedMessage<'_>],
    config: &GeneratorConfig,
    out_dir: &Path,
    backend: &dyn Backend,
) -> Result<Vec<PathBuf>, GenError> {
    tracing::info!("Generating JVpp future facade");
    ensure_output_dir(out_dir)?;

    let unit = build_future_facade(messages, config);
    write_units(out_dir, &[unit], backend)
}

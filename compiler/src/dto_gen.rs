//! Data transfer objects: one class per request, reply and notification,
//! plus the dump-reply wrappers.

use std::path::{Path, PathBuf};

use crate::{
    classify::ClassifiedMessage,
    config::GeneratorConfig,
    dump_reply::DumpReplyAccumulator,
    error::GenError,
    ir::{CompilationUnit, Field, Member},
    naming::{add_notification_suffix, dump_request_name, resolve_request_name, to_lower_camel},
    output::{ensure_output_dir, write_units},
    traits::Backend,
    types::wire_type_to_java,
    utils::message_javadoc,
};

/// Replies report their status out of band of the data fields.
pub const RETVAL_FIELD: &str = "retval";

/// One field per argument, in order, without the status field of replies.
pub fn dto_fields(message: &ClassifiedMessage<'_>) -> Result<Vec<Field>, GenError> {
    let mut fields = Vec::with_capacity(message.descriptor.args.len());
    for (arg, tag) in message.descriptor.arguments() {
        let name = to_lower_camel(arg);
        if message.class.is_reply() && name == RETVAL_FIELD {
            continue;
        }
        fields.push(Field::new(name, wire_type_to_java(message.name(), tag)?));
    }
    Ok(fields)
}

fn dto_unit(
    config: &GeneratorConfig,
    message: &ClassifiedMessage<'_>,
    class_name: &str,
    description: &str,
    supertype: String,
    fields: &[Field],
) -> Result<CompilationUnit, GenError> {
    let mut unit = CompilationUnit::class(
        format!("{}.{}", config.plugin_package, config.dto_package),
        class_name,
    );
    unit.javadoc = message_javadoc(
        &format!("This class represents {}.", description),
        "dto_gen",
        &config.input_file,
        message.descriptor,
    )?;
    unit.supertypes.push(supertype);
    unit.fields = fields.to_vec();
    unit.members = Member::structural(class_name, fields);
    Ok(unit)
}

pub fn build_dtos(
    messages: &[ClassifiedMessage<'_>],
    config: &GeneratorConfig,
) -> Result<Vec<CompilationUnit>, GenError> {
    let mut units = Vec::new();
    let mut dump_replies = DumpReplyAccumulator::new();

    for message in messages {
        let class = message.class;
        // Control pings are framework DTOs
        if class.is_ignored() || class.is_control_ping() {
            continue;
        }

        let fields = dto_fields(message)?;

        // Requests and replies get their DTO even when the structure is
        // reused as a notification.
        if !class.is_just_notification() {
            let unit = if class.is_reply() {
                let request = if class.is_details() {
                    dump_replies.record(message, config)?;
                    dump_request_name(message.name(), &config.naming)
                } else {
                    resolve_request_name(&message.class_name, message.name(), &config.naming)
                };
                let supertype = format!(
                    "{}<{}>",
                    config.base_dto("JVppReply"),
                    config.plugin_dto(&request)
                );
                dto_unit(config, message, &message.class_name, "reply DTO", supertype, &fields)?
            } else {
                let (description, supertype) = if class.is_dump() {
                    ("dump request DTO", config.base_dto("JVppDump"))
                } else {
                    ("request DTO", config.base_dto("JVppRequest"))
                };
                let mut unit =
                    dto_unit(config, message, &message.class_name, description, supertype, &fields)?;
                unit.members.push(Member::Send {
                    jvpp_type:   format!("{}.JVpp", config.base_package),
                    plugin_jvpp: format!("{}.JVpp{}", config.plugin_package, config.plugin_name),
                    exception:   format!("{}.VppInvocationException", config.base_package),
                    method:      message.method_name.clone(),
                    pass_self:   !fields.is_empty(),
                });
                unit
            };
            units.push(unit);
        }

        if class.is_notification() {
            let class_name = add_notification_suffix(&message.class_name);
            units.push(dto_unit(
                config,
                message,
                &class_name,
                "notification DTO",
                config.base_dto("JVppNotification"),
                &fields,
            )?);
        }
    }

    tracing::debug!("Flushing {} dump reply wrappers", dump_replies.len());
    units.extend(dump_replies.finish(config));
    Ok(units)
}

/// Write the DTO classes into `out_dir`.
pub fn generate_dtos(
    messages: &[ClassifiedMessage<'_>],
    config: &GeneratorConfig,
    out_dir: &Path,
    backend: &dyn Backend,
) -> Result<Vec<PathBuf>, GenError> {
    tracing::info!("Generating DTOs");
    ensure_output_dir(out_dir)?;

    let units = build_dtos(messages, config)?;
    let written = write_units(out_dir, &units, backend)?;
    tracing::info!("Wrote {} DTOs to {}", written.len(), out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::classify_all, ir::HashStrategy};
    use jvpp_gen_schema::{ApiDescription, MessageDescriptor};

    fn build(messages: Vec<MessageDescriptor>, config: &GeneratorConfig) -> Vec<CompilationUnit> {
        let api = ApiDescription::new(messages);
        let classified = classify_all(&api, &config.naming);
        build_dtos(&classified, config).expect("dtos build")
    }

    fn find<'a>(units: &'a [CompilationUnit], name: &str) -> &'a CompilationUnit {
        units
            .iter()
            .find(|u| u.name == name)
            .unwrap_or_else(|| panic!("no unit named {}", name))
    }

    #[test]
    fn reply_drops_status_field() {
        let config = GeneratorConfig::default();
        let units = build(
            vec![MessageDescriptor::new(
                "show_version_reply",
                ["context", "retval", "program"],
                ["i32", "i32", "string"],
            )],
            &config,
        );
        assert_eq!(units.len(), 1);
        let reply = &units[0];
        assert_eq!(reply.name, "ShowVersionReply");
        assert_eq!(reply.field_names(), vec!["context", "program"]);
        assert_eq!(
            reply.supertypes,
            vec!["io.fd.vpp.jvpp.dto.JVppReply<io.fd.vpp.jvpp.core.dto.ShowVersion>"]
        );
    }

    #[test]
    fn requests_dispatch_themselves() {
        let config = GeneratorConfig::default();
        let units = build(
            vec![
                MessageDescriptor::new("show_version", Vec::<String>::new(), Vec::<String>::new()),
                MessageDescriptor::new("sw_interface_dump", ["name_filter"], ["u8[]"]),
            ],
            &config,
        );

        let show = find(&units, "ShowVersion");
        assert_eq!(show.supertypes, vec!["io.fd.vpp.jvpp.dto.JVppRequest"]);
        assert!(show.members.contains(&Member::Send {
            jvpp_type:   "io.fd.vpp.jvpp.JVpp".into(),
            plugin_jvpp: "io.fd.vpp.jvpp.core.JVppCore".into(),
            exception:   "io.fd.vpp.jvpp.VppInvocationException".into(),
            method:      "showVersion".into(),
            pass_self:   false,
        }));

        let dump = find(&units, "SwInterfaceDump");
        assert_eq!(dump.supertypes, vec!["io.fd.vpp.jvpp.dto.JVppDump"]);
        assert_eq!(dump.hash_strategy(), Some(&HashStrategy::SingleArray("nameFilter".into())));
        assert!(dump
            .members
            .iter()
            .any(|m| matches!(m, Member::Send { pass_self: true, .. })));
    }

    #[test]
    fn reused_notification_gets_second_dto() {
        let config = GeneratorConfig::default();
        let units = build(
            vec![
                MessageDescriptor::new(
                    "sw_interface_set_flags",
                    ["sw_if_index", "admin_up_down"],
                    ["u32", "u8"],
                ),
                MessageDescriptor::new("ip4_arp_event", ["address"], ["u32"]),
            ],
            &config,
        );
        let names: Vec<_> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["SwInterfaceSetFlags", "SwInterfaceSetFlagsNotification", "Ip4ArpEventNotification"]
        );
        let notification = find(&units, "SwInterfaceSetFlagsNotification");
        assert_eq!(notification.supertypes, vec!["io.fd.vpp.jvpp.dto.JVppNotification"]);
        assert!(notification.members.contains(&Member::ToString {
            class_name: "SwInterfaceSetFlagsNotification".into(),
            fields:     notification.fields.clone(),
        }));
    }

    #[test]
    fn details_reply_points_at_dump_and_feeds_wrapper() {
        let config = GeneratorConfig::default();
        let units = build(
            vec![
                MessageDescriptor::new("bridge_domain_details", ["context", "bd_id"], ["u32", "u32"]),
                MessageDescriptor::new(
                    "bridge_domain_sw_if_details",
                    ["context", "sw_if_index"],
                    ["u32", "u32"],
                ),
            ],
            &config,
        );
        let names: Vec<_> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["BridgeDomainDetails", "BridgeDomainSwIfDetails", "BridgeDomainDumpReplyDump"]
        );
        assert_eq!(
            find(&units, "BridgeDomainSwIfDetails").supertypes,
            vec!["io.fd.vpp.jvpp.dto.JVppReply<io.fd.vpp.jvpp.core.dto.BridgeDomainDump>"]
        );
        assert_eq!(
            find(&units, "BridgeDomainDumpReplyDump").field_names(),
            vec!["bridgeDomainDetails", "bridgeDomainSwIfDetails"]
        );
    }

    #[test]
    fn control_ping_and_ignored_are_skipped() {
        let config = GeneratorConfig::default();
        let units = build(
            vec![
                MessageDescriptor::new("control_ping", ["context"], ["u32"]),
                MessageDescriptor::new("control_ping_reply", ["context", "retval"], ["u32", "i32"]),
                MessageDescriptor::new("is_address_reachable", ["context"], ["u32"]),
            ],
            &config,
        );
        assert!(units.is_empty());
    }

    #[test]
    fn unknown_wire_type_aborts() {
        let config = GeneratorConfig::default();
        let api = ApiDescription::new(vec![MessageDescriptor::new("weird", ["x"], ["u128"])]);
        let classified = classify_all(&api, &config.naming);
        assert!(matches!(
            build_dtos(&classified, &config),
            Err(GenError::UnknownWireType { .. })
        ));
    }
}

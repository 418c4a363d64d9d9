//! Synthetic dump-reply wrappers.
//!
//! A dump answers with a stream of details records terminated by a control
//! ping. Each dump gets one wrapper class holding a list per details type;
//! a dump family may return several details types (sub-details), each ends
//! up as another list on the same wrapper.

use std::collections::HashMap;

use crate::{
    classify::ClassifiedMessage,
    config::GeneratorConfig,
    error::GenError,
    ir::{CompilationUnit, Field, Member},
    naming::{dump_reply_wrapper_name, dump_request_name},
    types::JavaType,
    utils::message_javadoc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpReplyWrapper {
    /// `FooDump`, the identity of the wrapper.
    pub dump_request: String,
    /// `FooDumpReplyDump`
    pub class_name:   String,
    /// Details type named in the `JVppReplyDump` supertype (first seen).
    pub details_type: String,
    pub javadoc:      Vec<String>,
    pub fields:       Vec<Field>,
}

/// Collects details messages during the DTO pass. Consumed by
/// [`DumpReplyAccumulator::finish`] once every message has been seen, so a
/// wrapper can never be emitted before all of its details are merged.
#[derive(Debug, Default)]
pub struct DumpReplyAccumulator {
    wrappers: Vec<DumpReplyWrapper>,
    index:    HashMap<String, usize>,
}

impl DumpReplyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a details message. Creates the wrapper on first sight of its
    /// dump, appends a list field otherwise.
    pub fn record(&mut self, message: &ClassifiedMessage<'_>, config: &GeneratorConfig) -> Result<(), GenError> {
        let naming = &config.naming;
        let dump_request = dump_request_name(message.name(), naming);
        let field = Field::new(
            message.method_name.clone(),
            JavaType::List(config.plugin_dto(&message.class_name)),
        );

        if let Some(&i) = self.index.get(&dump_request) {
            tracing::debug!("Adding {} to dump reply {}", message.name(), self.wrappers[i].class_name);
            self.wrappers[i].fields.push(field);
            return Ok(());
        }

        let javadoc = message_javadoc(
            "This class represents dump reply wrapper.",
            "dto_gen",
            &config.input_file,
            message.descriptor,
        )?;
        self.index.insert(dump_request.clone(), self.wrappers.len());
        self.wrappers.push(DumpReplyWrapper {
            class_name: dump_reply_wrapper_name(message.name(), naming),
            dump_request,
            details_type: message.class_name.clone(),
            javadoc,
            fields: vec![field],
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    pub fn get(&self, dump_request: &str) -> Option<&DumpReplyWrapper> {
        self.index.get(dump_request).map(|&i| &self.wrappers[i])
    }

    /// One unit per wrapper, in first-seen order. Structural methods cover
    /// the cumulative field list.
    pub fn finish(self, config: &GeneratorConfig) -> Vec<CompilationUnit> {
        self.wrappers
            .into_iter()
            .map(|wrapper| {
                let mut unit = CompilationUnit::class(
                    format!("{}.{}", config.plugin_package, config.dto_package),
                    wrapper.class_name.clone(),
                );
                unit.javadoc = wrapper.javadoc;
                unit.supertypes.push(format!(
                    "{}<{}, {}>",
                    config.base_dto("JVppReplyDump"),
                    config.plugin_dto(&wrapper.dump_request),
                    config.plugin_dto(&wrapper.details_type)
                ));
                unit.members = Member::structural(&wrapper.class_name, &wrapper.fields);
                unit.fields = wrapper.fields;
                unit
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::HashStrategy;
    use jvpp_gen_schema::MessageDescriptor;

    fn details(name: &str) -> MessageDescriptor {
        MessageDescriptor::new(name, ["context", "id"], ["u32", "u32"])
    }

    #[test]
    fn details_of_one_dump_share_a_wrapper() {
        let mut config = GeneratorConfig::default();
        config.naming = config.naming.clone().with_request_for("bar_details", "foo");
        let foo = details("foo_details");
        let bar = details("bar_details");

        let mut acc = DumpReplyAccumulator::new();
        acc.record(&ClassifiedMessage::new(&foo, &config.naming), &config).unwrap();
        acc.record(&ClassifiedMessage::new(&bar, &config.naming), &config).unwrap();
        assert_eq!(acc.len(), 1);

        let wrapper = acc.get("FooDump").expect("wrapper keyed by dump request");
        assert_eq!(wrapper.class_name, "FooDumpReplyDump");
        assert_eq!(wrapper.details_type, "FooDetails");

        let units = acc.finish(&config);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].field_names(), vec!["fooDetails", "barDetails"]);
        assert_eq!(
            units[0].hash_strategy(),
            Some(&HashStrategy::Combined(vec!["fooDetails".into(), "barDetails".into()]))
        );
    }

    #[test]
    fn single_details_hashes_list_contents() {
        let config = GeneratorConfig::default();
        let msg = details("sw_interface_details");
        let mut acc = DumpReplyAccumulator::new();
        acc.record(&ClassifiedMessage::new(&msg, &config.naming), &config).unwrap();

        let units = acc.finish(&config);
        assert_eq!(units[0].name, "SwInterfaceDumpReplyDump");
        assert_eq!(
            units[0].hash_strategy(),
            Some(&HashStrategy::SingleCollection("swInterfaceDetails".into()))
        );
        assert_eq!(
            units[0].supertypes,
            vec![
                "io.fd.vpp.jvpp.dto.JVppReplyDump<io.fd.vpp.jvpp.core.dto.SwInterfaceDump, \
                 io.fd.vpp.jvpp.core.dto.SwInterfaceDetails>"
                    .to_string()
            ]
        );
    }
}

//! Message classification, computed once per message from its name and
//! consumed by every generator.

use std::fmt;

use jvpp_gen_schema::{ApiDescription, MessageDescriptor};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::{
    config::NamingConfig,
    naming::{normalize, to_lower_camel, to_upper_camel},
};

// All patterns run against `naming::normalize` output, so classification
// does not depend on whether the name was camel-cased first.
lazy_static! {
    static ref REPLY:             Regex = Regex::new(r"(reply|details|l2fibtableentry)$").unwrap();
    static ref DETAILS:           Regex = Regex::new(r"(details|l2fibtableentry)$").unwrap();
    static ref DUMP:              Regex = Regex::new(r"dump$").unwrap();
    static ref JUST_NOTIFICATION: Regex = Regex::new(r"(event|counters)$").unwrap();
    static ref CONTROL_PING:      Regex = Regex::new(r"^controlping").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Request,
    Reply,
    Dump,
    Details,
    Notification,
    ControlPing,
    Ignored,
}

const ALL_ROLES: [Role; 7] = [
    Role::Request,
    Role::Reply,
    Role::Dump,
    Role::Details,
    Role::Notification,
    Role::ControlPing,
    Role::Ignored,
];

impl Role {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of roles a message plays. A structure can be both a request (or
/// reply) and a notification.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Classification(u8);

impl Classification {
    fn with(self, role: Role) -> Self {
        Classification(self.0 | role.bit())
    }

    pub fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn roles(self) -> impl Iterator<Item = Role> {
        ALL_ROLES.into_iter().filter(move |r| self.contains(*r))
    }

    pub fn is_ignored(self) -> bool {
        self.contains(Role::Ignored)
    }

    pub fn is_reply(self) -> bool {
        self.contains(Role::Reply)
    }

    pub fn is_request(self) -> bool {
        self.contains(Role::Request)
    }

    pub fn is_details(self) -> bool {
        self.contains(Role::Details)
    }

    pub fn is_dump(self) -> bool {
        self.contains(Role::Dump)
    }

    pub fn is_control_ping(self) -> bool {
        self.contains(Role::ControlPing)
    }

    pub fn is_notification(self) -> bool {
        self.contains(Role::Notification)
    }

    /// Notification with no request or reply use.
    pub fn is_just_notification(self) -> bool {
        self.is_notification() && !self.is_request() && !self.is_reply()
    }
}

impl fmt::Debug for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.roles()).finish()
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.roles())
    }
}

/// Total: a name matching nothing is a plain request.
pub fn classify(name: &str, naming: &NamingConfig) -> Classification {
    let class = Classification::default();
    if naming.is_ignored(name) {
        return class.with(Role::Ignored);
    }

    let key = normalize(name);
    let mut class = if REPLY.is_match(&key) {
        let class = class.with(Role::Reply);
        if DETAILS.is_match(&key) {
            class.with(Role::Details)
        } else {
            class
        }
    } else if JUST_NOTIFICATION.is_match(&key) {
        class.with(Role::Notification)
    } else if DUMP.is_match(&key) {
        class.with(Role::Request).with(Role::Dump)
    } else {
        class.with(Role::Request)
    };

    if CONTROL_PING.is_match(&key) {
        class = class.with(Role::ControlPing);
    }
    if naming.is_reused_notification(name) {
        class = class.with(Role::Notification);
    }
    class
}

/// A descriptor together with its derived names and classification.
#[derive(Debug, Clone)]
pub struct ClassifiedMessage<'a> {
    pub descriptor: &'a MessageDescriptor,
    /// `ShowVersionReply`
    pub class_name: String,
    /// `showVersionReply`
    pub method_name: String,
    pub class: Classification,
}

impl<'a> ClassifiedMessage<'a> {
    pub fn new(descriptor: &'a MessageDescriptor, naming: &NamingConfig) -> Self {
        let class = classify(&descriptor.name, naming);
        tracing::trace!("{} classified as {:?}", descriptor.name, class);
        ClassifiedMessage {
            descriptor,
            class_name: to_upper_camel(&descriptor.name),
            method_name: to_lower_camel(&descriptor.name),
            class,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

pub fn classify_all<'a>(api: &'a ApiDescription, naming: &NamingConfig) -> Vec<ClassifiedMessage<'a>> {
    api.messages
        .iter()
        .map(|descriptor| ClassifiedMessage::new(descriptor, naming))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(name: &str) -> Vec<Role> {
        classify(name, &NamingConfig::default()).roles().collect()
    }

    #[test]
    fn classifies_by_suffix() {
        assert_eq!(roles("show_version"), vec![Role::Request]);
        assert_eq!(roles("show_version_reply"), vec![Role::Reply]);
        assert_eq!(roles("sw_interface_dump"), vec![Role::Request, Role::Dump]);
        assert_eq!(roles("sw_interface_details"), vec![Role::Reply, Role::Details]);
        assert_eq!(roles("l2_fib_table_entry"), vec![Role::Reply, Role::Details]);
        assert_eq!(roles("ip4_arp_event"), vec![Role::Notification]);
        assert_eq!(roles("vnet_interface_counters"), vec![Role::Notification]);
        assert_eq!(roles("control_ping"), vec![Role::Request, Role::ControlPing]);
        assert_eq!(roles("control_ping_reply"), vec![Role::Reply, Role::ControlPing]);
        assert_eq!(roles("is_address_reachable"), vec![Role::Ignored]);
    }

    #[test]
    fn reused_structures_are_also_notifications() {
        let naming = NamingConfig::default();
        let flags = classify("sw_interface_set_flags", &naming);
        assert!(flags.is_request() && flags.is_notification());
        assert!(!flags.is_just_notification());

        let bfd = classify("bfd_udp_session_details", &naming);
        assert!(bfd.is_reply() && bfd.is_details() && bfd.is_notification());

        assert!(classify("ip4_arp_event", &naming).is_just_notification());
    }

    #[test]
    fn configured_entries_extend_the_tables() {
        let naming = NamingConfig::default()
            .with_ignored("legacy_stats_dump")
            .with_reused_notification("lldp_config");

        assert_eq!(classify("legacy_stats_dump", &naming).roles().collect::<Vec<_>>(), vec![Role::Ignored]);
        assert!(classify("is_address_reachable", &naming).is_ignored());

        let lldp = classify("lldp_config", &naming);
        assert!(lldp.is_request() && lldp.is_notification());
        assert!(!classify("lldp_config", &NamingConfig::default()).is_notification());
    }

    #[test]
    fn classification_survives_camel_casing() {
        let naming = NamingConfig::default();
        for name in [
            "show_version_reply",
            "sw_interface_dump",
            "bridge_domain_sw_if_details",
            "l2_fib_table_entry",
            "want_interface_events",
            "ip4_arp_event",
            "control_ping_reply",
            "sw_interface_set_flags",
            "is_address_reachable",
        ] {
            assert_eq!(
                classify(&to_upper_camel(name), &naming),
                classify(name, &naming),
                "{}",
                name
            );
        }
    }
}

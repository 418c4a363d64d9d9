//! Identifier conversions between the upstream snake_case names and Java
//! CamelCase, plus the suffix rules used to pair replies with requests.

use crate::config::NamingConfig;

pub const NOTIFICATION_SUFFIX: &str = "Notification";
pub const CALLBACK_SUFFIX: &str = "Callback";
pub const DUMP_SUFFIX: &str = "Dump";
pub const REPLY_DUMP_SUFFIX: &str = "ReplyDump";

/// `show_version_reply` -> `ShowVersionReply`.
///
/// Follows title-casing rules: a letter is uppercased when it does not
/// follow another letter, every other letter is lowercased, underscores are
/// dropped. `ip4_arp_event` therefore becomes `Ip4ArpEvent`.
pub fn to_upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        if c == '_' {
            prev_is_letter = false;
            continue;
        }
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// `show_version_reply` -> `showVersionReply`.
pub fn to_lower_camel(name: &str) -> String {
    let upper = to_upper_camel(name);
    let mut chars = upper.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Casing- and separator-insensitive form used for every name comparison.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Suffix (in CamelCase length terms) that separates a reply name from its
/// request name. `L2FibTableEntry` is a details message whose reply suffix is
/// only `Entry`.
fn reply_suffix_len(camel_name: &str) -> usize {
    let normalized = normalize(camel_name);
    if normalized.ends_with("l2fibtableentry") {
        "entry".len()
    } else if normalized.ends_with("details") {
        "details".len()
    } else if normalized.ends_with("reply") {
        "reply".len()
    } else {
        0
    }
}

pub fn remove_reply_suffix(camel_name: &str) -> &str {
    let cut = camel_name.len().saturating_sub(reply_suffix_len(camel_name));
    camel_name.get(..cut).unwrap_or(camel_name)
}

pub fn add_notification_suffix(camel_name: &str) -> String {
    format!("{}{}", camel_name, NOTIFICATION_SUFFIX)
}

/// Request DTO name for a reply: taken from the irregular-naming table when
/// the upstream name is listed there, otherwise the reply name minus its
/// reply suffix.
pub fn resolve_request_name(reply_camel: &str, snake_name: &str, naming: &NamingConfig) -> String {
    match naming.request_for(snake_name) {
        Some(request) => to_upper_camel(request),
        None => remove_reply_suffix(reply_camel).to_string(),
    }
}

/// Dump request DTO that a details message answers, e.g. `FooDump`.
pub fn dump_request_name(details_name: &str, naming: &NamingConfig) -> String {
    let request = resolve_request_name(&to_upper_camel(details_name), details_name, naming);
    format!("{}{}", request, DUMP_SUFFIX)
}

/// Synthetic wrapper collecting every details record of one dump, e.g.
/// `FooDumpReplyDump`.
pub fn dump_reply_wrapper_name(details_name: &str, naming: &NamingConfig) -> String {
    format!("{}{}", dump_request_name(details_name, naming), REPLY_DUMP_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_conversions() {
        assert_eq!(to_upper_camel("show_version_reply"), "ShowVersionReply");
        assert_eq!(to_lower_camel("show_version_reply"), "showVersionReply");
        assert_eq!(to_upper_camel("ip4_arp_event"), "Ip4ArpEvent");
        assert_eq!(to_upper_camel("l2_fib_table_entry"), "L2FibTableEntry");
        assert_eq!(to_upper_camel("sw_if_index"), "SwIfIndex");
        assert_eq!(to_lower_camel("context"), "context");
        assert_eq!(to_lower_camel(""), "");
    }

    #[test]
    fn conversion_is_lossy() {
        assert_eq!(to_upper_camel("foo__bar"), "FooBar");
        assert_eq!(to_upper_camel("FOO_BAR"), "FooBar");
    }

    #[test]
    fn reply_suffix_stripping() {
        assert_eq!(remove_reply_suffix("ShowVersionReply"), "ShowVersion");
        assert_eq!(remove_reply_suffix("SwInterfaceDetails"), "SwInterface");
        assert_eq!(remove_reply_suffix("L2FibTableEntry"), "L2FibTable");
        assert_eq!(remove_reply_suffix("ShowVersion"), "ShowVersion");
    }

    #[test]
    fn request_names_prefer_exception_table() {
        let naming = NamingConfig::default();
        assert_eq!(resolve_request_name("CliReply", "cli_reply", &naming), "CliRequest");
        assert_eq!(
            resolve_request_name("VnetSummaryStatsReply", "vnet_summary_stats_reply", &naming),
            "VnetGetSummaryStats"
        );
        assert_eq!(resolve_request_name("ShowVersionReply", "show_version_reply", &naming), "ShowVersion");
    }

    #[test]
    fn dump_names() {
        let naming = NamingConfig::default();
        assert_eq!(dump_request_name("sw_interface_details", &naming), "SwInterfaceDump");
        assert_eq!(dump_request_name("bridge_domain_sw_if_details", &naming), "BridgeDomainDump");
        assert_eq!(dump_request_name("l2_fib_table_entry", &naming), "L2FibTableDump");
        assert_eq!(
            dump_reply_wrapper_name("bridge_domain_details", &naming),
            "BridgeDomainDumpReplyDump"
        );
    }
}

use std::collections::HashSet;

use jvpp_gen_schema::ApiDescription;

use crate::{config::NamingConfig, error::GenError, types::wire_type_to_java};

/// Returns `Ok(())` if every generated message is well formed: aligned
/// args/types, known wire types, unique names. Ignored messages are not
/// checked.
pub fn verify_api(api: &ApiDescription, naming: &NamingConfig) -> Result<(), GenError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for message in &api.messages {
        if naming.is_ignored(&message.name) {
            tracing::debug!("Skipping verification of ignored message {}", message.name);
            continue;
        }

        if !seen.insert(message.name.as_str()) {
            return Err(GenError::DuplicateMessage(message.name.clone()));
        }

        message.validate()?;

        for tag in &message.types {
            wire_type_to_java(&message.name, tag)?;
        }
    }

    Ok(())
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// One API call or event, in the upstream (snake_case) naming convention.
///
/// `args` and `types` are positionally aligned; [`MessageDescriptor::validate`]
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub name:  String,
    pub args:  Vec<String>,
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc:   String,
}

impl MessageDescriptor {
    pub fn new<N, A, T>(name: N, args: A, types: T) -> Self
    where
        N: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        MessageDescriptor {
            name:  name.into(),
            args:  args.into_iter().map(Into::into).collect(),
            types: types.into_iter().map(Into::into).collect(),
            doc:   String::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// `(arg name, wire type tag)` pairs in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.args
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().map(String::as_str))
    }

    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.args.len() != self.types.len() {
            return Err(DescriptorError::LengthMismatch {
                name:  self.name.clone(),
                args:  self.args.len(),
                types: self.types.len(),
            });
        }
        Ok(())
    }
}

/// Ordered list of message descriptors. Order is preserved all the way to
/// the generated output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiDescription {
    pub messages: Vec<MessageDescriptor>,
}

// Upstream dumps come either as a bare array or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiRepr {
    List(Vec<MessageDescriptor>),
    Wrapped { messages: Vec<MessageDescriptor> },
}

impl<'de> Deserialize<'de> for ApiDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let messages = match ApiRepr::deserialize(deserializer)? {
            ApiRepr::List(messages) => messages,
            ApiRepr::Wrapped { messages } => messages,
        };
        Ok(ApiDescription { messages })
    }
}

impl ApiDescription {
    pub fn new(messages: Vec<MessageDescriptor>) -> Self {
        ApiDescription { messages }
    }

    /// Parse a JSON dump and validate every descriptor.
    pub fn from_json(text: &str) -> Result<Self, DescriptorError> {
        let api: ApiDescription = serde_json::from_str(text)?;
        api.validate()?;
        Ok(api)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DescriptorError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), DescriptorError> {
        self.messages.iter().try_for_each(MessageDescriptor::validate)
    }
}

//! Language-neutral description of a generated source file. Generators
//! decide what goes into a [`CompilationUnit`]; a [`crate::traits::Backend`]
//! decides how it is printed.

use crate::types::JavaType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty:   JavaType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Field { name: name.into(), ty }
    }
}

/// How `hashCode` combines the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashStrategy {
    /// `Objects.hash(a, b, ...)`.
    Combined(Vec<String>),
    /// A lone array must not be passed to the varargs `Objects.hash`, it
    /// would be taken as the argument list itself.
    SingleArray(String),
    /// Content hash of a lone list-valued field.
    SingleCollection(String),
}

impl HashStrategy {
    pub fn for_fields(fields: &[Field]) -> Self {
        match fields {
            [single] if single.ty.is_array() => HashStrategy::SingleArray(single.name.clone()),
            [single] if single.ty.is_collection() => {
                HashStrategy::SingleCollection(single.name.clone())
            }
            _ => HashStrategy::Combined(fields.iter().map(|f| f.name.clone()).collect()),
        }
    }
}

/// Completion strategy of one facade callback method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Complete with the reply, or fail on a negative status.
    Plain,
    /// End of a dump: complete the dump future with its wrapper.
    ControlPing { dump_future: String },
    /// Append the record to the dump future's wrapper.
    Details {
        dump_future:  String,
        wrapper_type: String,
        field:        String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// `void onX(final T reply);` in a callback interface.
    CallbackMethod { method: String, param_type: String },
    /// Request DTOs dispatch themselves to the plugin's JVpp binding.
    Send {
        jvpp_type:     String,
        plugin_jvpp:   String,
        exception:     String,
        method:        String,
        /// `false` when the request has no fields and the binding takes no
        /// arguments.
        pass_self:     bool,
    },
    HashCode(HashStrategy),
    Equals { class_name: String, fields: Vec<Field> },
    ToString { class_name: String, fields: Vec<Field> },
    /// Shared correlation-id -> future table of the facade callback.
    FacadeState { class_name: String, reply_base: String },
    FacadeCallback {
        method:     String,
        reply_type: String,
        reply_base: String,
        completion: Completion,
    },
}

impl Member {
    /// `hashCode`, `equals` and `toString` over one field list.
    pub fn structural(class_name: &str, fields: &[Field]) -> Vec<Member> {
        vec![
            Member::HashCode(HashStrategy::for_fields(fields)),
            Member::Equals {
                class_name: class_name.to_string(),
                fields:     fields.to_vec(),
            },
            Member::ToString {
                class_name: class_name.to_string(),
                fields:     fields.to_vec(),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub package:    String,
    pub kind:       UnitKind,
    pub name:       String,
    /// Javadoc lines, without comment markers.
    pub javadoc:    Vec<String>,
    pub supertypes: Vec<String>,
    pub fields:     Vec<Field>,
    pub members:    Vec<Member>,
}

impl CompilationUnit {
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package.into(), UnitKind::Class, name.into())
    }

    pub fn interface(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(package.into(), UnitKind::Interface, name.into())
    }

    fn new(package: String, kind: UnitKind, name: String) -> Self {
        CompilationUnit {
            package,
            kind,
            name,
            javadoc:    Vec::new(),
            supertypes: Vec::new(),
            fields:     Vec::new(),
            members:    Vec::new(),
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn hash_strategy(&self) -> Option<&HashStrategy> {
        self.members.iter().find_map(|m| match m {
            Member::HashCode(strategy) => Some(strategy),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(name: &str) -> Field {
        Field::new(name, JavaType::Scalar("int".into()))
    }

    fn array(name: &str) -> Field {
        Field::new(name, JavaType::Array("byte".into()))
    }

    #[test]
    fn lone_array_uses_array_hash() {
        assert_eq!(
            HashStrategy::for_fields(&[array("mac")]),
            HashStrategy::SingleArray("mac".into())
        );
    }

    #[test]
    fn lone_list_hashes_its_contents() {
        let field = Field::new("fooDetails", JavaType::List("a.b.FooDetails".into()));
        assert_eq!(
            HashStrategy::for_fields(&[field]),
            HashStrategy::SingleCollection("fooDetails".into())
        );
    }

    #[test]
    fn several_fields_are_combined() {
        assert_eq!(
            HashStrategy::for_fields(&[scalar("context"), array("mac")]),
            HashStrategy::Combined(vec!["context".into(), "mac".into()])
        );
        assert_eq!(HashStrategy::for_fields(&[]), HashStrategy::Combined(vec![]));
        assert_eq!(
            HashStrategy::for_fields(&[scalar("context")]),
            HashStrategy::Combined(vec!["context".into()])
        );
    }
}

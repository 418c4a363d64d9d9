//! Wire type tags of the API dump and the Java types they map to.
//!
//! Both the `.api` tags (`u32`, `u8[]`, `string`) and their JNI spellings
//! (`jint`, `jbyteArray`, `jstring`) are accepted, since upstream dumps
//! carry either form.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::GenError;

lazy_static! {
    static ref WIRE_TO_JAVA: HashMap<&'static str, (&'static str, bool)> = {
        let mut m = HashMap::new();
        for (wire, jni, java) in [
            ("u8",  "jbyte",   "byte"),
            ("i8",  "jbyte",   "byte"),
            ("u16", "jshort",  "short"),
            ("i16", "jshort",  "short"),
            ("u32", "jint",    "int"),
            ("i32", "jint",    "int"),
            ("u64", "jlong",   "long"),
            ("i64", "jlong",   "long"),
            ("f32", "jfloat",  "float"),
            ("f64", "jdouble", "double"),
        ] {
            m.insert(wire, (java, false));
            m.insert(jni, (java, false));
        }
        for (wire, jni, java) in [
            ("u8[]",  "jbyteArray",   "byte"),
            ("i8[]",  "jbyteArray",   "byte"),
            ("u16[]", "jshortArray",  "short"),
            ("i16[]", "jshortArray",  "short"),
            ("u32[]", "jintArray",    "int"),
            ("i32[]", "jintArray",    "int"),
            ("u64[]", "jlongArray",   "long"),
            ("i64[]", "jlongArray",   "long"),
            ("f32[]", "jfloatArray",  "float"),
            ("f64[]", "jdoubleArray", "double"),
        ] {
            m.insert(wire, (java, true));
            m.insert(jni, (java, true));
        }
        m.insert("jchar", ("char", false));
        m.insert("jcharArray", ("char", true));
        m.insert("string", ("java.lang.String", false));
        m.insert("jstring", ("java.lang.String", false));
        m
    };
}

/// Shape of a generated field. Structural methods differ per shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Scalar(String),
    Array(String),
    /// `java.util.List<T>`, used only by dump-reply wrappers.
    List(String),
}

impl JavaType {
    pub fn is_array(&self) -> bool {
        matches!(self, JavaType::Array(_))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, JavaType::List(_))
    }
}

/// Table lookup; the one place malformed input surfaces as an error.
pub fn wire_type_to_java(message: &str, tag: &str) -> Result<JavaType, GenError> {
    match WIRE_TO_JAVA.get(tag) {
        Some((java, false)) => Ok(JavaType::Scalar(java.to_string())),
        Some((java, true)) => Ok(JavaType::Array(java.to_string())),
        None => Err(GenError::UnknownWireType {
            message:  message.to_string(),
            type_tag: tag.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wire_and_jni_tags() {
        assert_eq!(wire_type_to_java("m", "u32").unwrap(), JavaType::Scalar("int".into()));
        assert_eq!(wire_type_to_java("m", "jint").unwrap(), JavaType::Scalar("int".into()));
        assert_eq!(wire_type_to_java("m", "u8[]").unwrap(), JavaType::Array("byte".into()));
        assert_eq!(wire_type_to_java("m", "jbyteArray").unwrap(), JavaType::Array("byte".into()));
        assert_eq!(
            wire_type_to_java("m", "string").unwrap(),
            JavaType::Scalar("java.lang.String".into())
        );
    }

    #[test]
    fn unknown_tag_is_an_error() {
        match wire_type_to_java("show_version", "u128") {
            Err(GenError::UnknownWireType { message, type_tag }) => {
                assert_eq!(message, "show_version");
                assert_eq!(type_tag, "u128");
            }
            other => panic!("expected UnknownWireType, got {:?}", other),
        }
    }
}

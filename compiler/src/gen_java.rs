use crate::{
    ir::{CompilationUnit, Completion, Field, HashStrategy, Member, UnitKind},
    traits::Backend,
    types::JavaType,
    utils::{javadoc_escape, quote},
};

const INDENT: &str = "    ";
const COMPLETABLE_FUTURE: &str = "java.util.concurrent.CompletableFuture";

/// Prints units as Java source files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaBackend;

impl Backend for JavaBackend {
    fn extension(&self) -> &'static str {
        "java"
    }

    fn render(&self, unit: &CompilationUnit) -> String {
        let mut java: Vec<String> = Vec::new();

        java.push(format!("package {};", unit.package));
        java.push("".to_string());

        if !unit.javadoc.is_empty() {
            java.push("/**".to_string());
            for line in &unit.javadoc {
                java.push(format!(" * {}", javadoc_escape(line)).trim_end().to_string());
            }
            java.push(" */".to_string());
        }

        java.push(declaration(unit));

        let mut body: Vec<String> = Vec::new();
        if !unit.fields.is_empty() {
            body.push("".to_string());
            body.extend(unit.fields.iter().map(field_declaration));
        }
        for member in &unit.members {
            body.push("".to_string());
            body.extend(render_member(member));
        }
        if !body.is_empty() {
            java.extend(body);
            java.push("".to_string());
        }

        java.push("}".to_string());
        java.push("".to_string());
        java.join("\n")
    }
}

fn declaration(unit: &CompilationUnit) -> String {
    let (keyword, relation) = match unit.kind {
        UnitKind::Class => ("public final class", "implements"),
        UnitKind::Interface => ("public interface", "extends"),
    };
    if unit.supertypes.is_empty() {
        format!("{} {} {{", keyword, unit.name)
    } else {
        format!("{} {} {} {} {{", keyword, unit.name, relation, unit.supertypes.join(", "))
    }
}

pub fn java_type(ty: &JavaType) -> String {
    match ty {
        JavaType::Scalar(name) => name.clone(),
        JavaType::Array(name) => format!("{}[]", name),
        JavaType::List(element) => format!("java.util.List<{}>", element),
    }
}

fn field_declaration(field: &Field) -> String {
    match &field.ty {
        JavaType::List(_) => format!(
            "{}public {} {} = new java.util.ArrayList<>();",
            INDENT,
            java_type(&field.ty),
            field.name
        ),
        ty => format!("{}public {} {};", INDENT, java_type(ty), field.name),
    }
}

/// Lines of one member, indented one level.
fn render_member(member: &Member) -> Vec<String> {
    let lines = match member {
        Member::CallbackMethod { method, param_type } => {
            vec![format!("void {}(final {} reply);", method, param_type)]
        }
        Member::Send { jvpp_type, plugin_jvpp, exception, method, pass_self } => vec![
            "@Override".to_string(),
            format!("public int send(final {} jvpp) throws {} {{", jvpp_type, exception),
            format!(
                "    return (({}) jvpp).{}({});",
                plugin_jvpp,
                method,
                if *pass_self { "this" } else { "" }
            ),
            "}".to_string(),
        ],
        Member::HashCode(strategy) => render_hash(strategy),
        Member::Equals { class_name, fields } => render_equals(class_name, fields),
        Member::ToString { class_name, fields } => render_to_string(class_name, fields),
        Member::FacadeState { class_name, reply_base } => render_facade_state(class_name, reply_base),
        Member::FacadeCallback { method, reply_type, reply_base, completion } => {
            render_facade_callback(method, reply_type, reply_base, completion)
        }
    };
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect()
}

fn render_hash(strategy: &HashStrategy) -> Vec<String> {
    let body = match strategy {
        HashStrategy::Combined(fields) => format!("return java.util.Objects.hash({});", fields.join(", ")),
        HashStrategy::SingleArray(field) => format!("return java.util.Arrays.hashCode({});", field),
        HashStrategy::SingleCollection(field) => format!("return java.util.Objects.hashCode({});", field),
    };
    vec![
        "@Override".to_string(),
        "public int hashCode() {".to_string(),
        format!("    {}", body),
        "}".to_string(),
    ]
}

fn render_equals(class_name: &str, fields: &[Field]) -> Vec<String> {
    let mut lines = vec![
        "@Override".to_string(),
        "public boolean equals(final Object o) {".to_string(),
        "    if (this == o) {".to_string(),
        "        return true;".to_string(),
        "    }".to_string(),
        "    if (o == null || getClass() != o.getClass()) {".to_string(),
        "        return false;".to_string(),
        "    }".to_string(),
    ];
    if !fields.is_empty() {
        lines.push("".to_string());
        lines.push(format!("    final {} other = ({}) o;", class_name, class_name));
        lines.push("".to_string());
        for field in fields {
            let comparator = if field.ty.is_array() {
                "java.util.Arrays.equals"
            } else {
                "java.util.Objects.equals"
            };
            lines.push(format!(
                "    if (!{}(this.{}, other.{})) {{",
                comparator, field.name, field.name
            ));
            lines.push("        return false;".to_string());
            lines.push("    }".to_string());
        }
    }
    lines.push("".to_string());
    lines.push("    return true;".to_string());
    lines.push("}".to_string());
    lines
}

fn render_to_string(class_name: &str, fields: &[Field]) -> Vec<String> {
    let mut lines = vec!["@Override".to_string(), "public String toString() {".to_string()];
    if fields.is_empty() {
        lines.push(format!("    return {};", quote(&format!("{}{{}}", class_name))));
    } else {
        lines.push(format!("    return {} +", quote(&format!("{}{{", class_name))));
        for (i, field) in fields.iter().enumerate() {
            let label = if i == 0 {
                format!("{}=", field.name)
            } else {
                format!(", {}=", field.name)
            };
            let value = if field.ty.is_array() {
                format!("java.util.Arrays.toString({})", field.name)
            } else {
                field.name.clone()
            };
            lines.push(format!("            {} + {} +", quote(&label), value));
        }
        lines.push(format!("            {};", quote("}")));
    }
    lines.push("}".to_string());
    lines
}

fn requests_map_type(reply_base: &str) -> String {
    format!(
        "java.util.Map<java.lang.Integer, {}<? extends {}<?>>>",
        COMPLETABLE_FUTURE, reply_base
    )
}

fn render_facade_state(class_name: &str, reply_base: &str) -> Vec<String> {
    let map_type = requests_map_type(reply_base);
    vec![
        format!("private final {} requests;", map_type),
        "".to_string(),
        format!("public {}(final {} requestMap) {{", class_name, map_type),
        "    this.requests = requestMap;".to_string(),
        "}".to_string(),
    ]
}

fn render_facade_callback(
    method: &str,
    reply_type: &str,
    reply_base: &str,
    completion: &Completion,
) -> Vec<String> {
    let future_type = format!("{}<{}<?>>", COMPLETABLE_FUTURE, reply_base);
    let mut lines = vec![
        "@Override".to_string(),
        "@SuppressWarnings(\"unchecked\")".to_string(),
        format!("public void {}(final {} reply) {{", method, reply_type),
    ];

    // Reply DTOs carry no `retval` field; failed replies are rejected by the
    // runtime before they reach this callback. Keep both sides as they are.
    let complete_or_fail = |indent: &str| -> Vec<String> {
        vec![
            format!("{}if (reply.retval < 0) {{", indent),
            format!(
                "{}    completableFuture.completeExceptionally(new Exception(\"Invocation of \" + {}.class",
                indent, reply_type
            ),
            format!("{}        + \" failed with value \" + reply.retval));", indent),
            format!("{}}} else {{", indent),
            format!("{}    completableFuture.complete(reply);", indent),
            format!("{}}}", indent),
        ]
    };

    match completion {
        Completion::Plain => {
            lines.push(format!("    final {} completableFuture;", future_type));
            lines.push("".to_string());
            lines.push("    synchronized (requests) {".to_string());
            lines.push(format!(
                "        completableFuture = ({}) requests.remove(reply.context);",
                future_type
            ));
            lines.push("    }".to_string());
            lines.push("".to_string());
            lines.push("    if (completableFuture != null) {".to_string());
            lines.extend(complete_or_fail("        "));
            lines.push("    }".to_string());
        }
        Completion::ControlPing { dump_future } => {
            lines.push(format!("    final {} completableFuture;", future_type));
            lines.push("".to_string());
            lines.push("    synchronized (requests) {".to_string());
            lines.push(format!(
                "        completableFuture = ({}) requests.remove(reply.context);",
                future_type
            ));
            lines.push(format!("        if (completableFuture instanceof {}) {{", dump_future));
            lines.push("            // the dump future is registered under the dump request's context too".to_string());
            lines.push(format!(
                "            requests.remove((({}) completableFuture).getContextId());",
                dump_future
            ));
            lines.push("        }".to_string());
            lines.push("    }".to_string());
            lines.push("".to_string());
            lines.push("    if (completableFuture != null) {".to_string());
            lines.push(format!("        if (completableFuture instanceof {}) {{", dump_future));
            lines.push(format!(
                "            completableFuture.complete((({}) completableFuture).getReplyDump());",
                dump_future
            ));
            lines.push("        } else {".to_string());
            lines.extend(complete_or_fail("            "));
            lines.push("        }".to_string());
            lines.push("    }".to_string());
        }
        Completion::Details { dump_future, wrapper_type, field } => {
            let typed_future = format!("{}<{}>", dump_future, wrapper_type);
            lines.push("    synchronized (requests) {".to_string());
            lines.push(format!(
                "        final {} completableFuture = ({}) requests.get(reply.context);",
                typed_future, typed_future
            ));
            lines.push("".to_string());
            lines.push("        if (completableFuture == null) {".to_string());
            lines.push("            // not registered, already completed or timed out".to_string());
            lines.push("            return;".to_string());
            lines.push("        }".to_string());
            lines.push("".to_string());
            lines.push(format!("        {} replyDump = completableFuture.getReplyDump();", wrapper_type));
            lines.push("        if (replyDump == null) {".to_string());
            lines.push(format!("            replyDump = new {}();", wrapper_type));
            lines.push("            completableFuture.setReplyDump(replyDump);".to_string());
            lines.push("        }".to_string());
            lines.push(format!("        replyDump.{}.add(reply);", field));
            lines.push("    }".to_string());
        }
    }

    lines.push("}".to_string());
    lines
}

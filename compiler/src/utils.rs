use jvpp_gen_schema::{DescriptorError, MessageDescriptor};
use serde_json::Value;

/// Quote `text` as a double-quoted string literal.
pub fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// Keep arbitrary text from closing the surrounding doc comment.
pub fn javadoc_escape(line: &str) -> String {
    line.replace("*/", "*&#47;")
}

/// The descriptor, pretty-printed, one entry per line.
pub fn descriptor_lines(descriptor: &MessageDescriptor) -> Result<Vec<String>, DescriptorError> {
    let pretty = serde_json::to_string_pretty(descriptor)?;
    Ok(pretty.lines().map(str::to_string).collect())
}

/// Javadoc shared by every per-message file.
pub fn message_javadoc(
    summary: &str,
    generator: &str,
    input_file: &str,
    descriptor: &MessageDescriptor,
) -> Result<Vec<String>, DescriptorError> {
    let mut lines = vec![
        format!("<p>{}", summary),
        format!(
            "<br>It was generated by {} based on {} preparsed data:",
            generator, input_file
        ),
        "<pre>".to_string(),
    ];
    lines.extend(descriptor_lines(descriptor)?);
    lines.push("</pre>".to_string());
    Ok(lines)
}

use crate::ir::CompilationUnit;

/// Prints compilation units in one target language.
pub trait Backend {
    /// Extension of the generated source files, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, unit: &CompilationUnit) -> String;
}

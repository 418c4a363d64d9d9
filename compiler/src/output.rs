//! Writing rendered units to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::GenError, ir::CompilationUnit, traits::Backend};

/// Generators never create their output directory: a missing one means a
/// misconfigured build, reported before anything is written.
pub fn ensure_output_dir(dir: &Path) -> Result<(), GenError> {
    if !dir.is_dir() {
        return Err(GenError::MissingOutputDirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Render and write every unit as `<dir>/<Name>.<ext>`, returning the paths
/// in write order.
pub fn write_units(
    dir: &Path,
    units: &[CompilationUnit],
    backend: &dyn Backend,
) -> Result<Vec<PathBuf>, GenError> {
    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = dir.join(unit.file_name(backend.extension()));
        fs::write(&path, backend.render(unit))?;
        tracing::debug!("Generated {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_java::JavaBackend;

    #[test]
    fn missing_directory_is_reported() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("dto");
        match ensure_output_dir(&missing) {
            Err(GenError::MissingOutputDirectory(path)) => assert_eq!(path, missing),
            other => panic!("expected MissingOutputDirectory, got {:?}", other),
        }
    }

    #[test]
    fn writes_one_file_per_unit() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let units = vec![
            CompilationUnit::interface("p", "A"),
            CompilationUnit::interface("p", "B"),
        ];
        let written = write_units(tmp.path(), &units, &JavaBackend).expect("write");
        assert_eq!(written, vec![tmp.path().join("A.java"), tmp.path().join("B.java")]);
        let text = fs::read_to_string(&written[0]).expect("read back");
        assert!(text.contains("public interface A {"));
    }
}

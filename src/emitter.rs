//! Deterministic emission of the generated aggregator module
//!
//! Rendering is a pure function of the resolved bindings: import statements
//! in accumulation order, instantiation statements in accumulation order,
//! then a single default-exported mapping listing every alias. The artifact
//! is staged in a temporary file next to the output and atomically persisted
//! over the previous one, so a failed run never leaves a mix of old and new
//! content behind.

use crate::error::EmitError;
use crate::resolver::ResolvedBinding;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Writes the generated module for one run
pub struct Emitter {
    output: PathBuf,
}

impl Emitter {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }

    /// Renders the module text for `bindings`
    ///
    /// Every instantiation uses the uniform `const <alias> = new <Class>();`
    /// form, and line endings are always `\n`, so re-running with unchanged
    /// inputs yields a byte-identical artifact.
    pub fn render(bindings: &[ResolvedBinding]) -> String {
        let mut out = String::new();

        for binding in bindings {
            out.push_str(&format!(
                "import {} from '{}';\n",
                binding.class_name, binding.import_path
            ));
        }
        for binding in bindings {
            out.push_str(&format!(
                "const {} = new {}();\n",
                binding.alias, binding.class_name
            ));
        }

        out.push_str("export default {\n");
        for binding in bindings {
            out.push_str(&format!("{},\n", binding.alias));
        }
        out.push_str("};\n");

        out
    }

    /// Renders and atomically writes the module
    ///
    /// # Errors
    ///
    /// Returns `EmitError` if the output directory cannot be staged into or
    /// the artifact cannot be written or replaced. On error the previous
    /// artifact is left untouched.
    pub fn emit(&self, bindings: &[ResolvedBinding]) -> Result<(), EmitError> {
        let content = Self::render(bindings);
        let dir = self
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        std::fs::create_dir_all(dir).map_err(|source| EmitError::Stage {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| EmitError::Stage {
            dir: dir.to_path_buf(),
            source,
        })?;
        staged
            .write_all(content.as_bytes())
            .map_err(EmitError::Write)?;
        staged.flush().map_err(EmitError::Write)?;

        debug!(staged = %staged.path().display(), "Staged generated module");

        staged
            .persist(&self.output)
            .map_err(|err| EmitError::Persist {
                path: self.output.clone(),
                source: err.error,
            })?;

        info!(
            output = %self.output.display(),
            bindings = bindings.len(),
            "Generated module written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Origin;
    use tempfile::TempDir;

    fn binding(alias: &str, class_name: &str, import_path: &str) -> ResolvedBinding {
        ResolvedBinding {
            alias: alias.to_string(),
            class_name: class_name.to_string(),
            import_path: import_path.to_string(),
            origin: Origin::VendorOverride,
        }
    }

    #[test]
    fn test_render_orders_imports_instantiations_mapping() {
        let bindings = vec![
            binding(
                "volumeService",
                "DesktopVolumeService",
                "./vendors/desktop/services/DesktopVolumeService",
            ),
            binding(
                "channelService",
                "DesktopChannelService",
                "./vendors/desktop/services/DesktopChannelService",
            ),
        ];

        let rendered = Emitter::render(&bindings);
        assert_eq!(
            rendered,
            "import DesktopVolumeService from './vendors/desktop/services/DesktopVolumeService';\n\
             import DesktopChannelService from './vendors/desktop/services/DesktopChannelService';\n\
             const volumeService = new DesktopVolumeService();\n\
             const channelService = new DesktopChannelService();\n\
             export default {\n\
             volumeService,\n\
             channelService,\n\
             };\n"
        );
    }

    #[test]
    fn test_render_empty_bindings_is_skeleton() {
        assert_eq!(Emitter::render(&[]), "export default {\n};\n");
    }

    #[test]
    fn test_emit_replaces_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("index.js");
        std::fs::write(&output, "stale content").unwrap();

        let emitter = Emitter::new(output.clone());
        emitter
            .emit(&[binding("volumeService", "VolumeService", "./services/volumeService")])
            .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("const volumeService = new VolumeService();"));
    }

    #[test]
    fn test_emit_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("index.js");
        let emitter = Emitter::new(output.clone());
        let bindings = vec![binding("vodService", "VodService", "./services/vodService")];

        emitter.emit(&bindings).unwrap();
        let first = std::fs::read(&output).unwrap();
        emitter.emit(&bindings).unwrap();
        let second = std::fs::read(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emit_into_unwritable_dir_fails() {
        let emitter = Emitter::new(PathBuf::from("/proc/aliasgen-no-such-dir/index.js"));
        let result = emitter.emit(&[]);
        assert!(result.is_err());
    }
}

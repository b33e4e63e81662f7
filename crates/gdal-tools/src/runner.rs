//! Toolchain execution.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::command::{GdalCommand, Tool};
use crate::{GdalError, GdalResult};

/// Captured result of a completed tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Process exit code (-1 when terminated by a signal).
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Binary locations for the GDAL command-line tools.
#[derive(Debug, Clone)]
pub struct GdalToolchain {
    pub gdaldem: PathBuf,
    pub gdal_translate: PathBuf,
    pub gdalinfo: PathBuf,
}

impl Default for GdalToolchain {
    fn default() -> Self {
        Self {
            gdaldem: Tool::Gdaldem.binary_name().into(),
            gdal_translate: Tool::GdalTranslate.binary_name().into(),
            gdalinfo: Tool::GdalInfo.binary_name().into(),
        }
    }
}

impl GdalToolchain {
    /// Resolve all three tools from one directory, e.g. an OSGeo4W `bin`
    /// folder on Windows or `/usr/bin` on Linux.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            gdaldem: dir.join(Tool::Gdaldem.binary_name()),
            gdal_translate: dir.join(Tool::GdalTranslate.binary_name()),
            gdalinfo: dir.join(Tool::GdalInfo.binary_name()),
        }
    }

    /// Binary path for a tool.
    pub fn program(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Gdaldem => &self.gdaldem,
            Tool::GdalTranslate => &self.gdal_translate,
            Tool::GdalInfo => &self.gdalinfo,
        }
    }
}

/// Narrow seam over the toolchain. Production code uses [`Gdal`]; tests
/// substitute scripted fakes.
pub trait GdalRunner {
    /// Execute one invocation, blocking until the tool exits.
    fn run(&self, command: &GdalCommand) -> GdalResult<ToolOutput>;
}

/// Production runner spawning the real GDAL binaries.
#[derive(Debug, Clone, Default)]
pub struct Gdal {
    toolchain: GdalToolchain,
}

impl Gdal {
    pub fn new(toolchain: GdalToolchain) -> Self {
        Self { toolchain }
    }
}

impl GdalRunner for Gdal {
    fn run(&self, command: &GdalCommand) -> GdalResult<ToolOutput> {
        let program = self.toolchain.program(command.tool());
        let args = command.to_args();
        debug!(program = %program.display(), ?args, "Running GDAL tool");

        let output = Command::new(program)
            .args(&args)
            .output()
            .map_err(|source| GdalError::Launch {
                tool: program.display().to_string(),
                source,
            })?;

        Ok(ToolOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolchain_in_dir() {
        let toolchain = GdalToolchain::in_dir("/opt/gdal/bin");
        assert_eq!(
            toolchain.program(Tool::Gdaldem),
            Path::new("/opt/gdal/bin/gdaldem")
        );
        assert_eq!(
            toolchain.program(Tool::GdalTranslate),
            Path::new("/opt/gdal/bin/gdal_translate")
        );
        assert_eq!(
            toolchain.program(Tool::GdalInfo),
            Path::new("/opt/gdal/bin/gdalinfo")
        );
    }

    #[test]
    fn test_missing_binary_is_launch_error() {
        let runner = Gdal::new(GdalToolchain::in_dir("/nonexistent/gdal/bin"));
        let result = runner.run(&GdalCommand::Info {
            input: "whatever.tif".into(),
        });

        assert!(matches!(result, Err(GdalError::Launch { .. })));
    }

    #[test]
    fn test_tool_output_success() {
        let ok = ToolOutput {
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        let failed = ToolOutput {
            status: 1,
            stdout: String::new(),
            stderr: "ERROR 4: no such file".to_string(),
        };

        assert!(ok.success());
        assert!(!failed.success());
    }
}

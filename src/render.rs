//! Rendering through the Graphviz `dot` executable.
//!
//! [`GraphvizRenderer`] writes the DOT source next to the rendered image,
//! so `Digraph.gv` produces `Digraph.gv.pdf` with the default options.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::error::{GatevizError, Result};
use crate::graph::{dot::to_dot, Digraph};

/// Default DOT source file name.
pub const DEFAULT_SOURCE_PATH: &str = "Digraph.gv";

/// Default image format passed to `dot -T`.
pub const DEFAULT_FORMAT: &str = "pdf";

/// Default Graphviz executable.
pub const DEFAULT_PROGRAM: &str = "dot";

/// Files produced by a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// The DOT source file
    pub source: PathBuf,
    /// The rendered image, if the renderer was run
    pub image: Option<PathBuf>,
}

/// Something that can turn a finished graph into output files.
pub trait Renderer {
    fn render(&self, graph: &Digraph) -> Result<RenderOutput>;
}

/// Options for [`GraphvizRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Where to write the DOT source
    pub source_path: PathBuf,
    /// Image format (`pdf`, `svg`, `png`, ...)
    pub format: String,
    /// Graphviz executable to run
    pub program: String,
    /// Only write the DOT source
    pub source_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            format: DEFAULT_FORMAT.to_string(),
            program: DEFAULT_PROGRAM.to_string(),
            source_only: false,
        }
    }
}

impl RenderOptions {
    /// Path of the image `dot` will write: the source path plus `.<format>`.
    pub fn image_path(&self) -> PathBuf {
        let mut name = self.source_path.clone().into_os_string();
        name.push(".");
        name.push(&self.format);
        PathBuf::from(name)
    }
}

/// Renderer that shells out to Graphviz.
#[derive(Debug, Clone, Default)]
pub struct GraphvizRenderer {
    options: RenderOptions,
}

impl GraphvizRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn write_source(&self, graph: &Digraph) -> Result<()> {
        let path = &self.options.source_path;
        std::fs::write(path, to_dot(graph)).map_err(|e| GatevizError::SourceWrite {
            path: path.display().to_string(),
            source: e,
        })?;
        info!(
            "wrote {} ({} nodes, {} edges)",
            path.display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(())
    }

    fn run_dot(&self, source: &Path, image: &Path) -> Result<()> {
        let program = &self.options.program;
        debug!(
            "running {} -T{} -o {} {}",
            program,
            self.options.format,
            image.display(),
            source.display()
        );

        let output = Command::new(program)
            .arg(format!("-T{}", self.options.format))
            .arg("-o")
            .arg(image)
            .arg(source)
            .output()
            .map_err(|e| GatevizError::RendererSpawn {
                program: program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(GatevizError::RendererFailed {
                program: program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!("rendered {}", image.display());
        Ok(())
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &Digraph) -> Result<RenderOutput> {
        self.write_source(graph)?;

        let source = self.options.source_path.clone();
        if self.options.source_only {
            return Ok(RenderOutput {
                source,
                image: None,
            });
        }

        let image = self.options.image_path();
        self.run_dot(&source, &image)?;

        Ok(RenderOutput {
            source,
            image: Some(image),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse;

    fn sample_graph() -> Digraph {
        let ast = parse("x00: 1\nx01: 0\n\nx00 AND x01 -> z00\n").unwrap();
        Digraph::from_ast(&ast)
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.source_path, PathBuf::from("Digraph.gv"));
        assert_eq!(options.image_path(), PathBuf::from("Digraph.gv.pdf"));
        assert!(!options.source_only);
    }

    #[test]
    fn test_image_path_format() {
        let options = RenderOptions {
            source_path: PathBuf::from("out/adder.dot"),
            format: "svg".to_string(),
            ..RenderOptions::default()
        };
        assert_eq!(options.image_path(), PathBuf::from("out/adder.dot.svg"));
    }

    #[test]
    fn test_source_only_writes_dot() {
        let dir = tempfile::tempdir().unwrap();
        let source_path = dir.path().join("circuit.gv");
        let renderer = GraphvizRenderer::new(RenderOptions {
            source_path: source_path.clone(),
            source_only: true,
            ..RenderOptions::default()
        });

        let graph = sample_graph();
        let output = renderer.render(&graph).unwrap();

        assert_eq!(output.source, source_path);
        assert_eq!(output.image, None);
        assert_eq!(std::fs::read_to_string(&source_path).unwrap(), to_dot(&graph));
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = GraphvizRenderer::new(RenderOptions {
            source_path: dir.path().join("circuit.gv"),
            program: "gateviz-no-such-renderer".to_string(),
            ..RenderOptions::default()
        });

        let err = renderer.render(&sample_graph()).unwrap_err();
        assert!(matches!(err, GatevizError::RendererSpawn { .. }));
        // The source is written before the renderer runs
        assert!(dir.path().join("circuit.gv").exists());
    }

    #[test]
    fn test_unwritable_source() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = GraphvizRenderer::new(RenderOptions {
            source_path: dir.path().join("missing").join("circuit.gv"),
            source_only: true,
            ..RenderOptions::default()
        });

        let err = renderer.render(&sample_graph()).unwrap_err();
        assert!(matches!(err, GatevizError::SourceWrite { .. }));
    }
}

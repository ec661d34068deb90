//! Compile SuperLua files to Lua.

use std::path::{Path, PathBuf};
use superlua::{
    Diagnostic, Document, ReadError, ReadOptions, Reader, SOURCE_EXTENSION, Severity,
    Translation, Writer, reader_for_extension, writer_for_language,
};

/// Language every source is compiled to.
pub const TARGET_LANGUAGE: &str = "lua";

/// Options for a compile run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Fail on unterminated methods or classes.
    pub strict: bool,
}

impl CompileOptions {
    fn read_options(&self) -> ReadOptions {
        ReadOptions {
            strict: self.strict,
        }
    }
}

/// What a successful compile produced.
#[derive(Debug, Clone)]
pub struct CompileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Translate {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
    #[error("{} is not a .slua file", .0.display())]
    NotSource(PathBuf),
    #[error("no {from} -> {to} translator registered")]
    Unsupported { from: String, to: &'static str },
}

/// Reader and writer taken from the registry for one source extension.
#[derive(Clone, Copy)]
pub struct Pipeline {
    reader: &'static dyn Reader,
    writer: &'static dyn Writer,
}

impl Pipeline {
    /// Pipeline for sources with extension `ext`, emitting Lua.
    pub fn for_extension(ext: &str) -> Option<Self> {
        Some(Self {
            reader: reader_for_extension(ext)?,
            writer: writer_for_language(TARGET_LANGUAGE)?,
        })
    }

    /// Pipeline for `.slua` sources.
    pub fn superlua() -> Result<Self, CompileError> {
        Self::for_extension(SOURCE_EXTENSION).ok_or(CompileError::Unsupported {
            from: SOURCE_EXTENSION.to_string(),
            to: TARGET_LANGUAGE,
        })
    }

    /// Read source text into the IR.
    pub fn read(&self, source: &str, options: &CompileOptions) -> Result<Document, ReadError> {
        self.reader.read(source, &options.read_options())
    }

    /// Read and write, logging what the reader noticed.
    pub fn run(&self, source: &str, options: &CompileOptions) -> Result<Translation, ReadError> {
        let document = self.read(source, options)?;
        tracing::debug!(
            reader = self.reader.language(),
            writer = self.writer.language(),
            classes = document.classes().count(),
            "translated"
        );
        for diagnostic in &document.diagnostics {
            match diagnostic.severity {
                Severity::Warning => tracing::warn!("{diagnostic}"),
                Severity::Note => tracing::debug!("{diagnostic}"),
            }
        }
        Ok(Translation {
            output: self.writer.write(&document),
            diagnostics: document.diagnostics,
        })
    }

    /// Output path next to `source`, with the writer's extension.
    pub fn target_path(&self, source: &Path) -> PathBuf {
        source.with_extension(self.writer.extension())
    }
}

/// Translate SuperLua source text.
pub fn compile_source(source: &str, options: &CompileOptions) -> Result<Translation, CompileError> {
    Pipeline::superlua()?
        .run(source, options)
        .map_err(|source| CompileError::Translate {
            path: PathBuf::from("<stdin>"),
            source,
        })
}

/// Read `input` with the reader registered for its extension.
fn load(input: &Path) -> Result<(Pipeline, String), CompileError> {
    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let pipeline =
        Pipeline::for_extension(ext).ok_or_else(|| CompileError::NotSource(input.to_path_buf()))?;
    let content = std::fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok((pipeline, content))
}

/// Read `input` into the IR without writing anything.
pub fn read_file(input: &Path, options: &CompileOptions) -> Result<Document, CompileError> {
    let (pipeline, content) = load(input)?;
    pipeline
        .read(&content, options)
        .map_err(|source| CompileError::Translate {
            path: input.to_path_buf(),
            source,
        })
}

/// Compile `input` and write the result to `output`, or next to the input
/// with a `.lua` extension.
pub fn compile_file(
    input: &Path,
    output: Option<&Path>,
    options: &CompileOptions,
) -> Result<CompileReport, CompileError> {
    let (pipeline, content) = load(input)?;
    let translation = pipeline
        .run(&content, options)
        .map_err(|source| CompileError::Translate {
            path: input.to_path_buf(),
            source,
        })?;

    let output = output.map_or_else(|| pipeline.target_path(input), Path::to_path_buf);
    std::fs::write(&output, &translation.output).map_err(|source| CompileError::Write {
        path: output.clone(),
        source,
    })?;
    tracing::info!(source = %input.display(), output = %output.display(), "compiled");

    Ok(CompileReport {
        source: input.to_path_buf(),
        output,
        diagnostics: translation.diagnostics,
    })
}

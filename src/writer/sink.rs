//! Append-only output sink for fact files
//!
//! Each `append` opens its destination file, writes the batch, writes one
//! blank separator line and closes the file again. Appends to the same file
//! must be serialized by the caller; nothing here locks across processes.

use super::error::{WriterError, WriterResult};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

/// Which fact file a batch goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Nodes,
    Edges,
}

impl Destination {
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Edges => "edges",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Manages the fact files under one output root
#[derive(Debug, Clone)]
pub struct OutputSink {
    root: PathBuf,
    extension: String,
    create_dirs: bool,
}

impl OutputSink {
    /// Create a sink rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> WriterResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| WriterError::io(&root, e))?;
        Ok(Self {
            root,
            extension: extension.into(),
            create_dirs: true,
        })
    }

    /// When false, a missing prefix directory fails the append instead of
    /// being created.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file a destination maps to under an optional prefix.
    pub fn path_for(&self, destination: Destination, prefix: Option<&Path>) -> PathBuf {
        let dir = match prefix {
            Some(prefix) => self.root.join(prefix),
            None => self.root.clone(),
        };
        dir.join(format!("{}.{}", destination.file_stem(), self.extension))
    }

    /// Append `lines` to the destination file, followed by one blank line.
    ///
    /// Returns the path written. The file handle is closed before return on
    /// both the success and the error path.
    pub fn append<S: AsRef<str>>(
        &self,
        destination: Destination,
        prefix: Option<&Path>,
        lines: &[S],
    ) -> WriterResult<PathBuf> {
        if let Some(prefix) = prefix {
            let stays_under_root = prefix
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
            if !stays_under_root {
                return Err(WriterError::InvalidPrefix(prefix.to_path_buf()));
            }
            if self.create_dirs {
                let dir = self.root.join(prefix);
                fs::create_dir_all(&dir).map_err(|e| WriterError::io(&dir, e))?;
            }
        }

        let path = self.path_for(destination, prefix);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| WriterError::io(&path, e))?;
        let mut out = BufWriter::new(file);

        write_batch(&mut out, lines).map_err(|e| WriterError::io(&path, e))?;

        tracing::debug!(path = %path.display(), lines = lines.len(), "appended batch");
        Ok(path)
    }
}

fn write_batch<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    writeln!(out)?;
    out.flush()
}

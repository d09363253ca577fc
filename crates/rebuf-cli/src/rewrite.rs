//! Per-file read, rewrite, and write.
//!
//! Each file gets its own parse tree and rename session, so files are
//! transformed in parallel and emitted afterwards in argument order.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use rebuf_rename::RenameOptions;

/// A transformed file, not yet written anywhere.
#[derive(Debug)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub output: Vec<u8>,
    pub buffers: usize,
}

pub fn rewrite_file(path: &Path, options: &RenameOptions) -> anyhow::Result<FileRewrite> {
    if !rebuf_rename::is_c_source(path) {
        tracing::warn!(path = %path.display(), "not a .c or .h file; rewriting anyway");
    }
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let rewrite = rebuf_rename::rewrite_bytes(&bytes, options)
        .with_context(|| format!("failed to rewrite {}", path.display()))?;

    for binding in &rewrite.bindings {
        tracing::debug!(
            path = %path.display(),
            from = %binding.original,
            to = %binding.renamed,
            offset = binding.span.start,
            "renamed"
        );
    }

    Ok(FileRewrite {
        path: path.to_path_buf(),
        output: rewrite.output,
        buffers: rewrite.bindings.len(),
    })
}

/// Rewrite every path in parallel; results keep the input order.
pub fn rewrite_all(paths: &[PathBuf], options: &RenameOptions) -> Vec<anyhow::Result<FileRewrite>> {
    paths
        .par_iter()
        .map(|path| rewrite_file(path, options))
        .collect()
}

/// Overwrite the source file, or write the bytes verbatim to `out`.
pub fn emit(rewrite: &FileRewrite, in_place: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if in_place {
        std::fs::write(&rewrite.path, &rewrite.output)
            .with_context(|| format!("failed to write {}", rewrite.path.display()))?;
        tracing::info!(path = %rewrite.path.display(), buffers = rewrite.buffers, "rewrote in place");
    } else {
        out.write_all(&rewrite.output)
            .context("failed to write to stdout")?;
    }
    Ok(())
}

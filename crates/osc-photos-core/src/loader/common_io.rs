// crates/osc-photos-core/src/loader/common_io.rs
use crate::common::{CLEANED_PREFIX, EXTRACTED_PREFIX};
use crate::error::{PhotoError, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            PhotoError::NotFound(format!("Input not found at {}: {}", path.display(), e))
        }
        _ => PhotoError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Writes `contents` next to `path` in a temp file, then renames it over
/// `path`. Readers never observe a half-written output.
///
/// An existing target keeps its mode; a new one gets `0o666` minus the umask,
/// as a plain `File::create` would.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp: NamedTempFile = builder.tempfile_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Where the two outputs of a run go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub extracted: PathBuf,
    pub cleaned: PathBuf,
}

/// `dir/extracted_<name>` and `dir/cleaned_<name>`, where `dir` defaults to
/// the input's directory. A trailing `.gz` is dropped: outputs are plain JSON.
pub fn output_paths(input: &Path, out_dir: Option<&Path>) -> Result<OutputPaths> {
    let name = input
        .file_name()
        .ok_or_else(|| PhotoError::InvalidPath(format!("{} has no file name", input.display())))?
        .to_string_lossy();
    let name = if is_gzip(input) {
        name[..name.len() - ".gz".len()].to_owned()
    } else {
        name.into_owned()
    };

    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    Ok(OutputPaths {
        extracted: dir.join(format!("{EXTRACTED_PREFIX}{name}")),
        cleaned: dir.join(format!("{CLEANED_PREFIX}{name}")),
    })
}

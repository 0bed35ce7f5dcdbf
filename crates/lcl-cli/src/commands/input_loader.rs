use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a positional argument, - for stdin, or -t/--text")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("input is empty")]
    Empty,
}

/// Pattern text from `-t`, stdin (`-`), or a file, in that order of precedence.
pub fn load_input(
    input_path: Option<&Path>,
    input_text: Option<&str>,
) -> Result<String, LoadError> {
    let text = match (input_text, input_path) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) if is_stdin(path) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(LoadError::Stdin)?;
            buf
        }
        (None, Some(path)) => fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.to_path_buf(),
            source,
        })?,
        (None, None) => return Err(LoadError::Missing),
    };

    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    tracing::debug!(len = text.len(), "loaded input");
    Ok(text)
}

/// Raw bytes of a compiled program from a file or stdin.
pub fn load_bytecode(input_path: Option<&Path>) -> Result<Vec<u8>, LoadError> {
    let path = input_path.ok_or(LoadError::Missing)?;
    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read(path).map_err(|source| LoadError::File {
            path: path.to_path_buf(),
            source,
        })?
    };
    tracing::debug!(len = bytes.len(), path = %path.display(), "loaded bytecode");
    Ok(bytes)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

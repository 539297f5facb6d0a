use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use super::convert::InputSource;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collect the raw inputs of a conversion run.
///
/// File and stdin content yields one input per line; blank lines are kept
/// so they surface as empty-input failures.
pub fn load_inputs(source: &InputSource) -> Result<Vec<String>, InputError> {
    match source {
        InputSource::Args(inputs) => Ok(inputs.clone()),
        InputSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.clone(),
                source,
            })?;
            Ok(split_lines(&content))
        }
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            Ok(split_lines(&buf))
        }
    }
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

//! Interactive resolution of the collection path

use crate::error::{BddGenError, Result};
use colored::Colorize;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};

/// Used when the prompt is answered with an empty line
pub const DEFAULT_COLLECTION_PATH: &str = "collections/Swagger-Petstore.postman_collection.json";

const COLLECTION_EXTENSION: &str = ".json";

const PROMPT: &str = "Path to the Postman collection (.json file)";

/// Check that `input` names an existing `.json` file.
///
/// Empty input selects [`DEFAULT_COLLECTION_PATH`].
pub fn validate_collection_path(input: &str) -> Result<PathBuf> {
    let input = input.trim();
    let input = if input.is_empty() {
        DEFAULT_COLLECTION_PATH
    } else {
        input
    };

    if !input.ends_with(COLLECTION_EXTENSION) {
        return Err(BddGenError::InvalidExtension(input.to_string()));
    }

    let path = Path::new(input);
    if path.is_dir() {
        return Err(BddGenError::NotAFile(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(BddGenError::NotFound(path.to_path_buf()));
    }

    Ok(path.to_path_buf())
}

/// Ask for the collection path until a valid one is given.
///
/// A terminal gets an editable dialoguer prompt. Piped stdin is read one line
/// per attempt, so scripted runs work too.
pub fn prompt_collection_path() -> Result<PathBuf> {
    if io::stdin().is_terminal() {
        resolve_collection_path(|| {
            Input::<String>::new()
                .with_prompt(PROMPT)
                .default(DEFAULT_COLLECTION_PATH.to_string())
                .allow_empty(true)
                .interact_text()
                .map(Some)
                .map_err(|e| BddGenError::Prompt(e.to_string()))
        })
    } else {
        let mut stdin = io::stdin().lock();
        resolve_collection_path(|| {
            println!("{} [{}]:", PROMPT, DEFAULT_COLLECTION_PATH);
            let mut line = String::new();
            match stdin.read_line(&mut line)? {
                0 => Ok(None),
                _ => Ok(Some(line)),
            }
        })
    }
}

/// Pull answers from `next_line` until one validates.
///
/// `next_line` yields `None` once input is exhausted, which ends the loop with
/// [`BddGenError::Prompt`].
pub fn resolve_collection_path<F>(mut next_line: F) -> Result<PathBuf>
where
    F: FnMut() -> Result<Option<String>>,
{
    loop {
        let Some(input) = next_line()? else {
            return Err(BddGenError::Prompt(
                "input ended before a valid collection path was given".to_string(),
            ));
        };

        match validate_collection_path(&input) {
            Ok(path) => return Ok(path),
            Err(e) => {
                tracing::debug!(input = %input.trim(), error = %e, "Rejected collection path");
                println!("\n{} {}", "✗".red(), e);
                println!("Please provide the full path to the collection .json file.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_wrong_extension() {
        let result = validate_collection_path("collection.yaml");
        assert!(matches!(result, Err(BddGenError::InvalidExtension(_))));
    }

    #[test]
    fn test_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let json_dir = dir.path().join("looks_like.json");
        std::fs::create_dir(&json_dir).unwrap();

        let result = validate_collection_path(json_dir.to_str().unwrap());
        assert!(matches!(result, Err(BddGenError::NotAFile(_))));
    }

    #[test]
    fn test_rejects_missing_file() {
        let result = validate_collection_path("/nonexistent/collection.json");
        assert!(matches!(result, Err(BddGenError::NotFound(_))));
    }

    #[test]
    fn test_accepts_existing_file_with_surrounding_whitespace() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("petstore.json");
        std::fs::write(&file, "{}").unwrap();

        let input = format!("  {}  ", file.display());
        assert_eq!(validate_collection_path(&input).unwrap(), file);
    }

    #[test]
    fn test_empty_input_selects_default() {
        // Resolved relative to the crate root, where the sample collection lives.
        let path = validate_collection_path("").unwrap();
        assert_eq!(path, PathBuf::from(DEFAULT_COLLECTION_PATH));
    }

    fn answers(lines: Vec<String>) -> impl FnMut() -> Result<Option<String>> {
        let mut lines = lines.into_iter();
        move || Ok(lines.next())
    }

    #[test]
    fn test_reprompts_until_valid_path() {
        let dir = TempDir::new().unwrap();
        let json_dir = dir.path().join("folder.json");
        std::fs::create_dir(&json_dir).unwrap();
        let file = dir.path().join("petstore.json");
        std::fs::write(&file, "{}").unwrap();

        let mut asked = 0;
        let mut next = answers(vec![
            "bad.yaml".to_string(),
            json_dir.display().to_string(),
            format!("{}\n", file.display()),
        ]);
        let path = resolve_collection_path(|| {
            asked += 1;
            next()
        })
        .unwrap();

        assert_eq!(path, file);
        assert_eq!(asked, 3);
    }

    #[test]
    fn test_exhausted_input_is_a_prompt_error() {
        let result = resolve_collection_path(answers(vec!["bad.yaml".to_string()]));
        assert!(matches!(result, Err(BddGenError::Prompt(_))));
    }
}

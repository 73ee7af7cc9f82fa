//! Headless front end for Snapedit.
//!
//! Runs a script of edit steps against an [`Editor`]: each step is either
//! an edit in `name[=value]` form or one of `undo` / `redo`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use snapedit_core::{ConfigError, Edit, Editor, EditorConfig, EditorError, ParseEditError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid step '{step}': {source}")]
    Step {
        step: String,
        #[source]
        source: ParseEditError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Apply(Edit),
    Undo,
    Redo,
}

impl FromStr for Step {
    type Err = ParseEditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "undo" => Ok(Step::Undo),
            "redo" => Ok(Step::Redo),
            _ => s.parse().map(Step::Apply),
        }
    }
}

/// Parse every step before touching any file, so a typo late in the
/// script fails fast.
pub fn parse_steps(raw: &[String]) -> Result<Vec<Step>, CliError> {
    raw.iter()
        .map(|step| {
            step.parse().map_err(|source| CliError::Step {
                step: step.clone(),
                source,
            })
        })
        .collect()
}

/// Read the config file if one was given, else use defaults.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig, CliError> {
    match path {
        Some(path) => Ok(EditorConfig::load(path)?),
        None => Ok(EditorConfig::default()),
    }
}

/// Open `input`, run `steps`, optionally save to `output`.
///
/// Returns the final status line and the written path, if any.
pub fn run_script(
    config: EditorConfig,
    input: &Path,
    steps: &[Step],
    output: Option<&Path>,
) -> Result<(String, Option<PathBuf>), CliError> {
    let mut editor = Editor::new(config);
    editor.open(input)?;

    for step in steps {
        match step {
            Step::Apply(edit) => {
                editor.apply(*edit)?;
            }
            Step::Undo => {
                editor.undo();
            }
            Step::Redo => {
                editor.redo();
            }
        }
        log::debug!("{step:?}: {}", editor.status());
    }

    let written = match output {
        Some(path) => Some(editor.save_as(path)?),
        None => None,
    };

    Ok((editor.status(), written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapedit_core::{codec, Image, PixelLayout, Rotation};

    fn write_fixture(dir: &Path) -> PathBuf {
        let pixels = (0..8 * 4 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let image = Image::new(8, 4, PixelLayout::Rgb, pixels);
        codec::save_image(&image, &dir.join("input.png"), "png").unwrap()
    }

    #[test]
    fn test_parse_steps() {
        let raw = vec![
            "rotate=90".to_string(),
            "UNDO".to_string(),
            "redo".to_string(),
            "grayscale".to_string(),
        ];
        let steps = parse_steps(&raw).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Apply(Edit::Rotate(Rotation::Cw90)),
                Step::Undo,
                Step::Redo,
                Step::Apply(Edit::Grayscale),
            ]
        );
    }

    #[test]
    fn test_parse_steps_reports_bad_step() {
        let raw = vec!["blur=5".to_string(), "sharpen".to_string()];
        let err = parse_steps(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid step 'sharpen': Unknown operation: sharpen"
        );
    }

    #[test]
    fn test_run_script_with_undo() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path());
        let steps = parse_steps(&[
            "rotate=90".to_string(),
            "resize=50".to_string(),
            "undo".to_string(),
        ])
        .unwrap();

        let (status, written) =
            run_script(EditorConfig::default(), &input, &steps, None).unwrap();
        assert_eq!(status, "input.png - 4x8 | Undo");
        assert!(written.is_none());
    }

    #[test]
    fn test_run_script_saves_with_default_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path());
        let steps = parse_steps(&["grayscale".to_string()]).unwrap();

        let (status, written) = run_script(
            EditorConfig::default(),
            &input,
            &steps,
            Some(&dir.path().join("out")),
        )
        .unwrap();

        let written = written.unwrap();
        assert_eq!(written, dir.path().join("out.png"));
        assert!(written.exists());
        assert_eq!(status, "out.png - 8x4 | Grayscale");
    }

    #[test]
    fn test_run_script_bounds_huge_resize() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path());
        let steps = parse_steps(&["resize=1e9".to_string()]).unwrap();

        let (status, _) = run_script(EditorConfig::default(), &input, &steps, None).unwrap();
        assert_eq!(status, "input.png - 16x8 | Resize 200%");
    }

    #[test]
    fn test_run_script_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_script(
            EditorConfig::default(),
            &dir.path().join("nope.png"),
            &[],
            None,
        );
        assert!(matches!(result, Err(CliError::Editor(_))));
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), EditorConfig::default());
    }
}

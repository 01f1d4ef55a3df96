//! The write sink: the primitive rule that materializes content

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::content::Content;
use crate::environment::EnvironmentValues;
use crate::error::BuildError;
use crate::template::TemplateKey;

use super::Rule;

/// Write a content value to a path under the output directory
///
/// The destination is the given relative path resolved against the
/// environment's output directory, so `output_path` modifiers above this rule
/// relocate what it writes. Templates registered along the path are applied
/// first, innermost (last-registered) template first; each template is bound
/// to the environment in scope before it runs. Intermediate directories are
/// created as needed and an existing file at the destination is overwritten.
pub struct Write {
    contents: Content,
    to: PathBuf,
}

impl Write {
    pub fn new(contents: Content, to: impl Into<PathBuf>) -> Self {
        Self {
            contents,
            to: to.into(),
        }
    }
}

impl Rule for Write {
    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        let mut content = self.contents.clone();
        for template in env.get::<TemplateKey>().iter().rev() {
            template.bind(env);
            content = template.apply(content);
        }

        let dest = env.output_directory().join(&self.to);
        if let Some(dir) = dest.parent() {
            // create_dir_all is idempotent; only real failures surface
            fs::create_dir_all(dir).map_err(|source| BuildError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let text = content.render();
        fs::write(&dest, &text).map_err(|source| BuildError::WriteFile {
            path: dest.clone(),
            source,
        })?;
        info!(path = %dest.display(), bytes = text.len(), "wrote file");
        Ok(())
    }
}

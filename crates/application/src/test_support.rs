//! Shared test doubles for the application layer.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use localenv_domain::{CommandSpec, ConfigDocument};

use crate::ports::{CommandError, CommandRunner, ConfigError, ConfigRepository};

/// Runner that replays scripted outputs and records every command.
#[derive(Default)]
pub struct MockRunner {
    outputs: RefCell<VecDeque<String>>,
    calls: RefCell<Vec<CommandSpec>>,
    fail_spawn: bool,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns these outputs in order, then empty strings.
    pub fn with_outputs<I, S>(outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            outputs: RefCell::new(outputs.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_spawn: true,
            ..Self::default()
        }
    }

    pub fn push_output(&self, output: impl Into<String>) {
        self.outputs.borrow_mut().push_back(output.into());
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandSpec) -> Result<String, CommandError> {
        self.calls.borrow_mut().push(command.clone());
        if self.fail_spawn {
            return Err(CommandError::Spawn {
                program: command.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such program"),
            });
        }
        let output = self.outputs.borrow_mut().pop_front().unwrap_or_default();
        Ok(output.trim().to_string())
    }
}

/// In-memory config repository that counts writes.
#[derive(Default)]
pub struct MemoryConfigRepository {
    document: RefCell<Option<ConfigDocument>>,
    load_error: RefCell<Option<String>>,
    saves: RefCell<Vec<(PathBuf, ConfigDocument)>>,
}

impl MemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(names: &[&str]) -> Self {
        let repo = Self::new();
        repo.document.replace(Some(ConfigDocument::new(
            names.iter().map(ToString::to_string).collect(),
        )));
        repo
    }

    pub fn with_invalid_format(message: &str) -> Self {
        let repo = Self::new();
        repo.load_error.replace(Some(message.to_string()));
        repo
    }

    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn last_saved(&self) -> Option<ConfigDocument> {
        self.saves.borrow().last().map(|(_, doc)| doc.clone())
    }

    pub fn stored(&self) -> Option<ConfigDocument> {
        self.document.borrow().clone()
    }
}

impl ConfigRepository for MemoryConfigRepository {
    fn load(&self, _path: &Path) -> Result<ConfigDocument, ConfigError> {
        if let Some(message) = self.load_error.borrow().clone() {
            return Err(ConfigError::InvalidFormat(message));
        }
        Ok(self.document.borrow().clone().unwrap_or_default())
    }

    fn save(&self, path: &Path, document: &ConfigDocument) -> Result<(), ConfigError> {
        self.saves
            .borrow_mut()
            .push((path.to_path_buf(), document.clone()));
        self.document.replace(Some(document.clone()));
        Ok(())
    }
}

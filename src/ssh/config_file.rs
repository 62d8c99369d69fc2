//! Reading and rewriting the shared SSH client config.
//!
//! The file is parsed into a preamble plus a list of `Host`/`Match` blocks.
//! A block runs from its header line to the next header; blank lines are
//! separators only, so rendering always emits exactly one blank line
//! between blocks.

use std::path::{Path, PathBuf};

use crate::config::SshPaths;
use crate::utils::fs::write_atomic;
use crate::{KeysyncError, Result};

/// Mode for the rewritten config file; ssh refuses group/world-writable configs
pub const CONFIG_FILE_MODE: u32 = 0o600;

/// One `Host` (or `Match`) section, header line included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBlock {
    /// Patterns on the `Host` line; empty for `Match` blocks
    patterns: Vec<String>,
    lines: Vec<String>,
}

impl HostBlock {
    /// Patterns listed on the `Host` line
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether the `Host` line names this alias literally
    pub fn matches(&self, alias: &str) -> bool {
        self.patterns.iter().any(|p| p == alias)
    }

    /// First value of a directive inside the block (keyword is case-insensitive)
    pub fn value(&self, keyword: &str) -> Option<&str> {
        self.lines
            .iter()
            .skip(1)
            .map(|line| split_directive(line))
            .find(|(key, _)| key.eq_ignore_ascii_case(keyword))
            .map(|(_, value)| value)
    }

    /// Block text terminated by a newline
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Parsed contents of an SSH config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Lines before the first block (global options, comments)
    preamble: Vec<String>,
    blocks: Vec<HostBlock>,
}

impl ConfigDocument {
    pub fn parse(content: &str) -> Self {
        let mut document = ConfigDocument::default();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (keyword, value) = split_directive(trimmed);
            if keyword.eq_ignore_ascii_case("host") || keyword.eq_ignore_ascii_case("match") {
                let patterns = if keyword.eq_ignore_ascii_case("host") {
                    value
                        .split_whitespace()
                        .map(|p| p.trim_matches('"').to_string())
                        .collect()
                } else {
                    Vec::new()
                };
                document.blocks.push(HostBlock {
                    patterns,
                    lines: vec![line.trim_end().to_string()],
                });
            } else if let Some(block) = document.blocks.last_mut() {
                block.lines.push(line.trim_end().to_string());
            } else {
                document.preamble.push(line.trim_end().to_string());
            }
        }

        document
    }

    pub fn render(&self) -> String {
        let mut sections = Vec::with_capacity(self.blocks.len() + 1);
        if !self.preamble.is_empty() {
            let mut preamble = self.preamble.join("\n");
            preamble.push('\n');
            sections.push(preamble);
        }
        sections.extend(self.blocks.iter().map(HostBlock::text));
        sections.join("\n")
    }

    pub fn blocks(&self) -> &[HostBlock] {
        &self.blocks
    }

    /// Aliases named by `Host` lines, in file order
    pub fn aliases(&self) -> Vec<String> {
        self.blocks
            .iter()
            .flat_map(|b| b.patterns.iter().cloned())
            .collect()
    }

    /// Drop every block whose `Host` line names the alias. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, alias: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| !b.matches(alias));
        self.blocks.len() != before
    }

    /// Replace the alias's block in place, or append it when absent.
    pub fn upsert(&mut self, alias: &str, block_text: &str) {
        let replacements = ConfigDocument::parse(block_text).blocks;
        let index = self.blocks.iter().position(|b| b.matches(alias));
        self.blocks.retain(|b| !b.matches(alias));

        // Nothing before the first match is removed, so the index still holds
        match index {
            Some(index) => {
                for (offset, block) in replacements.into_iter().enumerate() {
                    self.blocks.insert(index + offset, block);
                }
            }
            None => self.blocks.extend(replacements),
        }
    }
}

/// Split `Keyword value` or `Keyword=value`
fn split_directive(line: &str) -> (&str, &str) {
    let line = line.trim();
    let end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (keyword, rest) = line.split_at(end);
    let rest = rest.trim_start();
    let value = rest.strip_prefix('=').unwrap_or(rest).trim();
    (keyword, value)
}

/// Reads and rewrites the shared SSH config file.
#[derive(Debug, Clone)]
pub struct ConfigFileEditor {
    path: PathBuf,
}

impl ConfigFileEditor {
    pub fn new(paths: &SshPaths) -> Self {
        Self {
            path: paths.config_file().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the current file. `None` when it does not exist yet.
    pub fn load(&self) -> Result<Option<ConfigDocument>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(ConfigDocument::parse(&content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => {
                tracing::error!(path = %self.path.display(), error = %source, "failed to read ssh config");
                Err(KeysyncError::ConfigRead {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    /// Aliases present in the file; empty when the file is missing
    pub fn aliases(&self) -> Result<Vec<String>> {
        Ok(self.load()?.map(|doc| doc.aliases()).unwrap_or_default())
    }

    /// Remove the block for an alias. A missing file is logged and left
    /// alone. Returns whether a block was removed.
    pub fn remove_block(&self, alias: &str) -> Result<bool> {
        let Some(mut document) = self.load()? else {
            tracing::warn!(alias, path = %self.path.display(), "ssh config does not exist, nothing to remove");
            return Ok(false);
        };

        if !document.remove(alias) {
            tracing::debug!(alias, "no ssh config block to remove");
            return Ok(false);
        }

        self.write(&document.render())?;
        tracing::debug!(alias, "removed ssh config block");
        Ok(true)
    }

    /// Insert or replace one alias's block, keeping every other block.
    pub fn upsert_block(&self, alias: &str, block: &str) -> Result<()> {
        let mut document = self.load()?.unwrap_or_default();
        document.upsert(alias, block);
        self.write(&document.render())
    }

    /// Overwrite the whole file with the given blocks, in order.
    pub fn rewrite_all<S: AsRef<str>>(&self, blocks: &[S]) -> Result<()> {
        let content = blocks
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        self.write(&content)
    }

    fn write(&self, content: &str) -> Result<()> {
        write_atomic(&self.path, content.as_bytes(), CONFIG_FILE_MODE).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "failed to write ssh config");
            KeysyncError::ConfigWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}

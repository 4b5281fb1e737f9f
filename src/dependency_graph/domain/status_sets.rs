use super::Artifact;
use crate::shared::Result;
use std::fmt::Write;

/// Outcome of resolving a filtered dependency set
///
/// Each set keeps insertion order and holds an artifact at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyStatusSets {
    resolved: Vec<Artifact>,
    unresolved: Vec<Artifact>,
    skipped: Vec<Artifact>,
}

impl DependencyStatusSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolved(&self) -> &[Artifact] {
        &self.resolved
    }

    pub fn unresolved(&self) -> &[Artifact] {
        &self.unresolved
    }

    pub fn skipped(&self) -> &[Artifact] {
        &self.skipped
    }

    pub fn add_resolved(&mut self, artifact: Artifact) {
        insert_unique(&mut self.resolved, artifact);
    }

    pub fn add_unresolved(&mut self, artifact: Artifact) {
        insert_unique(&mut self.unresolved, artifact);
    }

    pub fn add_skipped(&mut self, artifact: Artifact) {
        insert_unique(&mut self.skipped, artifact);
    }

    /// Moves every resolved artifact rejected by `keep` to the skipped set
    ///
    /// The sets are left untouched when `keep` fails for any artifact.
    pub fn skip_resolved_unless<F>(&mut self, mut keep: F) -> Result<()>
    where
        F: FnMut(&Artifact) -> Result<bool>,
    {
        let decisions = self
            .resolved
            .iter()
            .map(&mut keep)
            .collect::<Result<Vec<bool>>>()?;

        let resolved = std::mem::take(&mut self.resolved);
        for (artifact, kept) in resolved.into_iter().zip(decisions) {
            if kept {
                self.resolved.push(artifact);
            } else {
                self.add_skipped(artifact);
            }
        }
        Ok(())
    }

    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// Human readable report with one section per set
    ///
    /// # Arguments
    /// * `with_file_names` - Append the resolved file path of each artifact when known
    pub fn output(&self, with_file_names: bool) -> String {
        let mut out = String::new();
        write_section(
            &mut out,
            "The following files have been resolved:",
            &self.resolved,
            with_file_names,
        );
        write_section(
            &mut out,
            "The following files were skipped:",
            &self.skipped,
            with_file_names,
        );
        write_section(
            &mut out,
            "The following files have NOT been resolved:",
            &self.unresolved,
            false,
        );
        out
    }
}

fn insert_unique(set: &mut Vec<Artifact>, artifact: Artifact) {
    if !set.contains(&artifact) {
        set.push(artifact);
    }
}

fn write_section(out: &mut String, title: &str, artifacts: &[Artifact], with_file_names: bool) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    if artifacts.is_empty() {
        let _ = writeln!(out, "   none");
        return;
    }
    for artifact in artifacts {
        let _ = write!(out, "   {}", artifact);
        if let Some(scope) = artifact.scope() {
            let _ = write!(out, ":{}", scope);
        }
        if with_file_names {
            if let Some(file) = artifact.file() {
                let _ = write!(out, ":{}", file.display());
            }
        }
        let _ = writeln!(out);
    }
}

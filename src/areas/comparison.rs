use crate::areas::workspace::Workspace;
use crate::artifacts::diff::reconciler::{DiffOptions, Reconciler};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Two roots, the options they are compared with, and where output goes
pub struct Comparison {
    new: Workspace,
    old: Workspace,
    raw_ignore: String,
    reconciler: Reconciler,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(
        new_path: &Path,
        old_path: &Path,
        ignore: &str,
        files_only: bool,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let new = Workspace::new(new_path)?;
        let old = Workspace::new(old_path)?;
        let options = DiffOptions::try_new(ignore, files_only)?;

        Ok(Comparison {
            new,
            old,
            raw_ignore: ignore.to_string(),
            reconciler: Reconciler::new(options),
            writer: RefCell::new(writer),
        })
    }

    pub fn new_workspace(&self) -> &Workspace {
        &self.new
    }

    pub fn old_workspace(&self) -> &Workspace {
        &self.old
    }

    /// The ignore list exactly as it was given
    pub fn raw_ignore(&self) -> &str {
        &self.raw_ignore
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}

use crate::areas::comparison::Comparison;
use colored::Colorize;

impl Comparison {
    pub async fn diff(&self) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "diff {} {}",
            self.new_workspace().path().display(),
            self.old_workspace().path().display()
        )?;

        if !self.raw_ignore().is_empty() {
            writeln!(self.writer(), "Ignore: {}", self.raw_ignore().yellow())?;
        }

        let change_set = self
            .reconciler()
            .diff_concurrent(self.new_workspace(), self.old_workspace())
            .await?;

        for path in change_set.unreadable() {
            eprintln!(
                "{} could not read {}",
                "warning:".yellow(),
                path.display()
            );
        }

        writeln!(
            self.writer(),
            "Changed: {}",
            change_set.len().to_string().yellow()
        )?;

        for change in &change_set {
            writeln!(self.writer(), "{change}")?;
        }

        Ok(())
    }
}

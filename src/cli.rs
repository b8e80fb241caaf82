use anyhow::Context;
use colored::Colorize;

use crate::base;
use crate::doc;
use crate::pipeline;

/// Roll a daily expense ledger into weekly and monthly cost summaries
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Spreadsheet to update; overrides the path from the config file
    ledger: Option<std::path::PathBuf>,

    /// Path of the config file
    #[arg(long, default_value = "budgetroll.json")]
    config: std::path::PathBuf,
}

impl Root {
    pub fn run(self) -> anyhow::Result<String> {
        let config = base::Config::load(&self.config)
            .with_context(|| format!("failed to read '{}'", self.config.display()))?;
        let path = self
            .ledger
            .or(config.ledger)
            .context("no ledger file; pass a path or set 'ledger' in the config")?;

        let mut document = doc::xlsx::load(&path)
            .with_context(|| format!("failed to open '{}'", path.display()))?;
        let report = pipeline::roll(&mut document)?;
        doc::xlsx::save(&document, &path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(format!(
            "{}{} '{}'\n",
            report,
            "updated".green(),
            path.display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc::Cell;
    use time::macros::date;

    fn parse(args: &[&str]) -> Root {
        match <Root as clap::Parser>::try_parse_from(args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{}", e),
        }
    }

    fn write_ledger(path: &std::path::Path) {
        let mut document = doc::Document::new();
        document
            .sheet_or_create(pipeline::LEDGER_SHEET)
            .table_or_create(pipeline::LEDGER_TABLE, 0, 0)
            .write_rows(&[
                vec![
                    Cell::from("Date"),
                    Cell::from("Cost"),
                    Cell::from("Details"),
                ],
                vec![
                    date!(2024 - 01 - 08).into(),
                    20.0.into(),
                    "fuel".into(),
                ],
                vec![
                    date!(2024 - 01 - 01).into(),
                    10.0.into(),
                    "lunch".into(),
                ],
            ])
            .unwrap();
        doc::xlsx::save(&document, path).unwrap();
    }

    #[test]
    fn test_run_updates_spreadsheet() {
        let td = tempfile::TempDir::new().unwrap();
        let path = td.path().join("tracker.xlsx");
        write_ledger(&path);

        let root = parse(&["", path.to_str().unwrap()]);
        let output = root.run().unwrap();
        assert!(output.contains("2 weekly and 1 monthly totals written"));
        assert!(output.contains("updated"));

        let document = doc::xlsx::load(&path).unwrap();
        assert!(document.contains_sheet(pipeline::WEEKLY_SHEET));
        assert!(document.contains_sheet(pipeline::MONTHLY_SHEET));
    }

    #[test]
    fn test_run_takes_path_from_config() {
        let td = tempfile::TempDir::new().unwrap();
        let path = td.path().join("tracker.xlsx");
        write_ledger(&path);
        let config_path = td.path().join("budgetroll.json");
        let config = base::Config {
            ledger: Some(path.clone()),
        };
        std::fs::write(&config_path, config.to_string()).unwrap();

        let root = parse(&["", "--config", config_path.to_str().unwrap()]);
        root.run().unwrap();
        assert!(doc::xlsx::load(&path)
            .unwrap()
            .contains_sheet(pipeline::WEEKLY_SHEET));
    }

    #[test]
    fn test_run_without_a_path() {
        let td = tempfile::TempDir::new().unwrap();
        let config_path = td.path().join("budgetroll.json");

        let root = parse(&["", "--config", config_path.to_str().unwrap()]);
        let err = root.run().unwrap_err();
        assert!(err.to_string().contains("no ledger file"));
    }
}

//! Implementation of the `sygen list` command.

use sygen_adapters::{TemplateCatalogue, TemplateInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let templates = TemplateCatalogue::builtin().infos();

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Available Templates ({}):", templates.len()))?;
            for line in table_rows(&templates) {
                output.print(&line)?;
            }
        }
        // JSON and CSV bypass quiet mode; they are meant for pipes.
        ListFormat::Json => output.json(&templates)?,
        ListFormat::List => {
            for t in &templates {
                output.print(t.id.as_str())?;
            }
        }
        ListFormat::Csv => {
            println!("id,shape,kind,description");
            for line in csv_rows(&templates) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_rows(templates: &[TemplateInfo]) -> Vec<String> {
    templates
        .iter()
        .map(|t| {
            format!(
                "  {:<26} {:<7} {:<10} {}",
                t.id.as_str(),
                t.shape.as_str(),
                t.kind.as_str(),
                t.description
            )
        })
        .collect()
}

fn csv_rows(templates: &[TemplateInfo]) -> Vec<String> {
    templates
        .iter()
        .map(|t| {
            format!(
                "{},{},{},\"{}\"",
                t.id,
                t.shape,
                t.kind,
                t.description.replace('"', "\"\"")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_template() {
        let templates = TemplateCatalogue::builtin().infos();
        assert_eq!(table_rows(&templates).len(), templates.len());
        assert_eq!(csv_rows(&templates).len(), templates.len());
    }

    #[test]
    fn csv_quotes_descriptions() {
        let templates = TemplateCatalogue::builtin().infos();
        let rows = csv_rows(&templates);
        assert!(
            rows.iter()
                .any(|r| r == "index-suite,index,index,\"Barrel from a list of exports\"")
        );
    }
}

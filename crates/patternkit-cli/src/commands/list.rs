//! `patternkit list` - print the demo catalog.

use clap::ValueEnum;
use patternkit_core::application::{DemoFamily, DemoInfo, catalog};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let format = resolve_format(args.format, &config, &output)?;
    let demos = filter_family(catalog(), args.family.map(DemoFamily::from));

    match format {
        ListFormat::Table => {
            output.header("Available Demos:")?;
            for demo in &demos {
                output.print(&format!(
                    "  {:<24} {:<11} {}",
                    demo.name,
                    demo.family.as_str(),
                    demo.description
                ))?;
            }
        }

        // JSON and CSV bypass quiet mode so they stay parseable in pipes.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&demos)
                .map_err(std::io::Error::from)
                .with_cli_context(|| "Failed to serialise the catalog")?;
            println!("{json}");
        }

        ListFormat::List => {
            for demo in &demos {
                output.print(demo.name)?;
            }
        }

        ListFormat::Csv => {
            println!("{}", csv_lines(&demos).join("\n"));
        }
    }

    Ok(())
}

/// `--format` wins, then `--output-format json`, then `output.format`.
fn resolve_format(
    flag: Option<ListFormat>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ListFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    if output.format() == OutputFormat::Json {
        return Ok(ListFormat::Json);
    }
    ListFormat::from_str(&config.output.format, true).map_err(|_| CliError::ConfigError {
        message: format!(
            "output.format must be table, list, json or csv (got '{}')",
            config.output.format
        ),
        source: None,
    })
}

fn filter_family(demos: Vec<DemoInfo>, family: Option<DemoFamily>) -> Vec<DemoInfo> {
    match family {
        Some(family) => demos.into_iter().filter(|d| d.family == family).collect(),
        None => demos,
    }
}

fn csv_lines(demos: &[DemoInfo]) -> Vec<String> {
    let mut lines = vec!["name,family,description".to_string()];
    lines.extend(demos.iter().map(|d| {
        format!(
            "{},{},\"{}\"",
            d.name,
            d.family,
            d.description.replace('"', "\"\"")
        )
    }));
    lines
}

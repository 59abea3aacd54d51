//! `patternkit run` - run one demo or the whole catalog.

use patternkit_core::application::DemoKind;
use tracing::{debug, instrument};

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(demo = ?args.demo, all = args.all))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::demo_service(&config, &output);

    if args.all {
        let count = service.run_all()?;
        output.print("")?;
        output.success(&format!("Ran {count} demos"))?;
        return Ok(());
    }

    // clap's arg group guarantees one of the two is present
    let name = args.demo.unwrap_or_default();
    let kind = resolve_demo(&name)?;
    debug!(%kind, "Resolved demo");

    service.run(kind)?;
    Ok(())
}

/// Look a demo up by name or alias.
fn resolve_demo(name: &str) -> CliResult<DemoKind> {
    name.parse().map_err(|_| CliError::UnknownDemo {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_aliases() {
        assert_eq!(resolve_demo("observer").unwrap(), DemoKind::Observer);
        assert_eq!(resolve_demo("OCP").unwrap(), DemoKind::Specification);
        assert_eq!(resolve_demo("neural_network").unwrap(), DemoKind::NeuralNetwork);
    }

    #[test]
    fn unknown_name_is_user_error() {
        let err = resolve_demo("singleton").unwrap_err();
        assert!(matches!(err, CliError::UnknownDemo { ref name } if name == "singleton"));
        assert_eq!(err.exit_code(), 2);
    }
}

//! `patternkit send` - the interactive message bridge.
//!
//! Values missing from the command line are prompted for, which needs the
//! `interactive` feature.

use tracing::info;

use crate::{
    cli::SendArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const KIND_PROMPT: &str = "Please enter 2 or 1";
const TEXT_PROMPT: &str = "Please write a message that you want send";

pub fn execute(args: SendArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let selector = match args.kind {
        Some(kind) => kind,
        None => prompt(KIND_PROMPT)?,
    };
    let text = match args.text {
        Some(text) => text,
        None => prompt(TEXT_PROMPT)?,
    };

    let delivery =
        super::demo_service(&config, &output).send_message_from_input(&selector, &text)?;
    info!(sent = delivery.is_sent(), "Message handled");
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt(question: &str) -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(question)
        .interact_text()
        .map_err(|e| CliError::IoError {
            message: format!("Failed to read answer to '{question}'"),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt(_question: &str) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_match_the_bridge_script() {
        assert_eq!(KIND_PROMPT, "Please enter 2 or 1");
        assert_eq!(TEXT_PROMPT, "Please write a message that you want send");
    }

    #[cfg(not(feature = "interactive"))]
    #[test]
    fn prompting_without_feature_is_reported() {
        assert!(matches!(
            prompt(KIND_PROMPT),
            Err(CliError::FeatureNotAvailable { feature: "interactive" })
        ));
    }
}

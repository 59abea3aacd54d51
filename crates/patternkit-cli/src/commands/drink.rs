//! `patternkit drink` - order one drink from the hot-drink machine.

use patternkit_core::domain::DrinkKind;
use tracing::instrument;

use crate::{cli::DrinkArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(drink = ?args.drink))]
pub fn execute(args: DrinkArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = DrinkKind::from(args.drink);
    let amount = pour_amount(args.amount, &config);

    super::demo_service(&config, &output).make_drink(kind, amount)?;
    Ok(())
}

fn pour_amount(flag: Option<u32>, config: &AppConfig) -> u32 {
    flag.unwrap_or(config.demo.drink_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_falls_back_to_config() {
        let mut config = AppConfig::default();
        assert_eq!(pour_amount(None, &config), 12);

        config.demo.drink_amount = 300;
        assert_eq!(pour_amount(None, &config), 300);
        assert_eq!(pour_amount(Some(50), &config), 50);
    }
}

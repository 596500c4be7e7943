use anyhow::bail;

use crate::cli::BankCommands;
use crate::commands::output;

/// Handle `tappr bank`.
pub fn handle(action: &BankCommands) -> anyhow::Result<()> {
    match action {
        BankCommands::Validate => {
            let validation = tappr_bank::validate_bank();
            output(&validation)?;
            if !validation.is_valid {
                bail!("question bank validation failed");
            }
            Ok(())
        }
        BankCommands::Stats => output(&tappr_bank::bank_stats()),
        BankCommands::Sample { count } => {
            output(&tappr_bank::balanced_random_questions(*count))
        }
    }
}

/// Handle `tappr health`.
pub fn health() -> anyhow::Result<()> {
    let health = tappr_bank::system_health();
    output(&health)?;
    if !health.ready {
        bail!("system is not ready");
    }
    Ok(())
}

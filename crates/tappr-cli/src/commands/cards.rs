use anyhow::bail;

use tappr_db::service::TapprService;

use crate::cli::CardCommands;
use crate::commands::output;

/// Handle `tappr cards`.
pub async fn handle(action: &CardCommands, service: &TapprService) -> anyhow::Result<()> {
    match action {
        CardCommands::Lookup { code } => match service.lookup_card(code).await? {
            Some(lookup) => output(&lookup),
            None => bail!("no card registered with code '{code}'"),
        },
        CardCommands::List { user_id } => {
            let cards = service.cards_for_user(user_id).await?;
            output(&cards)
        }
    }
}

use serde::Serialize;

use tappr_db::service::TapprService;

use crate::cli::SessionCommands;
use crate::commands::output;

#[derive(Serialize)]
struct SweepReport {
    expired: usize,
}

/// Handle `tappr sessions`.
pub async fn handle(action: &SessionCommands, service: &TapprService) -> anyhow::Result<()> {
    match action {
        SessionCommands::Show { session_id } => {
            let session = service.get_session(session_id).await?;
            output(&session)
        }
        SessionCommands::Pending { user_id } => {
            let sessions = service.pending_sessions_for_target(user_id).await?;
            output(&sessions)
        }
        SessionCommands::Completed { user_id } => {
            let sessions = service.completed_sessions_for_initiator(user_id).await?;
            output(&sessions)
        }
        SessionCommands::Sweep => {
            let expired = service.sweep_expired_sessions().await?;
            output(&SweepReport { expired })
        }
    }
}

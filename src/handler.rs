use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    interpreter::{interpret, Abort},
    oneclick::ClickEvent,
    slack::{DispatchError, SlackMessage, WebhookResponse},
    ServerState,
};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Aborted(#[from] Abort),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Interprets one click and posts the resulting message.
pub async fn relay(state: &ServerState, event: &ClickEvent) -> Result<WebhookResponse, RelayError> {
    let notification = interpret(event, &state.messages)?;

    let message = SlackMessage::new(notification.message, notification.username);
    let res = state.slack.post(&notification.webhook_url, &message).await?;

    Ok(res)
}

/// Invocation entry point. Outcomes only reach the logs; nothing is returned to the caller.
pub async fn handle_click(state: &ServerState, event: ClickEvent) {
    match relay(state, &event).await {
        Ok(res) if res.status.is_success() => {
            info!(status = %res.status, "notification posted");
        }
        Ok(res) => {
            warn!(status = %res.status, body = %res.body, "webhook answered with an error status");
        }
        Err(RelayError::Aborted(reason)) => {
            warn!(%reason, "click ignored");
        }
        Err(RelayError::Dispatch(err)) => {
            error!(error = %err, "failed to post notification");
        }
    }
}

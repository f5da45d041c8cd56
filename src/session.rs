//! Session loop — feeds channel input through the app one line at a time.

use futures::StreamExt;

use crate::app::{App, Outcome};
use crate::channels::{Channel, OutgoingResponse};
use crate::error::Error;

/// Run `app` against `channel` until the input ends, the user quits, or
/// Ctrl+C arrives.
///
/// Each message is handled to completion before the next is read.
pub async fn run(app: &mut App, channel: &dyn Channel) -> Result<(), Error> {
    let mut messages = channel.start().await?;

    channel
        .respond(None, OutgoingResponse::text(app.render()))
        .await?;

    tracing::info!(channel = channel.name(), "Session ready");

    loop {
        let message = tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl+C received, shutting down...");
                break;
            }
            msg = messages.next() => {
                match msg {
                    Some(m) => m,
                    None => {
                        tracing::info!("Input ended, shutting down...");
                        break;
                    }
                }
            }
        };

        tracing::debug!(
            message_id = %message.id,
            channel = %message.channel,
            "Handling input"
        );

        match app.handle(&message.content) {
            Outcome::Render(text) => {
                if let Err(e) = channel
                    .respond(Some(&message), OutgoingResponse::text(text))
                    .await
                {
                    tracing::error!("Failed to send response: {}", e);
                }
            }
            Outcome::Quit => {
                tracing::info!("Quit command received, exiting...");
                break;
            }
        }
    }

    channel.shutdown().await?;
    Ok(())
}

//! Message handlers module
//!
//! Every private-chat text message drives the booking conversation one
//! turn forward: load state, run the turn, send the replies, save state.

use chrono::Utc;
use teloxide::{prelude::*, types::Message, Bot};
use tracing::debug;

use crate::dialog;
use crate::recognize::RecognizerSet;
use crate::state::StateStorage;
use crate::utils::errors::{BookingBuddyError, Result};
use crate::utils::logging;

/// Handle incoming text messages
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    storage: StateStorage,
    recognizers: RecognizerSet,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        BookingBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(user_id = user_id, chat_id = ?chat_id, "Processing message");

    // The booking flow only runs in private chats
    if !chat_id.is_user() {
        return Ok(());
    }

    let Some(text) = msg.text() else {
        bot.send_message(chat_id, "I can only read text messages here.")
            .await?;
        return Ok(());
    };

    let mut flow = storage.load_flow(chat_id.0).await?;
    let mut profile = storage.load_profile(user_id).await?;

    let replies = dialog::run_turn(
        &mut flow,
        &mut profile,
        text,
        Utc::now(),
        &recognizers.numbers,
        &recognizers.dates,
    );

    let reply_count = replies.len();
    for reply in replies {
        bot.send_message(chat_id, reply).await?;
    }

    storage.save_flow(chat_id.0, &flow).await?;
    storage.save_profile(user_id, &profile).await?;

    logging::log_turn(
        user_id,
        chat_id.0,
        flow.last_question_asked.label(),
        reply_count,
    );
    Ok(())
}

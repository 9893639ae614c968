//! Command handlers
//!
//! /start begins a fresh booking conversation, /cancel abandons the
//! current one, /help explains what the bot does.

use chrono::Utc;
use teloxide::{prelude::*, types::Message, Bot};
use tracing::info;

use crate::dialog::{self, ConversationFlow, UserProfile};
use crate::recognize::RecognizerSet;
use crate::state::StateStorage;
use crate::utils::errors::{BookingBuddyError, Result};

const HELP_TEXT: &str = "I collect the details for a travel booking: your name, \
your age and your travel date. Just answer my questions.\n\n\
/start - begin a new booking\n\
/cancel - abandon the current booking\n\
/help - show this message";

/// Handle /start command - drop any existing state and ask the first question
pub async fn handle_start(
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

    if !chat_id.is_user() {
        bot.send_message(chat_id, "Bookings are handled in private chat.")
            .await?;
        return Ok(());
    }

    storage.clear(chat_id.0, user_id).await?;

    let mut flow = ConversationFlow::default();
    let mut profile = UserProfile::default();
    let replies = dialog::run_turn(
        &mut flow,
        &mut profile,
        "",
        Utc::now(),
        &recognizers.numbers,
        &recognizers.dates,
    );
    for reply in replies {
        bot.send_message(chat_id, reply).await?;
    }

    storage.save_flow(chat_id.0, &flow).await?;
    storage.save_profile(user_id, &profile).await?;

    info!(user_id = user_id, "Booking conversation started");
    Ok(())
}

/// Handle /cancel command - clear state and confirm
pub async fn handle_cancel(bot: Bot, msg: Message, storage: StateStorage) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        BookingBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    if !chat_id.is_user() {
        return Ok(());
    }

    storage.clear(chat_id.0, user_id).await?;
    bot.send_message(
        chat_id,
        "Your booking has been cancelled. Send /start to begin again.",
    )
    .await?;

    info!(user_id = user_id, "Booking conversation cancelled");
    Ok(())
}

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT).await?;
    Ok(())
}

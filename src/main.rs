//! BookingBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info, warn};

use BookingBuddy::{
    config::Settings,
    handlers::{commands, messages},
    recognize::RecognizerSet,
    state::StateStorage,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the dispatcher so the
    // rolling file writer keeps running
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting BookingBuddy Telegram Bot...");

    // Initialize state storage
    info!("Connecting to Redis...");
    let storage = StateStorage::new(settings.redis.clone()).await?;
    storage.test_connection().await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Wrap dependencies in Arc for dependency injection
    let storage_arc = Arc::new(storage);
    let recognizers_arc = Arc::new(RecognizerSet::default());

    // Create the handler
    let handler = create_handler();

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![storage_arc, recognizers_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("BookingBuddy bot is ready!");

    dispatcher.dispatch().await;

    info!("BookingBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<BotCommands>()
                    .endpoint(handle_commands),
            )
            .branch(
                // Handle regular messages
                dptree::endpoint(handle_messages),
            ),
    )
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "BookingBuddy Bot Commands")]
enum BotCommands {
    #[command(description = "Start a new booking conversation")]
    Start,
    #[command(description = "Cancel the current booking")]
    Cancel,
    #[command(description = "Show help information")]
    Help,
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommands,
    storage: Arc<StateStorage>,
    recognizers: Arc<RecognizerSet>,
) -> HandlerResult {
    let storage = (*storage).clone();
    let recognizers = (*recognizers).clone();

    let result = match cmd {
        BotCommands::Start => commands::handle_start(bot, msg, storage, recognizers).await,
        BotCommands::Cancel => commands::handle_cancel(bot, msg, storage).await,
        BotCommands::Help => commands::handle_help(bot, msg).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    storage: Arc<StateStorage>,
    recognizers: Arc<RecognizerSet>,
) -> HandlerResult {
    let storage = (*storage).clone();
    let recognizers = (*recognizers).clone();

    if let Err(e) = messages::handle_message(bot, msg, storage, recognizers).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

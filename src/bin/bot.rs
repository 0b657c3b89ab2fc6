use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;

use remind_bot::calendar::{CalendarClient, DisabledCalendar, GoogleCalendarClient};
use remind_bot::commands::{CommandContext, CommandHandler};
use remind_bot::core::Config;
use remind_bot::database::{ReminderStore, SqliteSheetStore};
use remind_bot::features::reminders::ReminderScheduler;
use remind_bot::line::LineClient;
use remind_bot::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting reminder bot...");

    let offset = config.timezone()?;
    let store: Arc<dyn ReminderStore> = Arc::new(SqliteSheetStore::open(&config.database_path)?);
    let line = Arc::new(LineClient::new(
        config.line_api_base.clone(),
        config.line_channel_access_token.clone(),
    ));

    let calendar: Arc<dyn CalendarClient> = match config.calendar.clone() {
        Some(calendar_config) => {
            info!("📅 Calendar mirroring enabled for {}", calendar_config.calendar_id);
            Arc::new(GoogleCalendarClient::new(calendar_config, offset))
        }
        None => {
            info!("📅 No CALENDAR_ID/GOOGLE_CALENDAR_TOKEN set - calendar mirroring disabled");
            Arc::new(DisabledCalendar)
        }
    };

    // Start the reminder scheduler
    let scheduler = ReminderScheduler::new(store.clone(), line.clone(), offset);
    let interval = Duration::from_secs(config.delivery_interval_secs);
    tokio::spawn(async move {
        scheduler.run(interval).await;
    });

    let command_handler = CommandHandler::new(CommandContext::new(store, calendar), line);
    let state = AppState {
        command_handler: Arc::new(command_handler),
        offset,
    };

    if let Err(e) = server::serve(&config.bind_addr, state).await {
        error!("Webhook server failed: {e:#}");
        return Err(e);
    }

    Ok(())
}

//! Headless thin-client shell for the WardShift scheduling API.
//!
//! Wires the same dependency graph the graphical shells use (storage,
//! navigator, 401 interceptor, gateway, session) and drives one operation
//! per invocation. The persisted token keeps the session across runs.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use wardshift::api::{self, ScheduleFilter};
use wardshift::config::ClientConfig;
use wardshift::gateway::{ForceLogin, Gateway, GatewayError};
use wardshift::i18n::{self, Lang};
use wardshift::routes::{GuardedNavigator, RouteTable};
use wardshift::session::SessionService;
use wardshift::storage::{FileStore, KeyValueStore};
use wardshift::transport::ReqwestTransport;

#[derive(Parser, Debug)]
#[command(name = "wardshift-cli", about = "WardShift scheduling API client")]
struct Cli {
    /// API base URL.
    #[arg(long, env = "WARDSHIFT_API_BASE")]
    base_url: Option<String>,

    /// Directory holding the persisted token and language selection.
    #[arg(long, env = "WARDSHIFT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and persist the session token.
    Login { username: String, password: String },
    /// Fetch and print the authenticated profile.
    Whoami,
    /// Clear the persisted session.
    Logout,
    /// List rostered shifts.
    Schedules {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        doctor_id: Option<i64>,
    },
    /// List visible trade requests.
    Trades,
    /// List own scheduling preferences.
    Preferences,
    /// List notifications.
    Notifications,
    /// Show or change the display language.
    Lang { tag: Option<String> },
}

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.data_dir.clone()));
    let navigator = Arc::new(GuardedNavigator::new(RouteTable::mobile(), storage.clone()));
    let interceptor = Arc::new(ForceLogin::new(storage.clone(), navigator.clone()));
    let gateway = Arc::new(
        Gateway::new(config, Arc::new(ReqwestTransport::new()), storage.clone())
            .with_unauthorized_interceptor(interceptor),
    );
    let session = SessionService::hydrate(gateway.clone(), storage.clone(), navigator);

    match cli.command {
        Command::Login { username, password } => {
            session.login(&username, &password).await?;
            match session.current_user() {
                Some(profile) => println!("logged in as {} ({})", profile.username, profile.role),
                None => println!("logged in, but the profile could not be fetched"),
            }
        }
        Command::Whoami => match session.fetch_profile().await {
            Some(profile) => print_json(&serde_json::to_value(&profile)?)?,
            None => println!("not signed in"),
        },
        Command::Logout => {
            session.logout();
            println!("signed out");
        }
        Command::Schedules { start_date, end_date, doctor_id } => {
            let filter = ScheduleFilter { start_date, end_date, doctor_id };
            let entries = api::list_schedules(&gateway, &filter).await?;
            print_json(&serde_json::to_value(entries)?)?;
        }
        Command::Trades => {
            print_json(&serde_json::to_value(api::list_trades(&gateway).await?)?)?;
        }
        Command::Preferences => {
            print_json(&serde_json::to_value(api::my_preferences(&gateway).await?)?)?;
        }
        Command::Notifications => {
            let unread = api::unread_count(&gateway).await?;
            let notifications = api::list_notifications(&gateway).await?;
            println!("{unread} unread");
            print_json(&serde_json::to_value(notifications)?)?;
        }
        Command::Lang { tag } => match tag {
            Some(tag) => {
                let lang = Lang::from_tag(&tag);
                i18n::set_lang(storage.as_ref(), lang);
                println!("{}", lang.tag());
            }
            None => println!("{}", i18n::active_lang(storage.as_ref()).tag()),
        },
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), GatewayError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

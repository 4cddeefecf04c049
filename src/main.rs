use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use twitch_kraken::KrakenClient;
use twitch_kraken::client::{DEFAULT_BASE_URL, DEFAULT_CHATTERS_URL};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser, Debug)]
#[command(name = "twitch-kraken")]
#[command(about = "Query the Twitch Kraken API", long_about = None)]
struct Args {
    /// Application client ID
    #[arg(long, env = "TWITCH_CLIENT_ID", hide_env_values = true)]
    client_id: String,

    /// OAuth token for endpoints that act on behalf of a user
    #[arg(long, env = "TWITCH_OAUTH_TOKEN", hide_env_values = true)]
    oauth: Option<String>,

    /// Kraken API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Chat roster host
    #[arg(long, default_value = DEFAULT_CHATTERS_URL)]
    chatters_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get a channel by ID
    Channel { channel_id: String },
    /// Get the channel owning the OAuth token
    MeChannel,
    /// List a channel's editors (needs --oauth)
    Editors { channel_id: String },
    /// Get one page of a channel's followers
    Follows {
        channel_id: String,
        #[arg(long)]
        cursor: Option<String>,
        #[arg(long, default_value = "25")]
        limit: u32,
    },
    /// Get every follower of a channel
    AllFollows { channel_id: String },
    /// Get a user's public profile
    User { name: String },
    /// Get the user owning the OAuth token
    Me,
    /// Get every channel a user follows
    UserFollows { user_id: String },
    /// Search channels
    SearchChannels {
        query: String,
        /// Only return an exact name match
        #[arg(long)]
        exact: bool,
    },
    /// Search users
    SearchUsers {
        query: String,
        /// Only return an exact name match
        #[arg(long)]
        exact: bool,
    },
    /// Get a channel's live stream
    Stream { channel_id: String },
    /// Get live streams followed by the OAuth token's user
    FollowedStreams,
    /// Get a channel's chat roster
    Chatters { channel: String },
    /// Get one page of a channel's videos
    Videos {
        channel_id: String,
        #[arg(long, default_value = "10")]
        limit: u32,
        #[arg(long, default_value = "0")]
        offset: u32,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), BoxError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_oauth(oauth: Option<&str>) -> Result<&str, BoxError> {
    oauth.ok_or_else(|| "this command needs --oauth or TWITCH_OAUTH_TOKEN".into())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("twitch_kraken={}", args.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        base_url = %args.base_url,
        timeout_secs = args.timeout_secs,
        "Starting twitch-kraken"
    );

    let client = KrakenClient::with_base_url(&args.client_id, &args.base_url)?
        .with_chatters_url(&args.chatters_url)?
        .with_timeout(Duration::from_secs(args.timeout_secs))?;
    let oauth = args.oauth.as_deref();

    match args.command {
        Command::Channel { channel_id } => print_json(&client.channel(&channel_id).await?),
        Command::MeChannel => print_json(&client.channel_by_oauth(require_oauth(oauth)?).await?),
        Command::Editors { channel_id } => print_json(
            &client
                .channel_editors(&channel_id, require_oauth(oauth)?)
                .await?,
        ),
        Command::Follows {
            channel_id,
            cursor,
            limit,
        } => print_json(
            &client
                .channel_follows(&channel_id, cursor.as_deref(), limit)
                .await?,
        ),
        Command::AllFollows { channel_id } => {
            print_json(&client.all_channel_follows(&channel_id).await?)
        }
        Command::User { name } => print_json(&client.user(&name).await?),
        Command::Me => print_json(&client.user_by_oauth(require_oauth(oauth)?).await?),
        Command::UserFollows { user_id } => print_json(&client.all_user_follows(&user_id).await?),
        Command::SearchChannels { query, exact } => {
            if exact {
                print_json(&client.search_exact_channel(&query).await?)
            } else {
                print_json(&client.search_channels(&query).await?)
            }
        }
        Command::SearchUsers { query, exact } => {
            if exact {
                print_json(&client.search_exact_user(&query).await?)
            } else {
                print_json(&client.search_users(&query).await?)
            }
        }
        Command::Stream { channel_id } => print_json(&client.stream_by_channel(&channel_id).await?),
        Command::FollowedStreams => {
            print_json(&client.followed_streams(require_oauth(oauth)?).await?)
        }
        Command::Chatters { channel } => print_json(&client.chatters(&channel).await?),
        Command::Videos {
            channel_id,
            limit,
            offset,
        } => print_json(&client.channel_videos(&channel_id, limit, offset).await?),
    }
}

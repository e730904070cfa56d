//! Vita chat entry point
//!
//! Loads settings, picks a completion backend, and runs an interactive chat
//! loop on stdin. One session per process; the transcript lives only for the
//! process lifetime.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use vita_chat::ChatSession;
use vita_config::{load_settings, Settings};
use vita_llm::{BackendConfig, LlmFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("VITA_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!("Starting Vita chat v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?settings.environment,
        provider = ?settings.llm.provider,
        "Configuration loaded"
    );

    let backend = LlmFactory::create(&BackendConfig::from_settings(&settings.llm))?;
    let session = ChatSession::new(backend);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(b"> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        // Presentation-layer trimming; the session takes input as-is
        let text = line.trim();
        if !text.is_empty() {
            let reply = session.send(text).await;
            stdout.write_all(reply.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    tracing::info!(
        transcript_lines = session.transcript().await.len(),
        "Session ended"
    );
    Ok(())
}

/// Initialize tracing with an env-filter and a fmt or JSON layer.
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("vita={level},vita_llm={level},vita_chat={level}").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}

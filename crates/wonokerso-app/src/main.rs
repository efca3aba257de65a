mod bootstrap;
mod cli;
mod render;
mod repl;

use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use wonokerso_chat::{ChatSession, HttpAnswerClient, KnowledgeBase, SessionContext};
use wonokerso_common::{ConfigError, WonokersoError};
use wonokerso_config::ChatbotConfig;

fn log_directive(args: &cli::Args, config: &ChatbotConfig) -> Directive {
    let requested = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("wonokerso={}", config.logging.level.as_str()));

    requested.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive {requested:?}, falling back to info");
        LevelFilter::INFO.into()
    })
}

fn init_logging(directive: Directive) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging exists, so the loader's own warnings go
    // nowhere; validation is reported again once the subscriber is up.
    let loaded: Result<ChatbotConfig, ConfigError> =
        bootstrap::load_config(args.config.as_deref());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => ChatbotConfig::default(),
    };

    init_logging(log_directive(&args, &config));

    match loaded {
        Ok(config) => {
            if let Err(e) = wonokerso_config::validation::validate(&config) {
                warn!("config validation: {e}");
            }
        }
        Err(e) => warn!("failed to load config, using defaults: {e}"),
    }

    match run(args, config).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("wonokerso: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args, config: ChatbotConfig) -> Result<ExitCode, WonokersoError> {
    let client = HttpAnswerClient::new(bootstrap::client_config(&config.endpoint))?;

    let source = bootstrap::knowledge_source(&config.knowledge, args.knowledge.as_deref());
    let knowledge = KnowledgeBase::load_or_fallback(&source, client.http()).await;

    let session = ChatSession::new(knowledge)
        .with_prompt(bootstrap::prompt_builder(&config.prompt))
        .with_reveal(bootstrap::reveal_settings(&config.reveal, args.no_reveal));
    let ctx = SessionContext::new();

    info!(
        session_id = %ctx.session_id(),
        endpoint = %config.endpoint.url,
        facts = session.knowledge().len(),
        "chat session ready"
    );

    let renderer = render::Renderer::new(&config.display);
    match args.ask {
        Some(question) => {
            repl::run_once(
                &session,
                &ctx,
                &client,
                &renderer,
                &question,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await
        }
        None => repl::run_interactive(&session, &ctx, &client, &renderer).await,
    }
}

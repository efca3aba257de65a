//! Interactive loop and one-shot mode on top of a `ChatSession`.

use std::io::Write;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Local, Utc};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use wonokerso_chat::{
    AnswerClient, ChatError, ChatSession, SessionContext, SubmitOutcome, APOLOGY_REPLY,
};
use wonokerso_common::WonokersoError;

use crate::render::Renderer;

const HELP: &str = "\
Type a question and press Enter.
  /history  show the conversation so far
  /help     show this help
  /quit     leave (also /exit or Ctrl-D)";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    History,
    Help,
    Ask(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Command::Quit,
            "/history" => Command::History,
            "/help" => Command::Help,
            _ => Command::Ask(line),
        }
    }
}

pub async fn run_interactive(
    session: &ChatSession,
    ctx: &SessionContext,
    client: &dyn AnswerClient,
    renderer: &Renderer<'_>,
) -> Result<ExitCode, WonokersoError> {
    println!("{}", renderer.header(session.message_count().await));
    println!("{}", renderer.history(&session.messages().await, &Local::now()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::History => {
                println!("{}", renderer.header(session.message_count().await));
                println!("{}", renderer.history(&session.messages().await, &Local::now()));
            }
            Command::Ask(text) => {
                session.set_draft(text).await;
                let outcome = session.submit_draft(ctx, client, printer(renderer)).await;
                report(session, renderer, outcome, &mut std::io::stdout()).await?;
            }
        }
    }

    debug!(messages = session.message_count().await, "leaving chat");
    Ok(ExitCode::SUCCESS)
}

/// Ask one question, print the answer, and exit non-zero on failure.
///
/// Answers and the apology go to `out`; the banner goes to `err`.
pub async fn run_once(
    session: &ChatSession,
    ctx: &SessionContext,
    client: &dyn AnswerClient,
    renderer: &Renderer<'_>,
    question: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode, WonokersoError> {
    let outcome = session
        .submit(ctx, client, question, printer(renderer))
        .await?;

    let code = match outcome {
        SubmitOutcome::Ignored => {
            writeln!(err, "nothing to ask")?;
            ExitCode::FAILURE
        }
        SubmitOutcome::Answered { reply } => {
            if session.reveal_settings().enabled {
                writeln!(out)?;
            } else {
                writeln!(out, "{}", reply.content())?;
            }
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed { banner, reply } => {
            writeln!(err, "{}", renderer.banner(banner))?;
            writeln!(out, "{}", reply.content())?;
            ExitCode::FAILURE
        }
    };
    Ok(code)
}

/// Chunk sink that prints the bot heading before the first chunk.
fn printer(renderer: &Renderer<'_>) -> impl Fn(String) + Send + Sync {
    let now = Utc::now();
    let heading = renderer.heading(true, &now, &now);
    let started = AtomicBool::new(false);

    move |chunk: String| {
        let mut out = std::io::stdout().lock();
        if !started.swap(true, Ordering::Relaxed) {
            let _ = writeln!(out, "{heading}");
            let _ = write!(out, "  ");
        }
        let _ = write!(out, "{}", chunk.replace('\n', "\n  "));
        let _ = out.flush();
    }
}

/// Print what an interactive submit produced.
async fn report(
    session: &ChatSession,
    renderer: &Renderer<'_>,
    outcome: Result<SubmitOutcome, ChatError>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match outcome {
        Ok(SubmitOutcome::Ignored) => {}
        Ok(SubmitOutcome::Answered { reply }) => {
            if session.reveal_settings().enabled {
                writeln!(out)?;
            } else {
                writeln!(out, "{}", renderer.message(&reply, &Utc::now()))?;
            }
        }
        Ok(SubmitOutcome::Failed { banner, reply }) => {
            writeln!(out, "{}", renderer.banner(banner))?;
            writeln!(out, "{}", renderer.message(&reply, &Utc::now()))?;
            session.dismiss_error().await;
        }
        Err(e) => {
            warn!("submission rejected: {e}");
            writeln!(out, "{APOLOGY_REPLY}")?;
        }
    }
    Ok(())
}

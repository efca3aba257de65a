//! Tests for the submit cycle, against a scripted client and a mock endpoint.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wonokerso_common::SessionId;

use super::*;
use crate::http::{AnswerClientConfig, HttpAnswerClient};
use crate::{
    AnswerClient, AnswerReply, AnswerRequest, ChatError, ErrorBanner, KnowledgeBase,
    RevealSettings, APOLOGY_REPLY, FALLBACK_REPLY,
};

#[derive(Debug, Clone)]
struct Sent {
    question: String,
    prompt: String,
    session_id: String,
}

/// Replays canned results and records every request it receives.
#[derive(Default)]
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<AnswerReply, ChatError>>>,
    sent: Mutex<Vec<Sent>>,
}

impl ScriptedClient {
    fn replying(replies: impl IntoIterator<Item = Result<AnswerReply, ChatError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            sent: Mutex::default(),
        }
    }

    fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerClient for ScriptedClient {
    async fn ask(&self, request: &AnswerRequest<'_>) -> Result<AnswerReply, ChatError> {
        self.sent.lock().unwrap().push(Sent {
            question: request.question.to_string(),
            prompt: request.prompt.to_string(),
            session_id: request.session_id.to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(AnswerReply::default()))
    }
}

/// Blocks every request until released.
struct GatedClient {
    gate: Notify,
}

#[async_trait]
impl AnswerClient for GatedClient {
    async fn ask(&self, _request: &AnswerRequest<'_>) -> Result<AnswerReply, ChatError> {
        self.gate.notified().await;
        Ok(AnswerReply::new("selesai"))
    }
}

fn session() -> ChatSession {
    ChatSession::new(KnowledgeBase::fallback()).with_reveal(RevealSettings::disabled())
}

fn ignore(_: String) {}

#[tokio::test]
async fn blank_input_appends_nothing_and_sends_nothing() {
    let session = session();
    let client = ScriptedClient::default();
    let ctx = SessionContext::new();

    for text in ["", "   ", "\n\t "] {
        let outcome = session.submit(&ctx, &client, text, ignore).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);
    }
    assert_eq!(session.message_count().await, 0);
    assert!(client.sent().is_empty());
}

#[tokio::test]
async fn answer_is_appended_after_user_message() {
    let session = session();
    let client = ScriptedClient::replying([Ok(AnswerReply::new("X"))]);
    let ctx = SessionContext::new();

    let outcome = session
        .submit(&ctx, &client, "  Siapa kepala desa?  ", ignore)
        .await
        .unwrap();

    let messages = session.messages().await;
    assert_eq!(messages.len(), 2);
    assert!(!messages[0].is_bot());
    assert_eq!(messages[0].content(), "Siapa kepala desa?");
    assert!(messages[1].is_bot());
    assert_eq!(messages[1].content(), "X");
    assert_eq!(outcome, SubmitOutcome::Answered { reply: messages[1].clone() });
}

#[tokio::test]
async fn missing_result_appends_fallback() {
    let session = session();
    let client = ScriptedClient::replying([Ok(AnswerReply::default())]);

    let outcome = session
        .submit(&SessionContext::new(), &client, "halo", ignore)
        .await
        .unwrap();
    assert_eq!(outcome.reply().map(|m| m.content()), Some(FALLBACK_REPLY));
}

#[tokio::test]
async fn failure_appends_apology_and_raises_banner() {
    let session = session();
    let client = ScriptedClient::replying([Err(ChatError::Status(404))]);

    let outcome = session
        .submit(&SessionContext::new(), &client, "halo", ignore)
        .await
        .unwrap();

    let (banner, reply) = match outcome {
        SubmitOutcome::Failed { banner, reply } => (banner, reply),
        other => panic!("expected failure, got {other:?}"),
    };
    assert_eq!(banner, ErrorBanner::NotFound);
    assert_eq!(reply.content(), APOLOGY_REPLY);
    assert!(reply.is_bot());
    assert_eq!(session.error_banner().await, Some(ErrorBanner::NotFound));
    assert_eq!(session.message_count().await, 2);
}

#[tokio::test]
async fn each_cycle_appends_exactly_one_pair() {
    let session = session();
    let client = ScriptedClient::replying([
        Ok(AnswerReply::new("satu")),
        Err(ChatError::Network("connection reset".into())),
        Ok(AnswerReply::default()),
        Err(ChatError::Parse("expected value".into())),
    ]);
    let ctx = SessionContext::new();

    for (i, q) in ["a", "b", "c", "d"].into_iter().enumerate() {
        session.submit(&ctx, &client, q, ignore).await.unwrap();
        let messages = session.messages().await;
        assert_eq!(messages.len(), (i + 1) * 2);
        assert!(!messages[i * 2].is_bot());
        assert!(messages[i * 2 + 1].is_bot());
    }

    let ids: Vec<i64> = session
        .messages()
        .await
        .iter()
        .map(|m| m.id().parse().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
}

#[tokio::test]
async fn next_submit_clears_previous_banner() {
    let session = session();
    let client = ScriptedClient::replying([
        Err(ChatError::Network("blocked by CORS policy".into())),
        Ok(AnswerReply::new("ok")),
    ]);
    let ctx = SessionContext::new();

    session.submit(&ctx, &client, "a", ignore).await.unwrap();
    assert_eq!(session.error_banner().await, Some(ErrorBanner::Cors));

    session.submit(&ctx, &client, "b", ignore).await.unwrap();
    assert_eq!(session.error_banner().await, None);
}

#[tokio::test]
async fn dismiss_error_hides_banner() {
    let session = session();
    let client = ScriptedClient::replying([Err(ChatError::Status(500))]);
    session
        .submit(&SessionContext::new(), &client, "a", ignore)
        .await
        .unwrap();
    assert_eq!(session.error_banner().await, Some(ErrorBanner::Generic));

    session.dismiss_error().await;
    assert_eq!(session.error_banner().await, None);
}

#[tokio::test]
async fn prompt_carries_facts_and_context_session_id() {
    let kb = KnowledgeBase::new([("pasar", "pasar buka setiap Minggu legi")]);
    let session = ChatSession::new(kb).with_reveal(RevealSettings::disabled());
    let client = ScriptedClient::default();
    let ctx = SessionContext::with_id(SessionId::from("tab-3".to_string()));

    session.submit(&ctx, &client, "Kapan pasar?", ignore).await.unwrap();

    let sent = client.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].question, "Kapan pasar?");
    assert!(sent[0].prompt.contains("pasar buka setiap Minggu legi"));
    assert!(sent[0].prompt.contains("Kapan pasar?"));
    assert_eq!(sent[0].session_id, "tab-3");
}

#[tokio::test]
async fn draft_is_submitted_and_cleared() {
    let session = session();
    let client = ScriptedClient::replying([Ok(AnswerReply::new("ok"))]);
    let ctx = SessionContext::new();

    session.set_draft("Ada berapa TK?").await;
    session.submit_draft(&ctx, &client, ignore).await.unwrap();

    assert_eq!(session.draft().await, "");
    assert_eq!(client.sent()[0].question, "Ada berapa TK?");
}

#[tokio::test]
async fn draft_is_cleared_after_failure_too() {
    let session = session();
    let client = ScriptedClient::replying([Err(ChatError::Status(502))]);

    session.set_draft("halo").await;
    session
        .submit_draft(&SessionContext::new(), &client, ignore)
        .await
        .unwrap();

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.draft, "");
    assert!(!snapshot.submitting);
    assert_eq!(snapshot.banner, Some(ErrorBanner::Generic));
}

#[tokio::test]
async fn concurrent_submit_is_rejected_while_busy() {
    let session = session();
    let client = GatedClient {
        gate: Notify::new(),
    };
    let ctx = SessionContext::new();

    let (first, second) = tokio::join!(
        session.submit(&ctx, &client, "pertama", ignore),
        async {
            assert!(session.is_submitting());
            let second = session.submit(&ctx, &client, "kedua", ignore).await;
            client.gate.notify_one();
            second
        }
    );

    assert!(matches!(second, Err(ChatError::Busy)));
    assert!(matches!(first, Ok(SubmitOutcome::Answered { .. })));
    assert!(!session.is_submitting());

    let contents: Vec<_> = session
        .messages()
        .await
        .iter()
        .map(|m| m.content().to_string())
        .collect();
    assert_eq!(contents, ["pertama", "selesai"]);
}

#[tokio::test(start_paused = true)]
async fn reveal_streams_before_append() {
    let session = ChatSession::new(KnowledgeBase::fallback())
        .with_reveal(RevealSettings::new(Duration::from_millis(50)));
    let client = ScriptedClient::replying([Ok(AnswerReply::new("Ya."))]);
    let chunks = Mutex::new(Vec::new());
    let start = tokio::time::Instant::now();

    let outcome = session
        .submit(&SessionContext::new(), &client, "Benar?", |c| {
            chunks.lock().unwrap().push(c)
        })
        .await
        .unwrap();

    assert_eq!(start.elapsed(), Duration::from_millis(150));
    assert_eq!(chunks.lock().unwrap().concat(), "Ya.");
    assert_eq!(outcome.reply().map(|m| m.content()), Some("Ya."));
}

#[tokio::test]
async fn apology_is_not_revealed() {
    let session = ChatSession::new(KnowledgeBase::fallback())
        .with_reveal(RevealSettings::new(Duration::ZERO));
    let client = ScriptedClient::replying([Err(ChatError::Status(500))]);
    let chunks = Mutex::new(Vec::<String>::new());

    session
        .submit(&SessionContext::new(), &client, "a", |c| {
            chunks.lock().unwrap().push(c)
        })
        .await
        .unwrap();
    assert!(chunks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn end_to_end_against_mock_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("text", "Di mana Wonokerso?"))
        .and(query_param("sessionId", "tab-9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "result": "Di Kecamatan Pakisaji." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnswerClient::new(AnswerClientConfig::new(server.uri())).unwrap();
    let ctx = SessionContext::with_id(SessionId::from("tab-9".to_string()));
    let session = session();

    let outcome = session
        .submit(&ctx, &client, "Di mana Wonokerso?", ignore)
        .await
        .unwrap();
    assert_eq!(
        outcome.reply().map(|m| m.content()),
        Some("Di Kecamatan Pakisaji.")
    );

    let requests = server.received_requests().await.unwrap();
    let prompt = requests[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "prompt")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert!(prompt.contains("- desa wonokerso adalah desa di pakisaji\n"));
    assert!(prompt.contains("Pertanyaan: \"Di mana Wonokerso?\""));
}

#[tokio::test]
async fn end_to_end_not_found_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpAnswerClient::new(AnswerClientConfig::new(server.uri())).unwrap();
    let session = session();

    session
        .submit(&SessionContext::new(), &client, "halo", ignore)
        .await
        .unwrap();

    let banner = session.error_banner().await.unwrap();
    assert_eq!(
        banner.text(),
        "API endpoint not found. Please check the API configuration."
    );
    let messages = session.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content(), APOLOGY_REPLY);
}

#[tokio::test]
async fn unreachable_endpoint_ignores_question_text_when_classifying() {
    // Nothing listens on the discard port.
    let client = HttpAnswerClient::new(AnswerClientConfig::new("http://127.0.0.1:9/ai")).unwrap();
    let session = session();
    let ctx = SessionContext::with_id(SessionId::from("404-404".to_string()));

    for question in ["Apa itu CORS?", "Kode pos 404 di mana?"] {
        let outcome = session.submit(&ctx, &client, question, ignore).await.unwrap();
        assert!(
            matches!(outcome, SubmitOutcome::Failed { banner: ErrorBanner::Generic, .. }),
            "{question}: {outcome:?}"
        );
        assert_eq!(session.error_banner().await, Some(ErrorBanner::Generic));
    }
}

#[tokio::test(start_paused = true)]
async fn cancelled_submit_releases_flag_and_draft() {
    let session = session();
    let client = GatedClient {
        gate: Notify::new(),
    };

    session.set_draft("Jam buka kantor desa?").await;
    let cancelled = tokio::time::timeout(
        Duration::from_secs(5),
        session.submit_draft(&SessionContext::new(), &client, ignore),
    )
    .await;
    assert!(cancelled.is_err());

    let snapshot = session.snapshot().await;
    assert!(!snapshot.submitting);
    assert_eq!(snapshot.draft, "");
    assert_eq!(snapshot.messages.len(), 1);
    assert!(!snapshot.messages[0].is_bot());
}

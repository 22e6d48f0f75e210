use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tokio::sync::oneshot;

use lyrics_search::config::AppConfig;
use lyrics_search::http::SearchApi;
use lyrics_search::model::{SearchResults, Song, SongId};
use lyrics_search::request::{FetchError, FetchStatus};
use lyrics_search::ui::{app::App, message::AppMessage};

type Outcome = Result<SearchResults, FetchError>;

/// Backend that parks each call until the test hands it a response.
#[derive(Default)]
struct ParkedApi {
    parked: Mutex<Vec<oneshot::Sender<Outcome>>>,
    calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl SearchApi for ParkedApi {
    async fn search(&self, _url: &str, text: &str, words: &str) -> Outcome {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), words.to_string()));
        let (tx, rx) = oneshot::channel();
        self.parked.lock().unwrap().push(tx);
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("dropped".into())))
    }
}

impl ParkedApi {
    fn release(&self, outcome: Outcome) {
        let tx = self.parked.lock().unwrap().remove(0);
        let _ = tx.send(outcome);
    }
}

fn screen(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.update(AppMessage::Input(c));
    }
}

#[tokio::test]
async fn typing_then_submitting_renders_results() {
    let api = Arc::new(ParkedApi::default());
    let mut app = App::with_api(AppConfig::default(), api.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    type_str(&mut app, "love");
    app.update(AppMessage::FocusNext);
    type_str(&mut app, "forever");
    terminal.draw(|f| app.ui(f)).unwrap();

    assert_eq!(app.search.state().status, FetchStatus::Idle);
    tokio::task::yield_now().await;
    assert!(api.calls.lock().unwrap().is_empty());

    app.update(AppMessage::Submit);
    terminal.draw(|f| app.ui(f)).unwrap();
    assert_eq!(app.search.state().status, FetchStatus::Loading);
    assert!(screen(terminal.backend().buffer()).contains("Searching..."));

    // Redrawing with the same committed query must not issue again.
    terminal.draw(|f| app.ui(f)).unwrap();
    tokio::task::yield_now().await;
    assert_eq!(
        *api.calls.lock().unwrap(),
        vec![("love".to_string(), "forever".to_string())]
    );

    api.release(Ok(SearchResults {
        songs: vec![Song {
            id: SongId::Number(1),
            title: "Song A".to_string(),
            artist: "Artist A".to_string(),
            lyrics: "love you forever".to_string(),
        }],
    }));
    app.search.settle_next().await;
    terminal.draw(|f| app.ui(f)).unwrap();

    let text = screen(terminal.backend().buffer());
    assert!(text.contains("Song A - Artist A"), "{text}");
    assert!(text.contains("love you forever"), "{text}");
    assert!(text.contains("forever ×1"), "{text}");
}

#[tokio::test]
async fn failed_search_shows_error_message() {
    let api = Arc::new(ParkedApi::default());
    let mut app = App::with_api(AppConfig::default(), api.clone());
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

    type_str(&mut app, "love");
    app.update(AppMessage::Submit);
    terminal.draw(|f| app.ui(f)).unwrap();
    tokio::task::yield_now().await;

    api.release(Err(FetchError::HttpStatus { status: 500 }));
    app.search.settle_next().await;
    terminal.draw(|f| app.ui(f)).unwrap();

    assert_eq!(app.search.state().status, FetchStatus::Error);
    assert!(screen(terminal.backend().buffer()).contains("HTTP 500"));
}

#[tokio::test]
async fn shutdown_waits_for_a_finishing_search() {
    let api = Arc::new(ParkedApi::default());
    let mut app = App::with_api(AppConfig::default(), api.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    type_str(&mut app, "love");
    app.update(AppMessage::Submit);
    terminal.draw(|f| app.ui(f)).unwrap();
    tokio::task::yield_now().await;

    api.release(Ok(SearchResults::default()));
    app.shutdown().await;

    assert!(!app.search.is_mounted());
    assert_eq!(app.search.in_flight(), 0);
    assert_eq!(app.search.pump(), 0);
    assert_eq!(app.search.state().status, FetchStatus::Loading);
}

#[tokio::test]
async fn shutdown_does_not_hang_on_a_parked_search() {
    let api = Arc::new(ParkedApi::default());
    let mut app = App::with_api(AppConfig::default(), api.clone());
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    type_str(&mut app, "love");
    app.update(AppMessage::Submit);
    terminal.draw(|f| app.ui(f)).unwrap();
    tokio::task::yield_now().await;

    tokio::time::timeout(Duration::from_secs(2), app.shutdown())
        .await
        .expect("shutdown waited on a search that never answers");
    assert!(!app.search.is_mounted());
    assert_eq!(app.search.settle_next().await, None);
}

#[test]
fn quit_and_scroll_messages_update_app() {
    let mut app = App::with_api(AppConfig::default(), Arc::new(ParkedApi::default()));
    app.update(AppMessage::ScrollDown);
    app.update(AppMessage::PageDown);
    assert_eq!(app.scroll, 11);
    app.update(AppMessage::PageUp);
    app.update(AppMessage::PageUp);
    assert_eq!(app.scroll, 0);

    app.update(AppMessage::Quit);
    assert!(app.should_quit);
}

//! Integration tests for the crawler
//!
//! These tests use wiremock to serve artist index and lyrics pages and
//! test the full genre → artist → song cycle end-to-end.

use lyric_harvest::config::{Config, OutputConfig, PolitenessConfig, SourceConfig};
use lyric_harvest::crawler::{Coordinator, PolitenessScheduler};
use lyric_harvest::state::FailureKind;
use lyric_harvest::storage::{CorpusStore, JsonProgressStore, ProgressStore};
use lyric_harvest::{Genre, GenreCatalog};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, corpus_root: &Path) -> Config {
    Config {
        politeness: PolitenessConfig::zero(),
        source: SourceConfig {
            base_url: base_url.to_string(),
            ..SourceConfig::default()
        },
        output: OutputConfig {
            corpus_root: corpus_root.display().to_string(),
        },
        ..Config::default()
    }
}

fn catalog(genre: Genre, artists: &[&str]) -> GenreCatalog {
    GenreCatalog::from_entries(vec![(
        genre,
        artists.iter().map(|a| a.to_string()).collect(),
    )])
}

fn coordinator(config: Config, catalog: GenreCatalog) -> Coordinator {
    Coordinator::new(config, catalog)
        .expect("Failed to build coordinator")
        .with_politeness(PolitenessScheduler::immediate())
}

/// A coordinator that waits the given delays instead of none
fn paced_coordinator(config: Config, catalog: GenreCatalog, delays: PolitenessConfig) -> Coordinator {
    Coordinator::new(config, catalog)
        .expect("Failed to build coordinator")
        .with_politeness(PolitenessScheduler::new(delays))
}

/// An index page with one album holding the given (slug, title) songs
fn index_page(artist_slug: &str, songs: &[(&str, &str)]) -> String {
    let mut html = String::from(
        r#"<html><head><title>Artist</title></head><body><div id="listAlbum">
        <div class="album">album: <b>"Debut"</b> (2020)</div>"#,
    );
    for (slug, title) in songs {
        html.push_str(&format!(
            r#"<div class="listalbum-item"><a href="/lyrics/{}/{}.html">{}</a></div>"#,
            artist_slug, slug, title
        ));
    }
    html.push_str("</div></body></html>");
    html
}

/// A lyrics page in the marker layout
fn lyrics_page(lines: &[&str]) -> String {
    format!(
        r#"<html><body><div class="main-page">
        <div class="ringtone"><a href="/tones">Ringtone</a></div>
        <b>"Song"</b><br>
        <div>
        <!-- licensing notice -->
        {}
        </div>
        <div class="smt">Submit corrections</div>
        </div></body></html>"#,
        lines.join("<br>\n")
    )
}

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_genre_run_with_missing_artist() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    // "Artist A" has no index page; "Artist B" lists three songs
    mount_page(
        &mock_server,
        "/a/artistb.html",
        200,
        index_page("artistb", &[("one", "One"), ("two", "Two"), ("three", "Three")]),
    )
    .await;
    for slug in ["one", "two", "three"] {
        mount_page(
            &mock_server,
            &format!("/lyrics/artistb/{}.html", slug),
            200,
            lyrics_page(&["first line", "second line", "third line"]),
        )
        .await;
    }

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Pop, &["Artist A", "Artist B"]));

    let progress = coordinator
        .scrape_genre(Genre::Pop, 5, 10)
        .await
        .expect("Genre run failed");

    assert_eq!(progress.artists_queued, 2);
    assert_eq!(progress.artists_completed, 2);
    assert_eq!(progress.songs_scraped, 3);
    assert_eq!(progress.errors.len(), 1);
    assert_eq!(progress.errors[0].artist, "Artist A");
    assert_eq!(progress.errors[0].kind, FailureKind::ResolutionFailure);
    assert!(progress.errors[0].song.is_none());

    let corpus = coordinator.corpus();
    for title in ["One", "Two", "Three"] {
        let text = corpus
            .read(Genre::Pop, "Artist B", title)
            .expect("Failed to read entry")
            .expect("Entry missing");
        assert_eq!(text, "first line\nsecond line\nthird line");
    }
    assert!(corpus_dir.path().join("pop/Artist_B/One.txt").is_file());
    assert!(!corpus_dir.path().join("pop/Artist_A").exists());
}

#[tokio::test]
async fn test_song_failures_are_recorded_and_skipped() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/s/singer.html",
        200,
        index_page(
            "singer",
            &[("gone", "Gone"), ("busy", "Busy"), ("blank", "Blank"), ("good", "Good")],
        ),
    )
    .await;
    // "gone" is not mounted at all: wiremock answers 404
    mount_page(&mock_server, "/lyrics/singer/busy.html", 503, String::new()).await;
    mount_page(
        &mock_server,
        "/lyrics/singer/blank.html",
        200,
        "<html><body><p>Nothing to see here</p></body></html>".to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/lyrics/singer/good.html",
        200,
        lyrics_page(&["la la la"]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Rnb, &["Singer"]));

    let progress = coordinator
        .scrape_artist("Singer", Genre::Rnb, 10)
        .await
        .expect("Artist run failed");

    assert_eq!(progress.songs_scraped, 1);
    assert_eq!(progress.artists_completed, 1);

    let failures: Vec<(Option<&str>, FailureKind)> = progress
        .errors
        .iter()
        .map(|e| (e.song.as_deref(), e.kind))
        .collect();
    assert_eq!(
        failures,
        vec![
            (Some("Gone"), FailureKind::FetchFailure),
            (Some("Busy"), FailureKind::FetchFailure),
            (Some("Blank"), FailureKind::ExtractionFailure),
        ]
    );
    assert!(progress.errors[1].reason.contains("503"));

    // Standalone artist runs leave no progress file behind
    let store = JsonProgressStore::new(corpus_dir.path());
    assert!(store.load_progress(Genre::Rnb).unwrap().is_none());
}

#[tokio::test]
async fn test_max_songs_takes_index_prefix() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    let songs: Vec<(String, String)> = (0..6)
        .map(|i| (format!("s{}", i), format!("Song {}", i)))
        .collect();
    let song_refs: Vec<(&str, &str)> = songs
        .iter()
        .map(|(s, t)| (s.as_str(), t.as_str()))
        .collect();
    mount_page(&mock_server, "/p/prolific.html", 200, index_page("prolific", &song_refs)).await;
    for (slug, _) in &songs {
        mount_page(
            &mock_server,
            &format!("/lyrics/prolific/{}.html", slug),
            200,
            lyrics_page(&["verse"]),
        )
        .await;
    }

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Country, &["Prolific"]));

    let progress = coordinator
        .scrape_artist("Prolific", Genre::Country, 2)
        .await
        .expect("Artist run failed");

    assert_eq!(progress.songs_scraped, 2);
    let titles = coordinator
        .corpus()
        .list_titles(Genre::Country, "Prolific")
        .unwrap();
    assert_eq!(titles, vec!["Song 0", "Song 1"]);
}

#[tokio::test]
async fn test_numeric_artist_falls_back_to_prefix_directory() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    // "/2/2chainz.html" is not mounted; the site files digit artists under "19"
    mount_page(
        &mock_server,
        "/19/2chainz.html",
        200,
        index_page("2chainz", &[("birthday", "Birthday Song")]),
    )
    .await;
    mount_page(
        &mock_server,
        "/lyrics/2chainz/birthday.html",
        200,
        lyrics_page(&["line"]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::HipHop, &["2 Chainz"]));

    let progress = coordinator
        .scrape_artist("2 Chainz", Genre::HipHop, 5)
        .await
        .expect("Artist run failed");

    assert_eq!(progress.songs_scraped, 1);
    assert!(progress.errors.is_empty());
    assert!(corpus_dir
        .path()
        .join("hiphop/2_Chainz/Birthday Song.txt")
        .is_file());
}

#[tokio::test]
async fn test_empty_index_is_recorded() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/q/quiet.html",
        200,
        "<html><body><div id=\"listAlbum\"></div></body></html>".to_string(),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Jazz, &["Quiet"]));

    let progress = coordinator
        .scrape_genre(Genre::Jazz, 5, 5)
        .await
        .expect("Genre run failed");

    assert_eq!(progress.artists_completed, 1);
    assert_eq!(progress.songs_scraped, 0);
    assert_eq!(progress.errors.len(), 1);
    assert_eq!(progress.errors[0].kind, FailureKind::EmptyIndex);
}

#[tokio::test]
async fn test_progress_file_is_persisted() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/d/duo.html",
        200,
        index_page("duo", &[("hit", "Hit")]),
    )
    .await;
    mount_page(&mock_server, "/lyrics/duo/hit.html", 200, lyrics_page(&["hey"])).await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Latin, &["Duo", "Nobody"]));

    let progress = coordinator
        .scrape_genre(Genre::Latin, 5, 5)
        .await
        .expect("Genre run failed");

    let progress_path = corpus_dir.path().join("latin/progress.json");
    assert!(progress_path.is_file());

    let raw = std::fs::read_to_string(&progress_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["genre"], "latin");
    assert_eq!(json["artists_queued"], 2);
    assert_eq!(json["artists_completed"], 2);
    assert_eq!(json["songs_scraped"], 1);
    assert_eq!(json["errors"][0]["artist"], "Nobody");
    assert_eq!(json["errors"][0]["kind"], "resolution_failure");

    let store = JsonProgressStore::new(corpus_dir.path());
    assert_eq!(store.load_progress(Genre::Latin).unwrap(), Some(progress));
}

#[tokio::test]
async fn test_unknown_genre_sends_no_requests() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Pop, &["Someone"]));

    let result = coordinator.scrape_genre(Genre::African, 5, 5).await;
    assert!(matches!(
        result,
        Err(lyric_harvest::HarvestError::UnknownGenre(_))
    ));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_rerun_overwrites_existing_entries() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/b/band.html",
        200,
        index_page("band", &[("anthem", "Anthem")]),
    )
    .await;
    mount_page(
        &mock_server,
        "/lyrics/band/anthem.html",
        200,
        lyrics_page(&["fresh words"]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Pop, &["Band"]));

    let stale = corpus_dir.path().join("pop/Band/Anthem.txt");
    std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
    std::fs::write(&stale, "stale words").unwrap();

    let progress = coordinator.scrape_genre(Genre::Pop, 1, 1).await.unwrap();

    assert_eq!(progress.songs_scraped, 1);
    assert_eq!(std::fs::read_to_string(&stale).unwrap(), "fresh words");
}

#[tokio::test]
async fn test_skip_existing_sends_no_lyrics_request() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/b/band.html",
        200,
        index_page("band", &[("anthem", "Anthem"), ("ballad", "Ballad")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/lyrics/band/anthem.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(lyrics_page(&["new"])))
        .expect(0)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/lyrics/band/ballad.html",
        200,
        lyrics_page(&["slow"]),
    )
    .await;

    let mut config = create_test_config(&mock_server.uri(), corpus_dir.path());
    config.crawler.skip_existing = true;
    let coordinator = coordinator(config, catalog(Genre::Pop, &["Band"]));

    coordinator
        .corpus()
        .write(Genre::Pop, "Band", "Anthem", "kept")
        .unwrap();

    let progress = coordinator.scrape_artist("Band", Genre::Pop, 5).await.unwrap();

    assert_eq!(progress.songs_scraped, 1);
    assert_eq!(progress.songs_already_present, 1);
    assert!(progress.errors.is_empty());
    assert_eq!(
        coordinator.corpus().read(Genre::Pop, "Band", "Anthem").unwrap(),
        Some("kept".to_string())
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_scrape_from_explicit_index_url() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(
        &mock_server,
        "/custom/page.html",
        200,
        index_page("stage", &[("encore", "Encore")]),
    )
    .await;
    mount_page(
        &mock_server,
        "/lyrics/stage/encore.html",
        200,
        lyrics_page(&["one more"]),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::African, &["Stage Name"]));

    let index_url = format!("{}/custom/page.html", mock_server.uri());
    let progress = coordinator
        .scrape_artist_url(&index_url, "Stage Name", Genre::African, 5)
        .await
        .unwrap();
    assert_eq!(progress.songs_scraped, 1);
    assert!(corpus_dir
        .path()
        .join("african/Stage_Name/Encore.txt")
        .is_file());

    let missing_url = format!("{}/custom/missing.html", mock_server.uri());
    let progress = coordinator
        .scrape_artist_url(&missing_url, "Stage Name", Genre::African, 5)
        .await
        .unwrap();
    assert_eq!(progress.songs_scraped, 0);
    assert_eq!(progress.errors[0].kind, FailureKind::ResolutionFailure);
}

#[tokio::test]
async fn test_all_genres_writes_overall_progress() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(&mock_server, "/p/popstar.html", 200, index_page("popstar", &[("a", "A")])).await;
    mount_page(&mock_server, "/lyrics/popstar/a.html", 200, lyrics_page(&["pop"])).await;
    mount_page(&mock_server, "/c/cowboy.html", 200, index_page("cowboy", &[("b", "B")])).await;
    mount_page(&mock_server, "/lyrics/cowboy/b.html", 200, lyrics_page(&["yeehaw"])).await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let catalog = GenreCatalog::from_entries(vec![
        (Genre::Pop, vec!["Popstar".to_string()]),
        (Genre::Country, vec!["Cowboy".to_string()]),
    ]);
    let coordinator = coordinator(config, catalog);

    let overall = coordinator.scrape_all_genres(5, 5).await.unwrap();

    assert_eq!(overall.genres.len(), 2);
    assert_eq!(overall.total_songs_scraped(), 2);
    assert!(overall.finished_at.is_some());

    let store = JsonProgressStore::new(corpus_dir.path());
    assert_eq!(store.load_overall().unwrap(), Some(overall));
    assert!(store.load_progress(Genre::Pop).unwrap().is_some());
    assert!(store.load_progress(Genre::Country).unwrap().is_some());
}

#[tokio::test]
async fn test_over_long_title_does_not_stop_the_genre() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    // 100 three-byte characters: longer than most filesystems allow in a name
    let long_title = "歌".repeat(100);
    mount_page(
        &mock_server,
        "/f/first.html",
        200,
        index_page("first", &[("long", long_title.as_str()), ("ok", "Ok")]),
    )
    .await;
    mount_page(&mock_server, "/s/second.html", 200, index_page("second", &[("z", "Z")])).await;
    for page in ["/lyrics/first/long.html", "/lyrics/first/ok.html", "/lyrics/second/z.html"] {
        mount_page(&mock_server, page, 200, lyrics_page(&["words"])).await;
    }

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Pop, &["First", "Second"]));

    let progress = coordinator
        .scrape_genre(Genre::Pop, 5, 5)
        .await
        .expect("Genre run failed");

    assert_eq!(progress.artists_completed, 2);
    assert_eq!(progress.songs_scraped, 3);
    assert!(progress.errors.is_empty());
    assert_eq!(
        coordinator.corpus().read(Genre::Pop, "First", &long_title).unwrap(),
        Some("words".to_string())
    );
    assert!(corpus_dir.path().join("pop/Second/Z.txt").is_file());
}

#[tokio::test]
async fn test_corpus_write_failure_is_recorded_and_skipped() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(&mock_server, "/b/blocked.html", 200, index_page("blocked", &[("a", "A")])).await;
    mount_page(&mock_server, "/lyrics/blocked/a.html", 200, lyrics_page(&["lost"])).await;
    mount_page(&mock_server, "/o/open.html", 200, index_page("open", &[("b", "B")])).await;
    mount_page(&mock_server, "/lyrics/open/b.html", 200, lyrics_page(&["kept"])).await;

    // A plain file where the artist directory should go
    std::fs::create_dir_all(corpus_dir.path().join("pop")).unwrap();
    std::fs::write(corpus_dir.path().join("pop/Blocked"), "not a directory").unwrap();

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let coordinator = coordinator(config, catalog(Genre::Pop, &["Blocked", "Open"]));

    let progress = coordinator
        .scrape_genre(Genre::Pop, 5, 5)
        .await
        .expect("Genre run failed");

    assert_eq!(progress.artists_completed, 2);
    assert_eq!(progress.songs_scraped, 1);
    assert_eq!(progress.errors.len(), 1);
    assert_eq!(progress.errors[0].artist, "Blocked");
    assert_eq!(progress.errors[0].song.as_deref(), Some("A"));
    assert_eq!(progress.errors[0].kind, FailureKind::WriteFailure);
    assert!(corpus_dir.path().join("pop/Open/B.txt").is_file());
}

#[tokio::test]
async fn test_between_artists_wait_is_not_taken_after_last_artist() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    // Neither artist has a page; only the artist gap should cost time
    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let delays = PolitenessConfig {
        between_artists_ms: 150,
        ..PolitenessConfig::zero()
    };
    let coordinator = paced_coordinator(config, catalog(Genre::Jazz, &["One", "Two"]), delays);

    let start = Instant::now();
    let progress = coordinator.scrape_genre(Genre::Jazz, 5, 5).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(progress.artists_completed, 2);
    assert!(elapsed >= Duration::from_millis(150), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(300), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_between_genres_wait_is_not_taken_after_last_genre() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let catalog = GenreCatalog::from_entries(vec![
        (Genre::Pop, vec!["Nobody".to_string()]),
        (Genre::Latin, vec!["Nadie".to_string()]),
    ]);
    let delays = PolitenessConfig {
        between_genres_ms: 150,
        ..PolitenessConfig::zero()
    };
    let coordinator = paced_coordinator(config, catalog, delays);

    let start = Instant::now();
    let overall = coordinator.scrape_all_genres(5, 5).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(overall.genres.len(), 2);
    assert!(elapsed >= Duration::from_millis(150), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(300), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_failed_fetch_waits_before_but_not_after() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(&mock_server, "/f/flaky.html", 200, index_page("flaky", &[("down", "Down")])).await;
    mount_page(&mock_server, "/lyrics/flaky/down.html", 503, String::new()).await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let delays = PolitenessConfig {
        before_song_ms: 100,
        after_song_ms: 400,
        ..PolitenessConfig::zero()
    };
    let coordinator = paced_coordinator(config, catalog(Genre::Rnb, &["Flaky"]), delays);

    let start = Instant::now();
    let progress = coordinator.scrape_artist("Flaky", Genre::Rnb, 5).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(progress.songs_scraped, 0);
    assert_eq!(progress.errors[0].kind, FailureKind::FetchFailure);
    assert!(elapsed >= Duration::from_millis(100), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(400), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_saved_song_waits_after() {
    let mock_server = MockServer::start().await;
    let corpus_dir = TempDir::new().expect("Failed to create temp dir");

    mount_page(&mock_server, "/s/steady.html", 200, index_page("steady", &[("up", "Up")])).await;
    mount_page(&mock_server, "/lyrics/steady/up.html", 200, lyrics_page(&["fine"])).await;

    let config = create_test_config(&mock_server.uri(), corpus_dir.path());
    let delays = PolitenessConfig {
        after_song_ms: 150,
        ..PolitenessConfig::zero()
    };
    let coordinator = paced_coordinator(config, catalog(Genre::Rnb, &["Steady"]), delays);

    let start = Instant::now();
    let progress = coordinator.scrape_artist("Steady", Genre::Rnb, 5).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(progress.songs_scraped, 1);
    assert!(elapsed >= Duration::from_millis(150), "elapsed {:?}", elapsed);
}

//! Skydrift demo binary.
//!
//! Resolves weather for a city (fixture-backed), configures a session
//! from it, then lets a scripted pilot fly a deterministic run and
//! logs what happens. Useful as an end-to-end smoke test of the whole
//! pipeline without a rendering surface.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skydrift::core::units::{AVATAR_X, OBSTACLE_WIDTH};
use skydrift::game::events::GameEventData;
use skydrift::leaderboard::Leaderboard;
use skydrift::weather::{
    FetchOutcome, FixtureGeocoder, FixtureProvider, Theme, WeatherQuery, WeatherService,
};
use skydrift::{
    derive_session_seed, frame, GameSession, InputEvent, SessionPhase, SessionSetup, FRAME_RATE,
    VERSION,
};

/// Cap on demo length; a competent pilot would fly forever.
const MAX_DEMO_FRAMES: u64 = 3600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Skydrift v{}", VERSION);
    info!("Frame rate: {} Hz", FRAME_RATE);

    let city = std::env::args().nth(1).unwrap_or_else(|| "London".to_string());

    // Fixture-backed weather resolution; a live provider slots into the
    // same seams.
    let provider = FixtureProvider::new()
        .with_city("London", FixtureProvider::response("Rain", 11.0, 81.0, 14))
        .with_city("Cairo", FixtureProvider::response("Clear", 31.0, 22.0, 13))
        .with_city("Oslo", FixtureProvider::response("Snow", -4.0, 85.0, 15))
        .with_city("Reykjavik", FixtureProvider::response("Clouds", 6.0, 70.0, 21));
    let mut service = WeatherService::new(provider, FixtureGeocoder::failing());

    service.request(WeatherQuery::City(city.clone()))?;
    let update = match service.next().await {
        Some(FetchOutcome::Ready(update)) => update,
        Some(FetchOutcome::Failed { error, .. }) => {
            return Err(anyhow!("weather setup failed: {error}"));
        }
        None => return Err(anyhow!("weather service shut down")),
    };

    let theme = Theme::classify(&update.observation);
    let difficulty = theme.difficulty();
    info!("Location: {}", update.label);
    info!("{}", update.observation.summary());
    info!(
        "Theme: {} (gap {:.1}, speed {:.1})",
        theme, difficulty.gap_height, difficulty.scroll_speed
    );

    let store_path = std::env::var("SKYDRIFT_SCORES")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("skydrift-scores.json"));
    let mut leaderboard = Leaderboard::load(&store_path)
        .unwrap_or_else(|err| {
            warn!(%err, "score store unreadable, starting empty");
            Leaderboard::new()
        });
    let best = leaderboard.best(&update.label);
    info!("Best score for {}: {}", update.label, best);

    let seed = derive_session_seed(
        &update.label,
        &update.observation.condition,
        update.observation.local_hour,
    );
    let mut session = GameSession::new(SessionSetup {
        theme,
        observation: update.observation,
        location_label: update.label.clone(),
        best_score: best,
        seed,
    });

    info!("=== Starting Demo Run ===");
    session.handle_input(InputEvent::Start);

    for _ in 0..MAX_DEMO_FRAMES {
        autopilot(&mut session);
        let result = frame(&mut session);

        for event in &result.events {
            match &event.data {
                GameEventData::ObstaclePassed { score } => {
                    info!("Frame {}: passed a column, score {}", event.frame, score);
                }
                GameEventData::PowerUpSpawned { kind, .. } => {
                    info!("Frame {}: {:?} power-up spawned", event.frame, kind);
                }
                GameEventData::PowerUpCollected { kind, score } => {
                    info!("Frame {}: collected {:?}, score {}", event.frame, kind, score);
                }
                GameEventData::SessionOver { score, best, new_best } => {
                    info!(
                        "Frame {}: session over, score {} (best {}{})",
                        event.frame,
                        score,
                        best,
                        if *new_best { ", new best!" } else { "" }
                    );
                }
                _ => {}
            }
        }

        if result.session_over {
            break;
        }
    }

    if session.phase == SessionPhase::Running {
        info!("Demo cap reached at frame {}, score {}", session.frame, session.score);
    }

    if leaderboard.record(&update.label, session.score) {
        info!("New best for {}: {}", update.label, session.score);
    }
    leaderboard
        .save(&store_path)
        .with_context(|| format!("saving score store to {}", store_path.display()))?;

    info!("=== Demo Results ===");
    info!("Final score: {}", session.score);
    info!("Frames survived: {}", session.frame);

    Ok(())
}

/// Scripted pilot: flap whenever the avatar sinks below the center of
/// the next gap. Crude, but it clears columns often enough to exercise
/// scoring and power-ups.
fn autopilot(session: &mut GameSession) {
    let target = session
        .obstacles
        .iter()
        .find(|column| column.x + OBSTACLE_WIDTH > AVATAR_X)
        .map(|column| (column.top_height + column.bottom_y) / 2.0);

    if let Some(gap_center) = target {
        if session.avatar.y > gap_center && session.avatar.vertical_velocity > 0.0 {
            session.handle_input(InputEvent::Flap);
        }
    }
}

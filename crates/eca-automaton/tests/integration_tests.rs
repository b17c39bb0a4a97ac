//! Integration tests for eca-automaton: controller, renderer contract and the
//! tokio player, all in-memory.

use std::time::Duration;

use eca_automaton::test_fixtures::{RecordingRenderer, RenderCall};
use eca_automaton::{
    AnimationController, AnimationState, ManualTimer, PlaybackConfig, Player, RuleTable,
    SimulationParams, TickOutcome,
};

// ============================================================================
// Helpers
// ============================================================================

type Controller = AnimationController<RecordingRenderer, ManualTimer>;

fn params(rule: i64, width: i64, steps: i64) -> SimulationParams {
    SimulationParams::new(rule, width, steps).unwrap()
}

fn controller(rule: i64, width: i64, steps: i64) -> Controller {
    AnimationController::new(
        params(rule, width, steps),
        PlaybackConfig::default(),
        RecordingRenderer::new(),
        ManualTimer::new(),
    )
}

/// Fire whatever is armed; `None` when no tick is pending.
fn fire(c: &mut Controller) -> Option<TickOutcome> {
    let ticket = c.timer_mut().fire()?;
    Some(c.on_tick(ticket))
}

// ============================================================================
// Renderer contract
// ============================================================================

#[test]
fn test_construction_prepares_renderer() {
    let c = controller(110, 5, 10);
    assert_eq!(
        c.renderer().calls(),
        &[
            RenderCall::Clear,
            RenderCall::SetExtent {
                width: 25,
                height: 50
            },
            RenderCall::ScrollTo(0.0),
        ]
    );
}

#[test]
fn test_tick_call_sequence() {
    let mut c = controller(110, 5, 10);
    c.renderer_mut().take_calls();
    c.play();
    fire(&mut c);

    assert_eq!(
        c.renderer().calls(),
        &[
            RenderCall::DrawRow {
                row: 0,
                cells: "00100".into(),
                cell_size: 5
            },
            RenderCall::SetExtent {
                width: 25,
                height: 50
            },
            RenderCall::ScrollTo(0.1),
        ]
    );
}

#[test]
fn test_drawn_rows_follow_rule_110() {
    let mut c = controller(110, 9, 4);
    c.play();
    while fire(&mut c).is_some() {}

    let rows = c.renderer().drawn_rows();
    assert_eq!(
        rows,
        vec![
            (0, "000010000".to_string()),
            (1, "000110000".to_string()),
            (2, "001110000".to_string()),
            (3, "011010000".to_string()),
        ]
    );
    assert_eq!(c.renderer().last_scroll(), Some(1.0));
}

#[test]
fn test_scroll_fraction_tracks_progress() {
    let mut c = controller(30, 21, 8);
    c.play();
    let mut fractions = Vec::new();
    while fire(&mut c).is_some() {
        fractions.push(c.renderer().last_scroll().unwrap());
    }
    let expected: Vec<f32> = (1..=8).map(|s| s as f32 / 8.0).collect();
    assert_eq!(fractions, expected);
}

#[test]
fn test_custom_cell_size() {
    let mut c = AnimationController::new(
        params(90, 4, 2),
        PlaybackConfig::default().with_cell_size(3),
        RecordingRenderer::new(),
        ManualTimer::new(),
    );
    assert_eq!(c.extent(), (12, 6));
    c.play();
    fire(&mut c);
    assert!(c.renderer().calls().iter().any(|call| matches!(
        call,
        RenderCall::DrawRow { cell_size: 3, .. }
    )));
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn test_play_through_completion() {
    let steps = 12;
    let mut c = controller(110, 31, steps);
    assert_eq!(c.animation(), AnimationState::Idle);
    assert_eq!(c.play(), AnimationState::Playing);

    let mut playing_ticks = 0;
    while let Some(outcome) = fire(&mut c) {
        match outcome {
            TickOutcome::Advanced { row } => {
                assert_eq!(row, playing_ticks);
                assert_eq!(c.animation(), AnimationState::Playing);
                playing_ticks += 1;
            }
            TickOutcome::Completed => playing_ticks += 1,
            TickOutcome::Stale => panic!("unexpected stale tick"),
        }
    }

    assert_eq!(playing_ticks, steps as usize);
    assert_eq!(c.animation(), AnimationState::Completed);
    assert_eq!(c.state().current_step(), steps as usize);
    assert_eq!(c.renderer().draw_count(), steps as usize);
}

#[test]
fn test_pause_mid_run_stops_drawing_until_play() {
    let mut c = controller(110, 15, 10);
    c.play();
    fire(&mut c);
    fire(&mut c);
    let in_flight = c.pending_tick().unwrap();
    c.pause();

    let draws = c.renderer().draw_count();
    let generation = c.state().current_generation().clone();
    assert_eq!(c.on_tick(in_flight), TickOutcome::Stale);
    assert_eq!(fire(&mut c), None);
    assert_eq!(c.renderer().draw_count(), draws);
    assert_eq!(c.state().current_generation(), &generation);

    c.play();
    assert_eq!(fire(&mut c), Some(TickOutcome::Advanced { row: 2 }));
    assert_eq!(c.renderer().draw_count(), draws + 1);
}

#[test]
fn test_reset_from_every_state() {
    let mut c = controller(110, 15, 3);

    // Idle
    c.reset(30, 5, 3).unwrap();
    assert_eq!(c.animation(), AnimationState::Idle);

    // Playing
    c.play();
    fire(&mut c);
    c.reset(30, 5, 3).unwrap();
    assert_eq!(c.animation(), AnimationState::Idle);
    assert!(c.pending_tick().is_none());

    // Paused
    c.play();
    fire(&mut c);
    c.pause();
    c.reset(30, 5, 3).unwrap();
    assert_eq!(c.animation(), AnimationState::Idle);

    // Completed
    c.play();
    while fire(&mut c).is_some() {}
    assert_eq!(c.animation(), AnimationState::Completed);
    let clears = c.renderer().clear_count();
    c.reset(30, 5, 3).unwrap();
    assert_eq!(c.animation(), AnimationState::Idle);
    assert_eq!(c.state().current_step(), 0);
    assert_eq!(c.state().current_generation().to_string(), "00100");
    assert_eq!(c.renderer().clear_count(), clears + 1);
    assert!(c.renderer().drawn_rows().is_empty());
}

#[test]
fn test_rejected_reset_keeps_previous_run() {
    let mut c = controller(110, 10, 10);
    c.play();
    fire(&mut c);
    let calls_before = c.renderer().calls().len();

    let err = c.reset(300, 10, 10).unwrap_err();
    assert!(err.is_invalid_rule());
    assert!(c.reset(110, 0, 10).unwrap_err().is_invalid_dimension());
    assert!(c.reset(110, 10, -1).unwrap_err().is_invalid_dimension());
    assert!(c
        .reset_from_text("110", "10", "many")
        .unwrap_err()
        .is_invalid_dimension());
    assert!(c.reset(110, 5, i64::MAX).unwrap_err().is_invalid_dimension());
    assert!(c
        .reset_from_text("110", "9223372036854775807", "10")
        .unwrap_err()
        .is_invalid_dimension());

    assert_eq!(c.animation(), AnimationState::Playing);
    assert_eq!(c.state().current_step(), 1);
    assert_eq!(c.params(), params(110, 10, 10));
    assert_eq!(c.renderer().calls().len(), calls_before);
    assert_eq!(fire(&mut c), Some(TickOutcome::Advanced { row: 1 }));
}

#[test]
fn test_even_width_seed_is_right_of_center() {
    let c = controller(110, 6, 1);
    assert_eq!(c.state().current_generation().to_string(), "000100");
}

#[test]
fn test_evolution_matches_core() {
    let table = RuleTable::build(45).unwrap();
    let mut c = controller(45, 17, 5);
    let mut expected = c.state().current_generation().clone();
    c.play();
    while fire(&mut c).is_some() {
        expected = expected.evolve(&table);
        assert_eq!(c.state().current_generation(), &expected);
    }
}

// ============================================================================
// Tokio player
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_player_runs_to_completion() {
    let (player, handle) = Player::new(
        params(110, 21, 10),
        PlaybackConfig::default(),
        RecordingRenderer::new(),
    );
    let player = player.autoplay().exit_on_complete(true);

    let started = tokio::time::Instant::now();
    let controller = player.run().await;
    drop(handle);

    assert_eq!(controller.animation(), AnimationState::Completed);
    assert_eq!(controller.renderer().draw_count(), 10);
    // First tick is immediate, the other nine wait 50ms each.
    assert!(started.elapsed() >= Duration::from_millis(450));
}

#[tokio::test(start_paused = true)]
async fn test_player_pause_freezes_progress() {
    let (player, handle) = Player::new(
        params(110, 21, 100),
        PlaybackConfig::default(),
        RecordingRenderer::new(),
    );
    let task = tokio::spawn(player.run());

    assert_eq!(handle.toggle().await.unwrap(), AnimationState::Playing);
    tokio::time::sleep(Duration::from_millis(175)).await;
    assert_eq!(handle.toggle().await.unwrap(), AnimationState::Paused);

    let paused = handle.status().await.unwrap();
    assert!(paused.step >= 1 && paused.step < 100);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let later = handle.status().await.unwrap();
    assert_eq!(later.step, paused.step);
    assert_eq!(later.animation, AnimationState::Paused);

    handle.shutdown();
    let controller = task.await.unwrap();
    assert_eq!(controller.renderer().draw_count(), paused.step);
}

#[tokio::test(start_paused = true)]
async fn test_player_reset_while_playing() {
    let (player, handle) = Player::new(
        params(110, 21, 100),
        PlaybackConfig::default(),
        RecordingRenderer::new(),
    );
    let task = tokio::spawn(player.run());

    handle.toggle().await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;

    let err = handle.reset(256, 10, 10).await.unwrap_err();
    assert!(err.is_invalid_rule());
    assert_eq!(
        handle.status().await.unwrap().animation,
        AnimationState::Playing
    );

    handle.reset(30, 11, 5).await.unwrap();
    let status = handle.status().await.unwrap();
    assert_eq!(status.animation, AnimationState::Idle);
    assert_eq!((status.rule, status.width, status.step), (30, 11, 0));

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(handle.status().await.unwrap().step, 0);

    handle.shutdown();
    let controller = task.await.unwrap();
    assert!(controller.renderer().drawn_rows().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_handle_reports_closed_player() {
    let (player, handle) = Player::new(
        params(110, 5, 5),
        PlaybackConfig::default(),
        RecordingRenderer::new(),
    );
    handle.shutdown();
    player.run().await;
    assert!(matches!(
        handle.status().await,
        Err(eca_automaton::AutomatonError::PlayerClosed)
    ));
}

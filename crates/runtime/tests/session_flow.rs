//! End-to-end runtime scenarios on a paused tokio clock.
//!
//! Every test uses the built-in field with a single-enemy roster (Enemy 1:
//! 10 HP, 1-3 damage) and an encounter on the very first step, so a battle
//! is two attacks long and fully deterministic apart from damage rolls.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use game_content::ContentFactory;
use game_core::{
    ActionResult, AudioCue, BattleOutcome, BattlePhase, CardinalDirection, GameConfig, Position,
    TileFlags,
};
use runtime::{
    AudioError, AudioSink, Event, GameStateEvent, OracleManager, Runtime, RuntimeConfig, Topic,
};
use tokio::time::sleep;

#[derive(Clone, Default)]
struct RecordingSink {
    cues: Arc<Mutex<Vec<AudioCue>>>,
}

impl RecordingSink {
    fn take(&self) -> Vec<AudioCue> {
        std::mem::take(&mut *self.cues.lock().unwrap())
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, cue: AudioCue) -> Result<(), AudioError> {
        self.cues.lock().unwrap().push(cue);
        Ok(())
    }
}

struct BrokenSink;

impl AudioSink for BrokenSink {
    fn play(&self, cue: AudioCue) -> Result<(), AudioError> {
        Err(AudioError::AssetUnavailable { cue })
    }
}

fn oracles(config: GameConfig) -> OracleManager {
    let mut content = ContentFactory::builtin()
        .load_all()
        .expect("built-in content should load");
    content.config = GameConfig {
        encounter_min_steps: 1,
        encounter_max_steps: 1,
        ..config
    };
    content.enemies.truncate(1);
    OracleManager::from_content(content)
}

async fn start(config: GameConfig, audio: impl AudioSink) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            game_seed: Some(7),
            ..RuntimeConfig::default()
        })
        .oracles(oracles(config))
        .audio(audio)
        .build()
        .await
        .expect("runtime should build")
}

#[tokio::test(start_paused = true)]
async fn battle_runs_to_victory_on_timers() {
    let sink = RecordingSink::default();
    let runtime = start(GameConfig::default().with_herb_drop_percent(100), sink.clone()).await;
    let handle = runtime.handle();

    let outcomes = handle.move_player(CardinalDirection::South).await.unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[1].result, ActionResult::EncounterStarted(_)));

    let outcomes = handle.attack().await.unwrap();
    match &outcomes[0].result {
        ActionResult::Attack(result) => {
            assert_eq!(result.damage, 6);
            assert_eq!(result.enemy_hp, 4);
            assert!(!result.defeated);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    // Counter-attack is due 1000ms after the attack.
    sleep(Duration::from_millis(999)).await;
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.battle.as_ref().unwrap().phase, BattlePhase::EnemyTurn);
    assert_eq!(state.player.hp, 50);

    sleep(Duration::from_millis(1)).await;
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.battle.as_ref().unwrap().phase, BattlePhase::PlayerTurn);
    assert!((47..=49).contains(&state.player.hp));

    let outcomes = handle.attack().await.unwrap();
    assert!(matches!(
        &outcomes[0].result,
        ActionResult::Attack(result) if result.defeated && result.enemy_hp == 0
    ));

    sleep(Duration::from_millis(500)).await;
    let state = handle.query_state().await.unwrap();
    let battle = state.battle.as_ref().unwrap();
    assert_eq!(battle.phase, BattlePhase::ResolvingVictory);
    assert_eq!(battle.outcome, BattleOutcome::Victory);
    assert_eq!(battle.last_message, "Enemy 1 dropped an herb!");
    assert_eq!(state.player.herbs, 1);

    sleep(Duration::from_millis(2000)).await;
    let state = handle.query_state().await.unwrap();
    assert!(state.battle.is_none());
    assert!(state.pending.is_empty());

    assert_eq!(
        sink.take(),
        vec![
            AudioCue::NormalThemeStart,
            AudioCue::NormalThemeStop,
            AudioCue::BattleThemeStart,
            AudioCue::SwordSwing,
            AudioCue::EnemyAttack,
            AudioCue::SwordSwing,
            AudioCue::BattleThemeStop,
            AudioCue::Victory,
            AudioCue::NormalThemeStart,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn refused_actions_change_nothing_and_are_published() {
    let runtime = start(GameConfig::default(), RecordingSink::default()).await;
    let handle = runtime.handle();
    let mut events = handle.subscribe(Topic::GameState);

    // North of the start tile is off the field.
    let outcomes = handle.move_player(CardinalDirection::North).await.unwrap();
    assert!(outcomes.is_empty());

    match events.recv().await.unwrap() {
        Event::GameState(GameStateEvent::ActionRejected { code, .. }) => {
            assert_eq!(code, "MOVE_OUT_OF_BOUNDS");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // No battle yet, so battle commands are ignored too.
    assert!(handle.attack().await.unwrap().is_empty());
    assert!(handle.use_herb().await.unwrap().is_empty());

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.player.position, Position::ORIGIN);
    assert_eq!(state.nonce, 0);
}

#[tokio::test(start_paused = true)]
async fn movement_is_ignored_while_battle_is_active() {
    let runtime = start(GameConfig::default(), RecordingSink::default()).await;
    let handle = runtime.handle();

    handle.move_player(CardinalDirection::East).await.unwrap();
    let before = handle.query_state().await.unwrap();
    assert!(before.is_in_battle());

    assert!(handle.move_player(CardinalDirection::East).await.unwrap().is_empty());
    let after = handle.query_state().await.unwrap();
    assert_eq!(after.player.position, Position::new(1, 0));
    assert_eq!(after.battle, before.battle);
}

#[tokio::test(start_paused = true)]
async fn herb_heals_during_battle_only_when_hurt() {
    let runtime = start(
        GameConfig::default().with_initial_herbs(1),
        RecordingSink::default(),
    )
    .await;
    let handle = runtime.handle();

    handle.move_player(CardinalDirection::South).await.unwrap();

    // Full health: the herb is kept.
    assert!(handle.use_herb().await.unwrap().is_empty());

    handle.attack().await.unwrap();
    tokio::time::advance(Duration::from_millis(1000)).await;
    let hurt = handle.query_state().await.unwrap();
    assert!(hurt.player.hp < 50);

    let outcomes = handle.use_herb().await.unwrap();
    match &outcomes[0].result {
        ActionResult::UseHerb(result) => {
            assert_eq!(result.player_hp, 50);
            assert_eq!(result.herbs_left, 0);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn reset_drops_pending_transitions() {
    let sink = RecordingSink::default();
    let runtime = start(GameConfig::default(), sink.clone()).await;
    let handle = runtime.handle();

    handle.move_player(CardinalDirection::South).await.unwrap();
    handle.attack().await.unwrap();
    sink.take();

    let state = handle.reset(Some(99)).await.unwrap();
    assert_eq!(state.seed, 99);
    assert!(state.battle.is_none());
    assert!(state.pending.is_empty());

    sleep(Duration::from_millis(5000)).await;
    let state = handle.query_state().await.unwrap();
    assert!(state.battle.is_none());
    assert_eq!(state.player.hp, 50);
    assert_eq!(state.player.position, Position::ORIGIN);

    assert_eq!(
        sink.take(),
        vec![AudioCue::BattleThemeStop, AudioCue::NormalThemeStart]
    );
}

#[tokio::test(start_paused = true)]
async fn audio_failures_do_not_stall_the_game() {
    let runtime = start(GameConfig::default(), BrokenSink).await;
    let handle = runtime.handle();
    let mut audio = handle.subscribe(Topic::Audio);

    let outcomes = handle.move_player(CardinalDirection::South).await.unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(handle.query_state().await.unwrap().is_in_battle());

    // Cues are still mirrored on the bus.
    let mut cues = Vec::new();
    while cues.len() < 3 {
        match audio.recv().await.unwrap() {
            Event::Audio(event) => {
                assert_eq!(event.volume, event.cue.volume());
                cues.push(event.cue);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert_eq!(
        cues,
        vec![
            AudioCue::NormalThemeStart,
            AudioCue::NormalThemeStop,
            AudioCue::BattleThemeStart,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn snapshot_carries_field_and_messages() {
    let runtime = start(GameConfig::default(), RecordingSink::default()).await;
    let handle = runtime.handle();

    handle.move_player(CardinalDirection::South).await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();

    assert_eq!(snapshot.field.flags_at(Position::new(3, 2)), TileFlags::TREE);
    assert_eq!(snapshot.field.flags_at(Position::new(5, 13)), TileFlags::WATER);
    assert_eq!(snapshot.field.flags_at(Position::new(5, 17)), TileFlags::GRASS);
    assert_eq!(snapshot.player.position, Position::new(0, 1));
    assert_eq!(
        snapshot.messages.last().map(String::as_str),
        Some("Enemy 1 appeared!")
    );
}

#[tokio::test(start_paused = true)]
async fn resumed_battle_keeps_its_timing() {
    let first = start(GameConfig::default(), RecordingSink::default()).await;
    let handle = first.handle();

    sleep(Duration::from_secs(60)).await;
    handle.move_player(CardinalDirection::South).await.unwrap();
    handle.attack().await.unwrap();
    let saved = handle.query_state().await.unwrap();
    assert_eq!(saved.clock.as_millis(), 60_000);
    drop(handle);
    first.shutdown().await.unwrap();

    let resumed = Runtime::builder()
        .initial_state(saved)
        .oracles(oracles(GameConfig::default()))
        .audio(RecordingSink::default())
        .build()
        .await
        .expect("runtime should resume");
    let handle = resumed.handle();

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.clock.as_millis(), 0);
    assert_eq!(state.pending.next_due().map(|due| due.as_millis()), Some(1000));

    sleep(Duration::from_millis(999)).await;
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.battle.as_ref().unwrap().phase, BattlePhase::EnemyTurn);

    sleep(Duration::from_millis(1)).await;
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.battle.as_ref().unwrap().phase, BattlePhase::PlayerTurn);
    assert!(state.player.hp < 50);
}

#[tokio::test(start_paused = true)]
async fn shutdown_waits_for_worker() {
    let runtime = start(GameConfig::default(), RecordingSink::default()).await;
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn build_requires_oracles() {
    let result = Runtime::builder().build().await;
    assert!(matches!(result, Err(runtime::RuntimeError::MissingOracles)));
}

//! Training lifecycle tests driven on tokio's paused clock.

use std::num::NonZeroU64;
use std::time::Duration;

use game_core::{Expedition, Hero, HeroError, Status};
use runtime::{HeroEvent, Runtime, RuntimeError, TrainingOutcome};
use tokio::time::{Instant, advance, timeout};

async fn start(name: &str) -> Runtime {
    Runtime::builder()
        .hero(Hero::new(name).expect("valid hero name"))
        .build()
        .await
        .expect("runtime should build")
}

fn expedition(name: &str, secs: u64, reward: f64) -> Expedition {
    Expedition::new(name, Duration::from_secs(secs), reward)
}

fn level(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

#[tokio::test(start_paused = true)]
async fn status_stays_training_for_full_duration() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let started = Instant::now();
    let training = hero
        .train(expedition("Tutorial", 10, 10.0))
        .await
        .expect("idle hero accepts training");

    assert_eq!(hero.current_status(), Status::Training);
    assert_eq!(hero.active_expedition_name().as_deref(), Some("Tutorial"));

    advance(Duration::from_millis(9_999)).await;
    assert_eq!(hero.current_status(), Status::Training);
    assert_eq!(hero.level(), level(1));

    let outcome = training.wait().await.expect("training completes");
    assert!(started.elapsed() >= Duration::from_secs(10));

    match outcome {
        TrainingOutcome::Completed(report) => assert_eq!(report.experience_gained, 10.0),
        other => panic!("expected completion, got {other:?}"),
    }

    // 1 + 4 = 5 reaches level 3, 5 left toward 9
    assert_eq!(hero.current_status(), Status::Idle);
    assert_eq!(hero.level(), level(3));
    assert_eq!(hero.experience(), 5.0);
    assert_eq!(hero.active_expedition_name(), None);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn second_training_is_rejected_without_side_effects() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let first = hero.train(expedition("Tutorial", 5, 1.0)).await.unwrap();

    let err = hero
        .train(expedition("Caves", 1, 500.0))
        .await
        .expect_err("busy hero rejects training");
    assert!(matches!(
        err,
        RuntimeError::Hero(HeroError::AlreadyTraining {
            status: Status::Training,
            ..
        })
    ));
    assert_eq!(hero.active_expedition_name().as_deref(), Some("Tutorial"));

    first.wait().await.unwrap();
    assert_eq!(hero.level(), level(2));
    assert_eq!(hero.experience(), 0.0);

    // Idle again, so the next expedition is accepted
    let next = hero.train(expedition("Caves", 1, 4.0)).await.unwrap();
    next.wait().await.unwrap();
    assert_eq!(hero.level(), level(3));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn invalid_reward_is_rejected() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let err = hero
        .train(expedition("Cursed", 1, f64::NAN))
        .await
        .expect_err("non-finite reward is rejected");

    assert!(matches!(
        err,
        RuntimeError::Hero(HeroError::InvalidExperience { .. })
    ));
    assert_eq!(hero.current_status(), Status::Idle);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn cancel_returns_to_idle_without_experience() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let training = hero.train(expedition("Tutorial", 10, 100.0)).await.unwrap();
    advance(Duration::from_secs(3)).await;

    let abandoned = training.cancel().await.expect("in-flight training cancels");
    assert_eq!(abandoned.name(), "Tutorial");
    assert_eq!(hero.current_status(), Status::Idle);
    assert_eq!(hero.level(), level(1));
    assert_eq!(hero.experience(), 0.0);

    // The old deadline must not fire later
    advance(Duration::from_secs(20)).await;
    assert_eq!(hero.level(), level(1));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn cancel_after_completion_reports_finished() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let mut training = hero.train(expedition("Tutorial", 1, 1.0)).await.unwrap();
    let id = training.id();
    assert!(training.try_outcome().unwrap().is_none());

    // Let the worker observe the deadline
    let mut watcher = hero.clone();
    while watcher.changed().await.unwrap().status != Status::Idle {}

    let err = training.cancel().await.expect_err("training already done");
    assert!(matches!(err, RuntimeError::TrainingFinished { training } if training == id));
    assert_eq!(hero.level(), level(2));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn try_outcome_polls_without_blocking() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let mut training = hero.train(expedition("Tutorial", 2, 1.0)).await.unwrap();
    assert!(training.try_outcome().unwrap().is_none());

    let mut watcher = hero.clone();
    while watcher.changed().await.unwrap().status != Status::Idle {}

    let outcome = training.try_outcome().unwrap();
    assert!(matches!(outcome, Some(TrainingOutcome::Completed(_))));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn idle_snapshot_carries_resolved_experience() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();
    let mut watcher = runtime.handle();

    hero.train(expedition("Tutorial", 5, 5.0)).await.unwrap();

    let mut saw_training = false;
    loop {
        let snapshot = watcher.changed().await.unwrap();
        match snapshot.status {
            Status::Training => {
                saw_training = true;
                assert_eq!(snapshot.level, level(1));
                assert_eq!(snapshot.experience, 0.0);
            }
            Status::Idle => {
                // 1 + 4 = 5 lands exactly on level 3
                assert_eq!(snapshot.level, level(3));
                assert_eq!(snapshot.experience, 0.0);
                assert_eq!(snapshot.expedition, None);
                break;
            }
            Status::Sleeping => panic!("hero never sleeps"),
        }
    }
    assert!(saw_training);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn reads_are_stable_between_mutations() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    hero.train(expedition("Tutorial", 60, 3.0)).await.unwrap();

    assert_eq!(hero.snapshot(), hero.snapshot());
    assert_eq!(hero.name(), hero.name());
    assert_eq!(hero.level(), hero.level());
    assert_eq!(hero.experience(), hero.experience());
    assert_eq!(hero.current_status(), hero.current_status());

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn events_follow_training_lifecycle() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();
    let mut events = hero.subscribe();

    let training = hero.train(expedition("Tutorial", 1, 1.0)).await.unwrap();
    let id = training.id();
    training.wait().await.unwrap();

    let started = events.recv().await.unwrap();
    assert_eq!(
        started,
        HeroEvent::TrainingStarted {
            training: id,
            expedition: "Tutorial".into(),
            duration: Duration::from_secs(1),
        }
    );

    let leveled = events.recv().await.unwrap();
    assert_eq!(
        leveled,
        HeroEvent::LeveledUp {
            from: level(1),
            to: level(2),
        }
    );

    match events.recv().await.unwrap() {
        HeroEvent::TrainingCompleted { training, report } => {
            assert_eq!(training, id);
            assert_eq!(report.expedition.name(), "Tutorial");
            assert_eq!(report.level_up.to, level(2));
        }
        other => panic!("expected completion event, got {other:?}"),
    }

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn zero_duration_expedition_completes() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let training = hero.train(expedition("Errand", 0, 0.5)).await.unwrap();
    let outcome = timeout(Duration::from_secs(1), training.wait())
        .await
        .expect("completes promptly")
        .unwrap();

    assert!(matches!(outcome, TrainingOutcome::Completed(_)));
    assert_eq!(hero.current_status(), Status::Idle);
    assert_eq!(hero.experience(), 0.5);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_in_flight_training() {
    let runtime = start("Adventurer X").await;
    let hero = runtime.handle();

    let training = hero.train(expedition("Tutorial", 30, 100.0)).await.unwrap();
    runtime.shutdown().await.expect("shutdown succeeds");

    match training.wait().await.unwrap() {
        TrainingOutcome::Cancelled(expedition) => assert_eq!(expedition.name(), "Tutorial"),
        other => panic!("expected cancellation, got {other:?}"),
    }

    // Reads still answer with the final state
    assert_eq!(hero.current_status(), Status::Idle);
    assert_eq!(hero.level(), level(1));

    let err = hero
        .train(expedition("Late", 1, 1.0))
        .await
        .expect_err("worker is gone");
    assert!(matches!(err, RuntimeError::CommandChannelClosed));
}

#[tokio::test(start_paused = true)]
async fn heroes_train_independently() {
    let first = start("Adventurer X").await;
    let second = start("Tony").await;
    let (a, b) = (first.handle(), second.handle());

    let training = a.train(expedition("Tutorial", 2, 1.0)).await.unwrap();
    assert_eq!(b.current_status(), Status::Idle);

    // The second hero is free to train while the first is away
    let other = b.train(expedition("Caves", 1, 4.0)).await.unwrap();

    training.wait().await.unwrap();
    other.wait().await.unwrap();

    assert_eq!(a.name(), "Adventurer X");
    assert_eq!(a.level(), level(2));
    assert_eq!(b.name(), "Tony");
    // 1 to reach level 2, 3 left toward 4
    assert_eq!(b.level(), level(2));
    assert_eq!(b.experience(), 3.0);

    first.shutdown().await.unwrap();
    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn builder_requires_hero() {
    let err = Runtime::builder().build().await.err().expect("hero is required");
    assert!(matches!(err, RuntimeError::MissingHero));
}

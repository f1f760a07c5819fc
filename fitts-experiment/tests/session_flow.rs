use fitts_core::{Padding, Point, SessionStatus, Viewport};
use fitts_experiment::{ClickOutcome, ExperimentConfig, TrialSequencer};
use fitts_export::{Exporter, FileSink, MemorySink, TimeFormat, read_rows};
use fitts_timing::ManualTimer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);
const PADDING: Padding = Padding::new(30.0, 30.0);

/// Runs a complete session, clicking somewhere inside the target each time
/// and sometimes missing first.
fn run_full_session(seed: u64) -> TrialSequencer<ManualTimer, StdRng> {
    let timer = ManualTimer::new(0);
    let mut seq = TrialSequencer::new(
        ExperimentConfig::default(),
        VIEWPORT,
        timer.clone(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap();
    let mut participant = StdRng::seed_from_u64(seed ^ 0xABCD);

    seq.start("Alice").unwrap();
    let mut last_count = 0;

    while !seq.is_complete() {
        timer.advance_ms(participant.random_range(250..1500));

        if participant.random_bool(0.1) {
            let miss = Point::new(1.0, 1.0);
            assert!(matches!(
                seq.click(miss).unwrap(),
                ClickOutcome::Misclick { .. }
            ));
        }

        let target = *seq.target();
        let size = target.size as f64;
        let at = Point::new(
            target.position.x + participant.random_range(0.0..size),
            target.position.y + participant.random_range(0.0..size),
        );
        let outcome = seq.click(at).unwrap();
        assert!(matches!(
            outcome,
            ClickOutcome::Advanced(_) | ClickOutcome::Completed(_)
        ));

        let (count, limit) = seq.progress();
        assert_eq!(count, last_count + 1);
        assert_eq!(limit, 200);
        if count < 200 {
            assert_eq!(seq.status(), SessionStatus::Running);
        }
        assert!(
            seq.target().fits_within(VIEWPORT, PADDING),
            "target left the padded viewport: {:?}",
            seq.target()
        );
        last_count = count;
    }
    seq
}

#[test]
fn test_full_session_completes_at_200() {
    let seq = run_full_session(2024);
    assert_eq!(seq.status(), SessionStatus::Complete);
    assert_eq!(seq.progress(), (200, 200));

    let trials = seq.session().trials();
    assert_eq!(trials.len(), 200);
    assert_eq!(trials[0].elapsed_ms, 0);
    for (idx, trial) in trials.iter().enumerate() {
        assert_eq!(trial.trial_id, idx);
        assert!([400, 500, 600].contains(&trial.distance));
        assert!([64, 128, 200].contains(&trial.size));
    }
    assert!(trials[1..].iter().all(|t| t.elapsed_ms >= 250));
    assert!(trials.iter().map(|t| t.misclicks).sum::<u32>() > 0);
}

#[test]
fn test_alice_export_has_201_lines() {
    let seq = run_full_session(7);
    let mut sink = MemorySink::new();
    Exporter::default().export(seq.session(), &mut sink).unwrap();

    let (filename, contents) = sink.last().unwrap();
    assert_eq!(filename, "Alice_data.csv");
    assert_eq!(contents.lines().count(), 201);

    let rows = read_rows(contents.as_bytes()).unwrap();
    for (row, trial) in rows.iter().zip(seq.session().trials()) {
        assert_eq!(row.distance, trial.distance);
        assert_eq!(row.size, trial.size);
        assert_eq!(row.direction(), Some(trial.direction));
        assert_eq!(row.elapsed_ms(TimeFormat::Compat).unwrap(), trial.elapsed_ms);
        assert_eq!(row.distance_travelled, trial.distance_travelled);
        assert_eq!(row.misclicks, trial.misclicks);
    }
}

#[test]
fn test_export_to_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let seq = run_full_session(11);
    let mut sink = FileSink::new(temp_dir.path());

    let path = Exporter::new(TimeFormat::Padded)
        .export(seq.session(), &mut sink)
        .unwrap();
    assert!(path.ends_with("Alice_data.csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    let rows = read_rows(content.as_bytes()).unwrap();
    assert_eq!(rows.len(), 200);
    assert!(rows.iter().all(|r| r.time.split('.').nth(1).map(str::len) == Some(3)));
}

#[test]
fn test_same_seed_same_dataset() {
    let a = run_full_session(99);
    let b = run_full_session(99);
    assert_eq!(a.session().trials(), b.session().trials());
}

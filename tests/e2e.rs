use std::num::NonZeroUsize;

use regression::{
    config::TrainingConfig,
    debugger::Warning,
    render,
    training::{TrainerBuilder, TrainingReport},
    RegressionErr,
};

fn run(cfg: &TrainingConfig) -> Result<TrainingReport, RegressionErr> {
    let (mut trainer, state) = TrainerBuilder::new().build(cfg)?;
    trainer.train(state, cfg.epochs)
}

fn with_lr(learning_rate: f32) -> TrainingConfig {
    TrainingConfig {
        learning_rate,
        ..TrainingConfig::default()
    }
}

#[test]
fn stable_learning_rate_converges_to_the_slope() {
    let report = run(&with_lr(0.005)).unwrap();

    assert_eq!(report.epochs.len(), 30);
    for pair in report.epochs.windows(2) {
        assert!(
            pair[1].loss < pair[0].loss,
            "loss went up at epoch {}",
            pair[1].epoch
        );
        assert!(pair[1].weight > pair[0].weight);
    }

    let weight = report.final_weight().unwrap();
    assert!((weight - 2.0).abs() < 1e-2, "weight {weight}");
    assert!(report.final_loss().unwrap() < 1e-3);
    assert!(report
        .epochs
        .iter()
        .all(|r| !r.warnings.contains(&Warning::Divergence)));
}

#[test]
fn faster_stable_rate_lands_on_the_slope() {
    let report = run(&with_lr(0.01)).unwrap();

    let weight = report.final_weight().unwrap();
    assert!((weight - 2.0).abs() < 1e-4, "weight {weight}");
    assert!(report.final_loss().unwrap() < 1e-6);
}

#[test]
fn default_run_oscillates_and_warns_about_divergence() {
    let report = run(&TrainingConfig::default()).unwrap();

    assert_eq!(report.epochs.len(), 30);
    assert!(report
        .epochs
        .iter()
        .all(|r| r.weight.is_finite() && r.loss.is_finite()));

    // |1 - 0.1 * mean(x^2)| = 2.85 > 1, every update overshoots further.
    let first = &report.epochs[0];
    assert!((first.weight - 7.7).abs() < 1e-5);
    assert!(first.warnings.is_empty());

    for (i, r) in report.epochs.iter().enumerate() {
        let diverging = r.warnings.contains(&Warning::Divergence);
        assert_eq!(diverging, i >= 3, "epoch {}", r.epoch);
        assert!(!r.warnings.contains(&Warning::Stagnation));
    }

    assert_eq!(report.warning_count(), 27);
}

#[test]
fn learning_rate_large_enough_to_overflow_is_an_error() {
    let cfg = TrainingConfig {
        learning_rate: 10.0,
        epochs: NonZeroUsize::new(100).unwrap(),
        ..TrainingConfig::default()
    };

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, RegressionErr::NonFinite { .. }));
}

#[test]
fn rendered_default_run_follows_the_line_format() {
    let cfg = TrainingConfig::default();
    let (mut trainer, state) = TrainerBuilder::new().build(&cfg).unwrap();

    let mut out = Vec::new();
    render::start(&mut out).unwrap();
    trainer
        .train_with(state, cfg.epochs, |epoch| Ok(render::epoch(&mut out, epoch)?))
        .unwrap();
    render::finish(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Starting Self-Debugging Machine Learning Model");
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("Epoch 1 | Weight: 7.7000 | Loss: 1250.86"));
    assert_eq!(lines[3], "");
    assert_eq!(*lines.last().unwrap(), "Training completed.");

    let status_lines = lines.iter().filter(|l| l.starts_with("Epoch ")).count();
    let divergence_blocks = text.matches("Loss increasing continuously").count();
    assert_eq!(status_lines, 30);
    assert_eq!(divergence_blocks, 27);
    // banner + blank, 30 status lines + 30 blanks, 27 three line blocks, completion
    assert_eq!(lines.len(), 2 + 60 + 27 * 3 + 1);
}

#[test]
fn custom_dataset_from_json() {
    let cfg = TrainingConfig::from_json(
        r#"{
            "epochs": 200,
            "learning_rate": 0.05,
            "dataset": { "x": [1, 2, 3, 4], "y": [-3, -6, -9, -12] }
        }"#,
    )
    .unwrap();

    let report = run(&cfg).unwrap();

    assert_eq!(report.epochs.len(), 200);
    assert!((report.final_weight().unwrap() + 3.0).abs() < 1e-3);
}

use std::{
    env,
    io::{self, BufWriter, Write},
};

use anyhow::Context;
use log::info;

use regression::{
    config::{TrainingConfig, CONFIG_ENV},
    render,
    training::TrainerBuilder,
};

fn load_config() -> anyhow::Result<TrainingConfig> {
    let path = env::args().nth(1).or_else(|| env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => {
            info!("loading config from {path}");
            TrainingConfig::load(&path).with_context(|| format!("cannot load config '{path}'"))
        }
        None => Ok(TrainingConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = load_config()?;
    info!(
        "training for {} epochs, learning rate {}, {} samples",
        cfg.epochs,
        cfg.learning_rate,
        cfg.dataset.x.len()
    );

    let (mut trainer, state) = TrainerBuilder::new().build(&cfg)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    render::start(&mut out)?;
    let report = trainer
        .train_with(state, cfg.epochs, |epoch| Ok(render::epoch(&mut out, epoch)?))
        .context("training failed")?;
    render::finish(&mut out)?;
    out.flush()?;

    info!(
        "finished with weight {:?} and loss {:?}, {} warnings raised",
        report.final_weight(),
        report.final_loss(),
        report.warning_count()
    );

    Ok(())
}

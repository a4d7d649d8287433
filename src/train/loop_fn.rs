use std::time::Instant;

use log::info;

use crate::data::Dataset;
use crate::error::Result;
use crate::loss::MseLoss;
use crate::network::Network;
use crate::random::RandomSource;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::Trainer;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains for `config.epochs` epochs and returns one [`EpochStats`] per
/// epoch.
///
/// Each epoch optionally shuffles `data` in place with `rng`, then performs
/// one online update per sample in the resulting order. The shuffle draws
/// from the same stream that initialized the network when the caller passes
/// the same source, which keeps whole runs reproducible.
///
/// # Errors
/// Fails before any update if the learning rate is invalid or the samples
/// do not fit the trainer's network.
pub fn train_loop<R>(
    trainer: &mut Trainer,
    data: &mut Dataset,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;
    data.check_shape(trainer.network().shape())?;

    let mut history = Vec::with_capacity(config.epochs);
    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        if config.shuffle {
            data.shuffle(rng);
        }
        for item in data.items() {
            trainer.train(&item.input, &item.target, config.learning_rate)?;
        }

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        let stats = evaluate(trainer.network(), data, epoch, config.epochs, elapsed_ms)?;
        info!(
            "epoch {}/{}: loss {:.6}, accuracy {}/{} ({:.3}%), avg confidence {:.3}%",
            stats.epoch,
            stats.total_epochs,
            stats.train_loss,
            stats.correct,
            stats.total,
            stats.accuracy() * 100.0,
            stats.average_confidence * 100.0,
        );
        history.push(stats);
    }

    Ok(history)
}

/// Measures `network` on every sample of `data` without updating it.
pub fn evaluate(
    network: &Network,
    data: &Dataset,
    epoch: usize,
    total_epochs: usize,
    elapsed_ms: u64,
) -> Result<EpochStats> {
    data.check_shape(network.shape())?;

    let mut hidden = vec![0.0; network.hidden_count()];
    let mut output = vec![0.0; network.output_count()];
    let mut total_loss = 0.0;
    let mut total_confidence = 0.0;
    let mut correct = 0;

    for item in data.items() {
        network.predict_into(&item.input, &mut hidden, &mut output)?;
        total_loss += MseLoss::loss(&output, &item.target);

        let best = argmax(&output);
        total_confidence += output[best];
        if best == argmax(&item.target) {
            correct += 1;
        }
    }

    let n = data.len() as f64;
    Ok(EpochStats {
        epoch,
        total_epochs,
        train_loss: total_loss / n,
        correct,
        total: data.len(),
        average_confidence: total_confidence / n,
        elapsed_ms,
    })
}

/// Index of the maximum element in a slice; the last one wins ties.
/// Returns 0 for an empty slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

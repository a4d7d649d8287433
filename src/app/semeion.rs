use log::info;

use super::SemeionArgs;
use crate::data::semeion::{self, DIGITS, PIXELS};
use crate::data::{DataItem, Dataset};
use crate::error::{NeuralError, Result};
use crate::network::{Network, Shape};
use crate::random::{ParkMiller, RandomSource};
use crate::train::{argmax, train_loop, EpochStats, TrainConfig, Trainer};

/// Index of the sample shown after training.
pub const SHOWCASE_INDEX: usize = 10;

/// Builds a 256-`hidden`-10 network and trains it with per-epoch shuffling.
/// Initialization and shuffles share `rng`.
pub fn train<R>(
    data: &mut Dataset,
    hidden: usize,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<(Network, Vec<EpochStats>)>
where
    R: RandomSource + ?Sized,
{
    let shape = Shape::new(PIXELS, hidden, DIGITS)?;
    let mut trainer = Trainer::new(shape, rng);
    let history = train_loop(&mut trainer, data, config, rng)?;
    Ok((trainer.into_network(), history))
}

pub fn epoch_line(stats: &EpochStats) -> String {
    format!(
        "accuracy: {:.3}% ({}/{}), avg confidence: {:.3}%",
        stats.accuracy() * 100.0,
        stats.correct,
        stats.total,
        stats.average_confidence * 100.0,
    )
}

/// The sample drawn as a picture followed by the network's confidence for
/// each digit, the best one marked.
pub fn prediction_report(network: &Network, item: &DataItem) -> Result<String> {
    let prediction = network.predict(&item.input)?;
    let best = argmax(&prediction);

    let mut out = semeion::render(&item.input);
    out.push('\n');
    out.push_str("Prediction (output from network for the above input):\n");
    for (digit, confidence) in prediction.iter().enumerate() {
        out.push_str(&format!("{digit}: {:>8.3}%", confidence * 100.0));
        if digit == best {
            out.push_str(" <-- best prediction");
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn run(args: &SemeionArgs) -> Result<()> {
    let mut data = semeion::load(&args.path)?;
    info!("loaded {} samples from {}", data.len(), args.path);

    let config = TrainConfig::new(args.epochs, args.learning_rate);
    let mut rng = ParkMiller::new();
    let (network, history) = train(&mut data, args.hidden, &config, &mut rng)?;
    for stats in &history {
        println!("{}", epoch_line(stats));
    }

    let item = data
        .items()
        .get(SHOWCASE_INDEX)
        .or_else(|| data.items().last())
        .ok_or(NeuralError::EmptyDataset)?;
    print!("{}", prediction_report(&network, item)?);
    Ok(())
}

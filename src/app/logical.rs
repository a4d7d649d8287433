use log::info;

use crate::data::logical::{truth_table, Gate};
use crate::data::Dataset;
use crate::error::Result;
use crate::network::{Network, Shape};
use crate::random::{ParkMiller, RandomSource};
use crate::train::Trainer;

pub const ITERATIONS: usize = 4000;
pub const LEARNING_RATE: f64 = 1.0;
pub const HIDDEN: usize = 2;

/// Trains a 2-2-6 network on all six gates, visiting the four rows
/// cyclically for `iterations` single-sample steps.
pub fn train<R>(iterations: usize, rng: &mut R) -> Result<(Network, Dataset)>
where
    R: RandomSource + ?Sized,
{
    let data = truth_table(&Gate::ALL)?;
    let shape = Shape::new(data.input_width(), HIDDEN, data.target_width())?;
    let mut trainer = Trainer::new(shape, rng);

    for item in data.items().iter().cycle().take(iterations) {
        trainer.train(&item.input, &item.target, LEARNING_RATE)?;
    }
    info!("trained {shape} network for {iterations} iterations");

    Ok((trainer.into_network(), data))
}

/// Truth table of the network's predictions, one row per input pair.
pub fn report(network: &Network, data: &Dataset, iterations: usize) -> Result<String> {
    let header: String = Gate::ALL.iter().map(|g| format!("{:>6}", g.name())).collect();
    let mut out = format!("Result after {iterations} iterations\n      {header}\n");

    for item in data.items() {
        let prediction = network.predict(&item.input)?;
        let cells: String = prediction.iter().map(|p| format!("{p:>6.3}")).collect();
        out.push_str(&format!("{:.0},{:.0} = {cells}\n", item.input[0], item.input[1]));
    }
    Ok(out)
}

pub fn run() -> Result<()> {
    let mut rng = ParkMiller::new();
    let (network, data) = train(ITERATIONS, &mut rng)?;
    print!("{}", report(&network, &data, ITERATIONS)?);
    println!("network: {}", network.to_json()?);
    Ok(())
}

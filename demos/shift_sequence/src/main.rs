// Shift Sequence: learning a fixed offset between one-hot sequences
//
// This demo trains a vanilla RNN to map a cyclic one-hot sequence onto the
// same sequence shifted `SHIFT` classes ahead. It is the classic sanity check
// for a recurrent network: the mapping is deterministic, so the loss should
// fall steadily.
//
// Architecture: RNN(input=10, hidden=10, output=10), full BPTT, clipped SGD
//
// This demo shows:
//   1. Building input/target sequences with elman-data
//   2. Configuring a seeded RNN
//   3. Running a fixed number of training steps with the Trainer
//   4. Reading predictions back as classes with argmax

use elman::prelude::*;

const SERIES_LEN: usize = 100; // Time steps per sequence
const DIM: usize = 10; // One-hot classes (input = output dim)
const HIDDEN: usize = 10; // Hidden state size
const SHIFT: usize = 3; // Targets lead inputs by this many classes
const EPOCHS: usize = 100; // Training calls
const ETA: f64 = 1e-3; // Learning rate
const SEED: u64 = 7;

/// The first `limit` classes, comma-separated. Shorter slices print whole.
fn join(classes: &[usize], limit: usize) -> String {
    classes
        .iter()
        .take(limit)
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> elman::Result<()> {
    println!("=== elman: Shift Sequence ===");
    println!();

    // =========================================================================
    // 1. Smoke-check the matrix primitive
    // =========================================================================

    let x = Matrix::from_rows(vec![vec![1.0, 0.0], vec![3.0, 4.0]])?;
    let y = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    println!("x + y =\n{}", x.add(&y)?);
    println!("x - y =\n{}", x.sub(&y)?);
    println!("x * y =\n{}", x.mul(&y)?);
    println!("x @ y =\n{}", x.matmul(&y)?);
    println!("y^T =\n{}", y.transpose());
    println!("argmax(x, 0) = {}", x.argmax(0)?);
    println!("argmax(x, 1) =\n{}", x.argmax(1)?);
    println!();

    // =========================================================================
    // 2. Data: inputs start at class 0, targets at class SHIFT
    // =========================================================================

    let task = ShiftTask::new(SERIES_LEN, DIM, SHIFT)?;
    let train = task.pair(0)?;
    let test = task.pair(5)?;

    println!("Input shape:  {}", train.inputs.shape());
    println!("Target shape: {}", train.targets.shape());
    println!();

    // =========================================================================
    // 3. Model
    // =========================================================================

    let config = RNNConfig::new(SERIES_LEN, DIM, HIDDEN, DIM)
        .init(InitScheme::Uniform { bound: 0.01 })
        .seed(SEED);
    let mut rnn = RNN::from_config(config)?;

    println!(
        "Architecture: RNN({}→{}→{}), clip [{}, {}]",
        DIM,
        HIDDEN,
        DIM,
        rnn.config().clip.low(),
        rnn.config().clip.high()
    );
    println!("  Total: {} parameters", rnn.num_parameters());
    println!();

    // =========================================================================
    // 4. Training
    // =========================================================================

    println!("Training for {} epochs...", EPOCHS);
    println!("{:>5}  {:>12}", "Epoch", "Loss");
    println!("{:>5}  {:>12}", "-----", "----");

    let trainer = Trainer::new(
        TrainConfig::default()
            .epochs(EPOCHS)
            .eta(ETA)
            .log_every(10),
    );
    let result = trainer.fit_with(&mut rnn, &train.inputs, &train.targets, |log| {
        println!("{:>5}  {:>12.6}", log.epoch + 1, log.loss);
    })?;

    println!();
    println!("{}", result);
    println!();

    // =========================================================================
    // 5. Prediction on a sequence starting elsewhere in the cycle
    // =========================================================================

    let outputs = rnn.predict(&test.inputs)?;
    let inputs = argmax_classes(&test.inputs)?;
    let predicted = argmax_classes(&outputs)?;
    let show = inputs.len().min(20);

    println!("Predicting (first {} steps):", show);
    println!("  input:     {}", join(&inputs, show));
    println!("  predicted: {}", join(&predicted, show));
    println!(
        "  accuracy:  {:.1}%",
        100.0 * sequence_accuracy(&outputs, &test.targets)?
    );

    Ok(())
}

// Recurrent Neural Network: single-layer vanilla (Elman) tanh RNN
//
// The network maps an input sequence to an output sequence of the same
// length through one recurrent hidden layer:
//
//   h_{t+1} = tanh(x_t @ W_ih + h_t @ W_hh + b_h)
//   out_t   = h_{t+1} @ W_ho + b_o
//
// with h_0 the caller's initial state (zeros by default). Training runs full
// backpropagation through time over the whole sequence, clips every gradient
// elementwise, and applies one plain SGD step.
//
// SHAPES (time-major, one sequence per call):
//   inputs:   [series_len, input_dim]
//   targets:  [series_len, output_dim]
//   states:   [series_len + 1, hidden_dim]   (row 0 = h_0)
//   outputs:  [series_len, output_dim]
//   W_ih [input_dim, hidden_dim]   W_hh [hidden_dim, hidden_dim]   b_h [1, hidden_dim]
//   W_ho [hidden_dim, output_dim]  b_o  [1, output_dim]
//
// Every public entry point validates shapes before touching parameters, so a
// failed call leaves the network exactly as it was.

use rand::rngs::StdRng;
use rand::SeedableRng;

use elman_core::error::{Error, Result};
use elman_core::shape::Shape;
use elman_core::Matrix;

use crate::init::{self, InitScheme};
use crate::loss::sequence_mse_loss;
use crate::optim::{GradClip, Sgd};

/// Learning rate used when the caller has no preference.
pub const DEFAULT_ETA: f64 = 0.3;

// Configuration

/// Fixed hyperparameters of an [`RNN`].
///
/// ```
/// use elman_nn::{GradClip, RNNConfig};
///
/// let config = RNNConfig::new(10, 10, 16, 10)
///     .clip(GradClip::symmetric(2.0)?)
///     .seed(42);
/// assert!(config.validate().is_ok());
/// # Ok::<(), elman_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RNNConfig {
    /// Required number of time steps in every `train` / `predict` call.
    pub series_len: usize,
    pub input_dim: usize,
    pub hidden_dim: usize,
    pub output_dim: usize,
    /// Weight initializer (biases always start at zero).
    pub init: InitScheme,
    /// Elementwise gradient clip applied before each update.
    pub clip: GradClip,
    /// Seed for the network's own generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl RNNConfig {
    pub fn new(series_len: usize, input_dim: usize, hidden_dim: usize, output_dim: usize) -> Self {
        RNNConfig {
            series_len,
            input_dim,
            hidden_dim,
            output_dim,
            init: InitScheme::default(),
            clip: GradClip::default(),
            seed: None,
        }
    }

    pub fn init(mut self, init: InitScheme) -> Self {
        self.init = init;
        self
    }

    pub fn clip(mut self, clip: GradClip) -> Self {
        self.clip = clip;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// All four dimensions must be positive and the initializer sane.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("series_len", self.series_len),
            ("input_dim", self.input_dim),
            ("hidden_dim", self.hidden_dim),
            ("output_dim", self.output_dim),
        ] {
            if v == 0 {
                elman_core::bail!("{} must be positive", name);
            }
        }
        self.init.validate()
    }
}

// Parameters

/// The five parameter matrices of the network.
///
/// The same layout holds the gradients produced by [`RNN::backward`], so a
/// gradient entry always has the shape of the parameter it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct RNNParams {
    pub w_ih: Matrix, // [input_dim, hidden_dim]
    pub w_hh: Matrix, // [hidden_dim, hidden_dim]
    pub b_h: Matrix,  // [1, hidden_dim]
    pub w_ho: Matrix, // [hidden_dim, output_dim]
    pub b_o: Matrix,  // [1, output_dim]
}

/// Gradients of the loss with respect to each parameter.
pub type Gradients = RNNParams;

impl RNNParams {
    /// All-zero matrices with the shapes `config` implies.
    pub fn zeros(config: &RNNConfig) -> Self {
        let (i, h, o) = (config.input_dim, config.hidden_dim, config.output_dim);
        RNNParams {
            w_ih: init::zeros((i, h)),
            w_hh: init::zeros((h, h)),
            b_h: init::zeros((1, h)),
            w_ho: init::zeros((h, o)),
            b_o: init::zeros((1, o)),
        }
    }

    /// Freshly drawn weights and zero biases.
    fn initialize(config: &RNNConfig, rng: &mut StdRng) -> Result<Self> {
        let (i, h, o) = (config.input_dim, config.hidden_dim, config.output_dim);
        Ok(RNNParams {
            w_ih: config.init.weight((i, h), rng)?,
            w_hh: config.init.weight((h, h), rng)?,
            b_h: init::zeros((1, h)),
            w_ho: config.init.weight((h, o), rng)?,
            b_o: init::zeros((1, o)),
        })
    }

    /// `(name, matrix)` pairs in a stable order.
    pub fn named(&self) -> [(&'static str, &Matrix); 5] {
        [
            ("w_ih", &self.w_ih),
            ("w_hh", &self.w_hh),
            ("b_h", &self.b_h),
            ("w_ho", &self.w_ho),
            ("b_o", &self.b_o),
        ]
    }

    /// Every entry clamped into the clip range.
    pub fn clipped(&self, clip: &GradClip) -> Result<Self> {
        Ok(RNNParams {
            w_ih: clip.apply(&self.w_ih)?,
            w_hh: clip.apply(&self.w_hh)?,
            b_h: clip.apply(&self.b_h)?,
            w_ho: clip.apply(&self.w_ho)?,
            b_o: clip.apply(&self.b_o)?,
        })
    }

    /// Total number of scalar parameters.
    pub fn elem_count(&self) -> usize {
        self.named()
            .iter()
            .map(|(_, m)| m.shape().elem_count())
            .sum()
    }
}

// Forward pass types

/// Whether a forward pass also scores its outputs.
#[derive(Debug, Clone, Copy)]
pub enum ForwardMode<'a> {
    /// Outputs only; no loss.
    Inference,
    /// Outputs plus summed per-step MSE against `targets`.
    Training { targets: &'a Matrix },
}

/// Everything a forward pass produces.
///
/// `states` keeps every hidden state, including the initial one, because
/// the backward pass needs all of them.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    /// `[series_len + 1, hidden_dim]`, row 0 is the initial state.
    pub states: Matrix,
    /// `[series_len, output_dim]`.
    pub outputs: Matrix,
    /// Present only for [`ForwardMode::Training`].
    pub loss: Option<f64>,
}

// RNN

/// A single-layer vanilla RNN trained with full BPTT and clipped SGD.
///
/// The network owns its random generator; [`RNN::reset`] draws from it, so a
/// seeded network is reproducible end to end.
///
/// ```
/// use elman_core::Matrix;
/// use elman_nn::{RNNConfig, RNN};
///
/// let mut rnn = RNN::from_config(RNNConfig::new(4, 2, 3, 2).seed(7))?;
/// let inputs = Matrix::ones((4, 2));
/// let targets = Matrix::zeros((4, 2));
/// let loss = rnn.train(&inputs, &targets, 0.1, None)?;
/// assert!(loss >= 0.0);
/// assert_eq!(rnn.predict(&inputs)?.shape(), elman_core::Shape::new(4, 2));
/// # Ok::<(), elman_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RNN {
    config: RNNConfig,
    params: RNNParams,
    rng: StdRng,
}

impl RNN {
    /// A network with default initialization and clipping, seeded from entropy.
    pub fn new(
        series_len: usize,
        input_dim: usize,
        hidden_dim: usize,
        output_dim: usize,
    ) -> Result<Self> {
        Self::from_config(RNNConfig::new(
            series_len, input_dim, hidden_dim, output_dim,
        ))
    }

    /// A network built from a full configuration.
    pub fn from_config(config: RNNConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let params = RNNParams::initialize(&config, &mut rng)?;
        Ok(RNN {
            config,
            params,
            rng,
        })
    }

    /// Re-draw every parameter with the construction-time initializer.
    pub fn reset(&mut self) -> Result<()> {
        self.params = RNNParams::initialize(&self.config, &mut self.rng)?;
        Ok(())
    }

    // Accessors

    pub fn config(&self) -> &RNNConfig {
        &self.config
    }

    pub fn series_len(&self) -> usize {
        self.config.series_len
    }

    pub fn input_dim(&self) -> usize {
        self.config.input_dim
    }

    pub fn hidden_dim(&self) -> usize {
        self.config.hidden_dim
    }

    pub fn output_dim(&self) -> usize {
        self.config.output_dim
    }

    /// Current parameter values.
    pub fn params(&self) -> &RNNParams {
        &self.params
    }

    /// `(name, matrix)` pairs for every trainable parameter.
    pub fn named_parameters(&self) -> [(&'static str, &Matrix); 5] {
        self.params.named()
    }

    pub fn num_parameters(&self) -> usize {
        self.params.elem_count()
    }

    // Validation

    fn expect_shape(what: &'static str, m: &Matrix, expected: Shape) -> Result<()> {
        if m.shape() != expected {
            return Err(Error::InputMismatch {
                what,
                expected,
                got: m.shape(),
            });
        }
        Ok(())
    }

    fn check_inputs(&self, inputs: &Matrix) -> Result<()> {
        let c = &self.config;
        Self::expect_shape("inputs", inputs, Shape::new(c.series_len, c.input_dim))
    }

    fn check_targets(&self, targets: &Matrix) -> Result<()> {
        let c = &self.config;
        Self::expect_shape("targets", targets, Shape::new(c.series_len, c.output_dim))
    }

    fn check_prev_state(&self, prev_state: &Matrix) -> Result<()> {
        Self::expect_shape(
            "prev_state",
            prev_state,
            Shape::new(1, self.config.hidden_dim),
        )
    }

    // Forward

    /// Run the recurrence over `inputs`, keeping every hidden state.
    ///
    /// `prev_state` defaults to zeros. In [`ForwardMode::Training`] the
    /// returned `loss` is the per-step MSE summed over the series. Never
    /// modifies parameters.
    pub fn feedforward(
        &self,
        inputs: &Matrix,
        mode: ForwardMode<'_>,
        prev_state: Option<&Matrix>,
    ) -> Result<ForwardPass> {
        self.check_inputs(inputs)?;
        if let ForwardMode::Training { targets } = mode {
            self.check_targets(targets)?;
        }
        let h0 = match prev_state {
            Some(h) => {
                self.check_prev_state(h)?;
                h.clone()
            }
            None => Matrix::zeros((1, self.config.hidden_dim)),
        };

        let p = &self.params;
        let n = self.config.series_len;
        let mut states = Matrix::zeros((n + 1, self.config.hidden_dim));
        let mut outputs = Matrix::zeros((n, self.config.output_dim));
        states.set_row(0, &h0)?;

        let mut h = h0;
        for t in 0..n {
            h = inputs
                .row(t)?
                .matmul(&p.w_ih)?
                .add(&h.matmul(&p.w_hh)?)?
                .add(&p.b_h)?
                .tanh();
            states.set_row(t + 1, &h)?;

            let out = h.matmul(&p.w_ho)?.add(&p.b_o)?;
            outputs.set_row(t, &out)?;
        }

        let loss = match mode {
            ForwardMode::Training { targets } => Some(sequence_mse_loss(&outputs, targets)?),
            ForwardMode::Inference => None,
        };

        Ok(ForwardPass {
            states,
            outputs,
            loss,
        })
    }

    // Backward

    /// Backpropagate through time over the full sequence.
    ///
    /// Returns the unclipped gradients accumulated from the last step down
    /// to the first. `pass` must come from [`RNN::feedforward`] on the same
    /// `inputs` with the current parameters.
    pub fn backward(&self, inputs: &Matrix, targets: &Matrix, pass: &ForwardPass) -> Result<Gradients> {
        let c = &self.config;
        self.check_inputs(inputs)?;
        self.check_targets(targets)?;
        Self::expect_shape(
            "states",
            &pass.states,
            Shape::new(c.series_len + 1, c.hidden_dim),
        )?;
        Self::expect_shape(
            "outputs",
            &pass.outputs,
            Shape::new(c.series_len, c.output_dim),
        )?;

        let p = &self.params;
        let w_ho_t = p.w_ho.transpose();
        let w_hh_t = p.w_hh.transpose();

        let mut grads = RNNParams::zeros(c);
        let mut dh_next = Matrix::zeros((1, c.hidden_dim));
        let d_outputs = pass.outputs.sub(targets)?;

        // Strictly last step to first: dh_next carries step t+1 into step t.
        for t in (0..c.series_len).rev() {
            let d_out = d_outputs.row(t)?; // [1, output_dim]
            let h_curr = pass.states.row(t + 1)?; // h_{t+1}
            let h_prev = pass.states.row(t)?; // h_t

            grads.w_ho.add_inplace(&h_curr.transpose().matmul(&d_out)?)?;
            grads.b_o.add_inplace(&d_out)?;

            let dh = d_out.matmul(&w_ho_t)?.add(&dh_next)?; // [1, hidden_dim]
            let dh_raw = h_curr.tanh_derivative().mul(&dh)?;

            grads.b_h.add_inplace(&dh_raw)?;
            grads.w_hh.add_inplace(&h_prev.transpose().matmul(&dh_raw)?)?;
            grads
                .w_ih
                .add_inplace(&inputs.row(t)?.transpose().matmul(&dh_raw)?)?;

            dh_next = dh_raw.matmul(&w_hh_t)?;
        }

        Ok(grads)
    }

    // Training

    /// One training step: forward, BPTT, clip, SGD update.
    ///
    /// Returns the loss of the parameters as they were before the update.
    /// `eta` must be finite and non-negative ([`DEFAULT_ETA`] is the usual
    /// choice; zero only scores). `prev_state` defaults to zeros. On any
    /// error the parameters are left untouched.
    pub fn train(
        &mut self,
        inputs: &Matrix,
        targets: &Matrix,
        eta: f64,
        prev_state: Option<&Matrix>,
    ) -> Result<f64> {
        let sgd = Sgd::new(eta)?;
        let pass = self.feedforward(inputs, ForwardMode::Training { targets }, prev_state)?;
        let loss = pass.loss.unwrap_or_default();
        let grads = self.backward(inputs, targets, &pass)?.clipped(&self.config.clip)?;

        // Gradients share the parameter shapes, so no step below can fail
        // after an earlier one has landed.
        let p = &mut self.params;
        sgd.step(&mut p.w_ih, &grads.w_ih)?;
        sgd.step(&mut p.w_hh, &grads.w_hh)?;
        sgd.step(&mut p.b_h, &grads.b_h)?;
        sgd.step(&mut p.w_ho, &grads.w_ho)?;
        sgd.step(&mut p.b_o, &grads.b_o)?;

        Ok(loss)
    }

    // Inference

    /// Output sequence for `inputs`, starting from a zero hidden state.
    pub fn predict(&self, inputs: &Matrix) -> Result<Matrix> {
        self.predict_from(inputs, None)
    }

    /// Output sequence for `inputs`, starting from `prev_state`.
    pub fn predict_from(&self, inputs: &Matrix, prev_state: Option<&Matrix>) -> Result<Matrix> {
        Ok(self
            .feedforward(inputs, ForwardMode::Inference, prev_state)?
            .outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_matrix(rng: &mut StdRng, shape: (usize, usize)) -> Matrix {
        Matrix::random(shape, -1.0, 1.0, rng).unwrap()
    }

    fn param_mut(rnn: &mut RNN, idx: usize) -> &mut Matrix {
        let p = &mut rnn.params;
        match idx {
            0 => &mut p.w_ih,
            1 => &mut p.w_hh,
            2 => &mut p.b_h,
            3 => &mut p.w_ho,
            _ => &mut p.b_o,
        }
    }

    #[test]
    fn test_config_rejects_zero_dims() {
        assert!(RNN::new(0, 1, 1, 1).is_err());
        assert!(RNN::new(1, 0, 1, 1).is_err());
        assert!(RNN::new(1, 1, 0, 1).is_err());
        assert!(matches!(
            RNN::new(1, 1, 1, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parameter_shapes() {
        let rnn = RNN::new(5, 3, 4, 2).unwrap();
        let shapes: Vec<_> = rnn
            .named_parameters()
            .iter()
            .map(|(name, m)| (*name, m.shape()))
            .collect();
        assert_eq!(
            shapes,
            vec![
                ("w_ih", Shape::new(3, 4)),
                ("w_hh", Shape::new(4, 4)),
                ("b_h", Shape::new(1, 4)),
                ("w_ho", Shape::new(4, 2)),
                ("b_o", Shape::new(1, 2)),
            ]
        );
        assert_eq!(rnn.num_parameters(), 12 + 16 + 4 + 8 + 2);
    }

    #[test]
    fn test_initial_weights_small_and_biases_zero() {
        let rnn = RNN::from_config(RNNConfig::new(2, 6, 6, 6).seed(0)).unwrap();
        let p = rnn.params();
        for w in [&p.w_ih, &p.w_hh, &p.w_ho] {
            assert!(w.as_slice().iter().all(|x| x.abs() <= 0.1));
        }
        assert!(p.b_h.as_slice().iter().all(|&x| x == 0.0));
        assert!(p.b_o.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_reset_redraws_weights() {
        let mut rnn = RNN::from_config(RNNConfig::new(2, 3, 3, 3).seed(11)).unwrap();
        let before = rnn.params().clone();
        rnn.reset().unwrap();
        assert_ne!(&before.w_ih, &rnn.params().w_ih);
        assert_eq!(rnn.params().b_h, Matrix::zeros((1, 3)));
    }

    #[test]
    fn test_feedforward_recurrence_by_hand() {
        // 1-d everything: h1 = tanh(x0*a + h0*b + c), out0 = h1*d + e
        let mut rnn = RNN::from_config(RNNConfig::new(2, 1, 1, 1).seed(0)).unwrap();
        rnn.params = RNNParams {
            w_ih: Matrix::full((1, 1), 0.5),
            w_hh: Matrix::full((1, 1), -0.3),
            b_h: Matrix::full((1, 1), 0.1),
            w_ho: Matrix::full((1, 1), 2.0),
            b_o: Matrix::full((1, 1), -1.0),
        };
        let inputs = Matrix::from_vec((2, 1), vec![1.0, -2.0]).unwrap();
        let h0 = Matrix::full((1, 1), 0.25);
        let pass = rnn
            .feedforward(&inputs, ForwardMode::Inference, Some(&h0))
            .unwrap();

        let h1 = (0.5 * 1.0 + -0.3 * 0.25 + 0.1_f64).tanh();
        let h2 = (0.5 * -2.0 + -0.3 * h1 + 0.1_f64).tanh();
        let expected_states = Matrix::from_vec((3, 1), vec![0.25, h1, h2]).unwrap();
        let expected_out = Matrix::from_vec((2, 1), vec![2.0 * h1 - 1.0, 2.0 * h2 - 1.0]).unwrap();
        assert!(pass.states.approx_eq(&expected_states, 1e-12));
        assert!(pass.outputs.approx_eq(&expected_out, 1e-12));
        assert!(pass.loss.is_none());
    }

    #[test]
    fn test_training_mode_reports_summed_mse() {
        let rnn = RNN::from_config(RNNConfig::new(3, 2, 4, 2).seed(5)).unwrap();
        let inputs = Matrix::ones((3, 2));
        let targets = Matrix::from_vec((3, 2), vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
        let pass = rnn
            .feedforward(&inputs, ForwardMode::Training { targets: &targets }, None)
            .unwrap();
        let expected = sequence_mse_loss(&pass.outputs, &targets).unwrap();
        assert_eq!(pass.loss, Some(expected));
    }

    #[test]
    fn test_backward_matches_finite_differences() {
        let mut rng = StdRng::seed_from_u64(99);
        let config = RNNConfig::new(4, 3, 5, 2)
            .init(InitScheme::Uniform { bound: 0.5 })
            .seed(rng.gen());
        let mut rnn = RNN::from_config(config).unwrap();
        let inputs = random_matrix(&mut rng, (4, 3));
        let targets = random_matrix(&mut rng, (4, 2));
        let h0 = random_matrix(&mut rng, (1, 5));

        let loss_at = |rnn: &RNN| {
            rnn.feedforward(&inputs, ForwardMode::Training { targets: &targets }, Some(&h0))
                .unwrap()
                .loss
                .unwrap()
        };

        let pass = rnn
            .feedforward(&inputs, ForwardMode::Training { targets: &targets }, Some(&h0))
            .unwrap();
        let grads = rnn.backward(&inputs, &targets, &pass).unwrap();
        let analytic: Vec<Matrix> = grads.named().iter().map(|(_, m)| (*m).clone()).collect();

        // The backward seed out - target is d/d(out) of half the sum of
        // squares, which is (output_dim / 2) times the summed per-step MSE.
        let scale = rnn.output_dim() as f64 / 2.0;
        let eps = 1e-5;
        for (idx, grad) in analytic.iter().enumerate() {
            let (rows, cols): (usize, usize) = grad.shape().into();
            for r in 0..rows {
                for c in 0..cols {
                    let orig = param_mut(&mut rnn, idx).get(r, c).unwrap();
                    param_mut(&mut rnn, idx).set(r, c, orig + eps).unwrap();
                    let plus = loss_at(&rnn);
                    param_mut(&mut rnn, idx).set(r, c, orig - eps).unwrap();
                    let minus = loss_at(&rnn);
                    param_mut(&mut rnn, idx).set(r, c, orig).unwrap();

                    let numeric = scale * (plus - minus) / (2.0 * eps);
                    let got = grad.get(r, c).unwrap();
                    assert!(
                        (got - numeric).abs() < 1e-6,
                        "param {} [{}, {}]: analytic {} vs numeric {}",
                        idx,
                        r,
                        c,
                        got,
                        numeric
                    );
                }
            }
        }
    }

    #[test]
    fn test_gradients_clipped_into_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let rnn = RNN::from_config(RNNConfig::new(6, 3, 4, 3).seed(3)).unwrap();
        let inputs = random_matrix(&mut rng, (6, 3));
        let targets = Matrix::full((6, 3), 50.0);
        let pass = rnn
            .feedforward(&inputs, ForwardMode::Training { targets: &targets }, None)
            .unwrap();
        let grads = rnn.backward(&inputs, &targets, &pass).unwrap();
        assert!(grads
            .named()
            .iter()
            .any(|(_, g)| g.as_slice().iter().any(|x| x.abs() > 2.0)));

        let clip = GradClip::symmetric(2.0).unwrap();
        let clipped = grads.clipped(&clip).unwrap();
        for (name, g) in clipped.named() {
            assert!(
                g.as_slice().iter().all(|&x| (-2.0..=2.0).contains(&x)),
                "{} escaped the clip range",
                name
            );
        }
    }

    #[test]
    fn test_train_applies_clipped_gradients() {
        let mut rng = StdRng::seed_from_u64(4);
        let clip = GradClip::symmetric(1.0).unwrap();
        let mut rnn = RNN::from_config(RNNConfig::new(5, 3, 4, 3).clip(clip).seed(4)).unwrap();
        let inputs = random_matrix(&mut rng, (5, 3));
        let targets = Matrix::full((5, 3), 20.0);
        let pass = rnn
            .feedforward(&inputs, ForwardMode::Training { targets: &targets }, None)
            .unwrap();
        let expected = rnn
            .backward(&inputs, &targets, &pass)
            .unwrap()
            .clipped(&clip)
            .unwrap();
        let before = rnn.params().clone();

        let eta = 0.25;
        rnn.train(&inputs, &targets, eta, None).unwrap();
        for ((name, b), ((_, a), (_, g))) in before
            .named()
            .into_iter()
            .zip(rnn.params().named().into_iter().zip(expected.named()))
        {
            let applied = b.sub(a).unwrap();
            assert!(
                applied.approx_eq(&g.mul_scalar(eta), 1e-12),
                "{} did not move by eta * clipped gradient",
                name
            );
        }
    }

    #[test]
    fn test_train_rejects_bad_eta_without_update() {
        let mut rnn = RNN::from_config(RNNConfig::new(2, 2, 2, 2).seed(1)).unwrap();
        let before = rnn.params().clone();
        let x = Matrix::ones((2, 2));
        assert!(matches!(
            rnn.train(&x, &x, -1.0, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(rnn.train(&x, &x, f64::NAN, None).is_err());
        assert_eq!(rnn.params(), &before);
    }

    #[test]
    fn test_zero_eta_scores_without_update() {
        let mut rnn = RNN::from_config(RNNConfig::new(3, 2, 4, 2).seed(8)).unwrap();
        let before = rnn.params().clone();
        let x = Matrix::ones((3, 2));
        let y = Matrix::zeros((3, 2));
        let loss = rnn.train(&x, &y, 0.0, None).unwrap();
        let expected = rnn
            .feedforward(&x, ForwardMode::Training { targets: &y }, None)
            .unwrap()
            .loss
            .unwrap();
        assert_eq!(loss, expected);
        assert_eq!(rnn.params(), &before);
    }

    #[test]
    fn test_train_rejects_bad_prev_state() {
        let mut rnn = RNN::from_config(RNNConfig::new(2, 2, 3, 2).seed(1)).unwrap();
        let before = rnn.params().clone();
        let x = Matrix::ones((2, 2));
        let bad = Matrix::zeros((1, 2));
        assert!(matches!(
            rnn.train(&x, &x, DEFAULT_ETA, Some(&bad)),
            Err(Error::InputMismatch { what: "prev_state", .. })
        ));
        assert_eq!(rnn.params(), &before);
    }
}

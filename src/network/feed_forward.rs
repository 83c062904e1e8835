//! The feedforward, fully-connected network and its training protocol.

use std::time::Instant;

use crate::errors::NetworkError;
use crate::layers::{Activation, Layer, LayerKind};
use crate::network::neuron::Neuron;
use crate::prng::Prng;
use crate::training::{BatchTrainingConfig, BatchTrainingReport};

/// Seed used when the caller does not supply one, so that weight
/// initialization is reproducible by default.
pub const DEFAULT_SEED: f64 = 374_923.0;

/// Construction options for a [`FeedForwardNetwork`].
#[derive(Debug, Clone)]
pub struct NetworkOptions {
    /// Seed for deterministic weight initialization, or `None` to draw
    /// initial weights from a non-deterministic source.
    pub seed: Option<f64>,
    /// Learning rate applied to every weight update.
    pub learning_rate: f64,
    /// Activation function shared by all hidden layers.
    pub hidden_activation: Activation,
    /// Activation function of the output layer.
    pub output_activation: Activation,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            seed: Some(DEFAULT_SEED),
            learning_rate: 0.3,
            hidden_activation: Activation::HyperbolicTangent,
            output_activation: Activation::HyperbolicTangent,
        }
    }
}

impl NetworkOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed for deterministic weight initialization.
    pub fn seed(mut self, seed: f64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws initial weights from a non-deterministic source instead of a
    /// seed.
    pub fn unseeded(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the activation function for the hidden layers.
    pub fn hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    /// Sets the activation function for the output layer.
    pub fn output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }
}

/// Where initial connection weights come from during construction.
///
/// Restoring a persisted network threads the stored weights through here so
/// that reconstruction drains them in the exact traversal order they were
/// written, instead of sampling fresh ones.
#[derive(Debug)]
pub(crate) enum WeightSource {
    /// Sample small zero-centered weights from the network's generator.
    Random,
    /// Drain predefined weights in order.
    Predefined(std::vec::IntoIter<f64>),
}

impl WeightSource {
    fn draw(&mut self, prng: &mut Prng) -> f64 {
        match self {
            WeightSource::Random => random_weight(prng),
            WeightSource::Predefined(weights) => {
                weights.next().unwrap_or_else(|| random_weight(prng))
            }
        }
    }
}

/// Samples an initial weight with a mean of zero.
fn random_weight(prng: &mut Prng) -> f64 {
    prng.uniform(0.0, 0.3) - 0.15
}

/// An artificial feedforward neural network.
///
/// Information travels only forward, from the input layer, through the
/// optional hidden layers, to the output layer; every neuron of one layer is
/// connected to every neuron of the next. The learned behavior of the
/// network is stored entirely in its connection weights.
///
/// All neurons live in a single arena owned by the network; layers address
/// contiguous index ranges of it, and connections refer to their target
/// neuron by arena index. Training and prediction mutate this state in
/// place, so a network instance must be driven by one caller at a time.
#[derive(Debug, Clone)]
pub struct FeedForwardNetwork {
    neurons: Vec<Neuron>,
    layers: Vec<Layer>,
    learning_rate: f64,
    seed: Option<f64>,
}

impl FeedForwardNetwork {
    /// Creates a new fully-connected network with freshly initialized
    /// weights.
    ///
    /// Layer 0 is the input layer and always uses the identity activation;
    /// `hidden_widths` gives the size of each hidden layer in order.
    pub fn new(
        input_width: usize,
        hidden_widths: &[usize],
        output_width: usize,
        options: NetworkOptions,
    ) -> Self {
        Self::with_weight_source(
            input_width,
            hidden_widths,
            output_width,
            options,
            WeightSource::Random,
        )
    }

    pub(crate) fn with_weight_source(
        input_width: usize,
        hidden_widths: &[usize],
        output_width: usize,
        options: NetworkOptions,
        mut source: WeightSource,
    ) -> Self {
        let mut prng = Prng::new(options.seed);
        let mut neurons = Vec::new();
        let mut layers = Vec::new();

        let mut add_layer = |kind: LayerKind, activation: Activation, width: usize| {
            let start = neurons.len();
            neurons.resize_with(start + width, Neuron::default);
            layers.push(Layer::new(kind, activation, start..start + width));
        };

        add_layer(LayerKind::Hidden, Activation::Identity, input_width);
        for &width in hidden_widths {
            add_layer(LayerKind::Hidden, options.hidden_activation, width);
        }
        add_layer(LayerKind::Output, options.output_activation, output_width);

        let mut network = Self {
            neurons,
            layers,
            learning_rate: options.learning_rate,
            seed: options.seed,
        };
        network.create_connections(&mut source, &mut prng);
        network
    }

    /// Wires every neuron of each layer to every neuron of the next layer.
    ///
    /// The traversal order here defines the order weights appear in the
    /// persisted document, so it must stay in sync with the export.
    fn create_connections(&mut self, source: &mut WeightSource, prng: &mut Prng) {
        for index in 1..self.layers.len() {
            let previous = self.layers[index - 1].neurons.clone();
            let current = self.layers[index].neurons.clone();
            for from in previous {
                for to in current.clone() {
                    let weight = source.draw(prng);
                    self.neurons[from].connect_to(to, weight);
                }
            }
        }
    }

    /// Returns the width of the input layer.
    pub fn input_width(&self) -> usize {
        self.layers[0].size()
    }

    /// Returns the width of the output layer.
    pub fn output_width(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    /// Returns the number of layers, including input and output.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layer at the specified index.
    pub fn layer(&self, index: usize) -> &Layer {
        &self.layers[index]
    }

    /// Returns the learning rate of this network.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the seed this network was constructed with, if any.
    pub fn seed(&self) -> Option<f64> {
        self.seed
    }

    /// Tries to predict the output from the specified input.
    ///
    /// This is a pure forward evaluation with no learning side effects:
    /// calling it twice with the same input and no intervening training
    /// yields identical output vectors.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.feed(input)?;
        Ok(self.output_activations())
    }

    /// Trains the network on one example using supervised online
    /// ("single-pattern") learning, updating the weights immediately.
    ///
    /// Use online learning to supply individual training examples at a time,
    /// e.g. when data becomes available in sequential order, or when
    /// training on the entire dataset at once is computationally too
    /// expensive. Every subsequent example runs on a network that has
    /// already changed its weights.
    ///
    /// Returns the mean-squared error for this example.
    pub fn train(&mut self, input: &[f64], desired: &[f64]) -> Result<f64, NetworkError> {
        let output_width = self.output_width();
        if desired.len() != output_width {
            return Err(NetworkError::SizeMismatch {
                expected: output_width,
                actual: desired.len(),
            });
        }

        self.feed(input)?;
        self.backpropagate(desired)?;
        let sum_squared_error = self.sum_squared_error(desired);
        self.update_weights(true);
        Ok(sum_squared_error / output_width as f64)
    }

    /// Trains the network using supervised batch ("all-at-once") learning.
    ///
    /// Per iteration, every example computes its gradients against the same
    /// weight snapshot; the accumulated updates are released together at the
    /// end of the iteration. This is the recommended technique when all
    /// training data is available up front and iterating over it is
    /// feasible.
    ///
    /// Training stops after `max_iterations`, or earlier at the first
    /// iteration whose mean-squared error reaches the configured threshold.
    pub fn train_batch(
        &mut self,
        inputs: &[Vec<f64>],
        desired_outputs: &[Vec<f64>],
        config: &BatchTrainingConfig,
    ) -> Result<BatchTrainingReport, NetworkError> {
        if inputs.len() != desired_outputs.len() {
            return Err(NetworkError::SizeMismatch {
                expected: inputs.len(),
                actual: desired_outputs.len(),
            });
        }
        // validate every example up front so a malformed one cannot leave
        // half-accumulated updates behind
        let input_width = self.input_width();
        let output_width = self.output_width();
        for input in inputs {
            if input.len() != input_width {
                return Err(NetworkError::SizeMismatch {
                    expected: input_width,
                    actual: input.len(),
                });
            }
        }
        for desired in desired_outputs {
            if desired.len() != output_width {
                return Err(NetworkError::SizeMismatch {
                    expected: output_width,
                    actual: desired.len(),
                });
            }
        }

        let start = Instant::now();
        let mut error = f64::INFINITY;
        let mut iterations = 0;

        while iterations < config.max_iterations && error > config.error_threshold {
            let mut sum_squared_error = 0.0;
            for (input, desired) in inputs.iter().zip(desired_outputs) {
                self.feed(input)?;
                self.backpropagate(desired)?;
                self.update_weights(false);
                sum_squared_error += self.sum_squared_error(desired);
            }
            error = sum_squared_error / (inputs.len() * output_width) as f64;
            self.release_weight_updates();
            iterations += 1;

            if config.verbose && (iterations % 10 == 0 || iterations == config.max_iterations) {
                log::info!(
                    "iteration {}/{}: mse = {:.6}",
                    iterations,
                    config.max_iterations,
                    error
                );
            }
        }

        Ok(BatchTrainingReport {
            error,
            iterations,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Feeds the specified input into the network: resets all neurons,
    /// loads the input layer and propagates layer by layer.
    fn feed(&mut self, input: &[f64]) -> Result<(), NetworkError> {
        let input_width = self.input_width();
        if input.len() != input_width {
            return Err(NetworkError::SizeMismatch {
                expected: input_width,
                actual: input.len(),
            });
        }

        for neuron in &mut self.neurons {
            neuron.reset();
        }

        // the input layer occupies the first arena slots
        for (neuron, value) in self.neurons.iter_mut().zip(input) {
            neuron.feed(*value);
        }

        for index in 0..self.layers.len() {
            self.propagate_layer(index);
        }
        Ok(())
    }

    /// Activates every neuron of one layer and fans its output out to the
    /// connected neurons of the next.
    fn propagate_layer(&mut self, index: usize) {
        let range = self.layers[index].neurons.clone();
        let activation_fn = self.layers[index].activation;

        for i in range.clone() {
            // all targets live past the end of this layer's range
            let (head, tail) = self.neurons.split_at_mut(range.end);
            let neuron = &mut head[i];
            neuron.activation = activation_fn.evaluate(neuron.input);
            for connection in &neuron.connections {
                tail[connection.target - range.end].feed(neuron.activation * connection.weight);
            }
        }
    }

    /// Updates the deltas in all layers, starting with the output layer and
    /// walking the hidden layers in reverse. The input layer is skipped; it
    /// has no incoming weights to adjust.
    fn backpropagate(&mut self, desired: &[f64]) -> Result<(), NetworkError> {
        for index in (1..self.layers.len()).rev() {
            match self.layers[index].kind {
                LayerKind::Output => self.update_output_deltas(index, desired)?,
                LayerKind::Hidden => self.update_hidden_deltas(index),
            }
        }
        Ok(())
    }

    /// Sets each output neuron's delta from the supervised residual against
    /// the target vector.
    fn update_output_deltas(&mut self, index: usize, desired: &[f64]) -> Result<(), NetworkError> {
        let range = self.layers[index].neurons.clone();
        if desired.len() != range.len() {
            return Err(NetworkError::SizeMismatch {
                expected: range.len(),
                actual: desired.len(),
            });
        }
        let activation_fn = self.layers[index].activation;

        for (i, value) in range.zip(desired) {
            let neuron = &mut self.neurons[i];
            let error = value - neuron.activation;
            neuron.delta = activation_fn.evaluate_derivative(neuron.input) * error;
        }
        Ok(())
    }

    /// Sets each hidden neuron's delta from the weighted deltas of
    /// everything downstream of it (the chain-rule error attribution).
    fn update_hidden_deltas(&mut self, index: usize) {
        let range = self.layers[index].neurons.clone();
        let activation_fn = self.layers[index].activation;

        for i in range {
            let error: f64 = self.neurons[i]
                .connections
                .iter()
                .map(|connection| connection.weight * self.neurons[connection.target].delta)
                .sum();
            let delta = activation_fn.evaluate_derivative(self.neurons[i].input) * error;
            self.neurons[i].delta = delta;
        }
    }

    /// Applies the gradient-descent weight adjustment at every connection of
    /// every layer, immediately or deferred.
    fn update_weights(&mut self, immediate: bool) {
        let learning_rate = self.learning_rate;
        for i in 0..self.neurons.len() {
            let activation = self.neurons[i].activation;
            for k in 0..self.neurons[i].connections.len() {
                let target = self.neurons[i].connections[k].target;
                let update = learning_rate * self.neurons[target].delta * activation;
                self.neurons[i].connections[k].update_weight(update, immediate);
            }
        }
    }

    /// Releases all deferred weight updates so they take effect
    /// simultaneously.
    fn release_weight_updates(&mut self) {
        for neuron in &mut self.neurons {
            for connection in &mut neuron.connections {
                connection.release_pending();
            }
        }
    }

    /// Reads the output layer's activations in index order.
    fn output_activations(&self) -> Vec<f64> {
        let range = self.layers[self.layers.len() - 1].neurons.clone();
        range.map(|i| self.neurons[i].activation).collect()
    }

    /// Sum of squared residuals at the output layer for the given target
    /// vector.
    fn sum_squared_error(&self, desired: &[f64]) -> f64 {
        let range = self.layers[self.layers.len() - 1].neurons.clone();
        range
            .zip(desired)
            .map(|(i, value)| {
                let error = value - self.neurons[i].activation;
                error * error
            })
            .sum()
    }

    /// Iterates the connection weights in persisted-document order: layer by
    /// layer, neuron by neuron, connection by connection.
    pub(crate) fn weights_in_order(&self) -> impl Iterator<Item = f64> + '_ {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.connections.iter().map(|connection| connection.weight))
    }

    pub(crate) fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

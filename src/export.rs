//! The persisted network document and its restore path.
//!
//! A network serializes to a single tree: top-level hyperparameters plus,
//! per layer, the activation function's identifying name and every neuron's
//! connection weights. Restoring derives the layer widths from the neuron
//! counts, threads the stored weights through the normal constructor and
//! resolves activation functions by name.

use serde::{Deserialize, Serialize};

use crate::errors::NetworkError;
use crate::layers::Activation;
use crate::network::feed_forward::{FeedForwardNetwork, NetworkOptions, WeightSource};

/// Serialized form of a whole network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkExport {
    pub learning_rate: f64,
    pub seed: Option<f64>,
    pub layers: Vec<LayerExport>,
}

/// Serialized form of one layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerExport {
    /// One of the eight recognized activation function names.
    pub activation_function: String,
    pub neurons: Vec<NeuronExport>,
}

/// Serialized form of one neuron: its outgoing connection weights in wiring
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronExport {
    pub connections: Vec<ConnectionExport>,
}

/// Serialized form of one connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionExport {
    pub weight: f64,
}

impl FeedForwardNetwork {
    /// Converts this network into its persisted document form.
    pub fn export(&self) -> NetworkExport {
        let layers = self
            .layers()
            .iter()
            .map(|layer| LayerExport {
                activation_function: layer.activation().name().to_string(),
                neurons: layer
                    .neurons
                    .clone()
                    .map(|i| NeuronExport {
                        connections: self.neurons()[i]
                            .connections
                            .iter()
                            .map(|connection| ConnectionExport {
                                weight: connection.weight,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        NetworkExport {
            learning_rate: self.learning_rate(),
            seed: self.seed(),
            layers,
        }
    }

    /// Serializes this network to a JSON string.
    pub fn to_json(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }

    /// Rebuilds a network from its persisted document form.
    ///
    /// The stored weights are drained through the constructor in the exact
    /// traversal order they were written, so the restored network has the
    /// identical topology and weights.
    pub fn from_export(export: &NetworkExport) -> Result<Self, NetworkError> {
        if export.layers.len() < 2 {
            return Err(NetworkError::SizeMismatch {
                expected: 2,
                actual: export.layers.len(),
            });
        }

        let widths: Vec<usize> = export.layers.iter().map(|l| l.neurons.len()).collect();
        let input_width = widths[0];
        let output_width = widths[widths.len() - 1];
        let hidden_widths = &widths[1..widths.len() - 1];

        // hidden layers share one activation function; without hidden layers
        // the choice never matters, so fall back to the identity
        let hidden_name = if export.layers.len() > 2 {
            export.layers[1].activation_function.as_str()
        } else {
            "Identity"
        };
        let hidden_activation =
            Activation::from_name(hidden_name).ok_or_else(|| NetworkError::UnknownActivation {
                name: hidden_name.to_string(),
            })?;

        let output_name = export.layers[export.layers.len() - 1]
            .activation_function
            .as_str();
        let output_activation =
            Activation::from_name(output_name).ok_or_else(|| NetworkError::UnknownActivation {
                name: output_name.to_string(),
            })?;

        // flatten all weights in document order and make sure they cover the
        // dense topology exactly
        let weights: Vec<f64> = export
            .layers
            .iter()
            .flat_map(|layer| {
                layer.neurons.iter().flat_map(|neuron| {
                    neuron
                        .connections
                        .iter()
                        .map(|connection| connection.weight)
                })
            })
            .collect();
        let expected: usize = widths.windows(2).map(|pair| pair[0] * pair[1]).sum();
        if weights.len() != expected {
            return Err(NetworkError::SizeMismatch {
                expected,
                actual: weights.len(),
            });
        }

        let options = NetworkOptions {
            seed: export.seed,
            learning_rate: export.learning_rate,
            hidden_activation,
            output_activation,
        };
        Ok(Self::with_weight_source(
            input_width,
            hidden_widths,
            output_width,
            options,
            WeightSource::Predefined(weights.into_iter()),
        ))
    }

    /// Restores a network from a JSON string produced by [`to_json`].
    ///
    /// [`to_json`]: FeedForwardNetwork::to_json
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let export: NetworkExport = serde_json::from_str(json)?;
        Self::from_export(&export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_network() -> FeedForwardNetwork {
        FeedForwardNetwork::new(
            2,
            &[3],
            2,
            NetworkOptions::new()
                .seed(11.0)
                .learning_rate(0.25)
                .hidden_activation(Activation::Logistic)
                .output_activation(Activation::HyperbolicTangent),
        )
    }

    #[test]
    fn test_export_document_shape() {
        let export = sample_network().export();

        assert_eq!(export.learning_rate, 0.25);
        assert_eq!(export.seed, Some(11.0));
        assert_eq!(export.layers.len(), 3);
        assert_eq!(export.layers[0].activation_function, "Identity");
        assert_eq!(export.layers[1].activation_function, "LogisticFunction");
        assert_eq!(export.layers[2].activation_function, "HyperbolicTangent");
        assert_eq!(export.layers[0].neurons.len(), 2);
        assert_eq!(export.layers[1].neurons.len(), 3);
        assert_eq!(export.layers[2].neurons.len(), 2);
        // every input neuron fans out to all three hidden neurons
        assert_eq!(export.layers[0].neurons[0].connections.len(), 3);
        // output neurons have no outgoing connections
        assert!(export.layers[2].neurons[0].connections.is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let json = sample_network().to_json().unwrap();
        assert!(json.contains("\"learningRate\""));
        assert!(json.contains("\"seed\""));
        assert!(json.contains("\"activationFunction\""));
        assert!(json.contains("\"connections\""));
        assert!(json.contains("\"weight\""));
    }

    #[test]
    fn test_roundtrip_preserves_weights_exactly() {
        let original = sample_network();
        let json = original.to_json().unwrap();
        let restored = FeedForwardNetwork::from_json(&json).unwrap();

        let original_weights: Vec<f64> = original.weights_in_order().collect();
        let restored_weights: Vec<f64> = restored.weights_in_order().collect();
        assert_eq!(original_weights, restored_weights);
        assert_eq!(restored.learning_rate(), original.learning_rate());
        assert_eq!(restored.seed(), original.seed());
        assert_eq!(restored.num_layers(), original.num_layers());
    }

    #[test]
    fn test_roundtrip_preserves_predictions() {
        let mut original = sample_network();
        let json = original.to_json().unwrap();
        let mut restored = FeedForwardNetwork::from_json(&json).unwrap();

        for input in [[0.0, 0.0], [0.5, -0.5], [1.0, 1.0], [-2.0, 3.0]] {
            let expected = original.predict(&input).unwrap();
            let actual = restored.predict(&input).unwrap();
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn test_unknown_activation_name_aborts_restore() {
        let mut export = sample_network().export();
        export.layers[1].activation_function = "Softplus".to_string();

        let result = FeedForwardNetwork::from_export(&export);
        assert!(matches!(
            result,
            Err(NetworkError::UnknownActivation { name }) if name == "Softplus"
        ));
    }

    #[test]
    fn test_missing_weights_abort_restore() {
        let mut export = sample_network().export();
        export.layers[0].neurons[0].connections.pop();

        let result = FeedForwardNetwork::from_export(&export);
        assert!(matches!(
            result,
            Err(NetworkError::SizeMismatch {
                expected: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_too_few_layers_abort_restore() {
        let mut export = sample_network().export();
        export.layers.truncate(1);

        assert!(FeedForwardNetwork::from_export(&export).is_err());
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let result = FeedForwardNetwork::from_json("{ not json }");
        assert!(matches!(result, Err(NetworkError::Serialization(_))));
    }

    #[test]
    fn test_network_without_hidden_layers_roundtrips() {
        let original = FeedForwardNetwork::new(
            3,
            &[],
            1,
            NetworkOptions::new()
                .seed(5.0)
                .output_activation(Activation::Logistic),
        );
        let json = original.to_json().unwrap();
        let restored = FeedForwardNetwork::from_json(&json).unwrap();

        let original_weights: Vec<f64> = original.weights_in_order().collect();
        let restored_weights: Vec<f64> = restored.weights_in_order().collect();
        assert_eq!(original_weights, restored_weights);
        assert_eq!(restored.num_layers(), 2);
    }
}

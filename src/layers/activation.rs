//! Activation functions for neural network layers.

/// Supported activation functions.
///
/// An activation function is applied to a neuron's summed input to produce its
/// output. The main factor in deciding which function to use is usually its
/// range; the hyperbolic tangent and the rectified linear unit are the most
/// commonly used choices.
///
/// All variants are pure functions of the input value alone. The rectified
/// linear unit additionally carries a fixed slope parameter for its "leaky"
/// form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Identity: f(x) = x
    Identity,
    /// Logistic function: f(x) = 1 / (1 + exp(-x))
    Logistic,
    /// Hyperbolic tangent: f(x) = tanh(x)
    HyperbolicTangent,
    /// Arc tangent: f(x) = atan(x)
    ArcTangent,
    /// Binary step: f(x) = 0 for x < 0, else 1
    BinaryStep,
    /// Gaussian: f(x) = exp(-x^2)
    Gaussian,
    /// Sinusoid: f(x) = sin(x)
    Sinusoid,
    /// Rectified Linear Unit: f(x) = max(0, x), or `leak * x` for negative
    /// inputs when a non-zero `leak` is used.
    ///
    /// A non-zero `leak` (a small positive number such as `0.01`) gives the
    /// "leaky" form, which keeps neurons from irreversibly dying on large
    /// learning rates.
    RectifiedLinear {
        /// Slope for negative inputs. Zero yields the plain ReLU.
        leak: f64,
    },
}

impl Activation {
    /// Evaluates the function at the specified point.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::Logistic => 1.0 / (1.0 + (-x).exp()),
            Activation::HyperbolicTangent => x.tanh(),
            Activation::ArcTangent => x.atan(),
            Activation::BinaryStep => {
                if x < 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Activation::Gaussian => (-x * x).exp(),
            Activation::Sinusoid => x.sin(),
            Activation::RectifiedLinear { leak } => {
                if x < 0.0 {
                    leak * x
                } else {
                    x
                }
            }
        }
    }

    /// Evaluates the derivative of the function at the specified point.
    ///
    /// The binary step has no meaningful derivative at zero and returns NaN
    /// there.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Identity => 1.0,
            Activation::Logistic => {
                let y = self.evaluate(x);
                y * (1.0 - y)
            }
            Activation::HyperbolicTangent => {
                let y = x.tanh();
                1.0 - y * y
            }
            Activation::ArcTangent => 1.0 / (x * x + 1.0),
            Activation::BinaryStep => {
                if x != 0.0 {
                    0.0
                } else {
                    f64::NAN
                }
            }
            Activation::Gaussian => -2.0 * x * self.evaluate(x),
            Activation::Sinusoid => x.cos(),
            Activation::RectifiedLinear { leak } => {
                if x < 0.0 {
                    *leak
                } else {
                    1.0
                }
            }
        }
    }

    /// Returns the least possible value of this function.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Activation::Identity => f64::NEG_INFINITY,
            Activation::Logistic => 0.0,
            Activation::HyperbolicTangent => -1.0,
            Activation::ArcTangent => -std::f64::consts::FRAC_PI_2,
            Activation::BinaryStep => 0.0,
            Activation::Gaussian => 0.0,
            Activation::Sinusoid => -1.0,
            Activation::RectifiedLinear { leak } => {
                if *leak > 0.0 {
                    f64::NEG_INFINITY
                } else {
                    0.0
                }
            }
        }
    }

    /// Returns the greatest possible value of this function.
    pub fn upper_bound(&self) -> f64 {
        match self {
            Activation::Identity => f64::INFINITY,
            Activation::Logistic => 1.0,
            Activation::HyperbolicTangent => 1.0,
            Activation::ArcTangent => std::f64::consts::FRAC_PI_2,
            Activation::BinaryStep => 1.0,
            Activation::Gaussian => 1.0,
            Activation::Sinusoid => 1.0,
            Activation::RectifiedLinear { .. } => f64::INFINITY,
        }
    }

    /// Returns whether this function is monotonic.
    pub fn is_monotonic(&self) -> bool {
        !matches!(self, Activation::Gaussian | Activation::Sinusoid)
    }

    /// Returns whether this function's derivative is monotonic.
    pub fn is_derivative_monotonic(&self) -> bool {
        matches!(
            self,
            Activation::Identity | Activation::RectifiedLinear { .. }
        )
    }

    /// Returns whether the graph of this function is centered around `(0,0)`.
    pub fn is_centered_around_zero(&self) -> bool {
        matches!(
            self,
            Activation::Identity
                | Activation::HyperbolicTangent
                | Activation::ArcTangent
                | Activation::Sinusoid
        )
    }

    /// Returns the identifying name used in the persisted network document.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Identity => "Identity",
            Activation::Logistic => "LogisticFunction",
            Activation::HyperbolicTangent => "HyperbolicTangent",
            Activation::ArcTangent => "ArcTangent",
            Activation::BinaryStep => "BinaryStep",
            Activation::Gaussian => "GaussianFunction",
            Activation::Sinusoid => "SinusoidFunction",
            Activation::RectifiedLinear { .. } => "RectifiedLinearUnit",
        }
    }

    /// Creates an Activation from its persisted name.
    ///
    /// The leak parameter of the rectified linear unit is not part of the
    /// persisted name, so `RectifiedLinearUnit` restores with a zero leak.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Identity" => Some(Activation::Identity),
            "LogisticFunction" => Some(Activation::Logistic),
            "HyperbolicTangent" => Some(Activation::HyperbolicTangent),
            "ArcTangent" => Some(Activation::ArcTangent),
            "BinaryStep" => Some(Activation::BinaryStep),
            "GaussianFunction" => Some(Activation::Gaussian),
            "SinusoidFunction" => Some(Activation::Sinusoid),
            "RectifiedLinearUnit" => Some(Activation::RectifiedLinear { leak: 0.0 }),
            _ => None,
        }
    }
}

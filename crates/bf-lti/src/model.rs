//! The transfer-function model that a frequency sweep evaluates.

use std::fmt;

use bf_core::{Time, ensure_all_finite, s, seconds_of};
use serde::Serialize;

use crate::error::{LtiError, LtiResult};
use crate::pade::{DelaySpec, PadeOptions};
use crate::polynomial::Polynomial;
use crate::rational::RationalFunction;

/// Numerator used when none is given: a unity gain.
pub const DEFAULT_NUMERATOR: [f64; 1] = [1.0];
/// Denominator used when none is given: no dynamics.
pub const DEFAULT_DENOMINATOR: [f64; 1] = [1.0];

/// Plant plus optional delay, folded into one rational function.
///
/// Immutable after construction. The effective function is the plant itself
/// when there is no delay, otherwise the plant multiplied by the delay's Padé
/// approximant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferFunctionModel {
    plant: RationalFunction,
    delay: Option<DelaySpec>,
    effective: RationalFunction,
}

impl TransferFunctionModel {
    /// Build a model from plant coefficients and an optional delay.
    ///
    /// A delay of `None` or `Some(0.0)` leaves the plant untouched.
    ///
    /// # Errors
    ///
    /// - [`LtiError::InvalidParameter`] for an empty numerator or a bad delay/options pair
    /// - [`LtiError::DegenerateSystem`] when the denominator is all zeros
    /// - [`LtiError::Numeric`] for NaN or infinite coefficients, including
    ///   overflow in the delay approximant
    pub fn build(
        numerator: &[f64],
        denominator: &[f64],
        delay: Option<f64>,
        options: PadeOptions,
    ) -> LtiResult<Self> {
        let plant = plant_from(numerator, denominator)?;
        let delay = match delay {
            Some(t) if t != 0.0 => Some(DelaySpec::new(t, options)?),
            _ => None,
        };
        Self::from_plant(plant, delay)
    }

    /// Fold an already validated plant and delay into a model.
    ///
    /// # Errors
    ///
    /// [`LtiError::Numeric`] when the approximant or the folded product has a
    /// coefficient that overflows.
    pub fn from_plant(plant: RationalFunction, delay: Option<DelaySpec>) -> LtiResult<Self> {
        let effective = match &delay {
            Some(spec) => {
                tracing::info!(
                    delay_s = spec.delay_time(),
                    order = spec.order(),
                    numerator_degree = spec.numerator_degree(),
                    "time delay uses Padé approximation of order n = {}",
                    spec.order()
                );
                let effective = plant.multiply(&spec.approximant()?);
                ensure_all_finite(effective.numerator().coeffs(), "numerator coefficient")?;
                ensure_all_finite(effective.denominator().coeffs(), "denominator coefficient")?;
                effective
            }
            None => plant.clone(),
        };

        let (num_degree, den_degree) = effective.degrees();
        tracing::debug!(num_degree, den_degree, "built transfer function model");

        Ok(Self {
            plant,
            delay,
            effective,
        })
    }

    /// Start a builder with unity numerator and denominator.
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// The rational function that gets evaluated.
    pub fn rational(&self) -> &RationalFunction {
        &self.effective
    }

    pub fn numerator(&self) -> &Polynomial {
        self.effective.numerator()
    }

    pub fn denominator(&self) -> &Polynomial {
        self.effective.denominator()
    }

    /// The plant before any delay was folded in.
    pub fn plant(&self) -> &RationalFunction {
        &self.plant
    }

    pub fn delay(&self) -> Option<&DelaySpec> {
        self.delay.as_ref()
    }

    /// `(numerator degree, denominator degree)` of the effective function.
    pub fn degrees(&self) -> (usize, usize) {
        self.effective.degrees()
    }

    pub fn dc_gain(&self) -> f64 {
        self.effective.dc_gain()
    }
}

fn plant_from(numerator: &[f64], denominator: &[f64]) -> LtiResult<RationalFunction> {
    if numerator.is_empty() {
        return Err(LtiError::InvalidParameter {
            what: "numerator must have at least one coefficient",
        });
    }
    ensure_all_finite(numerator, "numerator coefficient")?;
    ensure_all_finite(denominator, "denominator coefficient")?;
    RationalFunction::new(Polynomial::from(numerator), Polynomial::from(denominator))
}

impl fmt::Display for TransferFunctionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.effective)?;
        if let Some(spec) = &self.delay {
            write!(
                f,
                "\n(includes delay {} s as [{}/{}] Padé approximant)",
                spec.delay_time(),
                spec.numerator_degree(),
                spec.order()
            )?;
        }
        Ok(())
    }
}

/// Builder for [`TransferFunctionModel`] with the usual defaults.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
    delay: Option<Time>,
    options: PadeOptions,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self {
            numerator: DEFAULT_NUMERATOR.to_vec(),
            denominator: DEFAULT_DENOMINATOR.to_vec(),
            delay: None,
            options: PadeOptions::default(),
        }
    }
}

impl ModelBuilder {
    pub fn numerator(mut self, coeffs: impl Into<Vec<f64>>) -> Self {
        self.numerator = coeffs.into();
        self
    }

    pub fn denominator(mut self, coeffs: impl Into<Vec<f64>>) -> Self {
        self.denominator = coeffs.into();
        self
    }

    /// Delay in seconds.
    pub fn delay(self, seconds: f64) -> Self {
        self.delay_time(s(seconds))
    }

    pub fn delay_time(mut self, delay: Time) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn pade(mut self, options: PadeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn order(mut self, order: usize) -> Self {
        self.options.order = order;
        self
    }

    pub fn numerator_degree(mut self, degree: i64) -> Self {
        self.options.numerator_degree = Some(degree);
        self
    }

    /// Same rules as [`TransferFunctionModel::build`].
    pub fn build(self) -> LtiResult<TransferFunctionModel> {
        let plant = plant_from(&self.numerator, &self.denominator)?;
        let delay = match self.delay {
            Some(t) if seconds_of(t) != 0.0 => Some(DelaySpec::from_time(t, self.options)?),
            _ => None,
        };
        TransferFunctionModel::from_plant(plant, delay)
    }
}

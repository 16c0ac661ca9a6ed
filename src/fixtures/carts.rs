//! Cart Fixtures

use serde::Deserialize;

use crate::conditions::{Condition, ConditionError};

/// Wrapper for a cart in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Line items in add order
    pub items: Vec<ItemFixture>,
}

/// One line item in a cart fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Fixture id of the product
    pub product: String,

    /// Number of units
    pub quantity: u32,

    /// Discount conditions attached to the line
    #[serde(default)]
    pub conditions: Vec<ConditionFixture>,
}

/// A discount condition in YAML, tagged by `type`
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionFixture {
    /// Percentage discount with a strict minimum quantity
    Percentage {
        /// Percentage taken off, 0..=100
        percent: u8,

        /// The discount applies above this quantity
        #[serde(default)]
        minimum: u32,
    },

    /// Pay-for-half tier of the given group size
    QuantityTier {
        /// Group size, positive and even
        size: u32,
    },
}

impl ConditionFixture {
    /// Convert to a validated [`Condition`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConditionError`] if the parameters fail validation.
    pub fn to_condition(&self) -> Result<Condition, ConditionError> {
        let condition = match *self {
            ConditionFixture::Percentage { percent, minimum } => {
                Condition::Percentage { percent, minimum }
            }
            ConditionFixture::QuantityTier { size } => Condition::QuantityTier { size },
        };

        condition.validate()?;

        Ok(condition)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_a_tagged_condition() -> TestResult {
        let fixture: ConditionFixture =
            serde_norway::from_str("type: percentage\npercent: 30\nminimum: 2\n")?;

        assert_eq!(
            fixture.to_condition()?,
            Condition::Percentage {
                percent: 30,
                minimum: 2
            }
        );

        Ok(())
    }

    #[test]
    fn minimum_defaults_to_zero() -> TestResult {
        let fixture: ConditionFixture = serde_norway::from_str("type: percentage\npercent: 10\n")?;

        assert_eq!(
            fixture.to_condition()?,
            Condition::Percentage {
                percent: 10,
                minimum: 0
            }
        );

        Ok(())
    }

    #[test]
    fn invalid_parameters_are_rejected_on_conversion() -> TestResult {
        let fixture: ConditionFixture = serde_norway::from_str("type: quantity_tier\nsize: 3\n")?;

        assert_eq!(
            fixture.to_condition(),
            Err(ConditionError::InvalidTierSize(3))
        );

        Ok(())
    }
}

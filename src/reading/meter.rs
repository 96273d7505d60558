//! Meter reading data structure.

use std::fmt;

use chrono::NaiveDate;

use super::ValidationError;

/// Date layout used both for parsing and for display.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, PartialEq)]
pub struct MeterReading {
    resource_type: String,
    date: NaiveDate,
    value: f64,
}

impl MeterReading {
    pub fn new(
        resource_type: impl Into<String>,
        date: NaiveDate,
        value: f64,
    ) -> Result<Self, ValidationError> {
        let resource_type = resource_type.into();

        if resource_type.trim().is_empty() {
            return Err(ValidationError::EmptyResourceType);
        }
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue);
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeValue);
        }

        // -0.0 passes the sign check but would render as "-0"
        let value = if value == 0.0 { 0.0 } else { value };

        Ok(MeterReading {
            resource_type,
            date,
            value,
        })
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for MeterReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resource type: {}, Date: {}, Value: {}",
            self.resource_type(),
            self.date().format(DATE_FORMAT),
            self.value()
        )
    }
}

// -- Tests ----------------------------------------------------------------------------

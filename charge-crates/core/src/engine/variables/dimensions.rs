use crate::basic_types::ModelError;
use crate::variables::VariableId;

/// The size of a charging problem: a fleet of `vehicles` competing for `chargers` charging
/// stations during `hours` consecutive hours.
///
/// The dimensions are validated on construction; a [`Dimensions`] always describes a problem with
/// at least one vehicle, one hour and one charger whose variables can be addressed by a
/// [`VariableId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    vehicles: usize,
    hours: usize,
    chargers: usize,
}

impl Dimensions {
    /// Creates the dimensions of a problem, failing with [`ModelError::InvalidDimensions`] if one
    /// of the sizes is zero.
    pub fn new(vehicles: usize, hours: usize, chargers: usize) -> Result<Self, ModelError> {
        if vehicles == 0 || hours == 0 || chargers == 0 {
            return Err(ModelError::InvalidDimensions {
                vehicles,
                hours,
                chargers,
            });
        }

        let is_addressable = vehicles
            .checked_mul(hours)
            .and_then(|product| product.checked_mul(chargers))
            .is_some_and(|num_variables| num_variables <= VariableId::MAX_VARIABLES);
        if !is_addressable {
            return Err(ModelError::TooManyVariables {
                max: VariableId::MAX_VARIABLES,
            });
        }

        Ok(Dimensions {
            vehicles,
            hours,
            chargers,
        })
    }

    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    pub fn hours(&self) -> usize {
        self.hours
    }

    pub fn chargers(&self) -> usize {
        self.chargers
    }

    /// The total number of charger-hours; every one of them is filled by exactly one vehicle.
    pub fn charger_hours(&self) -> usize {
        self.hours * self.chargers
    }

    pub fn num_variables(&self) -> usize {
        self.vehicles * self.hours * self.chargers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_dimensions_are_rejected() {
        for (vehicles, hours, chargers) in [(0, 24, 3), (4, 0, 3), (4, 24, 0), (0, 0, 0)] {
            let result = Dimensions::new(vehicles, hours, chargers);

            assert_eq!(
                result,
                Err(ModelError::InvalidDimensions {
                    vehicles,
                    hours,
                    chargers
                })
            );
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let result = Dimensions::new(usize::MAX, 2, 1);

        assert!(matches!(result, Err(ModelError::TooManyVariables { .. })));
    }

    #[test]
    fn sizes_are_derived_from_the_dimensions() {
        let dimensions = Dimensions::new(4, 24, 3).unwrap();

        assert_eq!(dimensions.charger_hours(), 72);
        assert_eq!(dimensions.num_variables(), 288);
    }
}

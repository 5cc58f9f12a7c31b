use std::fmt::Display;

use super::statistic_logging::log_statistic;

/// Responsible for logging the statistics with the provided prefix; used to group the statistics
/// of one component under a common name.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    /// The prefix which will be attached to the statistic name
    name_prefix: String,
}

impl StatisticLogger {
    /// Attaches the provided `addition_to_prefix` to the stored internal prefix and returns a new
    /// [`StatisticLogger`] with these two prefixes.
    pub fn attach_to_prefix(&self, addition_to_prefix: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            addition_to_prefix.to_string()
        } else {
            format!("{}_{}", self.name_prefix, addition_to_prefix)
        };

        Self { name_prefix }
    }

    pub fn log_statistic(&self, value: impl Display) {
        log_statistic(&self.name_prefix, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_joined_with_underscores() {
        let logger = StatisticLogger::default()
            .attach_to_prefix("engine_statistics")
            .attach_to_prefix("num_branches");

        assert_eq!(logger.name_prefix, "engine_statistics_num_branches");
    }

    #[test]
    fn attaching_to_an_empty_prefix_does_not_add_a_separator() {
        let logger = StatisticLogger::default().attach_to_prefix("conflicts");

        assert_eq!(logger.name_prefix, "conflicts");
    }
}

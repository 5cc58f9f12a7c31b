use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers; the engine searches until the search space is
/// exhausted or the caller stops pulling solutions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}

use derive_getters::Dissolve;
use derive_more::{Constructor, Display, Error};

/// A mutation was requested through a view that does not permit it.
///
/// The rejection is deterministic: retrying the same call on the same view fails the same way,
/// and the backing container is never touched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, Error, Dissolve, Constructor)]
#[display("{view} does not support `{operation}`")]
pub struct Unsupported {
    view: &'static str,
    operation: &'static str,
}

impl Unsupported {
    /// Kind of view that rejected the call.
    pub fn view(&self) -> &'static str {
        self.view
    }

    /// Name of the rejected operation.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

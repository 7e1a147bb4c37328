//! Contract between the repair pipeline and pluggable strategies

use crate::generation::generator::Generator;
use crate::io::error::Result;
use crate::paths::AreaId;
use crate::topology::Topology;

/// Policy repairing one area of a fully collapsed labyrinth
///
/// Strategies only act through [`Generator::regenerate`] and the public
/// graph accessors, so a failed attempt leaves the labyrinth unchanged.
pub trait RepairStrategy<T: Topology> {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Attempt a repair of `area`, returning whether it succeeded
    ///
    /// # Errors
    ///
    /// Propagates generator errors such as missing graphs
    fn handle(&mut self, area: AreaId, generator: &mut Generator<T>) -> Result<bool>;

    /// Hook run once after every area was handled
    ///
    /// # Errors
    ///
    /// Propagates generator errors
    fn postprocessing(&mut self, _generator: &mut Generator<T>) -> Result<()> {
        Ok(())
    }
}

//! Generator configuration trait for CLI binaries
//!
//! Each binary implements this trait to describe the product it scaffolds.

use crate::answers::AnswerSet;
use crate::materializer::GenerationReport;

/// Configuration trait for generator binaries
///
/// Implementors define:
/// - Product identity (display name)
/// - Where local template overrides come from
/// - Documentation links
/// - Post-generation instructions
pub trait GeneratorConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable pointing at a local template directory (development use)
    fn template_dir_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, report: &GenerationReport, answers: &AnswerSet) -> Vec<String>;
}

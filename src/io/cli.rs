//! Command-line interface generating one labyrinth per invocation

use crate::element::{CategoryWeights, ElementCategory};
use crate::generation::{ContradictionPolicy, GenerationReport, Generator, GeneratorConfig, RepairPlan};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_FIELD_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::CollapseProgress;
use crate::strategies::{
    MinLengthCycleStrategy, OneWayMergeStrategy, RandomMergeStrategy, RedundantEdgeCutting,
    TeleporterMergeStrategy,
};
use crate::superposition::SuperpositionRegistry;
use crate::topology::{SquareSize, SquareTopology};
use clap::{Parser, ValueEnum};
use std::time::Instant;

/// Strategy connecting isolated areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IsolatedStrategyChoice {
    /// Open a passage between neighbouring areas
    RandomMerge,
    /// Link neighbouring areas with one-way cells
    OneWayMerge,
    /// Link distant dead ends with teleporters
    TeleporterMerge,
    /// Leave isolated areas as they are
    None,
}

#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(
    author,
    version,
    about = "Generate labyrinths on a square grid with wave function collapse"
)]
/// Command-line arguments for the labyrinth generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Field width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Field height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Element kinds to register, comma separated (default: basic kinds)
    #[arg(short, long, value_delimiter = ',')]
    pub kinds: Option<Vec<ElementCategory>>,

    /// Collapse weight override as `kind=value`, repeatable
    #[arg(long = "weight", value_name = "KIND=VALUE", value_parser = parse_weight)]
    pub weights: Vec<(ElementCategory, f64)>,

    /// Strategy connecting isolated areas
    #[arg(short, long, value_enum, default_value_t = IsolatedStrategyChoice::RandomMerge)]
    pub isolated: IsolatedStrategyChoice,

    /// Cut cycles shorter than this many steps
    #[arg(short = 'c', long)]
    pub min_cycle_length: Option<usize>,

    /// Probability of cutting each redundant edge
    #[arg(short = 'p', long)]
    pub cut_probability: Option<f64>,

    /// Abort on the first contradiction instead of placing a solid cell
    #[arg(long)]
    pub fail_on_contradiction: bool,

    /// Fail when a repair strategy leaves issues unrepaired
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_weight(raw: &str) -> std::result::Result<(ElementCategory, f64), String> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got '{raw}'"))?;
    let category = kind.trim().parse::<ElementCategory>().map_err(|error| error.to_string())?;
    let weight = value
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid weight '{value}': {error}"))?;
    Ok((category, weight))
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Field size after validating both dimensions
    ///
    /// # Errors
    ///
    /// Returns an error when a dimension is zero or exceeds [`MAX_FIELD_DIMENSION`]
    pub fn size(&self) -> Result<SquareSize> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if !(1..=MAX_FIELD_DIMENSION).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must lie within 1..={MAX_FIELD_DIMENSION}"),
                ));
            }
        }
        Ok(SquareSize::new(self.width, self.height))
    }

    /// Generator configuration described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error when the kind list is empty or a weight is invalid
    pub fn config(&self) -> Result<GeneratorConfig> {
        let registry = match &self.kinds {
            Some(kinds) => SuperpositionRegistry::new(kinds.iter().copied())?,
            None => SuperpositionRegistry::basic(),
        };
        let weights = self
            .weights
            .iter()
            .fold(CategoryWeights::new(), |weights, &(category, weight)| {
                weights.with(category, weight)
            });
        weights.validate()?;
        let policy = if self.fail_on_contradiction {
            ContradictionPolicy::Fail
        } else {
            ContradictionPolicy::Fallback
        };
        Ok(GeneratorConfig::new(registry)
            .with_seed(self.seed)
            .with_weights(weights)
            .with_contradiction_policy(policy))
    }

    /// Repair strategies selected by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error when the cut probability lies outside `0.0..=1.0`
    pub fn plan(&self) -> Result<RepairPlan<SquareTopology>> {
        let mut plan = match self.isolated {
            IsolatedStrategyChoice::RandomMerge => RepairPlan::new().with_isolated(RandomMergeStrategy),
            IsolatedStrategyChoice::OneWayMerge => RepairPlan::new().with_isolated(OneWayMergeStrategy),
            IsolatedStrategyChoice::TeleporterMerge => {
                RepairPlan::new().with_isolated(TeleporterMergeStrategy)
            }
            IsolatedStrategyChoice::None => RepairPlan::new(),
        };
        if let Some(min_length) = self.min_cycle_length {
            plan = plan.with_cycled(MinLengthCycleStrategy::new(min_length));
        }
        if let Some(probability) = self.cut_probability {
            plan = plan.with_edge_cutting(RedundantEdgeCutting::new(probability)?);
        }
        Ok(plan)
    }
}

/// Runs one generation described by the command line
pub struct LabyrinthRunner {
    cli: Cli,
}

impl LabyrinthRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the labyrinth and print its summary
    ///
    /// # Errors
    ///
    /// Returns an error for invalid arguments, contradictions under the
    /// failing policy, or unrepaired issues in strict mode
    pub fn run(&self) -> Result<GenerationReport> {
        let start_time = Instant::now();
        let mut generator = Generator::<SquareTopology>::new(self.cli.size()?, self.cli.config()?)?;
        let mut plan = self.cli.plan()?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| CollapseProgress::new(generator.field().len()));
        while generator.collapse_next()? {
            if let Some(ref progress) = progress {
                progress.update(generator.field().determined_count());
            }
        }
        if let Some(ref progress) = progress {
            progress.finish();
        }

        let report = generator.generate(&mut plan)?;
        if self.cli.should_show_progress() {
            Self::print_summary(&report, start_time);
        }
        if self.cli.strict {
            report.ensure_complete()?;
        }
        Ok(report)
    }

    // Allow print for the final summary, the only output of the tool
    #[allow(clippy::print_stdout)]
    fn print_summary(report: &GenerationReport, start_time: Instant) {
        for line in report.summary_lines() {
            println!("{line}");
        }
        println!("Finished in {:.2?}", start_time.elapsed());
    }
}

//! Dominating set service
//!
//! Parses parent-array text, builds the forest and runs the solver.

use tracing::{debug, info, instrument};

use crate::application::input::parse_parents;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{DominatingSet, DominatingSetSolver, ForestArena, ForestBuilder};

/// Output from solving one input.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Parent array the set was computed for
    pub parents: Vec<Option<usize>>,
    /// The computed minimum dominating set
    pub set: DominatingSet,
}

/// Shape of a validated forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestSummary {
    pub nodes: usize,
    pub roots: usize,
    pub leaves: usize,
    pub depth: usize,
}

impl From<&ForestArena> for ForestSummary {
    fn from(forest: &ForestArena) -> Self {
        Self {
            nodes: forest.len(),
            roots: forest.roots().len(),
            leaves: forest.leaf_nodes().len(),
            depth: forest.depth(),
        }
    }
}

/// Service for computing dominating sets from parent-array input.
pub struct SolveService {
    builder: ForestBuilder,
    root_markers: Vec<String>,
    verify: bool,
}

impl SolveService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            builder: ForestBuilder::new(),
            root_markers: settings.root_markers.clone(),
            verify: settings.verify,
        }
    }

    /// Force verification on regardless of settings.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = self.verify || verify;
        self
    }

    pub fn parse(&self, text: &str) -> ApplicationResult<Vec<Option<usize>>> {
        parse_parents(text, &self.root_markers)
    }

    pub fn solve_text(&self, text: &str) -> ApplicationResult<SolveReport> {
        let parents = self.parse(text)?;
        self.solve(parents)
    }

    #[instrument(level = "debug", skip(self, parents), fields(nodes = parents.len()))]
    pub fn solve(&self, parents: Vec<Option<usize>>) -> ApplicationResult<SolveReport> {
        let forest = self.builder.build(&parents)?;
        self.solve_forest(parents, forest)
    }

    /// Solve and keep the built forest for rendering.
    #[instrument(level = "debug", skip(self, text))]
    pub fn tree_text(&self, text: &str) -> ApplicationResult<(SolveReport, ForestArena)> {
        let (parents, forest) = self.forest_text(text)?;
        let report = self.solve_forest(parents, forest.clone())?;
        Ok((report, forest))
    }

    fn solve_forest(
        &self,
        parents: Vec<Option<usize>>,
        forest: ForestArena,
    ) -> ApplicationResult<SolveReport> {
        let set = DominatingSetSolver::new(forest).compute();
        info!("dominating set of {} nodes has {} members", parents.len(), set.len());

        if self.verify {
            let undominated = set.undominated(&parents);
            if !undominated.is_empty() {
                return Err(ApplicationError::VerificationFailed { undominated });
            }
            debug!("verified: every node is dominated");
        }

        Ok(SolveReport { parents, set })
    }

    /// Parse and build the forest without solving it.
    pub fn forest_text(
        &self,
        text: &str,
    ) -> ApplicationResult<(Vec<Option<usize>>, ForestArena)> {
        let parents = self.parse(text)?;
        let forest = self.builder.build(&parents)?;
        Ok((parents, forest))
    }

    /// Validate input without solving.
    pub fn check_text(&self, text: &str) -> ApplicationResult<ForestSummary> {
        let (_, forest) = self.forest_text(text)?;
        Ok(ForestSummary::from(&forest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_solving_text_then_reports_set() {
        let service = SolveService::new(&Settings::default());

        let report = service.solve_text("[None, 0, 1, 2, 3, 4]").unwrap();

        assert_eq!(report.set.to_vec(), vec![1, 4]);
        assert_eq!(report.parents.len(), 6);
    }

    #[test]
    fn given_verify_setting_when_solving_for_tree_then_keeps_forest_and_set() {
        let settings = Settings {
            verify: true,
            ..Settings::default()
        };
        let service = SolveService::new(&settings);

        let (report, forest) = service.tree_text("None 2 None 4 2 4").unwrap();

        assert_eq!(report.set.to_vec(), vec![0, 2, 4]);
        assert_eq!(forest.len(), 6);
        assert_eq!(forest.roots(), vec![0, 2]);
    }

    #[test]
    fn given_invalid_parent_when_solving_for_tree_then_fails_before_rendering() {
        let service = SolveService::new(&Settings::default());

        let err = service.tree_text("None 0 9").unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(e) if e.is_invalid_input()));
    }

    #[test]
    fn given_cycle_when_checking_then_surfaces_domain_error() {
        let service = SolveService::new(&Settings::default());

        let err = service.check_text("1 0").unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(e) if e.is_structural()));
    }
}

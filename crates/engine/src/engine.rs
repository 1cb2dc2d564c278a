//! Facade tying solver, classifier, builder, animator and accessory
//! positioning to one wall instance.

use tracing::{info, instrument};

use wall_scene::{Color, SceneGraph};
use wall_types::{Config, DimensionReadout, Dimensions, FoldDirection, FoldState};

use crate::builder::{self, MaterialPalette, WallAssembly};
use crate::variant::VariantPolicy;
use crate::{accessory, sequence, solver, EngineError, FoldAnimator};

/// One configurable wall in one scene graph.
///
/// All mutation is frame-driven on the owning thread: configuration
/// changes rebuild the chain synchronously, and [`WallEngine::tick`]
/// advances the fold once per display frame. Rebuild and animation are
/// mutually exclusive phases; a rebuild leaves the new chain at rest.
#[derive(Debug)]
pub struct WallEngine {
    config: Config,
    graph: SceneGraph,
    palette: MaterialPalette,
    assembly: WallAssembly,
    dimensions: Dimensions,
    animator: FoldAnimator,
}

impl WallEngine {
    /// Build a wall for an initial configuration.
    pub fn new(config: Config) -> Result<Self, EngineError> {
        let mut graph = SceneGraph::new();
        let palette = MaterialPalette::standard(&mut graph);
        let direction = VariantPolicy::new(config.variant).initial_direction();

        let dimensions = solver::solve(&config)?;
        let assembly = Self::construct(&mut graph, &palette, &config, &dimensions, direction)?;

        let mut engine = Self {
            config,
            graph,
            palette,
            assembly,
            dimensions,
            animator: FoldAnimator::new(direction),
        };
        accessory::update_wheels(&mut engine.graph, &engine.assembly, &engine.config)?;
        Ok(engine)
    }

    fn construct(
        graph: &mut SceneGraph,
        palette: &MaterialPalette,
        config: &Config,
        dims: &Dimensions,
        direction: FoldDirection,
    ) -> Result<WallAssembly, EngineError> {
        let policy = VariantPolicy::new(config.variant);
        let roles = policy.roles(config.sections, direction);
        let specs = sequence::panel_specs(dims, &roles, direction);
        builder::build(graph, palette, config, dims, &specs, direction)
    }

    /// Build a fresh chain at rest, then tear down the old one.
    ///
    /// The candidate is solved and fully constructed before the old
    /// geometry is touched, so any rejection leaves the last-good wall
    /// on display.
    #[instrument(skip(self), fields(sections = candidate.sections))]
    fn rebuild(
        &mut self,
        candidate: Config,
        direction: FoldDirection,
    ) -> Result<(), EngineError> {
        let dims = solver::solve(&candidate)?;

        let assembly =
            Self::construct(&mut self.graph, &self.palette, &candidate, &dims, direction)?;
        self.graph.remove_subtree(self.assembly.wall_group)?;
        self.assembly = assembly;
        self.config = candidate;
        self.dimensions = dims;
        self.animator.reset(direction);
        accessory::update_wheels(&mut self.graph, &self.assembly, &self.config)?;
        info!("rebuilt wall");
        Ok(())
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Apply new dimensional parameters. Rejected configurations keep
    /// the previous geometry and fold state untouched.
    pub fn set_dimensions(
        &mut self,
        total_length: f64,
        height: f64,
        sections: u32,
    ) -> Result<DimensionReadout, EngineError> {
        let mut candidate = self.config;
        candidate.total_length = total_length;
        candidate.height = height;
        candidate.sections = sections;
        self.rebuild(candidate, self.animator.direction())?;
        Ok(self.readout())
    }

    /// Replace the whole configuration, including the variant.
    pub fn set_config(&mut self, candidate: Config) -> Result<DimensionReadout, EngineError> {
        let direction = if candidate.variant == self.config.variant {
            self.animator.direction()
        } else {
            VariantPolicy::new(candidate.variant).initial_direction()
        };
        self.rebuild(candidate, direction)?;
        Ok(self.readout())
    }

    /// Fold toward the front. Rebuilds the chain so the root offset
    /// matches the new direction, then aims for fully folded.
    pub fn fold_forward(&mut self) -> Result<(), EngineError> {
        self.rebuild(self.config, FoldDirection::Forward)?;
        self.animator.set_target_folded(FoldDirection::Forward);
        Ok(())
    }

    /// Fold toward the back.
    pub fn fold_backward(&mut self) -> Result<(), EngineError> {
        self.rebuild(self.config, FoldDirection::Backward)?;
        self.animator.set_target_folded(FoldDirection::Backward);
        Ok(())
    }

    /// Ease back toward flat. No rebuild; the chain topology is
    /// unchanged.
    pub fn unfold(&mut self) {
        self.animator.set_target_open();
    }

    /// Fold in the latched direction, or unfold if already engaged.
    pub fn toggle_fold(&mut self) -> Result<(), EngineError> {
        if self.animator.is_engaged() {
            self.unfold();
            Ok(())
        } else {
            match self.animator.direction() {
                FoldDirection::Forward => self.fold_forward(),
                FoldDirection::Backward => self.fold_backward(),
            }
        }
    }

    /// Recolor the painted surfaces (infill, legs, track).
    pub fn set_accent_color(&mut self, hex: u32) -> Result<(), EngineError> {
        self.graph
            .set_material_color(self.palette.paint, Color::from_hex(hex))?;
        Ok(())
    }

    /// Advance the fold one frame and refresh accessory positions.
    pub fn tick(&mut self) -> Result<FoldState, EngineError> {
        self.animator.tick(&mut self.graph, &self.assembly)?;
        accessory::update_wheels(&mut self.graph, &self.assembly, &self.config)?;
        Ok(self.animator.state())
    }

    // ── Read-outs ───────────────────────────────────────────────────────

    pub fn readout(&self) -> DimensionReadout {
        DimensionReadout::from(&self.dimensions)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn fold_state(&self) -> FoldState {
        self.animator.state()
    }

    pub fn fold_angle(&self) -> f64 {
        self.animator.fold_angle()
    }

    pub fn assembly(&self) -> &WallAssembly {
        &self.assembly
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }
}

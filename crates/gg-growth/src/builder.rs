//! Fluent builder for [`GraphStream`].

use gg_core::{PrngState, Seed};
use gg_graph::{AdjacencyList, Graph};
use tracing::info;

use crate::{Gravitate, GraphStream, GrowthError, GrowthResult, GrowthTargets, Settings};

/// Builder for [`GraphStream<G>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.settings(s)`  | `Settings::default()`                           |
/// | `.targets(t)`   | derived from the settings' nodes and density    |
/// | `.gravitate(g)` | derived from the settings' model and heterogeneity, scaled to the target node count |
/// | `.rng(state)`   | `PrngState::from_seed(seed)`                    |
/// | `.graph(g)`     | empty `AdjacencyList`                           |
///
/// # Example
///
/// ```rust,ignore
/// let mut stream = GraphStreamBuilder::new(Seed::from_phrase("seed1"))
///     .settings(settings)
///     .build()?;
/// stream.run(&mut NoopObserver)?;
/// ```
pub struct GraphStreamBuilder<G: Graph = AdjacencyList> {
    rng:       PrngState,
    settings:  Settings,
    targets:   Option<GrowthTargets>,
    gravitate: Option<Gravitate>,
    graph:     G,
}

impl GraphStreamBuilder<AdjacencyList> {
    pub fn new(seed: Seed) -> Self {
        Self {
            rng:       PrngState::from_seed(seed),
            settings:  Settings::default(),
            targets:   None,
            gravitate: None,
            graph:     AdjacencyList::new(),
        }
    }
}

impl<G: Graph> GraphStreamBuilder<G> {
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Use explicit targets instead of deriving the edge count from density.
    pub fn targets(mut self, targets: GrowthTargets) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn gravitate(mut self, gravitate: Gravitate) -> Self {
        self.gravitate = Some(gravitate);
        self
    }

    /// Start from an explicit PRNG state rather than the seed's.
    pub fn rng(mut self, rng: PrngState) -> Self {
        self.rng = rng;
        self
    }

    /// Grow into caller-supplied storage.  It must be empty at build time.
    pub fn graph<H: Graph>(self, graph: H) -> GraphStreamBuilder<H> {
        GraphStreamBuilder {
            rng:       self.rng,
            settings:  self.settings,
            targets:   self.targets,
            gravitate: self.gravitate,
            graph,
        }
    }

    pub fn build(self) -> GrowthResult<GraphStream<G>> {
        let vertices = self.graph.vertex_count();
        if vertices != 0 {
            return Err(GrowthError::GraphNotEmpty { vertices });
        }
        let targets = match self.targets {
            Some(t) => t,
            None => GrowthTargets::from_settings(&self.settings)?,
        };
        let gravitate = match self.gravitate {
            Some(g) => g,
            None => Gravitate::for_nodes(&self.settings, targets.nodes())?,
        };
        info!(
            nodes = targets.nodes(),
            edges = targets.edges(),
            model = %self.settings.branching_model,
            heterogeneity = self.settings.heterogeneity.get(),
            "graph stream ready"
        );
        Ok(GraphStream::from_parts(self.graph, targets, gravitate, self.rng))
    }
}

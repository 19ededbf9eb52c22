//! Tests for gg-growth.

use std::collections::HashSet;

use gg_core::{NodeIndex, Seed};
use gg_graph::{AdjacencyList, GraphSink, GraphStreamOp, GraphView};

use crate::{BranchingModel, GraphStream, GraphStreamItem, GrowthResult, Settings, SettingsInput};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn settings(nodes: usize, density: f64, heterogeneity: f64, model: BranchingModel) -> Settings {
    SettingsInput {
        heterogeneity:   Some(heterogeneity),
        density:         Some(density),
        nodes:           Some(nodes),
        branching_model: Some(model),
    }
    .resolve()
    .unwrap()
}

fn items(seed: Seed, settings: &Settings) -> Vec<GraphStreamItem> {
    GraphStream::new(seed, settings)
        .unwrap()
        .collect::<GrowthResult<Vec<_>>>()
        .unwrap()
}

/// No self-loops, no parallel edges, counts consistent.
fn assert_simple(graph: &AdjacencyList) {
    let edges: Vec<_> = graph.edges().collect();
    assert!(edges.iter().all(|(from, to)| from != to), "self-loop in {edges:?}");
    let unique: HashSet<_> = edges.iter().copied().collect();
    assert_eq!(unique.len(), edges.len(), "parallel edge");
    assert_eq!(edges.len(), graph.edge_count());
}

fn seed1() -> Seed {
    Seed::from_phrase("seed1")
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod settings_tests {
    use std::str::FromStr;

    use rstest::rstest;

    use crate::{BranchingModel, GrowthError, Settings, SettingsInput};

    #[test]
    fn empty_input_resolves_to_defaults() {
        let s = SettingsInput::default().resolve().unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.heterogeneity.get(), 0.3);
        assert_eq!(s.density.get(), 0.5);
        assert_eq!(s.nodes, 30);
        assert_eq!(s.branching_model, BranchingModel::BarabasiAlbert);
    }

    #[test]
    fn merge_prefers_the_overlay() {
        let base = SettingsInput { nodes: Some(10), density: Some(0.2), ..Default::default() };
        let over = SettingsInput { density: Some(0.9), ..Default::default() };
        let merged = base.merge(over);
        assert_eq!(merged.nodes, Some(10));
        assert_eq!(merged.density, Some(0.9));
        assert_eq!(merged.heterogeneity, None);
    }

    #[rstest]
    #[case(Some(1.5), None)]
    #[case(Some(-0.1), None)]
    #[case(None, Some(2.0))]
    #[case(Some(f64::NAN), None)]
    fn out_of_range_knobs_are_validation_errors(#[case] h: Option<f64>, #[case] d: Option<f64>) {
        let err = SettingsInput { heterogeneity: h, density: d, ..Default::default() }
            .resolve()
            .unwrap_err();
        assert!(matches!(err, GrowthError::Domain(_)));
        assert!(!err.is_invariant());
    }

    #[rstest]
    #[case("barabasi-albert", BranchingModel::BarabasiAlbert)]
    #[case("dnd", BranchingModel::Dnd)]
    fn model_names_round_trip(#[case] name: &str, #[case] model: BranchingModel) {
        assert_eq!(BranchingModel::from_str(name).unwrap(), model);
        assert_eq!(model.to_string(), name);
    }

    #[test]
    fn unknown_model_name_is_rejected() {
        let err = BranchingModel::from_str("erdos-renyi").unwrap_err();
        assert!(err.to_string().contains("erdos-renyi"));
    }
}

// ── Targets ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod targets_tests {
    use rstest::rstest;

    use super::settings;
    use crate::{max_edges, BranchingModel, GrowthError, GrowthTargets};

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 2)]
    #[case(5, 20)]
    #[case(30, 870)]
    fn max_edge_counts(#[case] vertices: usize, #[case] expected: usize) {
        assert_eq!(max_edges(vertices), expected);
        let v = vertices as i64;
        if vertices > 0 {
            assert_eq!((v + 1).pow(2) - 3 * (v + 1) + 2, expected as i64);
        }
    }

    #[rstest]
    #[case(30, 0.5, 450)]
    #[case(30, 0.0, 29)]
    #[case(30, 1.0, 870)]
    #[case(5, 1.0, 20)]
    #[case(2, 0.0, 1)]
    #[case(1, 0.7, 0)]
    #[case(0, 0.5, 0)]
    #[case(100, 1.0, 4000)]
    #[case(5000, 0.0, 4999)]
    #[case(5000, 1.0, 4999)]
    fn edges_from_density(#[case] nodes: usize, #[case] density: f64, #[case] edges: usize) {
        let s = settings(nodes, density, 0.3, BranchingModel::BarabasiAlbert);
        let t = GrowthTargets::from_settings(&s).unwrap();
        assert_eq!(t.nodes(), nodes);
        assert_eq!(t.edges(), edges);
    }

    #[test]
    fn infeasible_targets_fail_before_generation() {
        let err = GrowthTargets::new(3, 7).unwrap_err();
        assert_eq!(err, GrowthError::Infeasible { nodes: 3, edges: 7, max: 6 });
        assert!(!err.is_invariant());
        assert!(GrowthTargets::new(3, 6).is_ok());
    }
}

// ── Gravitate ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod gravitate_tests {
    use gg_core::{Decimal01, Heterogeneity, NodeIndex, PositiveCount, PrngState, Seed, Uniform01};
    use gg_dist::{BiasedRoll, Nlpa};
    use gg_graph::{AdjacencyList, GraphSink};
    use proptest::prelude::*;

    use super::settings;
    use crate::gravitate::scale_to_index;
    use crate::{BranchingModel, Gravitate, GrowthError, Invariant};

    /// Five vertices; node 2 points at every other node.
    fn hub() -> AdjacencyList {
        let mut g = AdjacencyList::new();
        for i in 0..5 {
            g.add_vertex(NodeIndex(i));
        }
        for to in [0, 1, 3, 4] {
            g.add_edge(NodeIndex(2), NodeIndex(to));
        }
        g
    }

    #[test]
    fn model_selects_strategy() {
        let ba = Gravitate::from_settings(&settings(30, 0.5, 0.75, BranchingModel::BarabasiAlbert)).unwrap();
        match ba {
            Gravitate::Nlpa(nlpa) => assert_eq!(nlpa.alpha().get(), 15.5),
            other => panic!("expected NLPA, got {other:?}"),
        }
        let dnd = Gravitate::from_settings(&settings(30, 0.5, 0.75, BranchingModel::Dnd)).unwrap();
        match dnd {
            Gravitate::BiasedUniform(roll) => assert_eq!(roll.bias().get(), 0.75),
            other => panic!("expected biased roll, got {other:?}"),
        }
    }

    #[test]
    fn zero_nodes_falls_back_to_unbounded_alpha() {
        let g = Gravitate::from_settings(&settings(0, 0.5, 0.75, BranchingModel::BarabasiAlbert)).unwrap();
        assert_eq!(g, Gravitate::Nlpa(Nlpa::new(gg_core::Decimal0n::new(1.5).unwrap())));
    }

    #[test]
    fn empty_graph_is_an_invariant_failure() {
        let err = Gravitate::Nlpa(Nlpa::default())
            .pick(&AdjacencyList::new(), PrngState::from_seed(Seed(1)))
            .unwrap_err();
        assert_eq!(err, GrowthError::Invariant(Invariant::EmptyGraph));
        assert!(err.is_invariant());
    }

    #[test]
    fn nlpa_favours_high_out_degree_candidate() {
        // Weights among [0, 2, 4]: 1, 5, 1.  Node 2 wins for r <= 5/7.
        let g = hub();
        let candidates = [NodeIndex(0), NodeIndex(2), NodeIndex(4)];
        let gravitate = Gravitate::Nlpa(Nlpa::default());
        let mut hub_hits = 0;
        for s in 0..300 {
            let (picked, _) = gravitate.pick_among(&g, &candidates, PrngState::from_seed(Seed(s))).unwrap();
            assert!(candidates.contains(&picked));
            if picked == NodeIndex(2) {
                hub_hits += 1;
            }
        }
        assert!(hub_hits > 180, "hub picked {hub_hits}/300 times");
    }

    #[test]
    fn dnd_extremes_pin_first_and_last() {
        let g = hub();
        let candidates = [NodeIndex(4), NodeIndex(1), NodeIndex(3)];
        let low = Gravitate::BiasedUniform(BiasedRoll::new(Decimal01::ZERO));
        let high = Gravitate::BiasedUniform(BiasedRoll::new(Heterogeneity::new(1.0).unwrap().into()));
        for s in 0..20 {
            let rng = PrngState::from_seed(Seed(s));
            assert_eq!(low.pick_among(&g, &candidates, rng).unwrap().0, NodeIndex(4));
            assert_eq!(high.pick_among(&g, &candidates, rng).unwrap().0, NodeIndex(3));
            assert_eq!(high.pick(&g, rng).unwrap().0, NodeIndex(4));
        }
    }

    #[test]
    fn every_pick_draws_at_least_once() {
        let g = hub();
        let rng = PrngState::from_seed(Seed(9));
        let (_, after) = Gravitate::Nlpa(Nlpa::default()).pick(&g, rng).unwrap();
        assert_eq!(after, rng.next().1);
    }

    #[test]
    fn scale_to_index_stays_in_bounds() {
        let three = PositiveCount::new(3).unwrap();
        assert_eq!(scale_to_index(Uniform01::ZERO, three), 0);
        assert_eq!(scale_to_index(Uniform01::new(0.5).unwrap(), three), 1);
        assert_eq!(scale_to_index(Uniform01::MAX, three), 2);
    }

    proptest! {
        #[test]
        fn scaled_index_below_len(v in 0.0f64..1.0, len in 1usize..100_000) {
            let len = PositiveCount::new(len).unwrap();
            prop_assert!(scale_to_index(Uniform01::new(v).unwrap(), len) < len.get());
        }
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod link_tests {
    use gg_core::{NodeIndex, PrngState, Seed};
    use gg_dist::Nlpa;
    use gg_graph::{AdjacencyList, Direction, GraphSink, GraphStreamOp, GraphView};

    use crate::link::{abundance, link_candidates};
    use crate::{link, Gravitate, GrowthError, GrowthTargets, Invariant, LinkState, Phase};

    fn path(n: u32) -> AdjacencyList {
        let mut g = AdjacencyList::new();
        g.add_vertex(NodeIndex(0));
        for i in 1..n {
            g.add_vertex(NodeIndex(i));
            g.add_edge(NodeIndex(i - 1), NodeIndex(i));
        }
        g
    }

    fn classify(g: &AdjacencyList, nodes: usize, edges: usize) -> Phase {
        let state = LinkState { graph: g, next_vertex_id: NodeIndex(g.vertex_count() as u32) };
        Phase::classify(&state, &GrowthTargets::new(nodes, edges).unwrap())
    }

    #[test]
    fn phases() {
        let empty = AdjacencyList::new();
        assert_eq!(classify(&empty, 3, 2), Phase::Bootstrap);
        assert_eq!(classify(&empty, 0, 0), Phase::Done);
        assert_eq!(classify(&path(1), 1, 0), Phase::Done);
        assert_eq!(classify(&path(2), 3, 4), Phase::Genesis);
        assert_eq!(classify(&path(3), 3, 4), Phase::Abundance);
        assert_eq!(classify(&path(3), 3, 2), Phase::Done);
        // Edge target below the spanning minimum stops early.
        assert_eq!(classify(&path(2), 4, 1), Phase::Done);
    }

    #[test]
    fn bootstrap_consumes_no_randomness() {
        let g = AdjacencyList::new();
        let state = LinkState { graph: &g, next_vertex_id: NodeIndex(0) };
        let rng = PrngState::from_seed(Seed(3));
        let (ops, after) =
            link(&state, &GrowthTargets::new(2, 1).unwrap(), &Gravitate::Nlpa(Nlpa::default()), rng).unwrap();
        assert_eq!(ops, Some(vec![GraphStreamOp::AddNode { id: NodeIndex(0) }]));
        assert_eq!(after, rng);
    }

    #[test]
    fn genesis_adds_node_then_edge_to_it() {
        let g = path(3);
        let state = LinkState { graph: &g, next_vertex_id: NodeIndex(3) };
        let (ops, _) = link(
            &state,
            &GrowthTargets::new(5, 4).unwrap(),
            &Gravitate::Nlpa(Nlpa::default()),
            PrngState::from_seed(Seed(3)),
        )
        .unwrap();
        let ops = ops.unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], GraphStreamOp::AddNode { id: NodeIndex(3) });
        match ops[1] {
            GraphStreamOp::AddEdge { from, to } => {
                assert_eq!(to, NodeIndex(3));
                assert!(from.index() < 3);
            }
            other => panic!("expected edge, got {other}"),
        }
    }

    #[test]
    fn abundance_adds_a_fresh_edge() {
        let g = path(3);
        let state = LinkState { graph: &g, next_vertex_id: NodeIndex(3) };
        for s in 0..50 {
            let (ops, _) = link(
                &state,
                &GrowthTargets::new(3, 6).unwrap(),
                &Gravitate::Nlpa(Nlpa::default()),
                PrngState::from_seed(Seed(s)),
            )
            .unwrap();
            match ops.unwrap().as_slice() {
                &[GraphStreamOp::AddEdge { from, to }] => {
                    assert_ne!(from, to);
                    assert!(!g.has_edge(from, to), "{from} -> {to} already exists");
                }
                other => panic!("expected one edge, got {other:?}"),
            }
        }
    }

    #[test]
    fn candidates_exclude_saturated_vertices() {
        // 0 -> 1, 0 -> 2: node 0 has no free out slot.
        let mut g = AdjacencyList::new();
        for i in 0..3 {
            g.add_vertex(NodeIndex(i));
        }
        g.add_edge(NodeIndex(0), NodeIndex(1));
        g.add_edge(NodeIndex(0), NodeIndex(2));
        assert_eq!(link_candidates(&g, Direction::Out), vec![NodeIndex(1), NodeIndex(2)]);
        assert_eq!(link_candidates(&g, Direction::In), vec![NodeIndex(0), NodeIndex(1), NodeIndex(2)]);
    }

    /// Wraps a real graph but lies about edge count or degrees.
    struct Lying {
        inner:     AdjacencyList,
        edges:     Option<usize>,
        saturated: Option<Direction>,
    }

    impl Lying {
        fn new(inner: AdjacencyList) -> Self {
            Self { inner, edges: None, saturated: None }
        }
    }

    impl GraphView for Lying {
        fn vertex_count(&self) -> usize {
            self.inner.vertex_count()
        }
        fn edge_count(&self) -> usize {
            self.edges.unwrap_or_else(|| self.inner.edge_count())
        }
        fn degree(&self, v: NodeIndex, direction: Direction) -> usize {
            if self.saturated == Some(direction) {
                self.inner.vertex_count() - 1
            } else {
                self.inner.degree(v, direction)
            }
        }
        fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
            self.inner.has_edge(from, to)
        }
        fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
            self.inner.vertices()
        }
    }

    fn abundance_step(g: &Lying) -> GrowthError {
        let state = LinkState { graph: g, next_vertex_id: NodeIndex(3) };
        link(
            &state,
            &GrowthTargets::new(3, 6).unwrap(),
            &Gravitate::Nlpa(Nlpa::default()),
            PrngState::from_seed(Seed(3)),
        )
        .unwrap_err()
    }

    #[test]
    fn saturated_graph_is_refused() {
        let g = Lying { edges: Some(6), ..Lying::new(path(3)) };
        let err: GrowthError = abundance(&g, &Gravitate::Nlpa(Nlpa::default()), PrngState::from_seed(Seed(3)))
            .unwrap_err();
        assert!(err.is_invariant(), "{err}");
        assert_eq!(err, GrowthError::Invariant(Invariant::EdgeCapacity { vertices: 3, edges: 6, max: 6 }));
    }

    #[test]
    fn no_free_incoming_slot_is_an_invariant() {
        let g = Lying { saturated: Some(Direction::In), ..Lying::new(path(3)) };
        let err = abundance_step(&g);
        assert!(err.is_invariant(), "{err}");
        assert_eq!(err, GrowthError::Invariant(Invariant::NoCandidates("incoming")));
    }

    #[test]
    fn no_free_outgoing_slot_is_an_invariant() {
        let g = Lying { saturated: Some(Direction::Out), ..Lying::new(path(3)) };
        let err = abundance_step(&g);
        assert!(err.is_invariant(), "{err}");
        assert_eq!(err, GrowthError::Invariant(Invariant::NoCandidates("outgoing")));
    }
}

// ── Stream ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stream_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        generate, generate_batch, GraphStreamBuilder, GrowthError, GrowthObserver, GrowthTargets, Gravitate,
        GraphStreamState, Invariant, Phase,
    };
    use gg_core::PrngState;
    use gg_dist::Nlpa;
    use gg_graph::Direction;

    #[test]
    fn single_node_without_edges() {
        let out = items(seed1(), &settings(1, 0.0, 0.3, BranchingModel::BarabasiAlbert));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].op, GraphStreamOp::AddNode { id: NodeIndex(0) });
        assert_eq!(out[0].progress.edges_left, 0);
        assert_eq!(out[0].progress.total_edges, 0);
    }

    #[test]
    fn zero_nodes_emit_nothing() {
        let out = items(seed1(), &settings(0, 0.5, 0.3, BranchingModel::BarabasiAlbert));
        assert!(out.is_empty());
    }

    #[test]
    fn same_seed_same_run() {
        for model in BranchingModel::ALL {
            let s = settings(25, 0.4, 0.6, model);
            let a = items(seed1(), &s);
            let b = items(seed1(), &s);
            assert_eq!(a, b);
            let da = generate(seed1(), &s).unwrap();
            let db = generate(seed1(), &s).unwrap();
            assert_eq!(da.rng, db.rng);
            assert_eq!(da.graph.edges().collect::<Vec<_>>(), db.graph.edges().collect::<Vec<_>>());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let s = Settings::default();
        assert_ne!(items(seed1(), &s), items(Seed::from_phrase("seed2"), &s));
    }

    #[test]
    fn node_ids_are_contiguous() {
        for model in BranchingModel::ALL {
            let out = items(seed1(), &settings(40, 0.3, 0.5, model));
            let ids: Vec<u32> = out
                .iter()
                .filter_map(|item| match item.op {
                    GraphStreamOp::AddNode { id } => Some(id.0),
                    _ => None,
                })
                .collect();
            assert_eq!(ids, (0..40).collect::<Vec<_>>());
        }
    }

    #[test]
    fn edges_only_reference_existing_nodes() {
        let mut seen = HashSet::new();
        for item in items(seed1(), &Settings::default()) {
            match item.op {
                GraphStreamOp::AddNode { id } => {
                    seen.insert(id);
                }
                GraphStreamOp::AddEdge { from, to } => {
                    assert!(seen.contains(&from) && seen.contains(&to), "{}", item.op);
                }
            }
        }
    }

    #[test]
    fn default_settings_reach_their_targets() {
        let done = generate(seed1(), &Settings::default()).unwrap();
        assert_eq!(done.graph.vertex_count(), 30);
        assert_eq!(done.graph.edge_count(), 450);
        assert_eq!(done.progress, GraphStreamState { edges_left: 0, total_edges: 450 });
        assert_simple(&done.graph);
    }

    #[test]
    fn dnd_reaches_its_targets() {
        let done = generate(seed1(), &settings(30, 0.5, 0.9, BranchingModel::Dnd)).unwrap();
        assert_eq!(done.graph.vertex_count(), 30);
        assert_eq!(done.graph.edge_count(), 450);
        assert_simple(&done.graph);
    }

    #[test]
    fn full_density_builds_the_complete_digraph() {
        for model in BranchingModel::ALL {
            let done = generate(seed1(), &settings(6, 1.0, 0.3, model)).unwrap();
            assert_eq!(done.graph.edge_count(), 30);
            assert_simple(&done.graph);
            for v in done.graph.vertices() {
                assert_eq!(done.graph.degree(v, Direction::Out), 5);
                assert_eq!(done.graph.degree(v, Direction::In), 5);
            }
        }
    }

    #[test]
    fn progress_counts_down() {
        let out = items(seed1(), &Settings::default());
        assert!(out.windows(2).all(|w| w[1].progress.edges_left <= w[0].progress.edges_left));
        assert!(out.iter().all(|i| i.progress.total_edges == 450));
        assert_eq!(out.last().unwrap().progress.edges_left, 0);
        let edges = out.iter().filter(|i| i.op.is_edge()).count();
        assert_eq!(edges, 450);
    }

    #[test]
    fn genesis_pair_shares_one_rng_state() {
        let out = items(seed1(), &settings(10, 0.0, 0.3, BranchingModel::BarabasiAlbert));
        // addNode(0), then (addNode(k), addEdge(_, k)) pairs.
        for pair in out[1..].chunks(2) {
            assert_eq!(pair[0].rng, pair[1].rng);
        }
        assert_eq!(out[0].rng, PrngState::from_seed(seed1()));
    }

    #[test]
    fn stream_ends_and_stays_ended() {
        let mut stream = GraphStream::new(seed1(), &settings(3, 0.0, 0.3, BranchingModel::Dnd)).unwrap();
        let n = stream.by_ref().count();
        assert_eq!(n, 5);
        assert!(stream.is_finished());
        assert_eq!(stream.phase(), Some(Phase::Done));
        assert!(stream.next().is_none());
        assert!(stream.step().unwrap().is_none());
    }

    #[derive(Default)]
    struct Recorder {
        phases:   Vec<Phase>,
        ops:      usize,
        finished: Vec<GraphStreamState>,
    }

    impl GrowthObserver for Recorder {
        fn on_phase(&mut self, phase: Phase) {
            self.phases.push(phase);
        }
        fn on_op(&mut self, _item: &GraphStreamItem) {
            self.ops += 1;
        }
        fn on_finish(&mut self, progress: &GraphStreamState) {
            self.finished.push(*progress);
        }
    }

    #[test]
    fn observer_sees_every_phase_once() {
        let mut rec = Recorder::default();
        let mut stream = GraphStream::new(seed1(), &Settings::default()).unwrap();
        stream.run(&mut rec).unwrap();
        assert_eq!(rec.phases, vec![Phase::Bootstrap, Phase::Genesis, Phase::Abundance, Phase::Done]);
        assert_eq!(rec.ops, 30 + 450);
        assert_eq!(rec.finished, vec![GraphStreamState { edges_left: 0, total_edges: 450 }]);
    }

    #[test]
    fn builder_rejects_prefilled_graph() {
        let mut g = AdjacencyList::new();
        g.add_vertex(NodeIndex(0));
        let err = GraphStreamBuilder::new(seed1()).graph(g).build().err().unwrap();
        assert_eq!(err, GrowthError::GraphNotEmpty { vertices: 1 });
    }

    #[test]
    fn explicit_targets_override_density() {
        let mut stream = GraphStreamBuilder::new(seed1())
            .targets(GrowthTargets::new(4, 5).unwrap())
            .build()
            .unwrap();
        let progress = stream.run(&mut crate::NoopObserver).unwrap();
        assert_eq!(progress.total_edges, 5);
        assert_eq!(stream.graph().vertex_count(), 4);
        assert_eq!(stream.graph().edge_count(), 5);
    }

    #[test]
    fn explicit_targets_rescale_the_exponent() {
        let stream = GraphStreamBuilder::new(seed1())
            .settings(settings(30, 0.5, 0.75, BranchingModel::BarabasiAlbert))
            .targets(GrowthTargets::new(100, 200).unwrap())
            .build()
            .unwrap();
        match stream.gravitate() {
            Gravitate::Nlpa(nlpa) => assert!((nlpa.alpha().get() - 50.5).abs() < 1e-12),
            other => panic!("expected nlpa, got {other:?}"),
        }
    }

    #[test]
    fn explicit_rng_matches_seed() {
        let from_seed: Vec<_> = GraphStreamBuilder::new(seed1()).build().unwrap().collect();
        let from_state: Vec<_> = GraphStreamBuilder::new(Seed(0))
            .rng(PrngState::from_seed(seed1()))
            .build()
            .unwrap()
            .collect();
        assert_eq!(from_seed, from_state);
    }

    /// Reports twice the real edge count, so the NLPA weight sum cannot match.
    #[derive(Default)]
    struct DoubleCounting(AdjacencyList);

    impl GraphView for DoubleCounting {
        fn vertex_count(&self) -> usize {
            self.0.vertex_count()
        }
        fn edge_count(&self) -> usize {
            2 * self.0.edge_count()
        }
        fn degree(&self, v: NodeIndex, direction: Direction) -> usize {
            self.0.degree(v, direction)
        }
        fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
            self.0.has_edge(from, to)
        }
        fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
            self.0.vertices()
        }
    }

    impl GraphSink for DoubleCounting {
        fn add_vertex(&mut self, id: NodeIndex) {
            self.0.add_vertex(id);
        }
        fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
            self.0.add_edge(from, to);
        }
    }

    #[test]
    fn invariant_failure_aborts_and_fuses_the_stream() {
        let mut stream = GraphStreamBuilder::new(seed1())
            .graph(DoubleCounting::default())
            .targets(GrowthTargets::new(3, 3).unwrap())
            .gravitate(Gravitate::Nlpa(Nlpa::default()))
            .build()
            .unwrap();
        let ops: Vec<_> = (0..3).map(|_| stream.step().unwrap().unwrap().op).collect();
        assert_eq!(ops[0], GraphStreamOp::AddNode { id: NodeIndex(0) });
        assert_eq!(ops[1], GraphStreamOp::AddNode { id: NodeIndex(1) });
        assert_eq!(ops[2], GraphStreamOp::AddEdge { from: NodeIndex(0), to: NodeIndex(1) });

        let err = stream.step().unwrap_err();
        assert!(err.is_invariant(), "{err}");
        assert!(matches!(err, GrowthError::Distribution(_)));
        assert!(stream.step().unwrap().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn overshooting_edges_is_reported() {
        let mut stream = GraphStreamBuilder::new(seed1())
            .graph(DoubleCounting::default())
            .targets(GrowthTargets::new(2, 1).unwrap())
            .build()
            .unwrap();
        stream.step().unwrap();
        stream.step().unwrap();
        // Third op is the edge; the double count puts the graph at 2 of 1.
        let err = stream.step().unwrap_err();
        assert_eq!(err, GrowthError::Invariant(Invariant::EdgesOvershot { edges: 2, target: 1 }));
    }

    #[test]
    fn batch_matches_individual_runs() {
        let seeds = [Seed(1), Seed(2), Seed::from_phrase("seed1")];
        let s = settings(15, 0.6, 0.4, BranchingModel::Dnd);
        let batch = generate_batch(&seeds, &s);
        assert_eq!(batch.len(), seeds.len());
        for (seed, result) in seeds.iter().zip(batch) {
            let one = generate(*seed, &s).unwrap();
            let many = result.unwrap();
            assert_eq!(one.rng, many.rng);
            assert_eq!(one.graph.edges().collect::<Vec<_>>(), many.graph.edges().collect::<Vec<_>>());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn any_feasible_settings_complete(
            nodes in 0usize..14,
            density in 0.0f64..=1.0,
            heterogeneity in 0.0f64..=1.0,
            dnd in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let model = if dnd { BranchingModel::Dnd } else { BranchingModel::BarabasiAlbert };
            let s = settings(nodes, density, heterogeneity, model);
            let target = GrowthTargets::from_settings(&s).unwrap();
            let done = generate(Seed(seed), &s).unwrap();
            prop_assert_eq!(done.graph.vertex_count(), nodes);
            prop_assert_eq!(done.graph.edge_count(), target.edges());
            prop_assert_eq!(done.progress.edges_left, 0);
            assert_simple(&done.graph);
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn settings_input_reads_camel_case_json() {
        let input: SettingsInput = serde_json::from_str(r#"{"nodes":12,"branchingModel":"dnd"}"#).unwrap();
        assert_eq!(input.nodes, Some(12));
        assert_eq!(input.branching_model, Some(BranchingModel::Dnd));
        assert_eq!(input.density, None);
    }

    #[test]
    fn resolved_settings_reject_bad_knobs() {
        let bad = r#"{"heterogeneity":1.2,"density":0.5,"nodes":3,"branchingModel":"dnd"}"#;
        assert!(serde_json::from_str::<Settings>(bad).is_err());
    }

    #[test]
    fn item_wire_shape() {
        let first = items(seed1(), &Settings::default()).remove(0);
        let json = serde_json::to_value(&first).unwrap();
        assert_eq!(json["op"], serde_json::json!({"op": "addNode", "id": 0}));
        assert_eq!(json["progress"], serde_json::json!({"edgesLeft": 450, "totalEdges": 450}));
        assert!(json["rng"].is_array());
        let back: GraphStreamItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, first);
    }
}

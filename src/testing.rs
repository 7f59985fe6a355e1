/// Conformance suite every graph representation has to pass.
///
/// `test_graph_store!(module, Graph, undirected, (Suites...))` creates a test module running the
/// listed suites on seeded random graphs. Coloring is only checked for undirected graphs.
macro_rules! test_graph_store {
    ($env:ident, $graph:ident, $undirected:literal, ($($suite:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, ops::*, repr::*, testing::test_graph_store, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            fn config() -> GraphConfig {
                GraphConfig::new(!$undirected, false)
            }

            /// Creates a list of at most `m_ub` random distinct edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Creates random edges with integral weights in `0..10`
            fn random_weighted_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<WeightedEdge> {
                random_edges(rng, n, m_ub)
                    .into_iter()
                    .map(|e| e.with_weight(rng.random_range(0..10) as Weight))
                    .collect_vec()
            }

            fn neighbors_as_bitset<G: AdjacencyList>(graph: &G, u: Node) -> NodeBitSet {
                let mut set = graph.vertex_bitset_unset();
                for v in graph.neighbors_of(u).unwrap() {
                    set.set_bit(v);
                }
                set
            }

            $(
                test_graph_store!($graph<$undirected>: $suite);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::from_edges(config(), n, Vec::<Edge>::new()).unwrap();

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_directed(), !$undirected);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.labels().collect_vec(), (0..n).map(|u| u.to_string()).collect_vec());
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);

                            if $undirected {
                                adj_matrix[v as usize].set_bit(u);
                            }
                        }

                        let graph = <$graph>::from_edges(config(), n, edges.iter().copied()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.edges().map(|e| e.edge()).sorted().collect_vec());

                        for u in 0..n {
                            assert_eq!(neighbors_as_bitset(&graph, u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u).unwrap(), adj_matrix[u as usize].cardinality() as NumNodes);

                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v).unwrap(), adj_matrix[u as usize].get_bit(v));
                                if $undirected {
                                    assert_eq!(graph.has_edge(u, v).unwrap(), graph.has_edge(v, u).unwrap());
                                }
                            }
                        }

                        assert!(graph.neighbors_of(n).is_err());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: CrossVariant) => {
        #[test]
        fn test_cross_variant() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 30] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, n * 4);

                    let graph = <$graph>::from_edges(config(), n, edges.iter().copied()).unwrap();
                    let list = AdjList::from_edges(config(), n, edges.iter().copied()).unwrap();
                    let matrix = AdjMatrix::from_edges(config(), n, edges.iter().copied()).unwrap();

                    for u in 0..n {
                        let neighbors = graph.ordered_neighbors_of(u).unwrap();
                        assert_eq!(neighbors, list.ordered_neighbors_of(u).unwrap());
                        assert_eq!(neighbors, matrix.ordered_neighbors_of(u).unwrap());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::from_edges(config(), n, Vec::<Edge>::new()).unwrap();
                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];

                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            assert!(graph.insert_edge(u, v, 1.0).unwrap());
                            // the reverse direction is the same logical edge
                            if $undirected {
                                adj_matrix[v as usize].set_bit(u);
                                assert!(!graph.insert_edge(v, u, 1.0).unwrap());
                            }
                        }
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].clear_bit(v) {
                                assert!(graph.remove_edge(u, v).unwrap());
                                m -= 1;

                                if $undirected && u != v {
                                    assert!(adj_matrix[v as usize].clear_bit(u));
                                    assert!(!graph.has_edge(v, u).unwrap());
                                }
                            } else {
                                assert!(!graph.remove_edge(u, v).unwrap());
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for Edge(u, v) in graph.edges().map(|e| e.edge()).collect_vec() {
                            assert!(graph.remove_edge(u, v).unwrap());
                        }
                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: Traversal) => {
        #[test]
        fn test_traversal() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n / 2, n, n * 3] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(config(), n, edges).unwrap();

                        for start in [0, n / 2, n - 1] {
                            let bfs = graph.bfs(start).unwrap();
                            let dfs = graph.dfs(start).unwrap();
                            let paths = graph.dijkstra(start).unwrap();

                            assert_eq!(bfs[0], start);
                            assert_eq!(dfs[0], start);
                            assert!(bfs.iter().all_unique());
                            assert!(dfs.iter().all_unique());

                            let reachable = graph.vertices().filter(|&v| paths.is_reachable(v)).collect_vec();
                            assert_eq!(bfs.iter().copied().sorted().collect_vec(), reachable);
                            assert_eq!(dfs.iter().copied().sorted().collect_vec(), reachable);

                            // nodes are discovered in order of their hop distance
                            assert!(bfs.iter().tuple_windows().all(|(&u, &v)| paths.distance_to(u) <= paths.distance_to(v)));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: ShortestPath) => {
        #[test]
        fn test_shortest_path() {
            let rng = &mut Pcg64Mcg::seed_from_u64(11);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n, n * 3] {
                    for _ in 0..5 {
                        let edges = random_weighted_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(config().weighted(), n, edges).unwrap();

                        let source = rng.random_range(0..n);
                        let paths = graph.dijkstra(source).unwrap();
                        assert_eq!(paths.distance_to(source), 0.0);

                        for v in graph.vertices() {
                            let Some(path) = paths.path_to(v) else {
                                assert!(!paths.is_reachable(v));
                                assert_eq!(paths.predecessor_of(v), None);
                                continue;
                            };

                            assert_eq!(path[0], source);
                            let length: Weight = path
                                .iter()
                                .tuple_windows()
                                .map(|(&u, &v)| graph.weight_of(u, v).unwrap())
                                .sum();
                            assert_eq!(length, paths.distance_to(v));
                        }

                        for WeightedEdge { origin, destination, weight } in graph.weighted_edges(false) {
                            if paths.is_reachable(origin) {
                                assert!(paths.distance_to(destination) <= paths.distance_to(origin) + weight);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphColoring) => {
        #[test]
        fn test_coloring() {
            assert!($undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(13);

            for n in [4 as NumNodes, 7, 9, 20, 50] {
                for m_ub in [n, n * 2, n * 4] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(config(), n, edges).unwrap();

                        let heuristics = [
                            graph.color_welsh_powell().unwrap(),
                            graph.color_dsatur().unwrap(),
                            graph.color_greedy().unwrap(),
                        ];
                        for coloring in &heuristics {
                            assert!(coloring.is_proper(&graph).unwrap());
                        }

                        if n <= 9 {
                            let optimal = graph.color_exhaustive().unwrap();
                            assert!(optimal.is_proper(&graph).unwrap());
                            for coloring in &heuristics {
                                assert!(optimal.num_colors() <= coloring.num_colors());
                            }
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_store;

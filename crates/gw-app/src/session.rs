//! The single state container for one loaded graph.

use std::path::Path;
use std::time::Duration;

use gw_client::ServiceClient;
use gw_graph::{EdgeRecord, Graph, GraphError, parse_edge_lines};
use gw_layout::{Layout, LayoutConfig, solve_layout};
use gw_traverse::{Algorithm, StepOutcome, TraversalEngine, TraversalState};
use tracing::info;

use crate::classification::{ClassificationState, ClassifyTicket};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::shortest_path::{PathTicket, ShortestPathState};

/// Graph, layout, traversal and query state, replaced wholesale on reload.
///
/// Only this type mutates its parts, so no locking is involved; a frontend
/// owns one `Session` on its event loop.
#[derive(Debug)]
pub struct Session {
    layout_config: LayoutConfig,
    graph: Graph,
    layout: Layout,
    engine: TraversalEngine,
    shortest_path: ShortestPathState,
    classification: ClassificationState,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_parts(LayoutConfig::default(), TraversalEngine::default())
    }
}

impl Session {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;
        let engine = TraversalEngine::default().with_interval(config.auto_play_interval());
        Ok(Self::with_parts(config.layout.clone(), engine))
    }

    fn with_parts(layout_config: LayoutConfig, engine: TraversalEngine) -> Self {
        let graph = Graph::default();
        let layout = solve_layout(&graph, &layout_config);
        Self {
            layout_config,
            graph,
            layout,
            engine,
            shortest_path: ShortestPathState::default(),
            classification: ClassificationState::default(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout_config
    }

    pub fn traversal(&self) -> &TraversalState {
        self.engine.state()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    pub fn auto_play_interval(&self) -> Duration {
        self.engine.interval()
    }

    pub fn is_auto_playing(&self) -> bool {
        self.engine.is_auto_playing()
    }

    /// Name of the chosen root, if any.
    pub fn root(&self) -> Option<&str> {
        self.engine.root().map(|id| self.graph.name(id))
    }

    pub fn shortest_path(&self) -> &ShortestPathState {
        &self.shortest_path
    }

    pub fn classification(&self) -> &ClassificationState {
        &self.classification
    }

    /// Parse `text` and replace the graph.
    ///
    /// A parse or build error leaves the current session untouched.
    pub fn load_edges(&mut self, text: &str) -> AppResult<()> {
        let records = parse_edge_lines(text)?;
        self.load_records(&records)
    }

    pub fn load_edge_file(&mut self, path: &Path) -> AppResult<()> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::EdgeFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_edges(&text)
    }

    /// Replace the graph and reset everything derived from the old one.
    pub fn load_records(&mut self, records: &[EdgeRecord]) -> AppResult<()> {
        let graph = Graph::from_records(records)?;
        let layout = solve_layout(&graph, &self.layout_config);

        self.engine.set_root(None);
        self.engine.reset();
        self.shortest_path.clear();
        self.classification.clear();
        self.graph = graph;
        self.layout = layout;

        info!(
            nodes = self.graph.nodes().len(),
            edges = self.graph.edges().len(),
            "graph loaded"
        );
        Ok(())
    }

    /// Choose the traversal root by name; `None` clears it.
    pub fn set_root(&mut self, name: Option<&str>) -> AppResult<()> {
        let root = match name {
            Some(name) => Some(
                self.graph
                    .node_by_name(name)
                    .map(|n| n.id)
                    .ok_or_else(|| GraphError::UnknownNode {
                        name: name.to_string(),
                    })?,
            ),
            None => None,
        };
        self.engine.set_root(root);
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.engine.set_algorithm(algorithm);
    }

    pub fn start_traversal(&mut self) -> bool {
        self.engine.start(&self.graph)
    }

    pub fn step(&mut self) -> StepOutcome {
        self.engine.step(&self.graph)
    }

    pub fn reset_traversal(&mut self) {
        self.engine.reset();
    }

    /// Must be called from within a Tokio runtime.
    pub fn start_auto_play(&mut self) -> bool {
        self.engine.start_auto_play(&self.graph)
    }

    pub fn stop_auto_play(&mut self) {
        self.engine.stop_auto_play();
    }

    /// Wait for the next auto-play tick and step; `None` once auto-play ends.
    pub async fn tick(&mut self) -> Option<StepOutcome> {
        self.engine.tick(&self.graph).await
    }

    pub fn set_path_endpoints(&mut self, start: Option<&str>, end: Option<&str>) {
        self.shortest_path
            .set_endpoints(start.map(str::to_string), end.map(str::to_string));
    }

    pub fn begin_shortest_path(&mut self) -> Option<PathTicket> {
        self.shortest_path.begin(&self.graph)
    }

    pub fn finish_shortest_path(
        &mut self,
        ticket: PathTicket,
        result: gw_client::ClientResult<gw_client::ShortestPath>,
    ) -> bool {
        self.shortest_path.finish(ticket, result)
    }

    pub fn clear_shortest_path(&mut self) {
        self.shortest_path.clear();
    }

    /// Issue, await and apply one shortest-path request.
    pub async fn calculate_shortest_path(&mut self, client: &ServiceClient) {
        let Some(ticket) = self.begin_shortest_path() else {
            return;
        };
        let result = client.shortest_path(ticket.query()).await;
        self.finish_shortest_path(ticket, result);
    }

    pub fn begin_classification(&mut self) -> ClassifyTicket {
        self.classification.begin(&self.graph)
    }

    pub fn finish_classification(
        &mut self,
        ticket: ClassifyTicket,
        result: gw_client::ClientResult<gw_client::Classification>,
    ) -> bool {
        self.classification.finish(ticket, result)
    }

    /// Issue, await and apply one classification request.
    pub async fn classify(&mut self, client: &ServiceClient) {
        let ticket = self.begin_classification();
        let result = client.classify_request(ticket.request()).await;
        self.finish_classification(ticket, result);
    }
}

//! The knowledge graph store.
//!
//! Every operation is one load → mutate → save cycle: the whole record file
//! is read into memory, changed, and written back in full. Nothing is cached
//! between calls. Mutating operations serialize through an in-process lock so
//! two concurrent mutations cannot interleave their load and save phases;
//! writers in other processes are not coordinated.

pub mod model;

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::{GraphError, GraphResult};
use model::{
    Entity, KnowledgeGraph, ObservationAddition, ObservationDeletion, ObservationRequest, Record,
    Relation,
};

/// Handle to the record file backing the graph.
pub struct GraphStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl GraphStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted graph.
    ///
    /// A missing file is the first-use bootstrap case and yields an empty
    /// graph. A line that fails to parse is skipped with a diagnostic so one
    /// bad record cannot take the rest of the file down with it. Any other
    /// I/O failure is fatal.
    pub async fn load(&self) -> GraphResult<KnowledgeGraph> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "memory file not found, starting with an empty graph"
                );
                return Ok(KnowledgeGraph::default());
            }
            Err(e) => return Err(GraphError::Io(e)),
        };

        let mut graph = KnowledgeGraph::default();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            match serde_json::from_str::<Record>(line) {
                Ok(Record::Entity(entity)) => graph.entities.push(entity),
                Ok(Record::Relation(relation)) => graph.relations.push(relation),
                Err(e) => tracing::warn!(%line, error = %e, "skipping malformed record line"),
            }
        }
        Ok(graph)
    }

    /// Overwrite the record file with the given graph, entity records first.
    async fn save(&self, graph: &KnowledgeGraph) -> GraphResult<()> {
        let mut lines = Vec::with_capacity(graph.entities.len() + graph.relations.len());
        for entity in &graph.entities {
            lines.push(serde_json::to_string(&Record::Entity(entity.clone()))?);
        }
        for relation in &graph.relations {
            lines.push(serde_json::to_string(&Record::Relation(relation.clone()))?);
        }
        tokio::fs::write(&self.path, lines.join("\n")).await?;
        Ok(())
    }

    /// Add entities whose names are not already taken. Returns only the
    /// entities actually added, so repeating an identical call returns an
    /// empty list and leaves the graph unchanged.
    pub async fn create_entities(&self, candidates: Vec<Entity>) -> GraphResult<Vec<Entity>> {
        let _guard = self.write_lock.lock().await;
        let mut graph = self.load().await?;

        let mut added = Vec::new();
        for candidate in candidates {
            if graph.entities.iter().any(|e| e.name == candidate.name) {
                continue;
            }
            graph.entities.push(candidate.clone());
            added.push(candidate);
        }

        self.save(&graph).await?;
        Ok(added)
    }

    /// Add relations, deduplicated on the full identity triple. Returns only
    /// the relations actually added.
    pub async fn create_relations(&self, candidates: Vec<Relation>) -> GraphResult<Vec<Relation>> {
        let _guard = self.write_lock.lock().await;
        let mut graph = self.load().await?;

        let mut added = Vec::new();
        for candidate in candidates {
            if graph.relations.contains(&candidate) {
                continue;
            }
            graph.relations.push(candidate.clone());
            added.push(candidate);
        }

        self.save(&graph).await?;
        Ok(added)
    }

    /// Append observations to existing entities.
    ///
    /// The batch is all-or-nothing: every entity name is resolved before any
    /// mutation, so an unknown name fails the whole call and nothing is
    /// persisted. Per request, only observations not already present on the
    /// entity are appended, and the result reports exactly those.
    pub async fn add_observations(
        &self,
        requests: Vec<ObservationRequest>,
    ) -> GraphResult<Vec<ObservationAddition>> {
        let _guard = self.write_lock.lock().await;
        let mut graph = self.load().await?;

        for request in &requests {
            if !graph.entities.iter().any(|e| e.name == request.entity_name) {
                return Err(GraphError::EntityNotFound(request.entity_name.clone()));
            }
        }

        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let entity = graph
                .entities
                .iter_mut()
                .find(|e| e.name == request.entity_name)
                .ok_or_else(|| GraphError::EntityNotFound(request.entity_name.clone()))?;

            let mut added = Vec::new();
            for content in request.contents {
                if !entity.observations.contains(&content) {
                    entity.observations.push(content.clone());
                    added.push(content);
                }
            }
            results.push(ObservationAddition {
                entity_name: request.entity_name,
                added_observations: added,
            });
        }

        self.save(&graph).await?;
        Ok(results)
    }

    /// Remove the named entities and cascade-delete every relation touching
    /// one of them. Unknown names are silent no-ops.
    pub async fn delete_entities(&self, names: Vec<String>) -> GraphResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut graph = self.load().await?;

        graph.entities.retain(|e| !names.contains(&e.name));
        graph
            .relations
            .retain(|r| !names.contains(&r.from) && !names.contains(&r.to));

        self.save(&graph).await
    }

    /// Remove matching observation strings per entity. An unknown entity
    /// name is skipped, not an error.
    pub async fn delete_observations(
        &self,
        deletions: Vec<ObservationDeletion>,
    ) -> GraphResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut graph = self.load().await?;

        for deletion in &deletions {
            if let Some(entity) = graph
                .entities
                .iter_mut()
                .find(|e| e.name == deletion.entity_name)
            {
                entity
                    .observations
                    .retain(|o| !deletion.observations.contains(o));
            }
        }

        self.save(&graph).await
    }

    /// Remove every relation whose identity triple matches a candidate.
    pub async fn delete_relations(&self, candidates: Vec<Relation>) -> GraphResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut graph = self.load().await?;

        graph.relations.retain(|r| !candidates.contains(r));

        self.save(&graph).await
    }

    /// The full persisted graph, unfiltered.
    pub async fn read_graph(&self) -> GraphResult<KnowledgeGraph> {
        self.load().await
    }

    /// Case-insensitive substring search over entity names, types, and
    /// observations. Relations are induced: one is included only when both
    /// of its endpoints survived the entity filter.
    pub async fn search_nodes(&self, query: &str) -> GraphResult<KnowledgeGraph> {
        let graph = self.load().await?;
        let needle = query.to_lowercase();

        let entities: Vec<Entity> = graph
            .entities
            .into_iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.entity_type.to_lowercase().contains(&needle)
                    || e.observations
                        .iter()
                        .any(|o| o.to_lowercase().contains(&needle))
            })
            .collect();

        Ok(induce_relations(entities, graph.relations))
    }

    /// Exact-name node selection with the same relation induction rule as
    /// [`GraphStore::search_nodes`].
    pub async fn open_nodes(&self, names: &[String]) -> GraphResult<KnowledgeGraph> {
        let graph = self.load().await?;

        let entities: Vec<Entity> = graph
            .entities
            .into_iter()
            .filter(|e| names.contains(&e.name))
            .collect();

        Ok(induce_relations(entities, graph.relations))
    }
}

/// Keep only relations whose both endpoints are among the given entities.
fn induce_relations(entities: Vec<Entity>, relations: Vec<Relation>) -> KnowledgeGraph {
    let names: HashSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    let relations = relations
        .into_iter()
        .filter(|r| names.contains(r.from.as_str()) && names.contains(r.to.as_str()))
        .collect();
    KnowledgeGraph {
        entities,
        relations,
    }
}

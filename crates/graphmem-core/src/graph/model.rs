//! Knowledge graph domain models.

use serde::{Deserialize, Serialize};

/// A named node in the knowledge graph.
///
/// `name` is the primary key; `observations` is an ordered, duplicate-free
/// list of free-text facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub entity_type: String,
    #[serde(default)]
    pub observations: Vec<String>,
}

/// A directed, typed edge between two entity names.
///
/// Identity is the full `(from, to, relationType)` triple. Endpoints are not
/// checked against existing entities, so dangling references are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub from: String,
    pub to: String,
    pub relation_type: String,
}

/// The complete set of entities and relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
}

/// One line of the record file, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Entity(Entity),
    Relation(Relation),
}

/// A request to append observations to one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRequest {
    pub entity_name: String,
    pub contents: Vec<String>,
}

/// A request to remove observation strings from one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDeletion {
    pub entity_name: String,
    pub observations: Vec<String>,
}

/// The observations actually appended for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationAddition {
    pub entity_name: String,
    pub added_observations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_record_wire_format() {
        let record = Record::Entity(Entity {
            name: "Ada".into(),
            entity_type: "person".into(),
            observations: vec!["wrote the first program".into()],
        });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"type":"entity","name":"Ada","entityType":"person","observations":["wrote the first program"]}"#
        );
    }

    #[test]
    fn test_relation_record_wire_format() {
        let record = Record::Relation(Relation {
            from: "Ada".into(),
            to: "Babbage".into(),
            relation_type: "collaboratedWith".into(),
        });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"type":"relation","from":"Ada","to":"Babbage","relationType":"collaboratedWith"}"#
        );
    }

    #[test]
    fn test_record_dispatches_on_type_tag() {
        let entity: Record =
            serde_json::from_str(r#"{"type":"entity","name":"a","entityType":"t","observations":[]}"#)
                .unwrap();
        assert!(matches!(entity, Record::Entity(_)));

        let relation: Record =
            serde_json::from_str(r#"{"type":"relation","from":"a","to":"b","relationType":"r"}"#)
                .unwrap();
        assert!(matches!(relation, Record::Relation(_)));
    }

    #[test]
    fn test_entity_missing_observations_defaults_to_empty() {
        let entity: Entity =
            serde_json::from_str(r#"{"name":"a","entityType":"t"}"#).unwrap();
        assert!(entity.observations.is_empty());
    }

    #[test]
    fn test_unknown_type_tag_is_an_error() {
        let result = serde_json::from_str::<Record>(r#"{"type":"widget","name":"a"}"#);
        assert!(result.is_err());
    }
}

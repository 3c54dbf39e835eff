//! Wire types and fixed enrichment data.
//!
//! All request/response bodies derive Serde traits; field names match the
//! JSON contract exactly (note the `GO_terms` rename).

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Gene every enrichment resolves to.
pub const CAUSAL_GENE: &str = "FTO";

/// The single GO term returned by the enrichment step.
pub const GO_TERM_ID: &str = "GO:1904177";
pub const GO_TERM_NAME: &str = "Regulation of Adipose Tissue Development";

/// Fixed probability attached to every generated graph.
pub const GRAPH_PROBABILITY: f64 = 0.95;

/// Lifecycle state of an enrichment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentStatus {
    Pending,
    Completed,
}

/// A tracked enrichment request. Lives in the in-memory store for the
/// process lifetime; only `status` ever changes after creation.
#[derive(Debug, Clone)]
pub struct EnrichmentRequest {
    pub id: String,
    pub status: EnrichmentStatus,
    pub created_at: Instant,
    pub enrich_id: String,
    pub variant: String,
}

/// Body of `POST /api/mock/hypothesis/enrich`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub project_id: Option<String>,
    pub variant: Option<String>,
}

/// Response to a submission (202).
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub hypothesis_id: String,
    pub project_id: Option<String>,
}

/// Optional `?id=` query used by both GET endpoints.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Response to a status poll (200).
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: String,
    pub status: EnrichmentStatus,
    pub phenotype: String,
    pub enrich_id: String,
}

/// A Gene Ontology term reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoTerm {
    pub id: String,
    pub name: String,
}

/// Response to an enrichment fetch (200). The id is echoed back verbatim,
/// null included; no lookup happens on this path.
#[derive(Debug, Serialize)]
pub struct EnrichmentResponse {
    pub id: Option<String>,
    pub causal_gene: String,
    #[serde(rename = "GO_terms")]
    pub go_terms: Vec<GoTerm>,
}

/// Body of `POST /api/mock/hypothesis/hypothesis`.
#[derive(Debug, Deserialize)]
pub struct FinalizeRequest {
    pub id: Option<String>,
}

/// Kind tag on a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Snp,
    Gene,
    Go,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// The canned causal graph: variant SNP → gene → GO term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypothesisGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub probability: f64,
}

impl HypothesisGraph {
    /// Build the fixed 3-node/2-edge graph for the given variant.
    pub fn for_variant(variant: &str) -> Self {
        Self {
            nodes: vec![
                GraphNode {
                    id: variant.to_string(),
                    kind: NodeKind::Snp,
                    name: variant.to_string(),
                },
                GraphNode {
                    id: CAUSAL_GENE.to_string(),
                    kind: NodeKind::Gene,
                    name: CAUSAL_GENE.to_string(),
                },
                GraphNode {
                    id: GO_TERM_ID.to_string(),
                    kind: NodeKind::Go,
                    name: GO_TERM_NAME.to_string(),
                },
            ],
            edges: vec![
                GraphEdge {
                    source: variant.to_string(),
                    target: CAUSAL_GENE.to_string(),
                    label: "affects".to_string(),
                },
                GraphEdge {
                    source: CAUSAL_GENE.to_string(),
                    target: GO_TERM_ID.to_string(),
                    label: "involved_in".to_string(),
                },
            ],
            probability: GRAPH_PROBABILITY,
        }
    }
}

/// Response to finalization (201).
#[derive(Debug, Serialize)]
pub struct HypothesisResponse {
    pub summary: String,
    pub graph: HypothesisGraph,
}

impl HypothesisResponse {
    pub fn for_variant(variant: &str) -> Self {
        Self {
            summary: format!(
                "Mock causal hypothesis: {variant} -> {CAUSAL_GENE} -> {GO_TERM_ID} ({GO_TERM_NAME})"
            ),
            graph: HypothesisGraph::for_variant(variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_shape() {
        let graph = HypothesisGraph::for_variant("rs7903146");

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.probability, 0.95);

        assert_eq!(graph.nodes[0].id, "rs7903146");
        assert_eq!(graph.nodes[0].name, "rs7903146");
        assert_eq!(graph.nodes[0].kind, NodeKind::Snp);

        assert_eq!(graph.edges[0].source, "rs7903146");
        assert_eq!(graph.edges[0].target, "FTO");
        assert_eq!(graph.edges[1].label, "involved_in");
    }

    #[test]
    fn test_summary_interpolates_variant() {
        let response = HypothesisResponse::for_variant("rs1421985");
        assert!(response.summary.contains("rs1421985"));
        assert!(response.summary.contains("FTO"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&EnrichmentStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&EnrichmentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_go_terms_field_name() {
        let response = EnrichmentResponse {
            id: None,
            causal_gene: CAUSAL_GENE.to_string(),
            go_terms: vec![GoTerm {
                id: GO_TERM_ID.to_string(),
                name: GO_TERM_NAME.to_string(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("GO_terms").is_some());
        assert!(json["id"].is_null());
    }
}

//! Fixed project records.
//!
//! Two hardcoded GWAS projects, read-only for the process lifetime. The
//! directory is built once at startup and shared through `AppState`.

use serde::{Deserialize, Serialize};

/// A project record as returned by id lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub phenotype: String,
    pub description: String,
    pub ldsc: LdscPanel,
}

/// LDSC heritability panel attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdscPanel {
    pub h2: f64,
    pub tissues: Vec<TissueEnrichment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TissueEnrichment {
    pub name: String,
    pub p_value: f64,
}

/// Abbreviated record used in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
}

/// Listing envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectSummary>,
}

/// Read-only directory of the fixed sample projects.
pub struct ProjectDirectory {
    projects: Vec<Project>,
}

impl ProjectDirectory {
    /// Build the directory with its two fixed records.
    pub fn new() -> Self {
        Self {
            projects: vec![
                Project {
                    id: "project_abc123".to_string(),
                    name: "Obesity GWAS 2024".to_string(),
                    phenotype: "Obesity".to_string(),
                    description: "Genome-wide association study of BMI in a European cohort"
                        .to_string(),
                    ldsc: LdscPanel {
                        h2: 0.21,
                        tissues: vec![
                            TissueEnrichment {
                                name: "Adipose_Subcutaneous".to_string(),
                                p_value: 3.2e-6,
                            },
                            TissueEnrichment {
                                name: "Brain_Hypothalamus".to_string(),
                                p_value: 1.4e-4,
                            },
                        ],
                    },
                },
                Project {
                    id: "project_def456".to_string(),
                    name: "T2D Fine-mapping".to_string(),
                    phenotype: "Type 2 Diabetes".to_string(),
                    description: "Fine-mapping of type 2 diabetes risk loci".to_string(),
                    ldsc: LdscPanel {
                        h2: 0.17,
                        tissues: vec![TissueEnrichment {
                            name: "Pancreas".to_string(),
                            p_value: 8.9e-5,
                        }],
                    },
                },
            ],
        }
    }

    /// Full record by id.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Abbreviated listing (id + name only).
    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .map(|p| ProjectSummary {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect()
    }
}

impl Default for ProjectDirectory {
    fn default() -> Self {
        Self::new()
    }
}

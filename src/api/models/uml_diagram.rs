//! UML diagram model.
//!
//! A diagram record is a display name plus the editor's JSON document. The
//! document is stored verbatim and never inspected.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Maximum diagram name length, counted in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Persisted UML diagram record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UmlDiagram {
    /// Identifier assigned by the storage backend
    pub id: i64,
    /// Diagram name
    pub name: String,
    /// Diagram document (any non-null JSON value)
    #[schema(value_type = Value)]
    pub diagram: serde_json::Value,
}

impl fmt::Display for UmlDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Field validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at most {max} characters, got {actual}")]
    NameTooLong { max: usize, actual: usize },
    #[error("diagram must be a non-null JSON value")]
    NullDiagram,
}

/// Request to create a diagram
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUmlDiagramRequest {
    /// Diagram name
    pub name: String,
    /// Diagram document
    #[serde(default)]
    #[schema(value_type = Value)]
    pub diagram: serde_json::Value,
}

impl CreateUmlDiagramRequest {
    pub fn new(name: impl Into<String>, diagram: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            diagram,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_diagram(&self.diagram)
    }
}

/// Request to replace a diagram (PUT): both fields are required
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReplaceUmlDiagramRequest {
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Value)]
    pub diagram: serde_json::Value,
}

impl From<ReplaceUmlDiagramRequest> for UpdateUmlDiagramRequest {
    fn from(request: ReplaceUmlDiagramRequest) -> Self {
        Self {
            name: Some(request.name),
            diagram: Some(request.diagram),
        }
    }
}

/// Request to update a diagram (PATCH): absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUmlDiagramRequest {
    /// New diagram name
    #[serde(default)]
    pub name: Option<String>,
    /// New diagram document
    #[serde(default)]
    #[schema(value_type = Option<Value>)]
    pub diagram: Option<serde_json::Value>,
}

impl UpdateUmlDiagramRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.diagram.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(diagram) = &self.diagram {
            validate_diagram(diagram)?;
        }
        Ok(())
    }

    /// Apply the supplied fields to a record in place.
    pub fn apply_to(self, diagram: &mut UmlDiagram) {
        if let Some(name) = self.name {
            diagram.name = name;
        }
        if let Some(document) = self.diagram {
            diagram.diagram = document;
        }
    }
}

/// Listing parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiagramListQuery {
    /// Only return diagrams with exactly this name
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl DiagramListQuery {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;

    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    pub fn effective_offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn matches(&self, diagram: &UmlDiagram) -> bool {
        self.name.as_deref().is_none_or(|name| diagram.name == name)
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let actual = name.chars().count();
    if actual > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
            actual,
        });
    }
    Ok(())
}

pub fn validate_diagram(diagram: &serde_json::Value) -> Result<(), ValidationError> {
    if diagram.is_null() {
        return Err(ValidationError::NullDiagram);
    }
    Ok(())
}

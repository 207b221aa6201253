// Models module - contains the UML diagram record and its request types

pub mod uml_diagram;

pub use uml_diagram::{
    CreateUmlDiagramRequest, DiagramListQuery, ReplaceUmlDiagramRequest, UmlDiagram,
    UpdateUmlDiagramRequest, ValidationError,
};

// Services module - business logic layered over the storage backends

pub mod diagram_service;

pub use diagram_service::DiagramService;

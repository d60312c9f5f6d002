use thiserror::Error;

/// Errors that can occur while compiling a graph into Move source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error(
        "Graph contains more than one init node ('{first}' and '{second}'); a module has a single initializer"
    )]
    MultipleInitNodes { first: String, second: String },

    #[error(
        "Init node '{init_node_id}' has {} witness connections ({}); connect exactly one struct",
        .sources.len(),
        .sources.join(", ")
    )]
    AmbiguousWitness {
        init_node_id: String,
        sources: Vec<String>,
    },

    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphConversionError),
}

/// Errors that can occur when converting an editor or foreign format into a
/// `GraphDefinition`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphConversionError {
    #[error("Invalid graph data: {0}")]
    ValidationError(String),
}

/// Errors raised while installing a graph produced by the import oracle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Import oracle failed: {0}")]
    Oracle(String),

    #[error("Import response is not a usable graph: {0}")]
    MalformedResponse(String),

    #[error("Import response contained no nodes")]
    EmptyGraph,

    #[error(transparent)]
    Conversion(#[from] GraphConversionError),
}

/// Errors raised by project file handling.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Could not access project file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Project file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Module '{0}' not found in project")]
    ModuleNotFound(String),

    #[error("The last module of a project cannot be removed")]
    LastModule,
}

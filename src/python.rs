use crate::compiler::{Compiler, GeneratedPackage};
use crate::defaults::CodegenDefaults;
use crate::graph::IntoGraph;
use crate::ui::UiGraph;
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for GeneratedPackage {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("module_name", self.module_name)?;
        dict.set_item("source", self.source)?;
        dict.set_item("manifest", self.manifest)?;
        Ok(dict)
    }
}

/// Compiles editor graphs of Sui Move modules into source text.
///
/// The compiler holds no state between calls; one instance can export any
/// number of graphs.
#[pyclass(name = "MoveSketch")]
struct MoveSketchPy {
    defaults: CodegenDefaults,
}

#[pymethods]
impl MoveSketchPy {
    /// Creates a compiler.
    ///
    /// Args:
    ///     defaults_json (str | None): JSON object overriding fallback values
    ///         such as `witnessName` or `coinDecimals`.
    ///
    /// Raises:
    ///     ValueError: If `defaults_json` is not valid JSON.
    #[new]
    #[pyo3(signature = (defaults_json=None))]
    fn new(defaults_json: Option<&str>) -> PyResult<Self> {
        let defaults = match defaults_json {
            Some(json) => CodegenDefaults::from_json(json)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?,
            None => CodegenDefaults::default(),
        };
        Ok(MoveSketchPy { defaults })
    }

    /// Compiles one module graph.
    ///
    /// Args:
    ///     module_name (str): Name of the module and package.
    ///     graph_json (str): The editor graph, an object with `nodes` and
    ///         `edges` arrays.
    ///
    /// Returns:
    ///     dict: `module_name`, `source` and `manifest`.
    ///
    /// Raises:
    ///     ValueError: If the graph is malformed or cannot be compiled
    ///         (several init nodes, several witness connections).
    fn export(&self, module_name: &str, graph_json: &str) -> PyResult<GeneratedPackage> {
        let graph = UiGraph::from_json(graph_json)
            .and_then(IntoGraph::into_graph)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Compiler::builder(module_name, graph)
            .with_defaults(self.defaults.clone())
            .build()
            .compile()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }
}

/// Python bindings to the MoveSketch graph compiler.
#[pymodule]
fn movesketch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<MoveSketchPy>()?;
    Ok(())
}

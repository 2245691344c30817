// Contour - tree-sitter powered structure extraction for Python sources.
//
// The pipeline is: source text -> syntax tree -> StructuralModel -> one of
// the output adapters (IDL text or JSON). Each call is independent and
// side-effect free, so extraction is safe to run concurrently one source
// unit per call.

pub mod batch;
pub mod emit;
pub mod error;
mod extractor;
pub mod language;
pub mod model;

pub use emit::Format;
pub use error::ExtractError;
pub use model::StructuralModel;

/// Build the structural model for one unit of Python source.
///
/// The only failure is a parse failure; unsupported-but-valid node shapes
/// degrade to sentinel values inside the model.
pub fn extract_structure(source: &str) -> Result<StructuralModel, ExtractError> {
    let tree = language::parse_module(source)?;
    let extractor = extractor::ModuleExtractor::new(source);
    Ok(extractor.build(&tree))
}

/// Extract and serialize in one step.
pub fn transform(source: &str, format: Format) -> Result<String, ExtractError> {
    let model = extract_structure(source)?;
    Ok(emit::serialize(&model, format))
}

//! Stateless serialization of a [`StructuralModel`] into one of the two
//! output formats. Either adapter can be selected without the other being
//! invoked, and both are deterministic over the same model.

pub mod idl;
pub mod json;
mod route;

use clap::ValueEnum;

use crate::model::StructuralModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Idl,
    Json,
}

pub fn serialize(model: &StructuralModel, format: Format) -> String {
    match format {
        Format::Idl => idl::to_idl(model),
        Format::Json => json::to_json(model),
    }
}

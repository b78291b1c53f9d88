//! @acp:module "TODO Adapters"
//! @acp:summary "Built-in adapters for all supported languages"
//! @acp:domain cli
//! @acp:layer service

mod csharp;
mod generic;
mod go;
mod java;
mod javascript;
mod python;
mod rust;
mod shell;

pub use csharp::CSharpAdapter;
pub use generic::GenericAdapter;
pub use go::GoAdapter;
pub use java::JavaAdapter;
pub use javascript::JavaScriptAdapter;
pub use python::PythonAdapter;
pub use rust::RustAdapter;
pub use shell::ShellAdapter;

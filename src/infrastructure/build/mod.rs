//! Build adapters

mod flutter;

pub use flutter::{FlutterBuild, FLUTTER_ENV};

/// Data layer: parsing, core types, and fetching.
///
/// Architecture:
/// ```text
///   URL / local path
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  worker thread → CSV text, generation-tagged
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  quote-aware scan → Portfolio
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Portfolio = Vec<Row>, positional accessors
///   └──────────┘
/// ```
pub mod fetch;
pub mod model;
pub mod parser;

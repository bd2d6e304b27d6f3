//! CLI domain: parse, route, and output only.
//! No domain orchestration beyond the single run pipeline in route.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::run;

//! Integration test modules

mod build_pipeline;
mod directory_pruning;
mod merge_precedence;

//! # sievecalc-cli
//!
//! CLI output, the `<N>.txt` result file, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;

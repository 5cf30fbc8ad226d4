//! Game rules: the state machine behind a puzzle session.
//!
//! The transitions are implemented as methods on `GameState` so frontends
//! can chain them:
//!
//! ```text
//! playing --(4th group found)--> won
//! playing --(mistake budget spent)--> lost
//! ```
//!
//! No transition leaves `won` or `lost` except `reset`.

pub mod engine;

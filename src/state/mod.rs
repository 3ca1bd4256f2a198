/// State management module
///
/// This module handles the client-side state for one page session:
/// - The currently selected scan and its encoded payload (session.rs)
///
/// There is deliberately no persistence here; everything lives in memory
/// for the duration of one upload cycle.

pub mod session;

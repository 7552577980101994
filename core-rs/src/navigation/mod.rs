/**
 * navigation module
 *
 * - state: NavigationState machine, load tickets, display rows
 * - navigator: async driver running tickets against the services
 */

pub mod navigator;
pub mod state;

pub use navigator::Navigator;
pub use state::{
    Column, Completion, DisplayTerm, DisplayTriple, FocusState, LoadKind, LoadState, LoadTicket,
    NavigationState, View, DEFAULT_FOCUS_LABEL,
};

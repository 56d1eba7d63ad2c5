/*!
Items related to [logging](log).

Registration of atoms, updates to clauses, and changes to configuration are logged, each on a distinct target.
Updates to clauses happen often, and so are only logged at the trace level.

No log implementation is provided.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [atom registry](crate::db::atom)
    pub const ATOM_REGISTRY: &str = "atom_registry";

    /// Logs related to [clauses](crate::structures::clause)
    pub const CLAUSE: &str = "clause";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";
}

/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [knowledge base](crate::engine::KnowledgeBase)
    pub const KNOWLEDGE: &str = "knowledge";

    /// Logs related to [enumeration of models](crate::procedures::models)
    pub const ENUMERATION: &str = "enumeration";

    /// Logs related to [entailment](crate::procedures::entails)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to [reading propositions from text](crate::builder)
    pub const PARSE: &str = "parse";
}

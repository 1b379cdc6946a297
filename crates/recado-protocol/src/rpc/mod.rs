//! Method vocabulary and per-method wire types.

pub mod resources;
pub mod tools;

pub use resources::*;
pub use tools::*;

/// RPC method names shared by both transport bindings.
pub mod methods {
    pub const LIST_TOOLS: &str = "list_tools";
    pub const LIST_RESOURCES: &str = "list_resources";
    pub const INVOKE_TOOL: &str = "invoke_tool";
}

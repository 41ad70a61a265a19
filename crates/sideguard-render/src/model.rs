//! Renderable model, deliberately decoupled from the wire types so renderers
//! never chase envelope changes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableDecision {
    Allowed,
    Blocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRule {
    pub rule_id: String,
    pub passed: bool,
    pub reason: Option<String>,
    pub suggestion: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub rules_evaluated: u32,
    pub state_keys: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub decision: RenderableDecision,
    pub reason: Option<String>,
    pub suggestion: Option<String>,
    pub rules: Vec<RenderableRule>,
    pub data: RenderableData,
}

use crate::tree::{RenderCtx, RenderNode};

/// Node that paints nothing itself and only orders its children.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroupNode;

impl RenderNode for GroupNode {
    fn paint(&self, _ctx: &mut RenderCtx) {}

    fn name(&self) -> &'static str {
        "group"
    }
}

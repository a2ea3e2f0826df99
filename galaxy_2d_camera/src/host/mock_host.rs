/// Mock host collaborators for unit tests (no window, no GPU, no scene graph)

use glam::{Mat4, Vec3};
use slotmap::SlotMap;
use crate::camera::Viewport;
use crate::error::Result;
use super::{ObjectKey, RenderPipeline, TransformSystem};

// ============================================================================
// Mock transform system
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockNode {
    pub position: Vec3,
    pub parent: Option<ObjectKey>,
}

/// Flat object store with optional parent links
#[derive(Debug, Default)]
pub struct MockTransforms {
    pub nodes: SlotMap<ObjectKey, MockNode>,
    pub writes: usize,
}

impl MockTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, position: Vec3) -> ObjectKey {
        self.nodes.insert(MockNode { position, parent: None })
    }

    pub fn spawn_child(&mut self, parent: ObjectKey, position: Vec3) -> ObjectKey {
        self.nodes.insert(MockNode { position, parent: Some(parent) })
    }

    pub fn pos(&self, object: ObjectKey) -> Vec3 {
        self.nodes[object].position
    }
}

impl TransformSystem for MockTransforms {
    fn position(&self, object: ObjectKey) -> Option<Vec3> {
        self.nodes.get(object).map(|n| n.position)
    }

    fn set_position(&mut self, object: ObjectKey, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(object) {
            node.position = position;
            self.writes += 1;
        }
    }

    fn parent(&self, object: ObjectKey) -> Option<ObjectKey> {
        self.nodes.get(object).and_then(|n| n.parent)
    }
}

// ============================================================================
// Mock render pipeline
// ============================================================================

/// Records every setting it receives, in order
#[derive(Debug, Default)]
pub struct MockPipeline {
    pub viewports: Vec<Viewport>,
    pub views: Vec<Mat4>,
    pub projections: Vec<Mat4>,
    pub calls: Vec<&'static str>,
}

impl MockPipeline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderPipeline for MockPipeline {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.viewports.push(viewport);
        self.calls.push("viewport");
        Ok(())
    }

    fn set_view(&mut self, view: Mat4) -> Result<()> {
        self.views.push(view);
        self.calls.push("view");
        Ok(())
    }

    fn set_projection(&mut self, projection: Mat4) -> Result<()> {
        self.projections.push(projection);
        self.calls.push("projection");
        Ok(())
    }
}

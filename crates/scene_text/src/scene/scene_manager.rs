//! Scene storage and per-frame update pass

use super::{
    GroupError, GroupId, GroupMembership, GroupStorage, NodeId, SceneError, TextNode, TextNodeDesc,
    TextRasterizer, TextStyle,
};
use crate::config::SceneConfig;
use crate::events::GroupEvent;
use slotmap::SlotMap;

/// Owns the text nodes and groups of one scene
///
/// Nodes are addressed by [`NodeId`] handles. [`Scene::update`] is the
/// per-frame pass that runs change detection on every node.
pub struct Scene<R: TextRasterizer> {
    rasterizer: R,
    nodes: SlotMap<NodeId, TextNode<R::Surface>>,
    groups: GroupStorage,
    default_style: TextStyle,
}

impl<R: TextRasterizer> Scene<R> {
    /// Create an empty scene rendering through `rasterizer`
    pub fn new(rasterizer: R, config: &SceneConfig) -> Self {
        Self {
            rasterizer,
            nodes: SlotMap::with_capacity_and_key(config.node_capacity),
            groups: GroupStorage::new(),
            default_style: config.default_style.clone(),
        }
    }

    /// Create a text node
    ///
    /// An empty style in `desc` is replaced by the configured default style.
    pub fn add_text(&mut self, mut desc: TextNodeDesc) -> NodeId {
        if desc.style.is_empty() {
            desc.style = self.default_style.clone();
        }
        let rasterizer = &mut self.rasterizer;
        self.nodes.insert_with_key(|id| TextNode::new(id, rasterizer, desc))
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&TextNode<R::Surface>> {
        self.nodes.get(id)
    }

    /// Look up a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut TextNode<R::Surface>> {
        self.nodes.get_mut(id)
    }

    /// Iterate over all stored nodes
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TextNode<R::Surface>)> {
        self.nodes.iter()
    }

    /// Create a named group
    pub fn create_group(&mut self, name: impl Into<String>) -> GroupId {
        self.groups.create(name)
    }

    /// Group storage
    pub fn groups(&self) -> &GroupStorage {
        &self.groups
    }

    /// Rasterizer used for new nodes
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Put a node into a group and dispatch `on_added_to_group`
    ///
    /// A node belongs to at most one group at a time.
    pub fn add_to_group(&mut self, id: NodeId, group: GroupId) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))?;
        if let Some(current) = node.group() {
            return Err(GroupError::AlreadyInGroup { node: id, group: current }.into());
        }

        self.groups.add_member(group, id)?;
        node.set_group(Some(group));
        node.events_mut()
            .on_added_to_group
            .dispatch(&GroupEvent { node: id, group });
        Ok(())
    }

    /// Take a node out of its group and dispatch `on_removed_from_group`
    ///
    /// Returns false if the node was not in a group.
    pub fn remove_from_group(&mut self, id: NodeId) -> Result<bool, SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))?;
        let Some(group) = node.group() else {
            return Ok(false);
        };

        self.groups.remove_member(group, id)?;
        node.set_group(None);
        node.events_mut()
            .on_removed_from_group
            .dispatch(&GroupEvent { node: id, group });
        Ok(true)
    }

    /// Run one tick of change detection on every node
    ///
    /// Returns how many nodes moved during this tick.
    pub fn update(&mut self) -> usize {
        let dirty = self
            .nodes
            .values_mut()
            .map(|node| node.update())
            .filter(|moved| *moved)
            .count();
        log::trace!("Scene tick: {dirty} of {} nodes dirty", self.nodes.len());
        dirty
    }

    /// Destroy a node and drop it from the scene
    ///
    /// Returns false if no node is stored under `id`.
    pub fn destroy_node(&mut self, id: NodeId) -> Result<bool, SceneError> {
        let Some(node) = self.nodes.get_mut(id) else {
            return Ok(false);
        };
        node.destroy(&mut self.groups)?;
        self.nodes.remove(id);
        Ok(true)
    }

    /// Destroy every node, returning how many were removed
    pub fn destroy_all(&mut self) -> Result<usize, SceneError> {
        let ids: Vec<NodeId> = self.nodes.keys().collect();
        let mut destroyed = 0;
        for id in ids {
            if self.destroy_node(id)? {
                destroyed += 1;
            }
        }
        Ok(destroyed)
    }

    /// Number of stored nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no node
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::scene::HeadlessRasterizer;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scene() -> Scene<HeadlessRasterizer> {
        Scene::new(HeadlessRasterizer::new(), &SceneConfig::default())
    }

    #[test]
    fn test_add_text_uses_default_style() {
        let config = SceneConfig {
            default_style: TextStyle::new().with_font("12px mono"),
            ..SceneConfig::default()
        };
        let mut scene = Scene::new(HeadlessRasterizer::new(), &config);

        let plain = scene.add_text(TextNodeDesc::new(0.0, 0.0, "a"));
        let styled = scene.add_text(
            TextNodeDesc::new(0.0, 0.0, "b").with_style(TextStyle::new().with_fill("red")),
        );

        assert_eq!(scene.node(plain).unwrap().font(), &config.default_style);
        assert_eq!(scene.node(styled).unwrap().font().fill.as_deref(), Some("red"));
        assert_eq!(scene.rasterizer().surfaces_created(), 2);
    }

    #[test]
    fn test_node_handle_matches_storage_key() {
        let mut scene = scene();
        let id = scene.add_text(TextNodeDesc::default());

        assert_eq!(scene.node(id).unwrap().id(), id);
        assert_eq!(scene.node(id).unwrap().events().parent(), Some(id));
    }

    #[test]
    fn test_update_counts_moved_nodes() {
        let mut scene = scene();
        let moved = scene.add_text(TextNodeDesc::new(0.0, 0.0, "a"));
        let _still = scene.add_text(TextNodeDesc::new(0.0, 0.0, "b"));

        assert_eq!(scene.update(), 0);

        scene.node_mut(moved).unwrap().position = Vec2::new(3.0, 4.0);
        assert_eq!(scene.update(), 1);
        assert_eq!(scene.update(), 0);
    }

    #[test]
    fn test_group_membership_dispatches() {
        let mut scene = scene();
        let group = scene.create_group("hud");
        let id = scene.add_text(TextNodeDesc::default());

        let events = Rc::new(RefCell::new(Vec::new()));
        let added = Rc::clone(&events);
        let removed = Rc::clone(&events);
        let node = scene.node_mut(id).unwrap();
        node.events_mut().on_added_to_group.subscribe(move |_| added.borrow_mut().push("added")).unwrap();
        node.events_mut()
            .on_removed_from_group
            .subscribe(move |_| removed.borrow_mut().push("removed"))
            .unwrap();

        scene.add_to_group(id, group).unwrap();
        assert_eq!(scene.node(id).unwrap().group(), Some(group));
        assert!(scene.groups().get(group).unwrap().contains(id));

        assert!(scene.remove_from_group(id).unwrap());
        assert!(!scene.remove_from_group(id).unwrap());
        assert_eq!(scene.node(id).unwrap().group(), None);

        assert_eq!(*events.borrow(), vec!["added", "removed"]);
    }

    #[test]
    fn test_node_joins_only_one_group() {
        let mut scene = scene();
        let first = scene.create_group("a");
        let second = scene.create_group("b");
        let id = scene.add_text(TextNodeDesc::default());

        scene.add_to_group(id, first).unwrap();
        assert_eq!(
            scene.add_to_group(id, second),
            Err(SceneError::Group(GroupError::AlreadyInGroup { node: id, group: first }))
        );
        assert!(scene.groups().get(second).unwrap().is_empty());
    }

    #[test]
    fn test_destroy_node_removes_from_group_and_storage() {
        let mut scene = scene();
        let group = scene.create_group("hud");
        let id = scene.add_text(TextNodeDesc::default());
        scene.add_to_group(id, group).unwrap();

        assert!(scene.destroy_node(id).unwrap());
        assert!(scene.node(id).is_none());
        assert!(scene.groups().get(group).unwrap().is_empty());
        assert!(!scene.destroy_node(id).unwrap());
    }

    #[test]
    fn test_destroy_all() {
        let mut scene = scene();
        let group = scene.create_group("hud");
        for index in 0..4 {
            let id = scene.add_text(TextNodeDesc::new(0.0, 0.0, format!("{index}")));
            if index % 2 == 0 {
                scene.add_to_group(id, group).unwrap();
            }
        }

        assert_eq!(scene.destroy_all().unwrap(), 4);
        assert!(scene.is_empty());
        assert!(scene.groups().get(group).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_node_is_reported() {
        let mut scene = scene();
        let group = scene.create_group("hud");
        let id = scene.add_text(TextNodeDesc::default());
        scene.destroy_node(id).unwrap();

        assert_eq!(scene.add_to_group(id, group), Err(SceneError::NodeNotFound(id)));
        assert_eq!(scene.remove_from_group(id), Err(SceneError::NodeNotFound(id)));
    }
}

//! Node groups
//!
//! A group is an ordered membership list of node handles. Groups never own
//! nodes and nodes only keep a [`GroupId`] back to their group, so either
//! side can go away without dangling references.

use super::{GroupId, NodeId};
use slotmap::SlotMap;
use thiserror::Error;

/// Group membership errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// No group is stored under this handle
    #[error("Group not found: {0:?}")]
    GroupNotFound(GroupId),

    /// Node is not a member of the group
    #[error("Node {node:?} is not a member of group {group:?}")]
    NotAMember {
        /// Group asked to remove the node
        group: GroupId,
        /// Node that was not found
        node: NodeId,
    },

    /// Node already belongs to a group
    #[error("Node {node:?} already belongs to group {group:?}")]
    AlreadyInGroup {
        /// Node being added
        node: NodeId,
        /// Group it currently belongs to
        group: GroupId,
    },
}

/// Removal capability a node needs when it is destroyed
pub trait GroupMembership {
    /// Remove `node` from `group`
    fn remove_member(&mut self, group: GroupId, node: NodeId) -> Result<(), GroupError>;
}

/// Ordered collection of node handles
#[derive(Debug, Clone, Default)]
pub struct Group {
    name: String,
    members: Vec<NodeId>,
}

impl Group {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in insertion order
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Whether `node` is a member
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Slot map of groups
#[derive(Debug, Default)]
pub struct GroupStorage {
    groups: SlotMap<GroupId, Group>,
}

impl GroupStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named group
    pub fn create(&mut self, name: impl Into<String>) -> GroupId {
        self.groups.insert(Group::new(name))
    }

    /// Look up a group
    pub fn get(&self, group: GroupId) -> Option<&Group> {
        self.groups.get(group)
    }

    /// Append `node` to `group`
    ///
    /// Adding an existing member is a no-op.
    pub fn add_member(&mut self, group: GroupId, node: NodeId) -> Result<(), GroupError> {
        let entry = self.groups.get_mut(group).ok_or(GroupError::GroupNotFound(group))?;
        if !entry.contains(node) {
            entry.members.push(node);
        }
        Ok(())
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group exists
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl GroupMembership for GroupStorage {
    fn remove_member(&mut self, group: GroupId, node: NodeId) -> Result<(), GroupError> {
        let entry = self.groups.get_mut(group).ok_or(GroupError::GroupNotFound(group))?;
        let index = entry
            .members
            .iter()
            .position(|member| *member == node)
            .ok_or(GroupError::NotAMember { group, node })?;
        entry.members.remove(index);
        Ok(())
    }
}

//! Per-object signals
//!
//! Every scene node owns an [`EventHub`]: a fixed set of lifecycle signals
//! plus optional input and animation signal groups that other subsystems
//! switch on when they start driving the node. Consumers subscribe once at
//! setup; the owning subsystems dispatch when the transition happens.

pub mod signal;
pub mod hub;

pub use signal::{Signal, SignalError, SubscriptionId};
pub use hub::{AnimationSignals, EventHub, InputSignals};

use crate::foundation::math::Vec2;
use crate::scene::{GroupId, NodeId};

/// Payload of group membership signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEvent {
    /// Node that joined or left the group
    pub node: NodeId,
    /// Group involved
    pub group: GroupId,
}

/// Payload of input signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Node under the pointer
    pub node: NodeId,
    /// Index of the pointer (mouse = 0, touches from 1)
    pub pointer_id: u32,
    /// Pointer position in world space
    pub position: Vec2,
}

/// Payload of animation signals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationEvent {
    /// Node playing the animation
    pub node: NodeId,
    /// Name of the animation
    pub animation: String,
}

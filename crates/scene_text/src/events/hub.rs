//! Lifecycle signal hub owned by a scene node

use super::{AnimationEvent, GroupEvent, PointerEvent, Signal};
use crate::scene::NodeId;

/// Input signals, created together when a node becomes interactive
#[derive(Debug, Default)]
pub struct InputSignals {
    /// Pointer entered the node
    pub over: Signal<PointerEvent>,
    /// Pointer left the node
    pub out: Signal<PointerEvent>,
    /// Pointer pressed on the node
    pub down: Signal<PointerEvent>,
    /// Pointer released on the node
    pub up: Signal<PointerEvent>,
    /// Drag started on the node
    pub drag_start: Signal<PointerEvent>,
    /// Drag stopped on the node
    pub drag_stop: Signal<PointerEvent>,
}

impl InputSignals {
    /// Number of signals in the group
    pub const COUNT: usize = 6;

    fn dispose(&mut self) -> usize {
        [
            &mut self.over,
            &mut self.out,
            &mut self.down,
            &mut self.up,
            &mut self.drag_start,
            &mut self.drag_stop,
        ]
        .into_iter()
        .map(|signal| signal.dispose())
        .filter(|flag| *flag)
        .count()
    }
}

/// Animation signals, created together when a node gets an animation player
#[derive(Debug, Default)]
pub struct AnimationSignals {
    /// Animation started playing
    pub start: Signal<AnimationEvent>,
    /// Animation reached its last frame
    pub complete: Signal<AnimationEvent>,
    /// Animation wrapped around
    pub looped: Signal<AnimationEvent>,
}

impl AnimationSignals {
    /// Number of signals in the group
    pub const COUNT: usize = 3;

    fn dispose(&mut self) -> usize {
        [&mut self.start, &mut self.complete, &mut self.looped]
            .into_iter()
            .map(|signal| signal.dispose())
            .filter(|flag| *flag)
            .count()
    }
}

/// Signal registry bound to the lifetime of one node
///
/// The five lifecycle signals always exist. The input and animation groups
/// are either fully present or absent, so disposal never has to guess.
#[derive(Debug)]
pub struct EventHub {
    parent: Option<NodeId>,
    /// Node was added to a group
    pub on_added_to_group: Signal<GroupEvent>,
    /// Node was removed from a group
    pub on_removed_from_group: Signal<GroupEvent>,
    /// Node was killed
    pub on_killed: Signal<NodeId>,
    /// Node was revived
    pub on_revived: Signal<NodeId>,
    /// Node left the world bounds
    pub on_out_of_bounds: Signal<NodeId>,
    input: Option<InputSignals>,
    animation: Option<AnimationSignals>,
    destroyed: bool,
}

impl EventHub {
    /// Number of lifecycle signals every hub carries
    pub const FIXED_SIGNALS: usize = 5;

    /// Create the hub for `parent` with only the lifecycle signals
    pub fn new(parent: NodeId) -> Self {
        Self {
            parent: Some(parent),
            on_added_to_group: Signal::new(),
            on_removed_from_group: Signal::new(),
            on_killed: Signal::new(),
            on_revived: Signal::new(),
            on_out_of_bounds: Signal::new(),
            input: None,
            animation: None,
            destroyed: false,
        }
    }

    /// Owning node, `None` once destroyed
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Create the input signal group if it does not exist yet
    ///
    /// On a destroyed hub the group is created already disposed, so it
    /// rejects subscribers like every other signal of the hub.
    pub fn enable_input_signals(&mut self) -> &mut InputSignals {
        let destroyed = self.destroyed;
        let parent = self.parent;
        self.input.get_or_insert_with(|| {
            let mut signals = InputSignals::default();
            if destroyed {
                log::warn!("Input signals requested on a destroyed event hub");
                signals.dispose();
            } else {
                log::trace!("Input signals enabled for {parent:?}");
            }
            signals
        })
    }

    /// Create the animation signal group if it does not exist yet
    ///
    /// Same rules as [`EventHub::enable_input_signals`].
    pub fn enable_animation_signals(&mut self) -> &mut AnimationSignals {
        let destroyed = self.destroyed;
        let parent = self.parent;
        self.animation.get_or_insert_with(|| {
            let mut signals = AnimationSignals::default();
            if destroyed {
                log::warn!("Animation signals requested on a destroyed event hub");
                signals.dispose();
            } else {
                log::trace!("Animation signals enabled for {parent:?}");
            }
            signals
        })
    }

    /// Input signals, if enabled
    pub fn input(&self) -> Option<&InputSignals> {
        self.input.as_ref()
    }

    /// Mutable input signals, if enabled
    pub fn input_mut(&mut self) -> Option<&mut InputSignals> {
        self.input.as_mut()
    }

    /// Animation signals, if enabled
    pub fn animation(&self) -> Option<&AnimationSignals> {
        self.animation.as_ref()
    }

    /// Mutable animation signals, if enabled
    pub fn animation_mut(&mut self) -> Option<&mut AnimationSignals> {
        self.animation.as_mut()
    }

    /// Whether [`EventHub::destroy`] has run
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Clear the parent and dispose every signal the hub holds
    ///
    /// Returns the number of signals disposed by this call. Calling it on an
    /// already destroyed hub disposes nothing and returns 0.
    pub fn destroy(&mut self) -> usize {
        if self.destroyed {
            return 0;
        }

        let parent = self.parent.take();

        let fixed = [
            self.on_added_to_group.dispose(),
            self.on_removed_from_group.dispose(),
            self.on_killed.dispose(),
            self.on_revived.dispose(),
            self.on_out_of_bounds.dispose(),
        ];
        let mut disposed = fixed.into_iter().filter(|flag| *flag).count();

        if let Some(input) = self.input.as_mut() {
            disposed += input.dispose();
        }

        if let Some(animation) = self.animation.as_mut() {
            disposed += animation.dispose();
        }

        self.destroyed = true;
        log::debug!("Event hub of {parent:?} destroyed, {disposed} signals disposed");
        disposed
    }
}

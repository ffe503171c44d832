//! Event hub scenarios covering setup by other subsystems and teardown

use crate::config::SceneConfig;
use crate::events::{AnimationEvent, PointerEvent};
use crate::foundation::math::Vec2;
use crate::scene::{HeadlessRasterizer, Scene, TextNodeDesc};
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_destroy_clears_parent_and_disposes() {
        let mut scene = Scene::new(HeadlessRasterizer::new(), &SceneConfig::default());
        let owner = scene.add_text(TextNodeDesc::default());
        let hub = scene.node_mut(owner).unwrap().events_mut();

        assert_eq!(hub.destroy(), 5);
        assert_eq!(hub.parent(), None);
        assert!(hub.on_added_to_group.is_disposed());
        assert!(hub.on_removed_from_group.is_disposed());
        assert!(hub.on_killed.is_disposed());
        assert!(hub.on_revived.is_disposed());
        assert!(hub.on_out_of_bounds.is_disposed());

        // Hardened teardown: a second destroy is a documented no-op
        assert_eq!(hub.destroy(), 0);
    }

    #[test]
    fn test_input_and_animation_subscribers_until_node_destroyed() {
        let mut scene = Scene::new(HeadlessRasterizer::new(), &SceneConfig::default());
        let id = scene.add_text(TextNodeDesc::new(0.0, 0.0, "button"));
        let received = Rc::new(RefCell::new(Vec::new()));

        let node = scene.node_mut(id).unwrap();
        let input_sink = Rc::clone(&received);
        node.events_mut()
            .enable_input_signals()
            .down
            .subscribe(move |event: &PointerEvent| input_sink.borrow_mut().push(format!("down {}", event.pointer_id)))
            .unwrap();
        let animation_sink = Rc::clone(&received);
        node.events_mut()
            .enable_animation_signals()
            .complete
            .subscribe(move |event: &AnimationEvent| animation_sink.borrow_mut().push(format!("done {}", event.animation)))
            .unwrap();

        let pointer = PointerEvent { node: id, pointer_id: 0, position: Vec2::new(1.0, 1.0) };
        let finished = AnimationEvent { node: id, animation: "pulse".to_string() };
        let hub = node.events_mut();
        assert_eq!(hub.input_mut().unwrap().down.dispatch(&pointer), 1);
        assert_eq!(hub.animation_mut().unwrap().complete.dispatch(&finished), 1);

        scene.destroy_node(id).unwrap();
        assert_eq!(*received.borrow(), vec!["down 0".to_string(), "done pulse".to_string()]);
    }

    #[test]
    fn test_node_destroy_disposes_every_enabled_group() {
        let mut groups = crate::scene::GroupStorage::new();
        let mut scene = Scene::new(HeadlessRasterizer::new(), &SceneConfig::default());
        let id = scene.add_text(TextNodeDesc::default());
        let node = scene.node_mut(id).unwrap();
        node.events_mut().enable_input_signals();
        node.events_mut().enable_animation_signals();

        node.destroy(&mut groups).unwrap();

        let hub = node.events();
        assert!(hub.is_destroyed());
        assert!(hub.input().unwrap().drag_stop.is_disposed());
        assert!(hub.animation().unwrap().looped.is_disposed());
        assert!(hub.on_out_of_bounds.is_disposed());
    }
}

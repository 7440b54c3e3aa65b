/// Integration tests for ServerToClientReplicationWindow
///
/// Key invariants:
/// 1. Membership and is_in_window always agree; members never carry InvalidRole
/// 2. The committed set only changes inside update_window
/// 3. The controlled entity is Autonomous, everything else Simulated

use glam::Vec3;
use proptest::prelude::*;

use repwin_server::{
    RelevanceClass, ReplicationWindow, ServerToClientReplicationWindow, WindowConfig,
};
use repwin_shared::NetEntityRole;
use repwin_test::{assert_role_invariant, entity, init_logger, RecordingConnection, TestWorld};

fn aoi_window(config: WindowConfig) -> (ServerToClientReplicationWindow, RecordingConnection) {
    let connection = RecordingConnection::new();
    let window = ServerToClientReplicationWindow::new(config, connection.boxed()).unwrap();
    (window, connection)
}

fn small_radius() -> WindowConfig {
    WindowConfig {
        awareness_radius: 10.0,
        ..Default::default()
    }
}

#[test]
fn controlled_entity_is_autonomous_and_neighbours_simulated() {
    init_logger();
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let near = world.spawn_spatial(2, 5.0);
    let far = world.spawn_spatial(3, 50.0);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);

    assert_eq!(window.is_in_window(&avatar), Some(NetEntityRole::Autonomous));
    assert_eq!(window.is_in_window(&near), Some(NetEntityRole::Simulated));
    assert_eq!(window.is_in_window(&far), None);
    assert_eq!(window.entity_role(&far), NetEntityRole::InvalidRole);
    for handle in [avatar, near, far] {
        assert_role_invariant!(window, handle);
    }
}

#[test]
fn entity_on_radius_boundary_is_included() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let edge = world.spawn_spatial(2, 10.0);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);

    assert!(window.replication_set().contains(&edge));
}

#[test]
fn no_controlled_entity_means_only_global_and_subscribed() {
    let mut world = TestWorld::new();
    let spatial = world.spawn_spatial(1, 0.0);
    let global = world.spawn(2, Vec3::new(1.0e6, 0.0, 0.0), RelevanceClass::AlwaysRelevant);
    let subscribed = world.spawn_spatial(3, 1.0e6);

    let (mut window, _) = aoi_window(small_radius());
    assert!(window.add_entity(subscribed));
    window.update_window(&world);

    assert_eq!(window.is_in_window(&spatial), None);
    assert_eq!(window.is_in_window(&global), Some(NetEntityRole::Simulated));
    assert_eq!(window.is_in_window(&subscribed), Some(NetEntityRole::Simulated));
}

#[test]
fn never_relevant_entities_stay_out_even_when_subscribed() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let hidden = world.spawn(2, Vec3::ZERO, RelevanceClass::Never);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    // not yet seen by the window, so the request is only staged
    assert!(window.add_entity(hidden));
    window.update_window(&world);
    assert_eq!(window.is_in_window(&hidden), None);

    assert!(!window.add_entity(hidden));
    window.update_window(&world);
    assert_eq!(window.is_in_window(&hidden), None);
}

#[test]
fn set_is_stable_between_updates() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let near = world.spawn_spatial(2, 1.0);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);
    let before = window.replication_set().clone();

    // world and staged changes do not leak into the committed set
    world.move_to(&near, Vec3::new(500.0, 0.0, 0.0));
    let late = world.spawn_spatial(3, 2.0);
    window.add_entity(late);
    window.remove_entity(&avatar);

    assert_eq!(window.replication_set(), &before);
    assert_eq!(window.replication_set(), &before);

    window.update_window(&world);
    assert_ne!(window.replication_set(), &before);
}

#[test]
fn staged_add_and_remove_apply_on_next_update() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let remote = world.spawn_spatial(2, 1000.0);
    let near = world.spawn_spatial(3, 2.0);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);
    assert_eq!(window.is_in_window(&remote), None);

    assert!(window.add_entity(remote));
    window.remove_entity(&near);
    assert_eq!(window.is_in_window(&remote), None);
    assert!(window.replication_set().contains(&near));

    window.update_window(&world);
    assert_eq!(window.is_in_window(&remote), Some(NetEntityRole::Simulated));
    assert_eq!(window.is_in_window(&near), None);

    // re-adding lifts the exclusion
    assert!(window.add_entity(near));
    window.update_window(&world);
    assert!(window.replication_set().contains(&near));
}

#[test]
fn removing_absent_entity_is_a_no_op() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let later = world.spawn_spatial(2, 1.0);
    world.despawn(&later);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.remove_entity(&later);
    window.update_window(&world);

    // the entity was never a member, so spawning it again brings it in
    world.spawn_spatial(2, 1.0);
    window.update_window(&world);
    assert!(window.replication_set().contains(&later));
}

#[test]
fn exclusions_are_forgotten_when_entity_leaves_world() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let near = world.spawn_spatial(2, 1.0);

    let (mut window, _) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);

    window.remove_entity(&near);
    window.update_window(&world);
    assert_eq!(window.is_in_window(&near), None);

    world.despawn(&near);
    window.update_window(&world);
    world.spawn_spatial(2, 1.0);
    window.update_window(&world);

    assert!(window.replication_set().contains(&near));
}

#[test]
fn subscriptions_are_capped_at_max_entities() {
    let mut world = TestWorld::new();
    for id in 0..4 {
        world.spawn_spatial(id, 0.0);
    }

    let (mut window, _) = aoi_window(WindowConfig {
        max_entities: 3,
        ..small_radius()
    });

    assert!(window.add_entity(entity(0)));
    assert!(window.add_entity(entity(1)));
    assert!(window.add_entity(entity(2)));
    // re-adding an existing subscription is accepted
    assert!(window.add_entity(entity(2)));
    assert!(!window.add_entity(entity(3)));
}

#[test]
fn set_is_truncated_to_nearest_entities() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    let near = world.spawn_spatial(2, 1.0);
    let middle = world.spawn_spatial(3, 2.0);
    let far = world.spawn_spatial(4, 3.0);

    let (mut window, _) = aoi_window(WindowConfig {
        max_entities: 3,
        ..small_radius()
    });
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);

    assert_eq!(window.replication_set().len(), 3);
    assert!(window.replication_set().contains(&avatar));
    assert!(window.replication_set().contains(&near));
    assert!(window.replication_set().contains(&middle));
    assert!(!window.replication_set().contains(&far));
}

#[test]
fn ties_break_by_entity_id() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(10, 0.0);
    world.spawn_spatial(7, 3.0);
    world.spawn_spatial(3, -3.0);

    let (mut window, _) = aoi_window(WindowConfig {
        max_entities: 2,
        ..small_radius()
    });
    window.set_controlled_entity(Some(avatar));
    window.update_window(&world);

    assert!(window.replication_set().contains(&entity(3)));
    assert!(!window.replication_set().contains(&entity(7)));
}

#[test]
fn window_never_stages_sends() {
    let mut world = TestWorld::new();
    let avatar = world.spawn_spatial(1, 0.0);
    world.spawn_spatial(2, 1.0);

    let (mut window, connection) = aoi_window(small_radius());
    window.set_controlled_entity(Some(avatar));
    window.add_entity(entity(2));
    window.update_window(&world);
    window.remove_entity(&entity(2));
    window.update_window(&world);
    window.debug_draw();

    assert_eq!(connection.sent_count(), 0);
}

proptest! {
    /// Arbitrary worlds and staged operations never break the role invariant,
    /// never assign Authority and never exceed max_entities
    #[test]
    fn prop_role_invariant_holds(
        positions in prop::collection::vec(-50.0f32..50.0, 1..40),
        staged in prop::collection::vec((0u64..40, any::<bool>()), 0..20),
        max_entities in 1usize..16,
    ) {
        let mut world = TestWorld::new();
        for (id, x) in positions.iter().enumerate() {
            world.spawn_spatial(id as u64, *x);
        }

        let (mut window, _) = aoi_window(WindowConfig {
            awareness_radius: 20.0,
            max_entities,
            ..Default::default()
        });
        window.set_controlled_entity(Some(entity(0)));

        for (id, add) in staged {
            if add {
                window.add_entity(entity(id));
            } else {
                window.remove_entity(&entity(id));
            }
        }
        window.update_window(&world);

        prop_assert!(window.replication_set().len() <= max_entities);
        for id in 0..40u64 {
            let handle = entity(id);
            assert_role_invariant!(window, handle);
            prop_assert_ne!(window.entity_role(&handle), NetEntityRole::Authority);
        }
    }
}

mod common;

use campusnav_lib::{describe, Node, NodeCategory};

use common::{campus_map, graph_from};

#[test]
fn collinear_nodes_continue_straight() {
    let graph = graph_from(
        vec![
            Node::new("A", 0.0, 0.0, NodeCategory::Corridor, 0),
            Node::new("B", 10.0, 0.0, NodeCategory::Corridor, 0),
            Node::new("C", 20.0, 0.0, NodeCategory::Corridor, 0),
        ],
        &[("A", &["B"]), ("B", &["A", "C"]), ("C", &["B"])],
    );
    let lines = describe(&graph, &["A", "B", "C"]);
    assert_eq!(
        lines,
        [
            "Start at the corridor",
            "Walk forward along the corridor",
            "Continue straight along the corridor",
            "You have arrived at your destination",
        ]
    );
}

#[test]
fn short_paths_have_no_directions() {
    let graph = campus_map();
    assert!(describe::<&str>(&graph, &[]).is_empty());
    assert!(describe(&graph, &["Reception"]).is_empty());
}

#[test]
fn same_floor_walk_names_landmarks() {
    let graph = campus_map();
    let lines = describe(&graph, &["Room 101", "C0-2", "C0-3", "Cafeteria"]);
    assert_eq!(
        lines,
        [
            "Start at Room 101",
            "Walk forward along the corridor",
            "Turn LEFT towards Cafeteria",
            "Turn LEFT towards Elevator G",
            "You have arrived at Cafeteria",
        ]
    );
}

#[test]
fn stairs_climb_announces_each_floor() {
    let graph = campus_map();
    let path = [
        "Reception",
        "C0-1",
        "Stairs G",
        "Stairs 1",
        "Stairs 2",
        "C2-1",
        "Room 318A",
    ];
    assert_eq!(
        describe(&graph, &path),
        [
            "Start at Reception",
            "Walk forward (you'll pass near Stairs G)",
            "Turn RIGHT towards Stairs 1",
            "Take the stairs UP to floor 1",
            "Take the stairs UP to floor 2",
            "Walk forward (you'll pass near Room 318A)",
            "Continue straight along the corridor",
            "You have arrived at room Room 318A",
        ]
    );
}

#[test]
fn elevator_ride_down_resets_heading() {
    let graph = campus_map();
    let path = [
        "Lab 1A",
        "C1-2",
        "C1-3",
        "Elevator 1",
        "Elevator G",
        "C0-3",
        "C0-2",
        "Room 101",
    ];
    let lines = describe(&graph, &path);
    assert_eq!(lines[4], "Take the elevator to floor 0");
    assert_eq!(lines[5], "Walk forward (you'll pass near Cafeteria)");
    assert_eq!(lines.last().unwrap(), "You have arrived at room Room 101");
}

#[test]
fn leaving_a_staircase_onto_a_corridor_names_the_exit() {
    let graph = graph_from(
        vec![
            Node::new("S0", 0.0, 0.0, NodeCategory::Stairs, 0),
            Node::new("C1", 0.0, 0.0, NodeCategory::Corridor, 1),
            Node::new("R1", 0.0, 50.0, NodeCategory::Room, 1),
            Node::new("D1", 50.0, 0.0, NodeCategory::Department, 1),
        ],
        &[("S0", &["C1"]), ("C1", &["R1", "D1"])],
    );
    let lines = describe(&graph, &["S0", "C1"]);
    assert_eq!(
        lines,
        [
            "Start at the corridor",
            "Take the stairs UP to floor 1",
            "Exit and head towards the corridor near R1 and D1",
            "You have arrived at your destination",
        ]
    );
}

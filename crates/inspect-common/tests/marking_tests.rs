//! Tests for the marking data model and its JSON representation.

use inspect_common::{Marking, Point2D, RedMarking, RedView, Region};

#[test]
fn test_red_marking_roundtrip() {
    let marking = Marking::Red(RedMarking {
        views: vec![RedView {
            score: 0.87,
            regions: vec![Region {
                outer: vec![
                    Point2D::new(10.0, 10.0),
                    Point2D::new(50.0, 10.5),
                    Point2D::new(30.25, 42.0),
                ],
                score: 0.91,
            }],
        }],
        duration_ms: Some(12.5),
    });

    let json = serde_json::to_string(&marking).unwrap();
    let parsed: Marking = serde_json::from_str(&json).unwrap();

    match parsed {
        Marking::Red(red) => {
            assert_eq!(red.views.len(), 1);
            assert_eq!(red.views[0].regions[0].outer.len(), 3);
            assert_eq!(red.views[0].regions[0].outer[2], Point2D::new(30.25, 42.0));
            assert_eq!(red.duration_ms, Some(12.5));
        }
        other => panic!("expected red marking, got {:?}", other),
    }
}

#[test]
fn test_marking_kind_tag() {
    let json = r#"{
        "kind": "red",
        "views": [
            {
                "score": 0.5,
                "regions": [
                    { "outer": [{ "x": 1.0, "y": 2.0 }], "score": 0.75 }
                ]
            }
        ]
    }"#;

    let marking: Marking = serde_json::from_str(json).unwrap();
    assert!(matches!(marking, Marking::Red(_)));
    assert_eq!(marking.duration_ms(), None);
}

#[test]
fn test_green_marking_has_no_geometry() {
    let json = r#"{
        "kind": "green",
        "views": [{ "score": 0.99, "best_tag": "good" }],
        "duration_ms": 3.0
    }"#;

    let marking: Marking = serde_json::from_str(json).unwrap();
    match marking {
        Marking::Green(green) => {
            assert_eq!(green.views[0].best_tag, "good");
            assert_eq!(green.duration_ms, Some(3.0));
        }
        other => panic!("expected green marking, got {:?}", other),
    }
}

#[test]
fn test_unknown_kind_rejected() {
    let json = r#"{ "kind": "magenta", "views": [] }"#;
    assert!(serde_json::from_str::<Marking>(json).is_err());
}

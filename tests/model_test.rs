use runlines::models::{Actor, Line, Scene, Script, TitleField};
use runlines::{parse, ScriptError};
use proptest::prelude::*;

fn small_script() -> Script {
    let mut script = Script::new("Night Shift");
    script.set_title_field(TitleField::Author, "Avery Kim");
    let nurse = script.actor_or_insert("NURSE");

    let mut scene = Scene::new("INT. WARD - NIGHT");
    scene.add_action("Monitors beep.");
    scene.add_line(Line::new(nurse, "Room four again."));
    script.add_scene(scene);
    script.assign_voice("NURSE", "en-gb-2");
    script.add_voice("en-gb-2");
    script
}

#[test]
fn test_json_round_trip() {
    let script = small_script();
    let json = script.to_json().unwrap();
    let restored = Script::from_json(&json).unwrap();
    assert_eq!(restored, script);
    assert_eq!(restored.all_voices(), ["en-gb-2".to_string()]);
}

#[test]
fn test_json_field_names() {
    let json = small_script().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "Night Shift");
    assert_eq!(value["author"], "Avery Kim");
    assert_eq!(value["scenes"][0]["lines"][1]["line"], "Room four again.");
    assert_eq!(value["scenes"][0]["lines"][1]["order"], 1);
    assert_eq!(value["actors"][1]["name"], "NURSE");
    assert!(value["scenes"][0]["lines"][0].get("enabled").is_none(), "enabled 不应持久化");
}

#[test]
fn test_action_is_restored_first() {
    let json = r#"{
        "name": "Old Record",
        "actors": [{"name": "JOHN"}, {"name": "ACTION"}],
        "scenes": [{
            "name": "INT. A",
            "number": 0,
            "lines": [{"actor": {"name": "JOHN"}, "line": "Hi", "order": 0}]
        }]
    }"#;
    let script = Script::from_json(json).unwrap();
    let names: Vec<_> = script.actors().iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["ACTION", "JOHN"]);
    assert!(script.scenes()[0].lines()[0].enabled);

    let bare = Script::from_json(r#"{"name": "Bare"}"#).unwrap();
    assert_eq!(bare.actors().len(), 1);
    assert!(bare.actors()[0].is_action());
}

#[test]
fn test_corrupt_record_gets_placeholder() {
    assert!(matches!(Script::from_json("{\"name\": 3"), Err(ScriptError::Json(_))));

    let script = Script::from_json_or_placeholder("not json at all");
    assert_eq!(script.name(), "Error");
    assert!(script.scenes().is_empty());
}

#[test]
fn test_scene_editing_keeps_order() {
    let mut scene = Scene::new("INT. WARD");
    scene.add_action("one");
    scene.add_action("two");
    scene.add_action("three");

    assert!(scene.move_line(2, 0));
    scene.insert_line(1, Line::new(Actor::new("NURSE"), "inserted"));
    let removed = scene.remove_line(3);
    assert_eq!(removed.map(|l| l.text().to_string()), Some("two".to_string()));

    let texts: Vec<_> = scene.lines().iter().map(|l| l.text()).collect();
    assert_eq!(texts, vec!["three", "inserted", "one"]);
    let orders: Vec<_> = scene.lines().iter().map(|l| l.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert!(!scene.move_line(0, 9));
}

#[test]
fn test_line_html_follows_edits() {
    let mut line = Line::new(Actor::new("NURSE"), "**Now.**");
    assert_eq!(line.line_html(), "<b>Now.</b>");
    line.set_text("_Later._");
    assert_eq!(line.line_html(), "<u>Later.</u>");
}

#[test]
fn test_parsed_script_persists() {
    let script = parse("Title: Ward\n\nINT. WARD\n\nNURSE\n(quiet)\nSleep.");
    let restored = Script::from_json(&script.to_json().unwrap()).unwrap();
    assert_eq!(restored, script);
}

proptest! {
    #[test]
    fn prop_action_stays_first(names in prop::collection::vec("[A-Z]{1,6}", 0..8)) {
        let mut script = Script::new("P");
        for name in &names {
            script.add_actor(Actor::new(name.as_str()));
        }
        let actors: Vec<Actor> = script.actors().to_vec();
        for actor in actors.iter().skip(1) {
            script.remove_actor(actor);
            prop_assert!(script.actors()[0].is_action());
        }
        prop_assert!(!script.remove_actor(&Actor::action()));
        prop_assert_eq!(script.actors().len(), 1);
    }
}

//! Integration tests for desktop entry building.
//!
//! These tests check the public build API against the fixed line template
//! and read the rendered documents back.

use deskentry_core::{build, Category, DeskEntryError, DesktopEntryDocument, LauncherSpec};

/// Expected key order for a spec with every optional field set.
const FULL_TEMPLATE: [&str; 8] = [
    "Version",
    "Name",
    "Exec",
    "Icon",
    "Type",
    "Comment",
    "Terminal",
    "Categories",
];

fn sample_specs() -> Vec<LauncherSpec> {
    vec![
        LauncherSpec::new("Firefox", "/usr/bin/firefox %u"),
        LauncherSpec::new("My Game", "/opt/games/my game/run.sh")
            .icon("/opt/games/my game/icon.png")
            .categories([Category::Games]),
        LauncherSpec::new("htop", "htop")
            .terminal(true)
            .comment("Process viewer")
            .categories([Category::System, Category::Utility]),
        LauncherSpec::new("Équipe Éditeur", "editeur --mode=équipe")
            .comment("Éditeur partagé")
            .icon("editeur")
            .categories(Category::ALL),
    ]
}

#[test]
fn test_line_order_matches_template() {
    for spec in sample_specs() {
        let doc = build(&spec).unwrap();
        let expected: Vec<&str> = FULL_TEMPLATE
            .iter()
            .copied()
            .filter(|key| match *key {
                "Comment" => spec.comment.is_some(),
                "Categories" => !spec.categories.is_empty(),
                _ => true,
            })
            .collect();

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, expected, "key order for {:?}", spec.name);

        let rendered = doc.render();
        assert!(rendered.starts_with("[Desktop Entry]\nVersion=1.0\n"));
        assert!(rendered.ends_with('\n'));
        assert!(!rendered.contains("\n\n"));
        assert_eq!(rendered.lines().count(), expected.len() + 1);
    }
}

#[test]
fn test_round_trip_recovers_fields() {
    for spec in sample_specs() {
        let doc = build(&spec).unwrap();
        let parsed = DesktopEntryDocument::parse(&doc.render()).unwrap();

        assert_eq!(parsed.get("Name"), Some(spec.name.as_str()));
        assert_eq!(parsed.get("Exec"), Some(spec.exec.as_str()));
        assert_eq!(
            parsed.categories(),
            spec.categories.iter().copied().collect::<Vec<_>>()
        );
        assert_eq!(parsed.file_name(), spec.file_name());
        assert_eq!(parsed, doc);
    }
}

#[test]
fn test_category_lines() {
    let doc = build(&LauncherSpec::new("A", "a")).unwrap();
    assert!(doc.get("Categories").is_none());

    let doc = build(&LauncherSpec::new("A", "a").categories([Category::System, Category::Games]))
        .unwrap();
    assert!(doc.render().contains("\nCategories=Games;System;\n"));
}

#[test]
fn test_name_keeps_spaces_file_name_does_not() {
    let doc = build(&LauncherSpec::new("Visual Studio Code", "code")).unwrap();

    assert_eq!(doc.get("Name"), Some("Visual Studio Code"));
    assert_eq!(doc.file_name(), "Visual_Studio_Code.desktop");
}

#[test]
fn test_missing_fields() {
    assert!(matches!(
        build(&LauncherSpec::new("", "")).unwrap_err(),
        DeskEntryError::MissingField { field: "name" }
    ));
    assert!(matches!(
        build(&LauncherSpec::new("App", " ")).unwrap_err(),
        DeskEntryError::MissingField { field: "exec" }
    ));
}

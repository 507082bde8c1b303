use extension_schema_core::{
    Action, Command, CommandMode, CopyAction, Detail, EmptyView, Extension, List, ListItem,
    Manifest, Metadata, OpenAction, ParamDef, ParamType, RunAction,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let encoded = serde_json::to_string(value).unwrap();
    serde_json::from_str(&encoded).unwrap()
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[test]
fn test_copy_action_round_trip() {
    let action = Action::from(CopyAction::new("Copy URL", "https://example.com"));
    assert_eq!(round_trip(&action), action);
}

#[test]
fn test_open_action_round_trip() {
    let action = Action::from(OpenAction::new("Open Docs", "https://docs.rs"));
    assert_eq!(round_trip(&action), action);
}

#[test]
fn test_run_action_round_trip() {
    let action = Action::from(
        RunAction::new("Search Issues", "search")
            .in_extension("github")
            .with_param("state", "open")
            .with_param("limit", 25.0)
            .with_param("draft", false),
    );
    assert_eq!(round_trip(&action), action);
}

#[test]
fn test_action_tags_on_the_wire() {
    let copy = serde_json::to_value(Action::from(CopyAction::new("c", "t"))).unwrap();
    let open = serde_json::to_value(Action::from(OpenAction::new("o", "t"))).unwrap();
    let run = serde_json::to_value(Action::from(RunAction::new("r", "c"))).unwrap();

    assert_eq!(copy["type"], "copy");
    assert_eq!(open["type"], "open");
    assert_eq!(run["type"], "run");
    // absent optionals stay off the wire
    assert!(run.get("extension").is_none());
    assert!(run.get("params").is_none());
}

#[test]
fn test_unknown_action_tag_is_rejected() {
    let result = serde_json::from_value::<Action>(json!({
        "type": "push",
        "title": "Next Page",
        "target": "detail.json",
    }));
    assert!(result.is_err());

    let result = serde_json::from_value::<Action>(json!({
        "title": "No Tag",
        "text": "orphan",
    }));
    assert!(result.is_err());
}

#[test]
fn test_run_action_build_scenario() {
    // {type:"run", title:"Build", command:"make", params:{target:"all", verbose:true}}
    let wire = json!({
        "type": "run",
        "title": "Build",
        "command": "make",
        "params": { "target": "all", "verbose": true },
    });

    let action: Action = serde_json::from_value(wire.clone()).unwrap();
    let Action::Run(run) = &action else {
        panic!("expected a run action");
    };

    assert_eq!(run.title, "Build");
    assert_eq!(run.command, "make");
    assert!(run.extension.is_none());

    let params = run.params.as_ref().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params["target"].as_str(), Some("all"));
    assert_eq!(params["verbose"].as_bool(), Some(true));

    assert_eq!(serde_json::to_value(&action).unwrap(), wire);
}

// ---------------------------------------------------------------------------
// Commands and parameter declarations
// ---------------------------------------------------------------------------

#[test]
fn test_all_command_modes_decode() {
    for mode in ["filter", "search", "detail", "silent", "action"] {
        let command: Command =
            serde_json::from_value(json!({ "name": "c", "mode": mode })).unwrap();
        assert_eq!(command.mode.as_str(), mode);
    }
}

#[test]
fn test_unknown_command_mode_is_rejected() {
    let result = serde_json::from_value::<Command>(json!({
        "name": "list",
        "mode": "generator",
    }));
    assert!(result.is_err());
}

#[test]
fn test_unknown_param_type_is_rejected() {
    let result = serde_json::from_value::<ParamDef>(json!({
        "name": "files",
        "type": "list",
    }));
    assert!(result.is_err());
}

#[test]
fn test_param_def_absent_optional_means_required() {
    let absent: ParamDef =
        serde_json::from_value(json!({ "name": "query", "type": "string" })).unwrap();
    let explicit: ParamDef =
        serde_json::from_value(json!({ "name": "query", "type": "string", "optional": false }))
            .unwrap();

    assert_eq!(absent, explicit);
    assert!(absent.is_required());

    // required params re-encode without the field, optional ones keep it
    let wire = serde_json::to_value(&absent).unwrap();
    assert!(wire.get("optional").is_none());

    let wire = serde_json::to_value(ParamDef::optional("limit", ParamType::Number)).unwrap();
    assert_eq!(wire["optional"], true);
}

#[test]
fn test_command_param_order_is_preserved() {
    let command = Command::new("create", CommandMode::Silent)
        .with_param(ParamDef::required("title", ParamType::String))
        .with_param(ParamDef::required("body", ParamType::String))
        .with_param(ParamDef::optional("draft", ParamType::Boolean));

    let decoded = round_trip(&command);
    let names: Vec<&str> = decoded.params().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["title", "body", "draft"]);
}

// ---------------------------------------------------------------------------
// Manifests and extensions
// ---------------------------------------------------------------------------

#[test]
fn test_extension_wire_shape_is_flat() {
    let extension = Extension::new(
        "gists",
        Manifest::new("GitHub Gists").with_command(Command::new("list", CommandMode::Filter)),
    );

    let wire = serde_json::to_value(&extension).unwrap();
    assert_eq!(wire["name"], "gists");
    assert_eq!(wire["title"], "GitHub Gists");
    assert_eq!(wire["commands"][0]["name"], "list");

    assert_eq!(round_trip(&extension), extension);
}

#[test]
fn test_empty_commands_and_absent_actions_stay_distinct() {
    let wire = json!({ "name": "scratch", "title": "Scratch", "commands": [] });

    let extension: Extension = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(extension.manifest.commands, Some(Vec::new()));
    assert!(extension.manifest.actions.is_none());
    assert!(extension.manifest.commands().is_empty());

    assert_eq!(serde_json::to_value(&extension).unwrap(), wire);
}

#[test]
fn test_manifest_command_order_is_preserved() {
    let manifest = Manifest::new("Dev Docs")
        .with_command(Command::new("search", CommandMode::Search))
        .with_command(Command::new("recent", CommandMode::Filter))
        .with_command(Command::new("open", CommandMode::Silent));

    let decoded = round_trip(&manifest);
    let names: Vec<&str> = decoded.commands().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["search", "recent", "open"]);
}

#[test]
fn test_full_manifest_fixture() {
    let wire = json!({
        "name": "gists",
        "title": "GitHub Gists",
        "description": "Browse and create gists",
        "commands": [
            {
                "name": "list",
                "description": "List your gists",
                "params": [
                    { "name": "public", "type": "boolean", "optional": true },
                ],
                "mode": "filter",
            },
            {
                "name": "create",
                "params": [
                    { "name": "filename", "type": "string" },
                    { "name": "content", "type": "string" },
                ],
                "mode": "silent",
            },
        ],
        "actions": [
            { "type": "open", "title": "Open Gists", "target": "https://gist.github.com" },
            {
                "type": "run",
                "title": "Create From Clipboard",
                "command": "create",
                "params": { "filename": "clip.txt", "content": "{clipboard}" },
            },
        ],
    });

    let extension: Extension = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(extension.name, "gists");
    assert_eq!(extension.manifest.commands().len(), 2);
    assert_eq!(extension.manifest.actions().len(), 2);

    let list = extension.command("list").unwrap();
    assert_eq!(list.mode, CommandMode::Filter);
    assert!(!list.param("public").unwrap().is_required());

    let create = extension.command("create").unwrap();
    assert!(create.description.is_none());
    assert!(create.param("filename").unwrap().is_required());

    match &extension.manifest.actions()[1] {
        Action::Run(run) => assert_eq!(run.command, "create"),
        other => panic!("expected a run action, got {other:?}"),
    }

    assert_eq!(serde_json::to_value(&extension).unwrap(), wire);
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[test]
fn test_list_round_trip() {
    let list = List::new()
        .with_title("Gists")
        .with_empty_view(EmptyView {
            text: Some("No gists yet".to_string()),
            actions: Some(vec![OpenAction::new("Create One", "https://gist.github.com").into()]),
        })
        .with_item(
            ListItem::new("dotfiles")
                .with_id("1")
                .with_subtitle("shell setup")
                .with_accessory("public")
                .with_action(CopyAction::new("Copy URL", "https://gist.github.com/1"))
                .with_metadata(
                    "owner",
                    Metadata {
                        title: Some("Owner".to_string()),
                        text: Some("octocat".to_string()),
                        url: None,
                    },
                ),
        );

    assert_eq!(round_trip(&list), list);
}

#[test]
fn test_detail_round_trip() {
    let detail = Detail::new("# Readme\n\nHello.")
        .with_title("dotfiles")
        .with_language("markdown")
        .with_action(RunAction::new("Refresh", "view").with_param("id", "1"));

    let decoded = round_trip(&detail);
    assert_eq!(decoded, detail);
    assert_eq!(decoded.text, "# Readme\n\nHello.");
}

#[test]
fn test_empty_list_keeps_items_on_the_wire() {
    let wire = serde_json::to_value(List::new()).unwrap();
    assert_eq!(wire, json!({ "items": [] }));

    let list: List = serde_json::from_value(wire).unwrap();
    assert!(list.items.is_empty());
    assert!(list.title.is_none());
}

//! End-to-end integration tests across the workspace crates
//!
//! These tests exercise the complete flow: storage host -> JSON parse ->
//! schema validation -> snapshot queries.

use std::sync::Arc;

use serde_json::json;
use ws_core::{Error, ReloadPolicy, ResolverOptions, Tool, WorkspaceResolver};
use ws_fs::{Host, LocalHost, MemoryHost, NormalizedPath};
use ws_schema::SchemaValidator;
use ws_test_utils::{TestWorkspace, documents};

#[tokio::test]
async fn test_local_workspace_full_query_surface() {
    let ws = TestWorkspace::with_document(&documents::multi_project());

    let mut resolver = WorkspaceResolver::new(ws.root(), LocalHost::new());
    resolver.load_default().await.unwrap();

    assert_eq!(resolver.version().unwrap(), 1);
    assert_eq!(resolver.list_project_names().unwrap(), vec!["app", "lib"]);
    assert_eq!(resolver.default_project_name().unwrap(), Some("app"));

    for name in resolver.list_project_names().unwrap() {
        let view = resolver.get_project(name).unwrap();
        for tool in Tool::ALL {
            assert!(view.tool(tool).is_empty(), "{name} view leaked {tool} settings");
            // The dedicated accessor still answers
            resolver.get_project_tool(name, tool).unwrap();
        }
    }

    let app_root = ws.path("projects/app/src/main.ts");
    assert_eq!(resolver.get_project_by_path(app_root).unwrap(), Some("app"));
}

#[tokio::test]
async fn test_resolvers_sharing_a_host_are_independent() {
    let host: Arc<dyn Host> = Arc::new(
        MemoryHost::new()
            .with_file("/ws/a.json", serde_json::to_vec(&documents::multi_project()).unwrap())
            .with_file("/ws/b.json", serde_json::to_vec(&documents::single_project()).unwrap()),
    );

    let mut handles = Vec::new();
    for (file, expected) in [("a.json", vec!["app", "lib"]), ("b.json", vec!["app"])] {
        let host = Arc::clone(&host);
        handles.push(tokio::spawn(async move {
            let mut resolver = WorkspaceResolver::new("/ws", host);
            resolver.load_from_host(file).await.unwrap();
            let names: Vec<String> = resolver
                .list_project_names()
                .unwrap()
                .into_iter()
                .map(String::from)
                .collect();
            assert_eq!(names, expected);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_shared_validator_across_resolvers() {
    let validator = Arc::new(SchemaValidator::workspace().unwrap());

    let mut first = WorkspaceResolver::new("/ws", MemoryHost::new()).with_validator(validator.clone());
    let mut second = WorkspaceResolver::new("/ws", MemoryHost::new()).with_validator(validator);

    first.load_from_value(documents::multi_project()).await.unwrap();
    assert!(second.load_from_value(documents::invalid()).await.is_err());

    assert!(first.is_loaded());
    assert!(!second.is_loaded());
}

#[tokio::test]
async fn test_reject_policy_end_to_end() {
    let ws = TestWorkspace::with_document(&documents::multi_project());
    ws.write_document("other.json", &json!({ "version": 3 }));

    let options = ResolverOptions::new().with_reload(ReloadPolicy::Reject);
    let mut resolver = WorkspaceResolver::with_options(ws.root(), LocalHost::new(), options);
    resolver.load_default().await.unwrap();

    let err = resolver.load_from_host("other.json").await.unwrap_err();
    assert!(matches!(err, Error::AlreadyLoaded));
    assert_eq!(resolver.version().unwrap(), 1);
}

#[tokio::test]
async fn test_root_is_available_without_loading() {
    let ws = TestWorkspace::new();
    let resolver = WorkspaceResolver::new(ws.root(), LocalHost::new());

    assert_eq!(resolver.root(), &NormalizedPath::new(ws.root()).normalize());
    assert!(!resolver.host().exists(&resolver.root().join("workspace.json")).await);
    assert!(matches!(resolver.version(), Err(Error::NotYetLoaded)));
}

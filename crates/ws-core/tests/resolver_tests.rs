//! Tests for loading a workspace and querying the snapshot

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use ws_core::{Error, ProjectType, ReloadPolicy, ResolverOptions, WorkspaceResolver};
use ws_fs::MemoryHost;
use ws_test_utils::documents;

fn resolver() -> WorkspaceResolver<MemoryHost> {
    WorkspaceResolver::new("/ws", MemoryHost::new())
}

async fn loaded(document: Value) -> WorkspaceResolver<MemoryHost> {
    let mut resolver = resolver();
    resolver.load_from_value(document).await.unwrap();
    resolver
}

// ============================================================================
// Loading
// ============================================================================

mod load_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_load_returns_same_resolver_for_chaining() {
        let mut resolver = resolver();
        let names: Vec<String> = resolver
            .load_from_value(documents::multi_project())
            .await
            .unwrap()
            .list_project_names()
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(names, vec!["app", "lib"]);
        assert!(resolver.is_loaded());
    }

    #[tokio::test]
    async fn test_validation_failure_is_schema_error() {
        let mut resolver = resolver();
        let err = resolver.load_from_value(documents::invalid()).await.unwrap_err();

        let Error::SchemaValidation(inner) = &err else {
            panic!("expected SchemaValidation, got {err:?}");
        };
        let violations = inner.violations().expect("diagnostics");
        assert!(!violations.is_empty());
    }

    #[tokio::test]
    async fn test_whole_float_version_loads() {
        let mut resolver = resolver();
        let version = resolver
            .load_from_value(json!({ "version": 1.0 }))
            .await
            .unwrap()
            .version()
            .unwrap();
        assert_eq!(version, 1);
    }

    #[tokio::test]
    async fn test_fractional_version_is_schema_error() {
        let mut resolver = resolver();
        let err = resolver.load_from_value(json!({ "version": 1.5 })).await.unwrap_err();
        assert!(matches!(err, Error::SchemaValidation(_)), "got {err:?}");
        assert!(!resolver.is_loaded());
    }

    #[tokio::test]
    async fn test_validation_failure_leaves_resolver_unloaded() {
        let mut resolver = resolver();
        assert!(resolver.load_from_value(documents::invalid()).await.is_err());

        assert!(!resolver.is_loaded());
        assert!(matches!(resolver.version(), Err(Error::NotYetLoaded)));
        assert!(matches!(resolver.list_project_names(), Err(Error::NotYetLoaded)));
    }

    #[tokio::test]
    async fn test_failed_reload_clears_previous_snapshot() {
        let mut resolver = loaded(documents::multi_project()).await;

        assert!(resolver.load_from_value(documents::invalid()).await.is_err());
        assert!(matches!(resolver.version(), Err(Error::NotYetLoaded)));
    }

    #[tokio::test]
    async fn test_reload_replaces_snapshot() {
        let mut resolver = loaded(documents::multi_project()).await;

        resolver.load_from_value(json!({ "version": 2 })).await.unwrap();
        assert_eq!(resolver.version().unwrap(), 2);
        assert!(resolver.list_project_names().unwrap().is_empty());
        assert!(resolver.get_cli().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reject_policy_keeps_first_snapshot() {
        let options = ResolverOptions::new().with_reload(ReloadPolicy::Reject);
        let mut resolver = WorkspaceResolver::with_options("/ws", MemoryHost::new(), options);
        resolver.load_from_value(documents::multi_project()).await.unwrap();

        let err = resolver.load_from_value(json!({ "version": 2 })).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyLoaded));
        assert_eq!(resolver.version().unwrap(), 1);
    }
}

// ============================================================================
// Unloaded-state guard
// ============================================================================

mod unloaded_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_and_host_never_fail() {
        let resolver = WorkspaceResolver::new("/ws", MemoryHost::new().with_file("/ws/a", "x"));
        assert_eq!(resolver.root().as_str(), "/ws");
        assert_eq!(resolver.host().len(), 1);
    }

    #[test]
    fn test_every_accessor_requires_load() {
        let resolver = resolver();

        let results: Vec<(&str, bool)> = vec![
            ("version", matches!(resolver.version(), Err(Error::NotYetLoaded))),
            ("new_project_root", matches!(resolver.new_project_root(), Err(Error::NotYetLoaded))),
            ("list_project_names", matches!(resolver.list_project_names(), Err(Error::NotYetLoaded))),
            ("get_project", matches!(resolver.get_project("app"), Err(Error::NotYetLoaded))),
            ("get_default_project", matches!(resolver.get_default_project(), Err(Error::NotYetLoaded))),
            ("default_project_name", matches!(resolver.default_project_name(), Err(Error::NotYetLoaded))),
            ("get_cli", matches!(resolver.get_cli(), Err(Error::NotYetLoaded))),
            ("get_schematics", matches!(resolver.get_schematics(), Err(Error::NotYetLoaded))),
            ("get_architect", matches!(resolver.get_architect(), Err(Error::NotYetLoaded))),
            ("get_project_cli", matches!(resolver.get_project_cli("app"), Err(Error::NotYetLoaded))),
            ("get_project_schematics", matches!(resolver.get_project_schematics("app"), Err(Error::NotYetLoaded))),
            ("get_project_architect", matches!(resolver.get_project_architect("app"), Err(Error::NotYetLoaded))),
            ("get_project_by_path", matches!(resolver.get_project_by_path("projects/app"), Err(Error::NotYetLoaded))),
            ("document", matches!(resolver.document(), Err(Error::NotYetLoaded))),
        ];

        for (accessor, not_loaded) in results {
            assert!(not_loaded, "{accessor} should fail with NotYetLoaded");
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

mod accessor_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_version_and_new_project_root() {
        let resolver = loaded(documents::multi_project()).await;
        assert_eq!(resolver.version().unwrap(), 1);
        assert_eq!(resolver.new_project_root().unwrap(), Some("./projects"));

        let resolver = loaded(documents::empty()).await;
        assert_eq!(resolver.new_project_root().unwrap(), None);
    }

    #[tokio::test]
    async fn test_project_roots_round_trip() {
        let document = documents::multi_project();
        let resolver = loaded(document.clone()).await;

        for (name, project) in document["projects"].as_object().unwrap() {
            let view = resolver.get_project(name).unwrap();
            assert_eq!(view.root, project["root"].as_str().unwrap());
        }
    }

    #[tokio::test]
    async fn test_get_project_view_fields() {
        let resolver = loaded(documents::multi_project()).await;

        let app = resolver.get_project("app").unwrap();
        assert_eq!(app.root, "projects/app");
        assert_eq!(app.project_type, ProjectType::Application);
        assert_eq!(app.prefix.as_deref(), Some("app"));

        let lib = resolver.get_project("lib").unwrap();
        assert_eq!(lib.project_type, ProjectType::Library);
        assert_eq!(lib.prefix, None);
    }

    #[tokio::test]
    async fn test_project_view_strips_tool_config() {
        let resolver = loaded(documents::multi_project()).await;

        let app = resolver.get_project("app").unwrap();
        assert!(app.cli.is_empty());
        assert!(app.schematics.is_empty());
        assert!(app.architect.is_empty());

        assert_eq!(
            Value::Object(resolver.get_project_cli("app").unwrap().clone()),
            json!({ "warnings": { "versionMismatch": false } })
        );
        assert_eq!(
            Value::Object(resolver.get_project_schematics("app").unwrap().clone()),
            json!({ "@tool/generator:component": { "inlineStyle": true } })
        );
        assert_eq!(
            resolver.get_project_architect("app").unwrap()["build"]["options"]["outputPath"],
            "dist/app"
        );
    }

    #[tokio::test]
    async fn test_project_without_overrides_has_empty_tools() {
        let resolver = loaded(documents::multi_project()).await;
        assert!(resolver.get_project_cli("lib").unwrap().is_empty());
        assert!(resolver.get_project_schematics("lib").unwrap().is_empty());
        assert!(resolver.get_project_architect("lib").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_global_tool_config_passes_through_marker_keys() {
        let resolver = loaded(documents::multi_project()).await;

        let cli = resolver.get_cli().unwrap();
        let keys: Vec<&str> = cli.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["$globalOverride", "packageManager"]);
        assert_eq!(cli["$globalOverride"], json!({ "analytics": false }));

        assert!(resolver.get_schematics().unwrap().contains_key("@tool/generator:component"));
        assert_eq!(resolver.get_architect().unwrap()["lint"]["builder"], "@tool/lint:run");
    }

    #[tokio::test]
    async fn test_missing_tool_sections_are_empty() {
        let resolver = loaded(documents::empty()).await;
        assert!(resolver.get_cli().unwrap().is_empty());
        assert!(resolver.get_schematics().unwrap().is_empty());
        assert!(resolver.get_architect().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_project_names_keeps_document_order() {
        let resolver = loaded(json!({
            "version": 1,
            "projects": {
                "web": { "root": "apps/web", "projectType": "application" },
                "core": { "root": "libs/core", "projectType": "library" },
                "admin": { "root": "apps/admin", "projectType": "application" }
            }
        }))
        .await;

        assert_eq!(resolver.list_project_names().unwrap(), vec!["web", "core", "admin"]);
    }

    #[rstest]
    #[case::get_project("get_project")]
    #[case::get_project_cli("get_project_cli")]
    #[case::get_project_schematics("get_project_schematics")]
    #[case::get_project_architect("get_project_architect")]
    #[tokio::test]
    async fn test_missing_project_carries_name(#[case] accessor: &str) {
        let resolver = loaded(documents::multi_project()).await;

        let err = match accessor {
            "get_project" => resolver.get_project("abc").unwrap_err(),
            "get_project_cli" => resolver.get_project_cli("abc").unwrap_err(),
            "get_project_schematics" => resolver.get_project_schematics("abc").unwrap_err(),
            "get_project_architect" => resolver.get_project_architect("abc").unwrap_err(),
            other => unreachable!("unknown accessor {other}"),
        };

        match err {
            Error::ProjectNotFound { name } => assert_eq!(name, "abc"),
            other => panic!("expected ProjectNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_project_names_are_case_sensitive() {
        let resolver = loaded(documents::multi_project()).await;
        assert!(matches!(
            resolver.get_project("App"),
            Err(Error::ProjectNotFound { .. })
        ));
    }
}

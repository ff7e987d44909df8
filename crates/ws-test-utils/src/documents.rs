//! Canned workspace documents.
//!
//! Each function returns a fresh [`Value`] so tests can mutate it freely.

use serde_json::{Value, json};

/// A valid document with two projects, global tool settings and an
/// explicit `defaultProject`.
///
/// `app` carries non-empty overrides for all three tools; `lib` has none.
pub fn multi_project() -> Value {
    json!({
        "version": 1,
        "newProjectRoot": "./projects",
        "defaultProject": "app",
        "cli": {
            "$globalOverride": { "analytics": false },
            "packageManager": "npm"
        },
        "schematics": {
            "@tool/generator:component": { "style": "scss" }
        },
        "architect": {
            "lint": { "builder": "@tool/lint:run" }
        },
        "projects": {
            "app": {
                "root": "projects/app",
                "projectType": "application",
                "prefix": "app",
                "cli": { "warnings": { "versionMismatch": false } },
                "schematics": { "@tool/generator:component": { "inlineStyle": true } },
                "architect": {
                    "build": {
                        "builder": "@tool/build:browser",
                        "options": { "outputPath": "dist/app" }
                    }
                }
            },
            "lib": {
                "root": "projects/lib",
                "projectType": "library"
            }
        }
    })
}

/// A valid document with exactly one project and no `defaultProject`.
pub fn single_project() -> Value {
    json!({
        "version": 1,
        "projects": {
            "app": {
                "root": "",
                "projectType": "application",
                "prefix": "app",
                "architect": { "serve": { "builder": "@tool/serve:dev" } }
            }
        }
    })
}

/// A valid document with no projects at all.
pub fn empty() -> Value {
    json!({ "version": 1 })
}

/// A document the bundled schema rejects.
pub fn invalid() -> Value {
    json!({ "foo": "bar" })
}

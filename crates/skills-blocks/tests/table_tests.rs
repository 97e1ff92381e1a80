//! Integration tests for the Core Modules table rewriter.

use pretty_assertions::assert_eq;
use skills_blocks::update_table_rows;

const DOC: &str = "## Core Modules\n\n| Module | Description | Doc |\n|--------|-------------|-----|\n| old | Old module | [Details](references/module_old.md) |\n\n*Run `skills sync` to refresh.*\n\n## Footer\n";

fn rows() -> Vec<String> {
    vec![
        "| auth | Login flow | [Details](references/module_auth.md) |".to_string(),
        "| api | HTTP layer | [Details](references/module_api.md) |".to_string(),
    ]
}

#[test]
fn test_rows_replaced_and_surroundings_kept() {
    let updated = update_table_rows(DOC, &rows());
    assert_eq!(
        updated,
        "## Core Modules\n\n| Module | Description | Doc |\n|--------|-------------|-----|\n| auth | Login flow | [Details](references/module_auth.md) |\n| api | HTTP layer | [Details](references/module_api.md) |\n\n*Run `skills sync` to refresh.*\n\n## Footer\n"
    );
}

#[test]
fn test_rewrite_is_idempotent() {
    let once = update_table_rows(DOC, &rows());
    let twice = update_table_rows(&once, &rows());
    assert_eq!(once, twice);
}

#[test]
fn test_empty_table_gets_rows() {
    let doc = "| Module | Description | Doc |\n|---|---|---|\n\n*Run sync*";
    let updated = update_table_rows(doc, &rows()[..1]);
    assert_eq!(
        updated,
        "| Module | Description | Doc |\n|---|---|---|\n| auth | Login flow | [Details](references/module_auth.md) |\n\n*Run sync*"
    );
}

#[test]
fn test_missing_header_is_noop() {
    let doc = "| Name | Description |\n|---|---|\n\n*Run sync*";
    assert_eq!(update_table_rows(doc, &rows()), doc);
}

use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

use super::utils::{cli, start_test_server};

const ACCT_CONFIG: &str = "/restconf/data/openconfig-system:system/aaa/accounting/config";
const ACCT_METHOD: &str =
    "/restconf/data/openconfig-system:system/aaa/accounting/config/accounting-method";

#[test]
fn login_patches_the_accounting_branch() {
    let mut ctx = start_test_server();
    let patch = ctx
        .server
        .mock("PATCH", ACCT_CONFIG)
        .match_body(Matcher::Json(json!({
            "openconfig-system:config": {
                "accounting-method": ["tacacs+", "local"]
            }
        })))
        .with_status(204)
        .create();

    cli(&ctx)
        .args(["accounting", "login", "tacacs+", "local"])
        .assert()
        .success();
    patch.assert();
}

#[test]
fn disable_delegates_to_delete() {
    // `disable` removes the accounting configuration; it must never be
    // sent as a method name
    let mut ctx = start_test_server();
    let patch = ctx.server.mock("PATCH", ACCT_CONFIG).expect(0).create();
    let delete = ctx
        .server
        .mock("DELETE", ACCT_METHOD)
        .with_status(204)
        .create();

    cli(&ctx)
        .args(["accounting", "login", "disable"])
        .assert()
        .success();
    patch.assert();
    delete.assert();
}

#[test]
fn blank_login_method_is_rejected_locally() {
    let mut ctx = start_test_server();
    let patch = ctx.server.mock("PATCH", ACCT_CONFIG).expect(0).create();

    cli(&ctx)
        .args(["accounting", "login", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "At least one accounting method is required",
        ));
    patch.assert();
}

#[test]
fn clear_login_deletes_the_method_list() {
    let mut ctx = start_test_server();
    let delete = ctx
        .server
        .mock("DELETE", ACCT_METHOD)
        .with_status(204)
        .create();

    cli(&ctx)
        .args(["accounting", "clear-login"])
        .assert()
        .success();
    delete.assert();
}

use std::{fs::File, io::Write};

use assert_cmd::Command;
use sonic_rest_client::SONIC_CLI_CONF_ENV;
use tempfile::TempDir;

use super::PROG_NAME;

/// A mock RESTCONF server plus a CLI conf file pointing at it.
pub(crate) struct TestCtx {
    pub server: mockito::ServerGuard,
    conf_path: String,
    _conf_dir: TempDir,
}

pub(crate) fn start_test_server() -> TestCtx {
    let server = mockito::Server::new();

    let conf_dir = TempDir::new().unwrap();
    let conf_path = conf_dir.path().join("sonic_cli.json");
    let mut conf = File::create(&conf_path).unwrap();
    write!(conf, r#"{{"server_url": "{}"}}"#, server.url()).unwrap();

    TestCtx {
        server,
        conf_path: conf_path.to_string_lossy().into_owned(),
        _conf_dir: conf_dir,
    }
}

/// A command running the actioner binary against the test context.
pub(crate) fn cli(ctx: &TestCtx) -> Command {
    let mut cmd = Command::cargo_bin(PROG_NAME).unwrap();
    cmd.env(SONIC_CLI_CONF_ENV, &ctx.conf_path);
    cmd
}

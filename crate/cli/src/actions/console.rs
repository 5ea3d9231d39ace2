use super::show::AaaDisplay;

pub const SONIC_CLI_FORMAT: &str = "SONIC_CLI_FORMAT";
pub const CLI_DEFAULT_FORMAT: &str = "text";
pub const CLI_JSON_FORMAT: &str = "json";

/// Render a display record against the named template.
///
/// Rendering is total: an unknown template identifier falls back to the
/// standard text layout, and `SONIC_CLI_FORMAT=json` bypasses templates
/// entirely.
pub fn render(template: &str, display: &AaaDisplay) {
    let json_format_from_env = std::env::var(SONIC_CLI_FORMAT)
        .unwrap_or_else(|_| CLI_DEFAULT_FORMAT.to_owned())
        .to_lowercase()
        == CLI_JSON_FORMAT;

    if json_format_from_env {
        let console_stdout = serde_json::to_string_pretty(display)
            .unwrap_or_else(|_| "{}".to_owned());
        println!("{console_stdout}");
        return;
    }

    // only one text layout is defined for AAA today; unknown template
    // identifiers fall back to it
    if template != "show_aaa.j2" {
        tracing::debug!("unknown template {template}, using the standard AAA layout");
    }
    render_show_aaa(display);
}

fn render_show_aaa(display: &AaaDisplay) {
    println!("AAA Authentication Information");
    println!("---------------------------------------------------------");
    println!("failthrough  : {}", display.authentication.failthrough);
    println!("fallback     : {}", display.authentication.fallback);
    println!("debug        : {}", display.authentication.debug);
    println!("trace        : {}", display.authentication.trace);
    println!("login-method : {}", display.authentication.login);
    println!();
    println!("AAA Authorization Information");
    println!("---------------------------------------------------------");
    println!("login-method : {}", display.authorization.login);
    println!();
    println!("AAA Accounting Information");
    println!("---------------------------------------------------------");
    println!("login-method : {}", display.accounting.login);
}

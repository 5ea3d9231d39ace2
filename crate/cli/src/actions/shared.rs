use serde_json::json;
use sonic_rest_client::RestClient;

use crate::{cli_bail, error::result::CliResult, error::CliError};

/// Root of the AAA subtree in the openconfig-system model.
pub const AAA_PATH: &str = "/restconf/data/openconfig-system:system/aaa";

/// CLI keyword reverting an attribute to its system default (a DELETE,
/// never a PATCH with a default value).
pub const DEFAULT_SENTINEL: &str = "default";

/// Build the AAA REST path, optionally joined with a sub-path.
pub fn aaa_path(subpath: Option<&str>) -> String {
    match subpath {
        Some(subpath) => format!("{AAA_PATH}/{}", subpath.trim_start_matches('/')),
        None => AAA_PATH.to_owned(),
    }
}

/// Map an enable/disable CLI option to its boolean value.
pub fn option_to_bool(option: &str) -> Option<bool> {
    match option {
        "enable" => Some(true),
        "disable" => Some(false),
        _ => None,
    }
}

/// Collect up to two method arguments into an ordered list, dropping
/// blank candidates. Emptiness of the result is for callers to check.
pub fn methods_to_list(method1: &str, method2: Option<&str>) -> Vec<String> {
    let mut methods = Vec::with_capacity(2);
    if !method1.trim().is_empty() {
        methods.push(method1.to_owned());
    }
    if let Some(method2) = method2 {
        if !method2.trim().is_empty() {
            methods.push(method2.to_owned());
        }
    }
    methods
}

/// The boolean AAA attributes, all living under `authentication/config`
/// in the openconfig-system-ext augmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoolAttribute {
    Failthrough,
    Fallback,
    Debug,
    Trace,
}

impl BoolAttribute {
    /// Qualified leaf name on the wire.
    pub const fn leaf(self) -> &'static str {
        match self {
            Self::Failthrough => "openconfig-system-ext:failthrough",
            Self::Fallback => "openconfig-system-ext:fallback",
            Self::Debug => "openconfig-system-ext:debug",
            Self::Trace => "openconfig-system-ext:trace",
        }
    }
}

/// The three AAA branches carrying a login method list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodFamily {
    Authentication,
    Authorization,
    Accounting,
}

impl MethodFamily {
    pub const fn branch(self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::Accounting => "accounting",
        }
    }

    /// Name of the method-list leaf under `<branch>/config`.
    pub const fn method_leaf(self) -> &'static str {
        match self {
            Self::Authentication => "authentication-method",
            Self::Authorization => "authorization-method",
            Self::Accounting => "accounting-method",
        }
    }
}

/// PATCH one boolean attribute under `authentication/config`, or delegate
/// to [`clear_bool_attribute`] when the `default` sentinel is supplied.
///
/// An option that maps to neither boolean is rejected before any network
/// call.
pub async fn set_bool_attribute(
    client: &RestClient,
    attribute: BoolAttribute,
    option: &str,
) -> CliResult<()> {
    if option == DEFAULT_SENTINEL {
        return clear_bool_attribute(client, attribute).await;
    }

    let Some(value) = option_to_bool(option) else {
        cli_bail!(CliError::InvalidOption(option.to_owned()));
    };

    let body = json!({
        "openconfig-system:config": {
            attribute.leaf(): value
        }
    });
    client
        .patch(&aaa_path(Some("authentication/config")), &body)
        .await?;
    Ok(())
}

/// DELETE one boolean attribute, reverting it to its system default.
pub async fn clear_bool_attribute(
    client: &RestClient,
    attribute: BoolAttribute,
) -> CliResult<()> {
    client
        .delete(&aaa_path(Some(&format!(
            "authentication/config/{}",
            attribute.leaf()
        ))))
        .await?;
    Ok(())
}

/// PATCH the ordered login method list of one AAA branch.
///
/// An empty list is rejected before any network call; the store must
/// never receive an empty method list.
pub async fn set_login_methods(
    client: &RestClient,
    family: MethodFamily,
    method1: &str,
    method2: Option<&str>,
) -> CliResult<()> {
    let methods = methods_to_list(method1, method2);
    if methods.is_empty() {
        cli_bail!("At least one {} method is required", family.branch());
    }

    let body = json!({
        "openconfig-system:config": {
            family.method_leaf(): methods
        }
    });
    client
        .patch(&aaa_path(Some(&format!("{}/config", family.branch()))), &body)
        .await?;
    Ok(())
}

/// DELETE the login method list of one AAA branch.
pub async fn clear_login_methods(client: &RestClient, family: MethodFamily) -> CliResult<()> {
    client
        .delete(&aaa_path(Some(&format!(
            "{}/config/{}",
            family.branch(),
            family.method_leaf()
        ))))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{aaa_path, methods_to_list, option_to_bool, BoolAttribute, MethodFamily, AAA_PATH};

    #[test]
    fn path_without_subpath_is_the_root() {
        assert_eq!(aaa_path(None), AAA_PATH);
    }

    #[test]
    fn path_joins_subpath() {
        assert_eq!(
            aaa_path(Some("authentication/config")),
            "/restconf/data/openconfig-system:system/aaa/authentication/config"
        );
        // a leading slash on the subpath does not double up
        assert_eq!(
            aaa_path(Some("/authentication/config")),
            "/restconf/data/openconfig-system:system/aaa/authentication/config"
        );
    }

    #[test]
    fn option_mapping_is_total() {
        assert_eq!(option_to_bool("enable"), Some(true));
        assert_eq!(option_to_bool("disable"), Some(false));
        assert_eq!(option_to_bool("garbage"), None);
        assert_eq!(option_to_bool(""), None);
        // case sensitive, as the vendor CLI only ever passes lowercase
        assert_eq!(option_to_bool("Enable"), None);
    }

    #[test]
    fn methods_keep_caller_order() {
        assert_eq!(
            methods_to_list("tacacs+", Some("local")),
            vec!["tacacs+".to_owned(), "local".to_owned()]
        );
        assert_eq!(
            methods_to_list("local", Some("tacacs+")),
            vec!["local".to_owned(), "tacacs+".to_owned()]
        );
    }

    #[test]
    fn blank_methods_are_dropped() {
        assert_eq!(methods_to_list("", None), Vec::<String>::new());
        assert_eq!(methods_to_list("  ", Some("")), Vec::<String>::new());
        assert_eq!(methods_to_list("", Some("local")), vec!["local".to_owned()]);
        assert_eq!(methods_to_list("local", None), vec!["local".to_owned()]);
    }

    #[test]
    fn qualified_leaf_names() {
        assert_eq!(
            BoolAttribute::Failthrough.leaf(),
            "openconfig-system-ext:failthrough"
        );
        assert_eq!(BoolAttribute::Trace.leaf(), "openconfig-system-ext:trace");
        assert_eq!(MethodFamily::Accounting.method_leaf(), "accounting-method");
    }
}

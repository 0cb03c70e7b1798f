//! Catalogue of backend calls made by the settings and mining views.
//!
//! Each struct is one call. Field names serialize exactly as the backend
//! reads them, which is camelCase for most calls and snake_case for a few
//! older ones (`allow_telemetry`).

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A named backend operation with a fixed payload and reply type
pub trait BackendCommand: Serialize {
    const NAME: &'static str;
    type Response: DeserializeOwned;
}

/// Where the base node runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    #[default]
    Local,
    Remote,
    /// Use a remote node until the local one has synced
    RemoteUntilLocal,
}

impl NodeType {
    pub const fn next(self) -> Self {
        match self {
            NodeType::Local => NodeType::Remote,
            NodeType::Remote => NodeType::RemoteUntilLocal,
            NodeType::RemoteUntilLocal => NodeType::Local,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            NodeType::Local => "Local",
            NodeType::Remote => "Remote",
            NodeType::RemoteUntilLocal => "Remote & Local",
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    System,
    Dark,
    Light,
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebLogLevel {
    Log,
    Error,
    Warn,
    Info,
}

macro_rules! payload_less {
    ($($ty:ident => $name:literal -> $resp:ty;)*) => {
        $(
            #[allow(dead_code)]
            #[derive(Clone, Copy, Debug, Default, Serialize)]
            pub struct $ty;

            impl BackendCommand for $ty {
                const NAME: &'static str = $name;
                type Response = $resp;
            }
        )*
    };
}

payload_less! {
    FrontendReady => "frontend_ready" -> ();
    OpenLogDir => "open_log_dir" -> ();
    StartCpuMining => "start_cpu_mining" -> ();
    StopCpuMining => "stop_cpu_mining" -> ();
    StartGpuMining => "start_gpu_mining" -> ();
    StopGpuMining => "stop_gpu_mining" -> ();
    ExitApplication => "exit_application" -> String;
    CheckForUpdates => "check_for_updates" -> Option<String>;
    IsPinLocked => "is_pin_locked" -> bool;
    IsSeedBackedUp => "is_seed_backed_up" -> bool;
    GetSeedWords => "get_seed_words" -> Vec<String>;
}

// === Display and general settings ===

#[derive(Clone, Debug, Serialize)]
pub struct SetVisualMode {
    pub enabled: bool,
}

impl BackendCommand for SetVisualMode {
    const NAME: &'static str = "set_visual_mode";
    type Response = ();
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetShouldAlwaysUseSystemLanguage {
    pub should_always_use_system_language: bool,
}

impl BackendCommand for SetShouldAlwaysUseSystemLanguage {
    const NAME: &'static str = "set_should_always_use_system_language";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetApplicationLanguage {
    /// Language code, e.g. `en` or `pt-BR`
    pub application_language: String,
}

impl BackendCommand for SetApplicationLanguage {
    const NAME: &'static str = "set_application_language";
    type Response = ();
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNodeType {
    pub node_type: NodeType,
}

impl BackendCommand for SetNodeType {
    const NAME: &'static str = "set_node_type";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetShouldAutoLaunch {
    pub should_auto_launch: bool,
}

impl BackendCommand for SetShouldAutoLaunch {
    const NAME: &'static str = "set_should_auto_launch";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPreRelease {
    pub pre_release: bool,
}

impl BackendCommand for SetPreRelease {
    const NAME: &'static str = "set_pre_release";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct SetAllowTelemetry {
    pub allow_telemetry: bool,
}

impl BackendCommand for SetAllowTelemetry {
    const NAME: &'static str = "set_allow_telemetry";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDisplayMode {
    pub display_mode: DisplayMode,
}

impl BackendCommand for SetDisplayMode {
    const NAME: &'static str = "set_display_mode";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSettings {
    pub reset_wallet: bool,
}

impl BackendCommand for ResetSettings {
    const NAME: &'static str = "reset_settings";
    type Response = String;
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartApplication {
    pub should_stop_miners: bool,
}

impl BackendCommand for RestartApplication {
    const NAME: &'static str = "restart_application";
    type Response = String;
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct LogWebMessage {
    pub level: WebLogLevel,
    pub message: String,
}

impl BackendCommand for LogWebMessage {
    const NAME: &'static str = "log_web_message";
    type Response = serde_json::Value;
}

// === Mining ===

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMineOnAppStart {
    pub mine_on_app_start: bool,
}

impl BackendCommand for SetMineOnAppStart {
    const NAME: &'static str = "set_mine_on_app_start";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct SetCpuMiningEnabled {
    pub enabled: bool,
}

impl BackendCommand for SetCpuMiningEnabled {
    const NAME: &'static str = "set_cpu_mining_enabled";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct SetGpuMiningEnabled {
    pub enabled: bool,
}

impl BackendCommand for SetGpuMiningEnabled {
    const NAME: &'static str = "set_gpu_mining_enabled";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct SelectMiningMode {
    pub mode: String,
}

impl BackendCommand for SelectMiningMode {
    const NAME: &'static str = "select_mining_mode";
    type Response = ();
}

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomMiningMode {
    pub custom_cpu_usage: u32,
    pub custom_gpu_usage: u32,
}

impl BackendCommand for UpdateCustomMiningMode {
    const NAME: &'static str = "update_custom_mining_mode";
    type Response = ();
}

// === Wallet ===

#[allow(dead_code)]
#[derive(Clone, Debug, Serialize)]
pub struct ValidateMinotariAmount {
    pub amount: String,
}

impl BackendCommand for ValidateMinotariAmount {
    const NAME: &'static str = "validate_minotari_amount";
    type Response = String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_payloads() {
        let value = serde_json::to_value(SetShouldAlwaysUseSystemLanguage {
            should_always_use_system_language: true,
        })
        .unwrap();
        assert_eq!(value, json!({ "shouldAlwaysUseSystemLanguage": true }));

        let value = serde_json::to_value(UpdateCustomMiningMode {
            custom_cpu_usage: 40,
            custom_gpu_usage: 90,
        })
        .unwrap();
        assert_eq!(value, json!({ "customCpuUsage": 40, "customGpuUsage": 90 }));
    }

    #[test]
    fn test_snake_case_payloads_stay_snake_case() {
        let value = serde_json::to_value(SetAllowTelemetry {
            allow_telemetry: false,
        })
        .unwrap();
        assert_eq!(value, json!({ "allow_telemetry": false }));
    }

    #[test]
    fn test_enum_payloads() {
        let value = serde_json::to_value(SetNodeType {
            node_type: NodeType::RemoteUntilLocal,
        })
        .unwrap();
        assert_eq!(value, json!({ "nodeType": "RemoteUntilLocal" }));

        let value = serde_json::to_value(SetDisplayMode {
            display_mode: DisplayMode::Dark,
        })
        .unwrap();
        assert_eq!(value, json!({ "displayMode": "dark" }));

        let value = serde_json::to_value(LogWebMessage {
            level: WebLogLevel::Warn,
            message: "tower failed".into(),
        })
        .unwrap();
        assert_eq!(value, json!({ "level": "warn", "message": "tower failed" }));
    }

    #[test]
    fn test_names() {
        assert_eq!(SetVisualMode::NAME, "set_visual_mode");
        assert_eq!(FrontendReady::NAME, "frontend_ready");
        assert_eq!(CheckForUpdates::NAME, "check_for_updates");
        assert_eq!(SetApplicationLanguage::NAME, "set_application_language");
    }

    #[test]
    fn test_node_type_cycle() {
        let mut node = NodeType::default();
        let mut seen = vec![node];
        for _ in 0..2 {
            node = node.next();
            seen.push(node);
        }
        assert_eq!(
            seen,
            vec![NodeType::Local, NodeType::Remote, NodeType::RemoteUntilLocal]
        );
        assert_eq!(node.next(), NodeType::Local);
        assert_eq!(NodeType::RemoteUntilLocal.label(), "Remote & Local");
    }
}

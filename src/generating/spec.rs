use clap::ValueEnum;
use serde::Deserialize;

/// host alias used when none is configured
pub(crate) const DEFAULT_NAME: &str = "jupyter-tunnel";

#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum TunnelMode {
    /// single ssh connection to the bastion, which forwards traffic to the
    /// internal host
    #[default]
    #[serde(alias = "forward", alias = "FORWARD")]
    #[value(name = "forward")]
    ForwardThroughBastion,
    /// ssh connection to the internal host itself, routed through the bastion
    /// with -J, with the port forward set up on the same connection
    #[serde(alias = "jump", alias = "JUMP")]
    #[value(name = "jump")]
    JumpHost,
}

/// Everything needed to describe one tunnel. All fields are opaque text that
/// gets substituted verbatim into the generated output, ports included: a
/// non-numeric or empty value produces a malformed-looking but still
/// well-formed string, never an error.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct TunnelSpec {
    /// host alias for the generated ~/.ssh/config block
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub mode: TunnelMode,
    /// port bound on the local machine
    pub local_port: String,
    /// port the service listens on behind the bastion
    pub remote_port: String,
    /// the intermediate machine that is reachable from outside
    pub bastion_host: String,
    /// the internal machine running the service
    pub remote_host: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

use clap::{Parser, ValueEnum};

use crate::generating::spec::{DEFAULT_NAME, TunnelMode, TunnelSpec};

#[derive(Parser)]
#[command(version, about = "Sshforge builds SSH port-forwarding and jump-host commands for reaching services that hide behind a bastion", long_about = None)]
pub(crate) struct SshforgeCli {
    /// render every tunnel from a toml config file instead of the flags below
    #[arg(short, long)]
    pub config: Option<String>,
    /// connection mode
    #[arg(short, long, value_enum, default_value = "forward")]
    pub mode: TunnelMode,
    /// host alias for the generated config block
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,
    /// port to bind on the local machine
    #[arg(short, long, default_value = "8888")]
    pub local_port: String,
    /// port the service listens on behind the bastion
    #[arg(short, long, default_value = "8000")]
    pub remote_port: String,
    /// the bastion (jump) host
    #[arg(short, long, default_value = "bastion.example.com")]
    pub bastion_host: String,
    /// the internal host running the service
    #[arg(long, default_value = "jupyter.internal")]
    pub remote_host: String,
    /// which generated text to print
    #[arg(short, long, value_enum, default_value = "all")]
    pub output: OutputKind,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub(crate) enum OutputKind {
    /// just the ssh invocation
    Command,
    /// just the ~/.ssh/config block(s)
    Snippet,
    /// just the usage hints
    Usage,
    /// command, snippet and usage hints
    All,
}

impl SshforgeCli {
    pub fn to_spec(&self) -> TunnelSpec {
        TunnelSpec {
            name: self.name.clone(),
            mode: self.mode,
            local_port: self.local_port.clone(),
            remote_port: self.remote_port.clone(),
            bastion_host: self.bastion_host.clone(),
            remote_host: self.remote_host.clone(),
        }
    }
}

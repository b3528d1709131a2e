use super::spec::{TunnelMode, TunnelSpec};

/// Renders the ssh invocation for a tunnel spec.
///
/// Total over every input: fields land in the template as-is, no validation
/// and no shell escaping. The output is meant to be shown to the user, not
/// executed by this program.
pub(crate) fn generate_command(spec: &TunnelSpec) -> String {
    match spec.mode {
        TunnelMode::ForwardThroughBastion => format!(
            "ssh -L {}:{}:{} {}",
            spec.local_port, spec.remote_host, spec.remote_port, spec.bastion_host
        ),
        TunnelMode::JumpHost => format!(
            "ssh -L {}:localhost:{} -J {} {}",
            spec.local_port, spec.remote_port, spec.bastion_host, spec.remote_host
        ),
    }
}

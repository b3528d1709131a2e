use super::spec::{TunnelMode, TunnelSpec};

/// Renders a ~/.ssh/config block (two blocks in jump mode) matching the
/// generated command. The User lines are placeholders for the reader to fill
/// in.
pub(crate) fn generate_config_snippet(spec: &TunnelSpec) -> String {
    match spec.mode {
        TunnelMode::ForwardThroughBastion => format!(
            "Host {name}\n\
             \x20   HostName {bastion}\n\
             \x20   LocalForward {local_port} {remote}:{remote_port}\n\
             \x20   User your-username",
            name = spec.name,
            bastion = spec.bastion_host,
            local_port = spec.local_port,
            remote = spec.remote_host,
            remote_port = spec.remote_port,
        ),
        TunnelMode::JumpHost => format!(
            "# Jump host configuration\n\
             Host {bastion}\n\
             \x20   HostName {bastion}\n\
             \x20   User your-username\n\
             \n\
             # Remote host configuration\n\
             Host {remote}\n\
             \x20   HostName {remote}\n\
             \x20   ProxyJump {bastion}\n\
             \x20   User your-username",
            bastion = spec.bastion_host,
            remote = spec.remote_host,
        ),
    }
}

/// One-line reminder of how to use the tunnel once the snippet is in place.
pub(crate) fn usage_hint(spec: &TunnelSpec) -> String {
    match spec.mode {
        TunnelMode::ForwardThroughBastion => {
            format!("Then you can simply run: ssh {}", spec.name)
        }
        TunnelMode::JumpHost => format!(
            "Then you can run: ssh -L {}:localhost:{} {}",
            spec.local_port, spec.remote_port, spec.remote_host
        ),
    }
}

/// Where the forwarded service ends up being reachable locally.
pub(crate) fn browser_hint(spec: &TunnelSpec) -> String {
    format!("http://localhost:{}/", spec.local_port)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jupyter_spec(mode: TunnelMode) -> TunnelSpec {
        TunnelSpec {
            name: String::from("jupyter-tunnel"),
            mode,
            local_port: String::from("8888"),
            remote_port: String::from("8000"),
            bastion_host: String::from("bastion.example.com"),
            remote_host: String::from("jupyter.internal"),
        }
    }

    #[test]
    fn check_forward_snippet() {
        let snippet = generate_config_snippet(&jupyter_spec(TunnelMode::ForwardThroughBastion));
        assert_eq!(
            snippet,
            "Host jupyter-tunnel\n\
             \x20   HostName bastion.example.com\n\
             \x20   LocalForward 8888 jupyter.internal:8000\n\
             \x20   User your-username"
        );
    }

    #[test]
    fn check_jump_snippet_has_both_blocks() {
        let snippet = generate_config_snippet(&jupyter_spec(TunnelMode::JumpHost));
        assert!(snippet.contains("Host bastion.example.com"));
        assert!(snippet.contains(
            "Host jupyter.internal\n\
             \x20   HostName jupyter.internal\n\
             \x20   ProxyJump bastion.example.com"
        ));
    }

    #[test]
    fn check_usage_hints() {
        assert_eq!(
            usage_hint(&jupyter_spec(TunnelMode::ForwardThroughBastion)),
            "Then you can simply run: ssh jupyter-tunnel"
        );
        assert_eq!(
            usage_hint(&jupyter_spec(TunnelMode::JumpHost)),
            "Then you can run: ssh -L 8888:localhost:8000 jupyter.internal"
        );
    }

    #[test]
    fn check_browser_hint() {
        assert_eq!(
            browser_hint(&jupyter_spec(TunnelMode::ForwardThroughBastion)),
            "http://localhost:8888/"
        );
    }

    #[test]
    fn check_empty_fields_still_render() {
        let spec = TunnelSpec {
            name: String::new(),
            mode: TunnelMode::JumpHost,
            local_port: String::new(),
            remote_port: String::new(),
            bastion_host: String::new(),
            remote_host: String::new(),
        };
        let snippet = generate_config_snippet(&spec);
        assert!(snippet.contains("ProxyJump \n"));
    }
}

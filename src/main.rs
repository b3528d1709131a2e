use clap::Parser;
use cli::{OutputKind, SshforgeCli};
use config::ConfigError;
use generating::command::generate_command;
use generating::snippet::{browser_hint, generate_config_snippet, usage_hint};
use generating::spec::TunnelSpec;

mod cli;
mod config;
mod generating;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt::init();
    let cli = SshforgeCli::parse();
    let specs: Vec<TunnelSpec> = match &cli.config {
        Some(path) => {
            let loaded_config = config::load(path)?;
            tracing::info!(
                "loaded {} tunnel(s) from {}",
                loaded_config.tunnels.len(),
                path
            );
            loaded_config.tunnels
        }
        None => vec![cli.to_spec()],
    };

    for (i, spec) in specs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        tracing::debug!("rendering tunnel {:?}", spec.name);
        render(spec, cli.output);
    }
    Ok(())
}

fn render(spec: &TunnelSpec, output: OutputKind) {
    match output {
        OutputKind::Command => println!("{}", generate_command(spec)),
        OutputKind::Snippet => println!("{}", generate_config_snippet(spec)),
        OutputKind::Usage => {
            println!("{}", usage_hint(spec));
            println!("Open in your browser: {}", browser_hint(spec));
        }
        OutputKind::All => {
            println!("{}", generate_command(spec));
            println!();
            println!("Add this to your ~/.ssh/config file for easy access:");
            println!("{}", generate_config_snippet(spec));
            println!();
            println!("{}", usage_hint(spec));
            println!("Open in your browser: {}", browser_hint(spec));
        }
    }
}

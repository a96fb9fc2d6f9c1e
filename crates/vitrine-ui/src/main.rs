#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Vitrine editor state entry point.
//!
//! On wasm32 this mounts the site configuration against the live document.
//! Natively it prints the state and head stylesheets a runtime config yields.

#[cfg(target_arch = "wasm32")]
fn main() {
    match vitrine_ui::mount_site_configuration() {
        Ok(configuration) => {
            gloo::console::log!("site configuration ready", configuration.current_font());
        }
        Err(err) => gloo::console::error!("site configuration unavailable", err.to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = preview::Cli::parse();
    let format = vitrine_telemetry::LogFormat::from_name(cli.log_format.as_deref());
    vitrine_telemetry::init_logging(&vitrine_telemetry::LoggingConfig {
        format,
        ..vitrine_telemetry::LoggingConfig::default()
    })?;
    let report = preview::render(&cli)?;
    println!("{report}");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::redundant_pub_crate)]
mod preview {
    use clap::Parser;
    use serde_json::json;
    use vitrine_ui::{MemoryHeadWriter, RuntimeConfig, SiteConfiguration};

    #[derive(Debug, Parser)]
    #[command(
        name = "vitrine-ui",
        about = "Preview the editor state produced by a runtime configuration"
    )]
    pub(crate) struct Cli {
        /// Shop display font; defaults to `VITRINE_PUBLIC_FONT`.
        #[arg(long)]
        pub(crate) font: Option<String>,
        /// Fonts to load after start-up, in order.
        #[arg(long = "load-font", value_name = "NAME")]
        pub(crate) load_fonts: Vec<String>,
        /// Log output format (`pretty` or `json`).
        #[arg(long, env = "VITRINE_LOG_FORMAT")]
        pub(crate) log_format: Option<String>,
    }

    pub(crate) fn render(cli: &Cli) -> serde_json::Result<String> {
        let runtime = cli
            .font
            .as_deref()
            .map_or_else(RuntimeConfig::from_env, RuntimeConfig::with_font);
        let mut configuration = SiteConfiguration::new(MemoryHeadWriter::default(), &runtime);
        for font in &cli.load_fonts {
            configuration.load_font(font);
        }
        serde_json::to_string_pretty(&json!({
            "state": configuration.state(),
            "stylesheets": configuration.head().stylesheets(),
        }))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use clap::Parser;

    use vitrine_ui::config::PUBLIC_FONT_ENV;
    use vitrine_ui::site_configuration::fonts::font_style;

    use super::preview::{Cli, render};

    #[test]
    fn preview_lists_loaded_stylesheets() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "vitrine-ui",
            "--font",
            "industry",
            "--load-font",
            "Roboto",
            "--load-font",
            "Roboto",
        ])?;
        let report: serde_json::Value = serde_json::from_str(&render(&cli)?)?;
        let stylesheets = report["stylesheets"].as_array().cloned().unwrap_or_default();
        assert_eq!(stylesheets.len(), 2);
        assert_eq!(
            report["state"]["currentFont"],
            "font-family: 'Roboto', sans-serif"
        );
        Ok(())
    }

    #[test]
    fn preview_falls_back_to_environment_font() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["vitrine-ui"])?;
        let report: serde_json::Value = serde_json::from_str(&render(&cli)?)?;
        let env_font = std::env::var(PUBLIC_FONT_ENV).ok();
        assert_eq!(
            report["state"]["currentFont"],
            font_style(env_font.as_deref())
        );
        Ok(())
    }

    #[test]
    fn preview_without_font_has_empty_head() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["vitrine-ui", "--font", ""])?;
        let report: serde_json::Value = serde_json::from_str(&render(&cli)?)?;
        assert_eq!(report["state"]["currentFont"], "");
        assert_eq!(report["stylesheets"], serde_json::json!([]));
        Ok(())
    }
}

mod builtin;
mod cli;
mod content;
mod html;
mod server;
mod strict;
mod theme;

use std::io::Write as _;

use anyhow::Context as _;
use cli::Args;

pub use cli::{Args as CliArgs, Mode};
pub use content::{SECTIONS, Section};
pub use html::{PageOptions, render_page};
pub use server::router;
pub use strict::assert_page_consistent;
pub use theme::{ColorMode, Palette, THEME, Theme};

pub async fn run(args: Args) -> anyhow::Result<()> {
    let options = page_options(&args);

    match args.mode {
        Mode::Serve => {
            if args.dark || args.out.is_some() {
                tracing::warn!("--dark and --out only apply to --mode render; ignoring");
            }
            server::serve(&args.host, args.port, options, Some(args.public_dir.clone())).await
        }
        Mode::Render => render_once(&args, &options),
    }
}

fn page_options(args: &Args) -> PageOptions {
    PageOptions {
        stylesheet: if args.no_stylesheet {
            None
        } else {
            Some(args.stylesheet_url.clone())
        },
    }
}

fn render_once(args: &Args, options: &PageOptions) -> anyhow::Result<()> {
    let mode = if args.dark {
        ColorMode::Dark
    } else {
        ColorMode::Light
    };
    let page = render_page(mode, options);
    strict::assert_page_consistent(&page, mode)?;

    match &args.out {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("create {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, &page)
                .with_context(|| format!("write {}", out_path.display()))?;
            tracing::info!(path = %out_path.display(), ?mode, "rendered page");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(page.as_bytes())
                .context("write page to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

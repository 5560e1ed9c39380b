use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};
use og_card::request::DEFAULT_FONT_SIZE;
use og_card::{FontPayloads, FontSet, Layout, ParsedRequest, RenderConfig, Renderer, Theme};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render a social-preview card to HTML.
#[derive(Parser, Debug)]
#[command(name = "og-card", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "request"])))]
#[command(group(ArgGroup::new("fonts").required(true).args(["fonts_dir", "remote_fonts"])))]
struct Cli {
    /// Heading text
    #[arg(long)]
    text: Option<String>,

    /// Read the whole request from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,

    /// "dark" for the dark theme, anything else is light
    #[arg(long, default_value = "light")]
    theme: String,

    /// Treat the heading as markdown
    #[arg(long)]
    md: bool,

    /// Heading font size (CSS length)
    #[arg(long, default_value = DEFAULT_FONT_SIZE)]
    font_size: String,

    /// Image URL, repeat for more images
    #[arg(long = "image", value_name = "URL")]
    images: Vec<String>,

    /// Image width, by position
    #[arg(long = "width")]
    widths: Vec<String>,

    /// Image height, by position
    #[arg(long = "height")]
    heights: Vec<String>,

    #[arg(long)]
    caption: Option<String>,

    #[arg(long, default_value = "centered")]
    layout: Layout,

    /// Directory holding the font files to embed
    #[arg(long, value_name = "DIR")]
    fonts_dir: Option<PathBuf>,

    /// Base URL to load fonts from instead of embedding them
    #[arg(long, value_name = "URL")]
    remote_fonts: Option<String>,

    /// Clean markdown output with ammonia
    #[arg(long)]
    clean_markdown: bool,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    out: Option<PathBuf>,
}

fn load_fonts(dir: &Path) -> anyhow::Result<FontSet> {
    let payloads = FontPayloads::load_with(|name| {
        let path = dir.join(name);
        fs::read(&path).map_err(|e| og_card::Error::Font(format!("{}: {}", path.display(), e)))
    })?;
    Ok(FontSet::embedded(&payloads)?)
}

fn build_request(cli: &Cli) -> anyhow::Result<ParsedRequest> {
    if let Some(path) = &cli.request {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read request {}", path.display()))?;
        return serde_json::from_str(&data)
            .with_context(|| format!("invalid request JSON in {}", path.display()));
    }
    let Some(text) = cli.text.clone() else {
        bail!("either --text or --request is required");
    };
    Ok(ParsedRequest {
        text,
        theme: Theme::from_token(&cli.theme),
        md: cli.md,
        font_size: cli.font_size.clone(),
        images: cli.images.clone(),
        widths: cli.widths.clone(),
        heights: cli.heights.clone(),
        caption: cli.caption.clone(),
    })
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let req = build_request(&cli)?;
    let fonts = match (&cli.fonts_dir, &cli.remote_fonts) {
        (Some(dir), _) => load_fonts(dir)?,
        (None, Some(url)) => FontSet::remote(url),
        (None, None) => bail!("either --fonts-dir or --remote-fonts is required"),
    };
    let config = RenderConfig {
        layout: cli.layout,
        clean_markdown: cli.clean_markdown,
        ..Default::default()
    };

    let html = Renderer::new(config, fonts)?.render(&req)?;

    match &cli.out {
        Some(path) => fs::write(path, &html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(html.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("og-card: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_build_a_request() {
        let cli = Cli::parse_from([
            "og-card",
            "--text",
            "Hello",
            "--theme",
            "dark",
            "--image",
            "a.svg",
            "--image",
            "b.svg",
            "--width",
            "300",
            "--remote-fonts",
            "https://fonts.example.com",
        ]);
        let req = build_request(&cli).unwrap();
        assert_eq!(req.theme, Theme::Dark);
        assert_eq!(req.images, vec!["a.svg", "b.svg"]);
        assert_eq!(req.widths, vec!["300"]);
        assert_eq!(req.font_size, "96px");
        assert_eq!(cli.layout, Layout::Centered);
    }

    #[test]
    fn fonts_source_is_required() {
        assert!(Cli::try_parse_from(["og-card", "--text", "x"]).is_err());
    }

    #[test]
    fn layout_flag_parses() {
        let cli = Cli::try_parse_from([
            "og-card",
            "--text",
            "x",
            "--layout",
            "gradient",
            "--remote-fonts",
            "https://f",
        ])
        .unwrap();
        assert_eq!(cli.layout, Layout::Gradient);
    }
}

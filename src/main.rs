use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use title_image::engine::layouter::LayoutStyle;
use title_image::{CategoryMap, TitleImageGenerator};

/// Put a title banner over a category background image.
#[derive(Debug, Parser)]
#[command(name = "title-image", version)]
struct Cli {
    /// Background category (see --list)
    #[arg(required_unless_present = "list")]
    category: Option<String>,

    /// Title text; `\n` starts a new line, `$...$` marks emphasis
    #[arg(required_unless_present = "list")]
    text: Option<String>,

    /// Directory holding the background images
    #[arg(long, default_value = "images")]
    images: PathBuf,

    /// Category table file (`name = file` per line)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Font file path or font file name (without extension)
    #[arg(long)]
    font: Option<String>,

    /// Font size in pixels
    #[arg(long, default_value_t = LayoutStyle::default().font_size)]
    font_size: u32,

    /// Output path [default: <category>_.png]
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the known categories and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let categories = match &cli.categories {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read category table {}", path.display()))?
            .parse::<CategoryMap>()?,
        None => CategoryMap::default(),
    };

    if cli.list {
        for name in categories.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let category = cli.category.unwrap_or_default();
    let text = unescape_breaks(&cli.text.unwrap_or_default());
    if category.is_empty() {
        bail!("category must not be empty");
    }
    if text.is_empty() {
        bail!("title text must not be empty");
    }
    if !cli.images.is_dir() {
        bail!("image directory not found: {}", cli.images.display());
    }

    let style = LayoutStyle {
        font_size: cli.font_size,
        ..LayoutStyle::default()
    };
    let generator =
        TitleImageGenerator::with_system_font(&cli.images, categories, cli.font.as_deref(), style)
            .context("failed to prepare the generator")?;

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{category}_.png")));
    generator
        .generate(&category, &text, &out)
        .with_context(|| format!("failed to generate {}", out.display()))?;

    println!("saved {}", out.display());
    Ok(())
}

/// Turns literal `\n` sequences from the shell into line breaks.
fn unescape_breaks(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_breaks_become_newlines() {
        assert_eq!(unescape_breaks(r"a\nb"), "a\nb");
        assert_eq!(unescape_breaks("a\nb"), "a\nb");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn list_does_not_need_positionals() {
        let cli = Cli::try_parse_from(["title-image", "--list"]).unwrap();
        assert!(cli.list);
        assert!(cli.category.is_none());
    }
}
